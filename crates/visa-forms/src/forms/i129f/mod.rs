//! Projection of saved wizard answers onto the I-129F AcroForm.

pub mod fields;
mod sections;

pub use fields::I129F;

use super::answers::AnswersTree;
use super::assignments::{AssignmentWriter, FieldAssignments};
use super::descriptor::FieldDescriptor;
use super::template::{TemplateInventory, TemplateProfile};
use serde::Serialize;

/// Result of a mapping run together with the overrides the template refused.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingOutcome {
    pub assignments: FieldAssignments,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejected_overrides: Vec<String>,
}

/// Pure, total mapper from an [`AnswersTree`] to [`FieldAssignments`].
///
/// Without a template profile every name variant receives the value and every
/// override is applied. Bound to a profile, output is restricted to the names the
/// template actually has.
#[derive(Debug, Clone, Default)]
pub struct FieldMapper {
    profile: Option<TemplateProfile>,
}

impl FieldMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(inventory: TemplateInventory) -> Self {
        let profile = TemplateProfile::resolve(inventory, &Self::catalogue());
        Self {
            profile: Some(profile),
        }
    }

    pub fn profile(&self) -> Option<&TemplateProfile> {
        self.profile.as_ref()
    }

    /// Every descriptor of the form, in table order.
    pub fn catalogue() -> Vec<FieldDescriptor> {
        I129F.descriptors()
    }

    pub fn map(&self, answers: &AnswersTree) -> FieldAssignments {
        self.map_with_report(answers).assignments
    }

    pub fn map_with_report(&self, answers: &AnswersTree) -> MappingOutcome {
        let mut writer = AssignmentWriter::new(self.profile.as_ref());
        sections::map_form(&mut writer, &I129F, answers);
        let (assignments, rejected_overrides) = writer.finish();
        MappingOutcome {
            assignments,
            rejected_overrides,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PET_LAST: &str = "form1[0].#subform[0].Pt1Line6a_FamilyName[0]";
    const PET_MALE: &str = "form1[0].#subform[2].Pt1Line21_Male[0]";
    const PET_FEMALE: &str = "form1[0].#subform[2].Pt1Line21_Female[0]";

    #[test]
    fn empty_answers_produce_no_assignments() {
        let mapper = FieldMapper::new();
        assert!(mapper.map(&AnswersTree::new(json!({}))).is_empty());
        assert!(mapper.map(&AnswersTree::new(json!(null))).is_empty());
        assert!(mapper.map(&AnswersTree::new(json!("text"))).is_empty());
    }

    #[test]
    fn maps_petitioner_name_and_sex() {
        let answers = AnswersTree::new(json!({
            "petitioner": { "name": { "last": " Rivera " }, "sex": "F" }
        }));
        let out = FieldMapper::new().map(&answers);
        assert_eq!(out.text(PET_LAST), Some("Rivera"));
        assert_eq!(out.checked(PET_FEMALE), Some(true));
        assert_eq!(out.checked(PET_MALE), Some(false));
    }

    #[test]
    fn template_bound_mapper_rejects_unknown_overrides() {
        let mapper = FieldMapper::with_template(TemplateInventory::from_names([PET_LAST]));
        let answers = AnswersTree::new(json!({
            "petitioner": { "name": { "last": "Rivera" }, "sex": "m" },
            "other": { "Typo_Field[0]": "x", PET_LAST: "Override" }
        }));
        let outcome = mapper.map_with_report(&answers);
        assert_eq!(outcome.assignments.len(), 1);
        assert_eq!(outcome.assignments.text(PET_LAST), Some("Override"));
        assert_eq!(outcome.rejected_overrides, vec!["Typo_Field[0]".to_string()]);
    }

    #[test]
    fn outcome_omits_empty_rejection_list() {
        let outcome = FieldMapper::new().map_with_report(&AnswersTree::default());
        let value = serde_json::to_value(&outcome).expect("serializes");
        assert_eq!(value, json!({ "assignments": {} }));
    }
}
