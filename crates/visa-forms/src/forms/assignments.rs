use super::answers::Node;
use super::descriptor::{MaritalFields, SexFields, TextField, UnitFields, YesNoFields};
use super::normalizer::{classify_marital_status, classify_sex, classify_unit_type, format_date};
use super::template::TemplateProfile;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

/// Value destined for one physical field: text or checkbox state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Checked(bool),
    Text(String),
}

/// Flat physical-name to value map handed to the form filler.
///
/// A name is present only when an answer produced it; text values are never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldAssignments {
    fields: BTreeMap<String, FieldValue>,
}

impl FieldAssignments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.fields.get(name) {
            Some(FieldValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn checked(&self, name: &str) -> Option<bool> {
        match self.fields.get(name) {
            Some(FieldValue::Checked(flag)) => Some(*flag),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Trimmed text; blank input leaves the field untouched.
    pub fn set_text(&mut self, name: &str, value: &str) {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            self.fields
                .insert(name.to_string(), FieldValue::Text(trimmed.to_string()));
        }
    }

    pub fn set_checked(&mut self, name: &str, checked: bool) {
        self.fields
            .insert(name.to_string(), FieldValue::Checked(checked));
    }
}

impl IntoIterator for FieldAssignments {
    type Item = (String, FieldValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Writes normalized answers into [`FieldAssignments`], honoring a template profile
/// when one is bound.
pub(crate) struct AssignmentWriter<'p> {
    out: FieldAssignments,
    profile: Option<&'p TemplateProfile>,
    rejected_overrides: Vec<String>,
}

impl<'p> AssignmentWriter<'p> {
    pub(crate) fn new(profile: Option<&'p TemplateProfile>) -> Self {
        Self {
            out: FieldAssignments::new(),
            profile,
            rejected_overrides: Vec::new(),
        }
    }

    pub(crate) fn finish(self) -> (FieldAssignments, Vec<String>) {
        (self.out, self.rejected_overrides)
    }

    fn allows(&self, name: &str) -> bool {
        self.profile.map_or(true, |profile| profile.allows(name))
    }

    /// Same value to every physical target of the field.
    pub(crate) fn text_value(&mut self, field: &TextField, value: &str) {
        if value.trim().is_empty() {
            return;
        }

        match self.profile {
            Some(profile) => {
                for name in profile.targets(field) {
                    self.out.set_text(name, value);
                }
            }
            None => {
                for name in field.names() {
                    self.out.set_text(name, value);
                }
            }
        }
    }

    pub(crate) fn text(&mut self, field: &TextField, node: Node<'_>) {
        self.text_value(field, &node.text());
    }

    pub(crate) fn optional_text(&mut self, field: Option<&TextField>, node: Node<'_>) {
        if let Some(field) = field {
            self.text(field, node);
        }
    }

    pub(crate) fn date(&mut self, field: &TextField, node: Node<'_>) {
        self.text_value(field, &format_date(&node.text()));
    }

    pub(crate) fn checkbox(&mut self, name: &str, checked: bool) {
        if self.allows(name) {
            self.out.set_checked(name, checked);
        }
    }

    /// Checks the selected member and clears its siblings. `None` writes nothing.
    pub(crate) fn select<T: PartialEq>(&mut self, choices: &[(T, &str)], selected: Option<T>) {
        let Some(selected) = selected else {
            return;
        };

        for (tag, name) in choices {
            self.checkbox(name, *tag == selected);
        }
    }

    pub(crate) fn yes_no(&mut self, fields: &YesNoFields, answer: Option<bool>) {
        self.select(&fields.choices(), answer);
    }

    pub(crate) fn sex(&mut self, fields: &SexFields, node: Node<'_>) {
        self.select(&fields.choices(), classify_sex(&node.text()));
    }

    pub(crate) fn marital(&mut self, fields: &MaritalFields, node: Node<'_>) {
        self.select(&fields.choices(), classify_marital_status(&node.text()));
    }

    pub(crate) fn unit(&mut self, fields: &UnitFields, unit_type: Node<'_>, number: Node<'_>) {
        self.select(&fields.choices(), classify_unit_type(&unit_type.text()));
        self.text(&fields.number, number);
    }

    /// Explicit physical-name override. Wins over anything computed earlier.
    pub(crate) fn override_value(&mut self, name: &str, value: &Value) {
        if !self.allows(name) {
            warn!(field = name, "override references a field outside the template");
            self.rejected_overrides.push(name.to_string());
            return;
        }

        match value {
            Value::Bool(flag) => self.out.set_checked(name, *flag),
            Value::String(text) => self.out.set_text(name, text),
            Value::Number(number) => self.out.set_text(name, &number.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::answers::AnswersTree;
    use serde_json::json;

    const SEX: SexFields = SexFields {
        male: "Line7_Male[0]",
        female: "Line7_Female[0]",
    };

    const UNIT: UnitFields = UnitFields {
        apt: "Line8_Unit[0]",
        ste: "Line8_Unit[1]",
        flr: "Line8_Unit[2]",
        number: TextField::Variants(&["Line8_AptSteFlrNumber[0]", "Line8c_AptSteFlrNumber[0]"]),
    };

    #[test]
    fn set_text_skips_blank_values() {
        let mut assignments = FieldAssignments::new();
        assignments.set_text("a", "   ");
        assignments.set_text("b", " value ");
        assert!(!assignments.contains("a"));
        assert_eq!(assignments.text("b"), Some("value"));
    }

    #[test]
    fn serializes_as_flat_object_of_strings_and_booleans() {
        let mut assignments = FieldAssignments::new();
        assignments.set_text("name", "Ana");
        assignments.set_checked("box", true);
        let value = serde_json::to_value(&assignments).expect("serializes");
        assert_eq!(value, json!({ "box": true, "name": "Ana" }));

        let parsed: FieldAssignments = serde_json::from_value(value).expect("parses");
        assert_eq!(parsed, assignments);
    }

    #[test]
    fn selecting_sets_exactly_one_member() {
        let answers = AnswersTree::new(json!({ "sex": "female" }));
        let mut writer = AssignmentWriter::new(None);
        writer.sex(&SEX, answers.get("sex"));
        let (out, _) = writer.finish();
        assert_eq!(out.checked("Line7_Male[0]"), Some(false));
        assert_eq!(out.checked("Line7_Female[0]"), Some(true));
    }

    #[test]
    fn unclassified_values_leave_group_unwritten() {
        let answers = AnswersTree::new(json!({ "sex": "other" }));
        let mut writer = AssignmentWriter::new(None);
        writer.sex(&SEX, answers.get("sex"));
        writer.yes_no(
            &YesNoFields {
                yes: "Y[0]",
                no: "N[0]",
            },
            None,
        );
        let (out, _) = writer.finish();
        assert!(out.is_empty());
    }

    #[test]
    fn unit_number_fans_out_to_every_variant() {
        let answers = AnswersTree::new(json!({ "unitType": "Ste", "unitNum": " 4B " }));
        let mut writer = AssignmentWriter::new(None);
        writer.unit(&UNIT, answers.get("unitType"), answers.get("unitNum"));
        let (out, _) = writer.finish();
        assert_eq!(out.checked("Line8_Unit[1]"), Some(true));
        assert_eq!(out.checked("Line8_Unit[0]"), Some(false));
        assert_eq!(out.text("Line8_AptSteFlrNumber[0]"), Some("4B"));
        assert_eq!(out.text("Line8c_AptSteFlrNumber[0]"), Some("4B"));
    }

    #[test]
    fn overrides_replace_computed_values() {
        let mut writer = AssignmentWriter::new(None);
        writer.text_value(&TextField::Single("Name[0]"), "Alice");
        writer.override_value("Name[0]", &json!("Bob"));
        writer.override_value("Box[0]", &json!(false));
        writer.override_value("Ignored[0]", &json!(null));
        let (out, rejected) = writer.finish();
        assert_eq!(out.text("Name[0]"), Some("Bob"));
        assert_eq!(out.checked("Box[0]"), Some(false));
        assert!(!out.contains("Ignored[0]"));
        assert!(rejected.is_empty());
    }
}
