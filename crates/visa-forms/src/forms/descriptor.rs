use super::normalizer::{MaritalStatus, Sex, UnitType};
use serde::Serialize;

/// A text box, addressed either by one name or by the names it carried across
/// template revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Single(&'static str),
    Variants(&'static [&'static str]),
}

impl TextField {
    pub fn names(&self) -> &[&'static str] {
        match self {
            Self::Single(name) => std::slice::from_ref(name),
            Self::Variants(names) => *names,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YesNoFields {
    pub yes: &'static str,
    pub no: &'static str,
}

impl YesNoFields {
    pub(crate) fn choices(&self) -> [(bool, &'static str); 2] {
        [(true, self.yes), (false, self.no)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SexFields {
    pub male: &'static str,
    pub female: &'static str,
}

impl SexFields {
    pub(crate) fn choices(&self) -> [(Sex, &'static str); 2] {
        [(Sex::Male, self.male), (Sex::Female, self.female)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaritalFields {
    pub single: &'static str,
    pub married: &'static str,
    pub divorced: &'static str,
    pub widowed: &'static str,
}

impl MaritalFields {
    pub(crate) fn choices(&self) -> [(MaritalStatus, &'static str); 4] {
        [
            (MaritalStatus::Single, self.single),
            (MaritalStatus::Married, self.married),
            (MaritalStatus::Divorced, self.divorced),
            (MaritalStatus::Widowed, self.widowed),
        ]
    }
}

/// Apt/Ste/Flr checkboxes plus the unit number box next to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitFields {
    pub apt: &'static str,
    pub ste: &'static str,
    pub flr: &'static str,
    pub number: TextField,
}

impl UnitFields {
    pub(crate) fn choices(&self) -> [(UnitType, &'static str); 3] {
        [
            (UnitType::Apartment, self.apt),
            (UnitType::Suite, self.ste),
            (UnitType::Floor, self.flr),
        ]
    }
}

/// Radio-like group keyed by a classification tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceFields<T: 'static> {
    pub options: &'static [(T, &'static str)],
}

impl<T: 'static> ChoiceFields<T> {
    pub fn names(&self) -> Vec<&'static str> {
        self.options.iter().map(|(_, name)| *name).collect()
    }
}

/// Every kind of physical field the mapping tables can reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldDescriptor {
    Text(TextField),
    YesNo(YesNoFields),
    Sex(SexFields),
    Marital(MaritalFields),
    Unit(UnitFields),
    Choice(Vec<&'static str>),
}

impl FieldDescriptor {
    pub fn kind(&self) -> DescriptorKind {
        match self {
            Self::Text(TextField::Single(_)) => DescriptorKind::Text,
            Self::Text(TextField::Variants(_)) => DescriptorKind::MultiWrite,
            Self::YesNo(_) => DescriptorKind::YesNo,
            Self::Sex(_) | Self::Marital(_) | Self::Unit(_) | Self::Choice(_) => {
                DescriptorKind::ExclusiveSet
            }
        }
    }

    pub fn physical_names(&self) -> Vec<&'static str> {
        match self {
            Self::Text(field) => field.names().to_vec(),
            Self::YesNo(fields) => vec![fields.yes, fields.no],
            Self::Sex(fields) => vec![fields.male, fields.female],
            Self::Marital(fields) => fields.choices().iter().map(|(_, name)| *name).collect(),
            Self::Unit(fields) => {
                let mut names = vec![fields.apt, fields.ste, fields.flr];
                names.extend_from_slice(fields.number.names());
                names
            }
            Self::Choice(names) => names.clone(),
        }
    }

    /// Alternate spellings of one text box, if this descriptor has any.
    pub fn variant_group(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::Text(TextField::Variants(names))
            | Self::Unit(UnitFields {
                number: TextField::Variants(names),
                ..
            }) => Some(*names),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptorKind {
    Text,
    MultiWrite,
    YesNo,
    ExclusiveSet,
}

/// Collects the descriptors a mapping table owns.
pub trait Describe {
    fn describe(&self, out: &mut Vec<FieldDescriptor>);
}

impl Describe for TextField {
    fn describe(&self, out: &mut Vec<FieldDescriptor>) {
        out.push(FieldDescriptor::Text(*self));
    }
}

impl<D: Describe> Describe for Option<D> {
    fn describe(&self, out: &mut Vec<FieldDescriptor>) {
        if let Some(inner) = self {
            inner.describe(out);
        }
    }
}

impl<D: Describe, const N: usize> Describe for [D; N] {
    fn describe(&self, out: &mut Vec<FieldDescriptor>) {
        for item in self {
            item.describe(out);
        }
    }
}

impl Describe for YesNoFields {
    fn describe(&self, out: &mut Vec<FieldDescriptor>) {
        out.push(FieldDescriptor::YesNo(*self));
    }
}

impl Describe for SexFields {
    fn describe(&self, out: &mut Vec<FieldDescriptor>) {
        out.push(FieldDescriptor::Sex(*self));
    }
}

impl Describe for MaritalFields {
    fn describe(&self, out: &mut Vec<FieldDescriptor>) {
        out.push(FieldDescriptor::Marital(*self));
    }
}

impl Describe for UnitFields {
    fn describe(&self, out: &mut Vec<FieldDescriptor>) {
        out.push(FieldDescriptor::Unit(*self));
    }
}

impl<T: 'static> Describe for ChoiceFields<T> {
    fn describe(&self, out: &mut Vec<FieldDescriptor>) {
        out.push(FieldDescriptor::Choice(self.names()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: UnitFields = UnitFields {
        apt: "Line8_Unit[0]",
        ste: "Line8_Unit[1]",
        flr: "Line8_Unit[2]",
        number: TextField::Variants(&["Line8_AptSteFlrNumber[0]", "Line8c_AptSteFlrNumber[0]"]),
    };

    #[test]
    fn unit_descriptor_lists_checkboxes_and_number_variants() {
        let descriptor = FieldDescriptor::Unit(UNIT);
        assert_eq!(descriptor.kind(), DescriptorKind::ExclusiveSet);
        assert_eq!(descriptor.physical_names().len(), 5);
        assert_eq!(
            descriptor.variant_group(),
            Some(&["Line8_AptSteFlrNumber[0]", "Line8c_AptSteFlrNumber[0]"][..])
        );
    }

    #[test]
    fn single_text_field_has_no_variant_group() {
        let descriptor = FieldDescriptor::Text(TextField::Single("Line1_FamilyName[0]"));
        assert_eq!(descriptor.kind(), DescriptorKind::Text);
        assert_eq!(descriptor.physical_names(), vec!["Line1_FamilyName[0]"]);
        assert!(descriptor.variant_group().is_none());
    }

    #[test]
    fn optional_and_array_tables_describe_their_members() {
        let mut out = Vec::new();
        Some(TextField::Single("a")).describe(&mut out);
        None::<TextField>.describe(&mut out);
        [TextField::Single("b"), TextField::Single("c")].describe(&mut out);
        assert_eq!(out.len(), 3);
    }
}
