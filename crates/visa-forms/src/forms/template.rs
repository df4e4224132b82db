use super::descriptor::{FieldDescriptor, TextField};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Widget kind of a physical field as reported by the PDF template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Checkbox,
    Choice,
}

impl FieldKind {
    fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "button" | "checkbox" | "check box" | "pdfcheckbox" => Self::Checkbox,
            "choice" | "radio" | "radiobutton" | "radio button" | "combo" | "combobox"
            | "list" | "listbox" | "pdfradiogroup" | "pdfdropdown" => Self::Choice,
            _ => Self::Text,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("failed to read template field inventory: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid template field inventory: {0}")]
    Csv(#[from] csv::Error),
    #[error("template field inventory lists no fields")]
    Empty,
}

/// Physical fields present in one concrete template revision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateInventory {
    fields: BTreeMap<String, FieldKind>,
}

#[derive(Debug, Deserialize)]
struct InventoryRow {
    #[serde(rename = "Field Name")]
    name: String,
    #[serde(rename = "Field Type", default)]
    kind: Option<String>,
}

impl TemplateInventory {
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, FieldKind)>,
        S: Into<String>,
    {
        let fields = entries
            .into_iter()
            .map(|(name, kind)| (name.into(), kind))
            .filter(|(name, _): &(String, FieldKind)| !name.trim().is_empty())
            .collect();
        Self { fields }
    }

    /// Names only; every field is assumed to be a text box.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_entries(names.into_iter().map(|name| (name, FieldKind::Text)))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TemplateError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Reads a `Field Name,Field Type` export; the type column is optional.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, TemplateError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut entries = Vec::new();
        for row in csv_reader.deserialize::<InventoryRow>() {
            let row = row?;
            let kind = row
                .kind
                .as_deref()
                .map(FieldKind::from_label)
                .unwrap_or(FieldKind::Text);
            entries.push((row.name, kind));
        }

        let inventory = Self::from_entries(entries);
        if inventory.is_empty() {
            return Err(TemplateError::Empty);
        }
        Ok(inventory)
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

    pub fn kind(&self, name: &str) -> Option<FieldKind> {
        self.fields.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FieldKind)> {
        self.fields.iter().map(|(name, kind)| (name.as_str(), *kind))
    }
}

/// Template inventory plus the variant aliases resolved against it.
///
/// Built once per template; the mapper consults it to write each concept to the
/// single name the template really has.
#[derive(Debug, Clone)]
pub struct TemplateProfile {
    inventory: TemplateInventory,
    aliases: HashMap<&'static str, &'static str>,
}

impl TemplateProfile {
    pub fn resolve(inventory: TemplateInventory, catalogue: &[FieldDescriptor]) -> Self {
        let mut aliases = HashMap::new();
        for group in catalogue.iter().filter_map(FieldDescriptor::variant_group) {
            if let (Some(canonical), Some(present)) = (
                group.first(),
                group.iter().find(|name| inventory.contains(name)),
            ) {
                aliases.insert(*canonical, *present);
            }
        }

        debug!(
            fields = inventory.len(),
            aliases = aliases.len(),
            "resolved template profile"
        );

        Self { inventory, aliases }
    }

    pub fn inventory(&self) -> &TemplateInventory {
        &self.inventory
    }

    pub fn allows(&self, name: &str) -> bool {
        self.inventory.contains(name)
    }

    /// Physical names a text field should be written to under this template.
    pub(crate) fn targets(&self, field: &TextField) -> Vec<&'static str> {
        match field {
            TextField::Single(name) => {
                if self.inventory.contains(name) {
                    vec![*name]
                } else {
                    Vec::new()
                }
            }
            TextField::Variants(names) => names
                .first()
                .and_then(|canonical| self.aliases.get(canonical))
                .copied()
                .or_else(|| names.iter().copied().find(|name| self.inventory.contains(name)))
                .into_iter()
                .collect(),
        }
    }

    /// Catalogue names this template does not provide.
    pub fn missing_from(&self, catalogue: &[FieldDescriptor]) -> Vec<&'static str> {
        let mut missing = Vec::new();
        for descriptor in catalogue {
            match descriptor.variant_group() {
                Some(group) if group.iter().any(|name| self.inventory.contains(name)) => {
                    let others = descriptor
                        .physical_names()
                        .into_iter()
                        .filter(|name| !group.contains(name) && !self.inventory.contains(name));
                    missing.extend(others);
                }
                _ => missing.extend(
                    descriptor
                        .physical_names()
                        .into_iter()
                        .filter(|name| !self.inventory.contains(name)),
                ),
            }
        }
        missing
    }
}
