//! Contract with the collaborator that writes [`FieldAssignments`] into a real form.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use super::assignments::{FieldAssignments, FieldValue};
use super::template::{FieldKind, TemplateInventory};

/// Form document able to set values on its named fields.
pub trait FormFiller {
    /// Kind of the named field, or `None` when the template has no such field.
    fn field_kind(&self, name: &str) -> Option<FieldKind>;
    fn set_text(&mut self, name: &str, value: &str) -> Result<(), FieldWriteError>;
    fn set_checked(&mut self, name: &str, checked: bool) -> Result<(), FieldWriteError>;
    fn select_choice(&mut self, name: &str, option: &str) -> Result<(), FieldWriteError>;
    fn refresh_appearances(&mut self) -> Result<(), FillError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldWriteError {
    #[error("field is read-only")]
    ReadOnly,
    #[error("value {value:?} is not valid for this field")]
    InvalidValue { value: String },
    #[error("{0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FillError {
    #[error("failed to regenerate field appearances: {0}")]
    Appearance(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedField {
    pub name: String,
    pub reason: String,
}

/// Outcome of one fill run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FillReport {
    pub applied: usize,
    pub skipped_unknown: Vec<String>,
    pub failed: Vec<FailedField>,
}

/// Apply every assignment according to the field's real kind.
///
/// Unknown names are skipped and a failing field does not stop the batch.
/// Appearances are regenerated once at the end.
pub fn fill_form<F: FormFiller + ?Sized>(
    filler: &mut F,
    assignments: &FieldAssignments,
) -> Result<FillReport, FillError> {
    let mut report = FillReport::default();

    for (name, value) in assignments.iter() {
        let Some(kind) = filler.field_kind(name) else {
            report.skipped_unknown.push(name.to_string());
            continue;
        };

        match apply_value(filler, name, kind, value) {
            Ok(()) => report.applied += 1,
            Err(error) => {
                warn!(field = name, error = %error, "failed to set form field");
                report.failed.push(FailedField {
                    name: name.to_string(),
                    reason: error.to_string(),
                });
            }
        }
    }

    filler.refresh_appearances()?;

    debug!(
        applied = report.applied,
        skipped = report.skipped_unknown.len(),
        failed = report.failed.len(),
        "filled form"
    );
    Ok(report)
}

fn apply_value<F: FormFiller + ?Sized>(
    filler: &mut F,
    name: &str,
    kind: FieldKind,
    value: &FieldValue,
) -> Result<(), FieldWriteError> {
    match (kind, value) {
        (FieldKind::Text, FieldValue::Text(text)) => filler.set_text(name, text),
        (FieldKind::Text, FieldValue::Checked(true)) => filler.set_text(name, "X"),
        (FieldKind::Text, FieldValue::Checked(false)) => Ok(()),
        (FieldKind::Checkbox | FieldKind::Choice, FieldValue::Checked(checked)) => {
            filler.set_checked(name, *checked)
        }
        (FieldKind::Checkbox, FieldValue::Text(text)) => match parse_checked(text) {
            Some(checked) => filler.set_checked(name, checked),
            None => Err(FieldWriteError::InvalidValue {
                value: text.clone(),
            }),
        },
        (FieldKind::Choice, FieldValue::Text(text)) => filler.select_choice(name, text),
    }
}

fn parse_checked(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" | "on" | "x" | "1" => Some(true),
        "no" | "false" | "off" | "" | "0" => Some(false),
        _ => None,
    }
}

/// State of one field held by [`InMemoryForm`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FormFieldState {
    Text(Option<String>),
    Checked(bool),
}

/// Form held entirely in memory, shaped by a template inventory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryForm {
    kinds: BTreeMap<String, FieldKind>,
    values: BTreeMap<String, FormFieldState>,
    read_only: Vec<String>,
    appearances_refreshed: usize,
}

impl InMemoryForm {
    pub fn from_inventory(inventory: &TemplateInventory) -> Self {
        let mut form = Self::default();
        for (name, kind) in inventory.iter() {
            form.kinds.insert(name.to_string(), kind);
            let state = match kind {
                FieldKind::Checkbox => FormFieldState::Checked(false),
                FieldKind::Text | FieldKind::Choice => FormFieldState::Text(None),
            };
            form.values.insert(name.to_string(), state);
        }
        form
    }

    /// Mark a field as locked; writes to it fail.
    pub fn lock(&mut self, name: &str) {
        self.read_only.push(name.to_string());
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(FormFieldState::Text(Some(text))) => Some(text),
            _ => None,
        }
    }

    pub fn is_checked(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(FormFieldState::Checked(true)))
    }

    pub fn appearances_refreshed(&self) -> usize {
        self.appearances_refreshed
    }

    pub fn fields(&self) -> &BTreeMap<String, FormFieldState> {
        &self.values
    }

    fn writable(&self, name: &str) -> Result<(), FieldWriteError> {
        if self.read_only.iter().any(|locked| locked == name) {
            Err(FieldWriteError::ReadOnly)
        } else {
            Ok(())
        }
    }
}

impl FormFiller for InMemoryForm {
    fn field_kind(&self, name: &str) -> Option<FieldKind> {
        self.kinds.get(name).copied()
    }

    fn set_text(&mut self, name: &str, value: &str) -> Result<(), FieldWriteError> {
        self.writable(name)?;
        self.values
            .insert(name.to_string(), FormFieldState::Text(Some(value.to_string())));
        Ok(())
    }

    fn set_checked(&mut self, name: &str, checked: bool) -> Result<(), FieldWriteError> {
        self.writable(name)?;
        self.values
            .insert(name.to_string(), FormFieldState::Checked(checked));
        Ok(())
    }

    fn select_choice(&mut self, name: &str, option: &str) -> Result<(), FieldWriteError> {
        self.set_text(name, option)
    }

    fn refresh_appearances(&mut self) -> Result<(), FillError> {
        self.appearances_refreshed += 1;
        Ok(())
    }
}
