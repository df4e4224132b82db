use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const OUTPUT_DATE_FORMAT: &str = "%m/%d/%Y";

const FALLBACK_DATE_FORMATS: &[&str] = &[
    "%Y/%m/%d",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d-%B-%Y",
    "%Y.%m.%d",
];

const FALLBACK_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    Apartment,
    Suite,
    Floor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetitionType {
    K1,
    K3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CitizenshipBasis {
    Birth,
    Naturalization,
    Parents,
}

/// Null becomes empty, strings are trimmed, scalars use their JSON spelling.
/// Arrays and objects carry no text.
pub(crate) fn coerce_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.trim().to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => String::new(),
    }
}

pub(crate) fn coerce_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "true" => Some(true),
            "no" | "n" | "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Rewrite a date into `MM/DD/YYYY`.
///
/// US slash dates are kept as typed. Text that is not a recognizable date is returned
/// trimmed rather than dropped so bad input stays visible on the form.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if is_iso_date(trimmed) {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return date.format(OUTPUT_DATE_FORMAT).to_string();
        }
        return trimmed.to_string();
    }

    if is_us_slash_date(trimmed) {
        return trimmed.to_string();
    }

    parse_loose_date(trimmed)
        .map(|date| date.format(OUTPUT_DATE_FORMAT).to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

/// Dashed date with a four-digit year first; chrono alone accepts years of any width.
fn is_iso_date(value: &str) -> bool {
    let parts: Vec<&str> = value.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return false;
    };

    let numeric = |part: &str, widths: &[usize]| {
        widths.contains(&part.len()) && part.bytes().all(|byte| byte.is_ascii_digit())
    };

    numeric(year, &[4]) && numeric(month, &[1, 2]) && numeric(day, &[1, 2])
}

fn is_us_slash_date(value: &str) -> bool {
    let parts: Vec<&str> = value.split('/').collect();
    let [month, day, year] = parts.as_slice() else {
        return false;
    };

    let numeric = |part: &str, widths: &[usize]| {
        widths.contains(&part.len()) && part.bytes().all(|byte| byte.is_ascii_digit())
    };

    numeric(month, &[1, 2]) && numeric(day, &[1, 2]) && numeric(year, &[2, 4])
}

fn parse_loose_date(value: &str) -> Option<NaiveDate> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }

    FALLBACK_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| {
            FALLBACK_DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|timestamp| timestamp.date())
        })
        .filter(|date| date.year() >= 1000)
}

fn lowered(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

pub fn classify_sex(raw: &str) -> Option<Sex> {
    let value = lowered(raw);
    if value.starts_with('m') {
        Some(Sex::Male)
    } else if value.starts_with('f') {
        Some(Sex::Female)
    } else {
        None
    }
}

pub fn classify_marital_status(raw: &str) -> Option<MaritalStatus> {
    let value = lowered(raw);
    [
        ("sing", MaritalStatus::Single),
        ("marr", MaritalStatus::Married),
        ("div", MaritalStatus::Divorced),
        ("wid", MaritalStatus::Widowed),
    ]
    .into_iter()
    .find(|(prefix, _)| value.starts_with(prefix))
    .map(|(_, status)| status)
}

pub fn classify_unit_type(raw: &str) -> Option<UnitType> {
    let value = lowered(raw);
    if value.starts_with("apt") || value.starts_with("apartment") {
        Some(UnitType::Apartment)
    } else if value.starts_with("ste") || value.starts_with("suite") {
        Some(UnitType::Suite)
    } else if value.starts_with("flr") || value.starts_with("floor") {
        Some(UnitType::Floor)
    } else {
        None
    }
}

pub fn classify_petition_type(raw: &str) -> Option<PetitionType> {
    match lowered(raw).replace('-', "").as_str() {
        "k1" => Some(PetitionType::K1),
        "k3" => Some(PetitionType::K3),
        _ => None,
    }
}

pub fn classify_citizenship_basis(raw: &str) -> Option<CitizenshipBasis> {
    let value = lowered(raw);
    if value.starts_with("birth") {
        Some(CitizenshipBasis::Birth)
    } else if value.starts_with("natural") {
        Some(CitizenshipBasis::Naturalization)
    } else if value.starts_with("parent") {
        Some(CitizenshipBasis::Parents)
    } else {
        None
    }
}
