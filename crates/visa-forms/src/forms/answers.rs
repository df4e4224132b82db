use super::normalizer::{coerce_flag, coerce_text};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Nested, partially saved wizard answers for one applicant.
///
/// Every level is optional. Lookups never fail: a missing, null, or oddly shaped
/// node simply reads as "no value".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswersTree(Value);

impl AnswersTree {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn root(&self) -> Node<'_> {
        Node {
            value: present(&self.0),
        }
    }

    /// Resolve a dotted/indexed path such as `petitioner.employment[0].employer`.
    pub fn get(&self, path: &str) -> Node<'_> {
        self.root().get(path)
    }
}

impl From<Value> for AnswersTree {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Borrowed cursor into an [`AnswersTree`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Node<'a> {
    value: Option<&'a Value>,
}

impl<'a> Node<'a> {
    pub fn get(self, path: &str) -> Node<'a> {
        Node {
            value: self.value.and_then(|value| resolve(value, path)),
        }
    }

    pub fn value(self) -> Option<&'a Value> {
        self.value
    }

    pub fn is_present(self) -> bool {
        self.value.is_some()
    }

    /// Fall back to `other` when this node is absent.
    pub fn or(self, other: Node<'a>) -> Node<'a> {
        if self.is_present() {
            self
        } else {
            other
        }
    }

    /// True when the node holds something other than an empty list or object.
    pub fn has_content(self) -> bool {
        match self.value {
            Some(Value::Array(items)) => !items.is_empty(),
            Some(Value::Object(members)) => !members.is_empty(),
            Some(_) => true,
            None => false,
        }
    }

    /// First child with content among alternate key spellings.
    pub fn first_of(self, keys: &[&str]) -> Node<'a> {
        keys.iter()
            .map(|key| self.get(key))
            .find(|node| node.has_content())
            .unwrap_or_default()
    }

    /// Positional entry of a list. A lone object stands in for a one-element list.
    pub fn entry(self, index: usize) -> Node<'a> {
        let value = match self.value {
            Some(Value::Array(items)) => items.get(index).and_then(present),
            Some(value) if index == 0 && value.is_object() => Some(value),
            _ => None,
        };
        Node { value }
    }

    /// Key/value pairs of an object node; anything else yields nothing.
    pub fn members(self) -> impl Iterator<Item = (&'a str, &'a Value)> {
        self.value
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|object| object.iter().map(|(key, value)| (key.as_str(), value)))
    }

    pub fn text(self) -> String {
        coerce_text(self.value)
    }

    pub fn flag(self) -> Option<bool> {
        self.value.and_then(coerce_flag)
    }
}

fn present(value: &Value) -> Option<&Value> {
    if value.is_null() {
        None
    } else {
        Some(value)
    }
}

fn resolve<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.').filter(|segment| !segment.is_empty()) {
        let (key, indices) = split_segment(segment)?;
        if !key.is_empty() {
            current = current.as_object()?.get(key)?;
        }
        for index in indices {
            current = current.as_array()?.get(index)?;
        }
    }
    present(current)
}

fn split_segment(segment: &str) -> Option<(&str, Vec<usize>)> {
    let Some(open) = segment.find('[') else {
        return Some((segment, Vec::new()));
    };

    let (key, mut rest) = segment.split_at(open);
    let mut indices = Vec::new();
    while !rest.is_empty() {
        let inner = rest.strip_prefix('[')?;
        let close = inner.find(']')?;
        indices.push(inner[..close].trim().parse().ok()?);
        rest = &inner[close + 1..];
    }
    Some((key, indices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> AnswersTree {
        AnswersTree::new(json!({
            "petitioner": {
                "name": { "last": "  Rivera ", "first": "Ana" },
                "employment": [
                    { "employer": "Acme Corp" },
                    null,
                    { "employer": "Globex" }
                ],
                "physicalAddress": { "street": "12 Elm St" },
                "dob": null,
                "age": 34
            }
        }))
    }

    #[test]
    fn resolves_dotted_and_indexed_paths() {
        let answers = sample();
        assert_eq!(answers.get("petitioner.name.last").text(), "Rivera");
        assert_eq!(
            answers.get("petitioner.employment[2].employer").text(),
            "Globex"
        );
        assert_eq!(answers.get("petitioner.age").text(), "34");
    }

    #[test]
    fn missing_or_mistyped_segments_read_as_empty() {
        let answers = sample();
        assert!(!answers.get("beneficiary.name.last").is_present());
        assert!(!answers.get("petitioner.employment[1].employer").is_present());
        assert!(!answers.get("petitioner.employment[9].employer").is_present());
        assert!(!answers.get("petitioner.name[0]").is_present());
        assert!(!answers.get("petitioner.name.last.inner").is_present());
        assert!(!answers.get("petitioner.dob").is_present());
        assert_eq!(answers.get("petitioner.employment[x]").text(), "");
        assert_eq!(answers.get("petitioner.employment[0").text(), "");
    }

    #[test]
    fn single_object_acts_as_first_list_entry() {
        let answers = sample();
        let addresses = answers
            .get("petitioner")
            .first_of(&["physicalAddresses", "physicalAddress"]);
        assert_eq!(addresses.entry(0).get("street").text(), "12 Elm St");
        assert!(!addresses.entry(1).is_present());
    }

    #[test]
    fn empty_collections_fall_through_to_the_next_key() {
        let answers = AnswersTree::new(json!({
            "petitioner": {
                "physicalAddresses": [],
                "physicalAddress": { "street": "77 Pine St" },
                "mailing": {}
            }
        }));
        let petitioner = answers.get("petitioner");
        let addresses = petitioner.first_of(&["physicalAddresses", "physicalAddress"]);
        assert_eq!(addresses.entry(0).get("street").text(), "77 Pine St");
        assert!(!petitioner.get("mailing").has_content());
        assert!(petitioner.get("mailing").is_present());
    }

    #[test]
    fn non_object_root_is_tolerated() {
        let answers = AnswersTree::new(json!([1, 2, 3]));
        assert!(!answers.get("petitioner").is_present());
        assert_eq!(answers.root().members().count(), 0);
    }
}
