use serde::Serialize;
use serde_json::Value;

/// Equality filter on a single serialized attribute, e.g. `available=true`.
///
/// Attributes are matched by their JSON name (`addedBy`, not `added_by`).
/// Strings compare verbatim; booleans and numbers compare by their JSON
/// text. Unknown attributes, nulls, arrays and objects never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFilter {
    pub attribute: String,
    pub value: String,
}

impl RecordFilter {
    pub fn new(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    pub fn matches<R: Serialize>(&self, record: &R) -> bool {
        let Ok(Value::Object(fields)) = serde_json::to_value(record) else {
            return false;
        };

        match fields.get(&self.attribute) {
            Some(Value::String(text)) => *text == self.value,
            Some(Value::Bool(flag)) => flag.to_string() == self.value,
            Some(Value::Number(number)) => number.to_string() == self.value,
            _ => false,
        }
    }
}
