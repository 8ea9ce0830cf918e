use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Placeholder shown for any missing display field.
pub const MISSING: &str = "—";

/// A visit record as received from the record source.
///
/// Records are heterogeneous documents: only a handful of keys are
/// interpreted and field order is preserved, since date resolution scans
/// the fields in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitRecord {
    fields: Map<String, Value>,
}

impl VisitRecord {
    /// Build a record from any JSON value; non-object values become empty
    /// records (which resolve to no date and are never bucketed).
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// All fields in document order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.values()
    }

    /// String value of `key`, only when the field is a string.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Display text of `key` when the value is "truthy": a non-empty string,
    /// a non-zero number or `true`.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
            Value::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }

    /// First truthy value among `keys`, or the "—" placeholder.
    pub fn first_text(&self, keys: &[&str]) -> String {
        keys.iter()
            .find_map(|k| self.text(k))
            .unwrap_or_else(|| MISSING.to_string())
    }

    /// Identifier, falling back to the record's position in the input list.
    pub fn key(&self, index: usize) -> String {
        self.text("id").unwrap_or_else(|| index.to_string())
    }

    pub fn display_name(&self) -> String {
        self.first_text(&["name", "text"])
    }

    /// Raw role tag; an absent tag compares as the empty string.
    pub fn role_tag(&self) -> String {
        self.text("type").unwrap_or_default()
    }

    pub fn display_type(&self) -> String {
        self.first_text(&["type"])
    }

    pub fn time_in(&self) -> String {
        self.first_text(&["timeInFormatted", "timeIn", "time"])
    }

    pub fn time_out(&self) -> String {
        self.first_text(&["timeOutFormatted", "timeOut"])
    }

    pub fn purpose(&self) -> String {
        self.first_text(&["purpose"])
    }

    pub fn room(&self) -> String {
        self.first_text(&["room"])
    }
}

impl From<Value> for VisitRecord {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}
