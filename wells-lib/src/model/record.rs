//! Dynamic well-count record

use std::collections::HashMap;

use super::Value;

/// One row returned by the API.
///
/// Records hold field values as a `HashMap<String, Value>` and remember the
/// order in which fields were added, so exports can reproduce the upstream
/// column order. The field set is not fixed; absent fields read as missing
/// and coerce to `0`.
///
/// # Example
///
/// ```
/// use wells_lib::model::Record;
///
/// let record = Record::new()
///     .set("status", "Total Flowing Wells")
///     .set("gujarat", "3547");
///
/// assert_eq!(record.number("gujarat"), 3547.0);
/// assert_eq!(record.number("tripura"), 0.0);
/// assert_eq!(record.keys(), ["status", "gujarat"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    /// The field values.
    pub(crate) fields: HashMap<String, Value>,

    /// Field names in insertion order.
    pub(crate) keys: Vec<String>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Returns the field names in insertion order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Iterates over `(field, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.keys
            .iter()
            .filter_map(|key| self.fields.get(key).map(|value| (key.as_str(), value)))
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns `true` if both records have the same field names, ignoring order.
    pub fn same_shape(&self, other: &Record) -> bool {
        self.len() == other.len() && self.keys.iter().all(|key| other.contains(key))
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Inserts a field value, keeping the original position of an existing field.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        let field = field.into();
        if !self.fields.contains_key(&field) {
            self.keys.push(field.clone());
        }
        self.fields.insert(field, value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        let value = self.fields.remove(field)?;
        self.keys.retain(|key| key != field);
        Some(value)
    }

    // =========================================================================
    // Coercion
    // =========================================================================

    /// Returns the field coerced to a number; a missing field is `0`.
    ///
    /// This is the only numeric view filters use.
    pub fn number(&self, field: &str) -> f64 {
        self.fields.get(field).map_or(0.0, Value::as_number)
    }

    /// Returns the field if it holds text.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_text)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}
