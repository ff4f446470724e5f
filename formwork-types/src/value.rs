use std::collections::HashMap;

use crate::{FieldName, field::VALUE_DELIMITER};

/// Raw value for one field, as it arrives in submitted form data.
///
/// Mirrors an HTML form post: most inputs submit one text value, while
/// multi-selects and checkbox groups submit a list under one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// A single text value.
    Text(String),

    /// Multiple values under one field name.
    List(Vec<String>),
}

impl RawValue {
    /// Get the text value, if this is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::List(_) => None,
        }
    }

    /// Get the value list, if this is one.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Text(_) => None,
            Self::List(values) => Some(values),
        }
    }

    /// Check if the value is blank: whitespace-only text or an empty list.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::List(values) => values.is_empty(),
        }
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for RawValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<Vec<&str>> for RawValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(str::to_owned).collect())
    }
}

/// Raw submitted form data, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmittedData {
    values: HashMap<FieldName, RawValue>,
}

impl SubmittedData {
    /// Create an empty data set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value under a field name.
    pub fn insert(&mut self, name: impl Into<FieldName>, value: impl Into<RawValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Insert a single text value, builder style.
    pub fn with_text(mut self, name: impl Into<FieldName>, value: impl Into<String>) -> Self {
        self.insert(name, value.into());
        self
    }

    /// Insert a multi-value list, builder style.
    pub fn with_list<I, S>(mut self, name: impl Into<FieldName>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        self.insert(name, values);
        self
    }

    /// Get the value submitted under a field name.
    pub fn get(&self, name: &FieldName) -> Option<&RawValue> {
        self.values.get(name)
    }

    /// Get an iterator over all name-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &RawValue)> {
        self.values.iter()
    }

    /// Get the number of submitted fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no fields were submitted.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Error type for cleaned value access.
#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    #[error("Missing cleaned value for field: {0}")]
    MissingField(FieldName),

    #[error("Type mismatch for field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: FieldName,
        expected: &'static str,
        actual: &'static str,
    },
}

/// The typed result of validating one field's raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanedValue {
    /// A blank optional field.
    Empty,

    /// Trimmed free text.
    Text(String),

    /// A parsed whole number.
    Integer(i64),

    /// The value of the selected option.
    Choice(String),

    /// The values of all selected options, in option declaration order.
    Selections(Vec<String>),
}

impl CleanedValue {
    /// Get the variant name, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Text(_) => "Text",
            Self::Integer(_) => "Integer",
            Self::Choice(_) => "Choice",
            Self::Selections(_) => "Selections",
        }
    }

    /// Check if this is the blank value.
    pub fn is_empty(&self) -> bool {
        self == &Self::Empty
    }

    /// Serialize to the stored string form.
    ///
    /// Selections join with [`VALUE_DELIMITER`]; the blank value stores as
    /// the empty string.
    pub fn to_stored(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(text) => text.clone(),
            Self::Integer(value) => value.to_string(),
            Self::Choice(value) => value.clone(),
            Self::Selections(values) => values.join(VALUE_DELIMITER),
        }
    }
}

/// Validated, typed values keyed by field name.
///
/// Produced by validation; consumed by stores, which serialize each value
/// with [`CleanedValue::to_stored`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanedValues {
    values: HashMap<FieldName, CleanedValue>,
}

impl CleanedValues {
    /// Create an empty value set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cleaned value for a field.
    pub fn insert(&mut self, name: FieldName, value: CleanedValue) {
        self.values.insert(name, value);
    }

    /// Get the cleaned value for a field.
    pub fn get(&self, name: &FieldName) -> Option<&CleanedValue> {
        self.values.get(name)
    }

    /// Check if a field has a cleaned value.
    pub fn contains(&self, name: &FieldName) -> bool {
        self.values.contains_key(name)
    }

    /// Check if a field cleaned to something other than the blank value.
    pub fn has_value(&self, name: &FieldName) -> bool {
        matches!(self.get(name), Some(value) if !value.is_empty())
    }

    /// Get an iterator over all name-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &CleanedValue)> {
        self.values.iter()
    }

    /// Get the number of cleaned fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no fields were cleaned.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // === Convenience accessors ===

    /// Get the text value of a field.
    pub fn text(&self, name: &FieldName) -> Result<&str, ValueError> {
        match self.get(name) {
            Some(CleanedValue::Text(text)) => Ok(text),
            Some(other) => Err(ValueError::TypeMismatch {
                field: name.clone(),
                expected: "Text",
                actual: other.type_name(),
            }),
            None => Err(ValueError::MissingField(name.clone())),
        }
    }

    /// Get the integer value of a field.
    pub fn integer(&self, name: &FieldName) -> Result<i64, ValueError> {
        match self.get(name) {
            Some(CleanedValue::Integer(value)) => Ok(*value),
            Some(other) => Err(ValueError::TypeMismatch {
                field: name.clone(),
                expected: "Integer",
                actual: other.type_name(),
            }),
            None => Err(ValueError::MissingField(name.clone())),
        }
    }

    /// Get the selected option value of a field.
    pub fn choice(&self, name: &FieldName) -> Result<&str, ValueError> {
        match self.get(name) {
            Some(CleanedValue::Choice(value)) => Ok(value),
            Some(other) => Err(ValueError::TypeMismatch {
                field: name.clone(),
                expected: "Choice",
                actual: other.type_name(),
            }),
            None => Err(ValueError::MissingField(name.clone())),
        }
    }

    /// Get the selected option values of a field.
    pub fn selections(&self, name: &FieldName) -> Result<&[String], ValueError> {
        match self.get(name) {
            Some(CleanedValue::Selections(values)) => Ok(values),
            Some(other) => Err(ValueError::TypeMismatch {
                field: name.clone(),
                expected: "Selections",
                actual: other.type_name(),
            }),
            None => Err(ValueError::MissingField(name.clone())),
        }
    }
}

impl<'a> IntoIterator for &'a CleanedValues {
    type Item = (&'a FieldName, &'a CleanedValue);
    type IntoIter = std::collections::hash_map::Iter<'a, FieldName, CleanedValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
