use std::fmt;

use crate::{AnswerRecord, ChoiceOption, QuestionId, RawValue, SubmittedData};

/// The delimiter used to serialize multi-choice selections into one stored
/// string. Option values must not contain it.
pub const VALUE_DELIMITER: &str = ",";

/// Name of one form field, as it appears in submitted request data.
///
/// Derived from the question id, so names stay stable across renders of the
/// same survey. Request-scoped only; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldName(String);

impl FieldName {
    /// The field name for a question: `field_survey_<question_id>`.
    pub fn for_question(id: QuestionId) -> Self {
        Self(format!("field_survey_{id}"))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for FieldName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// How a single-choice field is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoicePresentation {
    /// Collapsed list with one visible row.
    Dropdown,

    /// All options visible at once, exclusive selection.
    Radio,
}

/// Configuration for a field that accepts exactly one option.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceField {
    /// The selectable options, in display order.
    pub options: Vec<ChoiceOption>,

    /// How the options are rendered.
    pub presentation: ChoicePresentation,
}

impl ChoiceField {
    /// Create a dropdown-presented choice field.
    pub fn dropdown(options: Vec<ChoiceOption>) -> Self {
        Self {
            options,
            presentation: ChoicePresentation::Dropdown,
        }
    }

    /// Create a radio-presented choice field.
    pub fn radio(options: Vec<ChoiceOption>) -> Self {
        Self {
            options,
            presentation: ChoicePresentation::Radio,
        }
    }

    /// Check if a submitted value names one of the options.
    pub fn contains(&self, value: &str) -> bool {
        self.options.iter().any(|option| option.value() == value)
    }
}

/// Configuration for a field that accepts any number of options.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiChoiceField {
    /// The selectable options, in display order.
    pub options: Vec<ChoiceOption>,
}

impl MultiChoiceField {
    /// Create a multi-choice field.
    pub fn new(options: Vec<ChoiceOption>) -> Self {
        Self { options }
    }

    /// Check if a submitted value names one of the options.
    pub fn contains(&self, value: &str) -> bool {
        self.options.iter().any(|option| option.value() == value)
    }

    /// Reorder selected values into option declaration order, dropping
    /// duplicates. Keeps the stored serialization deterministic.
    pub fn normalize(&self, selected: &[String]) -> Vec<String> {
        self.options
            .iter()
            .filter(|option| selected.iter().any(|value| value == option.value()))
            .map(|option| option.value().to_owned())
            .collect()
    }
}

/// The input type of a field.
///
/// Each variant carries only the configuration that kind needs; matches over
/// it are exhaustive, so adding a kind forces every consumer to handle it.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Single-line text input.
    ShortText,

    /// Multi-line text area.
    LongText,

    /// Whole-number input.
    Integer,

    /// Exactly one selection from a fixed option set.
    SingleChoice(ChoiceField),

    /// Any number of selections from a fixed option set.
    MultiChoice(MultiChoiceField),
}

impl FieldKind {
    /// Interpret a stored answer string as a raw initial value for this kind.
    ///
    /// Multi-choice values split on [`VALUE_DELIMITER`], with the empty
    /// string yielding no selections. Every other kind takes the string
    /// verbatim.
    pub fn initial_from_stored(&self, stored: &str) -> RawValue {
        match self {
            Self::MultiChoice(_) => {
                if stored.is_empty() {
                    RawValue::List(Vec::new())
                } else {
                    RawValue::List(stored.split(VALUE_DELIMITER).map(str::to_owned).collect())
                }
            }
            _ => RawValue::Text(stored.to_owned()),
        }
    }
}

/// One input field of a generated form.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The name the field is submitted under.
    name: FieldName,

    /// The prompt text, copied from the question.
    label: String,

    /// Guidance text, copied from the question.
    help_text: Option<String>,

    /// Whether a non-blank value must be submitted.
    required: bool,

    /// The input type and its configuration.
    kind: FieldKind,

    /// The value the field shows when the form renders.
    initial: Option<RawValue>,
}

impl Field {
    /// Create a required field with no initial value.
    pub fn new(name: impl Into<FieldName>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            help_text: None,
            required: true,
            kind,
            initial: None,
        }
    }

    /// Mark the field as accepting a blank value.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Attach guidance text.
    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    /// Set the initial value shown when the form renders.
    pub fn with_initial(mut self, initial: impl Into<RawValue>) -> Self {
        self.initial = Some(initial.into());
        self
    }

    /// Set the initial value from a stored answer string.
    pub fn with_stored_initial(self, stored: &str) -> Self {
        let initial = self.kind.initial_from_stored(stored);
        self.with_initial(initial)
    }

    /// Get the field name.
    pub fn name(&self) -> &FieldName {
        &self.name
    }

    /// Get the prompt text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the guidance text, if any.
    pub fn help_text(&self) -> Option<&str> {
        self.help_text.as_deref()
    }

    /// Check if a non-blank value must be submitted.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Get the input type.
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Get the initial value, if any.
    pub fn initial(&self) -> Option<&RawValue> {
        self.initial.as_ref()
    }
}

/// The generated description of all input fields for one survey.
///
/// Fields appear in survey order. The schema is a value: the population
/// helpers return an updated schema instead of mutating shared state.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSchema {
    fields: Vec<Field>,
}

impl FormSchema {
    /// Create a schema from its fields, preserving their order.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Get the fields in display order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Find a field by name.
    pub fn field(&self, name: &FieldName) -> Option<&Field> {
        self.fields.iter().find(|field| &field.name == name)
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Populate initial values from stored answers. Used when editing an
    /// existing submission.
    pub fn with_stored_answers(mut self, answers: &[AnswerRecord]) -> Self {
        for answer in answers {
            let name = FieldName::for_question(answer.question_id);
            if let Some(field) = self.fields.iter_mut().find(|field| field.name == name) {
                field.initial = Some(field.kind.initial_from_stored(&answer.value));
            }
        }
        self
    }

    /// Populate initial values from previously submitted data. Used when a
    /// form re-renders with validation errors, so prior input is retained.
    pub fn with_submitted(mut self, data: &SubmittedData) -> Self {
        for field in &mut self.fields {
            if let Some(value) = data.get(&field.name) {
                field.initial = Some(value.clone());
            }
        }
        self
    }
}
