use crate::QuestionId;

/// A single question in a survey.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Identity within the catalog. Field names derive from it.
    id: QuestionId,

    /// The prompt text shown to the user.
    label: String,

    /// Optional guidance shown alongside the input.
    help_text: Option<String>,

    /// Whether a non-blank answer must be provided.
    required: bool,

    /// The declared answer type.
    kind: QuestionKind,

    /// The selectable options, for choice kinds. Empty otherwise.
    options: Vec<ChoiceOption>,
}

impl Question {
    /// Create a required question with no options.
    pub fn new(id: impl Into<QuestionId>, label: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            help_text: None,
            required: true,
            kind,
            options: Vec::new(),
        }
    }

    /// Mark the question as answerable with a blank value.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Attach guidance text.
    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    /// Set the selectable options. Only meaningful for choice kinds.
    pub fn with_options(mut self, options: Vec<ChoiceOption>) -> Self {
        self.options = options;
        self
    }

    /// Get the question id.
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Get the prompt text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the guidance text, if any.
    pub fn help_text(&self) -> Option<&str> {
        self.help_text.as_deref()
    }

    /// Check if a non-blank answer is required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Get the declared answer type.
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    /// Get the configured options.
    pub fn options(&self) -> &[ChoiceOption] {
        &self.options
    }
}

/// The declared answer type of a question.
///
/// Determines the field kind the schema generator emits and the validation
/// rules applied to submitted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Single-line free text.
    ShortText,

    /// Multi-line free text.
    LongText,

    /// Whole-number input.
    Number,

    /// Choose one option from a collapsed list.
    Select,

    /// Choose one option, all options visible at once.
    Radio,

    /// Choose any number of options.
    MultiSelect,
}

impl QuestionKind {
    /// Check if this kind carries a configured option list.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Select | Self::Radio | Self::MultiSelect)
    }
}

/// One selectable option of a choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    /// The value submitted and stored when this option is selected.
    value: String,

    /// The text shown to the user.
    label: String,
}

impl ChoiceOption {
    /// Create an option with distinct stored value and display label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Create an option whose label doubles as its stored value.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }

    /// Get the stored value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the display label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questions_are_required_by_default() {
        let question = Question::new(1, "Your name", QuestionKind::ShortText);
        assert!(question.is_required());
        assert!(question.help_text().is_none());

        let question = question.optional().with_help_text("As on your badge");
        assert!(!question.is_required());
        assert_eq!(question.help_text(), Some("As on your badge"));
    }

    #[test]
    fn choice_kinds() {
        assert!(QuestionKind::Select.is_choice());
        assert!(QuestionKind::Radio.is_choice());
        assert!(QuestionKind::MultiSelect.is_choice());
        assert!(!QuestionKind::ShortText.is_choice());
        assert!(!QuestionKind::Number.is_choice());
    }

    #[test]
    fn plain_option_uses_value_as_label() {
        let option = ChoiceOption::plain("yes");
        assert_eq!(option.value(), "yes");
        assert_eq!(option.label(), "yes");

        let option = ChoiceOption::new("de", "Germany");
        assert_eq!(option.value(), "de");
        assert_eq!(option.label(), "Germany");
    }
}
