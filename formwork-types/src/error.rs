use std::collections::BTreeMap;

use crate::{FieldName, QuestionId, SubmissionId, SurveyId};

/// Configuration errors detected while building a form from a survey.
///
/// These are authoring mistakes, surfaced to whoever maintains the question
/// catalog. End users never see them and cannot recover from them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("Survey {survey} has no questions")]
    EmptySurvey { survey: SurveyId },

    #[error("Question {question} appears more than once in the survey")]
    DuplicateQuestion { question: QuestionId },

    #[error("Question {question} is a choice question with no options")]
    NoOptions { question: QuestionId },

    #[error("Question {question} declares option value '{value}' more than once")]
    DuplicateOption { question: QuestionId, value: String },

    #[error("Option value '{value}' of question {question} contains the value delimiter")]
    DelimiterInOption { question: QuestionId, value: String },

    #[error("Submission {submission} belongs to survey {found}, not survey {expected}")]
    SurveyMismatch {
        submission: SubmissionId,
        expected: SurveyId,
        found: SurveyId,
    },
}

/// Field-keyed validation failures for one submission attempt.
///
/// Every field is checked and every applicable message collected before the
/// attempt is rejected; one bad field never hides another. Keys are ordered
/// so rendering and logging are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("Validation failed on {} field(s)", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<FieldName, Vec<String>>,
}

impl ValidationErrors {
    /// Create an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a message to a field.
    pub fn add(&mut self, name: FieldName, message: impl Into<String>) {
        self.errors.entry(name).or_default().push(message.into());
    }

    /// Check if a field has any messages.
    pub fn contains(&self, name: &FieldName) -> bool {
        self.errors.contains_key(name)
    }

    /// Get the messages attached to a field.
    pub fn messages(&self, name: &FieldName) -> &[String] {
        self.errors.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Get the erroring field names, in order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldName> {
        self.errors.keys()
    }

    /// Get an iterator over all field-messages pairs, in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &[String])> {
        self.errors
            .iter()
            .map(|(name, messages)| (name, messages.as_slice()))
    }

    /// Get the number of erroring fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check if no field has errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No submission exists with this id.
    #[error("Submission {0} not found")]
    NotFound(SubmissionId),

    /// An edit found no stored answer for a question the survey contains.
    /// The whole unit of work rolls back.
    #[error("Submission {submission} has no stored answer for question {question}")]
    MissingAnswer {
        submission: SubmissionId,
        question: QuestionId,
    },

    /// The cleaned value set has no entry for a question, so it was produced
    /// against a different schema. Nothing is written.
    #[error("No cleaned value for question {question}")]
    MissingValue { question: QuestionId },

    /// Backend-specific failure (driver error, connection loss, etc.)
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl StoreError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }
}

/// Error type for saving a form.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Submitted data failed validation. No writes happened; re-render the
    /// form with these errors and the prior input.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),

    /// The question catalog is malformed.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The storage layer failed. The unit of work rolled back; the user may
    /// retry.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SubmitError {
    /// Get the field-keyed validation failures, if that is what failed.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}
