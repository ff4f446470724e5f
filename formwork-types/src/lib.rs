//! Core types for the formwork crate.
//!
//! This crate provides the foundational types for dynamic survey forms:
//! - `Survey`, `Question` and `QuestionKind` - The catalog a form is built from
//! - `FormSchema`, `Field` and `FieldKind` - The generated form description
//! - `SubmittedData` and `CleanedValues` - Raw input and validated output
//! - `Submission` and `AnswerRecord` - The stored result of a completed form
//! - `SubmissionStore` trait - For implementing answer persistence backends

mod id;
pub use id::{AnswerId, QuestionId, SubmissionId, SurveyId, UserId};

mod question;
pub use question::{ChoiceOption, Question, QuestionKind};

mod survey;
pub use survey::Survey;

mod field;
pub use field::{
    ChoiceField, ChoicePresentation, Field, FieldKind, FieldName, FormSchema, MultiChoiceField,
    VALUE_DELIMITER,
};

mod value;
pub use value::{CleanedValue, CleanedValues, RawValue, SubmittedData, ValueError};

mod submission;
pub use submission::{AnswerRecord, Submission};

mod error;
pub use error::{SchemaError, StoreError, SubmitError, ValidationErrors};

mod traits;
pub use traits::{SubmissionStore, serialize_answers};
