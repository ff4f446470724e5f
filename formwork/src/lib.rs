//! # formwork
//!
//! Dynamic survey forms: schema generation, validation, and answer
//! persistence. Backend-agnostic.
//!
//! A survey is an ordered catalog of typed questions. This crate turns one
//! into a form schema (one typed input field per question), validates
//! submitted data against that schema collecting every field error, and
//! writes the cleaned answers through a pluggable store, atomically.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use formwork::{CreateForm, EditForm, MemoryStore, SubmittedData};
//!
//! let store = MemoryStore::new();
//!
//! // GET: render form.schema()
//! let form = CreateForm::new(&survey, user)?;
//!
//! // POST:
//! let data = SubmittedData::new()
//!     .with_text("field_survey_1", "Alice")
//!     .with_list("field_survey_2", ["rust", "sql"]);
//!
//! match form.save(&store, &data).await {
//!     Ok(submission) => { /* redirect to thank-you page */ }
//!     Err(err) => { /* re-render with err.validation_errors() */ }
//! }
//!
//! // Editing an existing submission repopulates initial values:
//! let form = EditForm::from_store(&store, &survey, user, submission_id).await?;
//! ```
//!
//! ## Stores
//!
//! Stores are separate crates that implement `SubmissionStore`:
//! - `formwork-store-sqlite` - SQLite persistence via sqlx
//!
//! `MemoryStore` ships here for tests and examples.

// Re-export all types from formwork-types
pub use formwork_types::*;

mod choices;
pub use choices::choice_options;

mod schema;
pub use schema::build_schema;

mod validate;
pub use validate::{REQUIRED_MESSAGE, validate};

mod form;
pub use form::{CreateForm, EditForm};

// In-memory store for exercising forms without a database
mod memory;
pub use memory::MemoryStore;
