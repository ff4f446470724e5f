//! Ready-made survey catalogs for formwork examples and integration tests.
//!
//! Each module builds one realistic survey and names its question ids, so
//! tests and examples can address fields without magic numbers.

pub mod customer_feedback;
pub mod event_registration;
