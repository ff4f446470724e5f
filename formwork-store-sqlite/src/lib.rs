//! SQLite submission store for formwork.
//!
//! Persists submissions and their answers through `sqlx` over a
//! `SqlitePool`, wrapping each save in one transaction so writes apply
//! all-or-nothing.
//!
//! # Example
//!
//! ```ignore
//! use formwork::CreateForm;
//! use formwork_store_sqlite::SqliteStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = SqliteStore::connect("sqlite:answers.db?mode=rwc").await?;
//!
//!     let form = CreateForm::new(&survey, user)?;
//!     let submission = form.save(&store, &data).await?;
//!     println!("Saved submission {}", submission.id);
//!     Ok(())
//! }
//! ```

mod store;

pub use store::SqliteStore;
