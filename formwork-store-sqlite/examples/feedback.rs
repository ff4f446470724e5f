//! End-to-end demo: build a feedback form, fail validation once, save, then
//! edit the stored submission.
//!
//! Run with `RUST_LOG=debug cargo run --example feedback` to see the store
//! at work.

use formwork::{CreateForm, EditForm, FieldName, QuestionId, SubmittedData};
use formwork_store_sqlite::SqliteStore;
use sample_surveys::customer_feedback;
use sqlx::sqlite::SqlitePoolOptions;

fn field(id: QuestionId) -> FieldName {
    FieldName::for_question(id)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    let store = SqliteStore::new(pool);
    store.ensure_schema().await?;

    let survey = customer_feedback::survey();
    let form = CreateForm::new(&survey, 7)?;

    // First attempt leaves required fields blank.
    let incomplete = SubmittedData::new().with_text(field(customer_feedback::NAME), "Alice");
    if let Err(err) = form.save(&store, &incomplete).await {
        if let Some(errors) = err.validation_errors() {
            println!("Rejected:");
            for (name, messages) in errors.iter() {
                println!("  {name}: {}", messages.join(", "));
            }
        }
    }

    // Second attempt is complete.
    let data = SubmittedData::new()
        .with_text(field(customer_feedback::NAME), "Alice")
        .with_text(field(customer_feedback::RATING), "4")
        .with_text(field(customer_feedback::RECOMMEND), "yes")
        .with_list(field(customer_feedback::AREAS), ["docs", "support"]);
    let submission = form.save(&store, &data).await?;
    println!("Saved submission {}", submission.id);

    // Editing repopulates fields from the stored answers; saving overwrites
    // them in place.
    let edit = EditForm::from_store(&store, &survey, 7, submission.id).await?;
    let update = data.with_text(field(customer_feedback::RATING), "5");
    let updated = edit.save(&store, &update).await?;
    println!("Updated submission {} at {}", updated.id, updated.updated_at);

    Ok(())
}
