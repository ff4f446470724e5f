//! Round-trip tests for the SQLite store against in-memory databases.

use formwork::{
    CleanedValue, CleanedValues, CreateForm, EditForm, FieldName, Question, QuestionId,
    QuestionKind, RawValue, StoreError, SubmissionStore, SubmitError, SubmittedData, Survey,
};
use formwork_store_sqlite::SqliteStore;
use sample_surveys::{customer_feedback, event_registration};
use sqlx::sqlite::SqlitePoolOptions;

// One connection, or each pool checkout would see its own empty in-memory
// database.
async fn memory_store() -> anyhow::Result<SqliteStore> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    let store = SqliteStore::new(pool);
    store.ensure_schema().await?;
    Ok(store)
}

fn field(id: QuestionId) -> FieldName {
    FieldName::for_question(id)
}

fn feedback_data() -> SubmittedData {
    SubmittedData::new()
        .with_text(field(customer_feedback::NAME), "Alice")
        .with_text(field(customer_feedback::RATING), "4")
        .with_text(field(customer_feedback::RECOMMEND), "yes")
        .with_text(field(customer_feedback::SOURCE), "friend")
        .with_list(field(customer_feedback::AREAS), ["support", "docs"])
}

#[tokio::test]
async fn test_create_persists_submission_and_answers() -> anyhow::Result<()> {
    let store = memory_store().await?;
    let survey = customer_feedback::survey();

    let submission = CreateForm::new(&survey, 7)?
        .save(&store, &feedback_data())
        .await?;

    let stored = store.submission(submission.id).await?;
    assert_eq!(stored.survey_id, survey.id());
    assert_eq!(stored.user_id, 7.into());

    let answers = store.answers(submission.id).await?;
    assert_eq!(answers.len(), 6);
    let by_question = |id| {
        answers
            .iter()
            .find(|answer| answer.question_id == id)
            .unwrap()
            .value
            .clone()
    };
    assert_eq!(by_question(customer_feedback::NAME), "Alice");
    assert_eq!(by_question(customer_feedback::RATING), "4");
    assert_eq!(by_question(customer_feedback::AREAS), "docs,support");
    assert_eq!(by_question(customer_feedback::COMMENTS), "");
    Ok(())
}

#[tokio::test]
async fn test_edit_round_trip_repopulates_and_overwrites() -> anyhow::Result<()> {
    let store = memory_store().await?;
    let survey = customer_feedback::survey();

    let submission = CreateForm::new(&survey, 7)?
        .save(&store, &feedback_data())
        .await?;
    let original_answers = store.answers(submission.id).await?;

    let edit = EditForm::from_store(&store, &survey, 8, submission.id).await?;
    let areas = edit.schema().field(&field(customer_feedback::AREAS)).unwrap();
    assert_eq!(
        areas.initial(),
        Some(&RawValue::List(vec!["docs".into(), "support".into()]))
    );

    let update = feedback_data()
        .with_text(field(customer_feedback::RATING), "5")
        .with_list(field(customer_feedback::AREAS), ["pricing"]);
    let updated = edit.save(&store, &update).await?;

    assert_eq!(updated.id, submission.id);
    assert_eq!(updated.user_id, 8.into());

    let answers = store.answers(submission.id).await?;
    for (current, original) in answers.iter().zip(&original_answers) {
        assert_eq!(current.id, original.id);
        assert_eq!(current.question_id, original.question_id);
        assert_eq!(current.created_at, original.created_at);
    }
    let rating = answers
        .iter()
        .find(|answer| answer.question_id == customer_feedback::RATING)
        .unwrap();
    assert_eq!(rating.value, "5");
    let areas = answers
        .iter()
        .find(|answer| answer.question_id == customer_feedback::AREAS)
        .unwrap();
    assert_eq!(areas.value, "pricing");
    Ok(())
}

#[tokio::test]
async fn test_missing_answer_rolls_back_the_transaction() -> anyhow::Result<()> {
    let store = memory_store().await?;

    let original = Survey::new(
        5,
        "Check-in",
        vec![Question::new(50, "How are you?", QuestionKind::ShortText)],
    );
    let grown = Survey::new(
        5,
        "Check-in",
        vec![
            Question::new(50, "How are you?", QuestionKind::ShortText),
            Question::new(51, "Energy level", QuestionKind::Number),
        ],
    );

    let data = SubmittedData::new().with_text(field(QuestionId::new(50)), "fine");
    let submission = CreateForm::new(&original, 3)?.save(&store, &data).await?;

    let edit = EditForm::from_store(&store, &grown, 3, submission.id).await?;
    let data = SubmittedData::new()
        .with_text(field(QuestionId::new(50)), "great")
        .with_text(field(QuestionId::new(51)), "8");
    let err = edit.save(&store, &data).await.unwrap_err();
    assert!(matches!(
        err,
        SubmitError::Store(StoreError::MissingAnswer { question, .. }) if question == 51.into()
    ));

    // The submission row update ran inside the same transaction; the
    // rollback must undo it along with everything else.
    let stored = store.submission(submission.id).await?;
    assert_eq!(stored.updated_at, submission.updated_at);
    let answers = store.answers(submission.id).await?;
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].value, "fine");
    Ok(())
}

#[tokio::test]
async fn test_duplicate_answer_rows_cannot_be_created() -> anyhow::Result<()> {
    let store = memory_store().await?;

    // Bypasses the schema builder, which would reject the duplicate id;
    // the UNIQUE constraint is the storage-layer backstop.
    let survey = Survey::new(
        9,
        "Broken",
        vec![
            Question::new(90, "One", QuestionKind::ShortText),
            Question::new(90, "One again", QuestionKind::ShortText),
        ],
    );
    let mut values = CleanedValues::new();
    values.insert(
        field(QuestionId::new(90)),
        CleanedValue::Text("hello".into()),
    );

    let err = store.create(&survey, 1.into(), &values).await.unwrap_err();
    assert!(matches!(err, StoreError::Backend(_)));

    let (submissions,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM submissions")
        .fetch_one(store.pool())
        .await?;
    let (answers,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM answers")
        .fetch_one(store.pool())
        .await?;
    assert_eq!(submissions, 0);
    assert_eq!(answers, 0);
    Ok(())
}

#[tokio::test]
async fn test_required_multi_select_must_be_answered() -> anyhow::Result<()> {
    let store = memory_store().await?;
    let survey = event_registration::survey();
    let form = CreateForm::new(&survey, 12)?;

    let mut data = SubmittedData::new()
        .with_text(field(event_registration::FULL_NAME), "Grace Hopper")
        .with_text(field(event_registration::EXPERIENCE), "40")
        .with_text(field(event_registration::SHIRT_SIZE), "m")
        .with_text(field(event_registration::DIET), "vegetarian");

    let err = form.save(&store, &data).await.unwrap_err();
    let errors = err.validation_errors().expect("validation failure");
    assert_eq!(
        errors.messages(&field(event_registration::WORKSHOPS)),
        ["This field is required"]
    );

    data.insert(
        field(event_registration::WORKSHOPS),
        vec!["async", "rust-101"],
    );
    let submission = form.save(&store, &data).await?;

    let answers = store.answers(submission.id).await?;
    let workshops = answers
        .iter()
        .find(|answer| answer.question_id == event_registration::WORKSHOPS)
        .unwrap();
    assert_eq!(workshops.value, "rust-101,async");
    Ok(())
}

#[tokio::test]
async fn test_missing_submission_reads_are_not_found() -> anyhow::Result<()> {
    let store = memory_store().await?;

    let id = formwork::SubmissionId::new(404);
    assert!(matches!(
        store.submission(id).await,
        Err(StoreError::NotFound(found)) if found == id
    ));
    assert!(matches!(
        store.answers(id).await,
        Err(StoreError::NotFound(found)) if found == id
    ));
    Ok(())
}
