use async_trait::async_trait;

use crate::{
    AnswerRecord, CleanedValues, FieldName, QuestionId, StoreError, Submission, SubmissionId,
    Survey, UserId,
};

/// Persistence backend for submissions and their answers.
///
/// Both write operations are atomic: either the submission and every answer
/// row are durably written, or none are. Validation happens before a store
/// is invoked; stores only ever see cleaned values.
///
/// Concurrent edits of the same submission are not locked at this layer.
/// Implementations that rely on the storage engine's transaction isolation
/// get last-write-wins behavior; add a version check or row-level locking if
/// stricter semantics are needed.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Create a submission for (survey, user) with one answer row per
    /// question, serialized from the cleaned values.
    async fn create(
        &self,
        survey: &Survey,
        user: UserId,
        values: &CleanedValues,
    ) -> Result<Submission, StoreError>;

    /// Reassign an existing submission to (survey, user) and overwrite each
    /// question's stored answer in place.
    ///
    /// A question with no existing answer row is
    /// [`StoreError::MissingAnswer`] and rolls the unit of work back.
    async fn update(
        &self,
        submission: &Submission,
        survey: &Survey,
        user: UserId,
        values: &CleanedValues,
    ) -> Result<Submission, StoreError>;

    /// Fetch one submission by id.
    async fn submission(&self, id: SubmissionId) -> Result<Submission, StoreError>;

    /// Fetch all answer rows of one submission. Order is unspecified.
    async fn answers(&self, id: SubmissionId) -> Result<Vec<AnswerRecord>, StoreError>;
}

/// Serialize cleaned values into (question, stored string) pairs, in survey
/// order.
///
/// Every question must have a cleaned entry; a missing one means the values
/// were produced against a different schema, and nothing should be written.
/// Store implementations call this before opening their unit of work.
pub fn serialize_answers(
    survey: &Survey,
    values: &CleanedValues,
) -> Result<Vec<(QuestionId, String)>, StoreError> {
    let mut rows = Vec::with_capacity(survey.len());
    for question in survey.questions() {
        let name = FieldName::for_question(question.id());
        let value = values.get(&name).ok_or(StoreError::MissingValue {
            question: question.id(),
        })?;
        rows.push((question.id(), value.to_stored()));
    }
    Ok(rows)
}
