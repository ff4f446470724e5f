//! In-memory submission store.
//!
//! `MemoryStore` lets forms be exercised without a database, honoring the
//! same contracts as a persistent store: writes apply all-or-nothing, and
//! edits against missing answer rows fail loudly without changing anything.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use formwork_types::{
    AnswerId, AnswerRecord, CleanedValues, StoreError, Submission, SubmissionId, SubmissionStore,
    Survey, UserId, serialize_answers,
};

/// A submission store backed by process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    submissions: HashMap<SubmissionId, Submission>,
    answers: HashMap<SubmissionId, Vec<AnswerRecord>>,
    next_submission: i64,
    next_answer: i64,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored submissions.
    pub async fn submission_count(&self) -> usize {
        self.inner.read().await.submissions.len()
    }

    /// Get the number of stored answer rows across all submissions.
    pub async fn answer_count(&self) -> usize {
        self.inner.read().await.answers.values().map(Vec::len).sum()
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn create(
        &self,
        survey: &Survey,
        user: UserId,
        values: &CleanedValues,
    ) -> Result<Submission, StoreError> {
        // Serialize before taking the lock; a missing value writes nothing.
        let rows = serialize_answers(survey, values)?;

        let mut inner = self.inner.write().await;
        let now = Utc::now();

        inner.next_submission += 1;
        let id = SubmissionId::new(inner.next_submission);
        let submission = Submission {
            id,
            survey_id: survey.id(),
            user_id: user,
            created_at: now,
            updated_at: now,
        };

        let mut answers = Vec::with_capacity(rows.len());
        for (question_id, value) in rows {
            inner.next_answer += 1;
            answers.push(AnswerRecord {
                id: AnswerId::new(inner.next_answer),
                submission_id: id,
                question_id,
                value,
                created_at: now,
                updated_at: now,
            });
        }

        inner.answers.insert(id, answers);
        inner.submissions.insert(id, submission.clone());
        Ok(submission)
    }

    async fn update(
        &self,
        submission: &Submission,
        survey: &Survey,
        user: UserId,
        values: &CleanedValues,
    ) -> Result<Submission, StoreError> {
        let rows = serialize_answers(survey, values)?;

        let mut inner = self.inner.write().await;
        if !inner.submissions.contains_key(&submission.id) {
            return Err(StoreError::NotFound(submission.id));
        }
        let now = Utc::now();

        {
            let Some(answers) = inner.answers.get_mut(&submission.id) else {
                return Err(StoreError::NotFound(submission.id));
            };

            // Locate every row before changing any, so a missing answer
            // leaves the store untouched.
            let mut indices = Vec::with_capacity(rows.len());
            for (question_id, _) in &rows {
                let Some(index) = answers
                    .iter()
                    .position(|answer| answer.question_id == *question_id)
                else {
                    log::warn!(
                        "No answer row for question {question_id} of submission {}",
                        submission.id
                    );
                    return Err(StoreError::MissingAnswer {
                        submission: submission.id,
                        question: *question_id,
                    });
                };
                indices.push(index);
            }

            for ((_, value), index) in rows.into_iter().zip(indices) {
                answers[index].value = value;
                answers[index].updated_at = now;
            }
        }

        let Some(stored) = inner.submissions.get_mut(&submission.id) else {
            return Err(StoreError::NotFound(submission.id));
        };
        stored.survey_id = survey.id();
        stored.user_id = user;
        stored.updated_at = now;
        Ok(stored.clone())
    }

    async fn submission(&self, id: SubmissionId) -> Result<Submission, StoreError> {
        self.inner
            .read()
            .await
            .submissions
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn answers(&self, id: SubmissionId) -> Result<Vec<AnswerRecord>, StoreError> {
        self.inner
            .read()
            .await
            .answers
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }
}
