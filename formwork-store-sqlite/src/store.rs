use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use formwork::{
    AnswerRecord, CleanedValues, StoreError, Submission, SubmissionId, SubmissionStore, Survey,
    UserId, serialize_answers,
};

const CREATE_SUBMISSIONS: &str = r#"
CREATE TABLE IF NOT EXISTS submissions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    survey_id INTEGER NOT NULL,
    user_id INTEGER NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)
"#;

const CREATE_ANSWERS: &str = r#"
CREATE TABLE IF NOT EXISTS answers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    submission_id INTEGER NOT NULL REFERENCES submissions(id) ON DELETE CASCADE,
    question_id INTEGER NOT NULL,
    value TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    UNIQUE (submission_id, question_id)
)
"#;

/// A submission store backed by SQLite.
///
/// The `UNIQUE (submission_id, question_id)` constraint enforces the
/// one-answer-per-question invariant at the storage layer.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Wrap an existing pool. The tables must already exist; call
    /// [`SqliteStore::ensure_schema`] if they might not.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to a SQLite database and create the tables if missing.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let pool = SqlitePool::connect(url)
            .await
            .context("Failed to connect to sqlite database")?;
        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Create the submissions and answers tables if they do not exist.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_SUBMISSIONS)
            .execute(&self.pool)
            .await
            .context("Failed to create submissions table")?;
        sqlx::query(CREATE_ANSWERS)
            .execute(&self.pool)
            .await
            .context("Failed to create answers table")?;
        log::debug!("Ensured sqlite schema");
        Ok(())
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[derive(sqlx::FromRow)]
struct SubmissionRow {
    id: i64,
    survey_id: i64,
    user_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<SubmissionRow> for Submission {
    fn from(row: SubmissionRow) -> Self {
        Self {
            id: row.id.into(),
            survey_id: row.survey_id.into(),
            user_id: row.user_id.into(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AnswerRow {
    id: i64,
    submission_id: i64,
    question_id: i64,
    value: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<AnswerRow> for AnswerRecord {
    fn from(row: AnswerRow) -> Self {
        Self {
            id: row.id.into(),
            submission_id: row.submission_id.into(),
            question_id: row.question_id.into(),
            value: row.value,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl SubmissionStore for SqliteStore {
    async fn create(
        &self,
        survey: &Survey,
        user: UserId,
        values: &CleanedValues,
    ) -> Result<Submission, StoreError> {
        // Serialize before opening the transaction; a missing value writes
        // nothing.
        let rows = serialize_answers(survey, values)?;
        let now = Utc::now();

        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to start transaction")?;

        let result = sqlx::query(
            "INSERT INTO submissions (survey_id, user_id, created_at, updated_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(survey.id().value())
        .bind(user.value())
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await
        .context("Failed to insert submission")?;
        let id = SubmissionId::new(result.last_insert_rowid());

        for (question_id, value) in &rows {
            sqlx::query(
                "INSERT INTO answers (submission_id, question_id, value, created_at, updated_at)
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(id.value())
            .bind(question_id.value())
            .bind(value)
            .bind(now)
            .bind(now)
            .execute(&mut *tx)
            .await
            .context("Failed to insert answer")?;
        }

        tx.commit().await.context("Failed to commit submission")?;
        log::debug!("Inserted submission {id} with {} answers", rows.len());

        Ok(Submission {
            id,
            survey_id: survey.id(),
            user_id: user,
            created_at: now,
            updated_at: now,
        })
    }

    async fn update(
        &self,
        submission: &Submission,
        survey: &Survey,
        user: UserId,
        values: &CleanedValues,
    ) -> Result<Submission, StoreError> {
        let rows = serialize_answers(survey, values)?;
        let now = Utc::now();

        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to start transaction")?;

        let result = sqlx::query(
            "UPDATE submissions SET survey_id = ?, user_id = ?, updated_at = ? WHERE id = ?",
        )
        .bind(survey.id().value())
        .bind(user.value())
        .bind(now)
        .bind(submission.id.value())
        .execute(&mut *tx)
        .await
        .context("Failed to update submission")?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(submission.id));
        }

        for (question_id, value) in &rows {
            let result = sqlx::query(
                "UPDATE answers SET value = ?, updated_at = ?
                 WHERE submission_id = ? AND question_id = ?",
            )
            .bind(value)
            .bind(now)
            .bind(submission.id.value())
            .bind(question_id.value())
            .execute(&mut *tx)
            .await
            .context("Failed to update answer")?;

            // Zero rows means the submission predates this question; the
            // dropped transaction rolls everything back.
            if result.rows_affected() == 0 {
                log::warn!(
                    "No answer row for question {question_id} of submission {}",
                    submission.id
                );
                return Err(StoreError::MissingAnswer {
                    submission: submission.id,
                    question: *question_id,
                });
            }
        }

        tx.commit()
            .await
            .context("Failed to commit submission update")?;
        log::debug!(
            "Updated submission {} with {} answers",
            submission.id,
            rows.len()
        );

        Ok(Submission {
            id: submission.id,
            survey_id: survey.id(),
            user_id: user,
            created_at: submission.created_at,
            updated_at: now,
        })
    }

    async fn submission(&self, id: SubmissionId) -> Result<Submission, StoreError> {
        let row: Option<SubmissionRow> = sqlx::query_as(
            "SELECT id, survey_id, user_id, created_at, updated_at
             FROM submissions WHERE id = ?",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch submission")?;

        row.map(Submission::from).ok_or(StoreError::NotFound(id))
    }

    async fn answers(&self, id: SubmissionId) -> Result<Vec<AnswerRecord>, StoreError> {
        let exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM submissions WHERE id = ?")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch submission")?;
        if exists.is_none() {
            return Err(StoreError::NotFound(id));
        }

        let rows: Vec<AnswerRow> = sqlx::query_as(
            "SELECT id, submission_id, question_id, value, created_at, updated_at
             FROM answers WHERE submission_id = ? ORDER BY id",
        )
        .bind(id.value())
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch answers")?;

        Ok(rows.into_iter().map(AnswerRecord::from).collect())
    }
}
