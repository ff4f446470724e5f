use chrono::{DateTime, Utc};

use crate::{AnswerId, QuestionId, SubmissionId, SurveyId, UserId};

/// One user's completion of one survey.
///
/// Created once per completion; the edit path reassigns its survey and user
/// references and bumps `updated_at` rather than creating a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: SubmissionId,
    pub survey_id: SurveyId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One stored answer for one question within a submission.
///
/// Exactly one record exists per (submission, question) pair for every
/// question the survey had when the submission was created. Edits overwrite
/// `value` in place; records are never deleted and recreated.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerRecord {
    pub id: AnswerId,
    pub submission_id: SubmissionId,
    pub question_id: QuestionId,

    /// The serialized answer: multi-choice selections joined with the value
    /// delimiter, a blank optional answer as the empty string, every other
    /// kind in its natural string form.
    pub value: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
