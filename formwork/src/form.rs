use formwork_types::{
    AnswerRecord, CleanedValues, FormSchema, SchemaError, Submission, SubmissionId,
    SubmissionStore, SubmitError, SubmittedData, Survey, UserId, ValidationErrors,
};

use crate::{schema::build_schema, validate::validate};

/// A form for a user's first submission of a survey.
///
/// Build it on GET and render [`CreateForm::schema`]; on POST, call
/// [`CreateForm::save`]. When validation fails, rebuild with
/// [`CreateForm::with_submitted`] so the user's input is retained.
#[derive(Debug, Clone)]
pub struct CreateForm<'a> {
    survey: &'a Survey,
    user: UserId,
    schema: FormSchema,
}

impl<'a> CreateForm<'a> {
    /// Build the form for a survey, fields in survey order, no initial
    /// values.
    pub fn new(survey: &'a Survey, user: impl Into<UserId>) -> Result<Self, SchemaError> {
        Ok(Self {
            survey,
            user: user.into(),
            schema: build_schema(survey)?,
        })
    }

    /// Retain previously submitted input as the fields' initial values.
    pub fn with_submitted(mut self, data: &SubmittedData) -> Self {
        self.schema = self.schema.with_submitted(data);
        self
    }

    /// Get the survey this form was built from.
    pub fn survey(&self) -> &Survey {
        self.survey
    }

    /// Get the submitting user.
    pub fn user(&self) -> UserId {
        self.user
    }

    /// Get the form schema for rendering.
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Validate submitted data against this form's schema.
    pub fn validate(&self, data: &SubmittedData) -> Result<CleanedValues, ValidationErrors> {
        validate(&self.schema, data)
    }

    /// Validate, then persist a new submission with one answer per question.
    ///
    /// Validation failure performs no writes and carries the field-keyed
    /// errors; a store failure rolls the whole write back.
    pub async fn save(
        &self,
        store: &dyn SubmissionStore,
        data: &SubmittedData,
    ) -> Result<Submission, SubmitError> {
        let values = self.validate(data)?;
        let submission = store.create(self.survey, self.user, &values).await?;
        log::info!(
            "Created submission {} for survey {} by user {}",
            submission.id,
            self.survey.id(),
            self.user
        );
        Ok(submission)
    }
}

/// A form for editing an existing submission.
///
/// Fields come pre-populated from the stored answers. Saving overwrites the
/// stored answer of every question in place and reassigns the submission to
/// the acting user.
#[derive(Debug, Clone)]
pub struct EditForm<'a> {
    survey: &'a Survey,
    user: UserId,
    submission: Submission,
    schema: FormSchema,
}

impl<'a> EditForm<'a> {
    /// Build the form from already-loaded stored data.
    ///
    /// The submission must belong to the survey being edited; a mismatch is
    /// a [`SchemaError::SurveyMismatch`].
    pub fn load(
        survey: &'a Survey,
        user: impl Into<UserId>,
        submission: Submission,
        answers: &[AnswerRecord],
    ) -> Result<Self, SchemaError> {
        if submission.survey_id != survey.id() {
            return Err(SchemaError::SurveyMismatch {
                submission: submission.id,
                expected: survey.id(),
                found: submission.survey_id,
            });
        }

        Ok(Self {
            survey,
            user: user.into(),
            schema: build_schema(survey)?.with_stored_answers(answers),
            submission,
        })
    }

    /// Fetch a submission and its answers from a store, then build the form.
    pub async fn from_store(
        store: &dyn SubmissionStore,
        survey: &'a Survey,
        user: impl Into<UserId>,
        id: SubmissionId,
    ) -> Result<EditForm<'a>, SubmitError> {
        let submission = store.submission(id).await?;
        let answers = store.answers(id).await?;
        Ok(Self::load(survey, user, submission, &answers)?)
    }

    /// Retain previously submitted input as the fields' initial values.
    pub fn with_submitted(mut self, data: &SubmittedData) -> Self {
        self.schema = self.schema.with_submitted(data);
        self
    }

    /// Get the survey this form was built from.
    pub fn survey(&self) -> &Survey {
        self.survey
    }

    /// Get the acting user.
    pub fn user(&self) -> UserId {
        self.user
    }

    /// Get the submission being edited, as loaded.
    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    /// Get the form schema for rendering.
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Validate submitted data against this form's schema.
    pub fn validate(&self, data: &SubmittedData) -> Result<CleanedValues, ValidationErrors> {
        validate(&self.schema, data)
    }

    /// Validate, then overwrite the stored answers in place and reassign the
    /// submission to this form's survey and user.
    ///
    /// A question with no stored answer row fails with
    /// [`formwork_types::StoreError::MissingAnswer`] and rolls the whole
    /// unit of work back.
    pub async fn save(
        &self,
        store: &dyn SubmissionStore,
        data: &SubmittedData,
    ) -> Result<Submission, SubmitError> {
        let values = self.validate(data)?;
        let submission = store
            .update(&self.submission, self.survey, self.user, &values)
            .await?;
        log::info!(
            "Updated submission {} for survey {} by user {}",
            submission.id,
            self.survey.id(),
            self.user
        );
        Ok(submission)
    }
}
