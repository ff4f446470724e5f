use crate::{Question, QuestionId, SurveyId};

/// An ordered catalog of questions presented to users as one form.
///
/// Surveys are authored and stored elsewhere; this crate consumes them
/// read-only. Question order is the order fields appear in the generated
/// form.
#[derive(Debug, Clone, PartialEq)]
pub struct Survey {
    id: SurveyId,
    title: String,
    questions: Vec<Question>,
}

impl Survey {
    /// Create a survey from its questions, preserving their order.
    pub fn new(id: impl Into<SurveyId>, title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            questions,
        }
    }

    /// Get the survey id.
    pub fn id(&self) -> SurveyId {
        self.id
    }

    /// Get the survey title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the questions in display order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Find a question by id.
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id() == id)
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the survey has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuestionKind;

    #[test]
    fn question_lookup_by_id() {
        let survey = Survey::new(
            1,
            "Feedback",
            vec![
                Question::new(10, "Rating", QuestionKind::Number),
                Question::new(11, "Comments", QuestionKind::LongText),
            ],
        );

        assert_eq!(survey.len(), 2);
        assert_eq!(
            survey.question(QuestionId::new(11)).map(Question::label),
            Some("Comments")
        );
        assert!(survey.question(QuestionId::new(99)).is_none());
    }
}
