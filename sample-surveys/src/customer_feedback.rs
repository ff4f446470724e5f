//! A post-purchase feedback survey exercising every question kind.

use formwork::{ChoiceOption, Question, QuestionId, QuestionKind, Survey};

pub const SURVEY_ID: i64 = 1;

pub const NAME: QuestionId = QuestionId::new(1);
pub const RATING: QuestionId = QuestionId::new(2);
pub const RECOMMEND: QuestionId = QuestionId::new(3);
pub const SOURCE: QuestionId = QuestionId::new(4);
pub const AREAS: QuestionId = QuestionId::new(5);
pub const COMMENTS: QuestionId = QuestionId::new(6);

/// Build the customer feedback survey.
pub fn survey() -> Survey {
    Survey::new(
        SURVEY_ID,
        "Customer feedback",
        vec![
            Question::new(NAME, "Your name", QuestionKind::ShortText),
            Question::new(RATING, "Overall rating", QuestionKind::Number)
                .with_help_text("1 (poor) to 5 (great)"),
            Question::new(RECOMMEND, "Would you recommend us?", QuestionKind::Radio)
                .with_options(vec![
                    ChoiceOption::plain("yes"),
                    ChoiceOption::plain("no"),
                    ChoiceOption::plain("maybe"),
                ]),
            Question::new(SOURCE, "How did you hear about us?", QuestionKind::Select)
                .with_options(vec![
                    ChoiceOption::new("search", "Web search"),
                    ChoiceOption::new("friend", "A friend"),
                    ChoiceOption::new("ad", "Advertisement"),
                    ChoiceOption::new("other", "Other"),
                ])
                .optional(),
            Question::new(AREAS, "Which areas need work?", QuestionKind::MultiSelect)
                .with_options(vec![
                    ChoiceOption::plain("docs"),
                    ChoiceOption::plain("pricing"),
                    ChoiceOption::plain("support"),
                    ChoiceOption::plain("shipping"),
                ])
                .optional(),
            Question::new(COMMENTS, "Anything else?", QuestionKind::LongText).optional(),
        ],
    )
}
