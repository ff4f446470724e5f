//! A conference registration survey with required choice fields.

use formwork::{ChoiceOption, Question, QuestionId, QuestionKind, Survey};

pub const SURVEY_ID: i64 = 2;

pub const FULL_NAME: QuestionId = QuestionId::new(10);
pub const COMPANY: QuestionId = QuestionId::new(11);
pub const EXPERIENCE: QuestionId = QuestionId::new(12);
pub const SHIRT_SIZE: QuestionId = QuestionId::new(13);
pub const WORKSHOPS: QuestionId = QuestionId::new(14);
pub const DIET: QuestionId = QuestionId::new(15);

/// Build the event registration survey.
pub fn survey() -> Survey {
    Survey::new(
        SURVEY_ID,
        "Event registration",
        vec![
            Question::new(FULL_NAME, "Full name", QuestionKind::ShortText)
                .with_help_text("As it should appear on your badge"),
            Question::new(COMPANY, "Company", QuestionKind::ShortText).optional(),
            Question::new(EXPERIENCE, "Years of experience", QuestionKind::Number),
            Question::new(SHIRT_SIZE, "T-shirt size", QuestionKind::Select).with_options(vec![
                ChoiceOption::new("s", "Small"),
                ChoiceOption::new("m", "Medium"),
                ChoiceOption::new("l", "Large"),
                ChoiceOption::new("xl", "Extra large"),
            ]),
            Question::new(WORKSHOPS, "Which workshops will you attend?", QuestionKind::MultiSelect)
                .with_options(vec![
                    ChoiceOption::new("rust-101", "Rust from zero"),
                    ChoiceOption::new("async", "Async in practice"),
                    ChoiceOption::new("embedded", "Embedded systems"),
                    ChoiceOption::new("web", "Web services"),
                ]),
            Question::new(DIET, "Dietary preference", QuestionKind::Radio).with_options(vec![
                ChoiceOption::plain("none"),
                ChoiceOption::plain("vegetarian"),
                ChoiceOption::plain("vegan"),
            ]),
        ],
    )
}
