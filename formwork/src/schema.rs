use std::collections::HashSet;

use formwork_types::{
    ChoiceField, Field, FieldKind, FieldName, FormSchema, MultiChoiceField, QuestionKind,
    SchemaError, Survey,
};

use crate::choices::choice_options;

/// Generate the form schema for a survey: one typed field per question, in
/// survey order.
///
/// Field names derive from the question ids, so they are stable across
/// renders. Each question's declared type picks the field kind; label, help
/// text, and the required flag carry over unchanged.
pub fn build_schema(survey: &Survey) -> Result<FormSchema, SchemaError> {
    if survey.is_empty() {
        return Err(SchemaError::EmptySurvey {
            survey: survey.id(),
        });
    }

    let mut seen = HashSet::new();
    let mut fields = Vec::with_capacity(survey.len());
    for question in survey.questions() {
        if !seen.insert(question.id()) {
            return Err(SchemaError::DuplicateQuestion {
                question: question.id(),
            });
        }

        let kind = match question.kind() {
            QuestionKind::ShortText => FieldKind::ShortText,
            QuestionKind::LongText => FieldKind::LongText,
            QuestionKind::Number => FieldKind::Integer,
            QuestionKind::Select => {
                FieldKind::SingleChoice(ChoiceField::dropdown(choice_options(question)?))
            }
            QuestionKind::Radio => {
                FieldKind::SingleChoice(ChoiceField::radio(choice_options(question)?))
            }
            QuestionKind::MultiSelect => {
                FieldKind::MultiChoice(MultiChoiceField::new(choice_options(question)?))
            }
        };

        let mut field = Field::new(
            FieldName::for_question(question.id()),
            question.label(),
            kind,
        );
        if let Some(help_text) = question.help_text() {
            field = field.with_help_text(help_text);
        }
        if !question.is_required() {
            field = field.optional();
        }
        fields.push(field);
    }

    log::debug!(
        "Built schema for survey {} with {} fields",
        survey.id(),
        fields.len()
    );
    Ok(FormSchema::new(fields))
}
