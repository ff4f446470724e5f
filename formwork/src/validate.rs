use formwork_types::{
    ChoiceField, CleanedValue, CleanedValues, Field, FieldKind, FormSchema, MultiChoiceField,
    RawValue, SubmittedData, ValidationErrors,
};

/// Message attached to a required field that received a blank value.
pub const REQUIRED_MESSAGE: &str = "This field is required";

const NOT_A_WHOLE_NUMBER: &str = "Enter a whole number";
const EXPECTED_SINGLE_VALUE: &str = "Enter a single value";
const EXPECTED_VALUE_LIST: &str = "Enter a list of values";

fn invalid_choice(value: &str) -> String {
    format!("'{value}' is not a valid choice")
}

/// Validate submitted data against a form schema.
///
/// Every field is checked and every applicable error collected before the
/// data is rejected; one bad field never hides another. On success, every
/// field has a cleaned entry, with blank optional fields cleaning to
/// [`CleanedValue::Empty`].
pub fn validate(
    schema: &FormSchema,
    data: &SubmittedData,
) -> Result<CleanedValues, ValidationErrors> {
    let mut cleaned = CleanedValues::new();
    let mut errors = ValidationErrors::new();

    for field in schema.fields() {
        match clean_field(field, data.get(field.name())) {
            Ok(CleanedValue::Empty) if field.is_required() => {
                errors.add(field.name().clone(), REQUIRED_MESSAGE);
            }
            Ok(value) => cleaned.insert(field.name().clone(), value),
            Err(messages) => {
                for message in messages {
                    errors.add(field.name().clone(), message);
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(cleaned)
    } else {
        log::debug!("Validation failed on {} field(s)", errors.len());
        Err(errors)
    }
}

/// Clean one field's raw input. Absent and blank values clean to
/// [`CleanedValue::Empty`] regardless of kind; the required pass in
/// [`validate`] decides whether that is acceptable.
fn clean_field(field: &Field, raw: Option<&RawValue>) -> Result<CleanedValue, Vec<String>> {
    let Some(raw) = raw else {
        return Ok(CleanedValue::Empty);
    };
    if raw.is_blank() {
        return Ok(CleanedValue::Empty);
    }

    match field.kind() {
        FieldKind::ShortText | FieldKind::LongText => clean_text(raw),
        FieldKind::Integer => clean_integer(raw),
        FieldKind::SingleChoice(choice) => clean_choice(choice, raw),
        FieldKind::MultiChoice(multi) => clean_selections(multi, raw),
    }
}

fn clean_text(raw: &RawValue) -> Result<CleanedValue, Vec<String>> {
    match raw.as_text() {
        Some(text) => Ok(CleanedValue::Text(text.trim().to_owned())),
        None => Err(vec![EXPECTED_SINGLE_VALUE.to_owned()]),
    }
}

fn clean_integer(raw: &RawValue) -> Result<CleanedValue, Vec<String>> {
    let Some(text) = raw.as_text() else {
        return Err(vec![EXPECTED_SINGLE_VALUE.to_owned()]);
    };
    match text.trim().parse::<i64>() {
        Ok(value) => Ok(CleanedValue::Integer(value)),
        Err(_) => Err(vec![NOT_A_WHOLE_NUMBER.to_owned()]),
    }
}

/// Choice values are matched verbatim against the option set, not trimmed.
fn clean_choice(choice: &ChoiceField, raw: &RawValue) -> Result<CleanedValue, Vec<String>> {
    let Some(value) = raw.as_text() else {
        return Err(vec![EXPECTED_SINGLE_VALUE.to_owned()]);
    };
    if choice.contains(value) {
        Ok(CleanedValue::Choice(value.to_owned()))
    } else {
        Err(vec![invalid_choice(value)])
    }
}

fn clean_selections(
    multi: &MultiChoiceField,
    raw: &RawValue,
) -> Result<CleanedValue, Vec<String>> {
    let Some(values) = raw.as_list() else {
        return Err(vec![EXPECTED_VALUE_LIST.to_owned()]);
    };

    let invalid: Vec<String> = values
        .iter()
        .filter(|value| !multi.contains(value))
        .map(|value| invalid_choice(value))
        .collect();
    if !invalid.is_empty() {
        return Err(invalid);
    }

    Ok(CleanedValue::Selections(multi.normalize(values)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_schema;
    use formwork_types::{ChoiceOption, FieldName, Question, QuestionKind, Survey};

    fn schema() -> FormSchema {
        let survey = Survey::new(
            1,
            "Feedback",
            vec![
                Question::new(1, "Name", QuestionKind::ShortText),
                Question::new(2, "Rating", QuestionKind::Number),
                Question::new(3, "Channel", QuestionKind::Select).with_options(vec![
                    ChoiceOption::plain("email"),
                    ChoiceOption::plain("phone"),
                ]),
                Question::new(4, "Topics", QuestionKind::MultiSelect)
                    .with_options(vec![
                        ChoiceOption::plain("docs"),
                        ChoiceOption::plain("pricing"),
                        ChoiceOption::plain("support"),
                    ])
                    .optional(),
                Question::new(5, "Comments", QuestionKind::LongText).optional(),
            ],
        );
        build_schema(&survey).unwrap()
    }

    fn name(id: i64) -> FieldName {
        FieldName::for_question(id.into())
    }

    fn complete_data() -> SubmittedData {
        SubmittedData::new()
            .with_text(name(1), "Alice")
            .with_text(name(2), "4")
            .with_text(name(3), "email")
            .with_list(name(4), ["support", "docs"])
            .with_text(name(5), "  all good  ")
    }

    #[test]
    fn cleans_every_field() {
        let cleaned = validate(&schema(), &complete_data()).unwrap();

        assert_eq!(cleaned.text(&name(1)).unwrap(), "Alice");
        assert_eq!(cleaned.integer(&name(2)).unwrap(), 4);
        assert_eq!(cleaned.choice(&name(3)).unwrap(), "email");
        assert_eq!(cleaned.selections(&name(4)).unwrap(), ["docs", "support"]);
        assert_eq!(cleaned.text(&name(5)).unwrap(), "all good");
        assert_eq!(cleaned.len(), 5);
    }

    #[test]
    fn blank_optional_fields_clean_to_empty() {
        let data = SubmittedData::new()
            .with_text(name(1), "Alice")
            .with_text(name(2), "4")
            .with_text(name(3), "phone")
            .with_list(name(4), Vec::<String>::new());

        let cleaned = validate(&schema(), &data).unwrap();
        assert_eq!(cleaned.get(&name(4)), Some(&CleanedValue::Empty));
        assert_eq!(cleaned.get(&name(5)), Some(&CleanedValue::Empty));
    }

    #[test]
    fn required_fields_report_the_exact_message() {
        let data = SubmittedData::new().with_text(name(1), "   ");

        let errors = validate(&schema(), &data).unwrap_err();
        assert_eq!(errors.len(), 3);
        for field in [name(1), name(2), name(3)] {
            assert_eq!(errors.messages(&field), ["This field is required"]);
        }
    }

    #[test]
    fn blank_required_number_is_the_only_error() {
        let survey = Survey::new(
            2,
            "Mini",
            vec![
                Question::new(1, "Age", QuestionKind::Number),
                Question::new(2, "Notes", QuestionKind::ShortText).optional(),
            ],
        );
        let schema = build_schema(&survey).unwrap();
        let data = SubmittedData::new()
            .with_text(name(1), "")
            .with_text(name(2), "hello");

        let errors = validate(&schema, &data).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.messages(&name(1)), ["This field is required"]);
    }

    #[test]
    fn errors_collect_across_all_fields() {
        let data = complete_data()
            .with_text(name(2), "four")
            .with_text(name(3), "fax");

        let errors = validate(&schema(), &data).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.messages(&name(2)), ["Enter a whole number"]);
        assert_eq!(errors.messages(&name(3)), ["'fax' is not a valid choice"]);
    }

    #[test]
    fn integers_accept_surrounding_whitespace_and_sign() {
        let data = complete_data().with_text(name(2), " -12 ");
        let cleaned = validate(&schema(), &data).unwrap();
        assert_eq!(cleaned.integer(&name(2)).unwrap(), -12);
    }

    #[test]
    fn multi_select_reports_each_invalid_value() {
        let data = complete_data().with_list(name(4), ["docs", "spam", "other"]);

        let errors = validate(&schema(), &data).unwrap_err();
        assert_eq!(
            errors.messages(&name(4)),
            [
                "'spam' is not a valid choice",
                "'other' is not a valid choice"
            ]
        );
    }

    #[test]
    fn multi_select_normalizes_to_option_order() {
        let data = complete_data().with_list(name(4), ["support", "docs", "support"]);

        let cleaned = validate(&schema(), &data).unwrap();
        assert_eq!(cleaned.selections(&name(4)).unwrap(), ["docs", "support"]);
    }

    #[test]
    fn single_values_rejected_where_lists_expected_and_vice_versa() {
        let data = complete_data()
            .with_list(name(1), ["Alice", "Bob"])
            .with_text(name(4), "docs");

        let errors = validate(&schema(), &data).unwrap_err();
        assert_eq!(errors.messages(&name(1)), ["Enter a single value"]);
        assert_eq!(errors.messages(&name(4)), ["Enter a list of values"]);
    }

    #[test]
    fn choice_values_are_not_trimmed() {
        let data = complete_data().with_text(name(3), " email ");

        let errors = validate(&schema(), &data).unwrap_err();
        assert_eq!(errors.messages(&name(3)), ["' email ' is not a valid choice"]);
    }
}
