use std::collections::HashSet;

use formwork_types::{ChoiceOption, Question, QuestionKind, SchemaError, VALUE_DELIMITER};

/// Build the selectable option list for a choice-typed question.
///
/// Preserves the configured order. Option values must be unique within the
/// question, and multi-select values must not contain the delimiter they
/// are later joined with.
pub fn choice_options(question: &Question) -> Result<Vec<ChoiceOption>, SchemaError> {
    let options = question.options();
    if options.is_empty() {
        return Err(SchemaError::NoOptions {
            question: question.id(),
        });
    }

    let mut seen = HashSet::new();
    for option in options {
        if !seen.insert(option.value()) {
            return Err(SchemaError::DuplicateOption {
                question: question.id(),
                value: option.value().to_owned(),
            });
        }
        if question.kind() == QuestionKind::MultiSelect && option.value().contains(VALUE_DELIMITER)
        {
            return Err(SchemaError::DelimiterInOption {
                question: question.id(),
                value: option.value().to_owned(),
            });
        }
    }

    Ok(options.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_configured_order() {
        let question = Question::new(1, "Color", QuestionKind::Select).with_options(vec![
            ChoiceOption::plain("red"),
            ChoiceOption::plain("green"),
            ChoiceOption::plain("blue"),
        ]);

        let options = choice_options(&question).unwrap();
        let values: Vec<_> = options.iter().map(ChoiceOption::value).collect();
        assert_eq!(values, ["red", "green", "blue"]);
    }

    #[test]
    fn rejects_missing_options() {
        let question = Question::new(1, "Color", QuestionKind::Radio);
        assert_eq!(
            choice_options(&question),
            Err(SchemaError::NoOptions {
                question: 1.into()
            })
        );
    }

    #[test]
    fn rejects_duplicate_values() {
        let question = Question::new(1, "Color", QuestionKind::Select).with_options(vec![
            ChoiceOption::plain("red"),
            ChoiceOption::new("red", "Crimson"),
        ]);

        assert_eq!(
            choice_options(&question),
            Err(SchemaError::DuplicateOption {
                question: 1.into(),
                value: "red".into(),
            })
        );
    }

    #[test]
    fn rejects_delimiter_in_multi_select_values() {
        let question = Question::new(1, "Toppings", QuestionKind::MultiSelect).with_options(vec![
            ChoiceOption::plain("cheese"),
            ChoiceOption::plain("ham,egg"),
        ]);

        assert_eq!(
            choice_options(&question),
            Err(SchemaError::DelimiterInOption {
                question: 1.into(),
                value: "ham,egg".into(),
            })
        );
    }

    #[test]
    fn allows_delimiter_in_single_choice_values() {
        let question = Question::new(1, "Name format", QuestionKind::Select).with_options(vec![
            ChoiceOption::plain("Last, First"),
            ChoiceOption::plain("First Last"),
        ]);

        assert!(choice_options(&question).is_ok());
    }
}
