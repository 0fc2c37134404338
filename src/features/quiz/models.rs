use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::common::validation::validate_answer_label;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_correct_answer"))]
pub struct QuizQuestion {
    #[validate(length(min = 1, message = "Question text cannot be empty"))]
    pub question: String,
    #[validate(length(equal = 4, message = "A question must offer exactly four options"))]
    pub options: Vec<String>,
    #[validate(custom(function = "validate_answer_label"))]
    pub correct_answer: String,
}

impl QuizQuestion {
    /// The label of an option is its first visible character, so `"B) Paris"` is `B`.
    pub fn option_label(option: &str) -> Option<String> {
        option.trim_start().chars().next().map(String::from)
    }

    pub fn labels(&self) -> Vec<String> {
        self.options
            .iter()
            .filter_map(|o| Self::option_label(o))
            .collect()
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels().iter().any(|l| l == label)
    }

    pub fn is_correct(&self, label: &str) -> bool {
        self.correct_answer == label
    }
}

fn validate_correct_answer(question: &QuizQuestion) -> Result<(), ValidationError> {
    if question.question.trim().is_empty() {
        return Err(ValidationError::new("question_blank")
            .with_message("Question text cannot be blank".into()));
    }

    if !question.has_label(&question.correct_answer) {
        return Err(ValidationError::new("answer_not_offered").with_message(
            format!(
                "Correct answer {:?} is not among the offered options",
                question.correct_answer
            )
            .into(),
        ));
    }

    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    pub topic: String,
}
