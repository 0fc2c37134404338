use thiserror::Error;
use tracing::{debug, info};
use validator::Validate;

use crate::{
    common::{
        services::gemini_client::{GenerationError, TextGenerator},
        validation::format_validation_errors,
    },
    features::quiz::models::QuizQuestion,
};

pub const QUESTION_COUNT: usize = 5;
pub const TEST_PROMPT: &str = "Explain how AI works in a few words";

#[derive(Debug, Error)]
pub enum QuizGenerationError {
    #[error("Upstream generation failed: {0}")]
    Upstream(#[from] GenerationError),

    #[error("Response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Response has an invalid shape: {0}")]
    Shape(String),
}

pub fn build_prompt(topic: &str) -> String {
    format!(
        "Create a 5-question multiple-choice quiz about {}.\n    \
         Return JSON format: [{{\"question\": \"...\", \"options\": [\"A\", \"B\", \"C\", \"D\"], \"correctAnswer\": \"A\"}}]",
        topic
    )
}

/// Drops markdown code fences wrapped around generated JSON.
pub fn strip_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

pub fn parse_quiz(text: &str) -> Result<Vec<QuizQuestion>, QuizGenerationError> {
    let cleaned = strip_fences(text);
    let questions: Vec<QuizQuestion> = serde_json::from_str(&cleaned)?;

    if questions.len() != QUESTION_COUNT {
        return Err(QuizGenerationError::Shape(format!(
            "Expected {} questions, got {}",
            QUESTION_COUNT,
            questions.len()
        )));
    }

    for (index, question) in questions.iter().enumerate() {
        if let Err(e) = question.validate() {
            return Err(QuizGenerationError::Shape(format!(
                "Question {}: {}",
                index + 1,
                format_validation_errors(&e)
            )));
        }
    }

    Ok(questions)
}

pub async fn generate_quiz(
    generator: &dyn TextGenerator,
    topic: &str,
) -> Result<Vec<QuizQuestion>, QuizGenerationError> {
    info!("Generating quiz about: {}", topic);

    let prompt = build_prompt(topic);
    let text = generator.generate(&prompt).await?;
    debug!("Generated quiz response: {}", text);

    parse_quiz(&text)
}
