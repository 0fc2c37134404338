use axum::{Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::{
    common::services::gemini_client::GenerationError,
    features::quiz::service::QuizGenerationError,
};

pub static QUIZ_FAILURE_MESSAGE: &str = "Failed to generate quiz";
pub static TEST_FAILURE_MESSAGE: &str = "Failed to generate response";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Api error: {1}")]
    Api(StatusCode, String),

    #[error("Invalid quiz request: {0}")]
    QuizRequest(#[from] JsonRejection),

    #[error("Quiz generation error: {0}")]
    Quiz(#[from] QuizGenerationError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ServerError::Internal(e) => {
                error!("Internal server error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, String::new()).into_response()
            }
            ServerError::Api(sc, msg) => {
                warn!("Api error: {} - {}", sc, msg);
                (sc, msg).into_response()
            }
            ServerError::QuizRequest(e) => {
                warn!("Rejected quiz request body: {}", e);
                quiz_failure()
            }
            ServerError::Quiz(e) => {
                match &e {
                    QuizGenerationError::Upstream(inner) => {
                        error!("Quiz generation failed upstream: {}", inner)
                    }
                    QuizGenerationError::Parse(inner) => {
                        error!("Generated quiz is not valid JSON: {}", inner)
                    }
                    QuizGenerationError::Shape(inner) => {
                        error!("Generated quiz has an invalid shape: {}", inner)
                    }
                }
                quiz_failure()
            }
            ServerError::Generation(e) => {
                error!("Text generation failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from(TEST_FAILURE_MESSAGE),
                )
                    .into_response()
            }
        }
    }
}

fn quiz_failure() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": QUIZ_FAILURE_MESSAGE })),
    )
        .into_response()
}
