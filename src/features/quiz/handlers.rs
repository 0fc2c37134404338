use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::info;

use crate::{
    common::{app_state::AppState, error::ServerError},
    features::quiz::{
        models::QuizRequest,
        service::{self, TEST_PROMPT},
    },
};

pub fn quiz_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/quiz", post(generate_quiz))
        .route("/test", get(test_generation))
        .with_state(state)
}

async fn generate_quiz(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ServerError> {
    let Json(request) = payload?;
    let questions = service::generate_quiz(state.get_generator(), &request.topic).await?;
    info!("Generated {} questions about {}", questions.len(), request.topic);

    Ok(Json(questions))
}

async fn test_generation(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    let text = state.get_generator().generate(TEST_PROMPT).await?;
    Ok(text)
}
