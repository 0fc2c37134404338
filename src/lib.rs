use std::sync::Arc;

use axum::{Router, middleware::from_fn_with_state};

use crate::{
    common::{app_state::AppState, middleware::cors::cors_mw},
    features::{health::handlers::health_routes, quiz::handlers::quiz_routes},
};

pub mod client;
pub mod common;
pub mod config;
pub mod features;
pub mod session;

#[cfg(test)]
mod tests;

pub fn router(state: Arc<AppState>) -> Router {
    let api_routes = quiz_routes(state.clone()).layer(from_fn_with_state(state.clone(), cors_mw));

    Router::new()
        .nest("/api", api_routes)
        .nest("/health", health_routes())
}
