use dotenvy::dotenv;
use quizmaster::{common::app_state::AppState, config::app_config::CONFIG, router};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize .env
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    if CONFIG.gemini.api_key.is_none() {
        warn!("GEMINI_API_KEY is not set, quiz generation will fail");
    }

    let state = AppState::from_config(&CONFIG);
    let app = router(state);

    // Initialize webserver
    let listener = match tokio::net::TcpListener::bind(CONFIG.bind_address()).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", CONFIG.bind_address(), e);
            return;
        }
    };

    match listener.local_addr() {
        Ok(addr) => info!("Server listening on address: {}", addr),
        Err(e) => error!("Failed to read local address: {}", e),
    }

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server stopped: {}", e);
    }
}
