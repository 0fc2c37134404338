use reqwest::StatusCode;
use thiserror::Error;

pub mod api;
pub mod app;
pub mod views;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server responded with {0}: {1}")]
    Status(StatusCode, String),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
