use reqwest::Client;
use tracing::{debug, error};

use crate::{
    client::ClientError,
    features::quiz::models::{QuizQuestion, QuizRequest},
};

/// Talks to the quiz generation service.
#[derive(Debug, Clone)]
pub struct QuizApi {
    client: Client,
    server: String,
}

impl QuizApi {
    pub fn new(client: Client, server: impl Into<String>) -> Self {
        let server = server.into().trim_end_matches('/').to_string();
        Self { client, server }
    }

    pub async fn generate_quiz(&self, topic: &str) -> Result<Vec<QuizQuestion>, ClientError> {
        let url = format!("{}/api/quiz", self.server);
        let payload = QuizRequest {
            topic: topic.trim().to_string(),
        };

        debug!("Requesting quiz from {}", url);
        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or("No body".into());
            error!("Quiz request failed: {} - {}", status, body);
            return Err(ClientError::Status(status, body));
        }

        Ok(response.json::<Vec<QuizQuestion>>().await?)
    }
}
