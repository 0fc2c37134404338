use std::sync::Arc;

use reqwest::Client;

use crate::{
    common::services::gemini_client::{GeminiClient, TextGenerator},
    config::app_config::AppConfig,
};

#[derive(Clone)]
pub struct AppState {
    generator: Arc<dyn TextGenerator>,
    allowed_origin: String,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Arc<Self> {
        let client = Client::new();
        let generator = Arc::new(GeminiClient::new(client, &config.gemini));

        Self::with_generator(generator, &config.cors.allowed_origin)
    }

    pub fn with_generator(
        generator: Arc<dyn TextGenerator>,
        allowed_origin: impl Into<String>,
    ) -> Arc<Self> {
        Arc::new(Self {
            generator,
            allowed_origin: allowed_origin.into(),
        })
    }

    pub fn get_generator(&self) -> &dyn TextGenerator {
        self.generator.as_ref()
    }

    pub fn get_allowed_origin(&self) -> &str {
        &self.allowed_origin
    }
}
