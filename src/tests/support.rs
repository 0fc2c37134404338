use std::sync::{Arc, Mutex};

use axum::Router;
use futures::future::BoxFuture;
use reqwest::StatusCode;
use serde_json::json;

use crate::{
    common::{
        app_state::AppState,
        services::gemini_client::{GenerationError, TextGenerator},
    },
    features::quiz::models::QuizQuestion,
};

pub const FRONTEND_ORIGIN: &str = "http://localhost:5173";

/// Answers every prompt with a canned response and remembers the prompts.
pub struct StubGenerator {
    response: Result<String, String>,
    pub prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub fn replying(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(text.into()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            response: Err(message.into()),
            prompts: Mutex::new(Vec::new()),
        })
    }
}

impl TextGenerator for StubGenerator {
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, GenerationError>> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let result = match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(GenerationError::ApiError(
                StatusCode::TOO_MANY_REQUESTS,
                message.clone(),
            )),
        };

        Box::pin(async move { result })
    }
}

pub fn state_with(generator: Arc<StubGenerator>) -> Arc<AppState> {
    AppState::with_generator(generator, FRONTEND_ORIGIN)
}

pub fn sample_quiz_json() -> String {
    json!([
        {
            "question": "What is the primary function of a car's alternator?",
            "options": [
                "A) Start the engine",
                "B) Charge the battery and power electrical systems",
                "C) Pump the brakes",
                "D) Cool the engine"
            ],
            "correctAnswer": "B"
        },
        {
            "question": "Which car manufacturer is famously known for producing the '911' sports car model?",
            "options": ["A) Ferrari", "B) Lamborghini", "C) Porsche", "D) Aston Martin"],
            "correctAnswer": "C"
        },
        {
            "question": "What does 'SUV' stand for in the context of car types?",
            "options": [
                "A) Super Utility Vehicle",
                "B) Sport Under Vehicle",
                "C) Standard Utility Van",
                "D) Sport Utility Vehicle"
            ],
            "correctAnswer": "D"
        },
        {
            "question": "Which system in a car is designed to prevent the wheels from locking up during hard braking?",
            "options": [
                "A) Traction Control System (TCS)",
                "B) Anti-lock Braking System (ABS)",
                "C) Electronic Stability Control (ESC)",
                "D) Cruise Control"
            ],
            "correctAnswer": "B"
        },
        {
            "question": "The first mass-produced automobile, the Model T, was introduced by which company?",
            "options": ["A) Daimler", "B) Mercedes-Benz", "C) Ford", "D) Peugeot"],
            "correctAnswer": "C"
        }
    ])
    .to_string()
}

pub fn sample_questions() -> Vec<QuizQuestion> {
    serde_json::from_str(&sample_quiz_json()).unwrap()
}

/// Serves `app` on an ephemeral local port and returns its base url.
pub async fn spawn_app(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}
