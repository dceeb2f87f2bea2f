//! Generation client trait and mock implementation

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::types::{GenerateContentRequest, GenerateContentResponse};

/// Stateless content generator - each call is one independent request
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Send a single `generateContent` request for the given model
    async fn generate_content(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenAiError>;
}

/// Errors that can occur talking to the generation endpoint
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Missing credentials: environment variable {env_var} not set")]
    MissingCredentials { env_var: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Mock generator for tests: replays queued outcomes and records requests
#[derive(Debug, Default)]
pub struct MockContentGenerator {
    queued: Mutex<VecDeque<Result<GenerateContentResponse, GenAiError>>>,
    requests: Mutex<Vec<(String, GenerateContentRequest)>>,
}

impl MockContentGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response
    pub fn with_response(self, response: GenerateContentResponse) -> Self {
        self.push(Ok(response));
        self
    }

    /// Queue a failure
    pub fn with_error(self, error: GenAiError) -> Self {
        self.push(Err(error));
        self
    }

    fn push(&self, outcome: Result<GenerateContentResponse, GenAiError>) {
        if let Ok(mut queued) = self.queued.lock() {
            queued.push_back(outcome);
        }
    }

    /// Number of requests received so far
    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// Every (model, request) pair received, in order
    pub fn requests(&self) -> Vec<(String, GenerateContentRequest)> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ContentGenerator for MockContentGenerator {
    async fn generate_content(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenAiError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((model.to_string(), request));
        }

        let next = self.queued.lock().ok().and_then(|mut q| q.pop_front());
        next.unwrap_or_else(|| Err(GenAiError::InvalidResponse("mock has no queued response".to_string())))
    }
}
