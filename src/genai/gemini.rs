//! Gemini `generateContent` client
//!
//! Talks to either the Gemini API (API key) or Vertex AI (bearer token).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::client::{ContentGenerator, GenAiError};
use super::types::{GenerateContentRequest, GenerateContentResponse};

/// Gemini API base URL
const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Vertex AI base URL for the global location
const VERTEX_GLOBAL_URL: &str = "https://aiplatform.googleapis.com/v1";

/// Default credentials variable for the Gemini API backend
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default credentials variable for the Vertex AI backend
pub const DEFAULT_ACCESS_TOKEN_ENV: &str = "GOOGLE_ACCESS_TOKEN";

/// Vertex AI project used when none is configured
pub const PROJECT_ENV: &str = "GOOGLE_CLOUD_PROJECT";

/// Vertex AI location used when none is configured
pub const LOCATION_ENV: &str = "GOOGLE_CLOUD_LOCATION";

pub const DEFAULT_LOCATION: &str = "global";

/// Which service fronts the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    GeminiApi,
    #[default]
    VertexAi,
}

/// Configuration for the Gemini client
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub backend: Backend,
    pub project: Option<String>,
    pub location: String,
    pub credentials_env: String,
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            backend: Backend::VertexAi,
            project: None,
            location: DEFAULT_LOCATION.to_string(),
            credentials_env: DEFAULT_ACCESS_TOKEN_ENV.to_string(),
            base_url: None,
            timeout: Duration::from_secs(120),
        }
    }
}

impl GeminiConfig {
    /// Gemini API backend authenticated with an API key
    pub fn gemini_api() -> Self {
        Self {
            backend: Backend::GeminiApi,
            credentials_env: DEFAULT_API_KEY_ENV.to_string(),
            ..Default::default()
        }
    }

    /// Vertex AI backend for a project
    pub fn vertex(project: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            backend: Backend::VertexAi,
            project: Some(project.into()),
            location: location.into(),
            ..Default::default()
        }
    }
}

/// Gemini generation client
pub struct GeminiClient {
    client: Client,
    credentials: String,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new client
    ///
    /// Reads credentials from the configured environment variable
    pub fn new(config: GeminiConfig) -> Result<Self, GenAiError> {
        let credentials = std::env::var(&config.credentials_env).map_err(|_| GenAiError::MissingCredentials {
            env_var: config.credentials_env.clone(),
        })?;

        Self::with_credentials(credentials, config)
    }

    /// Create a client with explicit credentials (API key or access token)
    pub fn with_credentials(credentials: String, config: GeminiConfig) -> Result<Self, GenAiError> {
        if config.backend == Backend::VertexAi && config.project.is_none() {
            return Err(GenAiError::InvalidConfig("Vertex AI backend requires a project".to_string()));
        }

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            credentials,
            config,
        })
    }

    /// Full `generateContent` URL for a model
    fn endpoint(&self, model: &str) -> String {
        match self.config.backend {
            Backend::GeminiApi => {
                let base = self.config.base_url.as_deref().unwrap_or(GEMINI_API_URL);
                format!("{}/models/{}:generateContent", base, model)
            }
            Backend::VertexAi => {
                let location = &self.config.location;
                let base = match &self.config.base_url {
                    Some(url) => url.clone(),
                    None if location == DEFAULT_LOCATION => VERTEX_GLOBAL_URL.to_string(),
                    None => format!("https://{}-aiplatform.googleapis.com/v1", location),
                };
                format!(
                    "{}/projects/{}/locations/{}/publishers/google/models/{}:generateContent",
                    base,
                    self.config.project.as_deref().unwrap_or_default(),
                    location,
                    model
                )
            }
        }
    }

    /// Send a request and decode the body
    async fn send_request(&self, model: &str, body: &GenerateContentRequest) -> Result<GenerateContentResponse, GenAiError> {
        let url = self.endpoint(model);
        log::debug!("POST {}", url);

        let builder = self.client.post(&url).json(body);
        let builder = match self.config.backend {
            Backend::GeminiApi => builder.header("x-goog-api-key", &self.credentials),
            Backend::VertexAi => builder.bearer_auth(&self.credentials),
        };

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GenAiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await?;
        Self::parse_response(&text)
    }

    fn parse_response(text: &str) -> Result<GenerateContentResponse, GenAiError> {
        serde_json::from_str(text).map_err(|e| GenAiError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate_content(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenAiError> {
        self.send_request(model, &request).await
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("backend", &self.config.backend)
            .field("project", &self.config.project)
            .field("location", &self.config.location)
            .finish()
    }
}
