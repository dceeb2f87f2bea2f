//! Error types for agent-genie
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

use crate::genai::GenAiError;

/// All error types that can occur in agent-genie
#[derive(Debug, Error)]
pub enum GenieError {
    /// Agent definition not found in the registry
    #[error("Agent not found: {0}")]
    AgentNotFound(String),

    /// Agent definition references something the adapter cannot provide
    #[error("Invalid agent: {0}")]
    InvalidAgent(String),

    /// Artifact persistence error
    #[error("Artifact error: {0}")]
    Artifact(String),

    /// Remote generation error
    #[error("Generation error: {0}")]
    Generation(#[from] GenAiError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for agent-genie operations
pub type Result<T> = std::result::Result<T, GenieError>;
