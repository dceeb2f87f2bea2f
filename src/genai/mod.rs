//! Generation endpoint layer - Gemini `generateContent` integration
//!
//! This module provides:
//! - Wire types for requests and responses
//! - ContentGenerator trait for endpoint abstraction
//! - GeminiClient implementation (Gemini API or Vertex AI)
//! - MockContentGenerator for tests

pub mod client;
pub mod gemini;
pub mod types;

pub use client::{ContentGenerator, GenAiError, MockContentGenerator};
pub use gemini::{Backend, GeminiClient, GeminiConfig};
pub use types::{
    Blob, Candidate, Content, FinishReason, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    HarmBlockThreshold, HarmCategory, ImageConfig, Modality, Part, SafetySetting,
};
