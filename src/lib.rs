//! Agent Genie - tools for an AI agent design assistant
//!
//! Agent Genie helps people design AI agents. The hosted agent runtime calls
//! the tools here for industry context, cost estimates and an agent-map
//! infographic rendered by a remote image model and saved as an artifact.

pub mod agents;
pub mod artifact;
pub mod config;
pub mod error;
pub mod genai;
pub mod tools;

pub use error::{GenieError, Result};
