//! Tool system exposed to the hosted agent runtime
//!
//! Three tools back the agent design assistant: a static industry lookup, a
//! static cost estimate, and agent-map image generation. Every call completes
//! with a JSON result the host model can reason over; failures come back as
//! data, never as errors.

mod adapter;
mod agent_map;
mod context;
mod cost;
mod industry;
mod request;
mod result;

pub use adapter::ToolAdapter;
pub use agent_map::{AGENT_MAP_DETAIL, AGENT_MAP_FILENAME, AgentMapGenerator, DEFAULT_IMAGE_MODEL, ImageSettings};
pub use context::ToolContext;
pub use cost::{CostEstimate, estimate_agent_cost};
pub use industry::{IndustryContext, lookup_industry_context};
pub use request::{ToolError, ToolRequest};
pub use result::{GenerationFailure, ImageOutcome, ToolResult};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tool call issued by the host runtime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub input: Value,
}

impl ToolCall {
    pub fn new(id: impl Into<String>, name: impl Into<String>, input: Value) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            input,
        }
    }
}

/// Tool definition registered with the host runtime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>, input_schema: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }

    /// Convert to a `functionDeclarations` entry
    pub fn to_function_declaration(&self) -> Value {
        serde_json::json!({
            "name": self.name,
            "description": self.description,
            "parameters": self.input_schema,
        })
    }
}
