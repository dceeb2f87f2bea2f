//! Typed decoding of host tool calls

use serde_json::{Value, json};

use super::{ToolCall, ToolDefinition};

pub const LOOKUP_INDUSTRY_CONTEXT: &str = "lookup_industry_context";
pub const ESTIMATE_AGENT_COST: &str = "estimate_agent_cost";
pub const GENERATE_AGENT_MAP: &str = "generate_agent_map";

/// One decoded tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolRequest {
    IndustryLookup { industry: String },
    CostEstimate { description: String },
    ImageGeneration { prompt: String },
}

/// Errors decoding a tool call
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Invalid input for {tool}: {message}")]
    InvalidInput { tool: String, message: String },
}

impl ToolRequest {
    /// Every tool name the adapter answers to
    pub const NAMES: [&'static str; 3] = [LOOKUP_INDUSTRY_CONTEXT, ESTIMATE_AGENT_COST, GENERATE_AGENT_MAP];

    /// Decode a host call into a request
    pub fn from_call(call: &ToolCall) -> Result<Self, ToolError> {
        let input = &call.input;
        match call.name.as_str() {
            LOOKUP_INDUSTRY_CONTEXT => Ok(Self::IndustryLookup {
                industry: string_arg(LOOKUP_INDUSTRY_CONTEXT, input, "industry")?,
            }),
            ESTIMATE_AGENT_COST => Ok(Self::CostEstimate {
                description: string_arg(ESTIMATE_AGENT_COST, input, "agent_description")?,
            }),
            GENERATE_AGENT_MAP => Ok(Self::ImageGeneration {
                prompt: string_arg(GENERATE_AGENT_MAP, input, "agent_blueprint")?,
            }),
            other => Err(ToolError::UnknownTool { name: other.to_string() }),
        }
    }

    /// Tool name this request targets
    pub fn tool_name(&self) -> &'static str {
        match self {
            Self::IndustryLookup { .. } => LOOKUP_INDUSTRY_CONTEXT,
            Self::CostEstimate { .. } => ESTIMATE_AGENT_COST,
            Self::ImageGeneration { .. } => GENERATE_AGENT_MAP,
        }
    }

    /// Definition registered with the host for a tool name
    pub fn definition(name: &str) -> Option<ToolDefinition> {
        let def = match name {
            LOOKUP_INDUSTRY_CONTEXT => ToolDefinition::new(
                LOOKUP_INDUSTRY_CONTEXT,
                "Returns common workflows, constraints, and tools for the given industry.",
                single_string_schema("industry", "Industry or domain the user works in"),
            ),
            ESTIMATE_AGENT_COST => ToolDefinition::new(
                ESTIMATE_AGENT_COST,
                "Estimates relative cost and operational complexity of an agent.",
                single_string_schema("agent_description", "Short description of the proposed agent"),
            ),
            GENERATE_AGENT_MAP => ToolDefinition::new(
                GENERATE_AGENT_MAP,
                "Generates an infographic-style agent map image from the agent blueprint and saves it as an artifact.",
                single_string_schema("agent_blueprint", "Concise summary of the agent design blueprint"),
            ),
            _ => return None,
        };
        Some(def)
    }

    /// Definitions for every tool, in a stable order
    pub fn definitions() -> Vec<ToolDefinition> {
        Self::NAMES.iter().filter_map(|name| Self::definition(name)).collect()
    }
}

fn string_arg(tool: &str, input: &Value, key: &str) -> Result<String, ToolError> {
    input[key]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ToolError::InvalidInput {
            tool: tool.to_string(),
            message: format!("{} is required and must be a string", key),
        })
}

fn single_string_schema(key: &str, description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            key: {
                "type": "string",
                "description": description
            }
        },
        "required": [key]
    })
}
