//! Tool results and their JSON rendering
//!
//! Failed generations render as `{status: "failed", detail}` for endpoint
//! outcomes and `{status: "failed", error}` for faults.

use serde_json::{Value, json};

use super::cost::CostEstimate;
use super::industry::IndustryContext;

/// Why an image generation produced no artifact
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationFailure {
    /// The endpoint ended generation without a normal stop
    #[error("Stopped: {reason}")]
    Stopped { reason: String },

    /// A normal stop with no inline data in the first candidate
    #[error("No image returned")]
    NoImagePart,

    /// Transport, decoding or artifact-save failure
    #[error("{0}")]
    Fault(String),
}

/// Outcome of one image generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutcome {
    Saved {
        filename: String,
        detail: String,
        version: u32,
    },
    Failed(GenerationFailure),
}

impl ImageOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }

    pub fn to_value(&self) -> Value {
        match self {
            Self::Saved { filename, detail, .. } => json!({
                "status": "success",
                "detail": detail,
                "filename": filename,
            }),
            Self::Failed(GenerationFailure::Fault(message)) => json!({
                "status": "failed",
                "error": message,
            }),
            Self::Failed(failure) => json!({
                "status": "failed",
                "detail": failure.to_string(),
            }),
        }
    }
}

/// Result of any tool call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolResult {
    Industry(IndustryContext),
    Cost(CostEstimate),
    Image(ImageOutcome),
    /// The call could not be decoded (unknown tool or bad arguments)
    Rejected(String),
}

impl ToolResult {
    pub fn is_error(&self) -> bool {
        match self {
            Self::Industry(_) | Self::Cost(_) => false,
            Self::Image(outcome) => !outcome.is_success(),
            Self::Rejected(_) => true,
        }
    }

    /// JSON mapping returned to the host runtime
    pub fn to_value(&self) -> Value {
        match self {
            Self::Industry(ctx) => serde_json::to_value(ctx).unwrap_or(Value::Null),
            Self::Cost(estimate) => serde_json::to_value(estimate).unwrap_or(Value::Null),
            Self::Image(outcome) => outcome.to_value(),
            Self::Rejected(message) => json!({
                "status": "failed",
                "error": message,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{estimate_agent_cost, lookup_industry_context};

    #[test]
    fn test_saved_value() {
        let outcome = ImageOutcome::Saved {
            filename: "agent_map.png".to_string(),
            detail: "Agent map generated".to_string(),
            version: 0,
        };
        assert_eq!(
            outcome.to_value(),
            json!({"status": "success", "detail": "Agent map generated", "filename": "agent_map.png"})
        );
    }

    #[test]
    fn test_stopped_value() {
        let outcome = ImageOutcome::Failed(GenerationFailure::Stopped {
            reason: "SAFETY".to_string(),
        });
        assert_eq!(outcome.to_value(), json!({"status": "failed", "detail": "Stopped: SAFETY"}));
    }

    #[test]
    fn test_no_image_value() {
        let outcome = ImageOutcome::Failed(GenerationFailure::NoImagePart);
        assert_eq!(outcome.to_value(), json!({"status": "failed", "detail": "No image returned"}));
    }

    #[test]
    fn test_fault_value_uses_error_key() {
        let outcome = ImageOutcome::Failed(GenerationFailure::Fault("connection reset".to_string()));
        let value = outcome.to_value();
        assert_eq!(value, json!({"status": "failed", "error": "connection reset"}));
        assert!(value.get("detail").is_none());
    }

    #[test]
    fn test_is_error() {
        assert!(!ToolResult::Industry(lookup_industry_context("x")).is_error());
        assert!(!ToolResult::Cost(estimate_agent_cost("x")).is_error());
        assert!(ToolResult::Image(ImageOutcome::Failed(GenerationFailure::NoImagePart)).is_error());
        assert!(ToolResult::Rejected("bad".to_string()).is_error());
    }

    #[test]
    fn test_static_results_render_as_mappings() {
        let value = ToolResult::Cost(estimate_agent_cost("x")).to_value();
        assert_eq!(value["cost_tier"], "Medium");

        let value = ToolResult::Industry(lookup_industry_context("legal")).to_value();
        assert_eq!(value["industry"], "legal");
    }

    #[test]
    fn test_rejected_value() {
        let value = ToolResult::Rejected("Unknown tool: x".to_string()).to_value();
        assert_eq!(value, json!({"status": "failed", "error": "Unknown tool: x"}));
    }
}
