//! estimate_agent_cost tool - relative cost and operational complexity

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub cost_tier: String,
    pub model_usage: String,
    pub maintenance_level: String,
    pub risk_level: String,
}

/// Estimate what running an agent costs. The estimate does not depend on the description.
pub fn estimate_agent_cost(_agent_description: &str) -> CostEstimate {
    CostEstimate {
        cost_tier: "Medium".to_string(),
        model_usage: "Text-heavy with occasional tool calls".to_string(),
        maintenance_level: "Ongoing prompt tuning".to_string(),
        risk_level: "Moderate".to_string(),
    }
}
