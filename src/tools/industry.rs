//! lookup_industry_context tool - common workflows, constraints and tools

use serde::{Deserialize, Serialize};

/// Background on how work is typically done in an industry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryContext {
    pub industry: String,
    pub common_workflows: Vec<String>,
    pub constraints: Vec<String>,
    pub existing_tools: Vec<String>,
}

/// Look up industry context.
///
/// The lists are the same for every industry; the name is echoed back.
pub fn lookup_industry_context(industry: &str) -> IndustryContext {
    IndustryContext {
        industry: industry.to_string(),
        common_workflows: strings(&["manual review", "approval process", "reporting"]),
        constraints: strings(&["data privacy", "compliance", "human oversight"]),
        existing_tools: strings(&["spreadsheets", "email", "ticketing systems"]),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_fixed_lists() {
        let ctx = lookup_industry_context("healthcare");
        assert_eq!(ctx.industry, "healthcare");
        assert_eq!(ctx.common_workflows, vec!["manual review", "approval process", "reporting"]);
        assert_eq!(ctx.constraints, vec!["data privacy", "compliance", "human oversight"]);
        assert_eq!(ctx.existing_tools, vec!["spreadsheets", "email", "ticketing systems"]);
    }

    #[test]
    fn test_lookup_same_lists_for_any_industry() {
        let a = lookup_industry_context("logistics");
        let b = lookup_industry_context("retail banking");
        assert_eq!(a.common_workflows, b.common_workflows);
        assert_eq!(a.constraints, b.constraints);
        assert_eq!(a.existing_tools, b.existing_tools);
        assert_eq!(lookup_industry_context("logistics"), a);
    }

    #[test]
    fn test_lookup_accepts_empty() {
        let ctx = lookup_industry_context("");
        assert_eq!(ctx.industry, "");
        assert_eq!(ctx.constraints.len(), 3);
    }

    #[test]
    fn test_serialized_field_names() {
        let value = serde_json::to_value(lookup_industry_context("legal")).unwrap();
        assert_eq!(value["industry"], "legal");
        assert!(value["common_workflows"].is_array());
        assert!(value["existing_tools"].is_array());
    }
}
