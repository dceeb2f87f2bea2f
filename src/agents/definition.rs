//! Agent definitions.
//!
//! An agent pairs a model with an instruction and the tools it may call.
//! Loaded from ~/.config/agent-genie/agents/*.yml or .agent-genie/agents/*.yml

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::tools::ToolRequest;

/// Default text model for agents
pub const DEFAULT_AGENT_MODEL: &str = "gemini-3-pro-preview";

/// Agent definition registered with the host runtime.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AgentDefinition {
    /// Registry key (e.g., "basic", "pro", "grounded").
    pub key: String,

    /// Agent name as the host runtime sees it.
    pub name: String,

    /// Model identifier.
    pub model: String,

    /// One-line description.
    pub description: String,

    /// Instruction / system prompt.
    pub instruction: String,

    /// Tool names the agent may call.
    pub tools: Vec<String>,
}

impl Default for AgentDefinition {
    fn default() -> Self {
        Self {
            key: "basic".to_string(),
            name: "agent_genie".to_string(),
            model: DEFAULT_AGENT_MODEL.to_string(),
            description: String::new(),
            instruction: String::new(),
            tools: Vec::new(),
        }
    }
}

impl AgentDefinition {
    /// Load an agent definition from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.as_ref().display()))?;
        let def: Self =
            serde_yaml::from_str(&content).with_context(|| format!("Failed to parse {}", path.as_ref().display()))?;
        Ok(def)
    }

    /// Tool names as borrowed strs
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(String::as_str).collect()
    }

    /// Names of tools this agent lists that no adapter provides
    pub fn unknown_tools(&self) -> Vec<&str> {
        self.tools
            .iter()
            .map(String::as_str)
            .filter(|t| ToolRequest::definition(t).is_none())
            .collect()
    }

    /// Get built-in agent definitions.
    pub fn builtins() -> Vec<Self> {
        vec![Self::builtin_basic(), Self::builtin_pro(), Self::builtin_grounded()]
    }

    fn builtin_basic() -> Self {
        Self {
            key: "basic".to_string(),
            name: "agent_genie".to_string(),
            model: DEFAULT_AGENT_MODEL.to_string(),
            description: "A simple AI agent idea generator.".to_string(),
            instruction: "Suggest two AI agent ideas.".to_string(),
            tools: Vec::new(),
        }
    }

    fn builtin_pro() -> Self {
        Self {
            key: "pro".to_string(),
            name: "agent_genie_pro".to_string(),
            model: DEFAULT_AGENT_MODEL.to_string(),
            description: "An agent that designs other agents responsibly.".to_string(),
            instruction: r#"You are Agent Genie, a practical AI architect.

Ask which industry the user works in and what problem they want solved.
Then answer with:
1. AGENT IDEA - one paragraph.
2. AGENT DESIGN BLUEPRINT - role, target user, goal, non-goals, inputs, outputs, risks.
3. OVERKILL CHECK - say whether an agent is justified; if not, suggest something simpler.

Do not write code. Do not oversell AI."#
                .to_string(),
            tools: Vec::new(),
        }
    }

    fn builtin_grounded() -> Self {
        Self {
            key: "grounded".to_string(),
            name: "agent_genie".to_string(),
            model: DEFAULT_AGENT_MODEL.to_string(),
            description: "A grounded AI agent design assistant.".to_string(),
            instruction: r#"You are Agent Genie, a responsible AI architect.

1. Learn the user's industry and problem.
2. Call lookup_industry_context and estimate_agent_cost.
3. Produce AGENT IDEA, AGENT DESIGN BLUEPRINT, COST & COMPLEXITY ESTIMATE and OVERKILL CHECK.

After the blueprint, call generate_agent_map with a short summary of it
(no visual style instructions), then explain briefly what the diagram shows."#
                .to_string(),
            tools: ToolRequest::NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_builtins() {
        let builtins = AgentDefinition::builtins();
        let keys: Vec<&str> = builtins.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, vec!["basic", "pro", "grounded"]);
        assert!(builtins.iter().all(|a| a.model == DEFAULT_AGENT_MODEL));
    }

    #[test]
    fn test_only_grounded_has_tools() {
        for agent in AgentDefinition::builtins() {
            if agent.key == "grounded" {
                assert_eq!(
                    agent.tool_names(),
                    vec!["lookup_industry_context", "estimate_agent_cost", "generate_agent_map"]
                );
            } else {
                assert!(agent.tools.is_empty());
            }
            assert!(agent.unknown_tools().is_empty());
        }
    }

    #[test]
    fn test_unknown_tools() {
        let agent = AgentDefinition {
            tools: vec!["estimate_agent_cost".to_string(), "teleport".to_string()],
            ..Default::default()
        };
        assert_eq!(agent.unknown_tools(), vec!["teleport"]);
    }

    #[test]
    fn test_load_from_file_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("helper.yml");
        std::fs::write(
            &path,
            "key: helper\nname: helper_agent\ninstruction: Help out.\ntools:\n  - estimate_agent_cost\n",
        )
        .unwrap();

        let agent = AgentDefinition::load_from_file(&path).unwrap();
        assert_eq!(agent.key, "helper");
        assert_eq!(agent.name, "helper_agent");
        assert_eq!(agent.model, DEFAULT_AGENT_MODEL);
        assert_eq!(agent.tools, vec!["estimate_agent_cost"]);
    }

    #[test]
    fn test_load_from_file_invalid_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.yml");
        std::fs::write(&path, "tools: [unterminated").unwrap();

        assert!(AgentDefinition::load_from_file(&path).is_err());
    }
}
