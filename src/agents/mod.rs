//! Agent registry.
//!
//! Search order (later overrides earlier, keyed by `key`):
//! 1. Built-in agents (compiled defaults)
//! 2. ~/.config/agent-genie/agents/ (user agents)
//! 3. .agent-genie/agents/ (project agents)

mod definition;

pub use definition::{AgentDefinition, DEFAULT_AGENT_MODEL};

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GenieError, Result};

/// Agent definitions keyed by registry key
#[derive(Debug, Clone, Default)]
pub struct AgentRegistry {
    agents: BTreeMap<String, AgentDefinition>,
}

impl AgentRegistry {
    /// Registry holding only the built-in agents
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        for agent in AgentDefinition::builtins() {
            registry.insert(agent);
        }
        registry
    }

    /// Built-ins overlaid with every readable definition in `dirs`, in order
    pub fn load(dirs: &[PathBuf]) -> Result<Self> {
        let mut registry = Self::builtin();
        for dir in dirs {
            if dir.exists() {
                registry.load_dir(dir)?;
            }
        }
        Ok(registry)
    }

    /// Standard user and project agent directories
    pub fn default_dirs() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join(env!("CARGO_PKG_NAME")).join("agents"));
        }
        paths.push(PathBuf::from(format!(".{}", env!("CARGO_PKG_NAME"))).join("agents"));
        paths
    }

    fn load_dir(&mut self, dir: &Path) -> Result<()> {
        let entries = fs::read_dir(dir)
            .map_err(|e| GenieError::Config(format!("Failed to read dir {}: {}", dir.display(), e)))?;

        let mut paths: Vec<PathBuf> = entries.filter_map(|e| e.ok().map(|e| e.path())).collect();
        paths.sort();

        for path in paths {
            if !path.extension().is_some_and(|ext| ext == "yml" || ext == "yaml") {
                continue;
            }
            match AgentDefinition::load_from_file(&path) {
                Ok(agent) => {
                    log::debug!("Loaded agent '{}' from {}", agent.key, path.display());
                    self.insert(agent);
                }
                Err(e) => {
                    log::warn!("Failed to load agent from {}: {}", path.display(), e);
                }
            }
        }
        Ok(())
    }

    pub fn insert(&mut self, agent: AgentDefinition) {
        self.agents.insert(agent.key.clone(), agent);
    }

    pub fn get(&self, key: &str) -> Result<&AgentDefinition> {
        self.agents
            .get(key)
            .ok_or_else(|| GenieError::AgentNotFound(key.to_string()))
    }

    /// Agents in key order
    pub fn agents(&self) -> impl Iterator<Item = &AgentDefinition> {
        self.agents.values()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Every agent must name only tools the adapter provides
    pub fn validate(&self) -> Result<()> {
        for agent in self.agents.values() {
            let unknown = agent.unknown_tools();
            if !unknown.is_empty() {
                return Err(GenieError::InvalidAgent(format!(
                    "agent '{}' lists unknown tools: {}",
                    agent.key,
                    unknown.join(", ")
                )));
            }
        }
        Ok(())
    }
}
