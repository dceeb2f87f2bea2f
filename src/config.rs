use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::genai::gemini::{DEFAULT_ACCESS_TOKEN_ENV, DEFAULT_API_KEY_ENV, DEFAULT_LOCATION, LOCATION_ENV, PROJECT_ENV};
use crate::genai::{Backend, GeminiConfig};
use crate::tools::ImageSettings;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub generation: GenerationSection,
    pub artifacts: ArtifactsConfig,
    pub agents: AgentsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSection {
    pub backend: Backend,
    /// Vertex AI project, else `GOOGLE_CLOUD_PROJECT`
    pub project: Option<String>,
    /// Vertex AI location, else `GOOGLE_CLOUD_LOCATION`, else `global`
    pub location: Option<String>,
    /// Environment variable holding the API key or access token
    pub credentials_env: Option<String>,
    pub base_url: Option<String>,
    pub timeout_ms: u64,
    pub image: ImageSettings,
}

impl Default for GenerationSection {
    fn default() -> Self {
        Self {
            backend: Backend::VertexAi,
            project: None,
            location: None,
            credentials_env: None,
            base_url: None,
            timeout_ms: 120000,
            image: ImageSettings::default(),
        }
    }
}

impl GenerationSection {
    /// Client configuration for this section, filling gaps from the process environment
    pub fn to_gemini_config(&self) -> GeminiConfig {
        self.to_gemini_config_with(|name| std::env::var(name).ok())
    }

    /// Client configuration for this section, filling gaps from `lookup`
    pub fn to_gemini_config_with<F>(&self, lookup: F) -> GeminiConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let project = self.project.clone().or_else(|| non_empty(PROJECT_ENV));
        let location = self
            .location
            .clone()
            .or_else(|| non_empty(LOCATION_ENV))
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string());

        let default_env = match self.backend {
            Backend::GeminiApi => DEFAULT_API_KEY_ENV,
            Backend::VertexAi => DEFAULT_ACCESS_TOKEN_ENV,
        };
        let credentials_env = self.credentials_env.clone().unwrap_or_else(|| default_env.to_string());

        GeminiConfig {
            backend: self.backend,
            project,
            location,
            credentials_env,
            base_url: self.base_url.clone(),
            timeout: Duration::from_millis(self.timeout_ms),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactsConfig {
    pub dir: PathBuf,
    /// App name used as the first level of the artifact scope
    pub app: String,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            dir: dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(env!("CARGO_PKG_NAME"))
                .join("artifacts"),
            app: "agent_genie".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentsConfig {
    /// Agent used when none is named
    pub default: String,
    /// Extra definition directories, searched after the standard ones
    pub dirs: Vec<PathBuf>,
}

impl Default for AgentsConfig {
    fn default() -> Self {
        Self {
            default: "grounded".to_string(),
            dirs: Vec::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            generation: GenerationSection::default(),
            artifacts: ArtifactsConfig::default(),
            agents: AgentsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let project_name = env!("CARGO_PKG_NAME");

        // Try primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", primary_config.display(), e);
                    }
                }
            }
        }

        // Try fallback location: ./<project>.yml
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", fallback_config.display(), e);
                }
            }
        }

        // No config file found, use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Effective log filter: debug when verbose, else `log_level`, else info
    pub fn log_filter(&self, verbose: bool) -> log::LevelFilter {
        if verbose {
            return log::LevelFilter::Debug;
        }
        match self.log_level.as_deref().map(str::parse::<log::LevelFilter>) {
            Some(Ok(filter)) => filter,
            Some(Err(_)) => {
                log::warn!("Unknown log_level {:?}, using info", self.log_level);
                log::LevelFilter::Info
            }
            None => log::LevelFilter::Info,
        }
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}
