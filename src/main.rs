use async_trait::async_trait;
use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

mod cli;

use agent_genie::agents::AgentRegistry;
use agent_genie::artifact::{ArtifactScope, FileArtifactStore};
use agent_genie::config::Config;
use agent_genie::genai::{ContentGenerator, GenAiError, GenerateContentRequest, GenerateContentResponse, GeminiClient};
use agent_genie::tools::{ToolAdapter, ToolCall, ToolContext};
use cli::Cli;
use cli::commands::Commands;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(env!("CARGO_PKG_NAME"))
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join(format!("{}.log", env!("CARGO_PKG_NAME")));

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // Open filter until the configured level is known
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace"))
        .target(env_logger::Target::Pipe(target))
        .init();
    if std::env::var_os("RUST_LOG").is_none() {
        log::set_max_level(log::LevelFilter::Info);
    }

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// Stands in for the endpoint when no client could be built, so the static tools still work
struct UnavailableGenerator {
    reason: String,
}

#[async_trait]
impl ContentGenerator for UnavailableGenerator {
    async fn generate_content(
        &self,
        _model: &str,
        _request: GenerateContentRequest,
    ) -> std::result::Result<GenerateContentResponse, GenAiError> {
        Err(GenAiError::InvalidConfig(self.reason.clone()))
    }
}

fn load_registry(config: &Config) -> Result<AgentRegistry> {
    let mut paths = AgentRegistry::default_dirs();
    paths.extend(config.agents.dirs.iter().cloned());

    let registry = AgentRegistry::load(&paths).context("Failed to load agent definitions")?;
    registry.validate().context("Invalid agent definitions")?;
    Ok(registry)
}

fn build_adapter(config: &Config) -> ToolAdapter {
    let generator: Arc<dyn ContentGenerator> = match GeminiClient::new(config.generation.to_gemini_config()) {
        Ok(client) => {
            info!("Using generation client {:?}", client);
            Arc::new(client)
        }
        Err(e) => {
            log::warn!("Generation client unavailable: {}", e);
            Arc::new(UnavailableGenerator { reason: e.to_string() })
        }
    };
    ToolAdapter::new(generator, config.generation.image.clone())
}

fn handle_agents_command(detailed: bool, config: &Config) -> Result<()> {
    let registry = load_registry(config)?;

    for agent in registry.agents() {
        let marker = if agent.key == config.agents.default { "*" } else { " " };
        println!("{} {} ({}) - {}", marker, agent.key.green(), agent.name, agent.description);
        if detailed {
            println!("    model: {}", agent.model);
            if !agent.tools.is_empty() {
                println!("    tools: {}", agent.tools.join(", "));
            }
            for line in agent.instruction.lines() {
                println!("    | {}", line);
            }
        }
    }
    Ok(())
}

fn handle_tools_command(agent: Option<&str>, config: &Config) -> Result<()> {
    let registry = load_registry(config)?;
    let key = agent.unwrap_or(&config.agents.default);
    let agent = registry.get(key)?;

    let adapter = build_adapter(config);
    let declarations: Vec<_> = adapter
        .definitions_for(&agent.tool_names())
        .iter()
        .map(|d| d.to_function_declaration())
        .collect();

    if declarations.is_empty() {
        println!("{}", format!("Agent '{}' registers no tools", agent.key).yellow());
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&declarations)?);
    Ok(())
}

async fn handle_call_command(tool: &str, input: &str, session: &str, user: &str, config: &Config) -> Result<()> {
    let input: serde_json::Value = serde_json::from_str(input).context("Tool input must be valid JSON")?;
    if !input.is_object() {
        return Err(eyre!("Tool input must be a JSON object"));
    }

    let adapter = build_adapter(config);
    let store = Arc::new(FileArtifactStore::new(&config.artifacts.dir));
    let ctx = ToolContext::new(ArtifactScope::new(&config.artifacts.app, user, session), store);

    let call = ToolCall::new("cli", tool, input);
    let result = adapter.invoke(&call, &ctx).await;

    if result.is_error() {
        println!("{}", "Tool call failed".red());
    } else {
        println!("{}", "Tool call succeeded".green());
    }
    println!("{}", serde_json::to_string_pretty(&result.to_value())?);
    Ok(())
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        Commands::Agents { detailed } => handle_agents_command(*detailed, config),
        Commands::Tools { agent } => handle_tools_command(agent.as_deref(), config),
        Commands::Call {
            tool,
            input,
            session,
            user,
        } => handle_call_command(tool, input, session, user, config).await,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    setup_logging().context("Failed to setup logging")?;

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    if std::env::var_os("RUST_LOG").is_none() {
        log::set_max_level(config.log_filter(cli.is_verbose()));
    }

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
