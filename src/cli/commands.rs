//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - agents: list agent definitions
//! - tools: show tool declarations for an agent
//! - call: invoke a tool directly

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Genie - tools for an AI agent design assistant
#[derive(Parser, Debug)]
#[command(name = "genie")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List agent definitions
    Agents {
        /// Show model, tools and instruction for each agent
        #[arg(short, long)]
        detailed: bool,
    },

    /// Print the tool declarations an agent registers
    Tools {
        /// Agent key (defaults to the configured default agent)
        #[arg(short, long)]
        agent: Option<String>,
    },

    /// Invoke a tool directly and print its JSON result
    Call {
        /// Tool name (lookup_industry_context, estimate_agent_cost, generate_agent_map)
        tool: String,

        /// Tool input as a JSON object
        input: String,

        /// Session the artifacts are saved under
        #[arg(short, long, default_value = "cli")]
        session: String,

        /// User the artifacts are saved under
        #[arg(short, long, default_value = "local")]
        user: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["genie"]).is_err());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["genie", "-v", "agents"]).unwrap();
        assert!(cli.is_verbose());
    }

    #[test]
    fn test_cli_config_option() {
        let cli = Cli::try_parse_from(["genie", "agents", "-c", "/path/to/genie.yml"]).unwrap();
        assert_eq!(cli.config.as_ref(), Some(&PathBuf::from("/path/to/genie.yml")));
    }

    #[test]
    fn test_agents_command() {
        let cli = Cli::try_parse_from(["genie", "agents", "--detailed"]).unwrap();
        match cli.command {
            Commands::Agents { detailed } => assert!(detailed),
            _ => panic!("Expected agents command"),
        }
    }

    #[test]
    fn test_tools_command() {
        let cli = Cli::try_parse_from(["genie", "tools", "-a", "grounded"]).unwrap();
        match cli.command {
            Commands::Tools { agent } => assert_eq!(agent, Some("grounded".to_string())),
            _ => panic!("Expected tools command"),
        }
    }

    #[test]
    fn test_call_command_defaults() {
        let cli = Cli::try_parse_from(["genie", "call", "estimate_agent_cost", r#"{"agent_description":"x"}"#]).unwrap();
        match cli.command {
            Commands::Call {
                tool,
                input,
                session,
                user,
            } => {
                assert_eq!(tool, "estimate_agent_cost");
                assert_eq!(input, r#"{"agent_description":"x"}"#);
                assert_eq!(session, "cli");
                assert_eq!(user, "local");
            }
            _ => panic!("Expected call command"),
        }
    }

    #[test]
    fn test_call_command_with_scope() {
        let cli =
            Cli::try_parse_from(["genie", "call", "generate_agent_map", "{}", "-s", "s42", "-u", "alice"]).unwrap();
        match cli.command {
            Commands::Call { session, user, .. } => {
                assert_eq!(session, "s42");
                assert_eq!(user, "alice");
            }
            _ => panic!("Expected call command"),
        }
    }

    #[test]
    fn test_help_works() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_flag() {
        let result = Cli::try_parse_from(["genie", "--version"]);
        assert!(result.is_err());
    }
}
