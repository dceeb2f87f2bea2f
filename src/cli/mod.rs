//! CLI module for genie - command-line interface and subcommands.
//!
//! Lists agents and tools, and invokes a tool directly against the
//! configured generation endpoint and artifact directory.

pub mod commands;

pub use commands::Cli;
