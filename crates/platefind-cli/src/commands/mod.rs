//! CLI subcommands

pub mod detect;
pub mod ops;

/// Errors bubbled to the top level of the CLI.
pub type CliError = Box<dyn std::error::Error>;
