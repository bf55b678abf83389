//! Platefind command line interface
//!
//! Two independent entry points over the library:
//!
//! - `platefind ops <INPUT>` - run the demonstration sequence of classical
//!   operations and save every intermediate image
//! - `platefind detect <INPUT>` - run the plate detection pipeline and
//!   save the stage images plus the annotated result
//!
//! Usage:
//!     platefind ops photo.png --out-dir out
//!     platefind detect photo.png --out-dir out --threshold 225

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "platefind")]
#[command(about = "Classical image processing with plate detection")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log filter (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "info")]
    log: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the demonstration sequence of basic operations
    Ops(commands::ops::OpsArgs),
    /// Detect plate-like regions in an image
    Detect(commands::detect::DetectArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log)),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Command::Ops(args) => commands::ops::run(args),
        Command::Detect(args) => commands::detect::run(args),
    };

    if let Err(err) = result {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}
