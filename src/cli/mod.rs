//! Command-line interface for frontconf
//!
//! Provides `resolve`, `check`, `modules`, `init` and `completions` subcommands.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod check;
mod init;
mod modules;
mod resolve;
mod utils;

/// Resolve, validate and render front-end application settings
#[derive(Parser)]
#[command(name = "frontconf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve settings and print them
    Resolve(resolve::ResolveArgs),

    /// Validate settings without printing them
    Check(check::CheckArgs),

    /// List the known module identifiers
    Modules,

    /// Write a settings file with the built-in defaults
    Init(init::InitArgs),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins when set; otherwise --verbose picks DEBUG over the WARN default.
    let fallback = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Resolve(args) => resolve::run(args),
        Commands::Check(args) => check::run(args),
        Commands::Modules => modules::run(),
        Commands::Init(args) => init::run(args),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}
