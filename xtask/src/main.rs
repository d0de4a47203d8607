//! CellForge quality tool.
//!
//! Every check the CI pipeline runs is reachable from here, so a green
//! `cargo xtask ci` locally means a green pipeline.
//!
//! # Commands
//!
//! - `cargo xtask check` - Run all quality checks
//! - `cargo xtask ci` - Full CI suite, failing on the first red step
//! - `cargo xtask proptest` - Run only the property tests, in release mode

mod check;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// CellForge quality checks
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Quality checks for CellForge", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all quality checks across the workspace
    Check {
        /// Run in CI mode (fails on any issue)
        #[arg(long)]
        ci: bool,
    },

    /// Run full CI suite
    Ci,

    /// Run the property tests in release mode
    Proptest,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { ci } => check::run(ci),
        Commands::Ci => check::run_ci(),
        Commands::Proptest => check::run_proptest(),
    }
}
