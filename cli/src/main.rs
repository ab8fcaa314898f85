//! # tsguard CLI
//!
//! tsguard — keep `@ts-ignore` honest.
//!
//! tsguard scans the files changed in a commit or pull request and fails
//! the build when a `@ts-ignore` suppression appears without a
//! `// Reason: <explanation>` comment on the line directly above it.
//!
//! ## Usage
//!
//! ```bash
//! # Check changed files in CI
//! tsguard check --files src/app.ts src/components/View.tsx
//!
//! # Machine-readable report
//! tsguard check --files src/app.ts --json
//! ```

use clap::{Parser, Subcommand};
use tsguard::commands;
use tsguard::errors::display_error;

/// Initialize logger based on verbose flag
fn init_logger(verbose: bool) {
    let mut log_builder = env_logger::Builder::from_default_env();
    if verbose {
        log_builder.filter_level(log::LevelFilter::Debug);
    } else {
        log_builder.filter_level(log::LevelFilter::Info);
    }
    log_builder.init();
}

/// Main CLI structure
#[derive(Parser)]
#[command(name = "tsguard")]
#[command(about = "Fail CI when @ts-ignore comments lack a justification", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Check changed files for unjustified @ts-ignore comments
    Check {
        /// List of changed files
        #[arg(long, value_name = "PATH", num_args = 1.., required = true)]
        files: Vec<String>,
        /// Output the scan report as JSON
        #[arg(long)]
        json: bool,
        /// Enable verbose output
        #[arg(long, short = 'v')]
        verbose: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let exit_code = run_command(cli.command);
    std::process::exit(exit_code);
}

fn run_command(command: Commands) -> i32 {
    use tsguard::exit_codes::*;

    match command {
        Commands::Check {
            files,
            json,
            verbose,
        } => {
            init_logger(verbose);
            let args = commands::check::CheckArgs { files, json };
            match commands::check::execute(args) {
                Ok(exit_code) => exit_code,
                Err(e) => {
                    display_error(&format!("check failed: {}", e));
                    EXIT_INVALID_INPUT
                }
            }
        }
    }
}
