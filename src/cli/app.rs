//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use qa_verify::config::Config;
use qa_verify::output::OutputMode;

/// qa-verify - Check whether QA approved the fix for a ticket
#[derive(Parser, Debug)]
#[command(
    name = "qa-verify",
    version,
    about = "Check whether QA approved the fix for a ticket",
    long_about = "Decide whether each ticket's QA contact approved the review thread that \
                  fixes it.\n\n\
                  The QA contact is whoever the assignment announcement on the thread names.\n\
                  Approval is an /lgtm comment (or an approving review, where enabled)\n\
                  that has not been withdrawn with /lgtm cancel."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ./qa-verify.toml, then the user config dir)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default qa-verify.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Verify a batch of tickets against a snapshot of the tracker and code host
    Verify {
        /// JSON snapshot with tickets and threads
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Ticket ids to verify
        #[arg(required = true)]
        tickets: Vec<String>,

        /// Exit with an error if any ticket was skipped
        #[arg(long)]
        strict: bool,
    },

    /// Evaluate a single thread file ({"comments": [...], "reviews": [...]})
    Evaluate {
        /// JSON thread file
        thread: PathBuf,

        /// Count formal reviews as approval
        #[arg(long)]
        reviews: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Verify {
            snapshot,
            tickets,
            strict,
        }) => {
            let config = Config::load(cli.config.as_deref())?;
            commands::verify(&config, &snapshot, &tickets, strict, output_mode)
        },
        Some(Command::Evaluate { thread, reviews }) => {
            let config = Config::load(cli.config.as_deref())?;
            commands::evaluate(&config, &thread, reviews, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("qa-verify v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("qa-verify v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'qa-verify --help' for usage");
            }
            Ok(())
        },
    }
}
