//! CLI for the urlkit URL processing pipeline.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use urlkit_core::config;

use commands::{run_check, run_dedupe, run_normalize, run_parse, run_process, run_sanitize};

/// Top-level CLI for the urlkit URL processing pipeline.
#[derive(Debug, Parser)]
#[command(name = "urlkit")]
#[command(about = "urlkit: validate, sanitize, and canonicalize URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Validate a URL against the scheme://host[:port][/path] grammar.
    Check {
        /// URL to validate.
        url: String,
    },

    /// Sanitize a URL: default the scheme, fold case, percent-encode.
    Sanitize {
        /// URL to sanitize.
        url: String,
    },

    /// Canonicalize a URL for comparison and deduplication.
    Normalize {
        /// URL to normalize.
        url: String,
    },

    /// Decompose a URL into its structural components.
    Parse {
        /// URL to decompose.
        url: String,

        /// Emit JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },

    /// Run the full sanitize/normalize/validate pipeline and report.
    Process {
        /// URL to process.
        url: String,

        /// Emit JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },

    /// Read URLs from stdin, one per line, and emit each canonical form once.
    Dedupe,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check { url } => run_check(&cfg, &url)?,
            CliCommand::Sanitize { url } => run_sanitize(&url),
            CliCommand::Normalize { url } => run_normalize(&url)?,
            CliCommand::Parse { url, json } => run_parse(&cfg, &url, json)?,
            CliCommand::Process { url, json } => run_process(&cfg, &url, json)?,
            CliCommand::Dedupe => {
                run_dedupe(std::io::stdin().lock(), std::io::stdout().lock())?;
            }
        }

        Ok(())
    }
}
