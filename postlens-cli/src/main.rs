// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! PostLens CLI - AI insight extraction for social-media posts.
//!
//! # Examples
//!
//! ```bash
//! # Analyze a post passed as an argument
//! postlens analyze "We just shipped our new release! #oss"
//!
//! # Analyze a post piped through stdin
//! pbpaste | postlens analyze
//!
//! # JSON output
//! postlens analyze "..." --format json --pretty
//!
//! # Show how the provider would be resolved right now
//! postlens providers
//!
//! # Inspect and manage history
//! postlens history list --limit 5
//! postlens history delete 3
//! postlens history clear
//! ```

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use commands::{analyze, history, providers};

// ============================================================================
// CLI Definition
// ============================================================================

/// PostLens CLI - AI insight extraction for social-media posts.
#[derive(Parser)]
#[command(name = "postlens")]
#[command(about = "Turn a social-media post into structured insights")]
#[command(long_about = r#"
PostLens turns a piece of post text into structured insights: a summary,
the main idea, actionable steps, project ideas, sentiment, key topics,
target audience, and a quality assessment.

Analysis is delegated to an OpenAI-compatible or OpenRouter-compatible
chat-completion endpoint (auto-detected from your API key), and degrades
to a local heuristic analyzer when no usable credential is available.

Configuration:
  POSTLENS_API_KEY      Primary API credential
  OPENAI_API_KEY        Credential fallback
  OPENROUTER_API_KEY    Credential fallback
  POSTLENS_API_URL      Explicit endpoint override
  OPENAI_API_URL        Explicit OpenAI-dialect endpoint override
"#)]
#[command(version)]
#[command(author = "PostLens Contributors")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Verbose logging (repeat for more detail).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a post (argument or stdin) and print the insights.
    Analyze(analyze::AnalyzeArgs),
    /// Show how the provider would be resolved with current settings.
    Providers,
    /// Inspect and manage the insight history.
    History(history::HistoryArgs),
}

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// JSON matching the insight aggregate's wire shape.
    Json,
}

// ============================================================================
// Entry Point
// ============================================================================

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Some(Command::Analyze(args)) => analyze::run(args, &cli).await,
        Some(Command::Providers) => providers::run(&cli),
        Some(Command::History(args)) => history::run(args, &cli).await,
        // Bare `postlens` analyzes stdin.
        None => analyze::run(&analyze::AnalyzeArgs::default(), &cli).await,
    }
}
