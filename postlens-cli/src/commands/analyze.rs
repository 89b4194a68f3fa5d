//! Analyze command - process a post and print the insights.

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};

use postlens_core::InsightRequest;
use postlens_fallback::HeuristicAnalyzer;
use postlens_llm::InsightService;
use postlens_store::{default_history_path, load_json, save_json, InsightHistory};

use crate::output;
use crate::Cli;

/// Arguments for the analyze command.
#[derive(Args, Default)]
pub struct AnalyzeArgs {
    /// The post text. Read from stdin when omitted.
    pub text: Option<String>,

    /// Skip recording the result in history.
    #[arg(long)]
    pub no_history: bool,
}

/// Runs the analyze command.
pub async fn run(args: &AnalyzeArgs, cli: &Cli) -> Result<()> {
    let text = match &args.text {
        Some(text) => text.clone(),
        None => {
            debug!("Reading post text from stdin");
            std::io::read_to_string(std::io::stdin()).context("Failed to read stdin")?
        }
    };

    let request = InsightRequest::new(text)?;
    let service = InsightService::from_env(HeuristicAnalyzer::new());

    let result = service.process(&request).await?;
    output::print_result(&result, cli)?;

    if !args.no_history {
        record_history(request.post_text(), &result).await?;
    }

    Ok(())
}

/// Appends the result to the persisted history.
async fn record_history(
    post_text: &str,
    result: &postlens_core::InsightResult,
) -> Result<()> {
    let path = default_history_path();
    let mut history: InsightHistory = load_json(&path).await?.unwrap_or_default();

    let id = history.append(post_text, result.clone());
    save_json(&path, &history).await?;

    info!(id, path = %path.display(), "Recorded insight in history");
    Ok(())
}
