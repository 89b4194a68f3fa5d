//! History command - inspect and manage stored insights.

use anyhow::Result;
use clap::{Args, Subcommand};

use postlens_store::{default_history_path, load_json, save_json, InsightHistory};

use crate::{output, Cli};

/// Arguments for the history command.
#[derive(Args)]
pub struct HistoryArgs {
    #[command(subcommand)]
    action: HistoryAction,
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List stored insights, newest first.
    List {
        /// Maximum entries to show.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Delete one entry by id.
    Delete {
        /// Entry id (shown by `history list`).
        id: u64,
    },
    /// Delete all entries.
    Clear,
}

/// Runs the history command.
pub async fn run(args: &HistoryArgs, cli: &Cli) -> Result<()> {
    let path = default_history_path();
    let mut history: InsightHistory = load_json(&path).await?.unwrap_or_default();

    match &args.action {
        HistoryAction::List { limit } => {
            output::print_history(&history.list(*limit), cli)?;
        }
        HistoryAction::Delete { id } => {
            history.delete(*id)?;
            save_json(&path, &history).await?;
            println!("Deleted entry {id}");
        }
        HistoryAction::Clear => {
            let count = history.len();
            history.clear();
            save_json(&path, &history).await?;
            println!("Cleared {count} entries");
        }
    }

    Ok(())
}
