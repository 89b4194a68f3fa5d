//! Output formatting for insight results and history.

use anyhow::Result;

use postlens_core::InsightResult;
use postlens_store::HistoryEntry;

use crate::{Cli, OutputFormat};

/// Prints one insight result in the selected format.
pub fn print_result(result: &InsightResult, cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Text => print_result_text(result),
        OutputFormat::Json => print_json(result, cli.pretty)?,
    }
    Ok(())
}

/// Prints history entries in the selected format.
pub fn print_history(entries: &[&HistoryEntry], cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Text => {
            if entries.is_empty() {
                println!("No history yet.");
                return Ok(());
            }
            for entry in entries {
                println!(
                    "#{}  {}  {}",
                    entry.id,
                    entry.timestamp.format("%Y-%m-%d %H:%M"),
                    truncate(&entry.original_post, 60)
                );
                println!("    {}", truncate(&entry.result.summary, 76));
            }
        }
        OutputFormat::Json => print_json(&entries, cli.pretty)?,
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

fn print_result_text(result: &InsightResult) {
    println!("Summary");
    println!("  {}", result.summary);
    println!();
    println!("Main idea");
    println!("  {}", result.main_idea);
    println!();

    println!("Actionable steps");
    for (index, step) in result.actionable_steps.iter().enumerate() {
        println!("  {}. {step}", index + 1);
    }
    println!();

    if !result.project_ideas.is_empty() {
        println!("Project ideas");
        for idea in &result.project_ideas {
            println!("  - {idea}");
        }
        println!();
    }

    println!(
        "Sentiment: {} ({:.0}% confident, tone: {})",
        result.sentiment.sentiment,
        result.sentiment.confidence * 100.0,
        result.sentiment.tone
    );
    if !result.sentiment.emotions.is_empty() {
        println!("Emotions:  {}", result.sentiment.emotions.join(", "));
    }
    println!("Topics:    {}", result.key_topics.join(", "));
    println!("Audience:  {}", result.target_audience);
    println!();

    println!("Quality score: {}/10", result.quality_score);
    for suggestion in &result.quality_suggestions {
        println!("  improve: {suggestion}");
    }
    for strength in &result.quality_strengths {
        println!("  strength: {strength}");
    }
    for weakness in &result.quality_weaknesses {
        println!("  weakness: {weakness}");
    }
}

/// Truncates display text to a character budget.
fn truncate(text: &str, max_chars: usize) -> String {
    let flattened = text.replace('\n', " ");
    if flattened.chars().count() <= max_chars {
        return flattened;
    }
    let kept: String = flattened.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_flattens_newlines_and_caps() {
        let truncated = truncate("line one\nline two and much more text", 15);
        assert!(truncated.ends_with("..."));
        assert!(truncated.chars().count() <= 15);
        assert!(!truncated.contains('\n'));
    }
}
