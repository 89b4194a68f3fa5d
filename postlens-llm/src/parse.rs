//! Response parsers.
//!
//! Each insight task pairs with one of these extractors. Parsers operate on
//! raw completion text and always produce a usable value: list parsers cap
//! and default as documented, JSON parsers swallow malformed payloads and
//! substitute the static defaults. Nothing in this module can fail.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use postlens_core::{InsightResult, QualityAnalysis, Sentiment};

/// Maximum actionable steps kept.
const MAX_STEPS: usize = 3;

/// Maximum project ideas kept.
const MAX_IDEAS: usize = 3;

/// Maximum key topics kept.
const MAX_TOPICS: usize = 5;

fn numbered_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*\d+[.)]\s*").expect("valid regex"))
}

fn bullet_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*[-*\u{2022}]\s*").expect("valid regex"))
}

// ============================================================================
// Plain Text
// ============================================================================

/// Trims a plain-text completion (summary, main idea, target audience).
///
/// An empty completion stays empty at this layer; the orchestrator decides
/// whether a default applies.
pub fn plain_text(raw: &str) -> String {
    raw.trim().to_string()
}

// ============================================================================
// List Parsers
// ============================================================================

/// Parses a numbered list of actionable steps.
///
/// Keeps lines with a `1.` / `1)` style prefix, strips the prefix, caps at
/// three. Zero parseable lines substitutes the documented default steps.
pub fn actionable_steps(raw: &str) -> Vec<String> {
    let steps: Vec<String> = raw
        .lines()
        .filter(|line| numbered_prefix().is_match(line))
        .map(|line| numbered_prefix().replace(line, "").trim().to_string())
        .filter(|step| !step.is_empty())
        .take(MAX_STEPS)
        .collect();

    if steps.is_empty() {
        InsightResult::default_actionable_steps()
    } else {
        steps
    }
}

/// Parses a bulleted-or-numbered list of project ideas.
///
/// Accepts `-`, `*`, `•` and numbered prefixes, caps at three. No synthetic
/// ideas are fabricated: zero parseable lines yields an empty list.
pub fn project_ideas(raw: &str) -> Vec<String> {
    raw.lines()
        .filter_map(|line| {
            if numbered_prefix().is_match(line) {
                Some(numbered_prefix().replace(line, "").trim().to_string())
            } else if bullet_prefix().is_match(line) {
                Some(bullet_prefix().replace(line, "").trim().to_string())
            } else {
                None
            }
        })
        .filter(|idea| !idea.is_empty())
        .take(MAX_IDEAS)
        .collect()
}

/// Parses a `,`/`;`-delimited list of key topics, capped at five.
///
/// An empty result substitutes the documented default topics.
pub fn key_topics(raw: &str) -> Vec<String> {
    let topics: Vec<String> = raw
        .split([',', ';'])
        .map(|topic| topic.trim().to_string())
        .filter(|topic| !topic.is_empty())
        .take(MAX_TOPICS)
        .collect();

    if topics.is_empty() {
        InsightResult::default_key_topics()
    } else {
        topics
    }
}

// ============================================================================
// Embedded JSON Parsers
// ============================================================================

/// Extracts the greedy first-`{`-to-last-`}` span from a completion.
fn json_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

/// Parses the sentiment JSON embedded in a completion.
///
/// Absence of a JSON span or a parse failure substitutes the neutral
/// default; failures are logged for diagnostics only, never propagated.
pub fn sentiment(raw: &str) -> Sentiment {
    match json_span(raw).map(serde_json::from_str::<Sentiment>) {
        Some(Ok(parsed)) => parsed,
        Some(Err(error)) => {
            debug!(%error, "Sentiment JSON unparseable, using default");
            Sentiment::neutral()
        }
        None => {
            debug!("No JSON object in sentiment completion, using default");
            Sentiment::neutral()
        }
    }
}

/// Parses the quality-analysis JSON embedded in a completion.
///
/// Same absorption rules as [`sentiment`].
pub fn quality(raw: &str) -> QualityAnalysis {
    match json_span(raw).map(serde_json::from_str::<QualityAnalysis>) {
        Some(Ok(parsed)) => parsed,
        Some(Err(error)) => {
            debug!(%error, "Quality JSON unparseable, using default");
            QualityAnalysis::baseline()
        }
        None => {
            debug!("No JSON object in quality completion, using default");
            QualityAnalysis::baseline()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
