//! Heuristic insight analyzer.
//!
//! Produces the full insight aggregate from post text alone. Every helper
//! is a pure function of its input, so the analyzer is deterministic and
//! safe to run concurrently.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use postlens_core::{
    CoreError, InsightAnalyzer, InsightRequest, InsightResult, QualityAnalysis, Sentiment,
    SentimentLabel,
};

use crate::lexicon;

/// Character cap applied to the extracted summary.
const SUMMARY_MAX_CHARS: usize = 300;

/// Sentences kept for the summary.
const SUMMARY_MAX_SENTENCES: usize = 3;

fn hashtag_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#(\w+)").expect("valid regex"))
}

// ============================================================================
// Heuristic Analyzer
// ============================================================================

/// Local, network-free insight analyzer.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAnalyzer;

impl HeuristicAnalyzer {
    /// Creates a new analyzer.
    pub fn new() -> Self {
        Self
    }
}

impl InsightAnalyzer for HeuristicAnalyzer {
    fn name(&self) -> &str {
        "heuristic"
    }

    async fn analyze(&self, request: &InsightRequest) -> Result<InsightResult, CoreError> {
        let text = request.post_text().trim();
        debug!(chars = text.len(), "Running heuristic analysis");

        let sentences = split_sentences(text);
        let sentiment = analyze_sentiment(text);
        let key_topics = extract_topics(text);
        let quality = assess_quality(text);

        let project_ideas = derive_project_ideas(text, &key_topics);

        Ok(InsightResult {
            summary: build_summary(&sentences, text),
            main_idea: sentences.first().cloned().unwrap_or_else(|| text.to_string()),
            actionable_steps: extract_steps(&sentences),
            project_ideas,
            sentiment,
            key_topics,
            target_audience: identify_audience(text),
            quality_score: quality.score,
            quality_suggestions: quality.suggestions,
            quality_strengths: quality.strengths,
            quality_weaknesses: quality.weaknesses,
        })
    }
}

// ============================================================================
// Text Extraction
// ============================================================================

/// Splits text into trimmed, non-empty sentences.
fn split_sentences(text: &str) -> Vec<String> {
    text.split_inclusive(['.', '!', '?'])
        .map(|sentence| sentence.trim().to_string())
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

/// First few sentences, capped in length.
fn build_summary(sentences: &[String], text: &str) -> String {
    let summary = if sentences.is_empty() {
        text.to_string()
    } else {
        sentences
            .iter()
            .take(SUMMARY_MAX_SENTENCES)
            .cloned()
            .collect::<Vec<_>>()
            .join(" ")
    };

    if summary.chars().count() <= SUMMARY_MAX_CHARS {
        return summary;
    }

    let truncated: String = summary.chars().take(SUMMARY_MAX_CHARS).collect();
    format!("{}...", truncated.trim_end())
}

/// Sentences opening with an imperative verb become actionable steps.
fn extract_steps(sentences: &[String]) -> Vec<String> {
    let steps: Vec<String> = sentences
        .iter()
        .filter(|sentence| {
            sentence
                .split_whitespace()
                .next()
                .is_some_and(|first| lexicon::IMPERATIVE_OPENERS.contains(&first.to_lowercase().as_str()))
        })
        .map(|sentence| sentence.trim_end_matches(['.', '!', '?']).to_string())
        .take(3)
        .collect();

    if steps.is_empty() {
        InsightResult::default_actionable_steps()
    } else {
        steps
    }
}

// ============================================================================
// Sentiment
// ============================================================================

/// Counts whole-word lexicon matches in lowercased text.
fn count_matches(words: &[&str], lowercase_words: &[String]) -> usize {
    lowercase_words
        .iter()
        .filter(|word| words.contains(&word.as_str()))
        .count()
}

fn analyze_sentiment(text: &str) -> Sentiment {
    let lowercase_words: Vec<String> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect();

    let positive = count_matches(lexicon::POSITIVE_WORDS, &lowercase_words);
    let negative = count_matches(lexicon::NEGATIVE_WORDS, &lowercase_words);

    let (label, strength) = match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => (SentimentLabel::Positive, positive - negative),
        std::cmp::Ordering::Less => (SentimentLabel::Negative, negative - positive),
        std::cmp::Ordering::Equal => (SentimentLabel::Neutral, 0),
    };

    // Confidence grows with the margin, capped well below certainty.
    #[allow(clippy::cast_precision_loss)]
    let confidence = (0.5 + 0.1 * strength as f64).min(0.9);

    let emotion_table = match label {
        SentimentLabel::Positive => lexicon::POSITIVE_EMOTIONS,
        SentimentLabel::Negative => lexicon::NEGATIVE_EMOTIONS,
        SentimentLabel::Neutral => &[],
    };
    let mut emotions: Vec<String> = emotion_table
        .iter()
        .filter(|(word, _)| lowercase_words.iter().any(|w| w == word))
        .map(|(_, emotion)| (*emotion).to_string())
        .collect();
    emotions.dedup();
    if emotions.is_empty() {
        emotions.push("professional".to_string());
    }

    let inspirational = count_matches(lexicon::INSPIRATIONAL_WORDS, &lowercase_words) > 0;
    let tone = if inspirational {
        "inspirational"
    } else if text.contains('!') && label == SentimentLabel::Positive {
        "casual"
    } else {
        "professional"
    };

    Sentiment {
        sentiment: label,
        confidence,
        emotions,
        tone: tone.to_string(),
    }
}

// ============================================================================
// Topics & Audience
// ============================================================================

/// Hashtags first, then capitalized mid-sentence terms, capped at five.
fn extract_topics(text: &str) -> Vec<String> {
    let mut topics: Vec<String> = hashtag_pattern()
        .captures_iter(text)
        .map(|capture| capitalize(&capture[1]))
        .collect();

    for sentence in split_sentences(text) {
        // Skip the first word of each sentence: capitalization there says
        // nothing about the word itself.
        for word in sentence.split_whitespace().skip(1) {
            let cleaned = word.trim_matches(|c: char| !c.is_alphanumeric());
            if cleaned.len() > 4
                && cleaned.chars().next().is_some_and(char::is_uppercase)
                && !topics.iter().any(|t| t.eq_ignore_ascii_case(cleaned))
            {
                topics.push(cleaned.to_string());
            }
        }
    }

    topics.truncate(5);
    if topics.is_empty() {
        InsightResult::default_key_topics()
    } else {
        topics
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn identify_audience(text: &str) -> String {
    let lowercase = text.to_lowercase();
    for (keywords, description) in lexicon::AUDIENCE_RULES {
        if keywords.iter().any(|keyword| lowercase.contains(keyword)) {
            return (*description).to_string();
        }
    }
    InsightResult::default_target_audience()
}

/// Modest project ideas derived from detected topics; none when topic
/// detection fell back to the defaults.
fn derive_project_ideas(text: &str, topics: &[String]) -> Vec<String> {
    if topics == InsightResult::default_key_topics().as_slice() {
        return Vec::new();
    }

    let mut ideas: Vec<String> = topics
        .iter()
        .take(2)
        .map(|topic| format!("Write a deep-dive post about {topic}"))
        .collect();

    if text.len() > 400 {
        ideas.push("Turn this post into a short talk or article series".to_string());
    }

    ideas.truncate(3);
    ideas
}

// ============================================================================
// Quality
// ============================================================================

fn assess_quality(text: &str) -> QualityAnalysis {
    let mut score: i64 = 5;
    let mut suggestions = Vec::new();
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();

    let chars = text.chars().count();
    if (80..=1500).contains(&chars) {
        score += 1;
        strengths.push("Substantive length".to_string());
    } else if chars < 80 {
        weaknesses.push("Very short for a standalone post".to_string());
        suggestions.push("Expand the post with context or an example".to_string());
    } else {
        weaknesses.push("Long enough to lose readers".to_string());
        suggestions.push("Tighten the post or split it into a series".to_string());
    }

    if hashtag_pattern().is_match(text) {
        score += 1;
        strengths.push("Uses hashtags for reach".to_string());
    } else {
        suggestions.push("Add 2-3 relevant hashtags".to_string());
    }

    let lowercase = text.to_lowercase();
    let has_cta = text.contains('?')
        || lexicon::CTA_MARKERS
            .iter()
            .any(|marker| lowercase.contains(marker));
    if has_cta {
        score += 1;
        strengths.push("Invites engagement".to_string());
    } else {
        suggestions.push("Include a clear call-to-action".to_string());
    }

    if text.lines().filter(|line| !line.trim().is_empty()).count() > 1 {
        score += 1;
        strengths.push("Broken into readable paragraphs".to_string());
    } else {
        suggestions.push("Break the text into shorter paragraphs".to_string());
    }

    if strengths.is_empty() {
        strengths.push("Clear message".to_string());
    }
    if weaknesses.is_empty() {
        weaknesses.push("Could be more engaging".to_string());
    }

    QualityAnalysis {
        score: score.clamp(1, 10),
        suggestions,
        strengths,
        weaknesses,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    async fn analyze(text: &str) -> InsightResult {
        let analyzer = HeuristicAnalyzer::new();
        let request = InsightRequest::new(text).unwrap();
        analyzer.analyze(&request).await.unwrap()
    }

    #[tokio::test]
    async fn test_summary_and_main_idea_from_sentences() {
        let result = analyze(
            "We shipped the new scheduler today. It cuts deploy times in half. \
             Huge thanks to the whole team. More details coming next week.",
        )
        .await;

        assert_eq!(result.main_idea, "We shipped the new scheduler today.");
        assert!(result.summary.starts_with("We shipped the new scheduler today."));
        assert!(result.summary.contains("deploy times"));
        // Only the first three sentences are kept.
        assert!(!result.summary.contains("next week"));
    }

    #[tokio::test]
    async fn test_positive_sentiment_detected() {
        let result = analyze("So excited and proud of this launch! A great milestone.").await;

        assert_eq!(result.sentiment.sentiment, SentimentLabel::Positive);
        assert!(result.sentiment.confidence > 0.5);
        assert!(result.sentiment.emotions.contains(&"excitement".to_string()));
    }

    #[tokio::test]
    async fn test_negative_sentiment_detected() {
        let result = analyze("Unfortunately we failed to close the round. A hard, sad week.").await;

        assert_eq!(result.sentiment.sentiment, SentimentLabel::Negative);
        assert!(result.sentiment.confidence > 0.5);
    }

    #[tokio::test]
    async fn test_neutral_sentiment_for_plain_text() {
        let result = analyze("The meeting is scheduled for Tuesday at ten.").await;

        assert_eq!(result.sentiment.sentiment, SentimentLabel::Neutral);
        assert!((result.sentiment.confidence - 0.5).abs() < f64::EPSILON);
        assert_eq!(result.sentiment.emotions, vec!["professional"]);
    }

    #[tokio::test]
    async fn test_hashtags_become_topics() {
        let result = analyze("Notes from the conference. #rust #async #networking").await;

        assert!(result.key_topics.contains(&"Rust".to_string()));
        assert!(result.key_topics.contains(&"Async".to_string()));
        assert!(result.key_topics.len() <= 5);
    }

    #[tokio::test]
    async fn test_topics_default_without_signals() {
        let result = analyze("a quiet note with nothing to mine").await;
        assert_eq!(result.key_topics, InsightResult::default_key_topics());
        // No fabricated ideas when topics are just the defaults.
        assert!(result.project_ideas.is_empty());
    }

    #[tokio::test]
    async fn test_imperative_sentences_become_steps() {
        let result = analyze(
            "We open-sourced the tool. Try the quickstart guide. Join our community chat.",
        )
        .await;

        assert_eq!(
            result.actionable_steps,
            vec!["Try the quickstart guide", "Join our community chat"]
        );
    }

    #[tokio::test]
    async fn test_steps_default_without_imperatives() {
        let result = analyze("Reflecting on a decade in this industry.").await;
        assert_eq!(
            result.actionable_steps,
            InsightResult::default_actionable_steps()
        );
    }

    #[tokio::test]
    async fn test_audience_rules() {
        let result = analyze("Tips for every engineer debugging async code.").await;
        assert_eq!(result.target_audience, "Software engineers and developers");

        let result = analyze("How I rewrote my resume for my last interview.").await;
        assert_eq!(
            result.target_audience,
            "Job seekers and professionals navigating their careers"
        );

        let result = analyze("Lunch was good today.").await;
        assert_eq!(
            result.target_audience,
            InsightResult::default_target_audience()
        );
    }

    #[tokio::test]
    async fn test_quality_score_stays_in_range() {
        for text in [
            "short",
            "A well-structured post about engineering.\n\nIt has paragraphs. What do you think? #engineering",
        ] {
            let result = analyze(text).await;
            assert!((1..=10).contains(&result.quality_score), "score out of range for {text:?}");
            assert!(!result.quality_strengths.is_empty());
            assert!(!result.quality_weaknesses.is_empty());
        }
    }

    #[tokio::test]
    async fn test_analysis_is_deterministic() {
        let text = "Proud to launch our new API! Try it today. #api #launch";
        assert_eq!(analyze(text).await, analyze(text).await);
    }
}
