//! Insight result types.
//!
//! This module contains the aggregate produced by every analyzer:
//! - [`InsightResult`] - Main container with all generated insights
//! - [`Sentiment`] - Sentiment sub-result
//! - [`QualityAnalysis`] - Quality sub-result, flattened into the aggregate
//!
//! Every field of [`InsightResult`] always holds a value. Where the remote
//! provider gives nothing usable, the documented static defaults below are
//! substituted, so consumers never see a partially-absent aggregate.

use serde::{Deserialize, Serialize};

// ============================================================================
// Sentiment
// ============================================================================

/// Overall sentiment label of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// Predominantly positive tone.
    Positive,
    /// Predominantly negative tone.
    Negative,
    /// Neither clearly positive nor negative.
    Neutral,
}

impl SentimentLabel {
    /// Returns the display name for this label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Sentiment analysis of a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// The overall sentiment label.
    pub sentiment: SentimentLabel,
    /// Confidence in the label, in `[0, 1]`.
    pub confidence: f64,
    /// Detected emotions (e.g. "joy", "pride").
    #[serde(default)]
    pub emotions: Vec<String>,
    /// Overall tone (e.g. "professional", "casual").
    #[serde(default)]
    pub tone: String,
}

impl Sentiment {
    /// The neutral default substituted when sentiment analysis yields nothing.
    pub fn neutral() -> Self {
        Self {
            sentiment: SentimentLabel::Neutral,
            confidence: 0.5,
            emotions: vec!["professional".to_string()],
            tone: "professional".to_string(),
        }
    }
}

impl Default for Sentiment {
    fn default() -> Self {
        Self::neutral()
    }
}

// ============================================================================
// Quality Analysis
// ============================================================================

/// Quality assessment of a post.
///
/// Produced as a nested object by the quality task and flattened into the
/// four `quality*` fields of [`InsightResult`] during assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityAnalysis {
    /// Quality score from 1 to 10.
    pub score: i64,
    /// Specific suggestions for improvement.
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// What the post does well.
    #[serde(default)]
    pub strengths: Vec<String>,
    /// What the post does poorly.
    #[serde(default)]
    pub weaknesses: Vec<String>,
}

impl QualityAnalysis {
    /// The baseline default substituted when quality analysis yields nothing.
    pub fn baseline() -> Self {
        Self {
            score: 7,
            suggestions: vec![
                "Add more specific examples".to_string(),
                "Include a clear call-to-action".to_string(),
            ],
            strengths: vec!["Clear message".to_string()],
            weaknesses: vec!["Could be more engaging".to_string()],
        }
    }
}

impl Default for QualityAnalysis {
    fn default() -> Self {
        Self::baseline()
    }
}

// ============================================================================
// Insight Result
// ============================================================================

/// The full aggregate of insights generated for one post.
///
/// Constructed once by the orchestrator (or the fallback analyzer) and
/// immutable afterwards. Serializes with camelCase field names; that JSON
/// shape is consumed verbatim by UI and history collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightResult {
    /// Concise summary of the post (2-3 sentences).
    pub summary: String,
    /// The single key message of the post.
    pub main_idea: String,
    /// Up to 3 prioritized actionable steps.
    pub actionable_steps: Vec<String>,
    /// Up to 3 project ideas inspired by the post (may be empty).
    #[serde(default)]
    pub project_ideas: Vec<String>,
    /// Sentiment analysis.
    pub sentiment: Sentiment,
    /// Up to 5 key topics.
    pub key_topics: Vec<String>,
    /// Description of the primary audience.
    pub target_audience: String,
    /// Quality score from 1 to 10.
    pub quality_score: i64,
    /// Suggestions for improvement.
    #[serde(default)]
    pub quality_suggestions: Vec<String>,
    /// Strengths of the post.
    #[serde(default)]
    pub quality_strengths: Vec<String>,
    /// Weaknesses of the post.
    #[serde(default)]
    pub quality_weaknesses: Vec<String>,
}

impl InsightResult {
    /// The default actionable steps substituted when the steps task yields
    /// no parseable list.
    pub fn default_actionable_steps() -> Vec<String> {
        vec![
            "Review the post content".to_string(),
            "Identify key takeaways".to_string(),
            "Plan next steps".to_string(),
        ]
    }

    /// The default key topics substituted when the topics task yields nothing.
    pub fn default_key_topics() -> Vec<String> {
        vec!["General".to_string(), "Professional".to_string()]
    }

    /// The default audience description.
    pub fn default_target_audience() -> String {
        "General professional audience".to_string()
    }

    /// Flattens a [`QualityAnalysis`] into the four quality fields.
    pub fn apply_quality(&mut self, quality: QualityAnalysis) {
        self.quality_score = quality.score;
        self.quality_suggestions = quality.suggestions;
        self.quality_strengths = quality.strengths;
        self.quality_weaknesses = quality.weaknesses;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_neutral_default() {
        let sentiment = Sentiment::neutral();
        assert_eq!(sentiment.sentiment, SentimentLabel::Neutral);
        assert!((sentiment.confidence - 0.5).abs() < f64::EPSILON);
        assert_eq!(sentiment.emotions, vec!["professional"]);
        assert_eq!(sentiment.tone, "professional");
    }

    #[test]
    fn test_quality_baseline() {
        let quality = QualityAnalysis::baseline();
        assert_eq!(quality.score, 7);
        assert_eq!(quality.suggestions.len(), 2);
        assert_eq!(quality.strengths, vec!["Clear message"]);
    }

    #[test]
    fn test_default_actionable_steps_has_three_items() {
        assert_eq!(InsightResult::default_actionable_steps().len(), 3);
    }

    #[test]
    fn test_apply_quality_flattens_fields() {
        let mut result = InsightResult {
            summary: String::new(),
            main_idea: String::new(),
            actionable_steps: Vec::new(),
            project_ideas: Vec::new(),
            sentiment: Sentiment::neutral(),
            key_topics: Vec::new(),
            target_audience: String::new(),
            quality_score: 0,
            quality_suggestions: Vec::new(),
            quality_strengths: Vec::new(),
            quality_weaknesses: Vec::new(),
        };

        result.apply_quality(QualityAnalysis {
            score: 9,
            suggestions: vec!["shorter hook".to_string()],
            strengths: vec!["specific".to_string()],
            weaknesses: vec![],
        });

        assert_eq!(result.quality_score, 9);
        assert_eq!(result.quality_suggestions, vec!["shorter hook"]);
        assert_eq!(result.quality_strengths, vec!["specific"]);
        assert!(result.quality_weaknesses.is_empty());
    }
}
