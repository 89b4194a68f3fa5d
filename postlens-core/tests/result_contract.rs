//! External-contract tests for the insight aggregate.
//!
//! Consumers (UI rendering, history storage) read the serialized JSON
//! directly, so the field names and nesting are a public contract.

use postlens_core::{InsightRequest, InsightResult, Sentiment, SentimentLabel};

fn full_result() -> InsightResult {
    InsightResult {
        summary: "Summary text.".to_string(),
        main_idea: "Main idea.".to_string(),
        actionable_steps: vec!["Step one".to_string(), "Step two".to_string()],
        project_ideas: vec!["Idea".to_string()],
        sentiment: Sentiment {
            sentiment: SentimentLabel::Positive,
            confidence: 0.8,
            emotions: vec!["joy".to_string()],
            tone: "casual".to_string(),
        },
        key_topics: vec!["Topic".to_string()],
        target_audience: "Audience".to_string(),
        quality_score: 8,
        quality_suggestions: vec!["suggestion".to_string()],
        quality_strengths: vec!["strength".to_string()],
        quality_weaknesses: vec!["weakness".to_string()],
    }
}

#[test]
fn aggregate_exposes_every_contract_field() {
    let value = serde_json::to_value(full_result()).unwrap();

    for field in [
        "summary",
        "mainIdea",
        "actionableSteps",
        "projectIdeas",
        "sentiment",
        "keyTopics",
        "targetAudience",
        "qualityScore",
        "qualitySuggestions",
        "qualityStrengths",
        "qualityWeaknesses",
    ] {
        assert!(value.get(field).is_some(), "missing contract field {field}");
    }

    assert_eq!(value["sentiment"]["sentiment"], "positive");
    assert_eq!(value["sentiment"]["confidence"], 0.8);
    assert_eq!(value["sentiment"]["emotions"][0], "joy");
    assert_eq!(value["sentiment"]["tone"], "casual");
}

#[test]
fn request_rejects_blank_posts() {
    assert!(InsightRequest::new("\n \t").is_err());
    assert!(InsightRequest::new("Real content").is_ok());
}

#[test]
fn defaults_match_documented_values() {
    assert_eq!(
        InsightResult::default_actionable_steps(),
        vec!["Review the post content", "Identify key takeaways", "Plan next steps"]
    );
    assert_eq!(
        InsightResult::default_key_topics(),
        vec!["General", "Professional"]
    );
    assert_eq!(
        InsightResult::default_target_audience(),
        "General professional audience"
    );

    let sentiment = Sentiment::neutral();
    assert_eq!(sentiment.sentiment, SentimentLabel::Neutral);
    assert_eq!(sentiment.tone, "professional");
}
