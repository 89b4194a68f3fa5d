//! End-to-end fallback behavior over the real HTTP backend.
//!
//! With no credential configured the backend short-circuits before any
//! network attempt, so these tests run fully offline: the service result
//! must equal what the heuristic analyzer produces on its own.

use postlens_core::{InsightAnalyzer, InsightRequest};
use postlens_fallback::HeuristicAnalyzer;
use postlens_llm::{InsightService, LlmSettings};

const POST: &str = "Proud to announce our new release! Try the beta today. #release #oss";

#[tokio::test]
async fn test_no_credential_yields_fallback_result() {
    let settings = LlmSettings::default();
    assert!(!settings.has_credential());

    let service = InsightService::with_settings(settings, HeuristicAnalyzer::new());
    let request = InsightRequest::new(POST).unwrap();

    let via_service = service.process(&request).await.unwrap();
    let direct = HeuristicAnalyzer::new().analyze(&request).await.unwrap();

    assert_eq!(via_service, direct);
}

#[tokio::test]
async fn test_fallback_result_is_fully_populated() {
    let service = InsightService::with_settings(LlmSettings::default(), HeuristicAnalyzer::new());
    let request = InsightRequest::new(POST).unwrap();

    let result = service.process(&request).await.unwrap();

    assert!(!result.summary.is_empty());
    assert!(!result.main_idea.is_empty());
    assert!(!result.actionable_steps.is_empty());
    assert!(!result.key_topics.is_empty());
    assert!(!result.target_audience.is_empty());
    assert!((1..=10).contains(&result.quality_score));
}
