//! Insight orchestration.
//!
//! Fans the eight insight tasks out over the completion backend with two
//! failure policies and assembles the final aggregate:
//!
//! - Essential tasks (summary, main idea, actionable steps) run
//!   all-or-nothing; any failure propagates unchanged and no defaults are
//!   substituted for essential fields.
//! - Secondary tasks (project ideas, sentiment, key topics, target
//!   audience, quality) run failure-isolated; a failing member is silently
//!   replaced by its documented default and the group never fails.

use std::sync::Arc;
use tracing::{debug, instrument, warn};

use postlens_core::{InsightRequest, InsightResult, QualityAnalysis, Sentiment};

use crate::dispatch::CompletionBackend;
use crate::error::DispatchError;
use crate::join;
use crate::parse;
use crate::task::InsightTask;

// ============================================================================
// Orchestrator
// ============================================================================

/// Runs the insight task groups and assembles the result.
pub struct InsightOrchestrator {
    backend: Arc<dyn CompletionBackend>,
}

impl InsightOrchestrator {
    /// Creates an orchestrator over the given backend.
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    /// Dispatches one task and returns its raw completion text.
    async fn run_task(
        &self,
        task: InsightTask,
        post_text: &str,
    ) -> Result<String, DispatchError> {
        debug!(task = %task, "Dispatching insight task");
        self.backend
            .complete(&task.prompt(post_text), Some(task.system_prompt()))
            .await
    }

    /// Runs all eight tasks and assembles the aggregate.
    ///
    /// Fails only when an essential task fails; the classification of that
    /// failure propagates unchanged for the gate to route on.
    #[instrument(skip(self, request))]
    pub async fn run(&self, request: &InsightRequest) -> Result<InsightResult, DispatchError> {
        let text = request.post_text();

        // Essential group: all three must succeed before anything else
        // matters; the first failure aborts the group.
        let essential = join::require_all(
            InsightTask::ESSENTIAL
                .iter()
                .map(|task| self.run_task(*task, text))
                .collect(),
        )
        .await?;

        let [summary_raw, main_idea_raw, steps_raw]: [String; 3] = essential
            .try_into()
            .map_err(|_| DispatchError::Upstream("essential task group size mismatch".to_string()))?;

        // Secondary group: every member settles independently.
        let settled = join::settle_all(
            InsightTask::SECONDARY
                .iter()
                .map(|task| self.run_task(*task, text))
                .collect(),
        )
        .await;

        for (task, outcome) in InsightTask::SECONDARY.iter().zip(&settled) {
            if let Err(error) = outcome {
                warn!(task = %task, %error, "Secondary task failed, substituting default");
            }
        }

        let mut settled = settled.into_iter();
        let ideas_raw = settled.next().unwrap_or(Ok(String::new()));
        let sentiment_raw = settled.next().unwrap_or(Ok(String::new()));
        let topics_raw = settled.next().unwrap_or(Ok(String::new()));
        let audience_raw = settled.next().unwrap_or(Ok(String::new()));
        let quality_raw = settled.next().unwrap_or(Ok(String::new()));

        let quality = quality_raw
            .map(|raw| parse::quality(&raw))
            .unwrap_or_else(|_| QualityAnalysis::baseline());

        Ok(InsightResult {
            summary: parse::plain_text(&summary_raw),
            main_idea: parse::plain_text(&main_idea_raw),
            actionable_steps: parse::actionable_steps(&steps_raw),
            project_ideas: ideas_raw
                .map(|raw| parse::project_ideas(&raw))
                .unwrap_or_default(),
            sentiment: sentiment_raw
                .map(|raw| parse::sentiment(&raw))
                .unwrap_or_else(|_| Sentiment::neutral()),
            key_topics: topics_raw
                .map(|raw| parse::key_topics(&raw))
                .unwrap_or_else(|_| InsightResult::default_key_topics()),
            target_audience: audience_raw
                .map(|raw| parse::plain_text(&raw))
                .unwrap_or_else(|_| InsightResult::default_target_audience()),
            quality_score: quality.score,
            quality_suggestions: quality.suggestions,
            quality_strengths: quality.strengths,
            quality_weaknesses: quality.weaknesses,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use postlens_core::SentimentLabel;
    use std::collections::HashMap;

    /// Backend scripted per task: unknown tasks answer with empty text.
    struct ScriptedBackend {
        responses: HashMap<InsightTask, Result<String, DispatchError>>,
    }

    impl ScriptedBackend {
        fn new() -> Self {
            Self {
                responses: HashMap::new(),
            }
        }

        fn answer(mut self, task: InsightTask, text: &str) -> Self {
            self.responses.insert(task, Ok(text.to_string()));
            self
        }

        fn fail(mut self, task: InsightTask, error: DispatchError) -> Self {
            self.responses.insert(task, Err(error));
            self
        }

        fn fail_all_secondary(mut self, error: DispatchError) -> Self {
            for task in InsightTask::SECONDARY {
                self.responses.insert(task, Err(error.clone()));
            }
            self
        }

        /// Recovers the task from the system prompt it was dispatched with.
        fn task_for(system_prompt: Option<&str>) -> Option<InsightTask> {
            let system_prompt = system_prompt?;
            InsightTask::ALL
                .into_iter()
                .find(|task| task.system_prompt() == system_prompt)
        }
    }

    #[async_trait]
    impl CompletionBackend for ScriptedBackend {
        async fn complete(
            &self,
            _prompt: &str,
            system_prompt: Option<&str>,
        ) -> Result<String, DispatchError> {
            let Some(task) = Self::task_for(system_prompt) else {
                return Ok(String::new());
            };
            self.responses
                .get(&task)
                .cloned()
                .unwrap_or_else(|| Ok(String::new()))
        }
    }

    fn orchestrator(backend: ScriptedBackend) -> InsightOrchestrator {
        InsightOrchestrator::new(Arc::new(backend))
    }

    fn request() -> InsightRequest {
        InsightRequest::new("We just shipped a new release.").unwrap()
    }

    #[tokio::test]
    async fn test_full_success_assembles_parsed_values() {
        let backend = ScriptedBackend::new()
            .answer(InsightTask::Summary, "  A release announcement.  ")
            .answer(InsightTask::MainIdea, "The release is out.")
            .answer(InsightTask::ActionableSteps, "1. Upgrade\n2. Read notes\n3. Report bugs")
            .answer(InsightTask::ProjectIdeas, "- Build a plugin\n- Write a migration guide")
            .answer(
                InsightTask::Sentiment,
                r#"{"sentiment":"positive","confidence":0.9,"emotions":["excitement"],"tone":"inspirational"}"#,
            )
            .answer(InsightTask::KeyTopics, "Releases, Tooling, Open Source")
            .answer(InsightTask::TargetAudience, " Developers using the tool. ")
            .answer(
                InsightTask::QualityAnalysis,
                r#"{"score":8,"suggestions":["add a changelog link"],"strengths":["clear"],"weaknesses":["no visuals"]}"#,
            );

        let result = orchestrator(backend).run(&request()).await.unwrap();

        assert_eq!(result.summary, "A release announcement.");
        assert_eq!(result.main_idea, "The release is out.");
        assert_eq!(result.actionable_steps, vec!["Upgrade", "Read notes", "Report bugs"]);
        assert_eq!(result.project_ideas, vec!["Build a plugin", "Write a migration guide"]);
        assert_eq!(result.sentiment.sentiment, SentimentLabel::Positive);
        assert_eq!(result.key_topics, vec!["Releases", "Tooling", "Open Source"]);
        assert_eq!(result.target_audience, "Developers using the tool.");
        assert_eq!(result.quality_score, 8);
        assert_eq!(result.quality_suggestions, vec!["add a changelog link"]);
        assert_eq!(result.quality_strengths, vec!["clear"]);
        assert_eq!(result.quality_weaknesses, vec!["no visuals"]);
    }

    #[tokio::test]
    async fn test_essential_failure_propagates_classification() {
        let backend = ScriptedBackend::new()
            .answer(InsightTask::Summary, "fine")
            .fail(InsightTask::MainIdea, DispatchError::InvalidCredential)
            .answer(InsightTask::ActionableSteps, "1. x");

        let result = orchestrator(backend).run(&request()).await;
        assert_eq!(result.unwrap_err(), DispatchError::InvalidCredential);
    }

    #[tokio::test]
    async fn test_essential_upstream_failure_propagates_message() {
        let backend = ScriptedBackend::new()
            .fail(
                InsightTask::Summary,
                DispatchError::Upstream("HTTP 500".to_string()),
            )
            .answer(InsightTask::MainIdea, "fine")
            .answer(InsightTask::ActionableSteps, "1. x");

        let result = orchestrator(backend).run(&request()).await;
        assert_eq!(
            result.unwrap_err(),
            DispatchError::Upstream("HTTP 500".to_string())
        );
    }

    #[tokio::test]
    async fn test_all_secondary_failures_yield_defaults() {
        let backend = ScriptedBackend::new()
            .answer(InsightTask::Summary, "A summary.")
            .answer(InsightTask::MainIdea, "An idea.")
            .answer(InsightTask::ActionableSteps, "1. a\n2. b\n3. c")
            .fail_all_secondary(DispatchError::Upstream("secondary down".to_string()));

        let result = orchestrator(backend).run(&request()).await.unwrap();

        assert_eq!(result.summary, "A summary.");
        assert!(result.project_ideas.is_empty());
        assert_eq!(result.sentiment, Sentiment::neutral());
        assert_eq!(result.key_topics, InsightResult::default_key_topics());
        assert_eq!(result.target_audience, InsightResult::default_target_audience());
        let baseline = QualityAnalysis::baseline();
        assert_eq!(result.quality_score, baseline.score);
        assert_eq!(result.quality_suggestions, baseline.suggestions);
        assert_eq!(result.quality_strengths, baseline.strengths);
        assert_eq!(result.quality_weaknesses, baseline.weaknesses);
    }

    #[tokio::test]
    async fn test_empty_secondary_completions_use_parser_defaults() {
        // Secondary tasks that succeed with unusable text still produce the
        // documented defaults through their parsers.
        let backend = ScriptedBackend::new()
            .answer(InsightTask::Summary, "A summary.")
            .answer(InsightTask::MainIdea, "An idea.")
            .answer(InsightTask::ActionableSteps, "no list here");

        let result = orchestrator(backend).run(&request()).await.unwrap();

        // Steps parser substitutes its default even on success.
        assert_eq!(result.actionable_steps, InsightResult::default_actionable_steps());
        // Empty sentiment completion parses to neutral.
        assert_eq!(result.sentiment, Sentiment::neutral());
        // Empty topics completion parses to the default pair.
        assert_eq!(result.key_topics, InsightResult::default_key_topics());
        // Empty audience completion stays empty: plain text has no default
        // at the parse layer.
        assert_eq!(result.target_audience, "");
    }
}
