//! Insight task definitions.
//!
//! Each task pairs a prompt template with a system prompt. Tasks split into
//! two groups with different failure policies: the essential group
//! invalidates the whole request when any member fails, the secondary group
//! absorbs individual failures via static defaults.

// ============================================================================
// Insight Task
// ============================================================================

/// One of the eight insight computations run per post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsightTask {
    /// Concise summary (essential).
    Summary,
    /// Single key message (essential).
    MainIdea,
    /// Prioritized numbered steps (essential).
    ActionableSteps,
    /// Inspired project ideas (secondary).
    ProjectIdeas,
    /// Sentiment JSON (secondary).
    Sentiment,
    /// Comma-separated topics (secondary).
    KeyTopics,
    /// Audience description (secondary).
    TargetAudience,
    /// Quality-score JSON (secondary).
    QualityAnalysis,
}

impl InsightTask {
    /// The essential group: every member must succeed.
    pub const ESSENTIAL: [Self; 3] = [Self::Summary, Self::MainIdea, Self::ActionableSteps];

    /// The secondary group: individual failures are absorbed.
    pub const SECONDARY: [Self; 5] = [
        Self::ProjectIdeas,
        Self::Sentiment,
        Self::KeyTopics,
        Self::TargetAudience,
        Self::QualityAnalysis,
    ];

    /// All tasks, essential first.
    pub const ALL: [Self; 8] = [
        Self::Summary,
        Self::MainIdea,
        Self::ActionableSteps,
        Self::ProjectIdeas,
        Self::Sentiment,
        Self::KeyTopics,
        Self::TargetAudience,
        Self::QualityAnalysis,
    ];

    /// Returns the display name for this task (used in logs).
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::MainIdea => "main-idea",
            Self::ActionableSteps => "actionable-steps",
            Self::ProjectIdeas => "project-ideas",
            Self::Sentiment => "sentiment",
            Self::KeyTopics => "key-topics",
            Self::TargetAudience => "target-audience",
            Self::QualityAnalysis => "quality-analysis",
        }
    }

    /// Returns true if this task belongs to the essential group.
    pub fn is_essential(&self) -> bool {
        Self::ESSENTIAL.contains(self)
    }

    /// The system prompt framing this task.
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Self::Summary => {
                "You are a helpful assistant that summarizes social media posts clearly and concisely."
            }
            Self::MainIdea => {
                "You are an expert at identifying core messages and main ideas from social media posts."
            }
            Self::ActionableSteps => {
                "You are a productivity expert that extracts actionable insights from content. \
                 Provide clear, specific, prioritized steps."
            }
            Self::ProjectIdeas => {
                "You are a creative project advisor that generates practical and inspiring project ideas."
            }
            Self::Sentiment => {
                "You are a sentiment analysis expert. Always respond with valid JSON only."
            }
            Self::KeyTopics => {
                "You are an expert at identifying key topics and themes in content. \
                 Provide concise, relevant topics."
            }
            Self::TargetAudience => {
                "You are a marketing expert that identifies target audiences for content."
            }
            Self::QualityAnalysis => {
                "You are a content quality expert. Always respond with valid JSON only."
            }
        }
    }

    /// Builds the user prompt for this task.
    pub fn prompt(&self, post_text: &str) -> String {
        match self {
            Self::Summary => format!(
                "Please provide a concise summary (2-3 sentences) of the following social media post:\n\n{post_text}"
            ),
            Self::MainIdea => format!(
                "What is the main idea or key message of this social media post? Provide a single, clear sentence:\n\n{post_text}"
            ),
            Self::ActionableSteps => format!(
                "Based on this social media post, provide 3 prioritized actionable steps that someone could take. Format as a numbered list:\n\n{post_text}"
            ),
            Self::ProjectIdeas => format!(
                "Based on this social media post, suggest 2-3 project ideas that could be inspired by or related to this content. Be creative and practical:\n\n{post_text}"
            ),
            Self::Sentiment => format!(
                "Analyze the sentiment of this social media post. Respond with ONLY a JSON object in this exact format: {{\"sentiment\": \"positive/negative/neutral\", \"confidence\": 0.0-1.0, \"emotions\": [\"emotion1\", \"emotion2\"], \"tone\": \"professional/casual/inspirational/etc\"}}\n\n{post_text}"
            ),
            Self::KeyTopics => format!(
                "Extract the main topics and keywords from this social media post. Provide 3-5 key topics as a comma-separated list:\n\n{post_text}"
            ),
            Self::TargetAudience => format!(
                "Who is the target audience for this social media post? Describe the primary audience in 1-2 sentences:\n\n{post_text}"
            ),
            Self::QualityAnalysis => format!(
                "Analyze this social media post and provide: 1) A quality score from 1-10, 2) 2-3 specific suggestions for improvement. Respond in JSON format: {{\"score\": 8, \"suggestions\": [\"suggestion1\", \"suggestion2\"], \"strengths\": [\"strength1\"], \"weaknesses\": [\"weakness1\"]}}\n\n{post_text}"
            ),
        }
    }
}

impl std::fmt::Display for InsightTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_cover_all_tasks_once() {
        let mut combined: Vec<InsightTask> = InsightTask::ESSENTIAL.to_vec();
        combined.extend(InsightTask::SECONDARY);

        assert_eq!(combined.len(), InsightTask::ALL.len());
        for task in InsightTask::ALL {
            assert_eq!(combined.iter().filter(|t| **t == task).count(), 1);
        }
    }

    #[test]
    fn test_essential_classification() {
        assert!(InsightTask::Summary.is_essential());
        assert!(InsightTask::ActionableSteps.is_essential());
        assert!(!InsightTask::Sentiment.is_essential());
        assert!(!InsightTask::QualityAnalysis.is_essential());
    }

    #[test]
    fn test_prompt_embeds_post_text() {
        let post = "We just open-sourced our scheduler.";
        for task in InsightTask::ALL {
            assert!(task.prompt(post).contains(post), "{task} lost the post text");
        }
    }

    #[test]
    fn test_json_tasks_demand_json() {
        assert!(InsightTask::Sentiment.system_prompt().contains("JSON"));
        assert!(InsightTask::QualityAnalysis.system_prompt().contains("JSON"));
    }
}
