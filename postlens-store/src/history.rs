//! Insight history tracking.

use chrono::{DateTime, Utc};
use postlens_core::InsightResult;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::error::StoreError;

/// Maximum number of history entries kept; oldest are trimmed first.
const MAX_HISTORY_ENTRIES: usize = 50;

/// One analyzed post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Monotonically assigned id.
    pub id: u64,
    /// The post text that was analyzed.
    pub original_post: String,
    /// The insight aggregate produced for it.
    pub result: InsightResult,
    /// When the analysis happened.
    pub timestamp: DateTime<Utc>,
}

/// Bounded, ordered history of analyzed posts.
///
/// Entries are kept oldest-first internally; [`list`](Self::list) returns
/// them newest-first, matching how callers display history.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct InsightHistory {
    entries: VecDeque<HistoryEntry>,
    next_id: u64,
}

impl InsightHistory {
    /// Creates a new empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result, returning the assigned entry id.
    pub fn append(&mut self, original_post: impl Into<String>, result: InsightResult) -> u64 {
        self.next_id += 1;
        let id = self.next_id;

        self.entries.push_back(HistoryEntry {
            id,
            original_post: original_post.into(),
            result,
            timestamp: Utc::now(),
        });

        // Trim if over limit
        while self.entries.len() > MAX_HISTORY_ENTRIES {
            self.entries.pop_front();
        }

        id
    }

    /// Returns entries newest-first, optionally limited.
    pub fn list(&self, limit: Option<usize>) -> Vec<&HistoryEntry> {
        let iter = self.entries.iter().rev();
        match limit {
            Some(limit) => iter.take(limit).collect(),
            None => iter.collect(),
        }
    }

    /// Returns the entry with the given id.
    pub fn get(&self, id: u64) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Deletes the entry with the given id.
    pub fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(StoreError::EntryNotFound(id))?;
        self.entries.remove(position);
        Ok(())
    }

    /// Removes all entries. Ids keep advancing so they are never reused.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use postlens_core::Sentiment;

    fn result(summary: &str) -> InsightResult {
        InsightResult {
            summary: summary.to_string(),
            main_idea: "idea".to_string(),
            actionable_steps: vec!["step".to_string()],
            project_ideas: vec![],
            sentiment: Sentiment::neutral(),
            key_topics: vec!["Topic".to_string()],
            target_audience: "audience".to_string(),
            quality_score: 7,
            quality_suggestions: vec![],
            quality_strengths: vec![],
            quality_weaknesses: vec![],
        }
    }

    #[test]
    fn test_append_assigns_increasing_ids() {
        let mut history = InsightHistory::new();
        let first = history.append("post one", result("a"));
        let second = history.append("post two", result("b"));

        assert!(second > first);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_list_is_newest_first() {
        let mut history = InsightHistory::new();
        history.append("old", result("old"));
        history.append("new", result("new"));

        let listed = history.list(None);
        assert_eq!(listed[0].original_post, "new");
        assert_eq!(listed[1].original_post, "old");
    }

    #[test]
    fn test_list_respects_limit() {
        let mut history = InsightHistory::new();
        for i in 0..5 {
            history.append(format!("post {i}"), result("x"));
        }

        assert_eq!(history.list(Some(2)).len(), 2);
        assert_eq!(history.list(Some(2))[0].original_post, "post 4");
    }

    #[test]
    fn test_delete_by_id() {
        let mut history = InsightHistory::new();
        let id = history.append("doomed", result("x"));
        history.append("kept", result("y"));

        history.delete(id).unwrap();
        assert_eq!(history.len(), 1);
        assert!(history.get(id).is_none());

        assert!(matches!(
            history.delete(id),
            Err(StoreError::EntryNotFound(_))
        ));
    }

    #[test]
    fn test_bounded_at_max_entries() {
        let mut history = InsightHistory::new();
        for i in 0..60 {
            history.append(format!("post {i}"), result("x"));
        }

        assert_eq!(history.len(), 50);
        // The oldest entries were trimmed.
        let listed = history.list(None);
        assert_eq!(listed.last().unwrap().original_post, "post 10");
    }

    #[test]
    fn test_clear_keeps_id_sequence() {
        let mut history = InsightHistory::new();
        let first = history.append("one", result("x"));
        history.clear();
        assert!(history.is_empty());

        let second = history.append("two", result("y"));
        assert!(second > first);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut history = InsightHistory::new();
        history.append("post", result("summary"));

        let json = serde_json::to_string(&history).unwrap();
        let back: InsightHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(back.len(), 1);
        assert_eq!(back.list(None)[0].original_post, "post");
    }
}
