//! Insight request type.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A validated request to analyze one post.
///
/// Created per caller invocation and consumed once. The post text is
/// guaranteed non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightRequest {
    post_text: String,
}

impl InsightRequest {
    /// Creates a request, rejecting empty or whitespace-only text.
    pub fn new(post_text: impl Into<String>) -> Result<Self, CoreError> {
        let post_text = post_text.into();
        if post_text.trim().is_empty() {
            return Err(CoreError::EmptyPost);
        }
        Ok(Self { post_text })
    }

    /// The post text to analyze.
    pub fn post_text(&self) -> &str {
        &self.post_text
    }

    /// Consumes the request, returning the post text.
    pub fn into_post_text(self) -> String {
        self.post_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_text() {
        assert!(matches!(InsightRequest::new(""), Err(CoreError::EmptyPost)));
        assert!(matches!(
            InsightRequest::new("   \n\t "),
            Err(CoreError::EmptyPost)
        ));
    }

    #[test]
    fn test_accepts_real_text() {
        let request = InsightRequest::new("Shipped our new feature today!").unwrap();
        assert_eq!(request.post_text(), "Shipped our new feature today!");
    }
}
