//! Question Repository Port - Interface for loading question sets.
//!
//! The local adapter serves sets loaded from disk at startup; the remote
//! adapter fetches them from a running quiz server.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::foundation::Language;
use crate::domain::quiz::QuestionSet;

/// Errors that can occur while loading quiz content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("Content not found: {0}")]
    NotFound(String),

    #[error("Failed to read {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("Content is invalid: {0}")]
    Invalid(String),

    #[error("Content request failed: {0}")]
    Transport(String),
}

impl ContentError {
    pub fn io(path: impl Into<String>, reason: impl ToString) -> Self {
        ContentError::Io {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn parse(path: impl Into<String>, reason: impl ToString) -> Self {
        ContentError::Parse {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Port for retrieving the question set for a language.
///
/// Implementations fall back to the default language for languages they do
/// not carry, so a successful call always yields the set to play.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Load the question set for `language`.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if the set cannot be produced at all.
    async fn questions(&self, language: Language) -> Result<Arc<QuestionSet>, ContentError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_path() {
        let err = ContentError::io("content/quiz/en.json", "permission denied");
        assert_eq!(
            err.to_string(),
            "Failed to read content/quiz/en.json: permission denied"
        );
    }

    #[test]
    fn parse_error_names_the_path() {
        let err = ContentError::parse("content/quiz/ru.json", "expected value at line 1");
        assert!(err.to_string().starts_with("Failed to parse content/quiz/ru.json"));
    }
}
