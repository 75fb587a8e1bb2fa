//! Answer Service Port - Interface for checking a submitted answer.

use async_trait::async_trait;

use crate::domain::foundation::Language;
use crate::domain::quiz::AnswerVerdict;

/// Errors that can occur while checking an answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    #[error("Invalid question index")]
    InvalidQuestionIndex,

    #[error("Answer check request failed: {0}")]
    Transport(String),

    #[error("Answer check rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

/// Port for checking an answer, locally or over the network.
#[async_trait]
pub trait AnswerService: Send + Sync {
    /// Check `answer` against the question at `question_index`.
    ///
    /// # Errors
    ///
    /// - `InvalidQuestionIndex` if the index is outside the language's set
    /// - `Transport` / `Rejected` if a remote check fails
    async fn check_answer(
        &self,
        language: Language,
        question_index: i64,
        answer: &str,
    ) -> Result<AnswerVerdict, CheckError>;
}
