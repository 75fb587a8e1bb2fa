//! Quiz-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Quiz-specific errors.
///
/// Every operation that returns one of these leaves the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// Question index outside `[0, len)`.
    #[error("Invalid question index")]
    InvalidQuestionIndex { index: i64, len: usize },

    /// An answer was submitted before the quiz was started.
    #[error("Quiz has not been started")]
    NotStarted,

    /// An answer for the current question is already being checked.
    #[error("An answer for question {index} is already being checked")]
    SubmissionInFlight { index: usize },

    /// The question set could not be loaded.
    #[error("Questions are unavailable: {0}")]
    ContentUnavailable(String),

    /// The answer check round trip failed. The caller may retry.
    #[error("Answer check failed: {0}")]
    CheckFailed(String),

    /// A phase transition was rejected by the state machine.
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl QuizError {
    pub fn invalid_question_index(index: i64, len: usize) -> Self {
        QuizError::InvalidQuestionIndex { index, len }
    }
    pub fn content_unavailable(reason: impl Into<String>) -> Self {
        QuizError::ContentUnavailable(reason.into())
    }
    pub fn check_failed(reason: impl Into<String>) -> Self {
        QuizError::CheckFailed(reason.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            QuizError::InvalidQuestionIndex { .. } => ErrorCode::InvalidQuestionIndex,
            QuizError::NotStarted => ErrorCode::QuizNotStarted,
            QuizError::SubmissionInFlight { .. } => ErrorCode::SubmissionInFlight,
            QuizError::ContentUnavailable(_) => ErrorCode::ContentUnavailable,
            QuizError::CheckFailed(_) => ErrorCode::CheckFailed,
            QuizError::InvalidState(_) => ErrorCode::InvalidStateTransition,
        }
    }

    /// True for failures the presentation layer should offer to retry.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            QuizError::CheckFailed(_) | QuizError::ContentUnavailable(_)
        )
    }
}

impl From<ValidationError> for QuizError {
    fn from(err: ValidationError) -> Self {
        QuizError::InvalidState(err.to_string())
    }
}
