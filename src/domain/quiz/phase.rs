//! QuizPhase enum for the lifecycle of a quiz session.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle phase of a quiz session.
///
/// `NotStarted -> InProgress -> Complete`, and any phase back to `NotStarted`
/// on restart. A complete quiz never re-enters `InProgress` directly; starting
/// again always resets through `NotStarted` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    #[default]
    NotStarted,
    InProgress,
    Complete,
}

impl QuizPhase {
    /// Returns true once the quiz has been started (in progress or complete).
    pub fn is_started(&self) -> bool {
        !matches!(self, QuizPhase::NotStarted)
    }

    /// Returns true if answers are accepted in this phase.
    pub fn accepts_answers(&self) -> bool {
        matches!(self, QuizPhase::InProgress)
    }
}

impl StateMachine for QuizPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use QuizPhase::*;
        matches!(
            (self, target),
            (NotStarted, InProgress)
                | (InProgress, Complete)
                | (InProgress, NotStarted)
                | (Complete, NotStarted)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use QuizPhase::*;
        match self {
            NotStarted => vec![InProgress],
            InProgress => vec![Complete, NotStarted],
            Complete => vec![NotStarted],
        }
    }
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuizPhase::NotStarted => "Not Started",
            QuizPhase::InProgress => "In Progress",
            QuizPhase::Complete => "Complete",
        };
        write!(f, "{}", s)
    }
}
