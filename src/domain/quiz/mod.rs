//! Quiz module - questions, answer checking and the session state machine.
//!
//! # Module Organization
//!
//! - `question` - Question and QuestionSet value objects
//! - `catalog` - Language-keyed question sets with default-language fallback
//! - `checker` - Pure answer checking and verdicts
//! - `phase` - Session lifecycle phases
//! - `session` - Session aggregate with at-most-once submission
//! - `result` - Final score summary

mod catalog;
mod checker;
mod errors;
mod phase;
mod question;
mod result;
mod session;

pub use catalog::QuestionCatalog;
pub use checker::{AnswerChecker, AnswerVerdict, CORRECT_EXPLANATION};
pub use errors::QuizError;
pub use phase::QuizPhase;
pub use question::{Question, QuestionSet};
pub use result::{Grade, QuizResult};
pub use session::{PendingSubmission, QuizContent, QuizSession, SessionSnapshot, SubmitOutcome};
