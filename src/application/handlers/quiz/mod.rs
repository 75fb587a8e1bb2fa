//! Quiz handlers.
//!
//! Stateless query/command handlers back the HTTP API. The controller drives
//! a single interactive session through the ports.

mod check_answer;
mod controller;
mod get_questions;

pub use check_answer::{CheckAnswerCommand, CheckAnswerHandler};
pub use controller::{QuizController, SubmissionReport};
pub use get_questions::{GetQuestionsHandler, GetQuestionsQuery};
