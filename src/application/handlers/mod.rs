//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod localization;
pub mod quiz;

pub use localization::{LookupTranslationHandler, LookupTranslationQuery, TranslationView};
pub use quiz::{
    CheckAnswerCommand, CheckAnswerHandler, GetQuestionsHandler, GetQuestionsQuery,
    QuizController, SubmissionReport,
};
