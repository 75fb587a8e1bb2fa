//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `QuestionRepository` - Question sets by language
//! - `AnswerService` - Answer checking, local or remote
//! - `LanguagePreferenceStore` - The persisted language choice

mod answer_service;
mod language_preference;
mod question_repository;

pub use answer_service::{AnswerService, CheckError};
pub use language_preference::{LanguagePreferenceStore, PreferenceError, LANGUAGE_PREFERENCE_KEY};
pub use question_repository::{ContentError, QuestionRepository};
