//! Foundation module - Shared domain primitives.
//!
//! Contains the language vocabulary, the state machine trait and error types
//! shared by the quiz and localization modules.

mod errors;
mod language;
mod state_machine;

pub use errors::{ErrorCode, ValidationError};
pub use language::Language;
pub use state_machine::StateMachine;
