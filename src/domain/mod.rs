//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (language, state machine, errors)
//! - `quiz` - Questions, answer checking and the quiz session state machine
//! - `localization` - Translation lookup with language and key fallbacks

pub mod foundation;
pub mod localization;
pub mod quiz;
