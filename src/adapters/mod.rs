//! Adapters - Implementations of port interfaces.
//!
//! - `content` - Question and translation files on disk
//! - `http` - REST API (axum)
//! - `preference` - Language preference storage
//! - `remote` - Client for a remote quiz server

pub mod content;
pub mod http;
pub mod preference;
pub mod remote;

pub use content::{ContentLoader, LocalAnswerService, LocalQuestionRepository};
pub use preference::{FileLanguageStore, InMemoryLanguageStore};
pub use remote::HttpQuizClient;
