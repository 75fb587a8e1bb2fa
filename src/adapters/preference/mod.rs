//! Language Preference Adapters
//!
//! Implementations of the LanguagePreferenceStore port.
//!
//! - **FileLanguageStore** - JSON file on disk
//! - **InMemoryLanguageStore** - In-memory map (testing/development)

mod file;
mod in_memory;

pub use file::FileLanguageStore;
pub use in_memory::InMemoryLanguageStore;
