//! Localization module - UI string lookup by language and dotted key.

mod catalog;

pub use catalog::TranslationCatalog;
