//! Localization handlers.

mod lookup_translation;

pub use lookup_translation::{LookupTranslationHandler, LookupTranslationQuery, TranslationView};
