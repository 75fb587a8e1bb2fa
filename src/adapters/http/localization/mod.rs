//! Localization HTTP adapter - translation lookups.

mod dto;
mod handlers;
mod routes;

pub use dto::{TranslationParams, TranslationResponse, TranslationsResponse};
pub use handlers::{get_translations, lookup_translation, LocalizationAppState};
pub use routes::localization_routes;
