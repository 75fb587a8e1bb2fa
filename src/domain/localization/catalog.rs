//! Translation catalog - dotted-key lookup over nested string maps.

use std::collections::HashMap;

use serde_json::Value;

use crate::domain::foundation::Language;

static EMPTY: Value = Value::Null;

/// Immutable per-language translation trees.
///
/// Missing translations are never an error: an unknown language reads the
/// default language's tree, and an unresolvable key comes back verbatim so
/// the gap is visible in the UI.
#[derive(Debug, Clone)]
pub struct TranslationCatalog {
    mappings: HashMap<Language, Value>,
}

impl TranslationCatalog {
    /// Creates a catalog holding only the default language's tree.
    pub fn new(default_mapping: Value) -> Self {
        let mut mappings = HashMap::new();
        mappings.insert(Language::DEFAULT, default_mapping);
        Self { mappings }
    }

    /// Builder-style insert.
    pub fn with_language(mut self, language: Language, mapping: Value) -> Self {
        self.insert(language, mapping);
        self
    }

    pub fn insert(&mut self, language: Language, mapping: Value) {
        self.mappings.insert(language, mapping);
    }

    /// Resolves `dotted_key` (e.g. `home.hero.title`) for `language`.
    ///
    /// Returns `dotted_key` itself when any segment is missing or the value at
    /// the end of the path is not a string.
    pub fn lookup(&self, language: Language, dotted_key: &str) -> String {
        match resolve_path(self.mapping(language), dotted_key) {
            Some(value) => value.to_string(),
            None => {
                tracing::trace!(language = %language, key = dotted_key, "Missing translation");
                dotted_key.to_string()
            }
        }
    }

    /// Whole tree for `language`, falling back to the default language.
    pub fn mapping(&self, language: Language) -> &Value {
        self.mappings
            .get(&language)
            .or_else(|| self.mappings.get(&Language::DEFAULT))
            .unwrap_or(&EMPTY)
    }

    pub fn has_language(&self, language: Language) -> bool {
        self.mappings.contains_key(&language)
    }

    /// Languages with their own tree, in [`Language::ALL`] order.
    pub fn languages(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|l| self.mappings.contains_key(l))
            .collect()
    }
}

fn resolve_path<'a>(root: &'a Value, dotted_key: &str) -> Option<&'a str> {
    dotted_key
        .split('.')
        .try_fold(root, |node, segment| node.as_object()?.get(segment))?
        .as_str()
}
