//! Language-keyed question sets, built once at startup.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::foundation::Language;

use super::QuestionSet;

/// Immutable map from language to question set.
///
/// The default language always has a set, so lookups never fail: any language
/// without its own set is served the default one.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    sets: HashMap<Language, Arc<QuestionSet>>,
}

impl QuestionCatalog {
    /// Creates a catalog holding only the default language's set.
    pub fn new(default_set: QuestionSet) -> Self {
        let mut sets = HashMap::new();
        sets.insert(Language::DEFAULT, Arc::new(default_set));
        Self { sets }
    }

    /// Builder-style insert.
    pub fn with_language(mut self, language: Language, set: QuestionSet) -> Self {
        self.insert(language, set);
        self
    }

    pub fn insert(&mut self, language: Language, set: QuestionSet) {
        self.sets.insert(language, Arc::new(set));
    }

    /// Returns the set for `language`, or the default language's set.
    pub fn questions(&self, language: Language) -> Arc<QuestionSet> {
        match self.sets.get(&language) {
            Some(set) => set.clone(),
            None => self.default_set(),
        }
    }

    /// Returns true when `language` has its own set rather than the fallback.
    pub fn has_language(&self, language: Language) -> bool {
        self.sets.contains_key(&language)
    }

    /// Languages with their own set, in [`Language::ALL`] order.
    pub fn languages(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|l| self.sets.contains_key(l))
            .collect()
    }

    fn default_set(&self) -> Arc<QuestionSet> {
        self.sets
            .get(&Language::DEFAULT)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quiz::Question;

    fn set_of(answers: &[&str]) -> QuestionSet {
        QuestionSet::new(
            answers
                .iter()
                .map(|a| Question::new(format!("Q{}", a), [*a, "other"], *a))
                .collect(),
        )
    }

    #[test]
    fn returns_requested_language_when_present() {
        let catalog = QuestionCatalog::new(set_of(&["A"])).with_language(Language::Ru, set_of(&["B", "C"]));
        assert_eq!(catalog.questions(Language::Ru).len(), 2);
    }

    #[test]
    fn falls_back_to_default_language() {
        let catalog = QuestionCatalog::new(set_of(&["A"]));
        assert!(!catalog.has_language(Language::Tr));
        assert_eq!(catalog.questions(Language::Tr), catalog.questions(Language::En));
    }

    #[test]
    fn languages_lists_loaded_sets_in_canonical_order() {
        let catalog = QuestionCatalog::new(set_of(&["A"]))
            .with_language(Language::Tr, set_of(&["A"]))
            .with_language(Language::Ru, set_of(&["A"]));
        assert_eq!(
            catalog.languages(),
            vec![Language::En, Language::Ru, Language::Tr]
        );
    }
}
