//! Content Loader
//!
//! Reads question sets and translation trees from JSON files on disk.
//!
//! ## Layout
//!
//! ```text
//! {root}/quiz/{code}.json          array of { question, options, answer }
//! {root}/translations/{code}.json  nested object of strings
//! ```
//!
//! The default language's files are required. A missing or malformed file for
//! any other language is logged and that language falls back to the default.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::fs;

use crate::domain::foundation::Language;
use crate::domain::localization::TranslationCatalog;
use crate::domain::quiz::{QuestionCatalog, QuestionSet};
use crate::ports::ContentError;

/// Loads static quiz content from a directory.
#[derive(Debug, Clone)]
pub struct ContentLoader {
    root: PathBuf,
}

impl ContentLoader {
    /// Create a loader rooted at `root`.
    ///
    /// # Example
    /// ```ignore
    /// let loader = ContentLoader::new("./content");
    /// let questions = loader.load_questions().await?;
    /// ```
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn question_file(&self, language: Language) -> PathBuf {
        self.root
            .join("quiz")
            .join(format!("{}.json", language.code()))
    }

    fn translation_file(&self, language: Language) -> PathBuf {
        self.root
            .join("translations")
            .join(format!("{}.json", language.code()))
    }

    /// Load every language's question set.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` only when the default language's set is missing,
    /// malformed or empty.
    pub async fn load_questions(&self) -> Result<QuestionCatalog, ContentError> {
        let default_set = self.read_question_set(Language::DEFAULT).await?;
        if default_set.is_empty() {
            return Err(ContentError::Invalid(format!(
                "default question set '{}' is empty",
                Language::DEFAULT
            )));
        }
        let default_len = default_set.len();
        tracing::info!(language = %Language::DEFAULT, questions = default_len, "Loaded question set");

        let mut catalog = QuestionCatalog::new(default_set);
        for language in Language::ALL.into_iter().filter(|l| !l.is_default()) {
            match self.read_question_set(language).await {
                Ok(set) if set.is_empty() => {
                    tracing::warn!(
                        language = %language,
                        "Question set is empty, falling back to default language"
                    );
                }
                Ok(set) => {
                    if set.len() != default_len {
                        tracing::info!(
                            language = %language,
                            questions = set.len(),
                            default_questions = default_len,
                            "Question set length differs from default language"
                        );
                    }
                    tracing::info!(language = %language, questions = set.len(), "Loaded question set");
                    catalog.insert(language, set);
                }
                Err(e) => {
                    tracing::warn!(
                        language = %language,
                        error = %e,
                        "Question set unavailable, falling back to default language"
                    );
                }
            }
        }

        Ok(catalog)
    }

    /// Load every language's translation tree.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` only when the default language's tree is missing
    /// or malformed.
    pub async fn load_translations(&self) -> Result<TranslationCatalog, ContentError> {
        let default_tree = self.read_translations(Language::DEFAULT).await?;
        let mut catalog = TranslationCatalog::new(default_tree);

        for language in Language::ALL.into_iter().filter(|l| !l.is_default()) {
            match self.read_translations(language).await {
                Ok(tree) => catalog.insert(language, tree),
                Err(e) => {
                    tracing::warn!(
                        language = %language,
                        error = %e,
                        "Translations unavailable, falling back to default language"
                    );
                }
            }
        }

        Ok(catalog)
    }

    async fn read_question_set(&self, language: Language) -> Result<QuestionSet, ContentError> {
        let path = self.question_file(language);
        let raw = read_file(&path).await?;
        let set: QuestionSet = serde_json::from_str(&raw)
            .map_err(|e| ContentError::parse(path.display().to_string(), e))?;

        for (index, error) in set.validate() {
            tracing::warn!(
                language = %language,
                question_index = index,
                error = %error,
                "Question failed validation"
            );
        }

        Ok(set)
    }

    async fn read_translations(&self, language: Language) -> Result<Value, ContentError> {
        let path = self.translation_file(language);
        let raw = read_file(&path).await?;
        let tree: Value = serde_json::from_str(&raw)
            .map_err(|e| ContentError::parse(path.display().to_string(), e))?;

        if !tree.is_object() {
            return Err(ContentError::Invalid(format!(
                "{} must contain a JSON object",
                path.display()
            )));
        }
        Ok(tree)
    }
}

async fn read_file(path: &Path) -> Result<String, ContentError> {
    fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ContentError::NotFound(path.display().to_string())
        } else {
            ContentError::io(path.display().to_string(), e)
        }
    })
}
