//! Answer checker - pure correctness lookup over the loaded question sets.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Language;

use super::{Question, QuestionCatalog, QuizError};

/// Confirmation shown when the submitted option is correct.
pub const CORRECT_EXPLANATION: &str = "Correct answer!";

/// Outcome of checking one answer, as returned by `/check-answer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerVerdict {
    pub is_correct: bool,
    pub correct_answer: String,
    pub explanation: String,
}

impl AnswerVerdict {
    /// Builds the verdict for `submitted` against `question`.
    pub fn for_answer(question: &Question, submitted: &str) -> Self {
        let is_correct = question.is_correct(submitted);
        let explanation = if is_correct {
            CORRECT_EXPLANATION.to_string()
        } else {
            format!("Correct answer was: {}", question.answer)
        };
        Self {
            is_correct,
            correct_answer: question.answer.clone(),
            explanation,
        }
    }
}

/// Checks submitted options against the stored correct option.
///
/// Reads only immutable data, so clones can be shared freely across tasks.
#[derive(Debug, Clone)]
pub struct AnswerChecker {
    catalog: Arc<QuestionCatalog>,
}

impl AnswerChecker {
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Arc<QuestionCatalog> {
        &self.catalog
    }

    /// Returns true iff `submitted` equals the correct option of the question at
    /// `question_index`. Out-of-range indices (including negative ones) are a
    /// non-match, never an error.
    pub fn check(&self, language: Language, question_index: i64, submitted: &str) -> bool {
        self.catalog
            .questions(language)
            .at(question_index)
            .is_some_and(|q| q.is_correct(submitted))
    }

    /// Same as [`check`](Self::check) for an already-validated position.
    pub fn check_at(&self, language: Language, question_index: usize, submitted: &str) -> bool {
        self.catalog
            .questions(language)
            .get(question_index)
            .is_some_and(|q| q.is_correct(submitted))
    }

    /// Full verdict with correct option and explanation.
    ///
    /// # Errors
    ///
    /// - `InvalidQuestionIndex` if the index is outside the language's set
    pub fn verdict(
        &self,
        language: Language,
        question_index: i64,
        submitted: &str,
    ) -> Result<AnswerVerdict, QuizError> {
        let questions = self.catalog.questions(language);
        let question = questions
            .at(question_index)
            .ok_or_else(|| QuizError::invalid_question_index(question_index, questions.len()))?;

        let verdict = AnswerVerdict::for_answer(question, submitted);
        tracing::debug!(
            language = %language,
            question_index,
            is_correct = verdict.is_correct,
            "Checked answer"
        );
        Ok(verdict)
    }

    /// Number of questions served for `language`.
    pub fn question_count(&self, language: Language) -> usize {
        self.catalog.questions(language).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quiz::QuestionSet;
    use proptest::prelude::*;

    fn checker() -> AnswerChecker {
        let en = QuestionSet::new(vec![
            Question::new("Q1", ["A", "B", "C"], "A"),
            Question::new("Q2", ["A", "B", "C"], "B"),
            Question::new("Q3", ["A", "B", "C"], "C"),
        ]);
        let ru = QuestionSet::new(vec![Question::new("В1", ["Да", "Нет"], "Нет")]);
        AnswerChecker::new(Arc::new(
            QuestionCatalog::new(en).with_language(Language::Ru, ru),
        ))
    }

    #[test]
    fn stored_answer_is_correct_for_every_question() {
        let checker = checker();
        for language in [Language::En, Language::Ru] {
            let set = checker.catalog().questions(language);
            for (i, q) in set.questions().iter().enumerate() {
                assert!(checker.check(language, i as i64, &q.answer));
            }
        }
    }

    #[test]
    fn comparison_is_case_and_whitespace_sensitive() {
        let checker = checker();
        assert!(!checker.check(Language::En, 0, "a"));
        assert!(!checker.check(Language::En, 0, " A"));
        assert!(!checker.check(Language::En, 0, "A\n"));
    }

    #[test]
    fn out_of_range_index_is_false() {
        let checker = checker();
        assert!(!checker.check(Language::En, -1, "A"));
        assert!(!checker.check(Language::En, 3, "A"));
        assert!(!checker.check(Language::Ru, 1, "Нет"));
        assert!(!checker.check(Language::En, i64::MIN, "A"));
    }

    #[test]
    fn missing_language_behaves_like_english() {
        let checker = checker();
        for i in -1..4 {
            for answer in ["A", "B", "C", "D"] {
                assert_eq!(
                    checker.check(Language::Tr, i, answer),
                    checker.check(Language::En, i, answer)
                );
            }
        }
    }

    #[test]
    fn verdict_explains_incorrect_answer() {
        let verdict = checker().verdict(Language::En, 1, "A").unwrap();
        assert!(!verdict.is_correct);
        assert_eq!(verdict.correct_answer, "B");
        assert_eq!(verdict.explanation, "Correct answer was: B");
    }

    #[test]
    fn verdict_confirms_correct_answer() {
        let verdict = checker().verdict(Language::En, 2, "C").unwrap();
        assert!(verdict.is_correct);
        assert_eq!(verdict.explanation, CORRECT_EXPLANATION);
    }

    #[test]
    fn verdict_rejects_index_equal_to_length() {
        let err = checker().verdict(Language::En, 3, "A").unwrap_err();
        assert_eq!(err, QuizError::invalid_question_index(3, 3));
    }

    #[test]
    fn verdict_serializes_camel_case() {
        let verdict = checker().verdict(Language::En, 0, "A").unwrap();
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["isCorrect"], true);
        assert_eq!(json["correctAnswer"], "A");
    }

    proptest! {
        #[test]
        fn any_other_string_is_incorrect(index in 0i64..3, answer in ".*") {
            let checker = checker();
            let stored = checker.catalog().questions(Language::En).at(index).unwrap().answer.clone();
            prop_assert_eq!(checker.check(Language::En, index, &answer), answer == stored);
        }

        #[test]
        fn check_never_panics_for_any_index(index in any::<i64>(), answer in ".{0,8}") {
            let checker = checker();
            let expected = (0..3).contains(&index) && checker.check_at(Language::En, index as usize, &answer);
            prop_assert_eq!(checker.check(Language::En, index, &answer), expected);
        }
    }
}
