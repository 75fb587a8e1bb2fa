//! QuizController - Drives one quiz session through the ports.
//!
//! The controller owns the session behind an async mutex. Answer checks run
//! through the [`AnswerService`] port with the lock released, so a restart or
//! language change can land while a check is in flight; the session's
//! generation counter then marks the late verdict as stale.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::foundation::Language;
use crate::domain::quiz::{
    AnswerVerdict, QuizContent, QuizError, QuizSession, SessionSnapshot, SubmitOutcome,
};
use crate::ports::{AnswerService, LanguagePreferenceStore, QuestionRepository};

/// Outcome of a submission together with the session it produced.
#[derive(Debug, Clone)]
pub struct SubmissionReport {
    pub outcome: SubmitOutcome,
    /// Present when the answer service returned a verdict.
    pub verdict: Option<AnswerVerdict>,
    pub session: SessionSnapshot,
}

/// Coordinates a [`QuizSession`] with content, checking, and preference ports.
pub struct QuizController {
    session: Mutex<QuizSession>,
    questions: Arc<dyn QuestionRepository>,
    answers: Arc<dyn AnswerService>,
    preferences: Arc<dyn LanguagePreferenceStore>,
    /// Bumped by every `change_language` call; only the latest may install.
    language_changes: AtomicU64,
}

impl QuizController {
    /// Build a controller around an existing session.
    pub fn new(
        session: QuizSession,
        questions: Arc<dyn QuestionRepository>,
        answers: Arc<dyn AnswerService>,
        preferences: Arc<dyn LanguagePreferenceStore>,
    ) -> Self {
        Self {
            session: Mutex::new(session),
            questions,
            answers,
            preferences,
            language_changes: AtomicU64::new(0),
        }
    }

    /// Restore the saved language (default if absent or unreadable) and load
    /// its questions. A failed load yields an unavailable session, not an error.
    pub async fn initialize(
        questions: Arc<dyn QuestionRepository>,
        answers: Arc<dyn AnswerService>,
        preferences: Arc<dyn LanguagePreferenceStore>,
    ) -> Self {
        let language = match preferences.load().await {
            Ok(Some(language)) => language,
            Ok(None) => Language::DEFAULT,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read language preference, using default");
                Language::DEFAULT
            }
        };

        let content = load_content(questions.as_ref(), language).await;
        let session = QuizSession::with_content(language, content);
        tracing::info!(
            language = %language,
            available = session.is_available(),
            "Quiz session initialized"
        );

        Self::new(session, questions, answers, preferences)
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.lock().await.snapshot()
    }

    pub async fn language(&self) -> Language {
        self.session.lock().await.language()
    }

    /// Retry loading the current language's questions. Resets the session.
    pub async fn reload(&self) -> SessionSnapshot {
        let language = self.language().await;
        let content = load_content(self.questions.as_ref(), language).await;

        let mut session = self.session.lock().await;
        // A language change during the load already installed fresher content.
        if session.language() == language {
            session.reload(content);
        }
        session.snapshot()
    }

    /// # Errors
    ///
    /// - `ContentUnavailable` if no question set is loaded
    pub async fn start(&self) -> Result<SessionSnapshot, QuizError> {
        let mut session = self.session.lock().await;
        session.start()?;
        Ok(session.snapshot())
    }

    pub async fn restart(&self) -> SessionSnapshot {
        let mut session = self.session.lock().await;
        session.restart();
        session.snapshot()
    }

    /// Submit an answer for the current question.
    ///
    /// # Errors
    ///
    /// - `ContentUnavailable`, `NotStarted`, `SubmissionInFlight` from the session
    /// - `CheckFailed` if the answer service failed; the question stays
    ///   current and may be answered again
    pub async fn submit(&self, answer: &str) -> Result<SubmissionReport, QuizError> {
        let ticket = {
            let mut session = self.session.lock().await;
            match session.begin_submission(answer)? {
                Some(ticket) => ticket,
                None => {
                    return Ok(SubmissionReport {
                        outcome: SubmitOutcome::Ignored,
                        verdict: None,
                        session: session.snapshot(),
                    })
                }
            }
        };

        let index = i64::try_from(ticket.question_index()).unwrap_or(i64::MAX);
        let checked = self
            .answers
            .check_answer(ticket.language(), index, ticket.answer())
            .await;

        let mut session = self.session.lock().await;
        let verdict = match checked {
            Ok(verdict) => verdict,
            Err(e) => {
                session.abandon_submission(&ticket);
                tracing::warn!(
                    error = %e,
                    question_index = ticket.question_index(),
                    "Answer check failed"
                );
                return Err(QuizError::check_failed(e.to_string()));
            }
        };

        let outcome = match session.apply_verdict(&ticket, verdict.is_correct) {
            Ok(outcome) => outcome,
            Err(e) => {
                session.abandon_submission(&ticket);
                return Err(e);
            }
        };

        Ok(SubmissionReport {
            outcome,
            verdict: Some(verdict),
            session: session.snapshot(),
        })
    }

    /// Switch language, persist the choice, and restart on the new question set.
    ///
    /// When calls overlap, only the most recent one installs its content and
    /// saves the preference; earlier ones return the current snapshot untouched.
    /// Persistence failures are logged and do not block the switch.
    pub async fn change_language(&self, language: Language) -> SessionSnapshot {
        let ticket = self.language_changes.fetch_add(1, Ordering::SeqCst) + 1;
        let content = load_content(self.questions.as_ref(), language).await;

        let mut session = self.session.lock().await;
        if self.language_changes.load(Ordering::SeqCst) != ticket {
            tracing::debug!(language = %language, "Discarding superseded language change");
            return session.snapshot();
        }

        if let Err(e) = self.preferences.save(language).await {
            tracing::warn!(error = %e, language = %language, "Failed to save language preference");
        }

        session.change_language(language, content);
        session.snapshot()
    }
}

async fn load_content(questions: &dyn QuestionRepository, language: Language) -> QuizContent {
    match questions.questions(language).await {
        Ok(set) => QuizContent::from_set(set),
        Err(e) => {
            tracing::error!(error = %e, language = %language, "Failed to load questions");
            QuizContent::unavailable(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::preference::InMemoryLanguageStore;
    use crate::domain::quiz::{Question, QuestionSet, QuizPhase};
    use crate::ports::{CheckError, ContentError, PreferenceError};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::Semaphore;

    fn english() -> QuestionSet {
        QuestionSet::new(vec![
            Question::new("Q1", ["A", "B"], "A"),
            Question::new("Q2", ["A", "B"], "B"),
            Question::new("Q3", ["A", "B"], "A"),
        ])
    }

    fn russian() -> QuestionSet {
        QuestionSet::new(vec![Question::new("В1", ["Да", "Нет"], "Да")])
    }

    struct MockQuestionRepository {
        sets: HashMap<Language, Arc<QuestionSet>>,
        fail: AtomicBool,
    }

    impl MockQuestionRepository {
        fn new() -> Self {
            let mut sets = HashMap::new();
            sets.insert(Language::En, Arc::new(english()));
            sets.insert(Language::Ru, Arc::new(russian()));
            Self {
                sets,
                fail: AtomicBool::new(false),
            }
        }

        fn failing() -> Self {
            let repo = Self::new();
            repo.fail.store(true, Ordering::SeqCst);
            repo
        }
    }

    #[async_trait]
    impl QuestionRepository for MockQuestionRepository {
        async fn questions(&self, language: Language) -> Result<Arc<QuestionSet>, ContentError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(ContentError::Transport("connection refused".to_string()));
            }
            self.sets
                .get(&language)
                .or_else(|| self.sets.get(&Language::En))
                .cloned()
                .ok_or_else(|| ContentError::NotFound(language.code().to_string()))
        }
    }

    /// Holds loads of one language until released; other languages pass through.
    struct SlowLanguageRepository {
        inner: MockQuestionRepository,
        slow: Language,
        gate: Arc<Semaphore>,
        slow_requested: AtomicBool,
    }

    #[async_trait]
    impl QuestionRepository for SlowLanguageRepository {
        async fn questions(&self, language: Language) -> Result<Arc<QuestionSet>, ContentError> {
            if language == self.slow {
                self.slow_requested.store(true, Ordering::SeqCst);
                self.gate.acquire().await.unwrap().forget();
            }
            self.inner.questions(language).await
        }
    }

    /// Checks against the mock sets; optionally holds each check until released.
    struct MockAnswerService {
        sets: HashMap<Language, Arc<QuestionSet>>,
        gate: Option<Arc<Semaphore>>,
        fail: AtomicBool,
    }

    impl MockAnswerService {
        fn new() -> Self {
            Self {
                sets: MockQuestionRepository::new().sets,
                gate: None,
                fail: AtomicBool::new(false),
            }
        }

        fn gated(gate: Arc<Semaphore>) -> Self {
            Self {
                gate: Some(gate),
                ..Self::new()
            }
        }
    }

    #[async_trait]
    impl AnswerService for MockAnswerService {
        async fn check_answer(
            &self,
            language: Language,
            question_index: i64,
            answer: &str,
        ) -> Result<AnswerVerdict, CheckError> {
            if let Some(gate) = &self.gate {
                gate.acquire().await.unwrap().forget();
            }
            if self.fail.load(Ordering::SeqCst) {
                return Err(CheckError::Transport("timed out".to_string()));
            }
            let question = self
                .sets
                .get(&language)
                .and_then(|set| set.at(question_index))
                .ok_or(CheckError::InvalidQuestionIndex)?;
            Ok(AnswerVerdict::for_answer(question, answer))
        }
    }

    struct BrokenPreferenceStore;

    #[async_trait]
    impl LanguagePreferenceStore for BrokenPreferenceStore {
        async fn load(&self) -> Result<Option<Language>, PreferenceError> {
            Err(PreferenceError::Io("permission denied".to_string()))
        }

        async fn save(&self, _language: Language) -> Result<(), PreferenceError> {
            Err(PreferenceError::Io("permission denied".to_string()))
        }
    }

    async fn controller_with(
        answers: MockAnswerService,
        preferences: Arc<dyn LanguagePreferenceStore>,
    ) -> QuizController {
        QuizController::initialize(
            Arc::new(MockQuestionRepository::new()),
            Arc::new(answers),
            preferences,
        )
        .await
    }

    async fn controller() -> QuizController {
        controller_with(MockAnswerService::new(), Arc::new(InMemoryLanguageStore::new())).await
    }

    async fn wait_for_pending(controller: &QuizController) {
        while !controller.snapshot().await.awaiting_check {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn initialize_uses_default_language_without_preference() {
        let snapshot = controller().await.snapshot().await;
        assert_eq!(snapshot.language, Language::En);
        assert_eq!(snapshot.total_questions, 3);
        assert!(!snapshot.started);
        assert!(snapshot.error.is_none());
    }

    #[tokio::test]
    async fn initialize_restores_saved_language() {
        let prefs = Arc::new(InMemoryLanguageStore::new());
        prefs.save(Language::Ru).await.unwrap();

        let controller = controller_with(MockAnswerService::new(), prefs).await;

        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.language, Language::Ru);
        assert_eq!(snapshot.total_questions, 1);
    }

    #[tokio::test]
    async fn initialize_survives_unreadable_preference() {
        let controller =
            controller_with(MockAnswerService::new(), Arc::new(BrokenPreferenceStore)).await;
        assert_eq!(controller.language().await, Language::En);
    }

    #[tokio::test]
    async fn full_run_scores_and_completes() {
        let controller = controller().await;
        controller.start().await.unwrap();

        let first = controller.submit("A").await.unwrap();
        assert_eq!(
            first.outcome,
            SubmitOutcome::Accepted { is_correct: true, completed: false }
        );
        controller.submit("A").await.unwrap();
        let last = controller.submit("A").await.unwrap();

        assert_eq!(
            last.outcome,
            SubmitOutcome::Accepted { is_correct: true, completed: true }
        );
        assert_eq!(last.session.score, 2);
        assert_eq!(last.session.phase, QuizPhase::Complete);
        assert_eq!(last.session.submitted_answers, vec!["A", "A", "A"]);
        assert_eq!(last.session.result.unwrap().percentage, 67);
        assert_eq!(
            last.verdict.unwrap().explanation,
            crate::domain::quiz::CORRECT_EXPLANATION
        );
    }

    #[tokio::test]
    async fn submit_after_completion_is_ignored() {
        let controller = controller().await;
        controller.start().await.unwrap();
        for _ in 0..3 {
            controller.submit("A").await.unwrap();
        }

        let report = controller.submit("B").await.unwrap();

        assert_eq!(report.outcome, SubmitOutcome::Ignored);
        assert!(report.verdict.is_none());
        assert_eq!(report.session.score, 2);
        assert_eq!(report.session.submitted_answers.len(), 3);
    }

    #[tokio::test]
    async fn submit_before_start_fails() {
        let err = controller().await.submit("A").await.unwrap_err();
        assert_eq!(err, QuizError::NotStarted);
    }

    #[tokio::test]
    async fn failed_check_leaves_question_answerable() {
        let answers = MockAnswerService::new();
        answers.fail.store(true, Ordering::SeqCst);
        let controller = QuizController::initialize(
            Arc::new(MockQuestionRepository::new()),
            Arc::new(answers),
            Arc::new(InMemoryLanguageStore::new()),
        )
        .await;
        controller.start().await.unwrap();

        let err = controller.submit("A").await.unwrap_err();

        assert!(matches!(err, QuizError::CheckFailed(_)));
        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.current_index, 0);
        assert_eq!(snapshot.score, 0);
        assert!(!snapshot.awaiting_check);
        assert!(snapshot.submitted_answers.is_empty());
    }

    #[tokio::test]
    async fn second_submission_while_checking_is_rejected() {
        let gate = Arc::new(Semaphore::new(0));
        let controller = Arc::new(
            controller_with(
                MockAnswerService::gated(gate.clone()),
                Arc::new(InMemoryLanguageStore::new()),
            )
            .await,
        );
        controller.start().await.unwrap();

        let first = tokio::spawn({
            let controller = controller.clone();
            async move { controller.submit("A").await }
        });
        wait_for_pending(&controller).await;

        let err = controller.submit("B").await.unwrap_err();
        assert!(matches!(err, QuizError::SubmissionInFlight { index: 0 }));

        gate.add_permits(1);
        let report = first.await.unwrap().unwrap();
        assert_eq!(report.session.submitted_answers, vec!["A"]);
        assert_eq!(report.session.current_index, 1);
    }

    #[tokio::test]
    async fn verdict_arriving_after_restart_is_stale() {
        let gate = Arc::new(Semaphore::new(0));
        let controller = Arc::new(
            controller_with(
                MockAnswerService::gated(gate.clone()),
                Arc::new(InMemoryLanguageStore::new()),
            )
            .await,
        );
        controller.start().await.unwrap();

        let pending = tokio::spawn({
            let controller = controller.clone();
            async move { controller.submit("A").await }
        });
        wait_for_pending(&controller).await;

        controller.restart().await;
        gate.add_permits(1);
        let report = pending.await.unwrap().unwrap();

        assert_eq!(report.outcome, SubmitOutcome::Stale);
        assert_eq!(report.session.score, 0);
        assert_eq!(report.session.current_index, 0);
        assert!(!report.session.started);
        assert!(report.session.submitted_answers.is_empty());
    }

    #[tokio::test]
    async fn verdict_arriving_after_language_change_is_stale() {
        let gate = Arc::new(Semaphore::new(0));
        let controller = Arc::new(
            controller_with(
                MockAnswerService::gated(gate.clone()),
                Arc::new(InMemoryLanguageStore::new()),
            )
            .await,
        );
        controller.start().await.unwrap();

        let pending = tokio::spawn({
            let controller = controller.clone();
            async move { controller.submit("A").await }
        });
        wait_for_pending(&controller).await;

        controller.change_language(Language::Ru).await;
        gate.add_permits(1);
        let report = pending.await.unwrap().unwrap();

        assert_eq!(report.outcome, SubmitOutcome::Stale);
        assert_eq!(report.session.language, Language::Ru);
        assert_eq!(report.session.score, 0);
    }

    #[tokio::test]
    async fn change_language_restarts_and_persists() {
        let prefs = Arc::new(InMemoryLanguageStore::new());
        let controller = controller_with(MockAnswerService::new(), prefs.clone()).await;
        controller.start().await.unwrap();
        controller.submit("A").await.unwrap();

        let snapshot = controller.change_language(Language::Ru).await;

        assert_eq!(snapshot.language, Language::Ru);
        assert_eq!(snapshot.phase, QuizPhase::NotStarted);
        assert_eq!(snapshot.current_index, 0);
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.total_questions, 1);
        assert_eq!(prefs.load().await.unwrap(), Some(Language::Ru));
    }

    #[tokio::test]
    async fn change_language_ignores_preference_write_failure() {
        let controller =
            controller_with(MockAnswerService::new(), Arc::new(BrokenPreferenceStore)).await;
        let snapshot = controller.change_language(Language::Ru).await;
        assert_eq!(snapshot.language, Language::Ru);
    }

    #[tokio::test]
    async fn load_failure_makes_session_unavailable_until_reload() {
        let repo = Arc::new(MockQuestionRepository::failing());
        let controller = QuizController::initialize(
            repo.clone(),
            Arc::new(MockAnswerService::new()),
            Arc::new(InMemoryLanguageStore::new()),
        )
        .await;

        let snapshot = controller.snapshot().await;
        assert!(snapshot.error.is_some());
        assert_eq!(snapshot.total_questions, 0);
        assert!(matches!(
            controller.start().await.unwrap_err(),
            QuizError::ContentUnavailable(_)
        ));

        repo.fail.store(false, Ordering::SeqCst);
        let snapshot = controller.reload().await;
        assert!(snapshot.error.is_none());
        assert_eq!(snapshot.total_questions, 3);
        controller.start().await.unwrap();
    }

    #[tokio::test]
    async fn slower_earlier_language_change_does_not_override_later_one() {
        let gate = Arc::new(Semaphore::new(0));
        let repo = Arc::new(SlowLanguageRepository {
            inner: MockQuestionRepository::new(),
            slow: Language::Ru,
            gate: gate.clone(),
            slow_requested: AtomicBool::new(false),
        });
        let prefs = Arc::new(InMemoryLanguageStore::new());
        let controller = Arc::new(
            QuizController::initialize(
                repo.clone(),
                Arc::new(MockAnswerService::new()),
                prefs.clone(),
            )
            .await,
        );

        let slow = tokio::spawn({
            let controller = controller.clone();
            async move { controller.change_language(Language::Ru).await }
        });
        while !repo.slow_requested.load(Ordering::SeqCst) {
            tokio::task::yield_now().await;
        }

        let latest = controller.change_language(Language::Tr).await;
        assert_eq!(latest.language, Language::Tr);

        gate.add_permits(1);
        let superseded = slow.await.unwrap();

        assert_eq!(superseded.language, Language::Tr);
        assert_eq!(controller.language().await, Language::Tr);
        assert_eq!(prefs.load().await.unwrap(), Some(Language::Tr));
    }
}
