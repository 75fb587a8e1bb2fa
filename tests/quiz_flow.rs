//! Quiz sessions driven through the controller with in-process adapters.

use std::path::Path;
use std::sync::Arc;

use protocol_quiz::adapters::content::{ContentLoader, LocalAnswerService, LocalQuestionRepository};
use protocol_quiz::adapters::preference::FileLanguageStore;
use protocol_quiz::application::QuizController;
use protocol_quiz::domain::foundation::Language;
use protocol_quiz::domain::quiz::{AnswerChecker, Grade, QuestionCatalog, QuizPhase, SubmitOutcome};
use tempfile::TempDir;

async fn catalog() -> Arc<QuestionCatalog> {
    let loader = ContentLoader::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("content"));
    Arc::new(loader.load_questions().await.unwrap())
}

async fn controller(catalog: Arc<QuestionCatalog>, prefs: &Path) -> QuizController {
    QuizController::initialize(
        Arc::new(LocalQuestionRepository::new(catalog.clone())),
        Arc::new(LocalAnswerService::new(AnswerChecker::new(catalog))),
        Arc::new(FileLanguageStore::new(prefs)),
    )
    .await
}

#[tokio::test]
async fn perfect_run_in_english() {
    let dir = TempDir::new().unwrap();
    let catalog = catalog().await;
    let controller = controller(catalog.clone(), &dir.path().join("prefs.json")).await;
    let questions = catalog.questions(Language::En);

    controller.start().await.unwrap();
    for question in questions.questions() {
        let report = controller.submit(&question.answer).await.unwrap();
        assert!(matches!(report.outcome, SubmitOutcome::Accepted { is_correct: true, .. }));
    }

    let snapshot = controller.snapshot().await;
    assert_eq!(snapshot.phase, QuizPhase::Complete);
    assert_eq!(snapshot.current_index, questions.len() - 1);
    assert_eq!(snapshot.score, questions.len());
    let result = snapshot.result.unwrap();
    assert_eq!(result.percentage, 100);
    assert_eq!(result.grade, Grade::Perfect);
}

#[tokio::test]
async fn wrong_answers_lower_the_score() {
    let dir = TempDir::new().unwrap();
    let catalog = catalog().await;
    let controller = controller(catalog.clone(), &dir.path().join("prefs.json")).await;
    let total = catalog.questions(Language::En).len();

    controller.start().await.unwrap();
    for _ in 0..total {
        controller.submit("definitely not an option").await.unwrap();
    }

    let snapshot = controller.snapshot().await;
    assert!(snapshot.complete);
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.submitted_answers.len(), total);
    assert_eq!(snapshot.result.unwrap().grade, Grade::KeepLearning);
}

#[tokio::test]
async fn language_choice_survives_a_new_controller() {
    let dir = TempDir::new().unwrap();
    let prefs = dir.path().join("prefs.json");
    let catalog = catalog().await;

    let first = controller(catalog.clone(), &prefs).await;
    first.start().await.unwrap();
    let snapshot = first.change_language(Language::Cn).await;
    assert_eq!(snapshot.language, Language::Cn);
    assert!(!snapshot.started);

    let second = controller(catalog.clone(), &prefs).await;
    let snapshot = second.snapshot().await;
    assert_eq!(snapshot.language, Language::Cn);
    assert_eq!(snapshot.total_questions, catalog.questions(Language::Cn).len());
    assert!(snapshot.current_question.is_none());

    let snapshot = second.start().await.unwrap();
    assert_eq!(
        snapshot.current_question.unwrap(),
        catalog.questions(Language::Cn).questions()[0]
    );
}

#[tokio::test]
async fn restart_clears_progress() {
    let dir = TempDir::new().unwrap();
    let controller = controller(catalog().await, &dir.path().join("prefs.json")).await;

    controller.start().await.unwrap();
    controller.submit("x").await.unwrap();
    let snapshot = controller.restart().await;

    assert_eq!(snapshot.phase, QuizPhase::NotStarted);
    assert_eq!(snapshot.current_index, 0);
    assert!(snapshot.submitted_answers.is_empty());

    controller.start().await.unwrap();
    assert!(controller.snapshot().await.started);
}
