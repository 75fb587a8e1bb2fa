//! Content Adapters
//!
//! Loading of static quiz content and the in-process implementations of the
//! content ports.
//!
//! ## Available Adapters
//!
//! - **ContentLoader** - Reads question and translation JSON files at startup
//! - **LocalQuestionRepository** - Serves the loaded question catalog
//! - **LocalAnswerService** - Checks answers against the loaded catalog
//!
//! ## Usage
//!
//! ```ignore
//! let loader = ContentLoader::new("./content");
//! let catalog = Arc::new(loader.load_questions().await?);
//! let repository = LocalQuestionRepository::new(catalog.clone());
//! let answers = LocalAnswerService::new(AnswerChecker::new(catalog));
//! ```

mod loader;
mod local_answer_service;
mod local_question_repository;

pub use loader::ContentLoader;
pub use local_answer_service::LocalAnswerService;
pub use local_question_repository::LocalQuestionRepository;
