//! Remote adapters - talk to a quiz server over HTTP.

mod http_quiz_client;

pub use http_quiz_client::HttpQuizClient;
