use serde::{Deserialize, Serialize};
use std::fmt;

/// Error codes shared by the core and answer crates.
pub mod codes {
    pub const DATASET_INVALID: &str = "DATASET_INVALID";
    pub const DATASET_READ_FAILED: &str = "DATASET_READ_FAILED";
    pub const ANSWERS_INVALID: &str = "ANSWERS_INVALID";
    pub const ANSWER_ENDPOINT_INVALID: &str = "ANSWER_ENDPOINT_INVALID";
    pub const ANSWER_SERVER_FAILED: &str = "ANSWER_SERVER_FAILED";
    pub const ANSWER_SERVER_UNREACHABLE: &str = "ANSWER_SERVER_UNREACHABLE";
}

/// Failure from `EvidenceStore` loading, `PrecomputedAnswers` parsing or the
/// `ial_ai` answer server client. `retryable` is set only for transport errors.
///
/// The demo pipeline never shows one of these: the bundled store degrades to
/// empty and `ServerAnswers` falls back to the offline table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
    pub retryable: bool,
}

impl AppError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            retryable: false,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.details {
            Some(details) => write!(f, "[{}] {} ({})", self.code, self.message, details),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

impl std::error::Error for AppError {}
