//! Error response body returned by the API.

use serde::{Deserialize, Serialize};

/// JSON error body: `{"error": "...", "details": [...]}`.
///
/// Only `error` is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A short, human-readable summary of the problem.
    pub error: String,

    /// Individual problems, e.g. one entry per invalid field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = Some(details);
        self
    }

    // Common error constructors
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new("Bad request").with_details(vec![detail.into()])
    }

    pub fn validation(details: Vec<String>) -> Self {
        Self::new("Validation failed").with_details(details)
    }

    pub fn internal_error() -> Self {
        Self::new("Internal server error")
    }
}
