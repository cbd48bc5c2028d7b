//! Error types

/// Errors surfaced by fluent operations
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// A single-match query found nothing
    #[error("No element found with selector: {selector}")]
    NotFound { selector: String },

    /// Configuration or form data could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type UiResult<T> = Result<T, UiError>;
