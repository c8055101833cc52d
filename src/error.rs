//! Error types for this crate.
//!
//! All fallible operations return [`Result<T>`] which uses [`IntentError`] as the error type.

use thiserror::Error;

/// A [`Result`](std::result::Result) alias using [`IntentError`] as the error type.
pub type Result<T> = std::result::Result<T, IntentError>;

/// The unified error type for all crate errors.
///
/// # Example
///
/// ```rust,no_run
/// use lead_intent::error::IntentError;
///
/// fn handle_error(e: IntentError) {
///     match &e {
///         IntentError::ResourceUnavailable(_) => {
///             // Classifier never loaded - restart the process
///         }
///         IntentError::InvalidInput(_) => {
///             // Blank text - ask the caller for real input
///         }
///         IntentError::Inference(_) => {
///             // One request failed - report it, accept the next one
///         }
///         IntentError::Download(_) => {
///             // Network issue - retry with backoff
///         }
///         IntentError::Device(_) => {
///             // GPU unavailable - fall back to CPU
///         }
///         IntentError::Tokenization(_) => {
///             // Bad input - fix and retry
///         }
///         _ => {
///             // Internal error - report bug
///             eprintln!("Internal error: {e}");
///         }
///     }
/// }
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum IntentError {
    /// Classifier failed to load and cannot serve any request. Restart the process to retry.
    #[error("{0}")]
    ResourceUnavailable(String),

    /// A single classification call failed or timed out. The next request is unaffected.
    #[error("{0}")]
    Inference(String),

    /// Empty or blank input text. Submit trimmed, non-empty text.
    #[error("{0}")]
    InvalidInput(String),

    /// Network or download failure while fetching model assets. Retry may help.
    #[error("{0}")]
    Download(String),

    /// Device initialization failure. Fall back to CPU.
    #[error("{0}")]
    Device(String),

    /// Tokenization failure. Check input text.
    #[error("{0}")]
    Tokenization(String),

    /// Internal error. Report if seen.
    #[error("{0}")]
    Unexpected(String),
}

impl IntentError {
    /// Whether the error means no future request can succeed either.
    ///
    /// Fatal errors come from resource acquisition; everything else is scoped
    /// to a single request and leaves the resolver usable.
    pub fn is_fatal(&self) -> bool {
        matches!(self, IntentError::ResourceUnavailable(_))
    }
}

impl From<hf_hub::api::sync::ApiError> for IntentError {
    fn from(value: hf_hub::api::sync::ApiError) -> Self {
        IntentError::Download(format!("HuggingFace API error: {value}"))
    }
}

impl From<candle_core::Error> for IntentError {
    fn from(value: candle_core::Error) -> Self {
        IntentError::Unexpected(value.to_string())
    }
}

impl From<std::io::Error> for IntentError {
    fn from(value: std::io::Error) -> Self {
        IntentError::Unexpected(value.to_string())
    }
}

impl From<serde_json::Error> for IntentError {
    fn from(value: serde_json::Error) -> Self {
        IntentError::Unexpected(value.to_string())
    }
}
