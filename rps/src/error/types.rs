//! Primary error enum for option application and envelope encoding.

use thiserror::Error;

/// Errors raised by mutators or by the envelope serializer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RpsError {
    /// A mutator rejected the value it was asked to apply.
    #[error("Validation failed for '{key}': {message}")]
    Validation {
        /// Field or option that failed validation.
        key: String,
        /// Human-readable explanation of the rejection.
        message: String,
    },

    /// A custom mutator failed with an arbitrary error.
    #[error("Option failed to apply: {0}")]
    Option(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[source] serde_json::Error),

    /// The fixed envelope fields did not encode to a JSON object.
    #[error("Encoded envelope fields must form an object, found {found}")]
    NotAnObject {
        /// JSON kind that was produced instead.
        found: &'static str,
    },
}
