//! Named constructors for `RpsError`.

use std::sync::Arc;

use serde_json::Value;

use super::RpsError;

impl RpsError {
    /// Construct a validation error for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rps::RpsError;
    /// let e = RpsError::validation("code", "must be positive");
    /// assert!(matches!(e, RpsError::Validation { .. }));
    /// ```
    #[must_use]
    pub fn validation(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Construct a validation error already wrapped in an [`Arc`], ready to
    /// be returned from a mutator.
    #[must_use]
    pub fn validation_arc(key: impl Into<String>, message: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::validation(key, message))
    }

    /// Wrap an arbitrary error raised by a custom mutator.
    ///
    /// # Examples
    ///
    /// ```
    /// use rps::RpsError;
    /// let io = std::io::Error::other("disk on fire");
    /// let e = RpsError::option(io);
    /// assert!(e.to_string().contains("disk on fire"));
    /// ```
    #[must_use]
    pub fn option<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Option(source.into())
    }

    /// Report that `value` was expected to be a JSON object.
    #[must_use]
    pub const fn not_an_object(value: &Value) -> Self {
        let found = match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        };
        Self::NotAnObject { found }
    }
}
