//! Trait-based conversions between external error types and `RpsError`.

use super::RpsError;

/// Convert JSON encoding or decoding failures into [`RpsError::Json`].
impl From<serde_json::Error> for RpsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
