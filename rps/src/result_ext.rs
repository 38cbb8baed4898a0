//! Lifting foreign errors into [`RpsResult`].
//!
//! Encoding steps inside the builder and the serializer produce
//! `serde_json::Error`, while every public operation reports an
//! `Arc<RpsError>`. [`RpsResultExt::into_rps`] bridges the two at the call
//! site so the `?` operator keeps working.
//!
//! # Examples
//!
//! ```
//! use rps::{RpsResult, RpsResultExt};
//!
//! fn encode() -> RpsResult<serde_json::Value> {
//!     serde_json::to_value(42).into_rps()
//! }
//! # assert!(encode().is_ok());
//! ```

use std::sync::Arc;

use crate::{RpsError, RpsResult};

/// Converts a `Result` whose error maps into [`RpsError`].
pub trait RpsResultExt<T, E> {
    /// Wrap the error, if any, as a shared [`RpsError`].
    ///
    /// # Errors
    ///
    /// Returns the converted error when `self` is `Err`.
    fn into_rps(self) -> RpsResult<T>;
}

impl<T, E> RpsResultExt<T, E> for Result<T, E>
where
    E: Into<RpsError>,
{
    fn into_rps(self) -> RpsResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
