//! Option application and flat JSON response envelopes.
//!
//! The [`apply`] module builds any `Default` value by replaying the ordered
//! [`Mutator`]s collected from one or more [`OptionProvider`]s. The
//! [`response`] module uses that mechanism to assemble a
//! [`ResponseEnvelope`], whose serialized form places caller-supplied extra
//! fields next to the well-known ones instead of nesting them.
//!
//! ```rust
//! use rps::ResponseBuilder;
//!
//! let envelope = ResponseBuilder::<u16, Option<String>, u32>::new()
//!     .message("ok")
//!     .code(200)
//!     .total(3)
//!     .extra_entry("page", 2)
//!     .build()?;
//! let json: serde_json::Value = serde_json::from_slice(&envelope.to_json_vec()?)?;
//! assert_eq!(
//!     json,
//!     serde_json::json!({
//!         "success": true,
//!         "message": "ok",
//!         "code": 200,
//!         "total": 3,
//!         "page": 2
//!     })
//! );
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

use std::sync::Arc;

pub mod apply;
mod error;
pub mod response;
mod result_ext;

pub use apply::{Mutator, OptionProvider, build, build_one};
pub use error::RpsError;
pub use response::{Extra, ResponseBuilder, ResponseCode, ResponseEnvelope, TotalCount};
pub use result_ext::RpsResultExt;
pub use serde_json;

/// Result type used throughout the crate.
///
/// Errors are shared so a single failure can be stored by a provider and
/// returned each time it is applied.
pub type RpsResult<T> = Result<T, Arc<RpsError>>;
