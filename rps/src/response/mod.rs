//! Response envelopes assembled from option providers.
//!
//! A [`ResponseBuilder`] records one mutator per setter call. Applying it
//! yields a [`ResponseEnvelope`] whose JSON form is a single flat object:
//! the reserved keys `success`, `message`, `code`, `data` and `total`, plus
//! any entries from the envelope's [`Extra`] map as top-level siblings.

mod builder;
mod envelope;
mod kinds;
mod serialize;
mod zero;

pub use builder::ResponseBuilder;
pub use envelope::ResponseEnvelope;
pub use kinds::{ResponseCode, TotalCount};

/// Open-ended metadata merged into the top level of a serialized envelope.
pub type Extra = serde_json::Map<String, serde_json::Value>;
