//! Error types produced while applying options and encoding envelopes.

mod constructors;
mod conversions;
mod types;

pub use types::RpsError;
