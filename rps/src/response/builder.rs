//! Fluent builder that records envelope mutators.

use std::fmt;

use serde::Serialize;

use super::{Extra, ResponseCode, ResponseEnvelope, TotalCount};
use crate::apply::{Mutator, OptionProvider, build_one};
use crate::{RpsResult, RpsResultExt};

/// Option provider for [`ResponseEnvelope`].
///
/// Every setter appends one mutator and returns the builder, so calls chain.
/// Mutators run in the order they were appended, so the last call to a
/// setter wins for its field. A fresh builder already holds a mutator that
/// marks the envelope as successful.
///
/// Type parameters follow [`ResponseEnvelope`]: `C` is the code, `D` the
/// payload and `T` the total count.
///
/// ```rust
/// use rps::{ResponseBuilder, ResponseEnvelope, build};
///
/// type Envelope = ResponseEnvelope<String, Vec<u32>, u64>;
/// type Builder = ResponseBuilder<String, Vec<u32>, u64>;
///
/// let paging = Builder::new().total(42).extra_entry("page", 3);
/// let body = Builder::new()
///     .code(String::from("OK"))
///     .data(vec![1, 2, 3]);
/// let envelope: Envelope = build([&paging, &body])?;
/// assert!(envelope.success);
/// assert_eq!(envelope.total, 42);
/// assert_eq!(envelope.data, vec![1, 2, 3]);
/// # Ok::<_, std::sync::Arc<rps::RpsError>>(())
/// ```
pub struct ResponseBuilder<C, D, T> {
    mutators: Vec<Mutator<ResponseEnvelope<C, D, T>>>,
}

impl<C, D, T> ResponseBuilder<C, D, T>
where
    C: ResponseCode,
    D: Clone + Send + Sync + 'static,
    T: TotalCount,
{
    /// Create a builder whose envelope defaults to `success = true`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mutators: Vec::new(),
        }
        .success(true)
    }

    /// Create a builder for a failed operation carrying `message`.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new().success(false).message(message)
    }

    /// Set whether the operation succeeded.
    #[must_use]
    pub fn success(self, success: bool) -> Self {
        self.try_with(move |envelope| {
            envelope.success = success;
            Ok(())
        })
    }

    /// Set the human-readable message.
    #[must_use]
    pub fn message(self, message: impl Into<String>) -> Self {
        let text = message.into();
        self.try_with(move |envelope| {
            envelope.message.clone_from(&text);
            Ok(())
        })
    }

    /// Set the status code.
    #[must_use]
    pub fn code(self, code: C) -> Self {
        self.try_with(move |envelope| {
            envelope.code.clone_from(&code);
            Ok(())
        })
    }

    /// Set the payload.
    #[must_use]
    pub fn data(self, data: D) -> Self {
        self.try_with(move |envelope| {
            envelope.data.clone_from(&data);
            Ok(())
        })
    }

    /// Replace the extra metadata map wholesale.
    #[must_use]
    pub fn extra(self, extra: Extra) -> Self {
        self.try_with(move |envelope| {
            envelope.extra = Some(extra.clone());
            Ok(())
        })
    }

    /// Insert a single extra metadata entry, creating the map if needed.
    ///
    /// `value` is encoded immediately. An encoding failure is reported when
    /// the builder is applied, as the failure of this entry's mutator.
    #[must_use]
    pub fn extra_entry(self, key: impl Into<String>, value: impl Serialize) -> Self {
        let owned_key = key.into();
        let encoded = serde_json::to_value(value).into_rps();
        self.try_with(move |envelope| {
            let encoded_value = encoded.clone()?;
            envelope
                .extra
                .get_or_insert_with(Extra::new)
                .insert(owned_key.clone(), encoded_value);
            Ok(())
        })
    }

    /// Set the total count.
    #[must_use]
    pub fn total(self, total: T) -> Self {
        self.try_with(move |envelope| {
            envelope.total = total;
            Ok(())
        })
    }

    /// Append a prepared mutator.
    #[must_use]
    pub fn with(mut self, mutator: Mutator<ResponseEnvelope<C, D, T>>) -> Self {
        self.mutators.push(mutator);
        self
    }

    /// Append a custom, possibly failing, configuration step.
    #[must_use]
    pub fn try_with<F>(self, f: F) -> Self
    where
        F: Fn(&mut ResponseEnvelope<C, D, T>) -> RpsResult<()> + Send + Sync + 'static,
    {
        self.with(Mutator::new(f))
    }

    /// Apply this builder on its own.
    ///
    /// # Errors
    ///
    /// Returns the failure of the first mutator that fails.
    pub fn build(&self) -> RpsResult<ResponseEnvelope<C, D, T>>
    where
        D: Default,
    {
        build_one(self)
    }
}

impl<C, D, T> Default for ResponseBuilder<C, D, T>
where
    C: ResponseCode,
    D: Clone + Send + Sync + 'static,
    T: TotalCount,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C, D, T> Clone for ResponseBuilder<C, D, T> {
    fn clone(&self) -> Self {
        Self {
            mutators: self.mutators.clone(),
        }
    }
}

impl<C, D, T> fmt::Debug for ResponseBuilder<C, D, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseBuilder")
            .field("mutators", &self.mutators.len())
            .finish()
    }
}

impl<C, D, T> OptionProvider<ResponseEnvelope<C, D, T>> for ResponseBuilder<C, D, T> {
    fn mutators(&self) -> &[Mutator<ResponseEnvelope<C, D, T>>] {
        &self.mutators
    }
}
