//! Generic option application.
//!
//! An [`OptionProvider`] exposes an ordered list of [`Mutator`]s for some
//! target type. [`build`] allocates a default target and plays every
//! provider's mutators against it in order, stopping at the first failure.
//! Absent providers are expressed as `None` and contribute nothing.

use std::fmt;
use std::sync::Arc;

use crate::RpsResult;

type MutatorFn<T> = dyn Fn(&mut T) -> RpsResult<()> + Send + Sync;

/// A deferred, possibly failing configuration step for `T`.
///
/// Mutators are shared behind an [`Arc`] so providers can be cloned cheaply
/// and applied any number of times.
pub struct Mutator<T> {
    apply: Option<Arc<MutatorFn<T>>>,
}

impl<T> Mutator<T> {
    /// Wrap `f` as a mutator.
    ///
    /// # Examples
    ///
    /// ```
    /// use rps::Mutator;
    ///
    /// let double = Mutator::new(|n: &mut u32| {
    ///     *n *= 2;
    ///     Ok(())
    /// });
    /// let mut value = 21;
    /// double.apply(&mut value)?;
    /// assert_eq!(value, 42);
    /// # Ok::<_, std::sync::Arc<rps::RpsError>>(())
    /// ```
    #[must_use]
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut T) -> RpsResult<()> + Send + Sync + 'static,
    {
        Self {
            apply: Some(Arc::new(f)),
        }
    }

    /// A mutator that does nothing. [`build`] skips it.
    #[must_use]
    pub const fn noop() -> Self {
        Self { apply: None }
    }

    /// Returns `true` when this mutator is a no-op.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.apply.is_none()
    }

    /// Run the mutator against `target`.
    ///
    /// # Errors
    ///
    /// Returns whatever failure the wrapped closure reports.
    pub fn apply(&self, target: &mut T) -> RpsResult<()> {
        self.apply.as_ref().map_or(Ok(()), |f| f(target))
    }
}

impl<T> Clone for Mutator<T> {
    fn clone(&self) -> Self {
        Self {
            apply: self.apply.clone(),
        }
    }
}

impl<T> Default for Mutator<T> {
    fn default() -> Self {
        Self::noop()
    }
}

impl<T> fmt::Debug for Mutator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mutator")
            .field("noop", &self.is_noop())
            .finish()
    }
}

/// Anything that can list the mutators it wants applied to a `T`.
pub trait OptionProvider<T> {
    /// Returns the mutators in the order they must run.
    fn mutators(&self) -> &[Mutator<T>];
}

impl<T, P> OptionProvider<T> for &P
where
    P: OptionProvider<T> + ?Sized,
{
    fn mutators(&self) -> &[Mutator<T>] {
        (**self).mutators()
    }
}

impl<T, P> OptionProvider<T> for Box<P>
where
    P: OptionProvider<T> + ?Sized,
{
    fn mutators(&self) -> &[Mutator<T>] {
        (**self).mutators()
    }
}

/// An absent provider contributes no mutators.
impl<T, P> OptionProvider<T> for Option<P>
where
    P: OptionProvider<T>,
{
    fn mutators(&self) -> &[Mutator<T>] {
        let empty: &[Mutator<T>] = &[];
        self.as_ref().map_or(empty, OptionProvider::mutators)
    }
}

impl<T> OptionProvider<T> for [Mutator<T>] {
    fn mutators(&self) -> &[Mutator<T>] {
        self
    }
}

impl<T> OptionProvider<T> for Vec<Mutator<T>> {
    fn mutators(&self) -> &[Mutator<T>] {
        self
    }
}

/// Build a `T` by applying every provider's mutators in order.
///
/// Providers are visited in iteration order and each provider's mutators in
/// list order. No-op mutators are skipped. The first failing mutator aborts
/// the build: its error is returned unchanged and the partially configured
/// value is dropped.
///
/// # Examples
///
/// ```
/// use rps::{Mutator, build};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Settings {
///     port: u16,
///     verbose: bool,
/// }
///
/// let defaults = vec![Mutator::new(|s: &mut Settings| {
///     s.port = 8080;
///     Ok(())
/// })];
/// let overrides = Some(vec![Mutator::new(|s: &mut Settings| {
///     s.verbose = true;
///     Ok(())
/// })]);
/// let settings: Settings = build([Some(defaults), overrides, None])?;
/// assert_eq!(settings, Settings { port: 8080, verbose: true });
/// # Ok::<_, std::sync::Arc<rps::RpsError>>(())
/// ```
///
/// # Errors
///
/// Returns the error reported by the first mutator that fails.
pub fn build<T, I>(providers: I) -> RpsResult<T>
where
    T: Default,
    I: IntoIterator,
    I::Item: OptionProvider<T>,
{
    let mut target = T::default();
    for (index, provider) in providers.into_iter().enumerate() {
        for (position, mutator) in provider.mutators().iter().enumerate() {
            if mutator.is_noop() {
                continue;
            }
            if let Err(err) = mutator.apply(&mut target) {
                tracing::debug!(
                    provider = index,
                    position,
                    error = %err,
                    "option mutator failed; discarding partial value"
                );
                return Err(err);
            }
        }
    }
    Ok(target)
}

/// Build a `T` from a single provider.
///
/// # Errors
///
/// Returns the error reported by the first mutator that fails.
pub fn build_one<T, P>(provider: &P) -> RpsResult<T>
where
    T: Default,
    P: OptionProvider<T> + ?Sized,
{
    build(std::iter::once(provider))
}
