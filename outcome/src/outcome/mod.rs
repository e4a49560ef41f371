//! The [`Outcome`] type and its two primitive consumers, fold and chain.

mod combinators;

use std::fmt;

use crate::{Fault, ResultHandler, SuccessHandler};

/// Result of exactly one fallible computation: a success value or a
/// [`Fault`].
///
/// An outcome is built with [`Outcome::success`] or [`Outcome::failure`] and
/// read only through [`Outcome::fold`] or [`Outcome::chain`]. There is no
/// way to peek at one variant without also deciding what happens to the
/// other.
///
/// # Examples
///
/// ```
/// use outcome::{Fault, Outcome};
///
/// let found = Outcome::success(42).fold_with(|_fault| -1, |x| x + 1);
/// assert_eq!(found, 43);
///
/// let missing: Outcome<i32> = Outcome::failure(Fault::new("NotFound", "id=7"));
/// assert_eq!(missing.fold_with(|_fault| -1, |x| x + 1), -1);
/// ```
#[derive(Clone, PartialEq, Eq)]
#[must_use = "this `Outcome` may hold a fault, which should be handled"]
pub struct Outcome<S>(Variant<S>);

#[derive(Clone, PartialEq, Eq)]
enum Variant<S> {
    Success(S),
    Failure(Fault),
}

impl<S> Outcome<S> {
    /// Record a successful computation.
    pub const fn success(value: S) -> Self {
        Self(Variant::Success(value))
    }

    /// Record a failed computation.
    pub const fn failure(fault: Fault) -> Self {
        Self(Variant::Failure(fault))
    }

    /// Collapse the outcome into a `T` using `handler`.
    ///
    /// Exactly one handler method runs: [`ResultHandler::on_success`] with
    /// the stored value, or [`ResultHandler::on_failure`] with the stored
    /// fault.
    pub fn fold<T, H>(self, handler: H) -> T
    where
        H: ResultHandler<S, T>,
    {
        match self.0 {
            Variant::Success(value) => handler.on_success(value),
            Variant::Failure(fault) => handler.on_failure(fault),
        }
    }

    /// Run the next fallible step when this outcome is a success.
    ///
    /// A success yields exactly the outcome `handler` produces. A failure
    /// yields a failure carrying the same fault, and `handler` is dropped
    /// without being called.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Fault, Outcome};
    ///
    /// let overflow = || Fault::new("Overflow", "too large");
    /// let mut third_ran = false;
    /// let result = Outcome::success(5)
    ///     .chain(|x: i32| Outcome::success(x * 2))
    ///     .chain(|_y: i32| Outcome::<i32>::failure(overflow()))
    ///     .chain(|z: i32| {
    ///         third_ran = true;
    ///         Outcome::success(z + 1)
    ///     });
    /// assert_eq!(result, Outcome::failure(overflow()));
    /// assert!(!third_ran);
    /// ```
    pub fn chain<T, H>(self, handler: H) -> Outcome<T>
    where
        H: SuccessHandler<S, T>,
    {
        match self.0 {
            Variant::Success(value) => handler.on_success(value),
            Variant::Failure(fault) => {
                tracing::trace!(category = %fault.category(), "chain short-circuited on fault");
                Outcome::failure(fault)
            }
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for Outcome<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Variant::Success(value) => f.debug_tuple("Success").field(value).finish(),
            Variant::Failure(fault) => f.debug_tuple("Failure").field(fault).finish(),
        }
    }
}
