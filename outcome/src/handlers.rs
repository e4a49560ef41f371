//! Dispatch contracts for consuming an [`Outcome`].
//!
//! [`ResultHandler`] folds an outcome into a value of any type by handling
//! both variants. [`SuccessHandler`] chains a further fallible step after a
//! success and is never consulted once a fault has been recorded.
//!
//! Both contracts take `self` by value, so a handler is spent by the single
//! call an outcome makes on it.

use crate::{Fault, Outcome};

/// Folds an [`Outcome<S>`] into a `T` by supplying one method per variant.
///
/// [`Outcome::fold`] invokes exactly one of the two methods exactly once:
/// [`ResultHandler::on_failure`] when the outcome holds a fault,
/// [`ResultHandler::on_success`] when it holds a value.
///
/// # Examples
///
/// ```
/// use outcome::{Fault, Outcome, ResultHandler};
///
/// struct StatusCode;
///
/// impl ResultHandler<String, u16> for StatusCode {
///     fn on_failure(self, fault: Fault) -> u16 {
///         if fault.category() == "NotFound" { 404 } else { 500 }
///     }
///
///     fn on_success(self, _body: String) -> u16 {
///         200
///     }
/// }
///
/// let missing: Outcome<String> = Outcome::failure(Fault::new("NotFound", "id=7"));
/// assert_eq!(missing.fold(StatusCode), 404);
/// assert_eq!(Outcome::success(String::from("ok")).fold(StatusCode), 200);
/// ```
pub trait ResultHandler<S, T> {
    /// Handles the fault stored in a failed outcome.
    ///
    /// Receives the fault exactly as it was recorded. Implementations that
    /// want to keep failing can return a `T` that encodes the failure in the
    /// caller's own terms.
    fn on_failure(self, fault: Fault) -> T;

    /// Handles the value stored in a successful outcome.
    fn on_success(self, value: S) -> T;
}

/// Chains a fallible step after a successful [`Outcome<S>`].
///
/// [`Outcome::chain`] calls [`SuccessHandler::on_success`] only for a
/// success and returns the produced outcome as is. A failed outcome skips the
/// handler and carries its fault forward unchanged.
///
/// Every `FnOnce(S) -> Outcome<T>` closure is a `SuccessHandler<S, T>`.
pub trait SuccessHandler<S, T> {
    /// Runs the next step with the value of the previous one.
    fn on_success(self, value: S) -> Outcome<T>;
}

impl<S, T, F> SuccessHandler<S, T> for F
where
    F: FnOnce(S) -> Outcome<T>,
{
    fn on_success(self, value: S) -> Outcome<T> {
        self(value)
    }
}

/// [`ResultHandler`] assembled from a pair of closures.
///
/// Built by [`fold_with`].
#[derive(Debug, Clone, Copy)]
pub struct FoldWith<F, G> {
    on_failure: F,
    on_success: G,
}

/// Pair a failure closure with a success closure to form a [`ResultHandler`].
///
/// # Examples
///
/// ```
/// use outcome::{Outcome, handlers::fold_with};
///
/// let handler = fold_with(|_fault| -1, |x: i32| x + 1);
/// assert_eq!(Outcome::success(42).fold(handler), 43);
/// ```
#[must_use]
pub const fn fold_with<F, G>(on_failure: F, on_success: G) -> FoldWith<F, G> {
    FoldWith {
        on_failure,
        on_success,
    }
}

impl<S, T, F, G> ResultHandler<S, T> for FoldWith<F, G>
where
    F: FnOnce(Fault) -> T,
    G: FnOnce(S) -> T,
{
    fn on_failure(self, fault: Fault) -> T {
        (self.on_failure)(fault)
    }

    fn on_success(self, value: S) -> T {
        (self.on_success)(value)
    }
}
