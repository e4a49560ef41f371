//! Combinators derived from [`Outcome::fold`] and [`Outcome::chain`].

use super::Outcome;
use crate::{Fault, handlers::fold_with};

impl<S> Outcome<S> {
    /// Fold with a pair of closures instead of a [`ResultHandler`](crate::ResultHandler).
    pub fn fold_with<T, F, G>(self, on_failure: F, on_success: G) -> T
    where
        F: FnOnce(Fault) -> T,
        G: FnOnce(S) -> T,
    {
        self.fold(fold_with(on_failure, on_success))
    }

    /// Chain a closure producing the next outcome.
    ///
    /// Equivalent to [`Outcome::chain`], but the closure's argument type is
    /// inferred from `S`.
    pub fn and_then<T, F>(self, step: F) -> Outcome<T>
    where
        F: FnOnce(S) -> Outcome<T>,
    {
        self.chain(step)
    }

    /// Transform the success value, leaving a fault untouched.
    pub fn map<T, F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(S) -> T,
    {
        self.and_then(|value| Outcome::success(f(value)))
    }

    /// Re-wrap the fault of a failed outcome, leaving a success untouched.
    ///
    /// This is how an intermediate layer adds its own context to a fault it
    /// did not produce.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Fault, Outcome};
    ///
    /// let lookup: Outcome<u32> = Outcome::failure(Fault::new("NotFound", "id=7"));
    /// let wrapped = lookup.map_fault(|inner| {
    ///     Fault::new("Request", "lookup failed").with_sub_faults([inner])
    /// });
    /// let category = wrapped.fold_with(|f| f.category().to_string(), |_| String::new());
    /// assert_eq!(category, "Request");
    /// ```
    pub fn map_fault<F>(self, f: F) -> Self
    where
        F: FnOnce(Fault) -> Fault,
    {
        self.fold_with(
            |fault| {
                let from = fault.category().clone();
                let rewrapped = f(fault);
                tracing::trace!(%from, to = %rewrapped.category(), "fault re-wrapped");
                Self::failure(rewrapped)
            },
            Self::success,
        )
    }

    /// Replace a failure with the outcome of a fallback step.
    ///
    /// The fallback sees the fault and may succeed or fail again. A success
    /// passes through without calling it.
    pub fn recover<F>(self, fallback: F) -> Self
    where
        F: FnOnce(Fault) -> Self,
    {
        self.fold_with(fallback, Self::success)
    }

    /// Combine two outcomes when both succeed.
    ///
    /// When either fails the result carries a fault: this outcome's when it
    /// failed, otherwise `other`'s.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Fault, Outcome};
    ///
    /// let sum = Outcome::success(2).zip_with(Outcome::success(3), |a, b| a + b);
    /// assert_eq!(sum, Outcome::success(5));
    ///
    /// let first: Outcome<i32> = Outcome::failure(Fault::new("First", ""));
    /// let second: Outcome<i32> = Outcome::failure(Fault::new("Second", ""));
    /// let both = first.zip_with(second, |a, b| a + b);
    /// assert_eq!(both, Outcome::failure(Fault::new("First", "")));
    /// ```
    pub fn zip_with<U, T, F>(self, other: Outcome<U>, f: F) -> Outcome<T>
    where
        F: FnOnce(S, U) -> T,
    {
        self.and_then(|left| other.map(|right| f(left, right)))
    }

    /// Fold into a standard [`Result`], so callers can use `?`.
    ///
    /// The result is meant to be propagated or matched. Calling `unwrap` on
    /// it turns the fault into a panic and throws away its category, args
    /// and cause; use [`Outcome::fold`] when the failure should be handled
    /// in place.
    ///
    /// # Errors
    ///
    /// Returns the stored [`Fault`] when the outcome is a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Fault, Outcome};
    ///
    /// fn doubled(outcome: Outcome<i32>) -> Result<i32, Fault> {
    ///     Ok(outcome.into_result()? * 2)
    /// }
    ///
    /// assert_eq!(doubled(Outcome::success(4)), Ok(8));
    /// let missing = Fault::new("NotFound", "id=7");
    /// assert_eq!(doubled(Outcome::failure(missing.clone())), Err(missing));
    /// ```
    pub fn into_result(self) -> Result<S, Fault> {
        self.fold_with(Err, Ok)
    }

    /// Collect outcomes into one, stopping at the first failure.
    ///
    /// Items after the first failure are not pulled from the iterator. The
    /// resulting failure carries that first fault unchanged.
    pub fn all<I>(outcomes: I) -> Outcome<Vec<S>>
    where
        I: IntoIterator<Item = Self>,
    {
        let collected: Result<Vec<S>, Fault> =
            outcomes.into_iter().map(Self::into_result).collect();
        match collected {
            Ok(values) => Outcome::success(values),
            Err(fault) => Outcome::failure(fault),
        }
    }

    /// Collect outcomes into one, keeping every fault.
    ///
    /// The whole iterator is consumed. With no failures the values are
    /// returned in order. A single failure is returned unchanged; several are
    /// combined with [`Fault::aggregate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Fault, Outcome};
    ///
    /// let gathered = Outcome::gather([
    ///     Outcome::success(1),
    ///     Outcome::failure(Fault::new("Validation", "a")),
    ///     Outcome::failure(Fault::new("Validation", "b")),
    /// ]);
    /// let count = gathered.fold_with(|f| f.sub_faults().len(), |_| 0);
    /// assert_eq!(count, 2);
    /// ```
    pub fn gather<I>(outcomes: I) -> Outcome<Vec<S>>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut values = Vec::new();
        let mut faults = Vec::new();
        for outcome in outcomes {
            outcome.fold_with(|fault| faults.push(fault), |value| values.push(value));
        }
        if faults.len() > 1 {
            tracing::debug!(count = faults.len(), "aggregating gathered faults");
        }
        Fault::try_aggregate(faults).map_or_else(|| Outcome::success(values), Outcome::failure)
    }
}

impl<S> From<Outcome<S>> for Result<S, Fault> {
    fn from(outcome: Outcome<S>) -> Self {
        outcome.into_result()
    }
}
