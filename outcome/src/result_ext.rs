//! Extensions for turning standard `Result` and `Option` values into
//! [`Outcome`]s concisely.
//!
//! These helpers replace repetitive `match` blocks at the boundary where code
//! built on `Result` hands its values to code built on [`Outcome`].
//!
//! - Use [`IntoOutcome::into_outcome`] for `Result<S, E>` where
//!   `E: Into<Fault>` (for example [`std::io::Error`]).
//! - Use [`OptionOutcomeExt::ok_or_fault`] for an `Option<S>` whose absence
//!   is a failure.
//!
//! # Examples
//!
//! ```
//! use outcome::{Fault, IntoOutcome, OptionOutcomeExt, Outcome};
//!
//! fn read_config(path: &str) -> Outcome<String> {
//!     std::fs::read_to_string(path).into_outcome()
//! }
//!
//! let missing = read_config("/definitely/not/here.toml");
//! assert_eq!(missing.fold_with(|f| f.category().to_string(), |_| String::new()), "Io");
//!
//! let port = Some(8080).ok_or_fault(|| Fault::new("Missing", "port"));
//! assert_eq!(port, Outcome::success(8080));
//! ```

use crate::{Fault, Outcome};

/// Generic extension for converting any `Result<S, E>` with
/// `E: Into<Fault>` into an [`Outcome<S>`].
pub trait IntoOutcome<S> {
    /// Convert into an [`Outcome`], turning the error into a [`Fault`].
    fn into_outcome(self) -> Outcome<S>;
}

impl<S, E> IntoOutcome<S> for Result<S, E>
where
    E: Into<Fault>,
{
    fn into_outcome(self) -> Outcome<S> {
        match self {
            Ok(value) => Outcome::success(value),
            Err(err) => Outcome::failure(err.into()),
        }
    }
}

/// Extension for treating an absent value as a failure.
pub trait OptionOutcomeExt<S> {
    /// Convert into an [`Outcome`], building the fault lazily when the value
    /// is absent.
    fn ok_or_fault<F>(self, fault: F) -> Outcome<S>
    where
        F: FnOnce() -> Fault;
}

impl<S> OptionOutcomeExt<S> for Option<S> {
    fn ok_or_fault<F>(self, fault: F) -> Outcome<S>
    where
        F: FnOnce() -> Fault,
    {
        self.map_or_else(|| Outcome::failure(fault()), Outcome::success)
    }
}
