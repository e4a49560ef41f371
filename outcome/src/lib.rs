//! Typed outcomes for fallible operations.
//!
//! An [`Outcome<S>`] holds either a success value of type `S` or a
//! [`Fault`] describing why no value was produced. It is built with one of
//! two constructors and read through one of two dispatch contracts:
//!
//! - [`ResultHandler`] folds an outcome into a value of any type, handling
//!   both variants.
//! - [`SuccessHandler`] chains a further fallible step after a success. A
//!   failure skips every later step and keeps its original fault.
//!
//! ```rust
//! use outcome::{Fault, Outcome};
//!
//! fn parse(input: &str) -> Outcome<i64> {
//!     input.trim().parse::<i64>().map_or_else(
//!         |err| Outcome::failure(Fault::from_error("Parse", err).with_arg("input", input)),
//!         Outcome::success,
//!     )
//! }
//!
//! fn halve(n: i64) -> Outcome<i64> {
//!     if n % 2 == 0 {
//!         Outcome::success(n / 2)
//!     } else {
//!         Outcome::failure(Fault::new("Odd", "cannot halve").with_arg("n", n))
//!     }
//! }
//!
//! let message = parse(" 84 ")
//!     .and_then(halve)
//!     .fold_with(|fault| fault.to_string(), |n| format!("got {n}"));
//! assert_eq!(message, "got 42");
//!
//! let odd = parse("7")
//!     .and_then(halve)
//!     .fold_with(|fault| fault.to_string(), |n| format!("got {n}"));
//! assert_eq!(odd, "Odd: cannot halve (n=7)");
//! ```

mod fault;
pub mod handlers;
mod outcome;
mod result_ext;

pub use fault::{Fault, FaultCategory, FaultCause, SubFaults};
pub use handlers::{ResultHandler, SuccessHandler};
pub use outcome::Outcome;
pub use result_ext::{IntoOutcome, OptionOutcomeExt};
