//! Structured failure records carried by failed outcomes.

mod aggregate;
mod category;
mod constructors;
mod conversions;
mod types;

pub use aggregate::SubFaults;
pub use category::FaultCategory;
pub use types::{Fault, FaultCause};
