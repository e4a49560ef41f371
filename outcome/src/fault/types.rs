//! The [`Fault`] record and its accessors.

use std::{collections::BTreeMap, error::Error as StdError, fmt, sync::Arc};

use super::{FaultCategory, SubFaults};

/// Shared lower-level error wrapped by a [`Fault`].
pub type FaultCause = Arc<dyn StdError + Send + Sync + 'static>;

/// Structured description of why an operation did not produce a value.
///
/// A fault is immutable once built. Its fields are private, and the builder
/// methods ([`Fault::with_arg`], [`Fault::with_cause`],
/// [`Fault::with_sub_faults`]) consume the fault under construction, so a
/// fault that has been handed to an [`Outcome`](crate::Outcome) can no longer
/// change.
///
/// Two faults are equal when their category, message, arguments and
/// sub-faults match and they share the same cause (or both have none). The
/// cause is compared by identity, so a fault passed through a chain of steps
/// still equals the fault that was originally recorded.
///
/// As an [`Error`](StdError), a fault reports its cause as
/// [`source`](StdError::source). An aggregate fault with no cause reports
/// its [`SubFaults`] instead, so error reporters walking the chain still see
/// every nested fault.
///
/// # Examples
///
/// ```
/// use outcome::Fault;
///
/// let fault = Fault::new("NotFound", "no such record").with_arg("id", 7);
/// assert_eq!(fault.category().as_str(), "NotFound");
/// assert_eq!(fault.arg("id"), Some("7"));
/// assert_eq!(fault.to_string(), "NotFound: no such record (id=7)");
/// ```
#[derive(Debug, Clone)]
pub struct Fault {
    pub(super) category: FaultCategory,
    pub(super) message: String,
    pub(super) args: BTreeMap<String, String>,
    pub(super) cause: Option<FaultCause>,
    pub(super) sub_faults: SubFaults,
}

impl Fault {
    /// Kind of failure this fault records.
    #[must_use]
    pub const fn category(&self) -> &FaultCategory {
        &self.category
    }

    /// Human-readable description of the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Named arguments describing the failure context, ordered by name.
    #[must_use]
    pub const fn args(&self) -> &BTreeMap<String, String> {
        &self.args
    }

    /// Rendered value of a single named argument.
    #[must_use]
    pub fn arg(&self, name: &str) -> Option<&str> {
        self.args.get(name).map(String::as_str)
    }

    /// Lower-level error that triggered this fault, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Faults nested inside this one by an aggregating layer.
    #[must_use]
    pub const fn sub_faults(&self) -> &SubFaults {
        &self.sub_faults
    }
}

impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category
            && self.message == other.message
            && self.args == other.args
            && self.sub_faults == other.sub_faults
            && same_cause(self.cause.as_ref(), other.cause.as_ref())
    }
}

impl Eq for Fault {}

fn same_cause(left: Option<&FaultCause>, right: Option<&FaultCause>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(l), Some(r)) => Arc::ptr_eq(l, r),
        _ => false,
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        for (i, (key, value)) in self.args.iter().enumerate() {
            write!(f, "{}{key}={value}", if i == 0 { " (" } else { ", " })?;
        }
        if !self.args.is_empty() {
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl StdError for Fault {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self.cause.as_deref() {
            Some(cause) => Some(cause as &(dyn StdError + 'static)),
            None if !self.sub_faults.is_empty() => Some(&self.sub_faults),
            None => None,
        }
    }
}
