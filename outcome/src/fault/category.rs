//! Discriminator naming the kind of failure a [`Fault`](super::Fault) records.

use std::{borrow::Cow, fmt};

/// Category identifying the kind of failure carried by a fault.
///
/// Categories compare by their text, so a category built from a string
/// literal equals one built from an owned `String` with the same contents.
///
/// # Examples
///
/// ```
/// use outcome::FaultCategory;
///
/// let literal = FaultCategory::from("NotFound");
/// let owned = FaultCategory::from(String::from("NotFound"));
/// assert_eq!(literal, owned);
/// assert_eq!(literal.as_str(), "NotFound");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FaultCategory(Cow<'static, str>);

impl FaultCategory {
    /// Category assigned to faults that combine several sub-faults.
    pub const AGGREGATE: Self = Self::from_static("Aggregate");

    /// Category assigned to faults converted from [`std::io::Error`].
    pub const IO: Self = Self::from_static("Io");

    /// Category assigned to faults converted from boxed errors of unknown kind.
    pub const UNCLASSIFIED: Self = Self::from_static("Unclassified");

    /// Build a category from a static name without allocating.
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// The category name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FaultCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for FaultCategory {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for FaultCategory {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl AsRef<str> for FaultCategory {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for FaultCategory {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for FaultCategory {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
