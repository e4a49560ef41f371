//! Collection of faults nested inside an aggregate [`Fault`].

use thiserror::Error;

use super::Fault;

/// Ordered collection of [`Fault`]s combined into a single aggregate fault.
///
/// # Examples
///
/// ```
/// use outcome::Fault;
///
/// let fault = Fault::aggregate(vec![
///     Fault::new("Validation", "port must be positive"),
///     Fault::new("NotFound", "id=7"),
/// ]);
/// assert_eq!(fault.sub_faults().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", numbered(.0))]
pub struct SubFaults(Vec<Fault>);

impl SubFaults {
    /// Create a collection from a vector of faults.
    #[must_use]
    pub const fn new(faults: Vec<Fault>) -> Self {
        Self(faults)
    }

    /// Iterate over the contained faults.
    #[must_use = "iterators should be consumed to inspect faults"]
    pub fn iter(&self) -> std::slice::Iter<'_, Fault> {
        self.0.iter()
    }

    /// Number of faults in the collection.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the collection holds no faults.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a SubFaults {
    type Item = &'a Fault;
    type IntoIter = std::slice::Iter<'a, Fault>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for SubFaults {
    type Item = Fault;
    type IntoIter = std::vec::IntoIter<Fault>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<Fault> for SubFaults {
    fn from_iter<I: IntoIterator<Item = Fault>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn numbered(faults: &[Fault]) -> String {
    faults
        .iter()
        .enumerate()
        .map(|(i, fault)| format!("{}: {fault}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
