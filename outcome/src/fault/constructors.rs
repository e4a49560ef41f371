//! Constructors, builders and aggregation helpers for [`Fault`].

use std::{collections::BTreeMap, error::Error as StdError, fmt, sync::Arc};

use super::{Fault, FaultCategory, FaultCause, SubFaults};

impl Fault {
    /// Build a fault with a category and a description.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Fault;
    ///
    /// let fault = Fault::new("Overflow", "counter exceeded u16::MAX");
    /// assert_eq!(fault.message(), "counter exceeded u16::MAX");
    /// ```
    #[must_use]
    pub fn new(category: impl Into<FaultCategory>, message: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            message: message.into(),
            args: BTreeMap::new(),
            cause: None,
            sub_faults: SubFaults::default(),
        }
    }

    /// Wrap a lower-level error, using its display text as the message.
    ///
    /// The error is retained as the fault's cause and is reachable through
    /// [`std::error::Error::source`].
    ///
    /// # Examples
    ///
    /// ```
    /// use std::error::Error;
    /// use outcome::Fault;
    ///
    /// let parse = "x".parse::<u8>().unwrap_err();
    /// let fault = Fault::from_error("Parse", parse);
    /// assert_eq!(fault.message(), "invalid digit found in string");
    /// assert!(fault.source().is_some());
    /// ```
    #[must_use]
    pub fn from_error<E>(category: impl Into<FaultCategory>, err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let message = err.to_string();
        Self::new(category, message).with_cause(err)
    }

    /// Attach a named argument, replacing any earlier value with that name.
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.args.insert(name.into(), value.to_string());
        self
    }

    /// Attach a lower-level error as the cause.
    #[must_use]
    pub fn with_cause<E>(self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.with_shared_cause(Arc::new(cause))
    }

    /// Attach an already shared cause without re-wrapping it.
    #[must_use]
    pub fn with_shared_cause(mut self, cause: FaultCause) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Nest faults collected by an aggregating layer.
    #[must_use]
    pub fn with_sub_faults<I>(mut self, faults: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        self.sub_faults = faults.into_iter().collect();
        self
    }

    /// Tries to combine an iterator of faults into one.
    ///
    /// The iterator is consumed eagerly. It returns:
    /// * `None` when no faults are supplied;
    /// * the fault itself, unchanged, when exactly one is supplied; and
    /// * a fault in [`FaultCategory::AGGREGATE`] nesting every input for two
    ///   or more.
    #[must_use]
    pub fn try_aggregate<I>(faults: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut collected: Vec<Self> = faults.into_iter().collect();
        match collected.len() {
            0 => None,
            1 => collected.pop(),
            count => Some(
                Self::new(FaultCategory::AGGREGATE, format!("{count} faults"))
                    .with_sub_faults(collected),
            ),
        }
    }

    /// Combine at least one fault into one.
    ///
    /// # Panics
    ///
    /// Panics if `faults` is empty. Use [`Fault::try_aggregate`] when the
    /// input may be empty.
    #[must_use]
    #[track_caller]
    pub fn aggregate<I>(faults: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::try_aggregate(faults).map_or_else(
            || panic!("aggregate requires at least one fault"),
            |fault| fault,
        )
    }
}
