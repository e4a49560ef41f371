//! Trait-based conversions from external error types into [`Fault`].

use std::{error::Error as StdError, io, sync::Arc};

use super::{Fault, FaultCategory, FaultCause};

/// Convert I/O failures into an [`FaultCategory::IO`] fault, recording the
/// error kind as the `kind` argument.
impl From<io::Error> for Fault {
    fn from(err: io::Error) -> Self {
        let kind = format!("{:?}", err.kind());
        Self::from_error(FaultCategory::IO, err).with_arg("kind", kind)
    }
}

/// Convert boxed errors of unknown origin into an
/// [`FaultCategory::UNCLASSIFIED`] fault. The box is shared, not re-wrapped.
impl From<Box<dyn StdError + Send + Sync>> for Fault {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        let message = err.to_string();
        let cause: FaultCause = Arc::from(err);
        Self::new(FaultCategory::UNCLASSIFIED, message).with_shared_cause(cause)
    }
}
