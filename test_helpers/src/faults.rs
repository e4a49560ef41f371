//! Sample faults shared by unit, integration and behavioural tests.

use std::io;

use outcome::Fault;

/// A lookup that found nothing for `id`.
#[must_use]
pub fn not_found(id: u32) -> Fault {
    Fault::new("NotFound", format!("id={id}")).with_arg("id", id)
}

/// Arithmetic that left the representable range.
#[must_use]
pub fn overflow() -> Fault {
    Fault::new("Overflow", "value out of range")
}

/// A fault wrapping a lower-level I/O error, so identity checks cover the
/// shared cause as well as the text.
#[must_use]
pub fn with_io_cause(category: &'static str) -> Fault {
    Fault::new(category, "backing store unavailable")
        .with_cause(io::Error::new(io::ErrorKind::ConnectionRefused, "refused"))
}
