//! Text helpers for arguments captured by behavioural step patterns.
//!
//! Feature files quote category names (`"NotFound"`) so they read naturally;
//! the captured placeholder keeps those quotes.

use outcome::FaultCategory;

/// Strips one layer of matching single or double quotes from a trimmed value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    ['"', '\'']
        .into_iter()
        .find_map(|quote| {
            trimmed
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        })
        .unwrap_or(trimmed)
}

/// Builds a [`FaultCategory`] from a possibly quoted step argument.
#[must_use]
pub fn category(value: &str) -> FaultCategory {
    FaultCategory::from(unquote(value).trim().to_owned())
}
