use thiserror::Error;

/// Error returned when a string fails VIN structural validation.
///
/// Carries the normalized (upper-cased) input so diagnostics show the value
/// that was actually checked, not the raw user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("the value \"{value}\" is not a valid VIN: {reason}")]
pub struct InvalidVin {
    /// The normalized input that failed validation.
    pub value: String,
    /// Why the value failed.
    pub reason: String,
}
