//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll computation.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. Every failure
/// is a local, synchronous input-validation failure: the engine never
/// retries and never substitutes a default for malformed input.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidTimeFormat {
///     value: "25:99".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time-of-day value '25:99': expected 24-hour HH:MM");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A time-of-day string was unparseable or out of range.
    #[error("Invalid time-of-day value '{value}': expected 24-hour HH:MM")]
    InvalidTimeFormat {
        /// The offending input value.
        value: String,
    },

    /// A shift or schedule window could not be reconciled even after
    /// midnight-crossing correction.
    #[error("Invalid shift window for '{shift_id}': {message}")]
    InvalidShiftWindow {
        /// The ID of the shift whose window was invalid.
        shift_id: String,
        /// A description of what made the window irreconcilable.
        message: String,
    },

    /// A non-positive hourly rate or gross pay was fed into pay or
    /// deduction math.
    #[error("Invalid pay input '{field}': {message}")]
    InvalidPayInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration was parseable but semantically invalid, such as a
    /// contribution table with descending salary ceilings.
    #[error("Invalid configuration: {message}")]
    ConfigInvalid {
        /// A description of the validation failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
