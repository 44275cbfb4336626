//! Error types for the technician payments engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while calculating payments.

use thiserror::Error;

/// The main error type for the technician payments engine.
///
/// Empty technician collections are never an error: aggregation over no
/// records yields an average of zero and no lowest or highest technician.
///
/// # Example
///
/// ```
/// use technician_payments::error::EngineError;
///
/// let error = EngineError::OutOfRange { hours: 12 };
/// assert_eq!(
///     error.to_string(),
///     "No rate tier covers 12 hours; the rate schedule is misconfigured"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Worked hours were negative or not a whole number.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// A description of what made the input invalid.
        message: String,
    },

    /// No tier of the rate schedule matched the given hour count.
    ///
    /// A validated schedule covers every non-negative hour count, so this
    /// signals an internal-consistency fault rather than a bad request.
    #[error("No rate tier covers {hours} hours; the rate schedule is misconfigured")]
    OutOfRange {
        /// The hour count that matched no tier.
        hours: i64,
    },

    /// A rate schedule failed validation.
    #[error("Invalid rate schedule: {message}")]
    InvalidRateSchedule {
        /// A description of the validation failure.
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
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
