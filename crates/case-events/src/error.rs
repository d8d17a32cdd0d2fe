//! Input validation errors.
//!
//! Raised by record sources when a row violates the record schema. These are
//! precondition failures of the data source and are never recovered from.

use std::fmt;

/// A record source produced data the timeline cannot use.
///
/// Row numbers are 1-based and count data rows only (the header is row 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// A required column is absent from the header
    MissingColumn(String),
    /// A date cell matched none of the accepted formats
    UnparseableDate { row: usize, value: String },
    /// A count cell is not a non-negative integer
    NonNumericCount {
        row: usize,
        field: String,
        value: String,
    },
    /// The row itself could not be read (ragged row, bad encoding)
    MalformedRow { row: usize, reason: String },
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::MissingColumn(name) => write!(f, "missing column: '{}'", name),
            InvalidInput::UnparseableDate { row, value } => {
                write!(f, "row {}: unparseable date '{}'", row, value)
            }
            InvalidInput::NonNumericCount { row, field, value } => {
                write!(f, "row {}: {} is not a non-negative integer: '{}'", row, field, value)
            }
            InvalidInput::MalformedRow { row, reason } => {
                write!(f, "row {}: malformed row: {}", row, reason)
            }
        }
    }
}

impl std::error::Error for InvalidInput {}
