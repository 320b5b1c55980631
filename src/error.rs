//! Error types for the currency input engine.

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, FormatterError>;

/// Errors that can occur while configuring or driving the engine.
#[derive(Error, Debug)]
pub enum FormatterError {
    /// Decimal and grouping separators must be distinct characters.
    ///
    /// Raised at configuration time; the previous configuration stays active.
    #[error("decimal and grouping separators must differ, both are {0:?}")]
    SeparatorClash(char),

    /// Failed to open or read the edit script file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid edit script record
    #[error("Invalid edit operation at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: currency-input <script.csv>")]
    MissingArgument,
}
