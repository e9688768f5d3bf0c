//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    /// A record failed structural validation. `row` is the 1-based position
    /// of the record within the batch.
    #[error("record {row}: invalid {field}: {message}")]
    MalformedRecord {
        row: usize,
        field: &'static str,
        message: String,
    },

    #[error("threshold must be a positive, finite number (got {0})")]
    InvalidThreshold(f64),

    #[error("required column '{0}' not found in CSV header")]
    MissingColumn(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a malformed-record error
    pub fn malformed(row: usize, field: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            row,
            field,
            message: message.into(),
        }
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_record_names_row_and_field() {
        let err = Error::malformed(3, "amount", "not a number");
        assert_eq!(err.to_string(), "record 3: invalid amount: not a number");
    }

    #[test]
    fn test_invalid_threshold_message() {
        let err = Error::InvalidThreshold(0.0);
        assert!(err.to_string().contains("positive"));
        assert!(err.to_string().contains('0'));
    }
}
