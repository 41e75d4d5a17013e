//! Error types for the climate-anomaly library.

use thiserror::Error;

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, ClimateError>;

/// Errors that can occur while preparing, analysing or scoring data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClimateError {
    /// A required column or field is absent.
    #[error("missing required column: {column}")]
    Schema { column: String },

    /// A cell could not be turned into the value it should hold.
    #[error("cannot parse {field} value {value:?} at row {row}")]
    Parse {
        field: String,
        value: String,
        row: usize,
    },

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Computation error (e.g., numerical issues).
    #[error("computation error: {0}")]
    ComputationError(String),

    /// Reading or writing tabular data failed.
    #[error("i/o error: {0}")]
    Io(String),
}

impl ClimateError {
    pub(crate) fn schema(column: &str) -> Self {
        Self::Schema {
            column: column.to_string(),
        }
    }

    pub(crate) fn parse(field: &str, value: &str, row: usize) -> Self {
        Self::Parse {
            field: field.to_string(),
            value: value.to_string(),
            row,
        }
    }
}

impl From<csv::Error> for ClimateError {
    fn from(err: csv::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<std::io::Error> for ClimateError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        let err = ClimateError::schema("city");
        assert_eq!(err.to_string(), "missing required column: city");

        let err = ClimateError::InsufficientData { needed: 2, got: 1 };
        assert_eq!(
            err.to_string(),
            "insufficient data: need at least 2, got 1"
        );

        let err = ClimateError::parse("mileage", "n/a", 3);
        assert_eq!(
            err.to_string(),
            "cannot parse mileage value \"n/a\" at row 3"
        );

        let err = ClimateError::InvalidParameter("window must be at least 2".to_string());
        assert_eq!(err.to_string(), "invalid parameter: window must be at least 2");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: ClimateError = io.into();
        assert!(matches!(err, ClimateError::Io(msg) if msg.contains("no such file")));
    }

    #[test]
    fn errors_are_clonable_and_comparable() {
        let err1 = ClimateError::InsufficientData { needed: 1, got: 0 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
