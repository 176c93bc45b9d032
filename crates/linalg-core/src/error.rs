use std::error::Error;
use std::fmt;

/// Error type shared by every fallible operation in the crate.
#[derive(Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Operand shapes are incompatible for the requested operation.
    Dimension {
        op: &'static str,
        expected: String,
        actual: String,
    },
    /// A construction parameter or parsed input is invalid.
    Value(String),
}

impl LinalgError {
    pub fn dimension(op: &'static str, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        LinalgError::Dimension {
            op,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn value(msg: impl Into<String>) -> Self {
        LinalgError::Value(msg.into())
    }

    pub fn is_dimension(&self) -> bool {
        matches!(self, LinalgError::Dimension { .. })
    }

    pub fn is_value(&self) -> bool {
        matches!(self, LinalgError::Value(_))
    }
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinalgError::Dimension { op, expected, actual } => write!(
                f,
                "dimension mismatch in {}: expected {}, got {}",
                op, expected, actual
            ),
            LinalgError::Value(msg) => write!(f, "invalid value: {}", msg),
        }
    }
}

impl Error for LinalgError {}

pub type Result<T> = std::result::Result<T, LinalgError>;
