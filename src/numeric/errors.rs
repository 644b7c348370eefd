// ============================================================================
// Money Errors
// Error types for fixed-point money operations
// ============================================================================

use thiserror::Error;

/// Errors that can occur during money arithmetic and allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum MoneyError {
    /// Argument rejected before any arithmetic was attempted
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Two operands carry different precisions
    #[error("precision mismatch: cannot combine precision {left} with precision {right}")]
    PrecisionMismatch { left: u32, right: u32 },

    /// Precision outside the range an i64 scaled amount can represent
    #[error("precision out of range: {0} (maximum is {max})", max = super::MAX_PRECISION)]
    PrecisionOutOfRange(u32),

    /// Result does not fit the scaled i64 representation
    #[error("arithmetic overflow: result exceeded representable range")]
    Overflow,
}

impl MoneyError {
    /// Shorthand for `MoneyError::InvalidArgument` with any string-like message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        MoneyError::InvalidArgument(message.into())
    }
}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            MoneyError::Overflow.to_string(),
            "arithmetic overflow: result exceeded representable range"
        );
        assert_eq!(
            MoneyError::invalid_argument("division by zero").to_string(),
            "invalid argument: division by zero"
        );
        assert_eq!(
            MoneyError::PrecisionMismatch { left: 2, right: 3 }.to_string(),
            "precision mismatch: cannot combine precision 2 with precision 3"
        );
        assert_eq!(
            MoneyError::PrecisionOutOfRange(19).to_string(),
            "precision out of range: 19 (maximum is 18)"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(MoneyError::Overflow, MoneyError::Overflow);
        assert_ne!(
            MoneyError::Overflow,
            MoneyError::invalid_argument("division by zero")
        );
    }
}
