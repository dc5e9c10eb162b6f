// ============================================================================
// Numeric Errors
// Error types for arbitrary-precision arithmetic operations
// ============================================================================

use std::fmt;

/// Errors that can occur during fixed-point arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Attempted division (or modulus) by a zero-valued denominator
    DivisionByZero,
    /// A digit buffer could not be allocated
    AllocationFailure,
    /// Radix outside the supported range
    InvalidBase,
    /// A digit is not smaller than the radix it is used with
    InvalidDigit,
    /// Input string or layout is invalid
    InvalidInput,
    /// Value does not fit the target representation
    Overflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::AllocationFailure => {
                write!(f, "allocation failure: could not reserve digit buffer")
            },
            NumericError::InvalidBase => write!(
                f,
                "invalid base: radix must lie between {} and {}",
                super::MIN_BASE,
                super::MAX_BASE
            ),
            NumericError::InvalidDigit => write!(f, "invalid digit: digit is not below the radix"),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::Overflow => {
                write!(f, "overflow: value does not fit the target representation")
            },
        }
    }
}

impl std::error::Error for NumericError {}

impl From<smallvec::CollectionAllocErr> for NumericError {
    fn from(_: smallvec::CollectionAllocErr) -> Self {
        NumericError::AllocationFailure
    }
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
