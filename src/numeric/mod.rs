// ============================================================================
// Numeric Module
// Arbitrary-precision fixed-point numbers in a caller-chosen radix
// ============================================================================
//
// This module provides:
// - FixedPoint: signed digit-array number with an explicit decimal point
// - NumericError: Error types for arithmetic operations
// - Digit and radix bounds shared by the arithmetic engine
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - Radix is a runtime parameter, never stored in the number

mod errors;
mod fixed_point;

pub use errors::{NumericError, NumericResult};
pub use fixed_point::{FixedPoint, Sign};
pub(crate) use fixed_point::DigitBuf;

/// One digit of a number, always in `[0, base - 1]`.
pub type Digit = u16;

/// Smallest supported radix.
pub const MIN_BASE: u32 = 2;

/// Largest supported radix. Every digit then fits a `u16` and every
/// intermediate of the quotient-digit estimate fits a `u64`.
pub const MAX_BASE: u32 = 1 << 16;

/// Reject radixes outside `MIN_BASE..=MAX_BASE`.
#[inline]
pub fn check_base(base: u32) -> NumericResult<()> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(NumericError::InvalidBase)
    }
}
