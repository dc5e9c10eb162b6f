// ============================================================================
// Addition and Subtraction
// Signed-magnitude add/sub of two fixed-point numbers, exact at the larger
// of the two scales
// ============================================================================

use super::digits::{add_window, alloc_digits, sub_window};
use crate::numeric::{DigitBuf, FixedPoint, NumericResult, Sign};
use std::cmp::Ordering;

/// Digits of `x` laid out with `int_len` integer and `frac_len` fractional
/// digits; missing positions are zero.
fn aligned(x: &FixedPoint, int_len: usize, frac_len: usize) -> NumericResult<DigitBuf> {
    debug_assert!(int_len >= x.integer_digits() && frac_len >= x.fractional_digits());
    let mut buf = alloc_digits(int_len + frac_len)?;
    let start = int_len - x.integer_digits();
    buf[start..start + x.len()].copy_from_slice(x.digits());
    Ok(buf)
}

/// `a + b` in `base`.
///
/// # Errors
/// - `InvalidBase` if `base` is outside the supported range
/// - `InvalidDigit` if an operand has a digit not below `base`
/// - `AllocationFailure` if a digit buffer cannot be reserved
pub fn add(a: &FixedPoint, b: &FixedPoint, base: u32) -> NumericResult<FixedPoint> {
    a.check_radix(base)?;
    b.check_radix(base)?;
    combine(a, b, b.sign(), base)
}

/// `a - b` in `base`.
///
/// # Errors
/// - `InvalidBase` if `base` is outside the supported range
/// - `InvalidDigit` if an operand has a digit not below `base`
/// - `AllocationFailure` if a digit buffer cannot be reserved
pub fn sub(a: &FixedPoint, b: &FixedPoint, base: u32) -> NumericResult<FixedPoint> {
    a.check_radix(base)?;
    b.check_radix(base)?;
    let b_sign = if b.is_zero() {
        Sign::Positive
    } else {
        b.sign().flip()
    };
    combine(a, b, b_sign, base)
}

/// `a + (b_sign)|b|`
fn combine(a: &FixedPoint, b: &FixedPoint, b_sign: Sign, base: u32) -> NumericResult<FixedPoint> {
    let int_len = a.integer_digits().max(b.integer_digits());
    let frac_len = a.fractional_digits().max(b.fractional_digits());

    if a.sign() == b_sign {
        // One extra leading slot takes the final carry.
        let mut sum = aligned(a, int_len + 1, frac_len)?;
        let addend = aligned(b, int_len, frac_len)?;
        let carry = add_window(&mut sum, &addend, base);
        debug_assert!(!carry);
        return FixedPoint::from_buffer(sum, int_len + 1, b_sign);
    }

    let (larger, larger_sign, smaller) = match a.cmp_magnitude(b) {
        Ordering::Less => (b, b_sign, a),
        _ => (a, a.sign(), b),
    };
    let mut difference = aligned(larger, int_len, frac_len)?;
    let subtrahend = aligned(smaller, int_len, frac_len)?;
    let borrow = sub_window(&mut difference, &subtrahend, base);
    debug_assert!(!borrow);
    FixedPoint::from_buffer(difference, int_len, larger_sign)
}
