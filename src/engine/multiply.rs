// ============================================================================
// Multiplication
// Exact schoolbook product built from short multiplication and windowed add
// ============================================================================

use super::digits::{add_window, alloc_digits, short_mul};
use crate::numeric::{FixedPoint, NumericResult, Sign};

/// `a * b` in `base`, exact: the product keeps `frac(a) + frac(b)`
/// fractional digits.
///
/// # Errors
/// - `InvalidBase` if `base` is outside the supported range
/// - `InvalidDigit` if an operand has a digit not below `base`
/// - `AllocationFailure` if a digit buffer cannot be reserved
pub fn mul(a: &FixedPoint, b: &FixedPoint, base: u32) -> NumericResult<FixedPoint> {
    a.check_radix(base)?;
    b.check_radix(base)?;
    let (x, y) = (a.digits(), b.digits());

    let mut product = alloc_digits(x.len() + y.len())?;
    let mut partial = alloc_digits(x.len() + 1)?;

    // Row k is x * y[k], aligned `shift` digits from the right.
    for (shift, &digit) in y.iter().rev().enumerate() {
        if digit == 0 {
            continue;
        }
        short_mul(x, digit, &mut partial, base);
        let end = product.len() - shift;
        let carry = add_window(&mut product[..end], &partial, base);
        debug_assert!(!carry);
    }

    let int_len = a.integer_digits() + b.integer_digits();
    FixedPoint::from_buffer(product, int_len, Sign::of_operands(a, b))
}
