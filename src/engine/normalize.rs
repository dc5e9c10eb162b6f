// ============================================================================
// Normalizer
// Scales numerator and denominator so the quotient-digit estimate of the
// long-division loop is never more than two too large
// ============================================================================

use super::digits::short_mul_assign;
use crate::numeric::Digit;

/// `floor(base / (lead + 1))` for a divisor whose leading digit is `lead`.
#[inline]
pub(crate) fn normalization_factor(lead: Digit, base: u32) -> Digit {
    debug_assert!(lead != 0);
    (base / (u32::from(lead) + 1)) as Digit
}

/// Multiply the scratch numerator and divisor by the normalization factor so
/// that `divisor[0] >= base / 2`, and return the factor.
///
/// `numerator[0]` is the reserved carry slot: it must be zero on entry and
/// receives the overflow of the numerator multiplication. The divisor never
/// overflows. When the factor is 1 both buffers are left untouched.
pub(crate) fn normalize(numerator: &mut [Digit], divisor: &mut [Digit], base: u32) -> Digit {
    debug_assert_eq!(numerator[0], 0);
    let factor = normalization_factor(divisor[0], base);
    if factor != 1 {
        numerator[0] = short_mul_assign(&mut numerator[1..], factor, base);
        let overflow = short_mul_assign(divisor, factor, base);
        debug_assert_eq!(overflow, 0);
    }
    debug_assert!(u32::from(divisor[0]) >= base / 2);
    factor
}
