// ============================================================================
// Modulus
// a mod b = a - b * (a / b), with the quotient truncated at `scale`
// ============================================================================

use super::additive::sub;
use super::division::divide;
use super::multiply::mul;
use crate::numeric::{FixedPoint, NumericResult};

/// `a - b * divide(a, b, base, scale)`, computed exactly.
///
/// The quotient truncates toward zero, so a nonzero remainder carries the
/// sign of `a`. The result has `max(frac(a), frac(b) + scale)` fractional
/// digits.
///
/// # Errors
/// Fails exactly when [`divide`] fails, with the same error.
pub fn modulo(
    a: &FixedPoint,
    b: &FixedPoint,
    base: u32,
    scale: usize,
) -> NumericResult<FixedPoint> {
    let quotient = divide(a, b, base, scale)?;
    let product = mul(b, &quotient, base)?;
    sub(a, &product, base)
}
