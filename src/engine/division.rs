// ============================================================================
// Division Driver
// Sizes the quotient, builds the scratch buffers and runs normalization and
// the Algorithm D loop
// ============================================================================

use super::digits::alloc_digits;
use super::long_division::produce_quotient;
use super::normalize::normalize;
use crate::interfaces::{DivisionEvent, DivisionObserver, NoOpObserver};
use crate::numeric::{Digit, FixedPoint, NumericError, NumericResult, Sign};

fn strip_leading_zeros(digits: &[Digit]) -> &[Digit] {
    let zeros = digits.iter().take_while(|&&d| d == 0).count();
    &digits[zeros..]
}

/// Sizing decisions for one division, fixed before any digit is produced.
///
/// The quotient is computed as the integer division `U / V` where `V` is the
/// denominator's significant digits and `U` is the numerator's significant
/// digits shifted so that exactly `scale` fractional digits come out:
/// `U = numerator * base^(frac(den) + scale - frac(num))`, truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QuotientPlan {
    /// Significant numerator digits copied into the scratch numerator
    copied: usize,
    /// Length of `U` (copied digits plus appended zeros)
    dividend_len: usize,
    /// Scratch remainder: carry slot, `U`, zero guard
    remainder_len: usize,
    /// Significant denominator digits (`n`)
    divisor_len: usize,
    /// Iterations of the digit loop (`dividend_len - divisor_len + 1`)
    steps: usize,
    /// Total quotient digits, at least `scale + 1`
    total: usize,
}

impl QuotientPlan {
    /// Returns `None` when `U` is shorter than `V`, i.e. the quotient is zero
    /// at the requested scale.
    fn new(
        significant: usize,
        numerator_frac: usize,
        divisor_len: usize,
        denominator_frac: usize,
        scale: usize,
    ) -> NumericResult<Option<Self>> {
        let wanted_frac = denominator_frac
            .checked_add(scale)
            .ok_or(NumericError::AllocationFailure)?;

        let (copied, dividend_len) = if wanted_frac >= numerator_frac {
            let appended = wanted_frac - numerator_frac;
            let len = significant
                .checked_add(appended)
                .ok_or(NumericError::AllocationFailure)?;
            (significant, len)
        } else {
            let kept = significant.saturating_sub(numerator_frac - wanted_frac);
            (kept, kept)
        };

        if dividend_len < divisor_len {
            return Ok(None);
        }

        let remainder_len = dividend_len
            .checked_add(2)
            .ok_or(NumericError::AllocationFailure)?;
        let min_total = scale
            .checked_add(1)
            .ok_or(NumericError::AllocationFailure)?;

        let steps = dividend_len - divisor_len + 1;
        Ok(Some(Self {
            copied,
            dividend_len,
            remainder_len,
            divisor_len,
            steps,
            total: steps.max(min_total),
        }))
    }
}

/// Divide `numerator` by `denominator` in `base`, keeping exactly `scale`
/// fractional digits.
///
/// The quotient is truncated toward zero, never rounded. Its sign follows the
/// usual rule: positive when the operand signs agree or the quotient is zero.
///
/// # Errors
/// - `DivisionByZero` if the denominator is zero
/// - `InvalidBase` if `base` is outside the supported range
/// - `InvalidDigit` if an operand has a digit not below `base`
/// - `AllocationFailure` if a digit buffer cannot be reserved
///
/// # Example
/// ```
/// use arbitrary_division::engine::divide;
/// use arbitrary_division::numeric::FixedPoint;
///
/// let a: FixedPoint = "7".parse().unwrap();
/// let b: FixedPoint = "2".parse().unwrap();
/// assert_eq!(divide(&a, &b, 10, 2).unwrap().to_string(), "3.50");
/// ```
pub fn divide(
    numerator: &FixedPoint,
    denominator: &FixedPoint,
    base: u32,
    scale: usize,
) -> NumericResult<FixedPoint> {
    divide_observed(numerator, denominator, base, scale, &mut NoOpObserver)
}

/// Divide and store the quotient in `result`, dropping its previous value.
///
/// On error `result` is left unchanged.
pub fn divide_into(
    numerator: &FixedPoint,
    denominator: &FixedPoint,
    result: &mut FixedPoint,
    base: u32,
    scale: usize,
) -> NumericResult<()> {
    *result = divide(numerator, denominator, base, scale)?;
    Ok(())
}

/// [`divide`] with every normalization and quotient digit reported to
/// `observer`.
pub fn divide_observed<O: DivisionObserver>(
    numerator: &FixedPoint,
    denominator: &FixedPoint,
    base: u32,
    scale: usize,
    observer: &mut O,
) -> NumericResult<FixedPoint> {
    numerator.check_radix(base)?;
    denominator.check_radix(base)?;

    let divisor = strip_leading_zeros(denominator.digits());
    if divisor.is_empty() {
        tracing::debug!(%numerator, "division rejected: zero denominator");
        return Err(NumericError::DivisionByZero);
    }
    let dividend = strip_leading_zeros(numerator.digits());

    let plan = QuotientPlan::new(
        dividend.len(),
        numerator.fractional_digits(),
        divisor.len(),
        denominator.fractional_digits(),
        scale,
    )?;
    let Some(plan) = plan else {
        tracing::debug!(
            %numerator,
            %denominator,
            scale,
            "quotient is zero at requested scale"
        );
        observer.on_event(DivisionEvent::OutOfScale { scale });
        return FixedPoint::zero_with_scale(scale);
    };

    tracing::trace!(
        steps = plan.steps,
        divisor_digits = plan.divisor_len,
        total_digits = plan.total,
        base,
        "running long division"
    );

    // Scratch buffers, released when this function returns.
    let n = plan.divisor_len;
    let mut remainder = alloc_digits(plan.remainder_len)?;
    remainder[1..=plan.copied].copy_from_slice(&dividend[..plan.copied]);
    let mut scaled_divisor = alloc_digits(n + 1)?;
    scaled_divisor[..n].copy_from_slice(divisor);
    let mut product = alloc_digits(n + 1)?;
    let mut quotient = alloc_digits(plan.total)?;

    let factor = normalize(
        &mut remainder[..=plan.dividend_len],
        &mut scaled_divisor[..n],
        base,
    );
    if factor != 1 {
        tracing::trace!(factor, divisor_lead = scaled_divisor[0], "normalized operands");
        observer.on_event(DivisionEvent::Normalized {
            factor,
            divisor_lead: scaled_divisor[0],
        });
    }

    let padding = plan.total - plan.steps;
    produce_quotient(
        &mut remainder,
        &scaled_divisor,
        &mut product,
        &mut quotient[padding..],
        base,
        observer,
    );

    let sign = Sign::of_operands(numerator, denominator);
    FixedPoint::from_buffer(quotient, plan.total - scale, sign)
}
