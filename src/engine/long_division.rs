// ============================================================================
// Algorithm D
// Produces one quotient digit per iteration from a normalized remainder
// window using a two-digit trial estimate, a three-digit refinement test,
// multiply-subtract and an occasional add-back
// ============================================================================

use super::digits::{add_window, short_mul, sub_window};
use crate::interfaces::{DivisionEvent, DivisionObserver};
use crate::numeric::Digit;

/// Run the digit loop over normalized scratch buffers.
///
/// Buffer layout, with `n` divisor digits and `quotient.len()` steps:
/// - `remainder`: reserved carry slot, the `quotient.len() + n - 1` digits of
///   the dividend, then one zero guard slot (so `remainder[j + 2]` exists
///   when `n == 1`)
/// - `divisor`: the `n` normalized divisor digits followed by one zero guard
///   slot (standing in for `divisor[1]` when `n == 1`)
/// - `product`: `n + 1` digits of scratch for `divisor * digit`
///
/// The loop runs exactly `quotient.len()` times. On return `remainder` holds
/// the normalized remainder, which callers discard.
pub(crate) fn produce_quotient<O: DivisionObserver>(
    remainder: &mut [Digit],
    divisor: &[Digit],
    product: &mut [Digit],
    quotient: &mut [Digit],
    base: u32,
    observer: &mut O,
) {
    let n = divisor.len() - 1;
    let divisor_digits = &divisor[..n];
    debug_assert!(n >= 1);
    debug_assert_eq!(remainder.len(), quotient.len() + n + 1);
    debug_assert_eq!(product.len(), n + 1);

    let b = u64::from(base);
    let v0 = u64::from(divisor[0]);
    let v1 = u64::from(divisor[1]);

    for (j, slot) in quotient.iter_mut().enumerate() {
        let u0 = u64::from(remainder[j]);
        let u1 = u64::from(remainder[j + 1]);
        let u2 = u64::from(remainder[j + 2]);
        let top = u0 * b + u1;
        debug_assert!(u0 <= v0);

        // D3: estimate from the leading two digits. When u0 == v0 the true
        // digit is base - 1 or less and top / v0 could leave the digit range.
        let mut qhat = if u0 == v0 { b - 1 } else { top / v0 };
        let trial = qhat;

        // Re-test after every decrement; normalization bounds this to two.
        let mut refinements = 0u8;
        while v1 * qhat > (top - v0 * qhat) * b + u2 {
            qhat -= 1;
            refinements += 1;
        }
        debug_assert!(refinements <= 2);

        // D4: multiply and subtract
        let mut added_back = false;
        if qhat != 0 {
            let window = &mut remainder[j..=j + n];
            short_mul(divisor_digits, qhat as Digit, product, base);
            if sub_window(window, product, base) {
                // D6: the estimate was one too large; the carry out of the
                // add-back cancels the earlier borrow and is dropped.
                qhat -= 1;
                added_back = true;
                let _ = add_window(window, divisor_digits, base);
            }
        }

        *slot = qhat as Digit;
        observer.on_event(DivisionEvent::DigitProduced {
            position: j,
            trial: trial as Digit,
            refinements,
            added_back,
            digit: *slot,
        });
    }
}
