// ============================================================================
// Digit-Array Primitives
// Short multiplication and windowed add/subtract over most-significant-first
// digit buffers in an arbitrary radix
// ============================================================================
//
// Aliasing rules:
// - `short_mul` reads `src` and writes a distinct `dst`
// - `short_mul_assign` rewrites its buffer in place
// - `sub_window` / `add_window` mutate the window argument only; the operand
//   slice is read-only
//
// None of the primitives allocate. Callers guarantee buffer sizes; the debug
// assertions document them.

use crate::numeric::{Digit, DigitBuf, NumericResult};

/// Allocate a zero-filled digit buffer of exactly `len` digits.
///
/// # Errors
/// Returns `AllocationFailure` instead of aborting when the reservation fails.
pub(crate) fn alloc_digits(len: usize) -> NumericResult<DigitBuf> {
    let mut buf = DigitBuf::new();
    buf.try_reserve_exact(len)?;
    buf.resize(len, 0);
    Ok(buf)
}

#[inline(always)]
fn add_digit(a: Digit, b: Digit, carry: bool, base: u32) -> (Digit, bool) {
    let sum = u32::from(a) + u32::from(b) + u32::from(carry);
    if sum >= base {
        ((sum - base) as Digit, true)
    } else {
        (sum as Digit, false)
    }
}

#[inline(always)]
fn sub_digit(a: Digit, b: Digit, borrow: bool, base: u32) -> (Digit, bool) {
    let a = u32::from(a);
    let sub = u32::from(b) + u32::from(borrow);
    if a >= sub {
        ((a - sub) as Digit, false)
    } else {
        ((a + base - sub) as Digit, true)
    }
}

/// Multiply `buf` by a single digit in place and return the carry out of the
/// most-significant position.
///
/// A buffer whose first slot is reserved for overflow is handled by passing
/// the slice after that slot and storing the returned carry into it.
pub(crate) fn short_mul_assign(buf: &mut [Digit], factor: Digit, base: u32) -> Digit {
    match factor {
        0 => {
            buf.fill(0);
            0
        }
        1 => 0,
        _ => {
            let base = u64::from(base);
            let factor = u64::from(factor);
            let mut carry = 0u64;
            for d in buf.iter_mut().rev() {
                let value = u64::from(*d) * factor + carry;
                *d = (value % base) as Digit;
                carry = value / base;
            }
            carry as Digit
        }
    }
}

/// `dst = src * factor`, where `dst` is one digit longer than `src` and
/// `dst[0]` receives the final carry.
pub(crate) fn short_mul(src: &[Digit], factor: Digit, dst: &mut [Digit], base: u32) {
    debug_assert_eq!(dst.len(), src.len() + 1);
    dst[1..].copy_from_slice(src);
    dst[0] = short_mul_assign(&mut dst[1..], factor, base);
}

/// `window -= v`, with `v` right-aligned against the end of `window`.
///
/// The borrow propagates through the leading digits of `window` not covered
/// by `v`. Returns true when a borrow leaves the most-significant digit, i.e.
/// the window held a smaller value than `v`; the window then holds the
/// radix complement of the difference.
pub(crate) fn sub_window(window: &mut [Digit], v: &[Digit], base: u32) -> bool {
    debug_assert!(v.len() <= window.len());
    let (head, tail) = window.split_at_mut(window.len() - v.len());

    let mut borrow = false;
    for (slot, &d) in tail.iter_mut().rev().zip(v.iter().rev()) {
        (*slot, borrow) = sub_digit(*slot, d, borrow, base);
    }
    for slot in head.iter_mut().rev() {
        if !borrow {
            break;
        }
        (*slot, borrow) = sub_digit(*slot, 0, borrow, base);
    }
    borrow
}

/// `window += v`, with `v` right-aligned against the end of `window`.
///
/// Returns the carry out of the most-significant digit.
pub(crate) fn add_window(window: &mut [Digit], v: &[Digit], base: u32) -> bool {
    debug_assert!(v.len() <= window.len());
    let (head, tail) = window.split_at_mut(window.len() - v.len());

    let mut carry = false;
    for (slot, &d) in tail.iter_mut().rev().zip(v.iter().rev()) {
        (*slot, carry) = add_digit(*slot, d, carry, base);
    }
    for slot in head.iter_mut().rev() {
        if !carry {
            break;
        }
        (*slot, carry) = add_digit(*slot, 0, carry, base);
    }
    carry
}
