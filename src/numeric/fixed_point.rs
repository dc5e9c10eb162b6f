// ============================================================================
// Fixed-Point Number
// Arbitrary-length signed digit arrays with an explicit decimal point
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::{check_base, Digit};
use crate::engine::digits::alloc_digits;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt::{self, Write};
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Digits kept inline before spilling to the heap.
pub(crate) const INLINE_DIGITS: usize = 32;

/// Backing storage for a digit array, most-significant digit first.
pub(crate) type DigitBuf = SmallVec<[Digit; INLINE_DIGITS]>;

// ============================================================================
// Sign
// ============================================================================

/// Sign of a [`FixedPoint`]. Only meaningful for nonzero values; zero is
/// always kept `Positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    /// Sign of a product or quotient of `a` and `b`.
    ///
    /// Same signs give `Positive`, differing signs give `Negative`, and a zero
    /// operand always gives `Positive`.
    #[inline]
    pub fn of_operands(a: &FixedPoint, b: &FixedPoint) -> Self {
        if a.is_zero() || b.is_zero() || a.sign == b.sign {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }

    /// The opposite sign.
    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

// ============================================================================
// Fixed-Point Number
// ============================================================================

/// Arbitrary-precision fixed-point number.
///
/// Stores digits most-significant first together with the count of digits
/// left of the point (`integer_digits`). The radix is not part of the value:
/// every arithmetic operation receives it explicitly.
///
/// Values are kept canonical: at least one integer digit, no leading zeros in
/// the integer part beyond a single `0`, and zero is never negative. Because
/// of that the derived equality is numeric equality for values with the same
/// number of fractional digits.
///
/// # Example
/// ```
/// use arbitrary_division::numeric::FixedPoint;
///
/// let x: FixedPoint = "-12.50".parse().unwrap();
/// assert_eq!(x.integer_digits(), 2);
/// assert_eq!(x.fractional_digits(), 2);
/// assert_eq!(x.to_string(), "-12.50");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "FixedPointRepr")
)]
pub struct FixedPoint {
    digits: DigitBuf,
    int_len: usize,
    sign: Sign,
}

/// Reject digits that are not below `base`.
fn check_digits(digits: &[Digit], base: u32) -> NumericResult<()> {
    if digits.iter().any(|&d| u32::from(d) >= base) {
        Err(NumericError::InvalidDigit)
    } else {
        Ok(())
    }
}

/// Wire form of a [`FixedPoint`], checked before it becomes a number.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct FixedPointRepr {
    digits: DigitBuf,
    int_len: usize,
    sign: Sign,
}

#[cfg(feature = "serde")]
impl TryFrom<FixedPointRepr> for FixedPoint {
    type Error = NumericError;

    fn try_from(repr: FixedPointRepr) -> Result<Self, Self::Error> {
        if repr.digits.is_empty() || repr.int_len > repr.digits.len() {
            return Err(NumericError::InvalidInput);
        }
        Self::from_buffer(repr.digits, repr.int_len, repr.sign)
    }
}

impl FixedPoint {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Zero with no fractional digits.
    pub fn zero() -> Self {
        let mut digits = DigitBuf::new();
        digits.push(0);
        Self {
            digits,
            int_len: 1,
            sign: Sign::Positive,
        }
    }

    /// Zero with exactly `scale` fractional digits (`0.000...`).
    ///
    /// # Errors
    /// Returns `AllocationFailure` if the digit buffer cannot be reserved.
    pub fn zero_with_scale(scale: usize) -> NumericResult<Self> {
        let len = scale.checked_add(1).ok_or(NumericError::AllocationFailure)?;
        Ok(Self {
            digits: alloc_digits(len)?,
            int_len: 1,
            sign: Sign::Positive,
        })
    }

    /// One with no fractional digits.
    pub fn one() -> Self {
        let mut one = Self::zero();
        one.digits[0] = 1;
        one
    }

    /// Create from a digit slice in the given radix.
    ///
    /// `integer_digits` counts the digits left of the point and may be zero
    /// (a pure fraction). Leading zeros are trimmed.
    ///
    /// # Errors
    /// - `InvalidBase` if `base` is outside the supported range
    /// - `InvalidDigit` if any digit is not below `base`
    /// - `InvalidInput` if `integer_digits` exceeds the digit count
    pub fn from_digits(
        digits: &[Digit],
        integer_digits: usize,
        sign: Sign,
        base: u32,
    ) -> NumericResult<Self> {
        check_base(base)?;
        if integer_digits > digits.len() {
            return Err(NumericError::InvalidInput);
        }
        check_digits(digits, base)?;

        let mut buf = alloc_digits(0)?;
        buf.try_reserve_exact(digits.len() + 1)?;
        buf.extend_from_slice(digits);
        Self::from_buffer(buf, integer_digits, sign)
    }

    /// Build from an owned buffer produced by the arithmetic engine and bring
    /// it into canonical form.
    pub(crate) fn from_buffer(
        mut digits: DigitBuf,
        int_len: usize,
        sign: Sign,
    ) -> NumericResult<Self> {
        debug_assert!(int_len <= digits.len());
        let mut int_len = int_len;
        if int_len == 0 {
            digits.try_reserve(1)?;
            digits.insert(0, 0);
            int_len = 1;
        }

        let mut number = Self {
            digits,
            int_len,
            sign,
        };
        number.trim_leading_zeros();
        Ok(number)
    }

    /// Parse a number written in `base` (2 to 36).
    ///
    /// Accepts an optional `+`/`-`, digits, and at most one `.`. Either side of
    /// the point may be empty but not both. Letters are case-insensitive.
    ///
    /// # Examples
    /// - `("ff.8", 16)` -> 255.5
    /// - `(".5", 10)` -> 0.5
    /// - `("-101", 2)` -> -5
    ///
    /// # Errors
    /// - `InvalidBase` if `base` is outside 2..=36
    /// - `InvalidInput` for empty input or characters that are not digits
    pub fn from_str_radix(text: &str, base: u32) -> NumericResult<Self> {
        if !(2..=36).contains(&base) {
            return Err(NumericError::InvalidBase);
        }

        let text = text.trim();
        let (sign, body) = if let Some(rest) = text.strip_prefix('-') {
            (Sign::Negative, rest)
        } else if let Some(rest) = text.strip_prefix('+') {
            (Sign::Positive, rest)
        } else {
            (Sign::Positive, text)
        };

        let (int_str, frac_str) = body.split_once('.').unwrap_or((body, ""));
        if int_str.is_empty() && frac_str.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let mut digits = alloc_digits(0)?;
        digits.try_reserve_exact(int_str.len() + frac_str.len() + 1)?;

        for c in int_str.chars().chain(frac_str.chars()) {
            let d = c.to_digit(base).ok_or(NumericError::InvalidInput)?;
            digits.push(d as Digit);
        }

        let int_len = digits.len() - frac_str.len();
        Self::from_buffer(digits, int_len, sign)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// All digits, most-significant first.
    #[inline]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Total digit count (integer plus fractional).
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false: a number carries at least one digit.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Digits left of the point.
    #[inline]
    pub fn integer_digits(&self) -> usize {
        self.int_len
    }

    /// Digits right of the point.
    #[inline]
    pub fn fractional_digits(&self) -> usize {
        self.digits.len() - self.int_len
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Check if every digit is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// Check if value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative && !self.is_zero()
    }

    /// Check that every digit is a valid digit of `base`.
    ///
    /// The radix is not stored in the number, so arithmetic runs this on its
    /// operands before touching the digits.
    ///
    /// # Errors
    /// - `InvalidBase` if `base` is outside the supported range
    /// - `InvalidDigit` if any digit is not below `base`
    pub fn check_radix(&self, base: u32) -> NumericResult<()> {
        check_base(base)?;
        check_digits(&self.digits, base)
    }

    /// Get absolute value.
    pub fn abs(&self) -> Self {
        let mut abs = self.clone();
        abs.sign = Sign::Positive;
        abs
    }

    // ========================================================================
    // Canonical Form
    // ========================================================================

    /// Drop superfluous leading zeros from the integer part, keeping one
    /// integer digit, and clear the sign of zero.
    pub fn trim_leading_zeros(&mut self) {
        let zeros = self.digits[..self.int_len.saturating_sub(1)]
            .iter()
            .take_while(|&&d| d == 0)
            .count();
        if zeros > 0 {
            self.digits.drain(..zeros);
            self.int_len -= zeros;
        }
        if self.is_zero() {
            self.sign = Sign::Positive;
        }
    }

    /// Copy with exactly `scale` fractional digits.
    ///
    /// Extra fractional digits are truncated (never rounded); missing ones are
    /// zero-filled.
    ///
    /// # Errors
    /// Returns `AllocationFailure` if the digit buffer cannot be reserved.
    pub fn rescale(&self, scale: usize) -> NumericResult<Self> {
        let mut digits = alloc_digits(self.int_len + scale)?;
        let kept = digits.len().min(self.digits.len());
        digits[..kept].copy_from_slice(&self.digits[..kept]);
        Self::from_buffer(digits, self.int_len, self.sign)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare absolute values, aligned on the point.
    ///
    /// Independent of layout: `1.50` and `01.5` compare equal.
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        let a_int = self.significant_integer_digits();
        let b_int = other.significant_integer_digits();

        a_int.cmp(&b_int).then_with(|| {
            let a = &self.digits[self.int_len - a_int..];
            let b = &other.digits[other.int_len - b_int..];
            (0..a.len().max(b.len()))
                .map(|k| {
                    let x = a.get(k).copied().unwrap_or(0);
                    let y = b.get(k).copied().unwrap_or(0);
                    x.cmp(&y)
                })
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }

    fn significant_integer_digits(&self) -> usize {
        let zeros = self.digits[..self.int_len]
            .iter()
            .take_while(|&&d| d == 0)
            .count();
        self.int_len - zeros
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for FixedPoint {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl Neg for FixedPoint {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        if !self.is_zero() {
            self.sign = self.sign.flip();
        }
        self
    }
}

impl Neg for &FixedPoint {
    type Output = FixedPoint;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

fn write_digit(f: &mut fmt::Formatter<'_>, digit: Digit) -> fmt::Result {
    match char::from_digit(u32::from(digit), 36) {
        Some(c) => f.write_char(c.to_ascii_uppercase()),
        None => write!(f, "[{}]", digit),
    }
}

/// Digits below 36 print as `0-9A-Z`; larger digits print as `[n]`.
impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_char('-')?;
        }
        for (i, &d) in self.digits.iter().enumerate() {
            if i == self.int_len {
                f.write_char('.')?;
            }
            write_digit(f, d)?;
        }
        Ok(())
    }
}

impl fmt::Debug for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FixedPoint({}, int={}, frac={})",
            self,
            self.int_len,
            self.fractional_digits()
        )
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for FixedPoint {
    type Err = NumericError;

    /// Parse a base-10 string such as `"123"`, `"-0.001"` or `".5"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl FixedPoint {
    /// Convert from rust_decimal::Decimal, keeping its scale.
    ///
    /// The result is a base-10 number.
    pub fn from_decimal(d: rust_decimal::Decimal) -> NumericResult<Self> {
        let scale = d.scale() as usize;
        let mut mantissa = d.mantissa().unsigned_abs();

        let mut reversed: SmallVec<[Digit; 64]> = SmallVec::new();
        while mantissa > 0 {
            reversed.push((mantissa % 10) as Digit);
            mantissa /= 10;
        }
        // Pad so the integer part has at least one digit.
        while reversed.len() <= scale {
            reversed.push(0);
        }

        let mut digits = alloc_digits(0)?;
        digits.try_reserve_exact(reversed.len())?;
        digits.extend(reversed.into_iter().rev());

        let int_len = digits.len() - scale;
        let sign = if d.is_sign_negative() {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Self::from_buffer(digits, int_len, sign)
    }

    /// Convert to rust_decimal::Decimal, reading the digits as base 10.
    ///
    /// # Errors
    /// - `InvalidDigit` if a digit is above 9
    /// - `Overflow` if the value or its scale exceeds what `Decimal` holds
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        let mut mantissa: i128 = 0;
        for &d in &self.digits {
            if d > 9 {
                return Err(NumericError::InvalidDigit);
            }
            mantissa = mantissa
                .checked_mul(10)
                .and_then(|m| m.checked_add(i128::from(d)))
                .ok_or(NumericError::Overflow)?;
        }
        if self.is_negative() {
            mantissa = -mantissa;
        }

        let scale = u32::try_from(self.fractional_digits()).map_err(|_| NumericError::Overflow)?;
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, scale)
            .map_err(|_| NumericError::Overflow)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(s: &str) -> FixedPoint {
        s.parse().unwrap()
    }

    #[test]
    fn test_zero_constructors() {
        let zero = FixedPoint::zero();
        assert_eq!(zero.digits(), &[0]);
        assert_eq!(zero.integer_digits(), 1);
        assert!(zero.is_zero());

        let scaled = FixedPoint::zero_with_scale(3).unwrap();
        assert_eq!(scaled.to_string(), "0.000");
        assert_eq!(scaled.len(), 4);
        assert_eq!(FixedPoint::one().to_string(), "1");
    }

    #[test]
    fn test_parse_layout() {
        let x = fp("123.456");
        assert_eq!(x.digits(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(x.integer_digits(), 3);
        assert_eq!(x.fractional_digits(), 3);
        assert_eq!(x.sign(), Sign::Positive);

        let y = fp("-0.001");
        assert!(y.is_negative());
        assert_eq!(y.digits(), &[0, 0, 0, 1]);
        assert_eq!(y.integer_digits(), 1);
    }

    #[test]
    fn test_parse_trims_leading_zeros() {
        let x = fp("000120.50");
        assert_eq!(x.to_string(), "120.50");
        assert_eq!(x.integer_digits(), 3);

        assert_eq!(fp(".5").to_string(), "0.5");
        assert_eq!(fp("5.").to_string(), "5");
        assert_eq!(fp("+7").to_string(), "7");
    }

    #[test]
    fn test_negative_zero_is_positive() {
        let z = fp("-0.00");
        assert_eq!(z.sign(), Sign::Positive);
        assert!(!z.is_negative());
        assert_eq!(z.to_string(), "0.00");
        assert_eq!((-FixedPoint::zero()).sign(), Sign::Positive);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!("".parse::<FixedPoint>(), Err(NumericError::InvalidInput));
        assert_eq!(".".parse::<FixedPoint>(), Err(NumericError::InvalidInput));
        assert_eq!("-".parse::<FixedPoint>(), Err(NumericError::InvalidInput));
        assert_eq!("1.2.3".parse::<FixedPoint>(), Err(NumericError::InvalidInput));
        assert_eq!("12a".parse::<FixedPoint>(), Err(NumericError::InvalidInput));
        assert_eq!(
            FixedPoint::from_str_radix("1", 37),
            Err(NumericError::InvalidBase)
        );
    }

    #[test]
    fn test_parse_other_radix() {
        let x = FixedPoint::from_str_radix("ff.8", 16).unwrap();
        assert_eq!(x.digits(), &[15, 15, 8]);
        assert_eq!(x.to_string(), "FF.8");

        let y = FixedPoint::from_str_radix("-101", 2).unwrap();
        assert_eq!(y.digits(), &[1, 0, 1]);
        assert!(y.is_negative());

        assert_eq!(
            FixedPoint::from_str_radix("12", 2),
            Err(NumericError::InvalidInput)
        );
    }

    #[test]
    fn test_from_digits() {
        let x = FixedPoint::from_digits(&[0, 0, 4, 2], 3, Sign::Negative, 10).unwrap();
        assert_eq!(x.to_string(), "-4.2");

        let frac = FixedPoint::from_digits(&[2, 5], 0, Sign::Positive, 10).unwrap();
        assert_eq!(frac.to_string(), "0.25");
        assert_eq!(frac.integer_digits(), 1);

        assert_eq!(
            FixedPoint::from_digits(&[1, 10], 2, Sign::Positive, 10),
            Err(NumericError::InvalidDigit)
        );
        assert_eq!(
            FixedPoint::from_digits(&[1], 2, Sign::Positive, 10),
            Err(NumericError::InvalidInput)
        );
        assert_eq!(
            FixedPoint::from_digits(&[1], 1, Sign::Positive, 1),
            Err(NumericError::InvalidBase)
        );
    }

    #[test]
    fn test_display_wide_digits() {
        let x = FixedPoint::from_digits(&[1, 40000, 7], 2, Sign::Positive, 65536).unwrap();
        assert_eq!(x.to_string(), "1[40000].7");
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", fp("-1.25")), "FixedPoint(-1.25, int=1, frac=2)");
    }

    #[test]
    fn test_rescale() {
        let x = fp("3.14159");
        assert_eq!(x.rescale(2).unwrap().to_string(), "3.14");
        assert_eq!(x.rescale(0).unwrap().to_string(), "3");
        assert_eq!(x.rescale(7).unwrap().to_string(), "3.1415900");

        // Truncating a small negative value to zero clears the sign
        let tiny = fp("-0.004");
        assert_eq!(tiny.rescale(2).unwrap().to_string(), "0.00");
    }

    #[test]
    fn test_cmp_magnitude() {
        assert_eq!(fp("1.50").cmp_magnitude(&fp("1.5")), Ordering::Equal);
        assert_eq!(fp("-10").cmp_magnitude(&fp("9.99")), Ordering::Greater);
        assert_eq!(fp("0.001").cmp_magnitude(&fp("0.01")), Ordering::Less);
        assert_eq!(fp("0.000").cmp_magnitude(&FixedPoint::zero()), Ordering::Equal);
        assert_eq!(fp("123.4").cmp_magnitude(&fp("123.41")), Ordering::Less);
    }

    #[test]
    fn test_sign_of_operands() {
        let pos = fp("2");
        let neg = fp("-3");
        let zero = FixedPoint::zero();

        assert_eq!(Sign::of_operands(&pos, &pos), Sign::Positive);
        assert_eq!(Sign::of_operands(&neg, &neg), Sign::Positive);
        assert_eq!(Sign::of_operands(&pos, &neg), Sign::Negative);
        assert_eq!(Sign::of_operands(&neg, &pos), Sign::Negative);
        assert_eq!(Sign::of_operands(&neg, &zero), Sign::Positive);
    }

    #[test]
    fn test_abs_and_negation() {
        let x = fp("-4.5");
        assert_eq!(x.abs().to_string(), "4.5");
        assert_eq!((-&x).to_string(), "4.5");
        assert_eq!((-x).to_string(), "4.5");
    }

    #[test]
    fn test_from_decimal() {
        use rust_decimal::Decimal;

        let x = FixedPoint::from_decimal(Decimal::new(12345, 2)).unwrap();
        assert_eq!(x.to_string(), "123.45");

        let y = FixedPoint::from_decimal(Decimal::new(-5, 3)).unwrap();
        assert_eq!(y.to_string(), "-0.005");

        let z = FixedPoint::from_decimal(Decimal::ZERO).unwrap();
        assert_eq!(z.to_string(), "0");
    }

    #[test]
    fn test_to_decimal() {
        use rust_decimal::Decimal;

        let x = fp("-123.456");
        assert_eq!(x.to_decimal().unwrap(), Decimal::new(-123456, 3));

        let hex = FixedPoint::from_str_radix("A", 16).unwrap();
        assert_eq!(hex.to_decimal(), Err(NumericError::InvalidDigit));

        let long = fp("1.00000000000000000000000000000");
        assert_eq!(long.to_decimal(), Err(NumericError::Overflow));
    }

    #[test]
    fn test_from_decimal_full_mantissa() {
        use rust_decimal::Decimal;

        let max = FixedPoint::from_decimal(Decimal::MAX).unwrap();
        assert_eq!(max.to_string(), "79228162514264337593543950335");
        assert_eq!(max.to_decimal().unwrap(), Decimal::MAX);

        let tiny = FixedPoint::from_decimal(Decimal::new(1, 28)).unwrap();
        assert_eq!(tiny.integer_digits(), 1);
        assert_eq!(tiny.fractional_digits(), 28);
    }

    #[test]
    fn test_check_radix() {
        let hex = FixedPoint::from_str_radix("1F", 16).unwrap();
        assert!(hex.check_radix(16).is_ok());
        assert!(hex.check_radix(65536).is_ok());
        assert_eq!(hex.check_radix(10), Err(NumericError::InvalidDigit));
        assert_eq!(hex.check_radix(1), Err(NumericError::InvalidBase));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates_layout() {
        let bad: Result<FixedPoint, _> =
            serde_json::from_str(r#"{"digits":[1],"int_len":5,"sign":"Positive"}"#);
        assert!(bad.is_err());

        let empty: Result<FixedPoint, _> =
            serde_json::from_str(r#"{"digits":[],"int_len":0,"sign":"Positive"}"#);
        assert!(empty.is_err());

        // Accepted input is brought into canonical form
        let padded: FixedPoint =
            serde_json::from_str(r#"{"digits":[0,0,1,5],"int_len":3,"sign":"Negative"}"#).unwrap();
        assert_eq!(padded, fp("-1.5"));
        assert!(!padded.is_empty());

        let pure_fraction: FixedPoint =
            serde_json::from_str(r#"{"digits":[2,5],"int_len":0,"sign":"Positive"}"#).unwrap();
        assert_eq!(pure_fraction, fp("0.25"));

        let negative_zero: FixedPoint =
            serde_json::from_str(r#"{"digits":[0,0],"int_len":1,"sign":"Negative"}"#).unwrap();
        assert_eq!(negative_zero.sign(), Sign::Positive);

        let x = fp("-42.125");
        let json = serde_json::to_string(&x).unwrap();
        assert_eq!(serde_json::from_str::<FixedPoint>(&json).unwrap(), x);
    }
}
