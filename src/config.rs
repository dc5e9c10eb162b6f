// ============================================================================
// Arithmetic Configuration
// Radix and division scale shared by a sequence of operations
// ============================================================================

use crate::engine;
use crate::numeric::{check_base, FixedPoint, NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Radix and scale context for arithmetic operations.
///
/// `scale` is the number of fractional digits kept by division and modulus;
/// addition, subtraction and multiplication are always exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArithmeticConfig {
    /// Number system base, 2 to 65536
    pub base: u32,

    /// Fractional digits kept by division (truncated, never rounded)
    pub scale: usize,
}

impl Default for ArithmeticConfig {
    /// Base 10 with integer division, like `bc` at startup
    fn default() -> Self {
        Self::decimal(0)
    }
}

impl ArithmeticConfig {
    /// Create a new configuration with required parameters
    pub fn new(base: u32, scale: usize) -> Self {
        Self { base, scale }
    }

    /// Builder method: Set radix
    pub fn with_base(mut self, base: u32) -> Self {
        self.base = base;
        self
    }

    /// Builder method: Set division scale
    pub fn with_scale(mut self, scale: usize) -> Self {
        self.scale = scale;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> NumericResult<()> {
        check_base(self.base)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ArithmeticConfig {
    /// Base 10
    pub fn decimal(scale: usize) -> Self {
        Self::new(10, scale)
    }

    /// Base 2
    pub fn binary(scale: usize) -> Self {
        Self::new(2, scale)
    }

    /// Base 16
    pub fn hexadecimal(scale: usize) -> Self {
        Self::new(16, scale)
    }
}

// ============================================================================
// Operations Bound to the Configuration
// ============================================================================

impl ArithmeticConfig {
    /// Parse a number written in the configured radix (2 to 36).
    pub fn parse(&self, text: &str) -> NumericResult<FixedPoint> {
        self.validate()?;
        if self.base > 36 {
            return Err(NumericError::InvalidBase);
        }
        FixedPoint::from_str_radix(text, self.base)
    }

    /// `a / b` truncated to the configured scale.
    pub fn divide(&self, a: &FixedPoint, b: &FixedPoint) -> NumericResult<FixedPoint> {
        self.validate()?;
        engine::divide(a, b, self.base, self.scale)
    }

    /// `a - b * (a / b)` with the quotient taken at the configured scale.
    pub fn modulo(&self, a: &FixedPoint, b: &FixedPoint) -> NumericResult<FixedPoint> {
        self.validate()?;
        engine::modulo(a, b, self.base, self.scale)
    }

    pub fn add(&self, a: &FixedPoint, b: &FixedPoint) -> NumericResult<FixedPoint> {
        self.validate()?;
        engine::add(a, b, self.base)
    }

    pub fn sub(&self, a: &FixedPoint, b: &FixedPoint) -> NumericResult<FixedPoint> {
        self.validate()?;
        engine::sub(a, b, self.base)
    }

    pub fn mul(&self, a: &FixedPoint, b: &FixedPoint) -> NumericResult<FixedPoint> {
        self.validate()?;
        engine::mul(a, b, self.base)
    }
}
