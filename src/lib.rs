// ============================================================================
// Arbitrary Division Library
// Fixed-point arithmetic of unbounded length in any radix from 2 to 65536
// ============================================================================

//! # Arbitrary Division
//!
//! Signed fixed-point numbers of unbounded length with long division in any
//! radix from 2 to 65536.
//!
//! ## Features
//!
//! - **Knuth Algorithm D** long division with at most two trial corrections per digit
//! - **Truncating quotients** at a caller-chosen number of fractional digits
//! - **Exact add, subtract, multiply** and a modulus defined by `a - b * (a / b)`
//! - **Division observers** for tracing or counting what the digit loop does
//! - **`rust_decimal` interop** for base-10 values at API boundaries
//!
//! ## Example
//!
//! ```rust
//! use arbitrary_division::prelude::*;
//!
//! // Divide in base 10, keeping five fractional digits
//! let config = ArithmeticConfig::decimal(5);
//! let one = config.parse("1").unwrap();
//! let three = config.parse("3").unwrap();
//!
//! let third = config.divide(&one, &three).unwrap();
//! assert_eq!(third.to_string(), "0.33333");
//!
//! // The remainder completes the identity a = b * q + r
//! let rest = config.modulo(&one, &three).unwrap();
//! assert_eq!(rest.to_string(), "0.00001");
//!
//! // Count what the digit loop did
//! let mut stats = DivisionStats::new();
//! divide_observed(&one, &three, 10, 5, &mut stats).unwrap();
//! assert_eq!(stats.digits, 6);
//! ```

pub mod config;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::ArithmeticConfig;
    pub use crate::engine::{add, divide, divide_into, divide_observed, modulo, mul, sub};
    pub use crate::interfaces::{
        DivisionEvent, DivisionObserver, DivisionStats, LoggingObserver, NoOpObserver,
    };
    pub use crate::numeric::{FixedPoint, NumericError, NumericResult, Sign};
}
