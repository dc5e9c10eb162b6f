// ============================================================================
// Engine Module
// Digit-level kernels and the arithmetic operations built on them
// ============================================================================

pub(crate) mod digits;

mod additive;
mod division;
mod long_division;
mod modulo;
mod multiply;
mod normalize;

pub use additive::{add, sub};
pub use division::{divide, divide_into, divide_observed};
pub use modulo::modulo;
pub use multiply::mul;
