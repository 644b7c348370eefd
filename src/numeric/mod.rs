// ============================================================================
// Numeric Module
// Integer scale and rounding primitives behind the money type
// ============================================================================
//
// This module provides:
// - MoneyError: Error types for money arithmetic and allocation
// - RoundingMode: The closed set of half-rounding variants
// - Scale helpers: powers of ten and checked rescaling of i64 amounts
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - i64 storage, i128 intermediates (256-bit for multiply-then-divide)

mod errors;
mod rounding;
mod scale;

pub use errors::{MoneyError, MoneyResult};
pub use rounding::{div_round, mul_div_round, RoundingMode};
pub use scale::{
    check_precision, decimal_fraction, pow10_i128, rescale, to_scaled, MAX_PRECISION,
};

pub(crate) use scale::widen;
