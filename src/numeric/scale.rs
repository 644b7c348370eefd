// ============================================================================
// Decimal Scale
// Powers of ten and lossless conversions between scaled integers
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use super::rounding::{div_round, RoundingMode};
use rust_decimal::Decimal;

/// Largest precision whose scale factor (10^precision) fits an i64.
pub const MAX_PRECISION: u32 = 18;

/// Compute 10^n at compile time
const fn const_pow10(n: u32) -> i128 {
    let mut result: i128 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// Scale factors for every valid precision, indexed by precision.
const POW10: [i128; (MAX_PRECISION + 1) as usize] = {
    let mut table = [0i128; (MAX_PRECISION + 1) as usize];
    let mut i = 0;
    while i <= MAX_PRECISION as usize {
        table[i] = const_pow10(i as u32);
        i += 1;
    }
    table
};

/// Reject precisions whose scale factor would not fit an i64.
#[inline]
pub fn check_precision(precision: u32) -> MoneyResult<u32> {
    if precision > MAX_PRECISION {
        Err(MoneyError::PrecisionOutOfRange(precision))
    } else {
        Ok(precision)
    }
}

/// 10^exponent for arbitrary exponents, failing once it leaves i128.
///
/// Decimal scales go up to 28, past the money precision table.
pub fn pow10_i128(exponent: u32) -> MoneyResult<i128> {
    10i128.checked_pow(exponent).ok_or(MoneyError::Overflow)
}

/// Narrow an intermediate back to the i64 storage type.
#[inline]
pub fn to_scaled(value: i128) -> MoneyResult<i64> {
    i64::try_from(value).map_err(|_| MoneyError::Overflow)
}

/// Exact fraction `mantissa / 10^scale` of a decimal.
#[inline]
pub fn decimal_fraction(value: Decimal) -> MoneyResult<(i128, i128)> {
    Ok((value.mantissa(), pow10_i128(value.scale())?))
}

/// Move a scaled amount from one precision to another.
///
/// Raising precision is exact. Lowering precision divides by the scale
/// difference and rounds with `mode`.
pub fn rescale(scaled: i64, from: u32, to: u32, mode: RoundingMode) -> MoneyResult<i64> {
    check_precision(from)?;
    check_precision(to)?;

    if to >= from {
        let factor = POW10[(to - from) as usize];
        (scaled as i128)
            .checked_mul(factor)
            .ok_or(MoneyError::Overflow)
            .and_then(to_scaled)
    } else {
        let factor = POW10[(from - to) as usize];
        to_scaled(div_round(scaled as i128, factor, mode)?)
    }
}

/// Lift a scaled amount to a higher precision without narrowing to i64.
///
/// Used for exact comparison; `i64::MAX * 10^18` still fits an i128.
#[inline]
pub(crate) fn widen(scaled: i64, from: u32, to: u32) -> i128 {
    debug_assert!(from <= to && to <= MAX_PRECISION);
    scaled as i128 * POW10[(to - from) as usize]
}
