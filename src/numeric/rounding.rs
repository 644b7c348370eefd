// ============================================================================
// Rounding
// Half-rounding of exact integer quotients
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use primitive_types::U256;
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a quotient that lies exactly halfway between two integers is resolved.
///
/// Quotients that are not on a midpoint always go to the nearest integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Midpoints move away from zero (2.5 -> 3, -2.5 -> -3)
    #[default]
    HalfUp,
    /// Midpoints move toward zero (2.5 -> 2, -2.5 -> -2)
    HalfDown,
    /// Midpoints go to the even neighbour (2.5 -> 2, 3.5 -> 4)
    HalfEven,
    /// Midpoints go to the odd neighbour (2.5 -> 3, 3.5 -> 3)
    HalfOdd,
}

impl RoundingMode {
    /// All supported modes, in declaration order.
    pub const ALL: [RoundingMode; 4] = [
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
        RoundingMode::HalfOdd,
    ];

    /// Whether a midpoint moves away from zero, given the parity of the
    /// truncated quotient.
    #[inline]
    fn midpoint_away_from_zero(self, truncated_is_odd: bool) -> bool {
        match self {
            RoundingMode::HalfUp => true,
            RoundingMode::HalfDown => false,
            RoundingMode::HalfEven => truncated_is_odd,
            RoundingMode::HalfOdd => !truncated_is_odd,
        }
    }
}

/// Divides `numerator` by `denominator` and rounds the exact quotient to an
/// integer using `mode`.
///
/// All work happens on integers: the truncated quotient is adjusted by one
/// step away from zero when the remainder is past (or, depending on the mode,
/// at) the midpoint.
///
/// # Errors
/// - `InvalidArgument` if `denominator` is zero
/// - `Overflow` if the quotient does not fit an i128
pub fn div_round(numerator: i128, denominator: i128, mode: RoundingMode) -> MoneyResult<i128> {
    if denominator == 0 {
        return Err(MoneyError::invalid_argument("division by zero"));
    }

    let truncated = numerator
        .checked_div(denominator)
        .ok_or(MoneyError::Overflow)?;
    let remainder = numerator % denominator;
    if remainder == 0 {
        return Ok(truncated);
    }

    // |remainder| < |denominator| <= 2^127, so doubling stays inside u128
    let twice_remainder = remainder.unsigned_abs() * 2;
    let away = match twice_remainder.cmp(&denominator.unsigned_abs()) {
        Ordering::Less => false,
        Ordering::Greater => true,
        Ordering::Equal => mode.midpoint_away_from_zero(truncated % 2 != 0),
    };

    if !away {
        return Ok(truncated);
    }

    let step = if (numerator < 0) != (denominator < 0) { -1 } else { 1 };
    truncated.checked_add(step).ok_or(MoneyError::Overflow)
}

/// Computes `a * b / c` rounded with `mode`, keeping the full 256-bit
/// product so only the final quotient has to fit an i128.
///
/// # Errors
/// - `InvalidArgument` if `c` is zero
/// - `Overflow` if the rounded quotient does not fit an i128
pub fn mul_div_round(a: i128, b: i128, c: i128, mode: RoundingMode) -> MoneyResult<i128> {
    if c == 0 {
        return Err(MoneyError::invalid_argument("division by zero"));
    }

    let negative = (a < 0) ^ (b < 0) ^ (c < 0);
    let product = U256::from(a.unsigned_abs())
        .checked_mul(U256::from(b.unsigned_abs()))
        .ok_or(MoneyError::Overflow)?;
    let divisor = U256::from(c.unsigned_abs());
    let (quotient, remainder) = product.div_mod(divisor);

    // remainder < divisor, so `divisor - remainder` cannot underflow
    let away = if remainder.is_zero() {
        false
    } else {
        match remainder.cmp(&(divisor - remainder)) {
            Ordering::Less => false,
            Ordering::Greater => true,
            Ordering::Equal => mode.midpoint_away_from_zero(quotient.bit(0)),
        }
    };

    let magnitude = if away {
        quotient.checked_add(U256::one()).ok_or(MoneyError::Overflow)?
    } else {
        quotient
    };
    if magnitude > U256::from(i128::MAX as u128) {
        return Err(MoneyError::Overflow);
    }

    let magnitude = magnitude.as_u128() as i128;
    Ok(if negative { -magnitude } else { magnitude })
}
