// ============================================================================
// Money
// Fixed-point monetary value with runtime precision
// ============================================================================

use crate::numeric::{
    check_precision, decimal_fraction, div_round, mul_div_round, pow10_i128, rescale,
    to_scaled, widen, MoneyError, MoneyResult, RoundingMode,
};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Precision used when none is given (hundredths, i.e. cents).
pub const DEFAULT_PRECISION: u32 = 2;

/// Monetary amount stored as a scaled integer.
///
/// Internally stores `amount × 10^precision` as an i64. The decimal amount is
/// never stored, only derived on read through [`Money::amount`].
///
/// Every operation returns a new value; `Money` is `Copy`, so handing a value
/// to another owner always hands over independent storage.
///
/// # Example
/// ```
/// use fair_money::prelude::*;
/// use rust_decimal::Decimal;
///
/// let price = Money::new(Decimal::new(1999, 2), 2)?; // 19.99
/// let total = price.multiply(Decimal::from(3), RoundingMode::HalfUp)?;
/// assert_eq!(total.scaled_amount(), 5997);
/// # Ok::<(), MoneyError>(())
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMoney"))]
pub struct Money {
    scaled: i64,
    precision: u32,
}

/// Wire form of [`Money`], checked before it becomes a value.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawMoney {
    scaled: i64,
    precision: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMoney> for Money {
    type Error = MoneyError;

    fn try_from(raw: RawMoney) -> MoneyResult<Self> {
        Self::from_minor(raw.scaled, raw.precision)
    }
}

impl Money {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a decimal amount, rounding half away from zero to the
    /// nearest unit of `precision`.
    ///
    /// # Errors
    /// - `PrecisionOutOfRange` if `precision` exceeds [`crate::numeric::MAX_PRECISION`]
    /// - `Overflow` if the scaled amount does not fit an i64
    pub fn new(amount: Decimal, precision: u32) -> MoneyResult<Self> {
        check_precision(precision)?;

        let mantissa = amount.mantissa();
        let scale = amount.scale();

        let scaled = if scale > precision {
            div_round(mantissa, pow10_i128(scale - precision)?, RoundingMode::HalfUp)?
        } else {
            mantissa
                .checked_mul(pow10_i128(precision - scale)?)
                .ok_or(MoneyError::Overflow)?
        };

        Ok(Self {
            scaled: to_scaled(scaled)?,
            precision,
        })
    }

    /// Create from an amount already expressed in units of `10^-precision`.
    pub fn from_minor(scaled: i64, precision: u32) -> MoneyResult<Self> {
        check_precision(precision)?;
        Ok(Self { scaled, precision })
    }

    /// Zero at the given precision.
    pub fn zero(precision: u32) -> MoneyResult<Self> {
        Self::from_minor(0, precision)
    }

    /// Build without validating `precision`; callers pass a precision taken
    /// from an existing value.
    #[inline]
    pub(crate) const fn from_parts(scaled: i64, precision: u32) -> Self {
        Self { scaled, precision }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The scaled integer amount (`amount × 10^precision`).
    #[inline]
    pub const fn scaled_amount(&self) -> i64 {
        self.scaled
    }

    /// Number of decimal digits this value tracks.
    #[inline]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// The decimal amount, `scaled / 10^precision`, exactly.
    #[inline]
    pub fn amount(&self) -> Decimal {
        Decimal::new(self.scaled, self.precision)
    }

    /// The smallest representable unit at this precision.
    #[inline]
    pub const fn unit(&self) -> Self {
        Self::from_parts(1, self.precision)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.scaled == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.scaled > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.scaled < 0
    }

    // ========================================================================
    // Precision
    // ========================================================================

    /// Rescale to `precision`, rounding half away from zero when digits are
    /// dropped.
    ///
    /// # Errors
    /// - `PrecisionOutOfRange` for an unsupported target precision
    /// - `Overflow` if raising precision pushes the amount past i64
    pub fn change_precision(&self, precision: u32) -> MoneyResult<Self> {
        let scaled = rescale(self.scaled, self.precision, precision, RoundingMode::HalfUp)?;
        Ok(Self { scaled, precision })
    }

    fn ensure_same_precision(&self, other: &Self) -> MoneyResult<()> {
        if self.precision == other.precision {
            Ok(())
        } else {
            tracing::debug!(
                left = self.precision,
                right = other.precision,
                "rejected money arithmetic across precisions"
            );
            Err(MoneyError::PrecisionMismatch {
                left: self.precision,
                right: other.precision,
            })
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Sum of two amounts at the same precision.
    ///
    /// # Errors
    /// - `PrecisionMismatch` if the precisions differ
    /// - `Overflow` if the result is out of range
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_precision(other)?;
        self.scaled
            .checked_add(other.scaled)
            .map(|scaled| Self::from_parts(scaled, self.precision))
            .ok_or(MoneyError::Overflow)
    }

    /// Difference of two amounts at the same precision.
    ///
    /// # Errors
    /// - `PrecisionMismatch` if the precisions differ
    /// - `Overflow` if the result is out of range
    pub fn subtract(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_precision(other)?;
        self.scaled
            .checked_sub(other.scaled)
            .map(|scaled| Self::from_parts(scaled, self.precision))
            .ok_or(MoneyError::Overflow)
    }

    /// Multiply by a decimal factor and round the product once, with `mode`.
    ///
    /// The product is computed exactly on integers before rounding.
    pub fn multiply(&self, multiplier: Decimal, mode: RoundingMode) -> MoneyResult<Self> {
        let (numerator, denominator) = decimal_fraction(multiplier.normalize())?;
        let scaled = mul_div_round(self.scaled as i128, numerator, denominator, mode)?;
        Ok(Self::from_parts(to_scaled(scaled)?, self.precision))
    }

    /// Divide by a decimal divisor and round the quotient once, with `mode`.
    ///
    /// # Errors
    /// - `InvalidArgument` if `divisor` is zero, or its magnitude is below the
    ///   smallest unit at this precision (`10^-precision`)
    /// - `Overflow` if the quotient is out of range
    pub fn divide(&self, divisor: Decimal, mode: RoundingMode) -> MoneyResult<Self> {
        if divisor.is_zero() {
            tracing::debug!(money = %self, "rejected division by zero");
            return Err(MoneyError::invalid_argument("division by zero"));
        }
        if divisor.abs() < self.unit().amount() {
            tracing::debug!(money = %self, %divisor, "rejected divisor below smallest unit");
            return Err(MoneyError::invalid_argument(format!(
                "divisor {} is smaller than the smallest unit {}",
                divisor,
                self.unit()
            )));
        }

        // scaled / (numerator / denominator) == scaled * denominator / numerator
        let (numerator, denominator) = decimal_fraction(divisor.normalize())?;
        let scaled = mul_div_round(self.scaled as i128, denominator, numerator, mode)?;
        Ok(Self::from_parts(to_scaled(scaled)?, self.precision))
    }

    /// Additive inverse.
    pub fn negate(&self) -> MoneyResult<Self> {
        self.scaled
            .checked_neg()
            .map(|scaled| Self::from_parts(scaled, self.precision))
            .ok_or(MoneyError::Overflow)
    }

    /// Absolute value.
    pub fn abs(&self) -> MoneyResult<Self> {
        self.scaled
            .checked_abs()
            .map(|scaled| Self::from_parts(scaled, self.precision))
            .ok_or(MoneyError::Overflow)
    }

    // ========================================================================
    // Comparison
    // ========================================================================
    //
    // Values at different precisions are compared exactly: both sides are
    // lifted to the larger precision in i128 first, so 1.0 (p=1) equals
    // 1.00 (p=2) and no rounding is involved.

    /// Compare two amounts by value.
    pub fn compare(&self, other: &Self) -> Ordering {
        if self.precision == other.precision {
            return self.scaled.cmp(&other.scaled);
        }
        let target = self.precision.max(other.precision);
        widen(self.scaled, self.precision, target).cmp(&widen(
            other.scaled,
            other.precision,
            target,
        ))
    }

    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }

    #[inline]
    pub fn greater_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }

    #[inline]
    pub fn greater_than_or_equal(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Less
    }

    #[inline]
    pub fn less_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    #[inline]
    pub fn less_than_or_equal(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Greater
    }

    /// Smallest precision that represents this value exactly, with the
    /// matching scaled amount.
    fn normalized(&self) -> (i64, u32) {
        let mut scaled = self.scaled;
        let mut precision = self.precision;
        while precision > 0 && scaled % 10 == 0 {
            scaled /= 10;
            precision -= 1;
        }
        (scaled, precision)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Money {
    #[inline]
    fn default() -> Self {
        Self::from_parts(0, DEFAULT_PRECISION)
    }
}

impl PartialEq for Money {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Money {}

impl PartialOrd for Money {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for Money {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for Money {
    // Must agree with Eq, which ignores trailing zero digits.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyError;

    /// Convert at [`DEFAULT_PRECISION`].
    fn try_from(amount: Decimal) -> MoneyResult<Self> {
        Self::new(amount, DEFAULT_PRECISION)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Money({}, precision={}, raw={})",
            self, self.precision, self.scaled
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.amount())
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn construction_is_within_half_a_unit(
            mantissa in -1_000_000_000_000i64..1_000_000_000_000i64,
            scale in 0u32..8u32,
            precision in 0u32..6u32
        ) {
            let amount = Decimal::new(mantissa, scale);
            let money = Money::new(amount, precision).unwrap();
            let half_unit = Decimal::new(5, precision + 1);
            prop_assert!((money.amount() - amount).abs() <= half_unit);
        }

        #[test]
        fn add_then_subtract_is_identity(
            a in -1_000_000_000i64..1_000_000_000i64,
            b in -1_000_000_000i64..1_000_000_000i64
        ) {
            let ma = Money::from_minor(a, 2).unwrap();
            let mb = Money::from_minor(b, 2).unwrap();
            prop_assert_eq!(ma.add(&mb).unwrap().subtract(&mb).unwrap(), ma);
        }

        #[test]
        fn raising_precision_preserves_value(
            scaled in -1_000_000_000i64..1_000_000_000i64,
            from in 0u32..6u32,
            extra in 0u32..6u32
        ) {
            let money = Money::from_minor(scaled, from).unwrap();
            let raised = money.change_precision(from + extra).unwrap();
            prop_assert_eq!(raised, money);
            prop_assert_eq!(raised.amount(), money.amount());
        }
    }
}
