// ============================================================================
// Money Configuration
// Default precision and rounding policy for constructing and scaling money
// ============================================================================

use super::money::{Money, DEFAULT_PRECISION};
use crate::numeric::{check_precision, MoneyResult, RoundingMode};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Precision and rounding policy shared by the money values an application
/// creates.
///
/// `Money` itself carries its precision; this type only supplies defaults so
/// callers don't repeat them at every construction and every
/// multiply/divide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMoneyConfig"))]
pub struct MoneyConfig {
    /// Number of decimal digits for values built from this config
    pub precision: u32,

    /// Rounding mode applied by `multiply` and `divide`
    pub rounding_mode: RoundingMode,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawMoneyConfig {
    precision: u32,
    rounding_mode: RoundingMode,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMoneyConfig> for MoneyConfig {
    type Error = crate::numeric::MoneyError;

    fn try_from(raw: RawMoneyConfig) -> MoneyResult<Self> {
        let config = Self::new(raw.precision).with_rounding_mode(raw.rounding_mode);
        config.validate()?;
        Ok(config)
    }
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

impl MoneyConfig {
    /// Create a configuration with the given precision and half-up rounding
    pub fn new(precision: u32) -> Self {
        Self {
            precision,
            rounding_mode: RoundingMode::HalfUp,
        }
    }

    /// Builder method: Set precision
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: Set rounding mode
    pub fn with_rounding_mode(mut self, rounding_mode: RoundingMode) -> Self {
        self.rounding_mode = rounding_mode;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> MoneyResult<()> {
        check_precision(self.precision)?;
        Ok(())
    }

    // ========================================================================
    // Constructors
    // ========================================================================

    /// Money at this configuration's precision
    pub fn money(&self, amount: Decimal) -> MoneyResult<Money> {
        Money::new(amount, self.precision)
    }

    /// Money from minor units at this configuration's precision
    pub fn from_minor(&self, scaled: i64) -> MoneyResult<Money> {
        Money::from_minor(scaled, self.precision)
    }

    pub fn zero(&self) -> MoneyResult<Money> {
        Money::zero(self.precision)
    }

    // ========================================================================
    // Operations with the configured rounding mode
    // ========================================================================

    pub fn multiply(&self, money: &Money, multiplier: Decimal) -> MoneyResult<Money> {
        money.multiply(multiplier, self.rounding_mode)
    }

    pub fn divide(&self, money: &Money, divisor: Decimal) -> MoneyResult<Money> {
        money.divide(divisor, self.rounding_mode)
    }

    /// Bring `money` to this configuration's precision
    pub fn normalize(&self, money: &Money) -> MoneyResult<Money> {
        money.change_precision(self.precision)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl MoneyConfig {
    /// Hundredths (cents), half-up rounding
    pub fn cents() -> Self {
        Self::new(2)
    }

    /// Thousandths (mills), half-up rounding
    pub fn mills() -> Self {
        Self::new(3)
    }

    /// No fractional digits, for currencies without minor units
    pub fn whole_units() -> Self {
        Self::new(0)
    }

    /// Hundredths with banker's rounding (half-to-even)
    pub fn bankers() -> Self {
        Self::new(2).with_rounding_mode(RoundingMode::HalfEven)
    }
}
