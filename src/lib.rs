// ============================================================================
// Fair Money Library
// Fixed-point money values with exact proportional allocation
// ============================================================================

//! # Fair Money
//!
//! A fixed-point monetary value type that never loses a unit.
//!
//! ## Features
//!
//! - **Scaled integer storage**: amounts are `i64` multiples of `10^-precision`
//! - **Exact arithmetic**: multiply/divide round once, with a chosen half-rounding mode
//! - **Fair allocation**: proportional splits that always sum to the original amount
//! - **No floating point** anywhere; decimal inputs use `rust_decimal`
//!
//! ## Example
//!
//! ```rust
//! use fair_money::prelude::*;
//! use rust_decimal::Decimal;
//!
//! // 0.10 at the default precision (cents)
//! let money = Money::try_from(Decimal::new(10, 2))?;
//!
//! // Split four ways: 2.5 cents each is impossible, so two shares give up a cent
//! let shares = money.allocate_to(4)?;
//! let cents: Vec<i64> = shares.iter().map(Money::scaled_amount).collect();
//! assert_eq!(cents, vec![3, 3, 2, 2]);
//!
//! // Proportional split
//! let ratios = [Decimal::from(3), Decimal::from(2), Decimal::from(1)];
//! let shares = money.allocate(&ratios)?;
//! println!("{:?}", shares);
//! # Ok::<(), MoneyError>(())
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Money, MoneyConfig, DEFAULT_PRECISION};
    pub use crate::engine::{allocate, allocate_evenly};
    pub use crate::numeric::{MoneyError, MoneyResult, RoundingMode, MAX_PRECISION};
}
