// ============================================================================
// Domain Models Module
// Contains the money value object and its configuration
// ============================================================================

pub mod config;
pub mod money;

pub use config::MoneyConfig;
pub use money::{Money, DEFAULT_PRECISION};
