// ============================================================================
// Basic Usage Example
// ============================================================================

use fair_money::prelude::*;
use rust_decimal::Decimal;

fn main() -> Result<(), MoneyError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Fair Money Example ===\n");

    let config = MoneyConfig::cents();
    let money = config.money(Decimal::new(10, 2))?;
    println!("Amount: {} (raw={})\n", money, money.scaled_amount());

    // Even split: 2.5 cents each cannot be paid out
    println!("Split four ways:");
    for (i, share) in money.allocate_to(4)?.iter().enumerate() {
        println!("  share {}: {}", i, share);
    }

    // Same ratios, different order
    for ratios in [[3, 2, 1], [2, 3, 1]] {
        let ratios: Vec<Decimal> = ratios.iter().map(|r| Decimal::from(*r)).collect();
        let shares = money.allocate(&ratios)?;
        println!("\nSplit {:?}:", ratios);
        for share in &shares {
            println!("  {}", share);
        }
    }

    // Negative amounts split into negative shares
    let refund = money.negate()?;
    println!("\nRefund {} split 1:1:", refund);
    for share in refund.allocate_to(2)? {
        println!("  {}", share);
    }

    // Rounding modes on a midpoint (0.05 / 2 = 0.025)
    let nickel = config.money(Decimal::new(5, 2))?;
    println!("\n=== Rounding 0.05 / 2 ===");
    for mode in RoundingMode::ALL {
        println!("  {:?}: {}", mode, nickel.divide(Decimal::from(2), mode)?);
    }

    // Rejected operations
    println!("\n=== Errors ===");
    if let Err(err) = money.divide(Decimal::ZERO, RoundingMode::HalfUp) {
        println!("  divide by zero: {}", err);
    }
    let mills = MoneyConfig::mills().money(Decimal::ONE)?;
    if let Err(err) = money.add(&mills) {
        println!("  mixed precision: {}", err);
    }

    Ok(())
}
