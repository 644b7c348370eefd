// ============================================================================
// Allocation Engine
// Splits a money amount into shares proportional to a list of ratios
// ============================================================================

use crate::domain::Money;
use crate::numeric::{mul_div_round, pow10_i128, to_scaled, MoneyError, MoneyResult, RoundingMode};
use rust_decimal::Decimal;

/// Split `money` into one share per ratio, in ratio order.
///
/// Each share starts as the nearest integer (half away from zero) to its
/// ideal proportional value. The units lost or gained by that independent
/// rounding are then handed back one at a time, so the shares always sum to
/// exactly `money`.
///
/// # Example
/// ```text
/// 0.10 split [1, 1, 1, 1]:
///   ideal shares: 2.5 cents each
///   rounded:      3, 3, 3, 3   (sum 12, remainder -2)
///   walk order:   #3 #2 #1 #0  (largest first, ties from the back)
///   result:       3, 3, 2, 2
/// ```
///
/// # Errors
/// - `InvalidArgument` if `ratios` is empty, holds a negative ratio, or sums
///   to zero
/// - `Overflow` if the ratios cannot be brought to a common i128 scale
pub fn allocate(money: &Money, ratios: &[Decimal]) -> MoneyResult<Vec<Money>> {
    let weights = integer_weights(ratios)?;
    let total = weights
        .iter()
        .try_fold(0i128, |acc, weight| acc.checked_add(*weight))
        .ok_or(MoneyError::Overflow)?;
    if total == 0 {
        return Err(MoneyError::invalid_argument(
            "allocation ratios must sum to a positive total",
        ));
    }

    let amount = money.scaled_amount() as i128;
    let mut shares = weights
        .iter()
        .map(|weight| mul_div_round(amount, *weight, total, RoundingMode::HalfUp))
        .collect::<MoneyResult<Vec<i128>>>()?;

    let remainder = amount - shares.iter().sum::<i128>();
    if remainder != 0 {
        distribute_remainder(&mut shares, &weights, remainder)?;
    }

    shares
        .into_iter()
        .map(|share| to_scaled(share).map(|scaled| Money::from_parts(scaled, money.precision())))
        .collect()
}

/// Split `money` into `parts` shares of equal ratio.
pub fn allocate_evenly(money: &Money, parts: usize) -> MoneyResult<Vec<Money>> {
    if parts == 0 {
        return Err(MoneyError::invalid_argument(
            "cannot allocate to zero parts",
        ));
    }
    allocate(money, &vec![Decimal::ONE; parts])
}

/// Bring every ratio to a common decimal scale and return the mantissas,
/// so ratio arithmetic stays exact.
fn integer_weights(ratios: &[Decimal]) -> MoneyResult<Vec<i128>> {
    if ratios.is_empty() {
        return Err(MoneyError::invalid_argument(
            "allocation needs at least one ratio",
        ));
    }
    if let Some(negative) = ratios.iter().find(|ratio| **ratio < Decimal::ZERO) {
        return Err(MoneyError::invalid_argument(format!(
            "allocation ratio {} is negative",
            negative
        )));
    }

    let ratios: Vec<Decimal> = ratios.iter().map(|ratio| ratio.normalize()).collect();
    let scale = ratios.iter().map(Decimal::scale).max().unwrap_or(0);

    ratios
        .iter()
        .map(|ratio| {
            ratio
                .mantissa()
                .checked_mul(pow10_i128(scale - ratio.scale())?)
                .ok_or(MoneyError::Overflow)
        })
        .collect()
}

/// Hand `remainder` back to the shares one unit at a time.
///
/// A negative remainder (over-allocation) takes units from the largest
/// shares first; a positive one gives units to the smallest shares first.
/// Among equal shares the later input position goes first. Shares that are
/// zero never absorb a unit, and the walk wraps around until the remainder is
/// gone.
///
/// If every share rounded to zero, each share with a non-zero ratio may take
/// a single unit instead; the remainder is then below half their count.
fn distribute_remainder(
    shares: &mut [i128],
    weights: &[i128],
    mut remainder: i128,
) -> MoneyResult<()> {
    // Sort indices, not shares: adjustments land in input-order storage
    let mut order: Vec<usize> = (0..shares.len()).collect();
    if remainder < 0 {
        order.sort_unstable_by(|&a, &b| shares[b].cmp(&shares[a]).then(b.cmp(&a)));
    } else {
        order.sort_unstable_by(|&a, &b| shares[a].cmp(&shares[b]).then(b.cmp(&a)));
    }

    let step = remainder.signum();
    let all_zero = shares.iter().all(|share| *share == 0);

    tracing::debug!(
        remainder = remainder as i64,
        shares = shares.len(),
        all_zero,
        "distributing allocation remainder"
    );

    while remainder != 0 {
        let mut adjusted = false;

        for &index in &order {
            if remainder == 0 {
                break;
            }

            let eligible = if all_zero {
                shares[index] == 0 && weights[index] != 0
            } else {
                shares[index] != 0
            };
            if !eligible {
                continue;
            }

            shares[index] += step;
            remainder -= step;
            adjusted = true;
            tracing::trace!(index, share = shares[index] as i64, "adjusted share");
        }

        if !adjusted {
            return Err(MoneyError::invalid_argument(
                "no share can absorb the allocation remainder",
            ));
        }
    }

    Ok(())
}

impl Money {
    /// Split this amount into shares proportional to `ratios`.
    ///
    /// See [`allocate`] for the rounding and remainder rules.
    pub fn allocate(&self, ratios: &[Decimal]) -> MoneyResult<Vec<Money>> {
        allocate(self, ratios)
    }

    /// Split this amount into `parts` equal shares.
    pub fn allocate_to(&self, parts: usize) -> MoneyResult<Vec<Money>> {
        allocate_evenly(self, parts)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn ratio_list() -> impl Strategy<Value = Vec<Decimal>> {
        prop::collection::vec((0u32..10_000u32, 0u32..4u32), 1..16).prop_map(|raw| {
            raw.into_iter()
                .map(|(mantissa, scale)| Decimal::new(mantissa as i64, scale))
                .collect()
        })
    }

    fn weights_and_total(ratios: &[Decimal]) -> (Vec<i128>, i128) {
        let weights = integer_weights(ratios).unwrap();
        let total = weights.iter().sum();
        (weights, total)
    }

    proptest! {
        #[test]
        fn allocation_preserves_sum(
            amount in -1_000_000_000_000i64..1_000_000_000_000i64,
            ratios in ratio_list()
        ) {
            prop_assume!(ratios.iter().any(|r| !r.is_zero()));
            let money = Money::from_minor(amount, 2).unwrap();
            let shares = money.allocate(&ratios).unwrap();

            prop_assert_eq!(shares.len(), ratios.len());
            let total: i64 = shares.iter().map(Money::scaled_amount).sum();
            prop_assert_eq!(total, amount);
            let decimal_total: Decimal = shares.iter().map(Money::amount).sum();
            prop_assert_eq!(decimal_total, money.amount());
        }

        #[test]
        fn allocation_preserves_sign(
            amount in -1_000_000_000i64..1_000_000_000i64,
            ratios in ratio_list()
        ) {
            prop_assume!(ratios.iter().any(|r| !r.is_zero()));
            let money = Money::from_minor(amount, 2).unwrap();
            let shares = money.allocate(&ratios).unwrap();

            for share in &shares {
                if amount > 0 {
                    prop_assert!(!share.is_negative());
                } else if amount < 0 {
                    prop_assert!(!share.is_positive());
                } else {
                    prop_assert!(share.is_zero());
                }
            }
        }

        #[test]
        fn zero_ratio_share_stays_zero(
            amount in -1_000_000i64..1_000_000i64,
            ratios in ratio_list()
        ) {
            prop_assume!(ratios.iter().any(|r| !r.is_zero()));
            let money = Money::from_minor(amount, 2).unwrap();
            let shares = money.allocate(&ratios).unwrap();

            for (share, ratio) in shares.iter().zip(&ratios) {
                if ratio.is_zero() {
                    prop_assert!(share.is_zero());
                }
            }
        }

        #[test]
        fn even_split_is_within_one_unit_of_ideal(
            amount in -1_000_000_000i64..1_000_000_000i64,
            parts in 1usize..50usize
        ) {
            let money = Money::from_minor(amount, 2).unwrap();
            let shares = money.allocate_to(parts).unwrap();
            let n = parts as i128;

            for share in &shares {
                // |share - amount / n| <= 1
                let deviation = (share.scaled_amount() as i128 * n - amount as i128).abs();
                prop_assert!(deviation <= n);
            }
        }

        #[test]
        fn shares_stay_near_ideal_when_none_round_to_zero(
            amount in 1_000_000i64..1_000_000_000i64,
            ratios in prop::collection::vec(1u32..1_000u32, 1..16)
        ) {
            let ratios: Vec<Decimal> = ratios.into_iter().map(Decimal::from).collect();
            let money = Money::from_minor(amount, 2).unwrap();
            let shares = money.allocate(&ratios).unwrap();
            let (weights, total) = weights_and_total(&ratios);

            for (share, weight) in shares.iter().zip(weights) {
                // |share - amount * weight / total| <= 1.5
                let deviation =
                    (share.scaled_amount() as i128 * total - amount as i128 * weight).abs();
                prop_assert!(2 * deviation <= 3 * total);
            }
        }
    }
}
