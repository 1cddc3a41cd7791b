//! Largest-remainder apportionment.
//!
//! Splits a whole number of minutes across weights so that every share is
//! an integer and the shares sum to exactly the pool.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Divides `pool` minutes across `weights` by the largest-remainder method.
///
/// Each weight's exact share is `pool * weight / Σweights`. Every share is
/// floored, then the minutes lost to flooring are handed out one at a time
/// to the shares with the largest fractional remainder. Equal remainders go
/// to the earlier weight.
///
/// Returns one allocation per weight, in input order. When the weights sum
/// to zero (or there are none) every allocation is zero, since there is
/// nothing to divide by.
///
/// Weights must be non-negative.
///
/// # Examples
///
/// ```
/// use overhead_allocation::allocation::apportion_largest_remainder;
/// use rust_decimal::Decimal;
///
/// // Shares are 18.75 and 56.25; the first has the larger remainder.
/// let shares = apportion_largest_remainder(75, &[Decimal::from(2), Decimal::from(6)]);
/// assert_eq!(shares, vec![19, 56]);
///
/// // Three equal weights: the tie goes to the first.
/// let shares = apportion_largest_remainder(10, &[Decimal::ONE, Decimal::ONE, Decimal::ONE]);
/// assert_eq!(shares, vec![4, 3, 3]);
/// ```
pub fn apportion_largest_remainder(pool: u32, weights: &[Decimal]) -> Vec<u32> {
    let total_weight: Decimal = weights.iter().sum();
    if weights.is_empty() || total_weight <= Decimal::ZERO {
        return vec![0; weights.len()];
    }

    let pool_minutes = Decimal::from(pool);
    let mut allocations = Vec::with_capacity(weights.len());
    let mut remainders = Vec::with_capacity(weights.len());

    for weight in weights {
        let share = pool_minutes * *weight / total_weight;
        let floor = share.floor();
        allocations.push(floor.to_u32().unwrap_or(0));
        remainders.push(share - floor);
    }

    let assigned: u32 = allocations.iter().sum();
    let shortfall = pool.saturating_sub(assigned) as usize;

    // Stable sort: equal remainders keep input order.
    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by(|&a, &b| remainders[b].cmp(&remainders[a]));

    for &index in order.iter().cycle().take(shortfall) {
        allocations[index] += 1;
    }

    allocations
}
