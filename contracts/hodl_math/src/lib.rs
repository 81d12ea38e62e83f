//! Pure accounting math for the HODL pool contracts.
//!
//! Every function here is a total function of its arguments: no storage, no
//! environment, no clock. The contracts read the ledger, call in here, then
//! write the ledger — which keeps the truncation behavior in one place.
//!
//! All divisions are integer floor divisions on non-negative operands. This
//! is load-bearing: an exact half-way penalty must come out as an exact half,
//! and remainders must truncate toward zero, or the pool-level conservation
//! checks stop holding at the unit level.

#![no_std]

/// Denominator base for whole-percent math.
const PERCENT_BASE: i128 = 100;

/// Time-decaying early-withdrawal penalty.
///
/// ```text
/// penalty = balance * penalty_percent * (commit_period - elapsed)
///           / (100 * commit_period)
/// ```
///
/// Returns 0 once `elapsed >= commit_period`. At `elapsed == 0` this is the
/// full `penalty_percent` cut of `balance`. The result never exceeds
/// `balance` for `penalty_percent <= 100`.
///
/// Returns `None` on intermediate overflow (checked `i128` arithmetic).
pub fn penalty_of(
    balance: i128,
    elapsed: u64,
    commit_period: u64,
    penalty_percent: u32,
) -> Option<i128> {
    if commit_period == 0 || elapsed >= commit_period {
        return Some(0);
    }
    let remaining = (commit_period - elapsed) as i128;
    balance
        .checked_mul(penalty_percent as i128)?
        .checked_mul(remaining)?
        .checked_div(PERCENT_BASE.checked_mul(commit_period as i128)?)
}

/// Seconds left until a holder becomes penalty-free. 0 once elapsed.
pub fn time_left(elapsed: u64, commit_period: u64) -> u64 {
    commit_period.saturating_sub(elapsed)
}

/// Pro-rata share of the bonus pool for one holder.
///
/// ```text
/// bonus = bonuses_pool * balance / deposits_sum
/// ```
///
/// `deposits_sum` must still include the holder's own balance; callers
/// compute the share *before* removing the holder from the totals. A zero
/// `deposits_sum` yields 0 (only reachable from read-only probes of an empty
/// pool — withdrawal paths require `balance > 0`, which implies a non-zero
/// sum).
pub fn bonus_share(balance: i128, deposits_sum: i128, bonuses_pool: i128) -> Option<i128> {
    if deposits_sum == 0 {
        return Some(0);
    }
    bonuses_pool.checked_mul(balance)?.checked_div(deposits_sum)
}
