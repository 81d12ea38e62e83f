//! # HODL Pool Contract (native-asset variant)
//!
//! A single commitment pool over the chain's native asset: depositors lock
//! up to a fixed 1-unit cap, early exits forfeit a linearly decaying penalty
//! into a shared bonus pot, and depositors who wait out the commit period
//! collect their principal plus a pro-rata share of the pot.
//!
//! Differences from the token variant:
//!
//! - Exactly one pool, fixed at initialization.
//! - A hard per-depositor deposit cap (`MAX_DEPOSIT`).
//! - Penalty percent of 0 (custody only, no decay to model) and 100 (full
//!   forfeiture at time zero) are both permitted.
//! - The creator may seed the bonus pot with an opening balance.
//! - Native-asset transfers deliver exactly what is requested, so the ledger
//!   credits the requested amount directly; no delta measurement is needed.

#![no_std]

mod types;

use hodl_errors::PoolError;
use types::{DataKey, HolderRecord, PoolState};

use soroban_sdk::{contract, contractevent, contractimpl, token::TokenClient, Address, Env};



// ─── TTL constants ─────────────────────────────────────────────────────────

/// Minimum ledger sequence TTL before a bump is requested (~1 day at 5 s/ledger).
const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
const BUMP_TARGET: u32 = 518_400;

// ─── Parameter bounds ──────────────────────────────────────────────────────

/// Shortest accepted commit period.
pub const MIN_COMMIT_PERIOD_SECS: u64 = 10;
/// Longest accepted commit period (365 days).
pub const MAX_COMMIT_PERIOD_SECS: u64 = 365 * 86_400;
/// Upper bound of the penalty percent.
pub const MAX_PENALTY_PERCENT: u32 = 100;
/// Per-depositor cumulative balance cap: 1 whole unit at 7 decimals.
pub const MAX_DEPOSIT: i128 = 10_000_000;

// ─── Events ────────────────────────────────────────────────────────────────

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposited {
    pub depositor: Address,
    pub amount: i128,
    pub time: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    pub depositor: Address,
    /// Payout actually transferred out.
    pub amount: i128,
    /// Principal held at the instant of withdrawal.
    pub deposit_amount: i128,
    pub penalty: i128,
    pub bonus: i128,
    pub time_held: u64,
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct NativeHodlPool;

#[contractimpl]
impl NativeHodlPool {
    // ── Internal helpers ───────────────────────────────────────────────────

    fn load_state(e: &Env) -> Result<PoolState, PoolError> {
        e.storage()
            .instance()
            .get(&DataKey::State)
            .ok_or(PoolError::NotInitialized)
    }

    fn save_state(e: &Env, state: &PoolState) {
        e.storage().instance().set(&DataKey::State, state);
    }

    fn asset(e: &Env) -> Result<Address, PoolError> {
        e.storage()
            .instance()
            .get(&DataKey::Asset)
            .ok_or(PoolError::NotInitialized)
    }

    fn load_holder(e: &Env, depositor: &Address) -> Option<HolderRecord> {
        let key = DataKey::Holder(depositor.clone());
        let storage = e.storage().persistent();
        let record: HolderRecord = storage.get(&key)?;
        storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
        Some(record)
    }

    fn save_holder(e: &Env, depositor: &Address, record: &HolderRecord) {
        let key = DataKey::Holder(depositor.clone());
        e.storage().persistent().set(&key, record);
        e.storage()
            .persistent()
            .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
    }

    fn remove_holder(e: &Env, depositor: &Address) {
        e.storage()
            .persistent()
            .remove(&DataKey::Holder(depositor.clone()));
    }

    /// Pull `amount` of the native asset from `from` into custody. The
    /// native asset delivers exactly what is requested; there is no delta to
    /// measure.
    fn pull_native(e: &Env, asset: &Address, from: &Address, amount: i128) -> Result<(), PoolError> {
        let contract = e.current_contract_address();
        TokenClient::new(e, asset)
            .try_transfer_from(&contract, from, &contract, &amount)
            .map_err(|_| PoolError::TransferFailed)?
            .map_err(|_| PoolError::TransferFailed)?;
        Ok(())
    }

    fn push_native(e: &Env, asset: &Address, to: &Address, amount: i128) {
        if amount > 0 {
            let contract = e.current_contract_address();
            TokenClient::new(e, asset).transfer(&contract, to, &amount);
        }
    }

    // ── Deployment ─────────────────────────────────────────────────────────

    /// One-time initialization of the single pool.
    ///
    /// Unlike the token variant, a penalty percent of 0 is accepted (the
    /// pool degenerates to plain custody), and `initial_bonus > 0` seeds the
    /// bonus pot with value pulled from `admin` at creation time.
    ///
    /// # Errors
    /// * `AlreadyInitialized` — called twice
    /// * `InvalidPenaltyPercent` — penalty above 100
    /// * `InvalidCommitPeriod` — commit period outside 10 s - 365 d
    /// * `InvalidAmount` — `initial_bonus < 0`
    /// * `TransferFailed` — the seed pull failed
    pub fn initialize(
        e: Env,
        admin: Address,
        asset: Address,
        max_penalty_percent: u32,
        commit_period_secs: u64,
        initial_bonus: i128,
    ) -> Result<(), PoolError> {
        admin.require_auth();

        if e.storage().instance().has(&DataKey::State) {
            return Err(PoolError::AlreadyInitialized);
        }
        if max_penalty_percent > MAX_PENALTY_PERCENT {
            return Err(PoolError::InvalidPenaltyPercent);
        }
        if !(MIN_COMMIT_PERIOD_SECS..=MAX_COMMIT_PERIOD_SECS).contains(&commit_period_secs) {
            return Err(PoolError::InvalidCommitPeriod);
        }
        if initial_bonus < 0 {
            return Err(PoolError::InvalidAmount);
        }

        if initial_bonus > 0 {
            Self::pull_native(&e, &asset, &admin, initial_bonus)?;
        }

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Asset, &asset);
        Self::save_state(
            &e,
            &PoolState {
                max_penalty_percent,
                commit_period_secs,
                deposits_sum: 0,
                bonuses_pool: initial_bonus,
                holder_count: 0,
            },
        );
        Ok(())
    }

    // ── Depositor entry points ─────────────────────────────────────────────

    /// Lock `amount` for `depositor`, restarting their commitment clock.
    ///
    /// # Errors
    /// * `NotInitialized` — pool not created yet
    /// * `InvalidAmount` — `amount <= 0`
    /// * `DepositTooLarge` — cumulative balance would exceed `MAX_DEPOSIT`
    /// * `TransferFailed` — the pull failed
    pub fn deposit(e: Env, depositor: Address, amount: i128) -> Result<i128, PoolError> {
        depositor.require_auth();

        if amount <= 0 {
            return Err(PoolError::InvalidAmount);
        }
        let mut state = Self::load_state(&e)?;
        let asset = Self::asset(&e)?;

        let now = e.ledger().timestamp();
        let mut record = Self::load_holder(&e, &depositor).unwrap_or(HolderRecord {
            balance: 0,
            deposit_time: now,
        });
        let first_deposit = record.balance == 0;

        let new_balance = record
            .balance
            .checked_add(amount)
            .ok_or(PoolError::Overflow)?;
        if new_balance > MAX_DEPOSIT {
            return Err(PoolError::DepositTooLarge);
        }

        Self::pull_native(&e, &asset, &depositor, amount)?;

        record.balance = new_balance;
        // Full clock reset on every deposit, covering the entire balance.
        record.deposit_time = now;

        state.deposits_sum = state
            .deposits_sum
            .checked_add(amount)
            .ok_or(PoolError::Overflow)?;
        if first_deposit {
            state.holder_count += 1;
        }

        Self::save_holder(&e, &depositor, &record);
        Self::save_state(&e, &state);

        Deposited {
            depositor,
            amount,
            time: now,
        }
        .publish(&e);

        Ok(amount)
    }

    /// Withdraw the whole balance, forfeiting the current penalty into the
    /// bonus pot. With `max_penalty_percent == 100` an immediate exit
    /// forfeits everything.
    ///
    /// # Errors
    /// * `NotInitialized` — pool not created yet
    /// * `NothingToWithdraw` — no active balance for `depositor`
    pub fn withdraw_with_penalty(e: Env, depositor: Address) -> Result<i128, PoolError> {
        depositor.require_auth();

        let mut state = Self::load_state(&e)?;
        let asset = Self::asset(&e)?;
        let record = Self::load_holder(&e, &depositor).ok_or(PoolError::NothingToWithdraw)?;

        let now = e.ledger().timestamp();
        let time_held = now.saturating_sub(record.deposit_time);
        let penalty = hodl_math::penalty_of(
            record.balance,
            time_held,
            state.commit_period_secs,
            state.max_penalty_percent,
        )
        .ok_or(PoolError::Overflow)?;
        let payout = record
            .balance
            .checked_sub(penalty)
            .ok_or(PoolError::Underflow)?;

        // Effects before the outbound transfer.
        state.deposits_sum = state
            .deposits_sum
            .checked_sub(record.balance)
            .ok_or(PoolError::Underflow)?;
        state.bonuses_pool = state
            .bonuses_pool
            .checked_add(penalty)
            .ok_or(PoolError::Overflow)?;
        state.holder_count = state.holder_count.saturating_sub(1);
        Self::remove_holder(&e, &depositor);
        Self::save_state(&e, &state);

        Self::push_native(&e, &asset, &depositor, payout);

        Withdrawn {
            depositor,
            amount: payout,
            deposit_amount: record.balance,
            penalty,
            bonus: 0,
            time_held,
        }
        .publish(&e);

        Ok(payout)
    }

    /// Withdraw the whole balance plus a pro-rata share of the bonus pot.
    /// Only available once the penalty has decayed to 0.
    ///
    /// # Errors
    /// * `NotInitialized` — pool not created yet
    /// * `NothingToWithdraw` — no active balance for `depositor`
    /// * `StillPenalized` — the penalty has not decayed to 0 yet
    pub fn withdraw_with_bonus(e: Env, depositor: Address) -> Result<i128, PoolError> {
        depositor.require_auth();

        let mut state = Self::load_state(&e)?;
        let asset = Self::asset(&e)?;
        let record = Self::load_holder(&e, &depositor).ok_or(PoolError::NothingToWithdraw)?;

        let now = e.ledger().timestamp();
        let time_held = now.saturating_sub(record.deposit_time);
        let penalty = hodl_math::penalty_of(
            record.balance,
            time_held,
            state.commit_period_secs,
            state.max_penalty_percent,
        )
        .ok_or(PoolError::Overflow)?;
        if penalty > 0 {
            return Err(PoolError::StillPenalized);
        }

        let bonus = hodl_math::bonus_share(record.balance, state.deposits_sum, state.bonuses_pool)
            .ok_or(PoolError::Overflow)?;
        let payout = record
            .balance
            .checked_add(bonus)
            .ok_or(PoolError::Overflow)?;

        // Effects before the outbound transfer.
        state.deposits_sum = state
            .deposits_sum
            .checked_sub(record.balance)
            .ok_or(PoolError::Underflow)?;
        state.bonuses_pool = state
            .bonuses_pool
            .checked_sub(bonus)
            .ok_or(PoolError::Underflow)?;
        state.holder_count = state.holder_count.saturating_sub(1);
        Self::remove_holder(&e, &depositor);
        Self::save_state(&e, &state);

        Self::push_native(&e, &asset, &depositor, payout);

        Withdrawn {
            depositor,
            amount: payout,
            deposit_amount: record.balance,
            penalty: 0,
            bonus,
            time_held,
        }
        .publish(&e);

        Ok(payout)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Current principal of `depositor`; 0 when absent.
    pub fn balance_of(e: Env, depositor: Address) -> i128 {
        Self::load_holder(&e, &depositor)
            .map(|r| r.balance)
            .unwrap_or(0)
    }

    /// Penalty `depositor` would forfeit by withdrawing right now.
    pub fn penalty_of(e: Env, depositor: Address) -> Result<i128, PoolError> {
        let state = Self::load_state(&e)?;
        let record = match Self::load_holder(&e, &depositor) {
            Some(r) => r,
            None => return Ok(0),
        };
        let elapsed = e.ledger().timestamp().saturating_sub(record.deposit_time);
        hodl_math::penalty_of(
            record.balance,
            elapsed,
            state.commit_period_secs,
            state.max_penalty_percent,
        )
        .ok_or(PoolError::Overflow)
    }

    /// Bonus `depositor` would collect by withdrawing with bonus right now.
    pub fn bonus_of(e: Env, depositor: Address) -> Result<i128, PoolError> {
        let state = Self::load_state(&e)?;
        let record = match Self::load_holder(&e, &depositor) {
            Some(r) => r,
            None => return Ok(0),
        };
        hodl_math::bonus_share(record.balance, state.deposits_sum, state.bonuses_pool)
            .ok_or(PoolError::Overflow)
    }

    /// Seconds until `depositor` becomes penalty-free.
    pub fn time_left_to_hold(e: Env, depositor: Address) -> Result<u64, PoolError> {
        let state = Self::load_state(&e)?;
        let record = match Self::load_holder(&e, &depositor) {
            Some(r) => r,
            None => return Ok(0),
        };
        let elapsed = e.ledger().timestamp().saturating_sub(record.deposit_time);
        Ok(hodl_math::time_left(elapsed, state.commit_period_secs))
    }

    /// Total principal held across all depositors.
    pub fn deposits_sum(e: Env) -> Result<i128, PoolError> {
        Ok(Self::load_state(&e)?.deposits_sum)
    }

    /// Forfeited value not yet claimed as bonus.
    pub fn bonuses_pool(e: Env) -> Result<i128, PoolError> {
        Ok(Self::load_state(&e)?.bonuses_pool)
    }

    /// Number of depositors with a non-zero balance.
    pub fn holder_count(e: Env) -> Result<u64, PoolError> {
        Ok(Self::load_state(&e)?.holder_count)
    }

    /// Commit period in seconds.
    pub fn commit_period(e: Env) -> Result<u64, PoolError> {
        Ok(Self::load_state(&e)?.commit_period_secs)
    }

    /// Penalty percent applied at the instant of deposit.
    pub fn max_penalty_percent(e: Env) -> Result<u32, PoolError> {
        Ok(Self::load_state(&e)?.max_penalty_percent)
    }

    /// Per-depositor cumulative balance cap.
    pub fn max_deposit(_e: Env) -> i128 {
        MAX_DEPOSIT
    }
}
