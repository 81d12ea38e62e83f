//! # HODL Pool Contract (token variant)
//!
//! Commitment-based custody pools: a depositor locks a token for the pool's
//! commit period; withdrawing early forfeits a linearly decaying slice of the
//! principal into a shared bonus pool, and depositors who wait out the full
//! period withdraw their principal plus a pro-rata share of the accumulated
//! forfeitures.
//!
//! One contract instance hosts any number of independent pools, one per
//! asset contract address. Pool-wide totals and per-holder records never mix
//! across assets.
//!
//! ## Key design decisions
//!
//! - **Observed-delta accounting**: inbound pulls credit the change in the
//!   contract's own token balance, never the requested amount, so
//!   fee-on-transfer and rebasing assets cannot desync the ledger.
//! - **Checks-Effects-Interactions**: all storage writes land before the
//!   outbound transfer of a withdrawal.
//! - **Whole-balance withdrawals**: every withdrawal empties the holder's
//!   record; there is no partial exit.
//! - **Typed errors**: every failure is a `PoolError` code, never a bare
//!   string panic.
//!
//! ## Storage Layout
//!
//! | Key                           | Tier          | Lifecycle        |
//! |-------------------------------|---------------|------------------|
//! | `DataKey::Admin`              | `instance()`  | Entire contract  |
//! | `DataKey::Pool(asset)`        | `persistent()`| Per pool         |
//! | `DataKey::Holder(asset, who)` | `persistent()`| Per active stake |

#![no_std]

mod types;

use hodl_errors::PoolError;
use types::{DataKey, HolderRecord, Pool};

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
/// Upper bound of the initial penalty percent.
pub const MAX_PENALTY_PERCENT: u32 = 100;

// ─── Events ────────────────────────────────────────────────────────────────

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolCreated {
    pub asset: Address,
    pub initial_penalty_percent: u32,
    pub commit_period_secs: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposited {
    pub asset: Address,
    pub depositor: Address,
    /// Credited (observed) amount, which may be below the requested amount
    /// for fee-on-transfer assets.
    pub amount: i128,
    pub time: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    pub asset: Address,
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
pub struct HodlPool;

#[contractimpl]
impl HodlPool {
    // ── Internal helpers ───────────────────────────────────────────────────

    fn require_admin(e: &Env, caller: &Address) -> Result<(), PoolError> {
        caller.require_auth();
        let stored: Address = e
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(PoolError::NotInitialized)?;
        if stored != *caller {
            return Err(PoolError::NotAdmin);
        }
        Ok(())
    }

    /// Read a `Pool` from `persistent()` storage, bump its TTL, and return
    /// it — or `Err(PoolError::PoolNotFound)` without a panic.
    fn load_pool(e: &Env, asset: &Address) -> Result<Pool, PoolError> {
        let key = DataKey::Pool(asset.clone());
        let storage = e.storage().persistent();
        let pool: Pool = storage.get(&key).ok_or(PoolError::PoolNotFound)?;
        storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
        Ok(pool)
    }

    fn save_pool(e: &Env, asset: &Address, pool: &Pool) {
        let key = DataKey::Pool(asset.clone());
        e.storage().persistent().set(&key, pool);
        e.storage()
            .persistent()
            .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
    }

    /// Holder records are optional by design: no record and zero balance are
    /// the same state, so this returns `Option` rather than an error.
    fn load_holder(e: &Env, asset: &Address, depositor: &Address) -> Option<HolderRecord> {
        let key = DataKey::Holder(asset.clone(), depositor.clone());
        let storage = e.storage().persistent();
        let record: HolderRecord = storage.get(&key)?;
        storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
        Some(record)
    }

    fn save_holder(e: &Env, asset: &Address, depositor: &Address, record: &HolderRecord) {
        let key = DataKey::Holder(asset.clone(), depositor.clone());
        e.storage().persistent().set(&key, record);
        e.storage()
            .persistent()
            .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
    }

    fn remove_holder(e: &Env, asset: &Address, depositor: &Address) {
        e.storage()
            .persistent()
            .remove(&DataKey::Holder(asset.clone(), depositor.clone()));
    }

    /// Pull `amount` of `asset` from `from` into custody and return the
    /// observed balance delta. The delta — not `amount` — is what the ledger
    /// credits: a fee-on-transfer asset delivers less than requested.
    fn pull_asset(
        e: &Env,
        asset: &Address,
        from: &Address,
        amount: i128,
    ) -> Result<i128, PoolError> {
        let client = TokenClient::new(e, asset);
        let contract = e.current_contract_address();
        let before = client.balance(&contract);
        client
            .try_transfer_from(&contract, from, &contract, &amount)
            .map_err(|_| PoolError::TransferFailed)?
            .map_err(|_| PoolError::TransferFailed)?;
        let after = client.balance(&contract);
        after.checked_sub(before).ok_or(PoolError::Underflow)
    }

    /// Send `amount` of `asset` out of custody. Called only after all ledger
    /// writes for the operation have landed.
    fn push_asset(e: &Env, asset: &Address, to: &Address, amount: i128) {
        if amount > 0 {
            let contract = e.current_contract_address();
            TokenClient::new(e, asset).transfer(&contract, to, &amount);
        }
    }

    fn validate_pool_params(
        initial_penalty_percent: u32,
        commit_period_secs: u64,
    ) -> Result<(), PoolError> {
        // This variant forbids a zero penalty: a pool with no penalty can
        // never accumulate a bonus and is a plain custody account.
        if initial_penalty_percent == 0 || initial_penalty_percent > MAX_PENALTY_PERCENT {
            return Err(PoolError::InvalidPenaltyPercent);
        }
        if !(MIN_COMMIT_PERIOD_SECS..=MAX_COMMIT_PERIOD_SECS).contains(&commit_period_secs) {
            return Err(PoolError::InvalidCommitPeriod);
        }
        Ok(())
    }

    // ── Admin setup ────────────────────────────────────────────────────────

    /// One-time initialization. Stores the admin allowed to register pools.
    pub fn initialize(e: Env, admin: Address) -> Result<(), PoolError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(PoolError::AlreadyInitialized);
        }
        e.storage().instance().set(&DataKey::Admin, &admin);
        Ok(())
    }

    /// Register a new pool for `asset`.
    ///
    /// `initial_bonus` must be 0: this variant refuses any value transfer at
    /// creation time. The parameter exists so both pool variants share one
    /// creation signature.
    ///
    /// # Errors
    /// * `NotInitialized` / `NotAdmin` — caller is not the stored admin
    /// * `UnsupportedOperation` — `initial_bonus != 0`
    /// * `InvalidPenaltyPercent` — penalty outside 1-100
    /// * `InvalidCommitPeriod` — commit period outside 10 s - 365 d
    /// * `PoolAlreadyExists` — a pool for `asset` is already registered
    pub fn create_pool(
        e: Env,
        admin: Address,
        asset: Address,
        initial_penalty_percent: u32,
        commit_period_secs: u64,
        initial_bonus: i128,
    ) -> Result<(), PoolError> {
        Self::require_admin(&e, &admin)?;

        if initial_bonus != 0 {
            return Err(PoolError::UnsupportedOperation);
        }
        Self::validate_pool_params(initial_penalty_percent, commit_period_secs)?;

        if e.storage()
            .persistent()
            .has(&DataKey::Pool(asset.clone()))
        {
            return Err(PoolError::PoolAlreadyExists);
        }

        let pool = Pool {
            initial_penalty_percent,
            commit_period_secs,
            deposits_sum: 0,
            bonuses_pool: 0,
            holder_count: 0,
        };
        Self::save_pool(&e, &asset, &pool);

        PoolCreated {
            asset,
            initial_penalty_percent,
            commit_period_secs,
        }
        .publish(&e);

        Ok(())
    }

    // ── Depositor entry points ─────────────────────────────────────────────

    /// Lock `amount` of `asset` for `depositor`, restarting the commitment
    /// clock for their whole accumulated balance.
    ///
    /// Returns the credited amount — the observed transfer delta, which may
    /// be below `amount` for fee-on-transfer assets.
    ///
    /// # Errors
    /// * `PoolNotFound` — no pool registered for `asset`
    /// * `InvalidAmount` — `amount <= 0`, or the observed delta was `<= 0`
    /// * `TransferFailed` — the pull failed (allowance or balance shortfall)
    pub fn deposit(
        e: Env,
        asset: Address,
        depositor: Address,
        amount: i128,
    ) -> Result<i128, PoolError> {
        depositor.require_auth();

        if amount <= 0 {
            return Err(PoolError::InvalidAmount);
        }
        let mut pool = Self::load_pool(&e, &asset)?;

        // The pull precedes the ledger writes because the credited quantity
        // is the observed delta. A failure anywhere below rolls the pull
        // back with the rest of the invocation.
        let received = Self::pull_asset(&e, &asset, &depositor, amount)?;
        if received <= 0 {
            return Err(PoolError::InvalidAmount);
        }

        let now = e.ledger().timestamp();
        let mut record = Self::load_holder(&e, &asset, &depositor).unwrap_or(HolderRecord {
            balance: 0,
            deposit_time: now,
        });
        let first_deposit = record.balance == 0;

        record.balance = record
            .balance
            .checked_add(received)
            .ok_or(PoolError::Overflow)?;
        // Full clock reset on every deposit, covering the entire balance.
        record.deposit_time = now;

        pool.deposits_sum = pool
            .deposits_sum
            .checked_add(received)
            .ok_or(PoolError::Overflow)?;
        if first_deposit {
            pool.holder_count += 1;
        }

        Self::save_holder(&e, &asset, &depositor, &record);
        Self::save_pool(&e, &asset, &pool);

        Deposited {
            asset,
            depositor,
            amount: received,
            time: now,
        }
        .publish(&e);

        Ok(received)
    }

    /// Withdraw the whole balance, forfeiting the current penalty into the
    /// pool's bonus pot. Available from the moment of deposit; once the
    /// commit period has elapsed the penalty is 0 and this pays out the full
    /// principal.
    ///
    /// Returns the payout transferred to the depositor.
    ///
    /// # Errors
    /// * `PoolNotFound` — no pool registered for `asset`
    /// * `NothingToWithdraw` — no active balance for `depositor`
    pub fn withdraw_with_penalty(
        e: Env,
        asset: Address,
        depositor: Address,
    ) -> Result<i128, PoolError> {
        depositor.require_auth();

        let mut pool = Self::load_pool(&e, &asset)?;
        let record =
            Self::load_holder(&e, &asset, &depositor).ok_or(PoolError::NothingToWithdraw)?;

        let now = e.ledger().timestamp();
        let time_held = now.saturating_sub(record.deposit_time);
        let penalty = hodl_math::penalty_of(
            record.balance,
            time_held,
            pool.commit_period_secs,
            pool.initial_penalty_percent,
        )
        .ok_or(PoolError::Overflow)?;
        let payout = record
            .balance
            .checked_sub(penalty)
            .ok_or(PoolError::Underflow)?;

        // Effects before the outbound transfer.
        pool.deposits_sum = pool
            .deposits_sum
            .checked_sub(record.balance)
            .ok_or(PoolError::Underflow)?;
        pool.bonuses_pool = pool
            .bonuses_pool
            .checked_add(penalty)
            .ok_or(PoolError::Overflow)?;
        pool.holder_count = pool.holder_count.saturating_sub(1);
        Self::remove_holder(&e, &asset, &depositor);
        Self::save_pool(&e, &asset, &pool);

        Self::push_asset(&e, &asset, &depositor, payout);

        Withdrawn {
            asset,
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

    /// Withdraw the whole balance plus a pro-rata share of the bonus pool.
    /// Only available once the penalty has decayed to 0.
    ///
    /// The share is computed against `deposits_sum` *including* the
    /// withdrawing holder, as of the instant before the withdrawal.
    ///
    /// Returns the payout transferred to the depositor.
    ///
    /// # Errors
    /// * `PoolNotFound` — no pool registered for `asset`
    /// * `NothingToWithdraw` — no active balance for `depositor`
    /// * `StillPenalized` — the penalty has not decayed to 0 yet
    pub fn withdraw_with_bonus(
        e: Env,
        asset: Address,
        depositor: Address,
    ) -> Result<i128, PoolError> {
        depositor.require_auth();

        let mut pool = Self::load_pool(&e, &asset)?;
        let record =
            Self::load_holder(&e, &asset, &depositor).ok_or(PoolError::NothingToWithdraw)?;

        let now = e.ledger().timestamp();
        let time_held = now.saturating_sub(record.deposit_time);
        let penalty = hodl_math::penalty_of(
            record.balance,
            time_held,
            pool.commit_period_secs,
            pool.initial_penalty_percent,
        )
        .ok_or(PoolError::Overflow)?;
        if penalty > 0 {
            return Err(PoolError::StillPenalized);
        }

        let bonus = hodl_math::bonus_share(record.balance, pool.deposits_sum, pool.bonuses_pool)
            .ok_or(PoolError::Overflow)?;
        let payout = record
            .balance
            .checked_add(bonus)
            .ok_or(PoolError::Overflow)?;

        // Effects before the outbound transfer.
        pool.deposits_sum = pool
            .deposits_sum
            .checked_sub(record.balance)
            .ok_or(PoolError::Underflow)?;
        pool.bonuses_pool = pool
            .bonuses_pool
            .checked_sub(bonus)
            .ok_or(PoolError::Underflow)?;
        pool.holder_count = pool.holder_count.saturating_sub(1);
        Self::remove_holder(&e, &asset, &depositor);
        Self::save_pool(&e, &asset, &pool);

        Self::push_asset(&e, &asset, &depositor, payout);

        Withdrawn {
            asset,
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

    /// Returns `true` if a pool is registered for `asset`.
    pub fn has_pool(e: Env, asset: Address) -> bool {
        e.storage().persistent().has(&DataKey::Pool(asset))
    }

    /// Returns the full pool record for `asset`.
    pub fn get_pool(e: Env, asset: Address) -> Result<Pool, PoolError> {
        Self::load_pool(&e, &asset)
    }

    /// Current principal of `depositor` in the `asset` pool; 0 when absent.
    pub fn balance_of(e: Env, asset: Address, depositor: Address) -> i128 {
        Self::load_holder(&e, &asset, &depositor)
            .map(|r| r.balance)
            .unwrap_or(0)
    }

    /// Penalty `depositor` would forfeit by withdrawing right now; 0 for an
    /// absent depositor or an elapsed commitment.
    pub fn penalty_of(e: Env, asset: Address, depositor: Address) -> Result<i128, PoolError> {
        let pool = Self::load_pool(&e, &asset)?;
        let record = match Self::load_holder(&e, &asset, &depositor) {
            Some(r) => r,
            None => return Ok(0),
        };
        let elapsed = e.ledger().timestamp().saturating_sub(record.deposit_time);
        hodl_math::penalty_of(
            record.balance,
            elapsed,
            pool.commit_period_secs,
            pool.initial_penalty_percent,
        )
        .ok_or(PoolError::Overflow)
    }

    /// Bonus `depositor` would collect by withdrawing with bonus right now
    /// (whether or not they are still penalized); 0 for an absent depositor.
    pub fn bonus_of(e: Env, asset: Address, depositor: Address) -> Result<i128, PoolError> {
        let pool = Self::load_pool(&e, &asset)?;
        let record = match Self::load_holder(&e, &asset, &depositor) {
            Some(r) => r,
            None => return Ok(0),
        };
        hodl_math::bonus_share(record.balance, pool.deposits_sum, pool.bonuses_pool)
            .ok_or(PoolError::Overflow)
    }

    /// Seconds until `depositor` becomes penalty-free; 0 for an absent
    /// depositor or an elapsed commitment.
    pub fn time_left_to_hold(
        e: Env,
        asset: Address,
        depositor: Address,
    ) -> Result<u64, PoolError> {
        let pool = Self::load_pool(&e, &asset)?;
        let record = match Self::load_holder(&e, &asset, &depositor) {
            Some(r) => r,
            None => return Ok(0),
        };
        let elapsed = e.ledger().timestamp().saturating_sub(record.deposit_time);
        Ok(hodl_math::time_left(elapsed, pool.commit_period_secs))
    }

    /// Total principal held across all depositors of the `asset` pool.
    pub fn deposits_sum(e: Env, asset: Address) -> Result<i128, PoolError> {
        Ok(Self::load_pool(&e, &asset)?.deposits_sum)
    }

    /// Forfeited value not yet claimed as bonus in the `asset` pool.
    pub fn bonuses_pool(e: Env, asset: Address) -> Result<i128, PoolError> {
        Ok(Self::load_pool(&e, &asset)?.bonuses_pool)
    }

    /// Number of depositors with a non-zero balance in the `asset` pool.
    pub fn holder_count(e: Env, asset: Address) -> Result<u64, PoolError> {
        Ok(Self::load_pool(&e, &asset)?.holder_count)
    }

    /// Commit period of the `asset` pool, in seconds.
    pub fn commit_period(e: Env, asset: Address) -> Result<u64, PoolError> {
        Ok(Self::load_pool(&e, &asset)?.commit_period_secs)
    }

    /// Initial penalty percent of the `asset` pool.
    pub fn initial_penalty_percent(e: Env, asset: Address) -> Result<u32, PoolError> {
        Ok(Self::load_pool(&e, &asset)?.initial_penalty_percent)
    }
}
