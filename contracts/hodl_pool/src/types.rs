use soroban_sdk::{contracttype, Address};

// ─── Pool state ────────────────────────────────────────────────────────────

/// One commitment pool, keyed in storage by its asset contract address.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    /// Penalty percent charged at the instant of deposit, decaying linearly
    /// to 0 over the commit period. 1-100 for this variant.
    pub initial_penalty_percent: u32,
    /// Commitment clock length in seconds.
    pub commit_period_secs: u64,
    /// Total principal currently held for all depositors of this pool.
    pub deposits_sum: i128,
    /// Forfeited value not yet claimed as bonus.
    pub bonuses_pool: i128,
    /// Number of holder records with a non-zero balance.
    pub holder_count: u64,
}

/// Per-depositor state within one pool.
///
/// A record is created on first deposit and removed outright when a
/// withdrawal empties it; "no record" and "zero balance" are the same state.
#[contracttype]
#[derive(Clone, Debug)]
pub struct HolderRecord {
    /// Principal owned by this depositor; accumulates on repeated deposits.
    pub balance: i128,
    /// Timestamp of the most recent deposit. Every additional deposit resets
    /// it, restarting the commitment clock for the whole balance.
    pub deposit_time: u64,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

/// Keys for each logical piece of contract state.
///
/// * `Admin` lives in `instance()` — one entry, tiny, always needed.
/// * `Pool(asset)` and `Holder(asset, depositor)` live in `persistent()` —
///   unbounded sets that must not bloat the instance footprint.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Address allowed to register new pools. Stored in `instance()`.
    Admin,
    /// Pool record keyed by asset contract address. Stored in `persistent()`.
    Pool(Address),
    /// Holder record keyed by (asset, depositor). Stored in `persistent()`.
    Holder(Address, Address),
}
