use soroban_sdk::{contracttype, Address};

/// Pool-wide configuration and totals for the single native-asset pool.
#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolState {
    /// Penalty percent at the instant of deposit, decaying linearly to 0
    /// over the commit period. 0-100 for this variant; 100 means a deposit
    /// is fully forfeited by an immediate exit.
    pub max_penalty_percent: u32,
    /// Commitment clock length in seconds.
    pub commit_period_secs: u64,
    /// Total principal currently held for all depositors.
    pub deposits_sum: i128,
    /// Forfeited value not yet claimed as bonus. Seeded by the optional
    /// creation-time bonus.
    pub bonuses_pool: i128,
    /// Number of holder records with a non-zero balance.
    pub holder_count: u64,
}

/// Per-depositor state. Removed outright when a withdrawal empties it.
#[contracttype]
#[derive(Clone, Debug)]
pub struct HolderRecord {
    pub balance: i128,
    /// Timestamp of the most recent deposit; reset in full on every
    /// additional deposit.
    pub deposit_time: u64,
}

/// Keys for each logical piece of contract state.
///
/// The pool is a singleton, so everything global sits in `instance()`;
/// only the unbounded holder set lives in `persistent()`.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Deployment admin. Stored in `instance()`.
    Admin,
    /// Native asset contract address. Stored in `instance()`.
    Asset,
    /// Pool configuration and totals. Stored in `instance()`.
    State,
    /// Holder record keyed by depositor. Stored in `persistent()`.
    Holder(Address),
}
