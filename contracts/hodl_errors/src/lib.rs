#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by domain for monitoring, alerting, and dashboards.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `PoolError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup and initialization errors (codes 1-99).
    Initialization,
    /// Caller identity and permission errors (codes 100-199).
    Authorization,
    /// Pool creation parameter errors (codes 200-299).
    Configuration,
    /// Pool lookup and registration errors (codes 300-399).
    Pool,
    /// Deposit precondition errors (codes 400-499).
    Deposit,
    /// Withdrawal precondition errors (codes 500-599).
    Withdrawal,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  PoolError
/// @notice Canonical error enum shared by both HODL pool contracts.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///         Use the ErrorExt trait to retrieve the category and description.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Configuration
///   300 - 399 : Pool
///   400 - 499 : Deposit
///   500 - 599 : Withdrawal
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum PoolError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    /// Contracts: token pool, native pool
    NotInitialized = 1,

    /// Contract has already been initialized and cannot be re-initialized.
    /// Contracts: token pool, native pool
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// Caller is not the stored admin.
    /// Contracts: token pool
    NotAdmin = 100,

    // --- Configuration (200-299) ---
    /// Initial penalty percent is outside the permitted range for the
    /// variant (token: 1-100, native: 0-100).
    /// Contracts: token pool, native pool
    InvalidPenaltyPercent = 200,

    /// Commit period is outside the permitted range of 10 seconds to
    /// 365 days.
    /// Contracts: token pool, native pool
    InvalidCommitPeriod = 201,

    /// A value transfer was attached to an entry point that must not
    /// receive value (token pool creation).
    /// Contracts: token pool
    UnsupportedOperation = 202,

    // --- Pool (300-399) ---
    /// No pool is registered for the given asset.
    /// Contracts: token pool
    PoolNotFound = 300,

    /// A pool is already registered for the given asset.
    /// Contracts: token pool
    PoolAlreadyExists = 301,

    // --- Deposit (400-499) ---
    /// Deposit amount must be strictly positive, and the observed
    /// transfer delta must be strictly positive as well.
    /// Contracts: token pool, native pool
    InvalidAmount = 400,

    /// Cumulative balance would exceed the fixed per-depositor cap.
    /// Contracts: native pool
    DepositTooLarge = 401,

    /// The inbound token pull failed (insufficient allowance or balance).
    /// Contracts: token pool, native pool
    TransferFailed = 402,

    // --- Withdrawal (500-599) ---
    /// The depositor has no active balance in this pool.
    /// Contracts: token pool, native pool
    NothingToWithdraw = 500,

    /// Bonus withdrawal attempted before the commit period elapsed.
    /// Contracts: token pool, native pool
    StillPenalized = 501,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    /// Contracts: token pool, native pool
    Overflow = 700,

    /// Integer underflow detected during a checked arithmetic operation.
    /// Contracts: token pool, native pool
    Underflow = 701,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every PoolError variant.
/// @dev    Use this for structured logging, monitoring, and off-chain display.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for PoolError {
    fn category(&self) -> ErrorCategory {
        match self {
            PoolError::NotInitialized | PoolError::AlreadyInitialized => {
                ErrorCategory::Initialization
            }
            PoolError::NotAdmin => ErrorCategory::Authorization,

            PoolError::InvalidPenaltyPercent
            | PoolError::InvalidCommitPeriod
            | PoolError::UnsupportedOperation => ErrorCategory::Configuration,

            PoolError::PoolNotFound | PoolError::PoolAlreadyExists => ErrorCategory::Pool,

            PoolError::InvalidAmount | PoolError::DepositTooLarge | PoolError::TransferFailed => {
                ErrorCategory::Deposit
            }

            PoolError::NothingToWithdraw | PoolError::StillPenalized => ErrorCategory::Withdrawal,

            PoolError::Overflow | PoolError::Underflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            PoolError::NotInitialized => "Contract has not been initialized",
            PoolError::AlreadyInitialized => "Contract has already been initialized",
            PoolError::NotAdmin => "Caller is not the admin",
            PoolError::InvalidPenaltyPercent => "Initial penalty percent is out of range",
            PoolError::InvalidCommitPeriod => "Commit period must be between 10s and 365 days",
            PoolError::UnsupportedOperation => {
                "Value transfer attached to a non-payable entry point"
            }
            PoolError::PoolNotFound => "No pool registered for the given asset",
            PoolError::PoolAlreadyExists => "A pool is already registered for the given asset",
            PoolError::InvalidAmount => "Deposit amount must be strictly positive (> 0)",
            PoolError::DepositTooLarge => "Cumulative balance would exceed the deposit cap",
            PoolError::TransferFailed => "Inbound token pull failed (allowance or balance)",
            PoolError::NothingToWithdraw => "Depositor has no active balance in this pool",
            PoolError::StillPenalized => "Commit period has not elapsed yet",
            PoolError::Overflow => "Integer overflow in checked arithmetic",
            PoolError::Underflow => "Integer underflow in checked arithmetic",
        }
    }
}

#[cfg(test)]
mod test_errors;
