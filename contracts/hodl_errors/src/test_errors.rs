#[cfg(test)]
mod tests {
    extern crate std;
    use crate::{ErrorCategory, ErrorExt, PoolError};
    use std::vec::Vec;

    fn all_variants() -> Vec<PoolError> {
        std::vec![
            PoolError::NotInitialized,
            PoolError::AlreadyInitialized,
            PoolError::NotAdmin,
            PoolError::InvalidPenaltyPercent,
            PoolError::InvalidCommitPeriod,
            PoolError::UnsupportedOperation,
            PoolError::PoolNotFound,
            PoolError::PoolAlreadyExists,
            PoolError::InvalidAmount,
            PoolError::DepositTooLarge,
            PoolError::TransferFailed,
            PoolError::NothingToWithdraw,
            PoolError::StillPenalized,
            PoolError::Overflow,
            PoolError::Underflow,
        ]
    }

    // --- Wire code tests ---

    #[test]
    fn test_codes_initialization() {
        assert_eq!(PoolError::NotInitialized as u32, 1);
        assert_eq!(PoolError::AlreadyInitialized as u32, 2);
    }

    #[test]
    fn test_codes_authorization() {
        assert_eq!(PoolError::NotAdmin as u32, 100);
    }

    #[test]
    fn test_codes_configuration() {
        assert_eq!(PoolError::InvalidPenaltyPercent as u32, 200);
        assert_eq!(PoolError::InvalidCommitPeriod as u32, 201);
        assert_eq!(PoolError::UnsupportedOperation as u32, 202);
    }

    #[test]
    fn test_codes_pool() {
        assert_eq!(PoolError::PoolNotFound as u32, 300);
        assert_eq!(PoolError::PoolAlreadyExists as u32, 301);
    }

    #[test]
    fn test_codes_deposit() {
        assert_eq!(PoolError::InvalidAmount as u32, 400);
        assert_eq!(PoolError::DepositTooLarge as u32, 401);
        assert_eq!(PoolError::TransferFailed as u32, 402);
    }

    #[test]
    fn test_codes_withdrawal() {
        assert_eq!(PoolError::NothingToWithdraw as u32, 500);
        assert_eq!(PoolError::StillPenalized as u32, 501);
    }

    #[test]
    fn test_codes_arithmetic() {
        assert_eq!(PoolError::Overflow as u32, 700);
        assert_eq!(PoolError::Underflow as u32, 701);
    }

    // --- Category mapping tests ---

    #[test]
    fn test_category_initialization() {
        assert_eq!(
            PoolError::NotInitialized.category(),
            ErrorCategory::Initialization
        );
        assert_eq!(
            PoolError::AlreadyInitialized.category(),
            ErrorCategory::Initialization
        );
    }

    #[test]
    fn test_category_authorization() {
        assert_eq!(PoolError::NotAdmin.category(), ErrorCategory::Authorization);
    }

    #[test]
    fn test_category_configuration() {
        assert_eq!(
            PoolError::InvalidPenaltyPercent.category(),
            ErrorCategory::Configuration
        );
        assert_eq!(
            PoolError::InvalidCommitPeriod.category(),
            ErrorCategory::Configuration
        );
        assert_eq!(
            PoolError::UnsupportedOperation.category(),
            ErrorCategory::Configuration
        );
    }

    #[test]
    fn test_category_pool() {
        assert_eq!(PoolError::PoolNotFound.category(), ErrorCategory::Pool);
        assert_eq!(PoolError::PoolAlreadyExists.category(), ErrorCategory::Pool);
    }

    #[test]
    fn test_category_deposit() {
        assert_eq!(PoolError::InvalidAmount.category(), ErrorCategory::Deposit);
        assert_eq!(PoolError::DepositTooLarge.category(), ErrorCategory::Deposit);
        assert_eq!(PoolError::TransferFailed.category(), ErrorCategory::Deposit);
    }

    #[test]
    fn test_category_withdrawal() {
        assert_eq!(
            PoolError::NothingToWithdraw.category(),
            ErrorCategory::Withdrawal
        );
        assert_eq!(
            PoolError::StillPenalized.category(),
            ErrorCategory::Withdrawal
        );
    }

    #[test]
    fn test_category_arithmetic() {
        assert_eq!(PoolError::Overflow.category(), ErrorCategory::Arithmetic);
        assert_eq!(PoolError::Underflow.category(), ErrorCategory::Arithmetic);
    }

    // --- Description tests ---

    #[test]
    fn test_descriptions_non_empty() {
        for e in all_variants() {
            assert!(!e.description().is_empty(), "{:?} has empty description", e);
        }
    }

    #[test]
    fn test_descriptions_unique() {
        let variants = all_variants();
        for i in 0..variants.len() {
            for j in (i + 1)..variants.len() {
                assert_ne!(variants[i].description(), variants[j].description());
            }
        }
    }

    // --- Variant count guard ---

    #[test]
    fn test_all_variants_count() {
        assert_eq!(
            all_variants().len(),
            15,
            "Update all_variants() and this count when adding new errors"
        );
    }

    // --- Copy and Eq tests ---

    #[test]
    fn test_copy_semantics() {
        let a = PoolError::PoolNotFound;
        let b = a;
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality() {
        assert_eq!(PoolError::InvalidAmount, PoolError::InvalidAmount);
        assert_ne!(PoolError::InvalidAmount, PoolError::DepositTooLarge);
    }

    // --- Result integration tests (mirrors real contract call sites) ---

    fn mock_validate_params(penalty: u32, commit: u64, allow_zero: bool) -> Result<(), PoolError> {
        if penalty > 100 || (!allow_zero && penalty == 0) {
            return Err(PoolError::InvalidPenaltyPercent);
        }
        if !(10..=31_536_000).contains(&commit) {
            return Err(PoolError::InvalidCommitPeriod);
        }
        Ok(())
    }

    #[test]
    fn test_validate_penalty_range() {
        assert_eq!(
            mock_validate_params(101, 100, false),
            Err(PoolError::InvalidPenaltyPercent)
        );
        assert_eq!(
            mock_validate_params(0, 100, false),
            Err(PoolError::InvalidPenaltyPercent)
        );
        assert!(mock_validate_params(0, 100, true).is_ok());
        assert!(mock_validate_params(100, 100, false).is_ok());
    }

    #[test]
    fn test_validate_commit_range() {
        assert_eq!(
            mock_validate_params(50, 9, false),
            Err(PoolError::InvalidCommitPeriod)
        );
        assert_eq!(
            mock_validate_params(50, 31_536_001, false),
            Err(PoolError::InvalidCommitPeriod)
        );
        assert!(mock_validate_params(50, 10, false).is_ok());
        assert!(mock_validate_params(50, 31_536_000, false).is_ok());
    }

    fn mock_deposit(amount: i128) -> Result<(), PoolError> {
        if amount <= 0 {
            return Err(PoolError::InvalidAmount);
        }
        Ok(())
    }

    #[test]
    fn test_deposit_amount_check() {
        assert_eq!(mock_deposit(0), Err(PoolError::InvalidAmount));
        assert_eq!(mock_deposit(-1), Err(PoolError::InvalidAmount));
        assert!(mock_deposit(1).is_ok());
    }

    fn mock_withdraw(balance: i128, penalty: i128, with_bonus: bool) -> Result<(), PoolError> {
        if balance == 0 {
            return Err(PoolError::NothingToWithdraw);
        }
        if with_bonus && penalty > 0 {
            return Err(PoolError::StillPenalized);
        }
        Ok(())
    }

    #[test]
    fn test_withdraw_preconditions() {
        assert_eq!(mock_withdraw(0, 0, false), Err(PoolError::NothingToWithdraw));
        assert_eq!(mock_withdraw(100, 5, true), Err(PoolError::StillPenalized));
        assert!(mock_withdraw(100, 5, false).is_ok());
        assert!(mock_withdraw(100, 0, true).is_ok());
    }

    #[test]
    fn test_overflow() {
        let result: Result<i128, PoolError> =
            i128::MAX.checked_add(1).ok_or(PoolError::Overflow);
        assert_eq!(result, Err(PoolError::Overflow));
    }

    #[test]
    fn test_underflow() {
        let result: Result<i128, PoolError> =
            i128::MIN.checked_sub(1).ok_or(PoolError::Underflow);
        assert_eq!(result, Err(PoolError::Underflow));
    }

    #[test]
    fn test_error_category_equality() {
        assert_eq!(ErrorCategory::Deposit, ErrorCategory::Deposit);
        assert_ne!(ErrorCategory::Deposit, ErrorCategory::Withdrawal);
    }
}
