//! Validation utilities

use bigdecimal::BigDecimal;

use crate::traits::*;
use crate::types::*;
use crate::utils::currency::format_rupees;

/// Shared gate for deposits, withdrawals and transfers: `0 < amount <= 50000`
pub fn validate_amount(amount: &BigDecimal) -> bool {
    *amount > BigDecimal::from(0) && *amount <= BigDecimal::from(MAX_TRANSACTION_AMOUNT)
}

/// Validate that a holder name is present
pub fn validate_holder_name(holder: &str) -> LedgerResult<()> {
    if holder.is_empty() {
        return Err(LedgerError::InvalidArgument(
            "Account holder name cannot be empty.".to_string(),
        ));
    }

    Ok(())
}

/// Validate an opening balance against the rules of the account kind
pub fn validate_opening_balance(kind: AccountKind, balance: &BigDecimal) -> LedgerResult<()> {
    if let Some(min_balance) = kind.min_opening_balance() {
        if *balance < min_balance {
            return Err(LedgerError::InvalidArgument(format!(
                "Minimum balance for {} is {}",
                kind,
                format_rupees(&min_balance)
            )));
        }
    }

    if *balance < BigDecimal::from(0) {
        return Err(LedgerError::InvalidArgument(
            "Initial balance cannot be negative.".to_string(),
        ));
    }

    Ok(())
}

/// Enhanced account validator with stricter holder name rules: no blank
/// names, at most 100 characters, no control characters
pub struct EnhancedAccountValidator;

impl AccountValidator for EnhancedAccountValidator {
    fn validate_account(&self, account: &Account) -> LedgerResult<()> {
        DefaultAccountValidator.validate_account(account)?;

        if account.holder.trim().is_empty() {
            return Err(LedgerError::Validation(
                "Account holder name cannot be blank".to_string(),
            ));
        }

        if account.holder.chars().count() > 100 {
            return Err(LedgerError::Validation(
                "Account holder name cannot exceed 100 characters".to_string(),
            ));
        }

        if account.holder.chars().any(char::is_control) {
            return Err(LedgerError::Validation(
                "Account holder name cannot contain control characters".to_string(),
            ));
        }

        Ok(())
    }
}
