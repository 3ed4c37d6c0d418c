//! Traits for storage abstraction and extensibility

use async_trait::async_trait;

use crate::types::*;
use crate::utils::validation::{validate_holder_name, validate_opening_balance};

/// Registry of every account the ledger has opened
///
/// This trait lets the ledger run on any backend. Implementations must keep
/// accounts in the order they were saved: holder-name lookups return the
/// first match in that order.
#[async_trait]
pub trait AccountStorage: Send + Sync {
    /// Register a new account; fails if the ID is already taken
    async fn save_account(&mut self, account: &Account) -> LedgerResult<()>;

    /// Get an account by ID
    async fn get_account(&self, account_id: &str) -> LedgerResult<Option<Account>>;

    /// Get an account by ID, returning an error if not found
    async fn get_account_required(&self, account_id: &str) -> LedgerResult<Account> {
        self.get_account(account_id)
            .await?
            .ok_or_else(|| LedgerError::AccountNotFound(account_id.to_string()))
    }

    /// Get the first account registered under an exact holder name
    async fn find_account_by_holder(&self, holder: &str) -> LedgerResult<Option<Account>>;

    /// List all accounts in creation order, optionally filtered by kind
    async fn list_accounts(&self, kind: Option<AccountKind>) -> LedgerResult<Vec<Account>>;

    /// Replace a registered account with its new state
    async fn update_account(&mut self, account: &Account) -> LedgerResult<()>;
}

/// Trait for implementing custom account opening rules
pub trait AccountValidator: Send + Sync {
    /// Validate a freshly built account before it is registered
    fn validate_account(&self, account: &Account) -> LedgerResult<()>;
}

/// Default account validator: kind minimum, non-negative balance, non-empty holder
pub struct DefaultAccountValidator;

impl AccountValidator for DefaultAccountValidator {
    fn validate_account(&self, account: &Account) -> LedgerResult<()> {
        // A kind minimum is reported ahead of a missing holder name
        if account.kind.min_opening_balance().is_some() {
            validate_opening_balance(account.kind, &account.balance)?;
            return validate_holder_name(&account.holder);
        }

        validate_holder_name(&account.holder)?;
        validate_opening_balance(account.kind, &account.balance)
    }
}
