//! Account opening and lookup

use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::traits::*;
use crate::types::*;

/// Account manager for opening accounts and resolving them from the registry
pub struct AccountManager<S: AccountStorage> {
    pub(crate) storage: S,
    validator: Box<dyn AccountValidator>,
    accounts_created: u64,
}

impl<S: AccountStorage> AccountManager<S> {
    /// Create a new account manager
    pub fn new(storage: S) -> Self {
        Self::with_validator(storage, Box::new(DefaultAccountValidator))
    }

    /// Create a new account manager with custom validator
    pub fn with_validator(storage: S, validator: Box<dyn AccountValidator>) -> Self {
        Self {
            storage,
            validator,
            accounts_created: 0,
        }
    }

    /// Open a new account.
    ///
    /// When `opening_balance` is `None` the kind's default is used
    /// (₹1000 for savings, ₹0 for current).
    pub async fn open_account(
        &mut self,
        holder: String,
        kind: AccountKind,
        opening_balance: Option<BigDecimal>,
    ) -> LedgerResult<Account> {
        let opening_balance = opening_balance.unwrap_or_else(|| kind.default_opening_balance());
        let account = Account::new(Uuid::new_v4().to_string(), holder, kind, opening_balance);

        self.validator.validate_account(&account)?;
        self.storage.save_account(&account).await?;
        self.accounts_created += 1;

        tracing::info!(
            account_id = %account.id,
            kind = %account.kind,
            balance = %account.balance,
            "New account created for {}.",
            account.holder
        );

        Ok(account)
    }

    /// Get an account by ID
    pub async fn get_account(&self, account_id: &str) -> LedgerResult<Option<Account>> {
        self.storage.get_account(account_id).await
    }

    /// Get an account by ID, returning an error if not found
    pub async fn get_account_required(&self, account_id: &str) -> LedgerResult<Account> {
        self.storage.get_account_required(account_id).await
    }

    /// First account opened under exactly this holder name
    pub async fn find_by_holder_name(&self, holder: &str) -> LedgerResult<Option<Account>> {
        self.storage.find_account_by_holder(holder).await
    }

    /// List all accounts
    pub async fn list_accounts(&self) -> LedgerResult<Vec<Account>> {
        self.storage.list_accounts(None).await
    }

    /// List accounts of one kind
    pub async fn list_accounts_by_kind(&self, kind: AccountKind) -> LedgerResult<Vec<Account>> {
        self.storage.list_accounts(Some(kind)).await
    }

    /// Number of accounts successfully opened through this manager
    pub fn accounts_created(&self) -> u64 {
        self.accounts_created
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryStorage;

    #[tokio::test]
    async fn test_open_account_uses_kind_default_balance() {
        let mut manager = AccountManager::new(MemoryStorage::new());

        let savings = manager
            .open_account("Alice".to_string(), AccountKind::Savings, None)
            .await
            .unwrap();
        let current = manager
            .open_account("Bob".to_string(), AccountKind::Current, None)
            .await
            .unwrap();

        assert_eq!(savings.balance, BigDecimal::from(1000));
        assert_eq!(current.balance, BigDecimal::from(0));
        assert_ne!(savings.id, current.id);
        assert_eq!(manager.accounts_created(), 2);
    }

    #[tokio::test]
    async fn test_rejected_account_is_not_registered() {
        let mut manager = AccountManager::new(MemoryStorage::new());

        let result = manager
            .open_account(
                "Alice".to_string(),
                AccountKind::Savings,
                Some(BigDecimal::from(999)),
            )
            .await;

        assert!(matches!(result, Err(LedgerError::InvalidArgument(_))));
        assert_eq!(manager.accounts_created(), 0);
        assert!(manager.list_accounts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_account_required_reports_missing_id() {
        let manager = AccountManager::new(MemoryStorage::new());
        let result = manager.get_account_required("nope").await;
        assert!(matches!(result, Err(LedgerError::AccountNotFound(id)) if id == "nope"));
    }
}
