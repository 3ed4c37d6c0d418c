//! In-memory storage implementation

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::traits::*;
use crate::types::*;

/// In-memory account registry. Lives as long as the process; never cleared.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    accounts: Arc<RwLock<Vec<Account>>>,
}

impl MemoryStorage {
    /// Create a new memory storage instance
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(Vec::new())),
        }
    }

    fn read(&self) -> LedgerResult<RwLockReadGuard<'_, Vec<Account>>> {
        self.accounts
            .read()
            .map_err(|_| LedgerError::Storage("account registry lock poisoned".to_string()))
    }

    fn write(&self) -> LedgerResult<RwLockWriteGuard<'_, Vec<Account>>> {
        self.accounts
            .write()
            .map_err(|_| LedgerError::Storage("account registry lock poisoned".to_string()))
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStorage for MemoryStorage {
    async fn save_account(&mut self, account: &Account) -> LedgerResult<()> {
        let mut accounts = self.write()?;
        if accounts.iter().any(|existing| existing.id == account.id) {
            return Err(LedgerError::Validation(format!(
                "Account with ID '{}' already exists",
                account.id
            )));
        }
        accounts.push(account.clone());
        Ok(())
    }

    async fn get_account(&self, account_id: &str) -> LedgerResult<Option<Account>> {
        Ok(self
            .read()?
            .iter()
            .find(|account| account.id == account_id)
            .cloned())
    }

    async fn find_account_by_holder(&self, holder: &str) -> LedgerResult<Option<Account>> {
        Ok(self
            .read()?
            .iter()
            .find(|account| account.holder == holder)
            .cloned())
    }

    async fn list_accounts(&self, kind: Option<AccountKind>) -> LedgerResult<Vec<Account>> {
        Ok(self
            .read()?
            .iter()
            .filter(|account| kind.is_none_or(|k| account.kind == k))
            .cloned()
            .collect())
    }

    async fn update_account(&mut self, account: &Account) -> LedgerResult<()> {
        let mut accounts = self.write()?;
        match accounts.iter_mut().find(|existing| existing.id == account.id) {
            Some(existing) => {
                *existing = account.clone();
                Ok(())
            }
            None => Err(LedgerError::AccountNotFound(account.id.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    fn account(id: &str, holder: &str, kind: AccountKind) -> Account {
        Account::new(
            id.to_string(),
            holder.to_string(),
            kind,
            BigDecimal::from(1000),
        )
    }

    #[tokio::test]
    async fn test_save_and_get_account() {
        let mut storage = MemoryStorage::new();
        storage
            .save_account(&account("a1", "Alice", AccountKind::Current))
            .await
            .unwrap();

        let found = storage.get_account("a1").await.unwrap();
        assert_eq!(found.map(|a| a.holder), Some("Alice".to_string()));
        assert!(storage.get_account("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_account_required() {
        let mut storage = MemoryStorage::new();
        storage
            .save_account(&account("a1", "Alice", AccountKind::Current))
            .await
            .unwrap();

        let found = storage.get_account_required("a1").await.unwrap();
        assert_eq!(found.holder, "Alice");

        let result = storage.get_account_required("missing").await;
        assert!(matches!(result, Err(LedgerError::AccountNotFound(id)) if id == "missing"));
    }

    #[tokio::test]
    async fn test_duplicate_id_is_rejected() {
        let mut storage = MemoryStorage::new();
        let alice = account("a1", "Alice", AccountKind::Current);
        storage.save_account(&alice).await.unwrap();

        let result = storage.save_account(&alice).await;
        assert!(matches!(result, Err(LedgerError::Validation(_))));
    }

    #[tokio::test]
    async fn test_holder_lookup_returns_first_match() {
        let mut storage = MemoryStorage::new();
        storage
            .save_account(&account("a1", "Alice", AccountKind::Savings))
            .await
            .unwrap();
        storage
            .save_account(&account("a2", "Alice", AccountKind::Current))
            .await
            .unwrap();

        let found = storage.find_account_by_holder("Alice").await.unwrap();
        assert_eq!(found.map(|a| a.id), Some("a1".to_string()));
        assert!(storage
            .find_account_by_holder("alice")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_list_accounts_keeps_creation_order() {
        let mut storage = MemoryStorage::new();
        for (id, kind) in [
            ("a1", AccountKind::Current),
            ("a2", AccountKind::Savings),
            ("a3", AccountKind::Current),
        ] {
            storage
                .save_account(&account(id, "Holder", kind))
                .await
                .unwrap();
        }

        let ids: Vec<String> = storage
            .list_accounts(None)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["a1", "a2", "a3"]);

        let current = storage
            .list_accounts(Some(AccountKind::Current))
            .await
            .unwrap();
        assert_eq!(current.len(), 2);
    }

    #[tokio::test]
    async fn test_update_unknown_account_fails() {
        let mut storage = MemoryStorage::new();
        let result = storage
            .update_account(&account("ghost", "Nobody", AccountKind::Current))
            .await;
        assert!(matches!(result, Err(LedgerError::AccountNotFound(_))));
    }
}
