//! Deposits, withdrawals, transfers and interest runs against stored accounts

use bigdecimal::BigDecimal;

use crate::traits::*;
use crate::types::*;

/// Transaction manager for balance-changing operations
///
/// Each operation loads the account from storage, applies the business rules
/// on the loaded copy and writes it back only if the operation went through.
/// A declined operation never touches storage.
pub struct TransactionManager<S: AccountStorage> {
    storage: S,
}

impl<S: AccountStorage> TransactionManager<S> {
    /// Create a new transaction manager
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Deposit into an account
    pub async fn deposit(
        &mut self,
        account_id: &str,
        amount: &BigDecimal,
    ) -> LedgerResult<OperationOutcome> {
        self.apply(account_id, "deposit", |account| account.deposit(amount))
            .await
    }

    /// Withdraw from an account; the flat fee is added to the debit
    pub async fn withdraw(
        &mut self,
        account_id: &str,
        amount: &BigDecimal,
    ) -> LedgerResult<OperationOutcome> {
        self.apply(account_id, "withdraw", |account| account.withdraw(amount))
            .await
    }

    /// Credit interest to a savings account
    pub async fn apply_interest(&mut self, account_id: &str) -> LedgerResult<OperationOutcome> {
        self.apply(account_id, "interest", |account| account.apply_interest())
            .await
    }

    /// Transfer between two accounts.
    ///
    /// An unknown recipient is declined as an invalid recipient; an unknown
    /// sender is an error. When both IDs name the same account, the debit and
    /// credit are applied to that one record and it is saved once.
    pub async fn transfer(
        &mut self,
        from_account_id: &str,
        to_account_id: &str,
        amount: &BigDecimal,
    ) -> LedgerResult<OperationOutcome> {
        if from_account_id == to_account_id {
            return self
                .apply(from_account_id, "transfer", |account| {
                    account.transfer_to_self(amount)
                })
                .await;
        }

        let mut sender = self.storage.get_account_required(from_account_id).await?;
        let Some(mut recipient) = self.storage.get_account(to_account_id).await? else {
            let outcome = OperationOutcome::Failure(OperationFailure::InvalidRecipient);
            log_outcome(from_account_id, "transfer", &outcome);
            return Ok(outcome);
        };

        let outcome = sender.transfer_to(&mut recipient, amount);
        if outcome.is_success() {
            // Both accounts were just read, so neither update can miss
            self.storage.update_account(&sender).await?;
            self.storage.update_account(&recipient).await?;
        }

        log_outcome(from_account_id, "transfer", &outcome);
        Ok(outcome)
    }

    async fn apply<F>(
        &mut self,
        account_id: &str,
        operation: &'static str,
        action: F,
    ) -> LedgerResult<OperationOutcome>
    where
        F: FnOnce(&mut Account) -> OperationOutcome,
    {
        let mut account = self.storage.get_account_required(account_id).await?;

        let outcome = action(&mut account);
        if outcome.is_success() {
            self.storage.update_account(&account).await?;
        }

        log_outcome(account_id, operation, &outcome);
        Ok(outcome)
    }
}

fn log_outcome(account_id: &str, operation: &str, outcome: &OperationOutcome) {
    match outcome {
        OperationOutcome::Success { amount, balance, .. } => tracing::debug!(
            account_id,
            operation,
            amount = %amount,
            balance = %balance,
            "operation applied"
        ),
        OperationOutcome::Failure(reason) => {
            tracing::warn!(account_id, operation, %reason, "operation declined")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryStorage;

    async fn seeded(balance: i64) -> (TransactionManager<MemoryStorage>, MemoryStorage, Account) {
        let mut storage = MemoryStorage::new();
        let account = Account::new(
            "a1".to_string(),
            "Alice".to_string(),
            AccountKind::Savings,
            BigDecimal::from(balance),
        );
        storage.save_account(&account).await.unwrap();
        (TransactionManager::new(storage.clone()), storage, account)
    }

    #[tokio::test]
    async fn test_successful_operation_is_persisted() {
        let (mut manager, storage, account) = seeded(5000).await;

        let outcome = manager
            .deposit(&account.id, &BigDecimal::from(500))
            .await
            .unwrap();
        assert!(outcome.is_success());

        let stored = storage.get_account(&account.id).await.unwrap().unwrap();
        assert_eq!(stored.balance, BigDecimal::from(5500));
        assert_eq!(stored.transactions.len(), 2);
    }

    #[tokio::test]
    async fn test_declined_operation_leaves_storage_untouched() {
        let (mut manager, storage, account) = seeded(5000).await;

        let outcome = manager
            .withdraw(&account.id, &BigDecimal::from(5000))
            .await
            .unwrap();
        assert_eq!(outcome.message(), "Insufficient funds.");

        let stored = storage.get_account(&account.id).await.unwrap().unwrap();
        assert_eq!(stored, account);
    }

    #[tokio::test]
    async fn test_transfer_to_unknown_account_is_declined() {
        let (mut manager, storage, account) = seeded(5000).await;

        let outcome = manager
            .transfer(&account.id, "ghost", &BigDecimal::from(100))
            .await
            .unwrap();
        assert_eq!(outcome.failure(), Some(&OperationFailure::InvalidRecipient));

        let stored = storage.get_account(&account.id).await.unwrap().unwrap();
        assert_eq!(stored, account);
    }

    #[tokio::test]
    async fn test_transfer_to_same_account_is_saved_once_with_both_entries() {
        let (mut manager, storage, account) = seeded(5000).await;

        let outcome = manager
            .transfer(&account.id, &account.id, &BigDecimal::from(100))
            .await
            .unwrap();
        assert_eq!(outcome.message(), "Transferred ₹100 to Alice.");

        let stored = storage.get_account(&account.id).await.unwrap().unwrap();
        assert_eq!(stored.balance, BigDecimal::from(5000));
        let kinds: Vec<TransactionKind> = stored.transactions.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TransactionKind::Opening,
                TransactionKind::TransferOut,
                TransactionKind::TransferIn,
            ]
        );
        assert_eq!(storage.list_accounts(None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_operations_on_unknown_account_fail() {
        let (mut manager, _storage, _account) = seeded(5000).await;

        let result = manager.deposit("ghost", &BigDecimal::from(100)).await;
        assert!(matches!(result, Err(LedgerError::AccountNotFound(_))));

        let result = manager.transfer("ghost", "a1", &BigDecimal::from(100)).await;
        assert!(matches!(result, Err(LedgerError::AccountNotFound(_))));
    }
}
