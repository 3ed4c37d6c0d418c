//! Main ledger orchestrator that coordinates accounts and transactions

use bigdecimal::BigDecimal;

use crate::ledger::{AccountManager, TransactionManager};
use crate::traits::*;
use crate::types::*;

/// The bank: owns the account registry and the running account count.
///
/// Callers hold a `Ledger` explicitly and pass it wherever accounts are
/// needed; there is no process-wide state.
pub struct Ledger<S: AccountStorage> {
    account_manager: AccountManager<S>,
    transaction_manager: TransactionManager<S>,
}

impl<S: AccountStorage + Clone> Ledger<S> {
    /// Create a new ledger with the given storage backend
    pub fn new(storage: S) -> Self {
        Self {
            account_manager: AccountManager::new(storage.clone()),
            transaction_manager: TransactionManager::new(storage),
        }
    }

    /// Create a new ledger with a custom account validator
    pub fn with_validator(storage: S, account_validator: Box<dyn AccountValidator>) -> Self {
        Self {
            account_manager: AccountManager::with_validator(storage.clone(), account_validator),
            transaction_manager: TransactionManager::new(storage),
        }
    }

    // Account operations
    /// Open an account of any kind with an explicit opening balance
    pub async fn open_account(
        &mut self,
        holder: String,
        kind: AccountKind,
        initial_balance: BigDecimal,
    ) -> LedgerResult<Account> {
        self.account_manager
            .open_account(holder, kind, Some(initial_balance))
            .await
    }

    /// Open a savings account; the opening balance defaults to ₹1000
    pub async fn open_savings_account(
        &mut self,
        holder: String,
        initial_balance: Option<BigDecimal>,
    ) -> LedgerResult<Account> {
        self.account_manager
            .open_account(holder, AccountKind::Savings, initial_balance)
            .await
    }

    /// Open a current account; the opening balance defaults to ₹0
    pub async fn open_current_account(
        &mut self,
        holder: String,
        initial_balance: Option<BigDecimal>,
    ) -> LedgerResult<Account> {
        self.account_manager
            .open_account(holder, AccountKind::Current, initial_balance)
            .await
    }

    /// Get an account by ID
    pub async fn get_account(&self, account_id: &str) -> LedgerResult<Option<Account>> {
        self.account_manager.get_account(account_id).await
    }

    /// Resolve an account by holder name; the earliest opened account wins
    pub async fn find_by_holder_name(&self, holder: &str) -> LedgerResult<Option<Account>> {
        self.account_manager.find_by_holder_name(holder).await
    }

    /// List all accounts in the order they were opened
    pub async fn list_accounts(&self) -> LedgerResult<Vec<Account>> {
        self.account_manager.list_accounts().await
    }

    /// List accounts by kind
    pub async fn list_accounts_by_kind(&self, kind: AccountKind) -> LedgerResult<Vec<Account>> {
        self.account_manager.list_accounts_by_kind(kind).await
    }

    // Balance-changing operations
    /// Deposit into an account
    pub async fn deposit(
        &mut self,
        account_id: &str,
        amount: BigDecimal,
    ) -> LedgerResult<OperationOutcome> {
        self.transaction_manager.deposit(account_id, &amount).await
    }

    /// Withdraw from an account
    pub async fn withdraw(
        &mut self,
        account_id: &str,
        amount: BigDecimal,
    ) -> LedgerResult<OperationOutcome> {
        self.transaction_manager.withdraw(account_id, &amount).await
    }

    /// Transfer from one account to another
    pub async fn transfer(
        &mut self,
        from_account_id: &str,
        to_account_id: &str,
        amount: BigDecimal,
    ) -> LedgerResult<OperationOutcome> {
        self.transaction_manager
            .transfer(from_account_id, to_account_id, &amount)
            .await
    }

    /// Credit one round of interest to a savings account
    pub async fn apply_interest(&mut self, account_id: &str) -> LedgerResult<OperationOutcome> {
        self.transaction_manager.apply_interest(account_id).await
    }

    // Reporting
    /// Current balance as display text, e.g. `Balance: ₹7000`
    pub async fn check_balance(&self, account_id: &str) -> LedgerResult<String> {
        let account = self.account_manager.get_account_required(account_id).await?;
        Ok(account.balance_summary())
    }

    /// Transaction log of an account, one line per entry
    pub async fn get_transaction_history(&self, account_id: &str) -> LedgerResult<String> {
        let account = self.account_manager.get_account_required(account_id).await?;
        Ok(account.transaction_history())
    }

    /// Structured transaction log of an account
    pub async fn account_transactions(
        &self,
        account_id: &str,
    ) -> LedgerResult<Vec<TransactionRecord>> {
        let account = self.account_manager.get_account_required(account_id).await?;
        Ok(account.transactions)
    }

    /// Number of accounts opened through this ledger
    pub fn total_accounts(&self) -> u64 {
        self.account_manager.accounts_created()
    }

    /// Account count as display text, e.g. `Total bank accounts: 2`
    pub fn total_accounts_summary(&self) -> String {
        format!("Total bank accounts: {}", self.total_accounts())
    }
}
