//! Core types and data structures for the banking ledger

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::{format_rupees, validate_amount};

/// Largest amount accepted by a single deposit, withdrawal or transfer
pub const MAX_TRANSACTION_AMOUNT: i64 = 50_000;

/// Flat fee charged on every withdrawal
pub const WITHDRAWAL_FEE: i64 = 10;

/// Minimum opening balance of a savings account
pub const SAVINGS_MIN_BALANCE: i64 = 1_000;

/// Interest credited by one `apply_interest` call on a savings account, in percent
pub const SAVINGS_INTEREST_RATE_PERCENT: i64 = 5;

/// Account variants offered by the bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountKind {
    /// Savings account - minimum opening balance, earns interest on demand
    Savings,
    /// Current account - no extra rules
    Current,
}

impl AccountKind {
    /// Balance used when the caller does not supply one at opening time
    pub fn default_opening_balance(&self) -> BigDecimal {
        match self {
            AccountKind::Savings => BigDecimal::from(SAVINGS_MIN_BALANCE),
            AccountKind::Current => BigDecimal::from(0),
        }
    }

    /// Minimum balance required when the account is opened, if any.
    /// Only checked at opening; later withdrawals may go below it.
    pub fn min_opening_balance(&self) -> Option<BigDecimal> {
        match self {
            AccountKind::Savings => Some(BigDecimal::from(SAVINGS_MIN_BALANCE)),
            AccountKind::Current => None,
        }
    }

    /// Interest rate as a fraction (0.05 for 5%), if the kind earns interest
    pub fn interest_rate(&self) -> Option<BigDecimal> {
        match self {
            AccountKind::Savings => Some(BigDecimal::new(SAVINGS_INTEREST_RATE_PERCENT.into(), 2)),
            AccountKind::Current => None,
        }
    }

    /// Whether `apply_interest` is allowed on this kind
    pub fn can_apply_interest(&self) -> bool {
        self.interest_rate().is_some()
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountKind::Savings => write!(f, "Savings Account"),
            AccountKind::Current => write!(f, "Current Account"),
        }
    }
}

/// Kinds of entries in an account's transaction log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Opening,
    Deposit,
    Withdrawal,
    TransferOut,
    TransferIn,
    Interest,
}

/// One entry of an account's append-only transaction log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// What happened
    pub kind: TransactionKind,
    /// Amount moved; for withdrawals this excludes the fee
    pub amount: BigDecimal,
    /// Account balance once the entry was applied
    pub balance_after: BigDecimal,
    /// Holder on the other side of a transfer
    pub counterparty: Option<String>,
    /// Human-readable line shown in the transaction history
    pub description: String,
    /// When the entry was recorded
    pub recorded_at: NaiveDateTime,
}

impl TransactionRecord {
    /// Create a new log entry stamped with the current time
    pub fn new(
        kind: TransactionKind,
        amount: BigDecimal,
        balance_after: BigDecimal,
        counterparty: Option<String>,
        description: String,
    ) -> Self {
        Self {
            kind,
            amount,
            balance_after,
            counterparty,
            description,
            recorded_at: chrono::Utc::now().naive_utc(),
        }
    }
}

/// A bank account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: String,
    /// Name of the account holder; not unique across accounts
    pub holder: String,
    /// Savings or current
    pub kind: AccountKind,
    /// Current balance of the account
    pub balance: BigDecimal,
    /// Transaction log in the order entries were recorded
    pub transactions: Vec<TransactionRecord>,
    /// When the account was created
    pub created_at: NaiveDateTime,
    /// When the account was last updated
    pub updated_at: NaiveDateTime,
}

impl Account {
    /// Create a new account and record its opening entry.
    ///
    /// No validation happens here; the ledger runs an [`crate::AccountValidator`]
    /// before the account is registered.
    pub fn new(id: String, holder: String, kind: AccountKind, opening_balance: BigDecimal) -> Self {
        let now = chrono::Utc::now().naive_utc();
        let opening = TransactionRecord::new(
            TransactionKind::Opening,
            opening_balance.clone(),
            opening_balance.clone(),
            None,
            format!(
                "Account created with balance {}",
                format_rupees(&opening_balance)
            ),
        );
        Self {
            id,
            holder,
            kind,
            balance: opening_balance,
            transactions: vec![opening],
            created_at: now,
            updated_at: now,
        }
    }

    /// Deposit `amount` into the account
    pub fn deposit(&mut self, amount: &BigDecimal) -> OperationOutcome {
        if !validate_amount(amount) {
            return OperationOutcome::Failure(OperationFailure::InvalidAmount(
                OperationKind::Deposit,
            ));
        }

        self.balance += amount;
        self.record(
            TransactionKind::Deposit,
            amount,
            None,
            format!(
                "Deposited {}. New balance: {}",
                format_rupees(amount),
                format_rupees(&self.balance)
            ),
        );

        OperationOutcome::success(
            amount.clone(),
            self.balance.clone(),
            format!(
                "Deposited {}. Balance: {}",
                format_rupees(amount),
                format_rupees(&self.balance)
            ),
        )
    }

    /// Withdraw `amount` plus the flat withdrawal fee
    pub fn withdraw(&mut self, amount: &BigDecimal) -> OperationOutcome {
        if !validate_amount(amount) {
            return OperationOutcome::Failure(OperationFailure::InvalidAmount(
                OperationKind::Withdrawal,
            ));
        }

        let fee = BigDecimal::from(WITHDRAWAL_FEE);
        let debit = amount + &fee;
        if &self.balance - &debit < BigDecimal::from(0) {
            return OperationOutcome::Failure(OperationFailure::InsufficientFunds);
        }

        self.balance -= &debit;
        self.record(
            TransactionKind::Withdrawal,
            amount,
            None,
            format!(
                "Withdrew {} ({} fee applied). New balance: {}",
                format_rupees(amount),
                format_rupees(&fee),
                format_rupees(&self.balance)
            ),
        );

        OperationOutcome::success(
            amount.clone(),
            self.balance.clone(),
            format!(
                "Withdrew {}. Balance: {}",
                format_rupees(amount),
                format_rupees(&self.balance)
            ),
        )
    }

    /// Move `amount` from this account to `recipient`. Transfers carry no fee.
    pub fn transfer_to(&mut self, recipient: &mut Account, amount: &BigDecimal) -> OperationOutcome {
        if let Some(reason) = self.check_transfer(amount) {
            return OperationOutcome::Failure(reason);
        }

        self.balance -= amount;
        recipient.balance += amount;

        self.record_transfer_out(amount, &recipient.holder);
        recipient.record_transfer_in(amount, &self.holder);

        self.transfer_outcome(amount, &recipient.holder)
    }

    /// Transfer where the recipient is this same account.
    ///
    /// The balance nets out but both sides of the transfer are still logged.
    pub fn transfer_to_self(&mut self, amount: &BigDecimal) -> OperationOutcome {
        if let Some(reason) = self.check_transfer(amount) {
            return OperationOutcome::Failure(reason);
        }

        // Debit and credit both land on this record
        self.balance -= amount;
        self.balance += amount;

        let holder = self.holder.clone();
        self.record_transfer_out(amount, &holder);
        self.record_transfer_in(amount, &holder);

        self.transfer_outcome(amount, &holder)
    }

    fn check_transfer(&self, amount: &BigDecimal) -> Option<OperationFailure> {
        if !validate_amount(amount) {
            return Some(OperationFailure::InvalidAmount(OperationKind::Transfer));
        }
        if &self.balance - amount < BigDecimal::from(0) {
            return Some(OperationFailure::InsufficientFunds);
        }
        None
    }

    fn record_transfer_out(&mut self, amount: &BigDecimal, recipient: &str) {
        let description = format!(
            "Transferred {} to {}. New balance: {}",
            format_rupees(amount),
            recipient,
            format_rupees(&self.balance)
        );
        self.record(
            TransactionKind::TransferOut,
            amount,
            Some(recipient.to_string()),
            description,
        );
    }

    fn record_transfer_in(&mut self, amount: &BigDecimal, sender: &str) {
        let description = format!(
            "Received {} from {}. New balance: {}",
            format_rupees(amount),
            sender,
            format_rupees(&self.balance)
        );
        self.record(
            TransactionKind::TransferIn,
            amount,
            Some(sender.to_string()),
            description,
        );
    }

    fn transfer_outcome(&self, amount: &BigDecimal, recipient: &str) -> OperationOutcome {
        OperationOutcome::success(
            amount.clone(),
            self.balance.clone(),
            format!("Transferred {} to {}.", format_rupees(amount), recipient),
        )
    }

    /// Credit one round of interest at the account kind's rate.
    /// Each call compounds on the current balance.
    pub fn apply_interest(&mut self) -> OperationOutcome {
        let Some(rate) = self.kind.interest_rate() else {
            return OperationOutcome::Failure(OperationFailure::InterestNotSupported);
        };

        let interest = &self.balance * &rate;
        self.balance += &interest;

        let message = format!(
            "Interest of {} applied. New balance: {}",
            format_rupees(&interest),
            format_rupees(&self.balance)
        );
        self.record(TransactionKind::Interest, &interest, None, message.clone());

        OperationOutcome::success(interest, self.balance.clone(), message)
    }

    /// Current balance as display text
    pub fn balance_summary(&self) -> String {
        format!("Balance: {}", format_rupees(&self.balance))
    }

    /// Transaction log descriptions, one per line, oldest first
    pub fn transaction_history(&self) -> String {
        self.transactions
            .iter()
            .map(|record| record.description.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn record(
        &mut self,
        kind: TransactionKind,
        amount: &BigDecimal,
        counterparty: Option<String>,
        description: String,
    ) {
        self.transactions.push(TransactionRecord::new(
            kind,
            amount.clone(),
            self.balance.clone(),
            counterparty,
            description,
        ));
        self.updated_at = chrono::Utc::now().naive_utc();
    }
}

/// Balance-changing operations, used to word amount failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    Deposit,
    Withdrawal,
    Transfer,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Deposit => write!(f, "deposit"),
            OperationKind::Withdrawal => write!(f, "withdrawal"),
            OperationKind::Transfer => write!(f, "transfer"),
        }
    }
}

/// Business-rule reasons an operation was declined
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum OperationFailure {
    #[error("Invalid {0} amount.")]
    InvalidAmount(OperationKind),
    #[error("Insufficient funds.")]
    InsufficientFunds,
    #[error("Invalid recipient.")]
    InvalidRecipient,
    #[error("Interest can only be applied to savings accounts.")]
    InterestNotSupported,
}

/// Result of a deposit, withdrawal, transfer or interest run.
///
/// A declined operation is a normal outcome, not an error: the account's
/// balance and log are left untouched and the reason is reported here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OperationOutcome {
    Success {
        /// Amount moved (interest amount for interest runs)
        amount: BigDecimal,
        /// Balance of the acting account afterwards
        balance: BigDecimal,
        /// Confirmation text for display
        message: String,
    },
    Failure(OperationFailure),
}

impl OperationOutcome {
    fn success(amount: BigDecimal, balance: BigDecimal, message: String) -> Self {
        OperationOutcome::Success {
            amount,
            balance,
            message,
        }
    }

    /// Whether the operation went through
    pub fn is_success(&self) -> bool {
        matches!(self, OperationOutcome::Success { .. })
    }

    /// Display text for either variant
    pub fn message(&self) -> String {
        match self {
            OperationOutcome::Success { message, .. } => message.clone(),
            OperationOutcome::Failure(reason) => reason.to_string(),
        }
    }

    /// New balance of the acting account, if the operation went through
    pub fn balance(&self) -> Option<&BigDecimal> {
        match self {
            OperationOutcome::Success { balance, .. } => Some(balance),
            OperationOutcome::Failure(_) => None,
        }
    }

    /// Reason the operation was declined, if it was
    pub fn failure(&self) -> Option<&OperationFailure> {
        match self {
            OperationOutcome::Success { .. } => None,
            OperationOutcome::Failure(reason) => Some(reason),
        }
    }
}

impl fmt::Display for OperationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Errors that can occur in the ledger system
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("{0}")]
    InvalidArgument(String),
    #[error("Account not found: {0}")]
    AccountNotFound(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
