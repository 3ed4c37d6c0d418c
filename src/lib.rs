//! # Bank Ledger
//!
//! An in-memory bank ledger: open savings and current accounts, deposit,
//! withdraw, transfer between accounts, apply interest and report balances
//! and transaction history.
//!
//! ## Features
//!
//! - **Account kinds**: Savings (₹1000 minimum opening balance, 5% interest on demand) and Current
//! - **Business rules**: amounts must be in `(0, 50000]`, withdrawals carry a flat ₹10 fee
//! - **Outcomes, not errors**: declined operations return [`OperationOutcome::Failure`]
//!   with a display message and leave balances and logs unchanged
//! - **Storage abstraction**: the account registry sits behind [`AccountStorage`]
//!
//! ## Quick Start
//!
//! ```rust
//! use bank_ledger::{utils::MemoryStorage, Ledger};
//! use bigdecimal::BigDecimal;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), bank_ledger::LedgerError> {
//! let mut ledger = Ledger::new(MemoryStorage::new());
//! let alice = ledger
//!     .open_current_account("Alice".to_string(), Some(BigDecimal::from(5000)))
//!     .await?;
//!
//! let outcome = ledger.deposit(&alice.id, BigDecimal::from(2000)).await?;
//! assert_eq!(outcome.message(), "Deposited ₹2000. Balance: ₹7000");
//! # Ok(())
//! # }
//! ```

pub mod ledger;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use ledger::*;
pub use traits::*;
pub use types::*;
