//! spendlog - Terminal-based personal expense ledger
//!
//! This library provides the core functionality for the spendlog expense
//! tracker: an in-memory ledger of spending events with per-category budget
//! limits, persisted between sessions as a flat text file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: The expense record and its edit patch
//! - `ledger`: The aggregate holding expenses and budgets (business logic)
//! - `storage`: The line-oriented text format and ledger file I/O
//! - `display`: Terminal output formatting
//! - `cli`: The interactive numbered menu driver
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use spendlog::ledger::Ledger;
//!
//! let mut ledger = Ledger::new();
//! ledger.set_budget("Food", 100.0);
//! let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
//! let receipt = ledger.add_expense(12.5, "Food", date, "lunch").unwrap();
//! assert_eq!(receipt.count, 1);
//! ```

pub mod cli;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
