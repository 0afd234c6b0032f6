//! Custom error types for spendlog
//!
//! This module defines the error hierarchy for the expense engine using
//! thiserror for ergonomic error definitions. Every variant is recoverable;
//! the menu driver reports the message and keeps running.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Description failed validation (empty or composed entirely of digits)
    #[error("description must contain letters and cannot be purely numeric")]
    InvalidDescription,

    /// Adding the expense would push the category total past its budget
    #[error("total spending ({projected}) would exceed budget ({budget})")]
    BudgetExceeded { projected: f64, budget: f64 },

    /// Adding the expense would land the category total exactly on its budget
    #[error("total spending ({projected}) would exactly meet budget ({budget})")]
    BudgetExactlyMet { projected: f64, budget: f64 },

    /// A 1-based expense index was out of range (and not the cancel sentinel)
    #[error("no expense at index {index} (ledger holds {count})")]
    IndexInvalid { index: usize, count: usize },

    /// A persisted record could not be parsed back into an expense
    #[error("malformed record on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// The ledger file does not exist yet
    #[error("no saved expenses found")]
    NotFound,

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl LedgerError {
    /// Check if this is a budget rejection (exceeded or exactly met)
    pub fn is_budget_rejection(&self) -> bool {
        matches!(self, Self::BudgetExceeded { .. } | Self::BudgetExactlyMet { .. })
    }

    /// Check if this is the missing-ledger-file condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
