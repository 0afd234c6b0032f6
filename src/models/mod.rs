//! Core data models for spendlog
//!
//! The expense domain is deliberately small: a single `Expense` record plus
//! the patch struct used when editing one in place.

pub mod expense;

pub use expense::{Expense, ExpenseUpdate};
