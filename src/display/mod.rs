//! Display formatting for terminal output
//!
//! Formats ledger data for the menu driver: the expense register, the
//! per-category summary, and budget alert lines.

pub mod expense;

pub use expense::{format_alert, format_expense_list, format_summary};
