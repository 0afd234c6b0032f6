//! Flat-file storage for the expense collection
//!
//! The persisted format is one comma-joined record per line:
//! `amount,category,date,description`. No header, no escaping; a comma
//! inside a category or description corrupts that record on reload. This is
//! a documented limitation of the format, not defended against.

pub mod file;
pub mod format;

pub use file::{read_ledger_file, write_ledger_file};
pub use format::{parse_expenses, serialize_expenses};
