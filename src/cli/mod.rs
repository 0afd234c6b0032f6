//! Interactive menu driver
//!
//! This module is the thin I/O layer over the ledger engine: prompt helpers
//! that read structured fields from stdin, and the numbered menu loop that
//! dispatches to ledger operations and prints the results.

pub mod input;
pub mod menu;

pub use menu::run;
