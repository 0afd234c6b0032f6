//! Stdin prompt helpers
//!
//! Each prompt re-asks on unparseable input rather than aborting, so a typo
//! never costs the user their session. End of input (closed stdin) is
//! surfaced so the menu loop can wind down instead of spinning.

use std::io::{self, Write};

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::description_is_valid;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Prompt and read one trimmed line; `None` means stdin is closed
pub fn read_line(prompt: &str) -> LedgerResult<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Prompt and read one trimmed line, treating closed stdin as an error
pub fn require_line(prompt: &str) -> LedgerResult<String> {
    read_line(prompt)?.ok_or_else(|| LedgerError::Io("input ended unexpectedly".into()))
}

/// Prompt for a decimal amount, re-asking until one parses
pub fn prompt_amount(prompt: &str) -> LedgerResult<f64> {
    loop {
        let line = require_line(prompt)?;
        match line.parse() {
            Ok(amount) => return Ok(amount),
            Err(_) => println!("Invalid amount. Enter a number like 12.50."),
        }
    }
}

/// Prompt for a `YYYY-MM-DD` date, re-asking until one parses
pub fn prompt_date(prompt: &str) -> LedgerResult<NaiveDate> {
    loop {
        let line = require_line(prompt)?;
        match NaiveDate::parse_from_str(&line, DATE_FORMAT) {
            Ok(date) => return Ok(date),
            Err(_) => println!("Invalid date. Use the YYYY-MM-DD format."),
        }
    }
}

/// Prompt for a 1-based index (0 cancels), re-asking until one parses
pub fn prompt_index(prompt: &str) -> LedgerResult<usize> {
    loop {
        let line = require_line(prompt)?;
        match line.parse() {
            Ok(index) => return Ok(index),
            Err(_) => println!("Invalid index. Enter a number (0 to cancel)."),
        }
    }
}

/// Prompt for a description, re-asking until it passes the validity rule
pub fn prompt_description() -> LedgerResult<String> {
    loop {
        let line = require_line("Enter description (letters required, not purely numeric): ")?;
        if description_is_valid(&line) {
            return Ok(line);
        }
        println!("Invalid input! Description must contain letters and cannot be purely numeric.");
    }
}

/// Prompt for an optional string; an empty line keeps the current value
pub fn prompt_optional(prompt: &str) -> LedgerResult<Option<String>> {
    let line = require_line(prompt)?;
    if line.is_empty() {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

/// Prompt for an optional amount; an empty line keeps the current value
pub fn prompt_optional_amount(prompt: &str) -> LedgerResult<Option<f64>> {
    loop {
        let line = require_line(prompt)?;
        if line.is_empty() {
            return Ok(None);
        }
        match line.parse() {
            Ok(amount) => return Ok(Some(amount)),
            Err(_) => println!("Invalid amount. Enter a number, or press Enter to keep the current value."),
        }
    }
}

/// Prompt for an optional date; an empty line keeps the current value
pub fn prompt_optional_date(prompt: &str) -> LedgerResult<Option<NaiveDate>> {
    loop {
        let line = require_line(prompt)?;
        if line.is_empty() {
            return Ok(None);
        }
        match NaiveDate::parse_from_str(&line, DATE_FORMAT) {
            Ok(date) => return Ok(Some(date)),
            Err(_) => println!("Invalid date. Use YYYY-MM-DD, or press Enter to keep the current value."),
        }
    }
}
