//! Expense model
//!
//! Represents one spending event. This is a plain data holder: validation
//! (description rules, budget enforcement) lives in the [`Ledger`] entry
//! points, not here.
//!
//! [`Ledger`]: crate::ledger::Ledger

use std::fmt;

use chrono::NaiveDate;

/// A single recorded spending event
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// Amount spent, in currency-agnostic units
    pub amount: f64,

    /// Category label, stored exactly as entered
    pub category: String,

    /// Calendar date of the expense (no time component)
    pub date: NaiveDate,

    /// Free-form description of what the money went to
    pub description: String,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            date,
            description: description.into(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "amount: {}, category: {}, date: {}, description: {}",
            self.amount,
            self.category,
            self.date.format("%Y-%m-%d"),
            self.description
        )
    }
}

/// A partial update applied to an existing expense
///
/// `None` fields keep the current value; `Some` fields overwrite in place.
/// The default patch changes nothing.
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl ExpenseUpdate {
    /// Check whether this patch changes anything at all
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.category.is_none()
            && self.date.is_none()
            && self.description.is_none()
    }

    /// Apply the patch to an expense, overwriting only the present fields
    pub fn apply_to(self, expense: &mut Expense) {
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
        if let Some(category) = self.category {
            expense.category = category;
        }
        if let Some(date) = self.date {
            expense.date = date;
        }
        if let Some(description) = self.description {
            expense.description = description;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_display_labels_all_fields() {
        let expense = Expense::new(12.5, "Food", date("2025-03-01"), "lunch");
        assert_eq!(
            expense.to_string(),
            "amount: 12.5, category: Food, date: 2025-03-01, description: lunch"
        );
    }

    #[test]
    fn test_empty_update_keeps_everything() {
        let mut expense = Expense::new(12.5, "Food", date("2025-03-01"), "lunch");
        let original = expense.clone();

        let update = ExpenseUpdate::default();
        assert!(update.is_empty());
        update.apply_to(&mut expense);

        assert_eq!(expense, original);
    }

    #[test]
    fn test_partial_update_overwrites_only_present_fields() {
        let mut expense = Expense::new(12.5, "Food", date("2025-03-01"), "lunch");

        let update = ExpenseUpdate {
            amount: Some(20.0),
            description: Some("team lunch".into()),
            ..Default::default()
        };
        update.apply_to(&mut expense);

        assert_eq!(expense.amount, 20.0);
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.date, date("2025-03-01"));
        assert_eq!(expense.description, "team lunch");
    }
}
