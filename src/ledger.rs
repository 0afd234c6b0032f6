//! Ledger aggregate
//!
//! Owns the ordered expense collection and the per-category budget limits,
//! and implements the business rules: description validation, the add-time
//! budget gate, the advisory post-add alert, index-addressed edit/delete,
//! and category summaries.
//!
//! Two different category matching rules coexist on purpose: budget totals
//! sum over case-insensitive category matches, while budget lookup and
//! `summarize` key on the exact string.

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, ExpenseUpdate};
use crate::storage;

/// Fixed file name the ledger persists to, in the working directory
pub const LEDGER_FILE: &str = "expenses.txt";

/// Advisory budget standing for a category, computed after an add
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetAlert {
    /// No budget set, or spending comfortably under it
    Ok,
    /// Spending is past 90% of the budget but not over it
    Approaching {
        spent: f64,
        budget: f64,
        remaining: f64,
    },
    /// Spending is over the budget (remaining is negative)
    Exceeded {
        spent: f64,
        budget: f64,
        remaining: f64,
    },
}

/// Returned by a successful [`Ledger::add_expense`]
#[derive(Debug, Clone, PartialEq)]
pub struct AddReceipt {
    /// 1-based position of the new expense in display order
    pub position: usize,
    /// Total number of expenses after the add
    pub count: usize,
    /// Advisory alert recomputed after the add (never blocks it)
    pub alert: BudgetAlert,
}

/// Outcome of an index-addressed edit or delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The expense at the given index was changed or removed
    Applied,
    /// Index 0 was given: explicit cancellation, nothing touched
    Cancelled,
}

/// The in-memory expense ledger
#[derive(Debug, Default)]
pub struct Ledger {
    /// Insertion order defines 1-based display indices
    expenses: Vec<Expense>,
    /// Budget limits keyed by exact category string
    budgets: HashMap<String, f64>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check whether the ledger holds no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Iterate expenses with their 1-based display indices
    pub fn list_expenses(&self) -> impl Iterator<Item = (usize, &Expense)> {
        self.expenses.iter().enumerate().map(|(i, e)| (i + 1, e))
    }

    /// Record a new expense after validating it
    ///
    /// Rejects with [`LedgerError::InvalidDescription`] if the description is
    /// empty or purely numeric. If the category has a budget (exact-string
    /// lookup), rejects with [`LedgerError::BudgetExceeded`] when the
    /// projected total goes over it and [`LedgerError::BudgetExactlyMet`]
    /// when it lands exactly on it. On acceptance, returns the new entry's
    /// position, the updated count, and the recomputed advisory alert.
    pub fn add_expense(
        &mut self,
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> LedgerResult<AddReceipt> {
        let category = category.into();
        let description = description.into();

        if !description_is_valid(&description) {
            return Err(LedgerError::InvalidDescription);
        }

        if let Some(&budget) = self.budgets.get(&category) {
            let projected = self.category_spent(&category) + amount;
            if projected > budget {
                return Err(LedgerError::BudgetExceeded { projected, budget });
            }
            // Exact f64 equality: reaching the cap is treated as hitting it.
            if projected == budget {
                return Err(LedgerError::BudgetExactlyMet { projected, budget });
            }
        }

        self.expenses
            .push(Expense::new(amount, category.clone(), date, description));
        let count = self.expenses.len();
        let alert = self.check_budget(&category);

        Ok(AddReceipt {
            position: count,
            count,
            alert,
        })
    }

    /// Compute the advisory budget standing for a category
    ///
    /// Thresholds differ from the add-time gate: strictly over budget reports
    /// `Exceeded`, strictly over 90% of it reports `Approaching`. Exact-string
    /// budget lookup; spending summed case-insensitively.
    pub fn check_budget(&self, category: &str) -> BudgetAlert {
        let Some(&budget) = self.budgets.get(category) else {
            return BudgetAlert::Ok;
        };

        let spent = self.category_spent(category);
        let remaining = budget - spent;

        if spent > budget {
            BudgetAlert::Exceeded {
                spent,
                budget,
                remaining,
            }
        } else if spent > budget * 0.9 {
            BudgetAlert::Approaching {
                spent,
                budget,
                remaining,
            }
        } else {
            BudgetAlert::Ok
        }
    }

    /// Edit the expense at a 1-based index, overwriting only present fields
    ///
    /// Index 0 cancels without touching anything. No budget re-validation
    /// happens here: an edit can push a category over its budget silently.
    pub fn edit_expense(
        &mut self,
        index: usize,
        update: ExpenseUpdate,
    ) -> LedgerResult<MutationOutcome> {
        let Some(slot) = self.select(index)? else {
            return Ok(MutationOutcome::Cancelled);
        };
        update.apply_to(&mut self.expenses[slot]);
        Ok(MutationOutcome::Applied)
    }

    /// Remove the expense at a 1-based index
    ///
    /// Index 0 cancels. Later entries shift down by one position.
    pub fn delete_expense(&mut self, index: usize) -> LedgerResult<MutationOutcome> {
        let Some(slot) = self.select(index)? else {
            return Ok(MutationOutcome::Cancelled);
        };
        self.expenses.remove(slot);
        Ok(MutationOutcome::Applied)
    }

    /// Set (or overwrite) the budget limit for a category
    ///
    /// Keyed by the exact category string; no constraint on the limit's sign.
    pub fn set_budget(&mut self, category: impl Into<String>, limit: f64) {
        self.budgets.insert(category.into(), limit);
    }

    /// Read the budget limit for a category (exact-string lookup)
    pub fn budget(&self, category: &str) -> Option<f64> {
        self.budgets.get(category).copied()
    }

    /// Total spending per category, grouped by exact category string
    ///
    /// Note the asymmetry with budget enforcement: "Food" and "food" share a
    /// budget pool but appear as two summary rows.
    pub fn summarize(&self) -> HashMap<String, f64> {
        let mut totals: HashMap<String, f64> = HashMap::new();
        for expense in &self.expenses {
            *totals.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
        }
        totals
    }

    /// Persist the expense collection to the fixed ledger file
    pub fn save_to_file(&self) -> LedgerResult<()> {
        self.save_to_path(LEDGER_FILE)
    }

    /// Persist the expense collection to an explicit path
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> LedgerResult<()> {
        let text = storage::serialize_expenses(&self.expenses);
        storage::write_ledger_file(path, &text)
    }

    /// Replace the expense collection with the fixed ledger file's contents
    pub fn load_from_file(&mut self) -> LedgerResult<()> {
        self.load_from_path(LEDGER_FILE)
    }

    /// Replace the expense collection with an explicit file's contents
    ///
    /// The collection is cleared before the read is attempted, so a missing
    /// file ([`LedgerError::NotFound`]) or a malformed record leaves the
    /// ledger empty rather than keeping the previous entries. Budgets are
    /// untouched either way.
    pub fn load_from_path(&mut self, path: impl AsRef<Path>) -> LedgerResult<()> {
        self.expenses.clear();
        let text = storage::read_ledger_file(path)?;
        self.expenses = storage::parse_expenses(&text)?;
        Ok(())
    }

    /// Sum spending over expenses whose category matches case-insensitively
    fn category_spent(&self, category: &str) -> f64 {
        self.expenses
            .iter()
            .filter(|e| e.category.eq_ignore_ascii_case(category))
            .map(|e| e.amount)
            .sum()
    }

    /// Resolve a 1-based index: `Ok(None)` is cancellation, `Ok(Some)` is a
    /// zero-based slot, out of range is an error
    fn select(&self, index: usize) -> LedgerResult<Option<usize>> {
        if index == 0 {
            return Ok(None);
        }
        if index > self.expenses.len() {
            return Err(LedgerError::IndexInvalid {
                index,
                count: self.expenses.len(),
            });
        }
        Ok(Some(index - 1))
    }
}

/// Description rule: non-empty and not composed entirely of digits
///
/// Exposed so the interactive driver can run its retry loop against the same
/// rule the add operation enforces.
pub fn description_is_valid(description: &str) -> bool {
    !description.is_empty() && !description.chars().all(|c| c.is_ascii_digit())
}
