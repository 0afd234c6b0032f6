//! Expense display formatting

use std::collections::HashMap;

use crate::ledger::{BudgetAlert, Ledger};

/// Format the full expense register with 1-based indices
pub fn format_expense_list(ledger: &Ledger) -> String {
    if ledger.is_empty() {
        return "No expenses recorded. Add expenses using option 1.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("Current Expenses (Total: {}):\n", ledger.len()));
    output.push_str(&format!(
        "{:>3}  {:>10}  {:15}  {:10}  {}\n",
        "#", "Amount", "Category", "Date", "Description"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for (index, expense) in ledger.list_expenses() {
        output.push_str(&format!(
            "{:>3}  {:>10.2}  {:15}  {}  {}\n",
            index,
            expense.amount,
            truncate(&expense.category, 15),
            expense.date.format("%Y-%m-%d"),
            expense.description
        ));
    }

    output
}

/// Format the per-category spending summary
///
/// Categories are sorted for stable output; the engine itself makes no
/// promise about summary ordering.
pub fn format_summary(totals: &HashMap<String, f64>) -> String {
    if totals.is_empty() {
        return "No expenses to summarize.\n".to_string();
    }

    let mut categories: Vec<&String> = totals.keys().collect();
    categories.sort();

    let mut output = String::new();
    output.push_str("Expense Summary by Category:\n");
    for category in categories {
        output.push_str(&format!("  {:15}  {:>10.2}\n", category, totals[category]));
    }

    output
}

/// Format an advisory budget alert, if there is anything to say
pub fn format_alert(category: &str, alert: &BudgetAlert) -> Option<String> {
    match alert {
        BudgetAlert::Ok => None,
        BudgetAlert::Approaching {
            spent,
            budget,
            remaining,
        } => Some(format!(
            "Alert: Approaching budget limit for {category}! \
             Spent: {spent}, Budget: {budget}, Remaining: {remaining}"
        )),
        BudgetAlert::Exceeded {
            spent,
            budget,
            remaining,
        } => Some(format!(
            "Warning: Budget exceeded for {category}! \
             Spent: {spent}, Budget: {budget}, Remaining: {remaining}"
        )),
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{truncated}…")
    }
}
