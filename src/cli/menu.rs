//! The numbered menu loop
//!
//! Mirrors a classic interactive tracker session: show the menu, read a
//! choice, run the matching ledger operation, report, repeat. Every engine
//! error is printed and the loop keeps going; only option 9 or a closed
//! stdin ends the session.

use crate::cli::input;
use crate::display::{format_alert, format_expense_list, format_summary};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::{Ledger, MutationOutcome};
use crate::models::ExpenseUpdate;

/// Run the interactive menu loop until the user exits
pub fn run(ledger: &mut Ledger) -> LedgerResult<()> {
    loop {
        print_menu();
        let Some(choice) = input::read_line("Enter choice: ")? else {
            break;
        };

        let result = match choice.as_str() {
            "1" => add_expense(ledger),
            "2" => edit_expense(ledger),
            "3" => delete_expense(ledger),
            "4" => {
                print!("{}", format_expense_list(ledger));
                Ok(())
            }
            "5" => set_budget(ledger),
            "6" => {
                print!("{}", format_summary(&ledger.summarize()));
                Ok(())
            }
            "7" => save(ledger),
            "8" => load(ledger),
            "9" => {
                println!("Exiting...");
                break;
            }
            _ => {
                println!("Invalid choice. Try again.");
                Ok(())
            }
        };

        if let Err(err) = result {
            println!("Error: {err}");
        }
    }

    Ok(())
}

fn print_menu() {
    println!();
    println!("Expense Tracker Menu:");
    println!("1. Add Expense");
    println!("2. Edit Expense");
    println!("3. Delete Expense");
    println!("4. View Expenses");
    println!("5. Set Budget");
    println!("6. Summarize Expenses");
    println!("7. Save to File");
    println!("8. Load from File");
    println!("9. Exit");
}

fn add_expense(ledger: &mut Ledger) -> LedgerResult<()> {
    let amount = input::prompt_amount("Enter amount: ")?;
    let category = input::require_line("Enter category (e.g., Food, Transport): ")?;
    let date = input::prompt_date("Enter date (YYYY-MM-DD): ")?;
    let description = input::prompt_description()?;

    match ledger.add_expense(amount, category.clone(), date, description) {
        Ok(receipt) => {
            println!(
                "Expense added successfully! Current expense count: {}",
                receipt.count
            );
            if let Some(line) = format_alert(&category, &receipt.alert) {
                println!("{line}");
            }
        }
        Err(err) if err.is_budget_rejection() => {
            println!("Cannot add expense! {err}. Increase the budget to add more expenses.");
        }
        Err(err) => println!("Cannot add expense! {err}"),
    }

    Ok(())
}

fn edit_expense(ledger: &mut Ledger) -> LedgerResult<()> {
    print!("{}", format_expense_list(ledger));
    if ledger.is_empty() {
        return Ok(());
    }

    let index = input::prompt_index("Enter the index of the expense to edit (0 to cancel): ")?;
    let current = ledger
        .list_expenses()
        .find(|(i, _)| *i == index)
        .map(|(_, e)| e.clone());
    let Some(current) = current else {
        // 0 is cancellation, anything else is out of range; the engine
        // draws that distinction.
        match ledger.edit_expense(index, ExpenseUpdate::default()) {
            Ok(MutationOutcome::Cancelled) => println!("Cancelled."),
            Ok(MutationOutcome::Applied) => {}
            Err(err) => println!("{err}"),
        }
        return Ok(());
    };

    println!("Editing: {current}");
    let update = ExpenseUpdate {
        amount: input::prompt_optional_amount(&format!(
            "Enter new amount (or press Enter to keep {}): ",
            current.amount
        ))?,
        category: input::prompt_optional(&format!(
            "Enter new category (or press Enter to keep {}): ",
            current.category
        ))?,
        date: input::prompt_optional_date(&format!(
            "Enter new date (YYYY-MM-DD) (or press Enter to keep {}): ",
            current.date.format("%Y-%m-%d")
        ))?,
        description: input::prompt_optional(&format!(
            "Enter new description (or press Enter to keep {}): ",
            current.description
        ))?,
    };

    match ledger.edit_expense(index, update) {
        Ok(_) => println!("Expense updated successfully!"),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn delete_expense(ledger: &mut Ledger) -> LedgerResult<()> {
    print!("{}", format_expense_list(ledger));
    if ledger.is_empty() {
        return Ok(());
    }

    let index = input::prompt_index("Enter the index of the expense to delete (0 to cancel): ")?;
    match ledger.delete_expense(index) {
        Ok(MutationOutcome::Applied) => println!("Expense deleted successfully!"),
        Ok(MutationOutcome::Cancelled) => println!("Cancelled."),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn set_budget(ledger: &mut Ledger) -> LedgerResult<()> {
    let category = input::require_line("Enter category to set budget for: ")?;
    let limit = input::prompt_amount("Enter budget amount: ")?;
    ledger.set_budget(category.clone(), limit);
    println!("Budget set for {category}: {limit}");
    Ok(())
}

fn save(ledger: &Ledger) -> LedgerResult<()> {
    match ledger.save_to_file() {
        Ok(()) => println!("Expenses saved to file."),
        Err(err) => println!("Error saving to file: {err}"),
    }
    Ok(())
}

fn load(ledger: &mut Ledger) -> LedgerResult<()> {
    match ledger.load_from_file() {
        Ok(()) => println!("Expenses loaded from file."),
        Err(LedgerError::NotFound) => println!("No saved expenses found."),
        Err(err) => println!("Error loading from file: {err}"),
    }
    Ok(())
}
