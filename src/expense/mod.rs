//! Expense management for the ledger.
//!
//! This module contains everything related to expenses:
//! - The `Expense` model and `NewExpense` for creating expenses
//! - Database functions for storing, listing, and deleting expenses
//! - Route handlers for the expense endpoints

mod core;
mod create_endpoint;
mod delete_endpoint;
mod list_endpoint;
mod response;

pub use core::{Expense, ExpenseId, NewExpense, create_expense_table, insert_expense};
pub use create_endpoint::create_expense_endpoint;
pub use delete_endpoint::delete_expense_endpoint;
pub use list_endpoint::get_expenses_endpoint;
pub use response::ApiResponse;

#[cfg(test)]
pub use core::{delete_expense, list_expenses};
