//! Defines the core data model and database queries for expenses.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::Error;

/// Alias for the integer type used for expense IDs.
pub type ExpenseId = i64;

// ============================================================================
// MODELS
// ============================================================================

/// A single entry in the ledger: some money spent (or received) on a given day.
///
/// To create a new `Expense`, use [Expense::build] and [insert_expense].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID of the expense, assigned by the database.
    pub id: ExpenseId,
    /// The amount of money. Any sign is allowed.
    pub amount: f64,
    /// A free-form label used to group expenses, e.g. "Groceries".
    pub category: String,
    /// A text description of what the expense was for. May be empty.
    pub description: String,
    /// When the expense happened, conventionally formatted as `YYYY-MM-DD`.
    ///
    /// The date is stored as given and is never checked to be a real date.
    pub date: String,
}

impl Expense {
    /// Create a new expense.
    ///
    /// Shortcut for [NewExpense] for discoverability.
    pub fn build(amount: f64, category: &str, date: &str) -> NewExpense {
        NewExpense {
            amount,
            category: category.to_owned(),
            description: String::new(),
            date: date.to_owned(),
        }
    }
}

/// An expense that has not been saved to the database yet.
///
/// The description defaults to an empty string.
#[derive(Debug, PartialEq, Clone)]
pub struct NewExpense {
    /// The amount of money.
    pub amount: f64,
    /// The category label.
    pub category: String,
    /// The description, empty if the client did not provide one.
    pub description: String,
    /// The date text, stored as-is.
    pub date: String,
}

impl NewExpense {
    /// Set the description for the expense.
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_owned();
        self
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create the expenses table in the database.
///
/// `description` is nullable so that files written by older versions of the
/// ledger can still be opened. Reads substitute an empty string for `NULL`.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS expenses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                description TEXT,
                date TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

/// Insert a new expense into the database.
///
/// The new row is visible to any connection that reads after this returns.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn insert_expense(new_expense: NewExpense, connection: &Connection) -> Result<Expense, Error> {
    let expense = connection
        .prepare(
            "INSERT INTO expenses (amount, category, description, date)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, amount, category, description, date",
        )?
        .query_row(
            (
                new_expense.amount,
                new_expense.category,
                new_expense.description,
                new_expense.date,
            ),
            map_expense_row,
        )?;

    Ok(expense)
}

/// Retrieve every expense, most recent date first.
///
/// Dates are compared as text. Expenses that share a date are returned in no
/// particular order.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn list_expenses(connection: &Connection) -> Result<Vec<Expense>, Error> {
    connection
        .prepare(
            "SELECT id, amount, category, COALESCE(description, ''), date
             FROM expenses
             ORDER BY date DESC",
        )?
        .query_map([], map_expense_row)?
        .map(|maybe_expense| maybe_expense.map_err(Error::from))
        .collect()
}

/// The number of rows changed by a statement.
pub type RowsAffected = usize;

/// Delete the expense with `id`.
///
/// Deleting an ID that is not in the database is not an error, the function
/// simply reports that zero rows were affected.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn delete_expense(id: ExpenseId, connection: &Connection) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM expenses WHERE id = :id", &[(":id", &id)])
        .map_err(|err| err.into())
}

/// Map a database row to an [Expense].
///
/// Expects the columns `id, amount, category, description, date` in that order.
pub fn map_expense_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    let id = row.get(0)?;
    let amount = row.get(1)?;
    let category = row.get(2)?;
    let description: Option<String> = row.get(3)?;
    let date = row.get(4)?;

    Ok(Expense {
        id,
        amount,
        category,
        description: description.unwrap_or_default(),
        date,
    })
}

// ============================================================================
// TESTS
// ============================================================================
