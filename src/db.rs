//! Access to the application's SQLite database.
//!
//! Each request opens its own connection through [Database::connect] and the
//! connection is closed when it goes out of scope at the end of the request.

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::{Error, expense::create_expense_table};

/// A handle to the SQLite database file that holds the expense ledger.
///
/// The handle itself holds no connection, so it is cheap to clone into the
/// state of each route handler.
#[derive(Debug, Clone, PartialEq)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Create a handle to the database at `path` and create any missing tables.
    ///
    /// The file is created if it does not exist.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or the schema cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let database = Self {
            path: path.as_ref().to_path_buf(),
        };

        let connection = database.connect()?;
        initialize(&connection)?;
        tracing::debug!("Initialized database at {:?}", database.path);

        Ok(database)
    }

    /// Open a new connection to the database.
    ///
    /// # Errors
    /// Returns an error if SQLite cannot open the file.
    pub fn connect(&self) -> Result<Connection, Error> {
        Connection::open(&self.path).map_err(|error| {
            tracing::error!("could not open database {:?}: {error}", self.path);
            Error::SqlError(error)
        })
    }
}

/// Create the tables for the domain models if they do not already exist.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    create_expense_table(connection)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use tempfile::tempdir;

    use super::{Database, initialize};

    #[test]
    fn initialize_is_idempotent() {
        let connection = Connection::open_in_memory().unwrap();

        assert_eq!(initialize(&connection), Ok(()));
        assert_eq!(initialize(&connection), Ok(()));
    }

    #[test]
    fn open_creates_file_and_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("expenses.db");

        let database = Database::open(&path).expect("Could not open database");

        assert!(path.is_file());
        let connection = database.connect().unwrap();
        let table_count: i64 = connection
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'expenses'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(table_count, 1);
    }

    #[test]
    fn open_keeps_existing_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("expenses.db");
        let database = Database::open(&path).unwrap();
        database
            .connect()
            .unwrap()
            .execute(
                "INSERT INTO expenses (amount, category, description, date) VALUES (1.5, 'Food', '', '2024-01-01')",
                (),
            )
            .unwrap();

        let reopened = Database::open(&path).unwrap();

        let row_count: i64 = reopened
            .connect()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))
            .unwrap();
        assert_eq!(row_count, 1);
    }
}
