//! Read-only aggregate queries over the expenses table.
//!
//! Every function recomputes its result from the full table.

use std::collections::BTreeMap;

use rusqlite::Connection;

use crate::Error;

/// Get the sum of all expense amounts, or zero if there are no expenses.
///
/// # Errors
/// Returns [Error::SqlError] if there is an SQL error.
pub(super) fn get_total(connection: &Connection) -> Result<f64, Error> {
    let mut stmt = connection.prepare("SELECT COALESCE(SUM(amount), 0.0) FROM expenses")?;

    let total: f64 = stmt.query_row([], |row| row.get(0))?;

    Ok(total)
}

/// Get the sum of the amounts of expenses whose date starts with `year_month`,
/// e.g. "2024-03".
///
/// This is a plain text prefix test. Any date text that begins with
/// `year_month` is counted, whether or not it is a valid date.
///
/// # Errors
/// Returns [Error::SqlError] if there is an SQL error.
pub(super) fn get_monthly_total(year_month: &str, connection: &Connection) -> Result<f64, Error> {
    let mut stmt = connection.prepare(
        "SELECT COALESCE(SUM(amount), 0.0) FROM expenses
         WHERE substr(date, 1, length(:prefix)) = :prefix",
    )?;

    let total: f64 = stmt.query_row(&[(":prefix", &year_month)], |row| row.get(0))?;

    Ok(total)
}

/// Get the sum of expense amounts for each category.
///
/// Categories are grouped by exact text, so "Food" and "food" are separate.
///
/// # Errors
/// Returns [Error::SqlError] if there is an SQL error.
pub(super) fn get_totals_by_category(
    connection: &Connection,
) -> Result<BTreeMap<String, f64>, Error> {
    connection
        .prepare("SELECT category, SUM(amount) FROM expenses GROUP BY category")?
        .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?)))?
        .map(|maybe_total| maybe_total.map_err(Error::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rusqlite::Connection;

    use crate::{
        db::initialize,
        expense::{Expense, delete_expense, insert_expense},
    };

    use super::{get_monthly_total, get_total, get_totals_by_category};

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    fn insert(amount: f64, category: &str, date: &str, connection: &Connection) {
        insert_expense(Expense::build(amount, category, date), connection)
            .expect("Could not insert expense");
    }

    #[track_caller]
    fn assert_close(got: f64, want: f64) {
        assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
    }

    #[test]
    fn empty_table_has_zero_totals() {
        let conn = get_test_connection();

        assert_eq!(get_total(&conn), Ok(0.0));
        assert_eq!(get_monthly_total("2024-03", &conn), Ok(0.0));
        assert_eq!(get_totals_by_category(&conn), Ok(BTreeMap::new()));
    }

    #[test]
    fn total_is_sum_of_all_amounts() {
        let conn = get_test_connection();
        let amounts = [12.5, -3.25, 0.0, 100.1, 7.0];
        for amount in amounts {
            insert(amount, "Misc", "2024-01-01", &conn);
        }

        let got = get_total(&conn).unwrap();

        assert_close(got, amounts.iter().sum());
    }

    #[test]
    fn total_reflects_deletes() {
        let conn = get_test_connection();
        insert(10.0, "A", "2024-01-01", &conn);
        let removed = insert_expense(Expense::build(5.0, "A", "2024-01-02"), &conn).unwrap();

        delete_expense(removed.id, &conn).unwrap();

        assert_eq!(get_total(&conn), Ok(10.0));
    }

    #[test]
    fn monthly_total_matches_date_prefix() {
        let conn = get_test_connection();
        insert(10.0, "A", "2024-03-15", &conn);
        insert(2.5, "B", "2024-03-01", &conn);
        insert(99.0, "A", "2024-04-01", &conn);
        insert(50.0, "A", "2023-03-15", &conn);

        assert_close(get_monthly_total("2024-03", &conn).unwrap(), 12.5);
        assert_close(get_monthly_total("2024-04", &conn).unwrap(), 99.0);
        assert_eq!(get_monthly_total("2024-05", &conn), Ok(0.0));
    }

    #[test]
    fn monthly_total_includes_malformed_dates_with_matching_prefix() {
        let conn = get_test_connection();
        insert(1.0, "A", "2024-03-99", &conn);
        insert(2.0, "A", "2024-03", &conn);
        insert(4.0, "A", "15/03/2024", &conn);

        assert_close(get_monthly_total("2024-03", &conn).unwrap(), 3.0);
    }

    #[test]
    fn monthly_total_treats_wildcards_literally() {
        let conn = get_test_connection();
        insert(1.0, "A", "2024-03-15", &conn);

        assert_eq!(get_monthly_total("2024-0_", &conn), Ok(0.0));
        assert_eq!(get_monthly_total("%", &conn), Ok(0.0));
    }

    #[test]
    fn totals_are_grouped_by_exact_category() {
        let conn = get_test_connection();
        insert(10.0, "Food", "2024-01-01", &conn);
        insert(5.5, "Food", "2024-02-01", &conn);
        insert(3.0, "food", "2024-02-01", &conn);
        insert(-20.0, "Rent", "2024-02-01", &conn);

        let got = get_totals_by_category(&conn).unwrap();

        let want = BTreeMap::from([
            ("Food".to_owned(), 15.5),
            ("Rent".to_owned(), -20.0),
            ("food".to_owned(), 3.0),
        ]);
        assert_eq!(got, want);
    }
}
