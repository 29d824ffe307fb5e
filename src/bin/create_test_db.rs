use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use expense_ledger::{Expense, initialize_db, insert_expense};

/// A utility for creating a test database for the expense ledger server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test expenses...");

    let expenses = [
        Expense::build(54.20, "Groceries", "2024-01-06").description("Weekly shop"),
        Expense::build(1450.00, "Rent", "2024-01-01").description("January rent"),
        Expense::build(4.50, "Coffee", "2024-01-09"),
        Expense::build(61.85, "Groceries", "2024-02-03").description("Weekly shop"),
        Expense::build(1450.00, "Rent", "2024-02-01").description("February rent"),
        Expense::build(-25.00, "Refund", "2024-02-14").description("Returned shoes"),
        Expense::build(38.10, "Transport", "2024-03-02").description("Fuel"),
        Expense::build(4.50, "Coffee", "2024-03-05"),
        Expense::build(1450.00, "Rent", "2024-03-01").description("March rent"),
    ];
    let count = expenses.len();

    for expense in expenses {
        insert_expense(expense, &conn)?;
    }

    println!("Created {count} expenses.");
    println!("Success!");

    Ok(())
}
