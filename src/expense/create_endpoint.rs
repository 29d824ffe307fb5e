//! Defines the endpoint for creating a new expense.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Deserialize;

use crate::{
    Database, Error,
    expense::{ApiResponse, Expense, NewExpense, core::insert_expense},
};

/// The amount sent by the client, either a JSON number or a numeric string
/// such as `"12.50"` as produced by an HTML number input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AmountField {
    /// The amount was sent as a JSON number.
    Number(f64),
    /// The amount was sent as text and still needs to be parsed.
    Text(String),
}

impl AmountField {
    /// Coerce the field to a finite number.
    ///
    /// Surrounding whitespace is ignored. Returns `None` for text that is not
    /// a number and for infinities or NaN, which cannot be sent back as JSON.
    pub fn to_f64(&self) -> Option<f64> {
        let amount = match self {
            AmountField::Number(amount) => *amount,
            AmountField::Text(text) => text.trim().parse().ok()?,
        };

        amount.is_finite().then_some(amount)
    }
}

/// A text field sent by the client.
///
/// Numbers and booleans are accepted and stored as text, the same way an
/// SQLite `TEXT` column converts them. `null`, arrays and objects are rejected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TextField {
    /// The field was sent as a JSON string.
    Text(String),
    /// The field was sent as a whole number.
    Integer(i64),
    /// The field was sent as a number with a fractional part or exponent.
    Real(f64),
    /// The field was sent as `true` or `false`, stored as `1` or `0`.
    Boolean(bool),
}

impl TextField {
    /// Convert the field to the text that is stored in the database.
    ///
    /// Whole reals keep a trailing `.0`, e.g. `12.0` is stored as "12.0".
    pub fn into_text(self) -> String {
        match self {
            TextField::Text(text) => text,
            TextField::Integer(integer) => integer.to_string(),
            TextField::Real(real) if real.fract() == 0.0 && real.abs() < 1e15 => {
                format!("{real:.1}")
            }
            TextField::Real(real) => real.to_string(),
            TextField::Boolean(boolean) => u8::from(boolean).to_string(),
        }
    }
}

/// The JSON body for creating an expense.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpenseForm {
    /// The amount of money.
    pub amount: AmountField,
    /// The label to group the expense under.
    pub category: TextField,
    /// Text detailing the expense. A missing or `null` description is stored
    /// as an empty string.
    #[serde(default)]
    pub description: Option<TextField>,
    /// When the expense happened, e.g. "2024-03-15".
    pub date: TextField,
}

impl TryFrom<ExpenseForm> for NewExpense {
    type Error = Error;

    fn try_from(form: ExpenseForm) -> Result<Self, Self::Error> {
        let amount = form.amount.to_f64().ok_or(Error::InvalidData)?;

        let description = form
            .description
            .map(TextField::into_text)
            .unwrap_or_default();

        Ok(
            Expense::build(amount, &form.category.into_text(), &form.date.into_text())
                .description(&description),
        )
    }
}

/// A route handler for creating a new expense.
///
/// Responds with `{"success":true}`, or a 400 with a generic message if the
/// body is not valid JSON, is missing a required field, has a `null`, array or
/// object where text is expected, or has an amount that is not a number.
pub async fn create_expense_endpoint(
    State(database): State<Database>,
    form: Result<Json<ExpenseForm>, JsonRejection>,
) -> Result<Json<ApiResponse>, Error> {
    let Json(form) = form.map_err(|rejection| {
        tracing::debug!("rejected expense: {rejection}");
        Error::InvalidData
    })?;

    let new_expense = NewExpense::try_from(form).inspect_err(|_| {
        tracing::debug!("rejected expense: amount is not a number");
    })?;

    let connection = database.connect()?;
    let expense = insert_expense(new_expense, &connection).inspect_err(|error| {
        tracing::error!("could not create expense: {error}");
    })?;
    tracing::info!("Created expense {}", expense.id);

    Ok(Json(ApiResponse::success()))
}
