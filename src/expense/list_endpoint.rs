use axum::{Json, extract::State};

use crate::{
    Database, Error,
    expense::{Expense, core::list_expenses},
};

/// A route handler that responds with every expense as a JSON array, most
/// recent date first.
pub async fn get_expenses_endpoint(
    State(database): State<Database>,
) -> Result<Json<Vec<Expense>>, Error> {
    let connection = database.connect()?;
    let expenses = list_expenses(&connection).inspect_err(|error| {
        tracing::error!("could not list expenses: {error}");
    })?;

    Ok(Json(expenses))
}
