use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::{IntoResponse, Response},
};

use crate::{
    Database, Error,
    expense::{ApiResponse, ExpenseId, core::delete_expense},
    not_found::get_404_not_found_response,
};

/// A route handler for deleting an expense.
///
/// Responds with `{"success":true}` whether or not the expense existed. An ID
/// that is not a non-negative integer does not match the route and gets a 404.
pub async fn delete_expense_endpoint(
    State(database): State<Database>,
    expense_id: Result<Path<u64>, PathRejection>,
) -> Result<Response, Error> {
    let Some(expense_id) = expense_id
        .ok()
        .and_then(|Path(expense_id)| ExpenseId::try_from(expense_id).ok())
    else {
        return Ok(get_404_not_found_response());
    };

    let connection = database.connect()?;
    let rows_affected = delete_expense(expense_id, &connection).inspect_err(|error| {
        tracing::error!("Could not delete expense {expense_id}: {error}");
    })?;

    match rows_affected {
        0 => tracing::debug!("Tried to delete expense {expense_id}, which does not exist"),
        _ => tracing::info!("Deleted expense {expense_id}"),
    }

    Ok(Json(ApiResponse::success()).into_response())
}
