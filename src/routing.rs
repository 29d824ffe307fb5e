//! Application router configuration.

use std::path::Path;

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::services::{ServeDir, ServeFile};

use crate::{
    AppState, endpoints,
    expense::{create_expense_endpoint, delete_expense_endpoint, get_expenses_endpoint},
    not_found::get_404_not_found,
    statistics::get_statistics_endpoint,
};

/// The file served at the root route, relative to the static directory.
pub const INDEX_PAGE: &str = "index.html";

/// Return a router with all the app's routes.
///
/// `static_dir` is the directory holding the ledger page ([INDEX_PAGE]) and
/// the assets it loads.
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();

    Router::new()
        .route(endpoints::ADD_EXPENSE, post(create_expense_endpoint))
        .route(endpoints::GET_EXPENSES, get(get_expenses_endpoint))
        .route(endpoints::DELETE_EXPENSE, delete(delete_expense_endpoint))
        .route(endpoints::GET_STATISTICS, get(get_statistics_endpoint))
        .route_service(endpoints::ROOT, ServeFile::new(static_dir.join(INDEX_PAGE)))
        .nest_service(endpoints::STATIC, ServeDir::new(static_dir))
        .fallback(get_404_not_found)
        .with_state(state)
}
