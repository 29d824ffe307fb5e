use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::expense::ApiResponse;

/// The message sent to the client for routes that do not exist.
pub const NOT_FOUND_MESSAGE: &str = "Not found";

pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

pub fn get_404_not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::failure(NOT_FOUND_MESSAGE)),
    )
        .into_response()
}
