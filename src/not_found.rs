//! The page shown for unknown routes and transactions.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// The fallback route handler.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

pub fn get_404_not_found_response() -> Response {
    let page = error_view(
        "Not Found",
        "404",
        "Nothing here.",
        "The page or transaction you are looking for does not exist.",
    );

    (StatusCode::NOT_FOUND, page).into_response()
}
