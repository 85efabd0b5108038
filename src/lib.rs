//! Data Demo is a small web app for recording product transactions.
//!
//! This library provides a JSON REST API over a SQLite database of
//! transactions and their statuses, along with HTML pages for listing,
//! viewing, adding and editing transactions.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod database_id;
mod db;
mod endpoints;
mod envelope;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod seed;
mod status;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use database_id::{StatusId, TransactionId};
pub use db::initialize as initialize_db;
pub use envelope::{DataEnvelope, ErrorEnvelope};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use seed::{Fixture, SeedSummary, seed};
pub use status::Status;
pub use transaction::{Product, Transaction, TransactionPayload};

use crate::{
    alert::Alert, internal_server_error::InternalServerError,
    not_found::get_404_not_found_response,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// One or more required transaction fields were missing or empty.
    ///
    /// Holds the names of the missing fields, in the same order they are
    /// checked, using the field names of the JSON API.
    #[error("Missing required fields: {}", .0.join(", "))]
    Validation(Vec<&'static str>),

    /// The request could not be understood, e.g. the body was not valid JSON
    /// or a path parameter was not an integer.
    #[error("{0}")]
    InvalidRequest(String),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// A seed fixture could not be parsed.
    #[error("could not parse the fixture: {0}")]
    Fixture(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl Error {
    /// The HTTP status code that best describes this error.
    fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) | Error::InvalidRequest(_) | Error::Fixture(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::SqlError(_) | Error::DatabaseLockError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert the error into a JSON `{ "error": ... }` response for the REST API.
    ///
    /// `context` is the message sent to the client for internal errors, e.g.
    /// "Error fetching data". The underlying error is logged and never
    /// forwarded to the client.
    pub(crate) fn into_json_response(self, context: &str) -> Response {
        let status_code = self.status_code();

        let message = match self {
            Error::NotFound => "Transaction not found".to_owned(),
            error if status_code == StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("{context}: {error}");
                context.to_owned()
            }
            error => error.to_string(),
        };

        (status_code, Json(ErrorEnvelope { error: message })).into_response()
    }

    /// Convert the error into an alert fragment for HTMX form submissions.
    pub(crate) fn into_alert_response(self) -> Response {
        let status_code = self.status_code();

        let alert = match self {
            Error::Validation(_) | Error::InvalidRequest(_) => {
                Alert::error("Could not save transaction", &self.to_string()).into_html()
            }
            Error::NotFound => Alert::error(
                "Could not save transaction",
                "The transaction could not be found.",
            )
            .into_html(),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                Alert::error(
                    "Something went wrong",
                    "An unexpected error occurred, check the server logs for more details.",
                )
                .into_html()
            }
        };

        (status_code, alert).into_response()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

#[cfg(test)]
mod error_tests {
    use axum::http::StatusCode;

    use crate::{ErrorEnvelope, test_utils::parse_json};

    use super::Error;

    #[test]
    fn validation_message_lists_missing_fields() {
        let error = Error::Validation(vec!["productName", "status"]);

        assert_eq!(
            error.to_string(),
            "Missing required fields: productName, status"
        );
    }

    #[tokio::test]
    async fn json_response_hides_sql_errors() {
        let error = Error::SqlError(rusqlite::Error::InvalidQuery);

        let response = error.into_json_response("Error fetching data");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorEnvelope = parse_json(response).await;
        assert_eq!(body.error, "Error fetching data");
    }

    #[tokio::test]
    async fn json_response_for_not_found() {
        let response = Error::NotFound.into_json_response("Error fetching transaction");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: ErrorEnvelope = parse_json(response).await;
        assert_eq!(body.error, "Transaction not found");
    }

    #[tokio::test]
    async fn json_response_for_validation_error() {
        let response =
            Error::Validation(vec!["amount"]).into_json_response("Error adding transaction");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorEnvelope = parse_json(response).await;
        assert_eq!(body.error, "Missing required fields: amount");
    }
}
