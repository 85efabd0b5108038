//! REST API endpoint for statuses.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    DataEnvelope,
    db::lock_connection,
    status::{StatusState, get_all_statuses},
};

/// A route handler that responds with every status as `{ "data": Status[] }`.
pub async fn get_statuses_endpoint(State(state): State<StatusState>) -> Response {
    let statuses = lock_connection(&state.db_connection)
        .and_then(|connection| get_all_statuses(&connection));

    match statuses {
        Ok(statuses) => Json(DataEnvelope::new(statuses)).into_response(),
        Err(error) => error.into_json_response("Error fetching statuses"),
    }
}
