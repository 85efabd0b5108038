//! The JSON REST API for transactions and products.
//!
//! Every handler locks the shared connection, runs one database operation and
//! wraps the result in a `{ "data": ... }` or `{ "error": ... }` envelope.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    DataEnvelope, Error, TransactionId,
    db::lock_connection,
    transaction::{
        TransactionPayload, TransactionState, create_transaction, get_all_transactions,
        get_distinct_products, get_transaction, update_transaction,
    },
};

/// The response body for a newly created transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionResponse {
    /// A confirmation message.
    pub message: String,
    /// The ID assigned to the new transaction.
    pub transaction_id: TransactionId,
    /// The product code that was submitted.
    #[serde(rename = "productID")]
    pub product_id: String,
}

/// The response body for an updated transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransactionResponse {
    /// A confirmation message.
    pub message: String,
    /// The ID from the request path.
    pub transaction_id: TransactionId,
}

/// A route handler that responds with every transaction as `{ "data": Transaction[] }`.
pub async fn get_transactions_endpoint(State(state): State<TransactionState>) -> Response {
    let transactions = lock_connection(&state.db_connection)
        .and_then(|connection| get_all_transactions(&connection));

    match transactions {
        Ok(transactions) => Json(DataEnvelope::new(transactions)).into_response(),
        Err(error) => error.into_json_response("Error fetching data"),
    }
}

/// A route handler that responds with a single transaction as `{ "data": Transaction }`.
///
/// Responds with 404 if there is no transaction with the ID in the path.
pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    transaction_id: Result<Path<TransactionId>, PathRejection>,
) -> Response {
    let transaction = parse_transaction_id(transaction_id).and_then(|transaction_id| {
        let connection = lock_connection(&state.db_connection)?;
        get_transaction(transaction_id, &connection)
    });

    match transaction {
        Ok(transaction) => Json(DataEnvelope::new(transaction)).into_response(),
        Err(error) => error.into_json_response("Error fetching transaction"),
    }
}

/// A route handler for creating a new transaction, responds with 201 and the new ID on success.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    payload: Result<Json<TransactionPayload>, JsonRejection>,
) -> Response {
    let created = parse_payload(payload).and_then(|payload| {
        let connection = lock_connection(&state.db_connection)?;
        create_transaction(payload, &connection)
    });

    match created {
        Ok(created) => (
            StatusCode::CREATED,
            Json(CreateTransactionResponse {
                message: "Transaction added successfully".to_owned(),
                transaction_id: created.transaction_id,
                product_id: created.product_id,
            }),
        )
            .into_response(),
        Err(error) => error.into_json_response("Error adding transaction"),
    }
}

/// A route handler for overwriting an existing transaction.
///
/// An ID that does not match any transaction is not treated as an error.
pub async fn update_transaction_endpoint(
    State(state): State<TransactionState>,
    transaction_id: Result<Path<TransactionId>, PathRejection>,
    payload: Result<Json<TransactionPayload>, JsonRejection>,
) -> Response {
    let updated = parse_transaction_id(transaction_id).and_then(|transaction_id| {
        let payload = parse_payload(payload)?;
        let connection = lock_connection(&state.db_connection)?;
        update_transaction(transaction_id, payload, &connection)?;

        Ok(transaction_id)
    });

    match updated {
        Ok(transaction_id) => Json(UpdateTransactionResponse {
            message: "Transaction updated successfully".to_owned(),
            transaction_id,
        })
        .into_response(),
        Err(error) => error.into_json_response("Error updating transaction"),
    }
}

/// A route handler that responds with every distinct product as `{ "data": Product[] }`.
pub async fn get_products_endpoint(State(state): State<TransactionState>) -> Response {
    let products = lock_connection(&state.db_connection)
        .and_then(|connection| get_distinct_products(&connection));

    match products {
        Ok(products) => Json(DataEnvelope::new(products)).into_response(),
        Err(error) => error.into_json_response("Error fetching products"),
    }
}

fn parse_transaction_id(
    transaction_id: Result<Path<TransactionId>, PathRejection>,
) -> Result<TransactionId, Error> {
    transaction_id
        .map(|Path(transaction_id)| transaction_id)
        .map_err(|rejection| {
            Error::InvalidRequest(format!("Invalid transaction ID: {}", rejection.body_text()))
        })
}

fn parse_payload(
    payload: Result<Json<TransactionPayload>, JsonRejection>,
) -> Result<TransactionPayload, Error> {
    payload
        .map(|Json(payload)| payload)
        .map_err(|rejection| Error::InvalidRequest(rejection.body_text()))
}
