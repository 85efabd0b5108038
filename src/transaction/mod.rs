//! Transaction management for the demo application.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the payload used to create and update transactions
//! - Database functions for storing and querying transactions and products
//! - The JSON REST API endpoints
//! - View handlers for the transaction pages and their forms

mod api;
pub(crate) mod core;
mod create_page;
mod detail_page;
mod edit_page;
mod form;
mod product;
mod transactions_page;

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::AppState;

pub use api::{
    create_transaction_endpoint, get_products_endpoint, get_transaction_endpoint,
    get_transactions_endpoint, update_transaction_endpoint,
};
pub use core::{
    Transaction, TransactionPayload, create_transaction,
    create_transaction_table, get_all_transactions, get_transaction, update_transaction,
    upsert_transaction,
};
pub use create_page::{create_transaction_form_endpoint, get_new_transaction_page};
pub use detail_page::get_transaction_page;
pub use edit_page::{get_edit_transaction_page, update_transaction_form_endpoint};
pub use product::{Product, get_distinct_products};
pub use transactions_page::get_transactions_page;

#[cfg(test)]
pub use core::count_transactions;

/// The state needed to read and write transactions.
#[derive(Debug, Clone)]
pub struct TransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

impl TransactionState {
    #[cfg(test)]
    pub(crate) fn new(connection: Connection) -> Self {
        Self {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }
}
