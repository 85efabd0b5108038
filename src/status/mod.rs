//! Transaction statuses, e.g. 'SUCCESS' or 'FAILED'.
//!
//! Statuses are a static lookup table that is filled by the seeder and read
//! by the API and the transaction forms.

mod api;
mod db;

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{AppState, StatusId};

pub use api::get_statuses_endpoint;
pub use db::{create_status_table, get_all_statuses, upsert_status};

/// A named status code that a transaction refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Status {
    /// The status code.
    pub id: StatusId,
    /// The display name, e.g. "SUCCESS".
    pub name: String,
}

/// The state needed to read statuses.
#[derive(Debug, Clone)]
pub struct StatusState {
    /// The database connection for reading statuses.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for StatusState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}
