//! The JSON envelopes that wrap every REST API response.

use serde::{Deserialize, Serialize};

/// A successful response body, `{ "data": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    /// The payload of the response.
    pub data: T,
}

impl<T> DataEnvelope<T> {
    /// Wrap `data` in an envelope.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A failed response body, `{ "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// A human readable description of what went wrong.
    pub error: String,
}
