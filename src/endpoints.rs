//! The route paths for the pages and the JSON API.
//!
//! For paths that take a parameter, e.g., '/data/{transaction_id}', use [format_endpoint].

/// The page listing every transaction.
pub const ROOT: &str = "/";
/// The page with the form for adding a transaction.
pub const NEW_TRANSACTION_VIEW: &str = "/data/add";
/// The page showing a single transaction.
pub const TRANSACTION_VIEW: &str = "/data/{transaction_id}";
/// The page with the form for editing a transaction.
pub const EDIT_TRANSACTION_VIEW: &str = "/data/{transaction_id}/edit";
/// The route the add form posts to.
pub const TRANSACTIONS_FORM: &str = "/data";
/// The route the edit form puts to.
pub const TRANSACTION_FORM: &str = "/data/{transaction_id}";

/// The API banner.
pub const API_ROOT: &str = "/api";
/// The route to list and create transactions.
pub const TRANSACTIONS_API: &str = "/api/v1/data";
/// The route to get and update a single transaction.
pub const TRANSACTION_API: &str = "/api/v1/data/{transaction_id}";
/// The route to list statuses.
pub const STATUSES_API: &str = "/api/v1/statuses";
/// The route to list products.
pub const PRODUCTS_API: &str = "/api/v1/products";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter starts with a left brace and ends with the next right brace,
/// e.g. '{transaction_id}' in '/data/{transaction_id}/edit'. Only the first
/// parameter is replaced.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |offset| param_start + offset + 1);

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
