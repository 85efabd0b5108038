//! Products, derived from the transactions they appear in.
//!
//! There is no products table: a product is known once a transaction for it
//! has been recorded.

use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::Error;

/// A product that has been sold at least once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// The display name of the product.
    pub product_name: String,
    /// The product code.
    #[serde(rename = "productID")]
    pub product_id: String,
}

/// Retrieve each distinct (name, code) pair across all transactions.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn get_distinct_products(connection: &Connection) -> Result<Vec<Product>, Error> {
    connection
        .prepare("SELECT DISTINCT productName, productID FROM data")?
        .query_map([], |row| {
            Ok(Product {
                product_name: row.get(0)?,
                product_id: row.get(1)?,
            })
        })?
        .map(|maybe_product| maybe_product.map_err(|error| error.into()))
        .collect()
}
