//! Defines the core data models and database queries for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{Error, StatusId, TransactionId};

// ============================================================================
// MODELS
// ============================================================================

/// A sale of a product to a customer.
///
/// Field names follow the JSON API, e.g. `product_id` is serialized as
/// `productID` and `customer_name` as `customerName`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The code of the product that was sold.
    #[serde(rename = "productID")]
    pub product_id: String,
    /// The display name of the product that was sold.
    pub product_name: String,
    /// The amount as decimal text, stored exactly as it was submitted.
    #[serde(deserialize_with = "text_or_number")]
    pub amount: String,
    /// Who bought the product.
    pub customer_name: String,
    /// The status code. This should refer to a [crate::Status], but nothing
    /// enforces it.
    pub status: StatusId,
    /// When the transaction happened.
    pub transaction_date: String,
    /// Who recorded the transaction.
    pub create_by: String,
    /// When the transaction was recorded. Set by the database on insert and
    /// never changed afterwards.
    #[serde(default)]
    pub create_on: String,
    /// The name of the status that `status` refers to, or `None` if there is
    /// no such status.
    #[serde(default)]
    pub status_name: Option<String>,
}

/// The fields submitted to create or update a transaction.
///
/// Every field is optional so that all missing fields can be reported at once.
/// An empty string counts as missing, while a status of `0` is a valid status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPayload {
    /// The display name of the product.
    #[serde(default)]
    pub product_name: Option<String>,
    /// The code of the product.
    #[serde(default, rename = "productID")]
    pub product_id: Option<String>,
    /// The amount, either as a JSON string or a JSON number.
    #[serde(default, deserialize_with = "optional_text_or_number")]
    pub amount: Option<String>,
    /// Who bought the product.
    #[serde(default)]
    pub customer_name: Option<String>,
    /// The status code.
    #[serde(default)]
    pub status: Option<StatusId>,
    /// Who recorded the transaction.
    #[serde(default)]
    pub create_by: Option<String>,
    /// When the transaction happened.
    #[serde(default)]
    pub transaction_date: Option<String>,
}

/// A [TransactionPayload] where every required field is present.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TransactionFields {
    pub product_name: String,
    pub product_id: String,
    pub amount: String,
    pub customer_name: String,
    pub status: StatusId,
    pub create_by: String,
    pub transaction_date: String,
}

impl TransactionPayload {
    /// Check that every required field is present and non-empty.
    ///
    /// # Errors
    /// Returns an [Error::Validation] listing the missing fields.
    pub(crate) fn validate(self) -> Result<TransactionFields, Error> {
        let mut missing = Vec::new();

        let product_name = required(self.product_name, "productName", &mut missing);
        let product_id = required(self.product_id, "productID", &mut missing);
        let amount = required(self.amount, "amount", &mut missing);
        let customer_name = required(self.customer_name, "customerName", &mut missing);
        if self.status.is_none() {
            missing.push("status");
        }
        let create_by = required(self.create_by, "createBy", &mut missing);
        let transaction_date = required(self.transaction_date, "transactionDate", &mut missing);

        match (
            product_name,
            product_id,
            amount,
            customer_name,
            self.status,
            create_by,
            transaction_date,
        ) {
            (
                Some(product_name),
                Some(product_id),
                Some(amount),
                Some(customer_name),
                Some(status),
                Some(create_by),
                Some(transaction_date),
            ) => Ok(TransactionFields {
                product_name,
                product_id,
                amount,
                customer_name,
                status,
                create_by,
                transaction_date,
            }),
            _ => Err(Error::Validation(missing)),
        }
    }
}

fn required(
    value: Option<String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    let value = value.filter(|value| !value.is_empty());

    if value.is_none() {
        missing.push(name);
    }

    value
}

/// The result of creating a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedTransaction {
    /// The ID assigned to the new transaction.
    pub transaction_id: TransactionId,
    /// The product code that was submitted.
    pub product_id: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl From<TextOrNumber> for String {
    fn from(value: TextOrNumber) -> Self {
        match value {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Number(number) => number.to_string(),
        }
    }
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    TextOrNumber::deserialize(deserializer).map(String::from)
}

fn optional_text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<TextOrNumber>::deserialize(deserializer).map(|value| value.map(String::from))
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction from `payload`.
///
/// The new transaction gets the ID one greater than the current maximum ID, or
/// 1 if there are no transactions, and its creation time is set to the
/// database's current time. Both happen in a single statement.
///
/// # Errors
/// This function will return a:
/// - [Error::Validation] if a required field is missing, in which case nothing is written,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn create_transaction(
    payload: TransactionPayload,
    connection: &Connection,
) -> Result<CreatedTransaction, Error> {
    let fields = payload.validate()?;

    let transaction_id = connection
        .prepare(
            "INSERT INTO data (id, productID, productName, amount, customerName, status, transactionDate, createBy, createOn)
             SELECT COALESCE(MAX(id), 0) + 1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, datetime('now') FROM data
             RETURNING id",
        )?
        .query_row(
            (
                &fields.product_id,
                &fields.product_name,
                &fields.amount,
                &fields.customer_name,
                fields.status,
                &fields.transaction_date,
                &fields.create_by,
            ),
            |row| row.get(0),
        )?;

    Ok(CreatedTransaction {
        transaction_id,
        product_id: fields.product_id,
    })
}

/// Retrieve a transaction and its status name from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "SELECT t.id, t.productID, t.productName, t.amount, t.customerName, t.status,
                    t.transactionDate, t.createBy, t.createOn, s.name
             FROM data t
             LEFT JOIN status s ON t.status = s.id
             WHERE t.id = :id",
        )?
        .query_row(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Retrieve every transaction along with its status name.
///
/// Transactions whose status does not match a known status are included with
/// a status name of `None`.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT t.id, t.productID, t.productName, t.amount, t.customerName, t.status,
                    t.transactionDate, t.createBy, t.createOn, s.name
             FROM data t
             LEFT JOIN status s ON t.status = s.id",
        )?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(|error| error.into()))
        .collect()
}

/// Overwrite every field of the transaction `id` except its ID and creation time.
///
/// Updating an ID that does not exist changes nothing and is not an error.
///
/// # Errors
/// This function will return a:
/// - [Error::Validation] if a required field is missing, in which case nothing is written,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn update_transaction(
    id: TransactionId,
    payload: TransactionPayload,
    connection: &Connection,
) -> Result<(), Error> {
    let fields = payload.validate()?;

    let rows_affected = connection.execute(
        "UPDATE data SET
            productID = ?1,
            productName = ?2,
            amount = ?3,
            customerName = ?4,
            status = ?5,
            transactionDate = ?6,
            createBy = ?7
         WHERE id = ?8",
        (
            &fields.product_id,
            &fields.product_name,
            &fields.amount,
            &fields.customer_name,
            fields.status,
            &fields.transaction_date,
            &fields.create_by,
            id,
        ),
    )?;

    if rows_affected == 0 {
        tracing::debug!("Update of transaction {id} did not match any rows");
    }

    Ok(())
}

/// Insert `transaction`, replacing any existing transaction with the same ID.
///
/// The status name is ignored. An empty creation time is replaced with the
/// database's current time.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn upsert_transaction(transaction: &Transaction, connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "INSERT OR REPLACE INTO data (id, productID, productName, amount, customerName, status, transactionDate, createBy, createOn)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, COALESCE(NULLIF(?9, ''), datetime('now')))",
        (
            transaction.id,
            &transaction.product_id,
            &transaction.product_name,
            &transaction.amount,
            &transaction.customer_name,
            transaction.status,
            &transaction.transaction_date,
            &transaction.create_by,
            &transaction.create_on,
        ),
    )?;

    Ok(())
}

/// Get the total number of transactions in the database.
#[cfg(test)]
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM data;", [], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Create the transaction table in the database.
///
/// The status column refers to the status table. The reference is not
/// enforced because [crate::db::initialize] switches foreign keys off.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS data (
                id INTEGER PRIMARY KEY,
                productID TEXT NOT NULL,
                productName TEXT NOT NULL,
                amount TEXT NOT NULL,
                customerName TEXT NOT NULL,
                status INTEGER NOT NULL,
                transactionDate TEXT NOT NULL,
                createBy TEXT NOT NULL,
                createOn TEXT NOT NULL,
                FOREIGN KEY (status) REFERENCES status(id)
                )",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let product_id = row.get(1)?;
    let product_name = row.get(2)?;
    let amount = row.get(3)?;
    let customer_name = row.get(4)?;
    let status = row.get(5)?;
    let transaction_date = row.get(6)?;
    let create_by = row.get(7)?;
    let create_on = row.get(8)?;
    let status_name = row.get(9)?;

    Ok(Transaction {
        id,
        product_id,
        product_name,
        amount,
        customer_name,
        status,
        transaction_date,
        create_by,
        create_on,
        status_name,
    })
}

// ============================================================================
// TESTS
// ============================================================================
