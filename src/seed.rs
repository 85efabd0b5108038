//! Loading statuses and transactions from a JSON fixture.
//!
//! A fixture looks like `{ "data": Transaction[], "status": Status[] }`, using
//! the same field names as the JSON API.

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    db::initialize,
    status::{Status, upsert_status},
    transaction::{Transaction, upsert_transaction},
};

/// The records to load into the database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    /// The transactions, including their IDs.
    #[serde(default)]
    pub data: Vec<Transaction>,
    /// The statuses the transactions refer to.
    #[serde(default)]
    pub status: Vec<Status>,
}

impl Fixture {
    /// Parse a fixture from JSON text.
    ///
    /// # Errors
    /// Returns an [Error::Fixture] if `json` is not a valid fixture.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|error| Error::Fixture(error.to_string()))
    }
}

/// The number of records written by [seed].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    /// The number of status records written.
    pub statuses: usize,
    /// The number of transaction records written.
    pub transactions: usize,
}

/// Write every record in `fixture` to the database, replacing any existing
/// record with the same ID.
///
/// The tables are created if they do not exist. All records are written in
/// one database transaction, so either the whole fixture is loaded or none of it.
///
/// # Errors
/// Returns an [Error::SqlError] if any record could not be written.
pub fn seed(connection: &Connection, fixture: &Fixture) -> Result<SeedSummary, Error> {
    initialize(connection)?;

    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Immediate)?;

    for status in &fixture.status {
        upsert_status(status, &transaction)?;
    }

    for record in &fixture.data {
        upsert_transaction(record, &transaction)?;
    }

    transaction.commit()?;

    tracing::info!(
        "Seeded {} statuses and {} transactions",
        fixture.status.len(),
        fixture.data.len()
    );

    Ok(SeedSummary {
        statuses: fixture.status.len(),
        transactions: fixture.data.len(),
    })
}

#[cfg(test)]
mod seed_tests {
    use rusqlite::Connection;

    use crate::{
        Error,
        status::{Status, get_all_statuses},
        transaction::{
            Transaction, core::test_fixtures::seeded_transaction, count_transactions,
            get_all_transactions, get_transaction,
        },
    };

    use super::{Fixture, SeedSummary, seed};

    fn fixture() -> Fixture {
        Fixture {
            data: vec![seeded_transaction(1, 0), seeded_transaction(2, 1)],
            status: vec![
                Status {
                    id: 0,
                    name: "SUCCESS".to_owned(),
                },
                Status {
                    id: 1,
                    name: "FAILED".to_owned(),
                },
            ],
        }
    }

    #[test]
    fn seeds_empty_database() {
        let connection = Connection::open_in_memory().unwrap();

        let summary = seed(&connection, &fixture()).expect("Could not seed database");

        assert_eq!(
            summary,
            SeedSummary {
                statuses: 2,
                transactions: 2
            }
        );
        assert_eq!(get_all_statuses(&connection), Ok(fixture().status));
        let transactions = get_all_transactions(&connection).unwrap();
        assert_eq!(
            transactions
                .iter()
                .map(|transaction| transaction.status_name.as_deref())
                .collect::<Vec<_>>(),
            vec![Some("SUCCESS"), Some("FAILED")]
        );
    }

    #[test]
    fn seeding_twice_is_idempotent() {
        let connection = Connection::open_in_memory().unwrap();
        seed(&connection, &fixture()).unwrap();
        let first = get_all_transactions(&connection).unwrap();

        seed(&connection, &fixture()).unwrap();

        assert_eq!(get_all_transactions(&connection), Ok(first));
        assert_eq!(get_all_statuses(&connection).unwrap().len(), 2);
    }

    #[test]
    fn existing_records_are_replaced() {
        let connection = Connection::open_in_memory().unwrap();
        seed(&connection, &fixture()).unwrap();
        let changed = Fixture {
            data: vec![Transaction {
                amount: "1".to_owned(),
                ..seeded_transaction(2, 1)
            }],
            status: vec![Status {
                id: 1,
                name: "DECLINED".to_owned(),
            }],
        };

        seed(&connection, &changed).unwrap();

        let replaced = get_transaction(2, &connection).unwrap();
        assert_eq!(replaced.amount, "1");
        assert_eq!(replaced.status_name.as_deref(), Some("DECLINED"));
        assert_eq!(count_transactions(&connection), Ok(2));
    }

    #[test]
    fn seeds_transactions_with_unknown_status() {
        let connection = Connection::open_in_memory().unwrap();
        let dangling = Fixture {
            data: vec![seeded_transaction(1, 0), seeded_transaction(2, 7)],
            ..fixture()
        };

        seed(&connection, &dangling).expect("Could not seed database");

        let transactions = get_all_transactions(&connection).unwrap();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[1].status_name, None);
    }

    #[test]
    fn parses_fixture_json() {
        let json = r#"{
            "data": [{
                "id": 1,
                "productID": "P-001",
                "productName": "Keyboard",
                "amount": "250000",
                "customerName": "Siti",
                "status": 0,
                "transactionDate": "2024-02-14",
                "createBy": "seed",
                "createOn": "2024-02-14 09:30:00"
            }],
            "status": [{ "id": 0, "name": "SUCCESS" }]
        }"#;

        let fixture = Fixture::from_json(json).expect("Could not parse fixture");

        assert_eq!(fixture.data, vec![seeded_transaction(1, 0)]);
        assert_eq!(fixture.status.len(), 1);
    }

    #[test]
    fn invalid_fixture_is_an_error() {
        let result = Fixture::from_json(r#"{ "data": [{ "id": "one" }] }"#);

        assert!(matches!(result, Err(Error::Fixture(_))));
    }

    #[test]
    fn empty_fixture_only_creates_tables() {
        let connection = Connection::open_in_memory().unwrap();

        let summary = seed(&connection, &Fixture::from_json("{}").unwrap()).unwrap();

        assert_eq!(
            summary,
            SeedSummary {
                statuses: 0,
                transactions: 0
            }
        );
        assert_eq!(count_transactions(&connection), Ok(0));
    }
}
