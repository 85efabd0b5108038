//! Database operations for statuses.

use rusqlite::{Connection, Row};

use crate::{Error, status::Status};

/// Retrieve all statuses in the order they are stored.
pub fn get_all_statuses(connection: &Connection) -> Result<Vec<Status>, Error> {
    connection
        .prepare("SELECT id, name FROM status;")?
        .query_map([], map_row)?
        .map(|maybe_status| maybe_status.map_err(|error| error.into()))
        .collect()
}

/// Insert `status`, replacing any existing status with the same ID.
pub fn upsert_status(status: &Status, connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "INSERT OR REPLACE INTO status (id, name) VALUES (?1, ?2)",
        (status.id, &status.name),
    )?;

    Ok(())
}

/// Initialize the status table.
pub fn create_status_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS status (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Status, rusqlite::Error> {
    let id = row.get(0)?;
    let name = row.get(1)?;

    Ok(Status { id, name })
}

#[cfg(test)]
mod status_query_tests {
    use rusqlite::Connection;

    use crate::status::{Status, create_status_table, get_all_statuses, upsert_status};

    fn get_test_db_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        create_status_table(&connection).expect("Could not create status table");
        connection
    }

    fn status(id: i64, name: &str) -> Status {
        Status {
            id,
            name: name.to_owned(),
        }
    }

    #[test]
    fn get_all_statuses_on_empty_table() {
        let connection = get_test_db_connection();

        let statuses = get_all_statuses(&connection);

        assert_eq!(statuses, Ok(vec![]));
    }

    #[test]
    fn upsert_inserts_new_statuses() {
        let connection = get_test_db_connection();
        let want = vec![status(0, "SUCCESS"), status(1, "FAILED")];

        for status in &want {
            upsert_status(status, &connection).expect("Could not upsert status");
        }

        assert_eq!(get_all_statuses(&connection), Ok(want));
    }

    #[test]
    fn upsert_replaces_existing_status() {
        let connection = get_test_db_connection();
        upsert_status(&status(1, "FAILED"), &connection).expect("Could not upsert status");

        upsert_status(&status(1, "REFUNDED"), &connection).expect("Could not upsert status");

        assert_eq!(get_all_statuses(&connection), Ok(vec![status(1, "REFUNDED")]));
    }
}
