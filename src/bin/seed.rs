use std::{error::Error, fs, path::Path, process::exit};

use clap::Parser;
use rusqlite::Connection;

use data_demo::{Fixture, seed};

/// Load statuses and transactions from a JSON fixture into the demo database.
///
/// Records that already exist are replaced, so the fixture can be loaded any
/// number of times.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the SQLite database. It is created if it does not exist.
    #[arg(long)]
    db_path: String,

    /// File path to the JSON fixture, e.g. 'data/viewData.json'.
    #[arg(long, default_value = "data/viewData.json")]
    fixture_path: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let db_path = Path::new(&args.db_path);
    if db_path.extension().is_none_or(|extension| extension.is_empty()) {
        eprintln!("Database path must include a file extension (e.g., 'demo.db').");
        exit(1);
    }

    let fixture_path = Path::new(&args.fixture_path);
    if !fixture_path.is_file() {
        eprintln!("No fixture found at {fixture_path:#?}!");
        exit(1);
    }

    let fixture = Fixture::from_json(&fs::read_to_string(fixture_path)?)?;
    println!(
        "Loaded {} transactions and {} status records from {fixture_path:#?}",
        fixture.data.len(),
        fixture.status.len()
    );

    let conn = Connection::open(db_path)?;
    println!("Connected to the SQLite database at {db_path:#?}");

    let summary = seed(&conn, &fixture)?;
    println!(
        "Wrote {} status records and {} transactions.",
        summary.statuses, summary.transactions
    );

    Ok(())
}
