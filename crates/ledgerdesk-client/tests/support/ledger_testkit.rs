use std::fs;
use std::path::{Path, PathBuf};

use ledgerdesk_client::ClientConfig;
use ledgerdesk_client::setup::ensure_initialized_at;
use rusqlite::{Connection, params};
use tempfile::{Builder, TempDir};

pub const TEST_BASE_URL: &str = "https://books.example.com";

pub fn temp_home(prefix: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = Builder::new().prefix(prefix).tempdir()?;
    let home = dir.path().join("ledger-home");
    fs::create_dir_all(&home)?;
    Ok((dir, home))
}

pub fn config_for(home: &Path) -> ClientConfig {
    ClientConfig::new(Some(home.to_path_buf()), Some(TEST_BASE_URL))
}

/// Initializes the ledger under `home` and runs `sql` against it with a
/// writable connection, the way the bookkeeping application would.
pub fn seed(home: &Path, sql: &str) {
    let setup = ensure_initialized_at(home);
    assert!(setup.is_ok());
    if let Ok(context) = setup {
        let connection = Connection::open(&context.db_path);
        assert!(connection.is_ok());
        if let Ok(conn) = connection {
            let applied = conn.execute_batch(sql);
            assert!(applied.is_ok(), "seed failed: {applied:?}");
        }
    }
}

pub fn insert_company(home: &Path, id: i64, name: &str, short_name: &str) {
    with_connection(home, |conn| {
        conn.execute(
            "INSERT INTO companies (id, company_name, company_side_bar_name, address, city, state, zip, contact, company_email, company_phone, company_status)
             VALUES (?1, ?2, ?3, '12 Harbor Rd', 'Portland', 'ME', '04101', 'Dana Reyes', 'billing@example.com', '207-555-0100', 'Active')",
            params![id, name, short_name],
        )
    });
}

pub fn insert_chain(home: &Path, account_id: i64, relationship_id: i64, company_id: i64) {
    with_connection(home, |conn| {
        conn.execute(
            "INSERT INTO business_relationships (id, related_business_id) VALUES (?1, ?2)",
            params![relationship_id, company_id],
        )?;
        conn.execute(
            "INSERT INTO accounts (id, relationship_id) VALUES (?1, ?2)",
            params![account_id, relationship_id],
        )
    });
}

pub fn insert_invoice(
    home: &Path,
    id: i64,
    invoice_type: &str,
    amount: f64,
    debit_account_id: i64,
    credit_account_id: i64,
) {
    with_connection(home, |conn| {
        conn.execute(
            "INSERT INTO invoices (id, invoice_number, invoice_datetime, invoice_description, invoice_amount, invoice_category, invoice_type, debit_account_id, credit_account_id)
             VALUES (?1, ?2, '2023-03-05 00:00:00', 'Quarterly premium', ?3, 'Insurance', ?4, ?5, ?6)",
            params![
                id,
                format!("INV-{id}"),
                amount,
                invoice_type,
                debit_account_id,
                credit_account_id
            ],
        )
    });
}

fn with_connection<F>(home: &Path, apply: F)
where
    F: FnOnce(&Connection) -> rusqlite::Result<usize>,
{
    let setup = ensure_initialized_at(home);
    assert!(setup.is_ok());
    if let Ok(context) = setup {
        let connection = Connection::open(&context.db_path);
        assert!(connection.is_ok());
        if let Ok(conn) = connection {
            let applied = apply(&conn);
            assert!(applied.is_ok(), "insert failed: {applied:?}");
        }
    }
}
