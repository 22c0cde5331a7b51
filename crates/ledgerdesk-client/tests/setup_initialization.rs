mod support;

use std::fs;
use std::path::Path;

use ledgerdesk_client::setup::{ensure_initialized, ensure_initialized_at};
use ledgerdesk_client::state::map_io_error;
use rusqlite::Connection;
use support::ledger_testkit::{config_for, insert_company, seed, temp_home};

fn open_ledger(home: &Path) -> Option<Connection> {
    Connection::open(home.join("ledger.db")).ok()
}

fn count_rows(connection: &Connection, table: &str) -> Option<i64> {
    connection
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
        .ok()
}

fn init_error_code(home: &Path) -> Option<String> {
    ensure_initialized_at(home).err().map(|error| error.code)
}

#[test]
fn first_run_creates_ledger_inside_configured_home() {
    let temp = temp_home("ledgerdesk-setup-create");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let nested = home.join("books");
        let context = ensure_initialized(&config_for(&nested));
        assert!(context.is_ok());
        if let Ok(ready) = context {
            assert_eq!(ready.schema_version, "v1");
            assert_eq!(ready.db_path, nested.join("ledger.db").display().to_string());
            assert!(nested.join("ledger.db").is_file());
        }
    }
}

#[test]
fn rerunning_setup_keeps_bookkeeping_rows() {
    let temp = temp_home("ledgerdesk-setup-rerun");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        insert_company(&home, 9, "Acme Insurance Agency", "Acme");
        insert_company(&home, 10, "Globex Supply", "");

        assert!(ensure_initialized_at(&home).is_ok());

        let connection = open_ledger(&home);
        assert!(connection.is_some());
        if let Some(conn) = connection {
            assert_eq!(count_rows(&conn, "companies"), Some(2));
            let user_version = conn
                .query_row("PRAGMA user_version", [], |row| row.get::<_, i64>(0))
                .ok();
            assert_eq!(user_version, Some(1));
        }
    }
}

#[test]
fn ledger_missing_the_accounts_table_is_reported_corrupt() {
    let temp = temp_home("ledgerdesk-setup-missing-table");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        seed(&home, "DROP TABLE accounts;");
        assert_eq!(init_error_code(&home).as_deref(), Some("ledger_corrupt"));
    }
}

#[test]
fn ledger_missing_a_lookup_column_is_reported_corrupt() {
    let temp = temp_home("ledgerdesk-setup-missing-column");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        seed(
            &home,
            "DROP TABLE business_relationships;
             CREATE TABLE business_relationships (id INTEGER PRIMARY KEY);",
        );
        assert_eq!(init_error_code(&home).as_deref(), Some("ledger_corrupt"));
    }
}

#[test]
fn exclusive_writer_makes_setup_report_locked() {
    let temp = temp_home("ledgerdesk-setup-locked");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        seed(&home, "");
        let writer = open_ledger(&home);
        assert!(writer.is_some());
        if let Some(conn) = writer {
            assert!(conn.execute_batch("BEGIN EXCLUSIVE;").is_ok());
            assert_eq!(init_error_code(&home).as_deref(), Some("ledger_locked"));
            assert!(conn.execute_batch("ROLLBACK;").is_ok());
        }
        assert!(ensure_initialized_at(&home).is_ok());
    }
}

#[test]
fn garbage_ledger_file_is_reported_corrupt() {
    let temp = temp_home("ledgerdesk-setup-garbage");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        assert!(fs::write(home.join("ledger.db"), "not-a-sqlite-database").is_ok());
        assert_eq!(init_error_code(&home).as_deref(), Some("ledger_corrupt"));
    }
}

#[test]
fn incompatible_attachments_table_fails_migration() {
    let temp = temp_home("ledgerdesk-setup-conflict");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let connection = open_ledger(&home);
        assert!(connection.is_some());
        if let Some(conn) = connection {
            assert!(conn.execute_batch("CREATE TABLE attachments(id TEXT);").is_ok());
        }
        assert_eq!(init_error_code(&home).as_deref(), Some("migration_failed"));
    }
}

#[test]
fn regular_file_in_place_of_home_fails_init() {
    let temp = temp_home("ledgerdesk-setup-file-home");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let file_home = home.join("ledger-home-file");
        assert!(fs::write(&file_home, "content").is_ok());
        assert_eq!(
            init_error_code(&file_home).as_deref(),
            Some("ledger_init_failed")
        );
    }
}

#[test]
fn permission_denied_io_maps_to_permission_error() {
    let io_error = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
    let mapped = map_io_error(Path::new("/srv/books"), &io_error);
    assert_eq!(mapped.code, "ledger_init_permission_denied");
    assert!(!mapped.recovery_steps.is_empty());
}
