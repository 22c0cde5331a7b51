use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension, params};

use crate::config::ClientConfig;
use crate::migrations::{EXPECTED_USER_VERSION, REQUIRED_TABLES, run_pending};
use crate::state::{
    LedgerLocation, ensure_ledger_directory, map_sqlite_error, open_connection,
    open_readonly_connection,
};
use crate::{ClientError, ClientResult};

#[derive(Debug, Clone)]
pub struct SetupContext {
    pub db_path: String,
    pub schema_version: String,
}

/// An existing ledger opened read-only whose schema has been checked.
#[derive(Debug)]
pub struct VerifiedLedger {
    pub connection: Connection,
    pub db_path: PathBuf,
    pub schema_version: String,
}

/// Creates the ledger or brings it up to the current schema. This is the only
/// path that writes to the database.
pub fn ensure_initialized(config: &ClientConfig) -> ClientResult<SetupContext> {
    let location = LedgerLocation::from_config(config)?;
    ensure_ledger_directory(&location.home)?;

    let db_path = location.db_path.as_path();
    let mut connection = open_connection(db_path)?;

    run_pending(&mut connection).map_err(|error| map_migration_error(db_path, &error))?;

    let schema_version = verify_schema(&connection, db_path)?;
    tracing::debug!(db_path = %db_path.display(), %schema_version, "ledger ready");

    Ok(SetupContext {
        db_path: db_path.display().to_string(),
        schema_version,
    })
}

/// Opens the ledger for a read command. Nothing is created or migrated; a
/// ledger that is absent or has the wrong shape is reported instead.
pub fn open_verified(config: &ClientConfig) -> ClientResult<VerifiedLedger> {
    let location = LedgerLocation::from_config(config)?;
    if !location.db_path.is_file() {
        return Err(ClientError::ledger_not_initialized(&location.db_path));
    }

    let connection = open_readonly_connection(&location.db_path)?;
    let schema_version = verify_schema(&connection, &location.db_path)?;

    Ok(VerifiedLedger {
        connection,
        db_path: location.db_path,
        schema_version,
    })
}

pub fn ensure_initialized_at(home: &Path) -> ClientResult<SetupContext> {
    ensure_initialized(&ClientConfig::new(Some(home.to_path_buf()), None))
}

fn map_migration_error(db_path: &Path, error: &rusqlite_migration::Error) -> ClientError {
    if let rusqlite_migration::Error::RusqliteError { query: _, err } = error {
        let mapped = map_sqlite_error(db_path, err);
        if matches!(
            mapped.code.as_str(),
            "ledger_locked" | "ledger_corrupt" | "ledger_init_permission_denied"
        ) {
            return mapped;
        }
    }

    ClientError::migration_failed(db_path, &error.to_string())
}

fn verify_schema(connection: &Connection, db_path: &Path) -> ClientResult<String> {
    verify_tables(connection, db_path)?;
    verify_user_version(connection, db_path)?;
    read_schema_version(connection, db_path)
}

fn verify_tables(connection: &Connection, db_path: &Path) -> ClientResult<()> {
    for (table_name, required_columns) in REQUIRED_TABLES {
        if !table_exists(connection, table_name, db_path)? {
            return Err(ClientError::ledger_corrupt(db_path));
        }

        let columns = table_columns(connection, table_name, db_path)?;
        if let Some(missing) = required_columns
            .iter()
            .find(|required| !columns.iter().any(|column| column == *required))
        {
            tracing::warn!(table_name, column = %missing, "ledger table is missing a column");
            return Err(ClientError::ledger_corrupt(db_path));
        }
    }

    Ok(())
}

fn verify_user_version(connection: &Connection, db_path: &Path) -> ClientResult<()> {
    let user_version = connection
        .query_row("PRAGMA user_version", [], |row| row.get::<_, i64>(0))
        .map_err(|error| map_sqlite_error(db_path, &error))?;
    if user_version != EXPECTED_USER_VERSION {
        return Err(ClientError::ledger_corrupt(db_path));
    }
    Ok(())
}

fn table_exists(connection: &Connection, table_name: &str, db_path: &Path) -> ClientResult<bool> {
    let exists = connection
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1 LIMIT 1",
            params![table_name],
            |_row| Ok(true),
        )
        .optional()
        .map_err(|error| map_sqlite_error(db_path, &error))?
        .unwrap_or(false);

    Ok(exists)
}

fn table_columns(
    connection: &Connection,
    table_name: &str,
    db_path: &Path,
) -> ClientResult<Vec<String>> {
    if !REQUIRED_TABLES
        .iter()
        .any(|(required_name, _)| *required_name == table_name)
    {
        return Err(ClientError::ledger_init_failed(
            db_path,
            "Refused PRAGMA table inspection for unknown table.",
        ));
    }

    // `table_name` comes from the REQUIRED_TABLES allowlist only.
    let sql = format!("PRAGMA table_info({table_name})");
    let mut statement = connection
        .prepare(&sql)
        .map_err(|error| map_sqlite_error(db_path, &error))?;

    let column_iter = statement
        .query_map([], |row| row.get::<_, String>(1))
        .map_err(|error| map_sqlite_error(db_path, &error))?;

    let mut columns = Vec::new();
    for row in column_iter {
        columns.push(row.map_err(|error| map_sqlite_error(db_path, &error))?);
    }

    Ok(columns)
}

fn read_schema_version(connection: &Connection, db_path: &Path) -> ClientResult<String> {
    let value = connection
        .query_row(
            "SELECT value FROM internal_meta WHERE key = 'schema_version' LIMIT 1",
            [],
            |row| row.get::<_, String>(0),
        )
        .optional()
        .map_err(|error| map_sqlite_error(db_path, &error))?;

    value.ok_or_else(|| ClientError::ledger_corrupt(db_path))
}
