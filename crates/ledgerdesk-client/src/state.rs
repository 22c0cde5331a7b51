use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{Connection, Error as SqliteError, OpenFlags, ffi::ErrorCode};

use crate::config::ClientConfig;
use crate::{ClientError, ClientResult};

const LEDGER_DB_FILE: &str = "ledger.db";
const BUSY_TIMEOUT: Duration = Duration::from_millis(250);

/// Where the bookkeeping database lives for one command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerLocation {
    pub home: PathBuf,
    pub db_path: PathBuf,
}

impl LedgerLocation {
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let home = resolve_ledger_home(config.home_override.as_deref())?;
        let db_path = home.join(LEDGER_DB_FILE);
        Ok(Self { home, db_path })
    }
}

/// The override comes from `ClientConfig`; without one the ledger lives in
/// `~/.ledgerdesk`.
pub fn resolve_ledger_home(home_override: Option<&Path>) -> ClientResult<PathBuf> {
    let candidate = match home_override {
        Some(path) => path.to_path_buf(),
        None => match home::home_dir() {
            Some(home_path) => home_path.join(".ledgerdesk"),
            None => {
                return Err(ClientError::ledger_init_failed(
                    Path::new("."),
                    "Could not resolve a home directory for the ledger.",
                ));
            }
        },
    };

    if candidate.is_absolute() {
        return Ok(candidate);
    }

    std::env::current_dir()
        .map(|cwd| cwd.join(&candidate))
        .map_err(|error| ClientError::ledger_init_failed(&candidate, &error.to_string()))
}

pub fn ensure_ledger_directory(path: &Path) -> ClientResult<()> {
    fs::create_dir_all(path).map_err(|error| map_io_error(path, &error))?;
    set_private_permissions_best_effort(path);
    Ok(())
}

pub fn open_connection(db_path: &Path) -> ClientResult<Connection> {
    let connection =
        Connection::open(db_path).map_err(|error| map_sqlite_error(db_path, &error))?;
    with_busy_timeout(connection, db_path)
}

/// Opens the per-command read view. Lookups never write, so the connection
/// refuses writes at the SQLite level too.
pub fn open_readonly_connection(db_path: &Path) -> ClientResult<Connection> {
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let connection = Connection::open_with_flags(db_path, flags)
        .map_err(|error| map_sqlite_error(db_path, &error))?;
    with_busy_timeout(connection, db_path)
}

fn with_busy_timeout(connection: Connection, db_path: &Path) -> ClientResult<Connection> {
    connection
        .busy_timeout(BUSY_TIMEOUT)
        .map_err(|error| map_sqlite_error(db_path, &error))?;
    Ok(connection)
}

pub fn map_io_error(path: &Path, error: &std::io::Error) -> ClientError {
    if error.kind() == std::io::ErrorKind::PermissionDenied {
        return ClientError::ledger_init_permission_denied(path, &error.to_string());
    }

    ClientError::ledger_init_failed(path, &error.to_string())
}

pub fn map_sqlite_error(path: &Path, error: &SqliteError) -> ClientError {
    match error.sqlite_error_code() {
        Some(ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked) => {
            ClientError::ledger_locked(path)
        }
        Some(ErrorCode::NotADatabase) => ClientError::ledger_corrupt(path),
        Some(ErrorCode::CannotOpen | ErrorCode::ReadOnly) => {
            ClientError::ledger_init_permission_denied(path, &error.to_string())
        }
        _ => ClientError::ledger_init_failed(path, &error.to_string()),
    }
}

#[cfg(unix)]
fn set_private_permissions_best_effort(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o700));
}

#[cfg(not(unix))]
fn set_private_permissions_best_effort(_path: &Path) {}
