use std::path::PathBuf;

use rusqlite::Connection;

use crate::ClientResult;
use crate::config::ClientConfig;
use crate::setup::open_verified;

/// Read-only view of the ledger held for the duration of one command.
pub(crate) struct LedgerReadView {
    pub connection: Connection,
    pub db_path: PathBuf,
}

pub(crate) fn open_read_view(config: &ClientConfig) -> ClientResult<LedgerReadView> {
    let ledger = open_verified(config)?;
    tracing::debug!(schema_version = %ledger.schema_version, "opened read view");
    Ok(LedgerReadView {
        connection: ledger.connection,
        db_path: ledger.db_path,
    })
}
