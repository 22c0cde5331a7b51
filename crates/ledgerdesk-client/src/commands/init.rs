use crate::ClientResult;
use crate::config::ClientConfig;
use crate::contracts::envelope::SuccessEnvelope;
use crate::contracts::types::InitData;
use crate::setup::ensure_initialized;

/// Creates the ledger, or upgrades an existing one in place.
pub fn run(config: &ClientConfig) -> ClientResult<SuccessEnvelope> {
    let setup = ensure_initialized(config)?;
    let data = InitData {
        db_path: setup.db_path,
        schema_version: setup.schema_version,
    };
    SuccessEnvelope::for_command("init", &data)
}
