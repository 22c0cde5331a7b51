use serde::Serialize;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};

/// Result of a successful command. The CLI picks its text renderer from
/// `command` and wraps `data` for `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessEnvelope {
    pub command: String,
    pub data: Value,
}

impl SuccessEnvelope {
    pub fn for_command<T>(command: &str, data: &T) -> ClientResult<Self>
    where
        T: Serialize,
    {
        let data = serde_json::to_value(data)
            .map_err(|err| ClientError::internal_serialization(&err.to_string()))?;
        Ok(Self {
            command: command.to_string(),
            data,
        })
    }
}
