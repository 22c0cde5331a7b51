use std::io;

use ledgerdesk_client::{ClientError, SuccessEnvelope};
use serde::Serialize;
use serde_json::json;

const JSON_VERSION: &str = "v1";

pub fn render_success_json(success: &SuccessEnvelope) -> io::Result<String> {
    serialize_json_pretty(&json!({
        "ok": true,
        "version": JSON_VERSION,
        "command": success.command,
        "data": success.data,
    }))
}

pub fn render_error_json(error: &ClientError) -> io::Result<String> {
    let mut payload = json!({
        "ok": false,
        "error": {
            "code": error.code,
            "message": error.message,
            "recovery_steps": error.recovery_steps,
        }
    });
    if let Some(data) = &error.data {
        payload["data"] = data.clone();
    }
    serialize_json_pretty(&payload)
}

fn serialize_json_pretty<T>(value: &T) -> io::Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use ledgerdesk_client::ClientError;
    use serde_json::Value;

    use super::render_error_json;

    #[test]
    fn error_json_includes_contract_fields_and_data() {
        let rendered = render_error_json(&ClientError::company_not_found(12));
        assert!(rendered.is_ok());
        if let Ok(body) = rendered {
            let parsed = serde_json::from_str::<Value>(&body);
            assert!(parsed.is_ok());
            if let Ok(payload) = parsed {
                assert_eq!(payload["ok"], Value::Bool(false));
                assert_eq!(payload["error"]["code"], Value::from("company_not_found"));
                assert!(payload["error"]["recovery_steps"].is_array());
                assert_eq!(payload["data"]["company_id"], Value::from(12));
            }
        }
    }
}
