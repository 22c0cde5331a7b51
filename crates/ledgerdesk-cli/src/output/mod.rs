mod bill_text;
mod company_text;
mod error_text;
mod json;
mod mode;
mod table;

use std::io;

use ledgerdesk_client::{ClientError, SuccessEnvelope};

use crate::stdout_io::write_stdout_line;

pub use mode::{OutputMode, mode_for_command};

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    write_stdout_line(&body)
}

pub fn print_failure(error: &ClientError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    write_stdout_line(&body)
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "init" => Ok(render_init(&success.data)),
        "bill show" => bill_text::render_bill_details(&success.data),
        "bill list" => bill_text::render_bill_list(&success.data),
        "company show" => company_text::render_company_details(&success.data),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}

fn render_init(data: &serde_json::Value) -> String {
    let lines = table::key_value_rows(
        &[
            ("Ledger", bill_text::value_str(data, "db_path").to_string()),
            ("Schema", bill_text::value_str(data, "schema_version").to_string()),
        ],
        2,
    );
    format!("Ledger ready.\n\n{}", lines.join("\n"))
}
