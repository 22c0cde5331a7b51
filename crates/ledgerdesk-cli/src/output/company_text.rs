use std::io;

use serde_json::Value;

use super::bill_text::value_str;
use super::table::key_value_rows;

const COMPANY_FIELDS: [(&str, &str); 12] = [
    ("Company Name", "company_name"),
    ("Short Name", "company_side_bar_name"),
    ("Status", "company_status"),
    ("Address", "address"),
    ("City", "city"),
    ("State", "state"),
    ("Zip Code", "zip"),
    ("Contact", "contact"),
    ("Email", "company_email"),
    ("Phone Number", "company_phone"),
    ("Fax Number", "company_fax"),
    ("Notes", "company_notes"),
];

pub fn render_company_details(data: &Value) -> io::Result<String> {
    let company = data
        .get("company")
        .filter(|value| value.is_object())
        .ok_or_else(|| io::Error::other("company output requires company"))?;
    let attachments = data
        .get("attachments")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("company output requires attachments"))?;

    let entries = COMPANY_FIELDS
        .iter()
        .map(|(label, key)| (*label, value_str(company, key).to_string()))
        .collect::<Vec<_>>();

    let mut lines = vec![
        value_str(company, "company_name").to_string(),
        String::new(),
        "Company:".to_string(),
    ];
    lines.extend(key_value_rows(&entries, 2));
    lines.push(String::new());
    lines.push("Attachments:".to_string());

    if attachments.is_empty() {
        lines.push("  None.".to_string());
    } else {
        let links = attachments
            .iter()
            .map(|attachment| {
                (
                    value_str(attachment, "attachment_name"),
                    value_str(attachment, "download_url").to_string(),
                )
            })
            .collect::<Vec<_>>();
        lines.extend(key_value_rows(&links, 2));
    }

    Ok(lines.join("\n"))
}
