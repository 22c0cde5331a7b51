use std::io;

use serde_json::Value;

use super::table::{Align, Column, key_value_rows, render_table};

pub fn render_bill_details(data: &Value) -> io::Result<String> {
    let invoice = data
        .get("invoice")
        .filter(|value| value.is_object())
        .ok_or_else(|| io::Error::other("bill output requires invoice"))?;

    let mut lines = vec![
        format!("Invoice {}", value_str(invoice, "invoice_number")),
        String::new(),
        "Bill Summary:".to_string(),
    ];
    lines.extend(key_value_rows(
        &[
            ("Invoice Number", value_str(invoice, "invoice_number").to_string()),
            ("Date", value_str(invoice, "date").to_string()),
            ("Vendor", value_str(data, "vendor_name").to_string()),
            ("Description", value_str(invoice, "description").to_string()),
            ("Bill Type", value_str(invoice, "invoice_type").to_string()),
            ("Bill Amount", format!("${}", value_str(invoice, "amount"))),
            ("Category", value_str(invoice, "category").to_string()),
            ("Status", value_str(invoice, "status").to_string()),
        ],
        2,
    ));

    if let Some(vendor_error) = data.get("vendor_error").filter(|value| value.is_object()) {
        lines.push(String::new());
        lines.push("Vendor lookup failed:".to_string());
        lines.push(format!(
            "  {}: {}",
            value_str(vendor_error, "code"),
            value_str(vendor_error, "message")
        ));
    }

    Ok(lines.join("\n"))
}

pub fn render_bill_list(data: &Value) -> io::Result<String> {
    let summary = data
        .get("summary")
        .filter(|value| value.is_object())
        .ok_or_else(|| io::Error::other("bill list output requires summary"))?;
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("bill list output requires rows"))?;

    if rows.is_empty() {
        return Ok("No bills found.".to_string());
    }

    let bill_count = summary.get("bill_count").and_then(Value::as_u64).unwrap_or(0);
    let unresolved = summary
        .get("unresolved_vendor_count")
        .and_then(Value::as_u64)
        .unwrap_or(0);

    let mut lines = vec![format!("Bills: {bill_count}")];
    if unresolved > 0 {
        lines.push(format!("Without a resolved vendor: {unresolved}"));
    }
    lines.push(format!("Total: ${}", value_str(summary, "total_amount")));
    lines.push(String::new());

    let columns = [
        Column {
            name: "Invoice",
            align: Align::Left,
        },
        Column {
            name: "Date",
            align: Align::Left,
        },
        Column {
            name: "Vendor",
            align: Align::Left,
        },
        Column {
            name: "Type",
            align: Align::Left,
        },
        Column {
            name: "Amount",
            align: Align::Right,
        },
        Column {
            name: "Status",
            align: Align::Left,
        },
    ];
    let table_rows = rows
        .iter()
        .map(|row| {
            let invoice = row.get("invoice").unwrap_or(&Value::Null);
            vec![
                value_str(invoice, "invoice_number").to_string(),
                value_str(invoice, "date").to_string(),
                value_str(row, "vendor_name").to_string(),
                value_str(invoice, "invoice_type").to_string(),
                value_str(invoice, "amount").to_string(),
                value_str(invoice, "status").to_string(),
            ]
        })
        .collect::<Vec<_>>();
    lines.extend(render_table(&columns, &table_rows));

    Ok(lines.join("\n"))
}

pub(super) fn value_str<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{render_bill_details, render_bill_list};

    fn invoice_json() -> serde_json::Value {
        json!({
            "id": 1,
            "invoice_number": "INV-1",
            "date": "03/05/23",
            "invoice_type": "Expense Incurred",
            "amount": "1,234.50",
            "amount_value": 1234.5,
            "category": "Insurance",
            "description": "Quarterly premium",
            "status": "Open"
        })
    }

    #[test]
    fn bill_details_render_summary_fields() {
        let rendered = render_bill_details(&json!({
            "invoice": invoice_json(),
            "vendor": { "company_name": "Acme Insurance Agency" },
            "vendor_name": "Acme",
            "vendor_error": null
        }));
        assert!(rendered.is_ok());
        if let Ok(body) = rendered {
            assert!(body.starts_with("Invoice INV-1\n"));
            assert!(body.contains("  Vendor          Acme"));
            assert!(body.contains("  Bill Amount     $1,234.50"));
            assert!(body.contains("  Status          Open"));
            assert!(!body.contains("Vendor lookup failed"));
        }
    }

    #[test]
    fn bill_details_explain_unknown_vendor() {
        let rendered = render_bill_details(&json!({
            "invoice": invoice_json(),
            "vendor": null,
            "vendor_name": "Unknown Vendor",
            "vendor_error": {
                "code": "account_not_found",
                "message": "Account id `7` was not found."
            }
        }));
        assert!(rendered.is_ok());
        if let Ok(body) = rendered {
            assert!(body.contains("  Vendor          Unknown Vendor"));
            assert!(body.contains("  account_not_found: Account id `7` was not found."));
        }
    }

    #[test]
    fn bill_details_require_invoice() {
        assert!(render_bill_details(&json!({ "vendor_name": "Acme" })).is_err());
    }

    #[test]
    fn empty_bill_list_says_so() {
        let rendered = render_bill_list(&json!({
            "summary": { "bill_count": 0, "unresolved_vendor_count": 0, "total_amount": "0.00" },
            "rows": []
        }));
        assert!(matches!(rendered, Ok(ref body) if body == "No bills found."));
    }

    #[test]
    fn bill_list_renders_table_rows() {
        let rendered = render_bill_list(&json!({
            "summary": { "bill_count": 1, "unresolved_vendor_count": 1, "total_amount": "1,234.50" },
            "rows": [{
                "invoice": invoice_json(),
                "vendor_name": "Unknown Vendor",
                "vendor_error_code": "account_not_found"
            }]
        }));
        assert!(rendered.is_ok());
        if let Ok(body) = rendered {
            assert!(body.starts_with("Bills: 1\nWithout a resolved vendor: 1\nTotal: $1,234.50"));
            assert!(body.contains("Invoice"));
            assert!(body.contains("INV-1"));
            assert!(body.contains("Unknown Vendor"));
        }
    }
}
