use chrono::{NaiveDate, NaiveDateTime};

use crate::model::Invoice;

pub const OPEN_STATUS: &str = "Open";

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Two decimals with `,` thousands separators and no currency symbol.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let fixed = format!("{:.2}", round_half_away_from_zero(amount.abs()));
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    // Rounding can leave nothing but zeros; never print "-0.00".
    let negative = amount < 0.0 && fixed.bytes().any(|byte| byte.is_ascii_digit() && byte != b'0');

    let mut output = String::with_capacity(fixed.len() + whole.len() / 3 + 1);
    if negative {
        output.push('-');
    }
    output.push_str(&group_thousands(whole));
    output.push('.');
    output.push_str(fraction);
    output
}

/// Rounds to whole cents with halves going up. The epsilon absorbs binary
/// representation error, so stored values like 2.675 round as written.
fn round_half_away_from_zero(amount: f64) -> f64 {
    (amount * 100.0 + 1e-9).round() / 100.0
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

pub fn format_date(timestamp: NaiveDateTime) -> String {
    timestamp.format("%m/%d/%y").to_string()
}

/// Always [`OPEN_STATUS`]. Paid and overdue states are not derived yet.
pub fn status_text(_invoice: &Invoice) -> &'static str {
    OPEN_STATUS
}

/// Parses the datetime text the bookkeeping application stores. A bare date
/// is read as midnight.
pub fn parse_invoice_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{format_currency, format_date, parse_invoice_datetime, status_text};
    use crate::model::Invoice;

    #[test]
    fn currency_uses_two_decimals_and_thousands_separators() {
        assert_eq!(format_currency(1234.5), "1,234.50");
        assert_eq!(format_currency(0.0), "0.00");
        assert_eq!(format_currency(999.999), "1,000.00");
        assert_eq!(format_currency(1_234_567.891), "1,234,567.89");
        assert_eq!(format_currency(100.0), "100.00");
    }

    #[test]
    fn currency_rounds_half_cents_away_from_zero() {
        assert_eq!(format_currency(0.125), "0.13");
        assert_eq!(format_currency(2.675), "2.68");
        assert_eq!(format_currency(1.005), "1.01");
        assert_eq!(format_currency(1_000.045), "1,000.05");
        assert_eq!(format_currency(-2.675), "-2.68");
        assert_eq!(format_currency(2.674), "2.67");
    }

    #[test]
    fn currency_keeps_sign_only_when_nonzero() {
        assert_eq!(format_currency(-1234.5), "-1,234.50");
        assert_eq!(format_currency(-0.001), "0.00");
    }

    #[test]
    fn date_renders_two_digit_month_day_year() {
        let parsed = parse_invoice_datetime("2023-03-05T00:00:00");
        assert!(parsed.is_some());
        if let Some(timestamp) = parsed {
            assert_eq!(format_date(timestamp), "03/05/23");
        }
    }

    #[test]
    fn datetime_parsing_accepts_stored_variants() {
        for raw in [
            "2023-03-05 00:00:00",
            "2023-03-05T00:00:00",
            "2023-03-05 00:00",
            "2023-03-05",
            " 2023-03-05 ",
        ] {
            let parsed = parse_invoice_datetime(raw).map(|value| value.date());
            assert_eq!(parsed, NaiveDate::from_ymd_opt(2023, 3, 5), "input {raw:?}");
        }
        assert!(parse_invoice_datetime("03/05/2023").is_none());
    }

    #[test]
    fn status_is_open_for_every_invoice() {
        let invoice = Invoice {
            id: 1,
            invoice_number: "INV-1".to_string(),
            invoice_datetime: NaiveDate::from_ymd_opt(2020, 1, 1)
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .unwrap_or_default(),
            invoice_description: String::new(),
            invoice_amount: 0.0,
            invoice_category: String::new(),
            invoice_type: "Deposit Payable".to_string(),
            debit_account_id: 1,
            credit_account_id: 2,
        };
        assert_eq!(status_text(&invoice), "Open");
    }
}
