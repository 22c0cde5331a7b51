use rusqlite::Connection;
use rusqlite_migration::{M, Migrations};

const BOOTSTRAP_SQL: &str = include_str!("migrations/0001_bootstrap.sql");

pub const EXPECTED_USER_VERSION: i64 = 1;

pub const REQUIRED_TABLES: [(&str, &[&str]); 6] = [
    ("internal_meta", &["key", "value"]),
    (
        "companies",
        &[
            "id",
            "company_name",
            "company_side_bar_name",
            "address",
            "city",
            "state",
            "zip",
            "contact",
            "company_email",
            "company_phone",
            "company_fax",
            "company_notes",
            "company_status",
        ],
    ),
    ("business_relationships", &["id", "related_business_id"]),
    ("accounts", &["id", "relationship_id"]),
    (
        "invoices",
        &[
            "id",
            "invoice_number",
            "invoice_datetime",
            "invoice_description",
            "invoice_amount",
            "invoice_category",
            "invoice_type",
            "debit_account_id",
            "credit_account_id",
        ],
    ),
    (
        "attachments",
        &["id", "company_id", "attachment_name", "file_guid"],
    ),
];

pub fn run_pending(conn: &mut Connection) -> rusqlite_migration::Result<()> {
    let migrations = Migrations::new(vec![M::up(BOOTSTRAP_SQL)]);
    migrations.to_latest(conn)
}
