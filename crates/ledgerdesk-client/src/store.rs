use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::format::parse_invoice_datetime;
use crate::model::{Account, Attachment, BusinessRelationship, Company, Invoice};
use crate::state::map_sqlite_error;
use crate::{ClientError, ClientResult};

/// Read-only access to the bookkeeping rows.
///
/// Single-row lookups return `Ok(None)` when the id matches nothing; `Err` is
/// reserved for the store itself failing.
pub trait Store {
    fn select_invoice(&self, id: i64) -> ClientResult<Option<Invoice>>;

    fn select_invoices(&self) -> ClientResult<Vec<Invoice>>;

    fn select_account(&self, id: i64) -> ClientResult<Option<Account>>;

    fn select_business_relationship(&self, id: i64) -> ClientResult<Option<BusinessRelationship>>;

    fn select_company(&self, id: i64) -> ClientResult<Option<Company>>;

    /// Attachments for one company, in the store's native order.
    fn select_attachments(&self, company_id: i64) -> ClientResult<Vec<Attachment>>;
}

const INVOICE_COLUMNS: &str = "id, invoice_number, invoice_datetime, invoice_description, \
     invoice_amount, invoice_category, invoice_type, debit_account_id, credit_account_id";

const COMPANY_COLUMNS: &str = "id, company_name, company_side_bar_name, address, city, state, \
     zip, contact, company_email, company_phone, company_fax, company_notes, company_status";

pub struct SqliteStore<'conn> {
    connection: &'conn Connection,
    db_path: PathBuf,
}

impl<'conn> SqliteStore<'conn> {
    pub fn new(connection: &'conn Connection, db_path: &Path) -> Self {
        Self {
            connection,
            db_path: db_path.to_path_buf(),
        }
    }

    fn sqlite_error(&self, error: &rusqlite::Error) -> ClientError {
        map_sqlite_error(&self.db_path, error)
    }
}

/// Invoice row as stored, before the datetime text is parsed.
struct RawInvoice {
    id: i64,
    invoice_number: String,
    invoice_datetime: String,
    invoice_description: String,
    invoice_amount: f64,
    invoice_category: String,
    invoice_type: String,
    debit_account_id: i64,
    credit_account_id: i64,
}

impl RawInvoice {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            invoice_number: row.get(1)?,
            invoice_datetime: row.get(2)?,
            invoice_description: row.get(3)?,
            invoice_amount: row.get(4)?,
            invoice_category: row.get(5)?,
            invoice_type: row.get(6)?,
            debit_account_id: row.get(7)?,
            credit_account_id: row.get(8)?,
        })
    }

    fn into_invoice(self) -> ClientResult<Invoice> {
        let invoice_datetime = parse_invoice_datetime(&self.invoice_datetime).ok_or_else(|| {
            ClientError::invalid_invoice_record(
                self.id,
                &format!("invoice_datetime `{}`", self.invoice_datetime),
            )
        })?;

        Ok(Invoice {
            id: self.id,
            invoice_number: self.invoice_number,
            invoice_datetime,
            invoice_description: self.invoice_description,
            invoice_amount: self.invoice_amount,
            invoice_category: self.invoice_category,
            invoice_type: self.invoice_type,
            debit_account_id: self.debit_account_id,
            credit_account_id: self.credit_account_id,
        })
    }
}

fn company_from_row(row: &Row<'_>) -> rusqlite::Result<Company> {
    Ok(Company {
        id: row.get(0)?,
        company_name: row.get(1)?,
        company_side_bar_name: row.get(2)?,
        address: row.get(3)?,
        city: row.get(4)?,
        state: row.get(5)?,
        zip: row.get(6)?,
        contact: row.get(7)?,
        company_email: row.get(8)?,
        company_phone: row.get(9)?,
        company_fax: row.get(10)?,
        company_notes: row.get(11)?,
        company_status: row.get(12)?,
    })
}

impl Store for SqliteStore<'_> {
    fn select_invoice(&self, id: i64) -> ClientResult<Option<Invoice>> {
        tracing::debug!(invoice_id = id, "select invoice");
        let raw = self
            .connection
            .query_row(
                &format!("SELECT {INVOICE_COLUMNS} FROM invoices WHERE id = ?1"),
                params![id],
                RawInvoice::from_row,
            )
            .optional()
            .map_err(|error| self.sqlite_error(&error))?;

        raw.map(RawInvoice::into_invoice).transpose()
    }

    fn select_invoices(&self) -> ClientResult<Vec<Invoice>> {
        tracing::debug!("select invoices");
        let mut statement = self
            .connection
            .prepare(&format!("SELECT {INVOICE_COLUMNS} FROM invoices ORDER BY id"))
            .map_err(|error| self.sqlite_error(&error))?;

        let rows_iter = statement
            .query_map([], RawInvoice::from_row)
            .map_err(|error| self.sqlite_error(&error))?;

        let mut invoices = Vec::new();
        for row in rows_iter {
            let raw = row.map_err(|error| self.sqlite_error(&error))?;
            invoices.push(raw.into_invoice()?);
        }

        Ok(invoices)
    }

    fn select_account(&self, id: i64) -> ClientResult<Option<Account>> {
        tracing::debug!(account_id = id, "select account");
        self.connection
            .query_row(
                "SELECT id, relationship_id FROM accounts WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Account {
                        id: row.get(0)?,
                        relationship_id: row.get(1)?,
                    })
                },
            )
            .optional()
            .map_err(|error| self.sqlite_error(&error))
    }

    fn select_business_relationship(&self, id: i64) -> ClientResult<Option<BusinessRelationship>> {
        tracing::debug!(relationship_id = id, "select business relationship");
        self.connection
            .query_row(
                "SELECT id, related_business_id FROM business_relationships WHERE id = ?1",
                params![id],
                |row| {
                    Ok(BusinessRelationship {
                        id: row.get(0)?,
                        related_business_id: row.get(1)?,
                    })
                },
            )
            .optional()
            .map_err(|error| self.sqlite_error(&error))
    }

    fn select_company(&self, id: i64) -> ClientResult<Option<Company>> {
        tracing::debug!(company_id = id, "select company");
        self.connection
            .query_row(
                &format!("SELECT {COMPANY_COLUMNS} FROM companies WHERE id = ?1"),
                params![id],
                company_from_row,
            )
            .optional()
            .map_err(|error| self.sqlite_error(&error))
    }

    fn select_attachments(&self, company_id: i64) -> ClientResult<Vec<Attachment>> {
        tracing::debug!(company_id, "select attachments");
        let mut statement = self
            .connection
            .prepare(
                "SELECT attachment_name, file_guid FROM attachments \
                 WHERE company_id = ?1 ORDER BY id",
            )
            .map_err(|error| self.sqlite_error(&error))?;

        let rows_iter = statement
            .query_map(params![company_id], |row| {
                Ok(Attachment {
                    attachment_name: row.get(0)?,
                    file_guid: row.get(1)?,
                })
            })
            .map_err(|error| self.sqlite_error(&error))?;

        let mut attachments = Vec::new();
        for row in rows_iter {
            attachments.push(row.map_err(|error| self.sqlite_error(&error))?);
        }

        Ok(attachments)
    }
}
