use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `ledgerdesk {cmd} --help` for usage."),
            None => "Run `ledgerdesk --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invoice_not_found(invoice_id: i64) -> Self {
        Self::new(
            "invoice_not_found",
            &format!("Invoice id `{invoice_id}` was not found."),
            vec!["Run `ledgerdesk bill list` to find a valid invoice id.".to_string()],
        )
        .with_data(json!({
            "invoice_id": invoice_id,
        }))
    }

    pub fn company_not_found(company_id: i64) -> Self {
        Self::new(
            "company_not_found",
            &format!("Company id `{company_id}` was not found."),
            vec![
                "Check the company id against your bookkeeping records.".to_string(),
                "Run `ledgerdesk bill show <invoice-id>` to see which company a bill points at."
                    .to_string(),
            ],
        )
        .with_data(json!({
            "company_id": company_id,
        }))
    }

    pub fn invalid_invoice_record(invoice_id: i64, detail: &str) -> Self {
        Self::new(
            "invalid_invoice_record",
            &format!("Invoice id `{invoice_id}` has an unreadable field: {detail}"),
            vec!["Repair the invoice row in the bookkeeping database.".to_string()],
        )
        .with_data(json!({
            "invoice_id": invoice_id,
        }))
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }

    pub fn ledger_init_permission_denied(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "ledger_init_permission_denied",
            &format!("Cannot initialize ledger at `{location}`: {detail}"),
            vec![format!(
                "Grant write access to `{location}` or set `LEDGERDESK_HOME` to a writable directory."
            )],
        )
    }

    pub fn ledger_locked(path: &Path) -> Self {
        let location = path.display().to_string();
        Self::new(
            "ledger_locked",
            &format!("Ledger database is locked at `{location}`."),
            vec![format!(
                "Close other processes using `{location}` so the lock is released."
            )],
        )
    }

    pub fn ledger_corrupt(path: &Path) -> Self {
        let location = path.display().to_string();
        Self::new(
            "ledger_corrupt",
            &format!("Ledger database appears corrupt at `{location}`."),
            vec![format!(
                "Replace `{location}` with a valid SQLite ledger file or restore from backup."
            )],
        )
    }

    pub fn ledger_not_initialized(path: &Path) -> Self {
        let location = path.display().to_string();
        Self::new(
            "ledger_not_initialized",
            &format!("No ledger database exists at `{location}`."),
            vec![
                "Run `ledgerdesk init` to create an empty ledger.".to_string(),
                "Or pass `--home` (or set `LEDGERDESK_HOME`) to the directory holding `ledger.db`."
                    .to_string(),
            ],
        )
    }

    pub fn migration_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "migration_failed",
            &format!("Ledger migration failed at `{location}`: {detail}"),
            vec!["Resolve conflicting schema objects referenced in the error details.".to_string()],
        )
    }

    pub fn ledger_init_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "ledger_init_failed",
            &format!("Ledger initialization failed at `{location}`: {detail}"),
            Vec::new(),
        )
    }
}

/// Failures of the invoice → account → relationship → company chain.
///
/// Every variant is terminal for one resolution. Callers decide how to
/// present them; the resolver never substitutes a default company.
#[derive(Debug, Clone, Error)]
pub enum ResolutionError {
    #[error("Invoice type `{invoice_type}` is not a known invoice type.")]
    UnknownInvoiceType { invoice_type: String },

    #[error("Account id `{account_id}` was not found.")]
    AccountNotFound { account_id: i64 },

    #[error("Business relationship id `{relationship_id}` was not found.")]
    RelationshipNotFound { relationship_id: i64 },

    #[error("Company id `{company_id}` was not found.")]
    CompanyNotFound { company_id: i64 },

    #[error(transparent)]
    Store(#[from] ClientError),
}

impl ResolutionError {
    pub fn code(&self) -> &str {
        match self {
            Self::UnknownInvoiceType { .. } => "unknown_invoice_type",
            Self::AccountNotFound { .. } => "account_not_found",
            Self::RelationshipNotFound { .. } => "relationship_not_found",
            Self::CompanyNotFound { .. } => "company_not_found",
            Self::Store(error) => &error.code,
        }
    }
}

impl From<ResolutionError> for ClientError {
    fn from(error: ResolutionError) -> Self {
        let (recovery_step, data) = match &error {
            ResolutionError::Store(inner) => return inner.clone(),
            ResolutionError::UnknownInvoiceType { invoice_type } => (
                "Use one of: Revenue Generated, Expense Incurred, Deposit Receivable, Deposit Payable.",
                json!({ "invoice_type": invoice_type }),
            ),
            ResolutionError::AccountNotFound { account_id } => (
                "Point the invoice at an existing ledger account.",
                json!({ "account_id": account_id }),
            ),
            ResolutionError::RelationshipNotFound { relationship_id } => (
                "Link the account to an existing business relationship.",
                json!({ "relationship_id": relationship_id }),
            ),
            ResolutionError::CompanyNotFound { company_id } => (
                "Link the business relationship to an existing company.",
                json!({ "company_id": company_id }),
            ),
        };

        ClientError::new(
            error.code(),
            &error.to_string(),
            vec![recovery_step.to_string()],
        )
        .with_data(data)
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
