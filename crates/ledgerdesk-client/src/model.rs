use chrono::NaiveDateTime;

use crate::error::ResolutionError;

#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: i64,
    pub invoice_number: String,
    pub invoice_datetime: NaiveDateTime,
    pub invoice_description: String,
    pub invoice_amount: f64,
    pub invoice_category: String,
    /// Stored as free text by the bookkeeping application; see [`InvoiceType::parse`].
    pub invoice_type: String,
    pub debit_account_id: i64,
    pub credit_account_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceType {
    RevenueGenerated,
    ExpenseIncurred,
    DepositReceivable,
    DepositPayable,
}

/// Which account column of an invoice names the customer or vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterpartySide {
    Debit,
    Credit,
}

impl InvoiceType {
    pub const ALL: [Self; 4] = [
        Self::RevenueGenerated,
        Self::ExpenseIncurred,
        Self::DepositReceivable,
        Self::DepositPayable,
    ];

    pub fn parse(value: &str) -> Result<Self, ResolutionError> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == value)
            .ok_or_else(|| ResolutionError::UnknownInvoiceType {
                invoice_type: value.to_string(),
            })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RevenueGenerated => "Revenue Generated",
            Self::ExpenseIncurred => "Expense Incurred",
            Self::DepositReceivable => "Deposit Receivable",
            Self::DepositPayable => "Deposit Payable",
        }
    }

    pub const fn counterparty_side(self) -> CounterpartySide {
        match self {
            Self::RevenueGenerated | Self::DepositReceivable => CounterpartySide::Debit,
            Self::ExpenseIncurred | Self::DepositPayable => CounterpartySide::Credit,
        }
    }
}

impl Invoice {
    pub fn counterparty_account_id(&self) -> Result<i64, ResolutionError> {
        let account_id = match InvoiceType::parse(&self.invoice_type)?.counterparty_side() {
            CounterpartySide::Debit => self.debit_account_id,
            CounterpartySide::Credit => self.credit_account_id,
        };
        Ok(account_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub relationship_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessRelationship {
    pub id: i64,
    pub related_business_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub id: i64,
    pub company_name: String,
    pub company_side_bar_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub contact: String,
    pub company_email: String,
    pub company_phone: String,
    pub company_fax: String,
    pub company_notes: String,
    pub company_status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub attachment_name: String,
    pub file_guid: String,
}
