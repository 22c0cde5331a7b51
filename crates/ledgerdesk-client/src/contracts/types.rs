use serde::Serialize;

use crate::format::{format_currency, format_date, status_text};
use crate::model::{Company, Invoice};

pub const UNKNOWN_VENDOR: &str = "Unknown Vendor";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceView {
    pub id: i64,
    pub invoice_number: String,
    pub date: String,
    pub invoice_type: String,
    pub amount: String,
    pub amount_value: f64,
    pub category: String,
    pub description: String,
    pub status: String,
}

impl InvoiceView {
    pub fn from_invoice(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id,
            invoice_number: invoice.invoice_number.clone(),
            date: format_date(invoice.invoice_datetime),
            invoice_type: invoice.invoice_type.clone(),
            amount: format_currency(invoice.invoice_amount),
            amount_value: invoice.invoice_amount,
            category: invoice.invoice_category.clone(),
            description: invoice.invoice_description.clone(),
            status: status_text(invoice).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyView {
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

impl CompanyView {
    /// Short sidebar name, or the full name when no short name is recorded.
    pub fn display_name(&self) -> &str {
        if self.company_side_bar_name.trim().is_empty() {
            &self.company_name
        } else {
            &self.company_side_bar_name
        }
    }
}

impl From<Company> for CompanyView {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            company_name: company.company_name,
            company_side_bar_name: company.company_side_bar_name,
            address: company.address,
            city: company.city,
            state: company.state,
            zip: company.zip,
            contact: company.contact,
            company_email: company.company_email,
            company_phone: company.company_phone,
            company_fax: company.company_fax,
            company_notes: company.company_notes,
            company_status: company.company_status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachmentView {
    pub attachment_name: String,
    pub file_guid: String,
    pub download_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorError {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BillDetailsData {
    pub invoice: InvoiceView,
    pub vendor: Option<CompanyView>,
    pub vendor_name: String,
    pub vendor_error: Option<VendorError>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BillListRow {
    pub invoice: InvoiceView,
    pub vendor_name: String,
    pub vendor_error_code: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BillListSummary {
    pub bill_count: usize,
    pub unresolved_vendor_count: usize,
    /// Gross sum of every listed amount as stored. Revenue and expense bills
    /// are added alike, so this is a volume figure, not a balance.
    pub total_amount: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BillListData {
    pub summary: BillListSummary,
    pub rows: Vec<BillListRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyDetailsData {
    pub company: CompanyView,
    pub attachments: Vec<AttachmentView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InitData {
    pub db_path: String,
    pub schema_version: String,
}
