use crate::commands::common::open_read_view;
use crate::config::ClientConfig;
use crate::contracts::envelope::SuccessEnvelope;
use crate::contracts::types::{
    BillDetailsData, BillListData, BillListRow, BillListSummary, CompanyView, InvoiceView,
    UNKNOWN_VENDOR, VendorError,
};
use crate::error::ResolutionError;
use crate::format::format_currency;
use crate::model::Invoice;
use crate::resolve::resolve_counterparty;
use crate::store::{SqliteStore, Store};
use crate::{ClientError, ClientResult};

pub fn show(config: &ClientConfig, invoice_id: i64) -> ClientResult<SuccessEnvelope> {
    let view = open_read_view(config)?;
    let store = SqliteStore::new(&view.connection, &view.db_path);
    let data = bill_details(&store, invoice_id)?;
    SuccessEnvelope::for_command("bill show", &data)
}

pub fn list(config: &ClientConfig) -> ClientResult<SuccessEnvelope> {
    let view = open_read_view(config)?;
    let store = SqliteStore::new(&view.connection, &view.db_path);
    let data = bill_list(&store)?;
    SuccessEnvelope::for_command("bill list", &data)
}

pub fn bill_details<S>(store: &S, invoice_id: i64) -> ClientResult<BillDetailsData>
where
    S: Store + ?Sized,
{
    let invoice = store
        .select_invoice(invoice_id)?
        .ok_or_else(|| ClientError::invoice_not_found(invoice_id))?;

    let (vendor, vendor_error) = match vendor_for(store, &invoice)? {
        Ok(company) => (Some(company), None),
        Err(error) => (
            None,
            Some(VendorError {
                code: error.code().to_string(),
                message: error.to_string(),
            }),
        ),
    };
    let vendor_name = vendor_display_name(vendor.as_ref());

    Ok(BillDetailsData {
        invoice: InvoiceView::from_invoice(&invoice),
        vendor,
        vendor_name,
        vendor_error,
    })
}

pub fn bill_list<S>(store: &S) -> ClientResult<BillListData>
where
    S: Store + ?Sized,
{
    let invoices = store.select_invoices()?;

    let mut rows = Vec::with_capacity(invoices.len());
    let mut total = 0.0;
    for invoice in &invoices {
        total += invoice.invoice_amount;
        let vendor = vendor_for(store, invoice)?;
        rows.push(BillListRow {
            invoice: InvoiceView::from_invoice(invoice),
            vendor_name: vendor_display_name(vendor.as_ref().ok()),
            vendor_error_code: vendor.err().map(|error| error.code().to_string()),
        });
    }

    let unresolved_vendor_count = rows
        .iter()
        .filter(|row| row.vendor_error_code.is_some())
        .count();

    Ok(BillListData {
        summary: BillListSummary {
            bill_count: rows.len(),
            unresolved_vendor_count,
            total_amount: format_currency(total),
        },
        rows,
    })
}

/// Splits store failures (which abort the command) from broken lookup chains
/// (which only cost the bill its vendor name).
fn vendor_for<S>(
    store: &S,
    invoice: &Invoice,
) -> ClientResult<Result<CompanyView, ResolutionError>>
where
    S: Store + ?Sized,
{
    match resolve_counterparty(store, invoice) {
        Ok(company) => Ok(Ok(company)),
        Err(ResolutionError::Store(error)) => Err(error),
        Err(error) => {
            tracing::info!(
                invoice_id = invoice.id,
                code = error.code(),
                "vendor could not be resolved: {error}"
            );
            Ok(Err(error))
        }
    }
}

fn vendor_display_name(vendor: Option<&CompanyView>) -> String {
    vendor
        .map(CompanyView::display_name)
        .unwrap_or(UNKNOWN_VENDOR)
        .to_string()
}
