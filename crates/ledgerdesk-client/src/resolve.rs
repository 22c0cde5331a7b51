//! Resolves the customer or vendor on the other side of an invoice.
//!
//! The chain is invoice → account → business relationship → company. Each
//! missing link stops the resolution with its own [`ResolutionError`] variant
//! so callers can tell a broken account reference from a missing company.

use crate::contracts::types::CompanyView;
use crate::error::ResolutionError;
use crate::model::Invoice;
use crate::store::Store;

pub fn resolve_counterparty<S>(store: &S, invoice: &Invoice) -> Result<CompanyView, ResolutionError>
where
    S: Store + ?Sized,
{
    let account_id = invoice.counterparty_account_id()?;

    let account = store
        .select_account(account_id)?
        .ok_or(ResolutionError::AccountNotFound { account_id })?;

    let relationship = store
        .select_business_relationship(account.relationship_id)?
        .ok_or(ResolutionError::RelationshipNotFound {
            relationship_id: account.relationship_id,
        })?;

    let company = store
        .select_company(relationship.related_business_id)?
        .ok_or(ResolutionError::CompanyNotFound {
            company_id: relationship.related_business_id,
        })?;

    tracing::debug!(
        invoice_id = invoice.id,
        account_id,
        company_id = company.id,
        "resolved counterparty"
    );
    Ok(CompanyView::from(company))
}
