use crate::attachments::list_attachments;
use crate::commands::common::open_read_view;
use crate::config::ClientConfig;
use crate::contracts::envelope::SuccessEnvelope;
use crate::contracts::types::{CompanyDetailsData, CompanyView};
use crate::store::{SqliteStore, Store};
use crate::{ClientError, ClientResult};

pub fn show(config: &ClientConfig, company_id: i64) -> ClientResult<SuccessEnvelope> {
    let view = open_read_view(config)?;
    let store = SqliteStore::new(&view.connection, &view.db_path);
    let data = company_details(&store, company_id, config)?;
    SuccessEnvelope::for_command("company show", &data)
}

pub fn company_details<S>(
    store: &S,
    company_id: i64,
    config: &ClientConfig,
) -> ClientResult<CompanyDetailsData>
where
    S: Store + ?Sized,
{
    let company = store
        .select_company(company_id)?
        .ok_or_else(|| ClientError::company_not_found(company_id))?;
    let attachments = list_attachments(store, company_id, config)?;

    Ok(CompanyDetailsData {
        company: CompanyView::from(company),
        attachments,
    })
}
