use crate::ClientResult;
use crate::config::ClientConfig;
use crate::contracts::types::AttachmentView;
use crate::store::Store;

/// Lists a company's attachments in store order, fetched fresh on every call.
pub fn list_attachments<S>(
    store: &S,
    company_id: i64,
    config: &ClientConfig,
) -> ClientResult<Vec<AttachmentView>>
where
    S: Store + ?Sized,
{
    let attachments = store
        .select_attachments(company_id)?
        .into_iter()
        .map(|attachment| AttachmentView {
            download_url: config.download_url(&attachment.file_guid),
            attachment_name: attachment.attachment_name,
            file_guid: attachment.file_guid,
        })
        .collect::<Vec<_>>();

    tracing::debug!(company_id, count = attachments.len(), "listed attachments");
    Ok(attachments)
}
