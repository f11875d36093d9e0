use masthead_client::invoicing::{InvoiceRow, InvoicingSummary};
use masthead_client::{ApiClient, ApiError};
use masthead_core::domain::pagination::PaginationControls;

use crate::session::{Session, ViewKey};

#[derive(Debug, Clone)]
pub struct InvoicingModel {
    pub summary: InvoicingSummary,
    pub invoices: Vec<InvoiceRow>,
    pub pagination: Option<PaginationControls>,
}

pub async fn load(
    client: &ApiClient,
    session: &mut Session,
    page: u32,
) -> Result<InvoicingModel, ApiError> {
    let token = session.begin_load(ViewKey::Invoicing);
    let response = client.invoicing(page).await?;
    session.apply_page(token, response.page, response.total_pages);
    Ok(InvoicingModel {
        summary: response.summary,
        invoices: response.invoices,
        pagination: PaginationControls::from_state(session.page_state(ViewKey::Invoicing)),
    })
}
