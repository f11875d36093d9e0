use masthead_client::blocked_ips::{BlockedIp, IpAnalysis, IpLookup};
use masthead_client::{ApiClient, ApiError};
use masthead_core::domain::pagination::PaginationControls;

use crate::session::{Session, ViewKey};

#[derive(Debug, Clone)]
pub struct BlockedIpsModel {
    pub blocked_ips: Vec<BlockedIp>,
    pub total_records: u64,
    pub pagination: Option<PaginationControls>,
}

/// Lookup result for an arbitrary address, independent of the paged list.
#[derive(Debug, Clone)]
pub struct IpLookupModel {
    pub ip: String,
    pub lookup: IpLookup,
}

pub async fn load(
    client: &ApiClient,
    session: &mut Session,
    page: u32,
) -> Result<BlockedIpsModel, ApiError> {
    let token = session.begin_load(ViewKey::BlockedIps);
    let response = client.blocked_ips(page).await?;
    session.apply_page(token, response.page, response.total_pages);
    Ok(BlockedIpsModel {
        blocked_ips: response.blocked_ips,
        total_records: response.total_records,
        pagination: PaginationControls::from_state(session.page_state(ViewKey::BlockedIps)),
    })
}

pub async fn lookup(client: &ApiClient, ip: &str) -> Result<IpLookupModel, ApiError> {
    let lookup = client.lookup_ip(ip).await?;
    Ok(IpLookupModel {
        ip: ip.to_string(),
        lookup,
    })
}

/// Fetched on expansion of one record's detail row, never ahead of time.
pub async fn analysis(client: &ApiClient, id: i64) -> Result<IpAnalysis, ApiError> {
    client.ip_analysis(id).await
}
