use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{ApiClient, ApiError};

#[derive(Debug, Clone, Deserialize)]
pub struct BlockedIpsPage {
    pub blocked_ips: Vec<BlockedIp>,
    #[serde(default)]
    pub total_records: u64,
    pub page: u32,
    pub total_pages: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlockedIp {
    pub id: i64,
    pub ip_address: String,
    pub reason: String,
    pub country: Option<String>,
    pub user_agent: Option<String>,
    pub blocked_until: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    /// Opaque JSON payload captured at block time; parsed lazily for the
    /// detail view and shown raw when it fails to parse.
    #[serde(default)]
    pub extra_info: String,
}

/// Lazily fetched per-record aggregate; never cached across records.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IpAnalysis {
    pub fingerprint_hash: Option<String>,
    #[serde(default)]
    pub details: FingerprintDetails,
    #[serde(default)]
    pub related_ips: Vec<RelatedIp>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FingerprintDetails {
    pub screen_res: Option<String>,
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelatedIp {
    pub ip: String,
    /// Some backends report `date`, some `created_at`.
    #[serde(alias = "created_at")]
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IpLookup {
    pub is_blocked: bool,
    #[serde(default)]
    pub cache_status: bool,
    /// Echoed in the backend's own order; this layer imposes no sort.
    #[serde(default)]
    pub history: Vec<BlockHistoryEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlockHistoryEntry {
    pub reason: String,
    pub blocked_until: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IpAction {
    Block,
    Unblock,
}

#[derive(Debug, Serialize)]
struct IpActionRequest<'a> {
    ip: &'a str,
    action: IpAction,
}

impl ApiClient {
    pub async fn blocked_ips(&self, page: u32) -> Result<BlockedIpsPage, ApiError> {
        self.get_json("/api/admin/blocked_ips", &[("page", page.to_string())])
            .await
    }

    pub async fn ip_analysis(&self, id: i64) -> Result<IpAnalysis, ApiError> {
        self.get_json(&format!("/api/admin/blocked_ips/{id}/analysis"), &[])
            .await
    }

    pub async fn lookup_ip(&self, ip: &str) -> Result<IpLookup, ApiError> {
        self.get_json("/api/admin/blocked_ips/lookup", &[("ip", ip.to_string())])
            .await
    }

    pub async fn manage_ip(&self, ip: &str, action: IpAction) -> Result<(), ApiError> {
        let operation = match action {
            IpAction::Block => "block ip",
            IpAction::Unblock => "unblock ip",
        };
        self.mutate(
            operation,
            Method::POST,
            "/api/admin/blocked_ips/action",
            Some(&IpActionRequest { ip, action }),
        )
        .await
    }

    pub async fn unblock_ip(&self, id: i64) -> Result<(), ApiError> {
        self.mutate::<()>(
            "unblock ip",
            Method::POST,
            &format!("/api/admin/blocked_ips/{id}/unblock"),
            None,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::{IpAction, IpAnalysis, IpLookup, RelatedIp};

    #[test]
    fn action_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&IpAction::Block).unwrap(), r#""block""#);
        assert_eq!(serde_json::to_string(&IpAction::Unblock).unwrap(), r#""unblock""#);
    }

    #[test]
    fn analysis_defaults_when_sparse() {
        let analysis: IpAnalysis = serde_json::from_str("{}").unwrap();
        assert!(analysis.fingerprint_hash.is_none());
        assert!(analysis.related_ips.is_empty());
        assert!(analysis.details.screen_res.is_none());
    }

    #[test]
    fn related_ip_accepts_created_at_alias() {
        let related: RelatedIp =
            serde_json::from_str(r#"{"ip":"10.0.0.9","created_at":"2025-02-01T00:00:00Z"}"#)
                .unwrap();
        assert_eq!(related.ip, "10.0.0.9");
        let related: RelatedIp =
            serde_json::from_str(r#"{"ip":"10.0.0.9","date":"2025-02-01T00:00:00Z"}"#).unwrap();
        assert_eq!(related.ip, "10.0.0.9");
    }

    #[test]
    fn lookup_history_preserves_backend_order() {
        let lookup: IpLookup = serde_json::from_str(
            r#"{
                "is_blocked": true,
                "history": [
                    {"reason":"scraping","blocked_until":"2025-03-01T00:00:00Z","created_at":"2025-02-01T00:00:00Z"},
                    {"reason":"abuse","blocked_until":"2025-01-01T00:00:00Z","created_at":"2024-12-01T00:00:00Z"}
                ]
            }"#,
        )
        .unwrap();
        let reasons: Vec<&str> = lookup.history.iter().map(|h| h.reason.as_str()).collect();
        assert_eq!(reasons, vec!["scraping", "abuse"]);
    }
}
