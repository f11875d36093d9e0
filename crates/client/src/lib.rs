pub mod analytics;
pub mod auth;
pub mod blocked_ips;
pub mod comments;
mod error;
pub mod invoicing;
pub mod search;
pub mod users;

pub use error::ApiError;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Typed client over the blog backend's REST contract. All list endpoints
/// return `{items…, page, total_pages}` envelopes; all mutation endpoints
/// return either a bare success status or `{success, error}`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        ApiClient { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .http
            .get(self.url(path))
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|err| ApiError::InvalidResponse(format!("{path}: {err}")))
    }

    /// Issues a mutation and resolves the backend's acknowledgement. A
    /// non-OK status or an explicit `{success: false}` body is surfaced as a
    /// backend failure naming the operation.
    pub(crate) async fn mutate<B>(
        &self,
        operation: &'static str,
        method: reqwest::Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.http.request(method, self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Backend {
                operation,
                message: backend_message(&text, status),
            });
        }
        if let Ok(ack) = serde_json::from_str::<MutationAck>(&text) {
            if ack.success == Some(false) {
                return Err(ApiError::Backend {
                    operation,
                    message: ack.error.unwrap_or_else(|| "unknown error".to_string()),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, serde::Deserialize)]
struct MutationAck {
    success: Option<bool>,
    error: Option<String>,
}

fn backend_message(body: &str, status: reqwest::StatusCode) -> String {
    if let Ok(ack) = serde_json::from_str::<MutationAck>(body) {
        if let Some(error) = ack.error {
            return error;
        }
    }
    format!("status {status}")
}
