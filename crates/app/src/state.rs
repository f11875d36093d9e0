use thiserror::Error;

use masthead_client::ApiClient;

use crate::config::AppConfig;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub client: ApiClient,
}

pub fn build_state(config: AppConfig) -> Result<AppState, StateError> {
    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()?;
    let client = ApiClient::new(http, config.base_url.clone());
    Ok(AppState { config, client })
}
