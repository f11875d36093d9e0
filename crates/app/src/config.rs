use std::path::Path;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    pub dashboard_poll_interval: Duration,
    pub asset_prefix: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid integer for {0}: {1}")]
    InvalidNumber(&'static str, String),
    #[error("invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = read_string("MASTHEAD_BASE_URL", "http://127.0.0.1:8000");
        if base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue("MASTHEAD_BASE_URL", base_url));
        }
        let request_timeout_secs = read_u64("MASTHEAD_REQUEST_TIMEOUT_SECS", 15)?;
        let dashboard_poll_secs = read_u64("MASTHEAD_DASHBOARD_POLL_SECS", 30)?;
        let asset_prefix = read_string("MASTHEAD_ASSET_PREFIX", "/assets/");

        Ok(Self {
            base_url,
            request_timeout: Duration::from_secs(request_timeout_secs),
            dashboard_poll_interval: Duration::from_secs(dashboard_poll_secs),
            asset_prefix,
        })
    }
}

pub fn load_dotenv() -> Result<(), std::io::Error> {
    let path = Path::new(".env");
    if !path.exists() {
        return Ok(());
    }
    let contents = std::fs::read_to_string(path)?;
    for (key, value) in contents.lines().filter_map(parse_dotenv_line) {
        if std::env::var_os(&key).is_none() {
            // Safety: invoked during startup before any threads are spawned.
            unsafe {
                std::env::set_var(key, value);
            }
        }
    }
    Ok(())
}

fn read_string(key: &'static str, default: &'static str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn read_u64(key: &'static str, default: u64) -> Result<u64, ConfigError> {
    let raw = std::env::var(key).unwrap_or_else(|_| default.to_string());
    raw.parse()
        .map_err(|_| ConfigError::InvalidNumber(key, raw))
}

fn parse_dotenv_line(line: &str) -> Option<(String, String)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
    let (key, value) = trimmed.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    let value = value.trim();
    let value = value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|inner| inner.strip_suffix('\'')))
        .unwrap_or(value);
    Some((key.to_string(), value.to_string()))
}
