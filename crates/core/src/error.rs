use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid slug: {0}")]
    InvalidSlug(String),
}
