pub mod blocked_ips;
pub mod community;
pub mod content;
pub mod dashboard;
pub mod invoicing;
pub mod post;
pub mod search;
pub mod users;

use masthead_client::ApiError;
use masthead_core::error::CoreError;
use thiserror::Error;

pub const MAX_COMMENT_LEN: usize = 1500;

/// Errors surfaced by the view controllers: either the backend call failed
/// or the user's input was rejected before any request was made.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Input(#[from] CommentInputError),
    #[error(transparent)]
    Domain(#[from] CoreError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommentInputError {
    #[error("comment text is empty")]
    Empty,
    #[error("comment text exceeds {MAX_COMMENT_LEN} characters")]
    TooLong,
}

/// Trims and validates comment text before any request is made. The backend
/// enforces the same limits; failing early keeps bad input off the wire.
pub fn validate_comment_text(text: &str) -> Result<&str, CommentInputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CommentInputError::Empty);
    }
    if trimmed.chars().count() > MAX_COMMENT_LEN {
        return Err(CommentInputError::TooLong);
    }
    Ok(trimmed)
}
