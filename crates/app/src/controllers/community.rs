use masthead_client::{ApiClient, ApiError};
use masthead_core::domain::comments::Comment;
use masthead_core::domain::pagination::PaginationControls;

use super::{ControllerError, validate_comment_text};
use crate::session::{Session, ViewKey};

/// Flat moderation list; unlike the public post page this view does not
/// thread, it shows comments newest-first as the backend pages them.
#[derive(Debug, Clone)]
pub struct CommunityModel {
    pub slug_filter: Option<String>,
    pub comments: Vec<Comment>,
    pub pagination: Option<PaginationControls>,
}

pub async fn load(
    client: &ApiClient,
    session: &mut Session,
    slug_filter: Option<&str>,
    page: u32,
) -> Result<CommunityModel, ApiError> {
    let token = session.begin_load(ViewKey::Community);
    let response = client.admin_comments(slug_filter, page).await?;
    session.apply_page(token, response.page, response.total_pages);
    Ok(CommunityModel {
        slug_filter: slug_filter.map(str::to_string),
        comments: response.comments,
        pagination: PaginationControls::from_state(session.page_state(ViewKey::Community)),
    })
}

/// Admin reply from the moderation list. Validation happens before the
/// request; the caller reloads the list at its stored page on success.
pub async fn reply(
    client: &ApiClient,
    parent_id: i64,
    slug: &str,
    text: &str,
) -> Result<(), ControllerError> {
    let text = validate_comment_text(text)?;
    client.admin_reply(parent_id, slug, text).await?;
    Ok(())
}

pub async fn edit(client: &ApiClient, id: i64, text: &str) -> Result<(), ControllerError> {
    let text = validate_comment_text(text)?;
    client.edit_comment(id, text).await?;
    Ok(())
}
