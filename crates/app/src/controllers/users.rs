use masthead_client::users::User;
use masthead_client::{ApiClient, ApiError};
use masthead_core::domain::comments::Comment;
use masthead_core::domain::pagination::PaginationControls;

use crate::session::{Session, ViewKey};

#[derive(Debug, Clone)]
pub struct UsersModel {
    pub users: Vec<User>,
    pub pagination: Option<PaginationControls>,
}

/// Per-user comment drill-down reached from the users table.
#[derive(Debug, Clone)]
pub struct UserCommentsModel {
    pub user_id: i64,
    pub user_name: Option<String>,
    pub comments: Vec<Comment>,
    pub pagination: Option<PaginationControls>,
}

pub async fn load(
    client: &ApiClient,
    session: &mut Session,
    page: u32,
) -> Result<UsersModel, ApiError> {
    let token = session.begin_load(ViewKey::Users);
    let response = client.users(page).await?;
    session.apply_page(token, response.page, response.total_pages);
    Ok(UsersModel {
        users: response.users,
        pagination: PaginationControls::from_state(session.page_state(ViewKey::Users)),
    })
}

pub async fn load_comments(
    client: &ApiClient,
    session: &mut Session,
    user_id: i64,
    page: u32,
) -> Result<UserCommentsModel, ApiError> {
    session.user_comments_user_id = Some(user_id);
    let token = session.begin_load(ViewKey::UserComments);
    let response = client.user_comments(user_id, page).await?;
    session.apply_page(token, response.page, response.total_pages);
    Ok(UserCommentsModel {
        user_id,
        user_name: response.user_name,
        comments: response.comments,
        pagination: PaginationControls::from_state(session.page_state(ViewKey::UserComments)),
    })
}
