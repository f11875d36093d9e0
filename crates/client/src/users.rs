use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Deserialize;

use masthead_core::domain::comments::Comment;

use crate::{ApiClient, ApiError};

#[derive(Debug, Clone, Deserialize)]
pub struct UsersPage {
    pub users: Vec<User>,
    pub page: u32,
    pub total_pages: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub picture: Option<String>,
    pub oauth_provider: String,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_banned: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserCommentsPage {
    pub user_name: Option<String>,
    pub comments: Vec<Comment>,
    pub page: u32,
    pub total_pages: u32,
}

impl ApiClient {
    pub async fn users(&self, page: u32) -> Result<UsersPage, ApiError> {
        self.get_json("/api/admin/users", &[("page", page.to_string())])
            .await
    }

    pub async fn ban_user(&self, id: i64) -> Result<(), ApiError> {
        self.mutate::<()>(
            "ban user",
            Method::POST,
            &format!("/api/admin/users/{id}/ban"),
            None,
        )
        .await
    }

    pub async fn unban_user(&self, id: i64) -> Result<(), ApiError> {
        self.mutate::<()>(
            "unban user",
            Method::POST,
            &format!("/api/admin/users/{id}/unban"),
            None,
        )
        .await
    }

    pub async fn user_comments(&self, user_id: i64, page: u32) -> Result<UserCommentsPage, ApiError> {
        self.get_json(
            &format!("/api/admin/users/{user_id}/comments"),
            &[("page", page.to_string())],
        )
        .await
    }

    /// Marks every comment by the user as deleted. The caller's list
    /// position is invalidated by this operation.
    pub async fn delete_all_user_comments(&self, user_id: i64) -> Result<(), ApiError> {
        self.mutate::<()>(
            "delete all user comments",
            Method::POST,
            &format!("/api/admin/users/{user_id}/comments/delete_all"),
            None,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::User;

    #[test]
    fn user_defaults_flags() {
        let user: User = serde_json::from_str(
            r#"{
                "id": 4,
                "name": "casey",
                "oauth_provider": "google",
                "created_at": "2025-01-05T08:30:00Z"
            }"#,
        )
        .unwrap();
        assert!(!user.is_admin);
        assert!(!user.is_banned);
        assert!(!user.email_verified);
        assert!(user.email.is_none());
    }
}
