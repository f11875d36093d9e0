use serde::Deserialize;

use crate::{ApiClient, ApiError};

#[derive(Debug, Clone, Deserialize)]
pub struct AuthStatus {
    pub authenticated: bool,
    pub user: Option<AuthUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: i64,
    pub name: String,
    pub picture: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl ApiClient {
    pub async fn auth_status(&self) -> Result<AuthStatus, ApiError> {
        self.get_json("/api/auth/status", &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::AuthStatus;

    #[test]
    fn anonymous_status_has_no_user() {
        let status: AuthStatus = serde_json::from_str(r#"{"authenticated": false}"#).unwrap();
        assert!(!status.authenticated);
        assert!(status.user.is_none());
    }

    #[test]
    fn signed_in_status_carries_user() {
        let status: AuthStatus = serde_json::from_str(
            r#"{"authenticated": true, "user": {"id": 7, "name": "kit", "is_admin": true}}"#,
        )
        .unwrap();
        let user = status.user.unwrap();
        assert_eq!(user.id, 7);
        assert!(user.is_admin);
        assert!(user.picture.is_none());
    }
}
