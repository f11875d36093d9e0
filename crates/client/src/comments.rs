use reqwest::Method;
use serde::{Deserialize, Serialize};

use masthead_core::domain::comments::Comment;

use crate::{ApiClient, ApiError};

#[derive(Debug, Clone, Deserialize)]
pub struct AdminCommentsPage {
    pub comments: Vec<Comment>,
    pub page: u32,
    pub total_pages: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostComments {
    pub comments: Vec<Comment>,
}

#[derive(Debug, Serialize)]
struct ReplyRequest<'a> {
    parent_id: i64,
    slug: &'a str,
    comment_text: &'a str,
}

#[derive(Debug, Serialize)]
struct EditRequest<'a> {
    comment_text: &'a str,
}

#[derive(Debug, Serialize)]
struct SubmitRequest<'a> {
    comment_text: &'a str,
    parent_id: Option<i64>,
}

impl ApiClient {
    /// Admin moderation list, optionally scoped to one post.
    pub async fn admin_comments(
        &self,
        slug: Option<&str>,
        page: u32,
    ) -> Result<AdminCommentsPage, ApiError> {
        let mut query = vec![("page", page.to_string())];
        if let Some(slug) = slug {
            query.push(("slug", slug.to_string()));
        }
        self.get_json("/api/admin/comments", &query).await
    }

    pub async fn admin_reply(
        &self,
        parent_id: i64,
        slug: &str,
        comment_text: &str,
    ) -> Result<(), ApiError> {
        self.mutate(
            "reply",
            Method::POST,
            "/api/admin/comments/reply",
            Some(&ReplyRequest {
                parent_id,
                slug,
                comment_text,
            }),
        )
        .await
    }

    pub async fn delete_comment(&self, id: i64) -> Result<(), ApiError> {
        self.mutate::<()>(
            "delete comment",
            Method::DELETE,
            &format!("/api/comments/{id}"),
            None,
        )
        .await
    }

    pub async fn edit_comment(&self, id: i64, comment_text: &str) -> Result<(), ApiError> {
        self.mutate(
            "edit comment",
            Method::PUT,
            &format!("/api/comments/{id}"),
            Some(&EditRequest { comment_text }),
        )
        .await
    }

    /// Public comment batch for one post; threading happens client-side.
    pub async fn post_comments(&self, slug: &str) -> Result<PostComments, ApiError> {
        self.get_json(&format!("/api/comments/{slug}"), &[]).await
    }

    pub async fn submit_comment(
        &self,
        slug: &str,
        comment_text: &str,
        parent_id: Option<i64>,
    ) -> Result<(), ApiError> {
        self.mutate(
            "post comment",
            Method::POST,
            &format!("/api/comments/{slug}"),
            Some(&SubmitRequest {
                comment_text,
                parent_id,
            }),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::AdminCommentsPage;

    #[test]
    fn admin_page_parses_envelope() {
        let page: AdminCommentsPage = serde_json::from_str(
            r#"{
                "comments": [{
                    "id": 1,
                    "parent_id": null,
                    "author_name": "sam",
                    "comment_text": "hi",
                    "created_at": "2025-04-01T10:00:00Z",
                    "is_deleted": false,
                    "post_slug": "hello-world"
                }],
                "page": 2,
                "total_pages": 5
            }"#,
        )
        .unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.comments[0].author_name, "sam");
        assert!(page.comments[0].parent_id.is_none());
    }
}
