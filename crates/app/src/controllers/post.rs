use masthead_client::ApiClient;
use masthead_client::auth::AuthUser;
use masthead_core::domain::comments::{Comment, CommentThread, build_thread};
use masthead_core::types::slug::Slug;

use super::{ControllerError, validate_comment_text};
use crate::session::{Session, ViewKey};

/// Public post page: one comment batch threaded client-side. The composer
/// and per-comment affordances depend on the signed-in viewer.
#[derive(Debug, Clone)]
pub struct PostPageModel {
    pub slug: Slug,
    pub thread: CommentThread,
    pub viewer: Option<AuthUser>,
}

/// Edit and delete are offered on a comment the viewer authored, or on any
/// comment when the viewer is an admin.
pub fn can_modify(viewer: Option<&AuthUser>, comment: &Comment) -> bool {
    match viewer {
        Some(user) => user.is_admin || comment.user_id == Some(user.id),
        None => false,
    }
}

pub async fn load(
    client: &ApiClient,
    session: &mut Session,
    slug: &str,
) -> Result<PostPageModel, ControllerError> {
    let slug = Slug::try_from(slug)?;
    session.navigate(ViewKey::PostDetailComments);
    session.current_post_slug = Some(slug.as_str().to_string());
    let response = client.post_comments(slug.as_str()).await?;
    Ok(PostPageModel {
        thread: build_thread(response.comments),
        viewer: session.current_user.clone(),
        slug,
    })
}

/// Visitor comment or reply on the public page. The caller reloads the
/// thread on success.
pub async fn submit(
    client: &ApiClient,
    slug: &str,
    text: &str,
    parent_id: Option<i64>,
) -> Result<(), ControllerError> {
    let slug = Slug::try_from(slug)?;
    let text = validate_comment_text(text)?;
    client.submit_comment(slug.as_str(), text, parent_id).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use masthead_client::auth::AuthUser;
    use masthead_core::domain::comments::Comment;

    use super::can_modify;

    fn comment(user_id: Option<i64>) -> Comment {
        Comment {
            id: 1,
            parent_id: None,
            user_id,
            author_name: "sam".to_string(),
            avatar_url: None,
            comment_text: "hi".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
            edited_at: None,
            is_deleted: false,
            source: None,
            post_slug: "hello-world".to_string(),
            post_title: None,
            post_image: None,
        }
    }

    fn user(id: i64, is_admin: bool) -> AuthUser {
        AuthUser {
            id,
            name: format!("user-{id}"),
            picture: None,
            is_admin,
        }
    }

    #[test]
    fn author_and_admin_can_modify() {
        let authored = comment(Some(7));
        assert!(can_modify(Some(&user(7, false)), &authored));
        assert!(can_modify(Some(&user(9, true)), &authored));
        assert!(!can_modify(Some(&user(9, false)), &authored));
    }

    #[test]
    fn anonymous_viewer_cannot_modify() {
        assert!(!can_modify(None, &comment(Some(7))));
        assert!(!can_modify(Some(&user(7, false)), &comment(None)));
    }
}
