use masthead_client::blocked_ips::IpAction;
use masthead_client::{ApiClient, ApiError};

use crate::session::{Session, ViewKey};

/// A destructive operation. None of these are issued without an explicit
/// confirmation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminAction {
    DeleteComment { id: i64 },
    BanUser { id: i64 },
    UnbanUser { id: i64 },
    DeleteAllUserComments { user_id: i64 },
    UnblockIpRecord { id: i64 },
    ManageIp { ip: String, action: IpAction },
}

/// An action waiting on the user. The request is only issued once
/// `confirm` has been called; dropping the pending action cancels it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAction {
    pub prompt: String,
    action: AdminAction,
}

#[derive(Debug)]
pub struct Confirmed(AdminAction);

impl PendingAction {
    pub fn request(action: AdminAction) -> Self {
        let prompt = match &action {
            AdminAction::DeleteComment { .. } => "Delete comment?".to_string(),
            AdminAction::BanUser { .. } => "Ban this user?".to_string(),
            AdminAction::UnbanUser { .. } => "Unban this user?".to_string(),
            AdminAction::DeleteAllUserComments { .. } => {
                "Are you sure you want to delete ALL comments from this user? \
                 This cannot be undone."
                    .to_string()
            }
            AdminAction::UnblockIpRecord { .. } => {
                "Are you sure you want to unblock this IP?".to_string()
            }
            AdminAction::ManageIp { ip, action } => {
                let verb = match action {
                    IpAction::Block => "block",
                    IpAction::Unblock => "unblock",
                };
                format!("Are you sure you want to {verb} {ip}?")
            }
        };
        PendingAction { prompt, action }
    }

    pub fn confirm(self) -> Confirmed {
        Confirmed(self.action)
    }
}

/// What to reload after a successful mutation. Mutations reload the
/// currently stored page, except operations that invalidate the stored
/// position (delete-all) or plausibly reshuffle the list (ip block/unblock
/// via lookup), which go back to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshPlan {
    Community { page: u32 },
    /// The public thread is one unpaginated batch; a reload refetches it all.
    PostComments { slug: String },
    Users { page: u32 },
    UserComments { user_id: i64, page: u32 },
    BlockedIps { page: u32 },
    LookupAndBlockedIpsFirstPage { ip: String },
    None,
}

/// Issues a confirmed destructive action and derives the refresh plan from
/// the session's current position.
pub async fn execute(
    client: &ApiClient,
    session: &mut Session,
    confirmed: Confirmed,
) -> Result<RefreshPlan, ApiError> {
    let Confirmed(action) = confirmed;
    match action {
        AdminAction::DeleteComment { id } => {
            client.delete_comment(id).await?;
            Ok(comment_list_refresh(session))
        }
        AdminAction::BanUser { id } => {
            client.ban_user(id).await?;
            Ok(RefreshPlan::Users {
                page: session.stored_page(ViewKey::Users),
            })
        }
        AdminAction::UnbanUser { id } => {
            client.unban_user(id).await?;
            Ok(RefreshPlan::Users {
                page: session.stored_page(ViewKey::Users),
            })
        }
        AdminAction::DeleteAllUserComments { user_id } => {
            client.delete_all_user_comments(user_id).await?;
            session.reset_page(ViewKey::UserComments);
            Ok(RefreshPlan::UserComments { user_id, page: 1 })
        }
        AdminAction::UnblockIpRecord { id } => {
            client.unblock_ip(id).await?;
            Ok(RefreshPlan::BlockedIps {
                page: session.stored_page(ViewKey::BlockedIps),
            })
        }
        AdminAction::ManageIp { ip, action } => {
            client.manage_ip(&ip, action).await?;
            session.reset_page(ViewKey::BlockedIps);
            Ok(RefreshPlan::LookupAndBlockedIpsFirstPage { ip })
        }
    }
}

/// A single comment deletion or reply reloads whichever comment list is
/// active, at its stored page.
fn comment_list_refresh(session: &Session) -> RefreshPlan {
    if session.active_view() == ViewKey::Community {
        return RefreshPlan::Community {
            page: session.stored_page(ViewKey::Community),
        };
    }
    match session.current_post_slug.clone() {
        Some(slug) => RefreshPlan::PostComments { slug },
        None => RefreshPlan::None,
    }
}

#[cfg(test)]
mod tests {
    use super::{AdminAction, PendingAction, RefreshPlan, comment_list_refresh};
    use crate::session::{Session, ViewKey};
    use masthead_client::blocked_ips::IpAction;

    #[test]
    fn prompts_name_the_operation() {
        let pending = PendingAction::request(AdminAction::ManageIp {
            ip: "10.0.0.9".to_string(),
            action: IpAction::Block,
        });
        assert_eq!(pending.prompt, "Are you sure you want to block 10.0.0.9?");
        let pending = PendingAction::request(AdminAction::DeleteComment { id: 3 });
        assert_eq!(pending.prompt, "Delete comment?");
    }

    #[test]
    fn comment_refresh_follows_active_view() {
        let mut session = Session::new();
        session.navigate(ViewKey::Community);
        let token = session.begin_load(ViewKey::Community);
        session.apply_page(token, 4, 8);
        assert_eq!(
            comment_list_refresh(&session),
            RefreshPlan::Community { page: 4 }
        );

        session.navigate(ViewKey::PostDetailComments);
        session.current_post_slug = Some("hello-world".to_string());
        assert_eq!(
            comment_list_refresh(&session),
            RefreshPlan::PostComments {
                slug: "hello-world".to_string(),
            }
        );
    }
}
