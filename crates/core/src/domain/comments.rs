use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A flat comment record as returned by the backend. Soft-deleted comments
/// stay in the batch with `is_deleted` set and their text hidden server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub user_id: Option<i64>,
    pub author_name: String,
    pub avatar_url: Option<String>,
    pub comment_text: String,
    pub created_at: DateTime<Utc>,
    pub edited_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_deleted: bool,
    pub source: Option<String>,
    pub post_slug: String,
    pub post_title: Option<String>,
    pub post_image: Option<String>,
}

/// Two-level display hierarchy built from one fetch batch.
///
/// Roots are ordered newest-first (recent activity), replies within a thread
/// oldest-first (a thread reads chronologically). Visual depth is capped at
/// two levels: descendants deeper than a root's direct replies are flattened
/// onto their nearest depth-1 ancestor behind a "show N replies" affordance.
#[derive(Debug, Clone, Serialize)]
pub struct CommentThread {
    pub total: usize,
    pub roots: Vec<RootComment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RootComment {
    pub comment: Comment,
    /// True when this comment's parent was absent from the batch. It is
    /// surfaced as a pseudo-root rather than dropped.
    pub orphaned: bool,
    pub replies: Vec<ReplyComment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplyComment {
    pub comment: Comment,
    /// Deeper descendants, flattened chronologically, rendered only after an
    /// explicit "show N replies" action.
    pub collapsed: Vec<Comment>,
}

impl ReplyComment {
    pub fn collapsed_count(&self) -> usize {
        self.collapsed.len()
    }
}

/// Builds the display hierarchy from an unordered batch of flat records.
pub fn build_thread(records: Vec<Comment>) -> CommentThread {
    let total = records.len();
    let known_ids: HashMap<i64, ()> = records.iter().map(|c| (c.id, ())).collect();

    let mut roots: Vec<(Comment, bool)> = Vec::new();
    let mut by_parent: HashMap<i64, Vec<Comment>> = HashMap::new();
    for comment in records {
        match comment.parent_id {
            Some(parent) if known_ids.contains_key(&parent) => {
                by_parent.entry(parent).or_default().push(comment);
            }
            Some(_) => roots.push((comment, true)),
            None => roots.push((comment, false)),
        }
    }

    roots.sort_by(|a, b| b.0.created_at.cmp(&a.0.created_at));
    for bucket in by_parent.values_mut() {
        bucket.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    }

    let roots = roots
        .into_iter()
        .map(|(comment, orphaned)| {
            let replies = direct_replies(comment.id, &mut by_parent);
            RootComment {
                comment,
                orphaned,
                replies,
            }
        })
        .collect();

    CommentThread { total, roots }
}

fn direct_replies(root_id: i64, by_parent: &mut HashMap<i64, Vec<Comment>>) -> Vec<ReplyComment> {
    let Some(bucket) = by_parent.remove(&root_id) else {
        return Vec::new();
    };
    bucket
        .into_iter()
        .map(|comment| {
            let collapsed = collect_descendants(comment.id, by_parent);
            ReplyComment { comment, collapsed }
        })
        .collect()
}

// Walks the remaining buckets below a depth-1 reply, producing a single
// chronological list. Buckets are removed as they are consumed so no comment
// can land in two places.
fn collect_descendants(parent_id: i64, by_parent: &mut HashMap<i64, Vec<Comment>>) -> Vec<Comment> {
    let mut flattened = Vec::new();
    let mut pending = vec![parent_id];
    while let Some(id) = pending.pop() {
        if let Some(bucket) = by_parent.remove(&id) {
            for child in bucket {
                pending.push(child.id);
                flattened.push(child);
            }
        }
    }
    flattened.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    flattened
}
