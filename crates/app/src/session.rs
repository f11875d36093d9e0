use std::collections::HashMap;

use masthead_client::auth::AuthUser;
use masthead_core::domain::pagination::PageState;

/// The navigable surfaces, each owning its own page position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKey {
    Dashboard,
    Content,
    Community,
    PostDetailComments,
    Users,
    UserComments,
    BlockedIps,
    Invoicing,
}

/// Proof that a load was started against a particular view generation.
/// Applying a response with a stale token is a no-op, which closes the
/// stale-overwrite race between navigation and an in-flight fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken {
    view: ViewKey,
    generation: u64,
}

/// Explicit application state, replacing the ambient globals of a
/// browser-side implementation. Owned by one controller loop and only
/// mutated from response handlers and direct user actions.
#[derive(Debug)]
pub struct Session {
    active_view: ViewKey,
    pages: HashMap<ViewKey, PageState>,
    generations: HashMap<ViewKey, u64>,
    pub current_post_slug: Option<String>,
    pub user_comments_user_id: Option<i64>,
    pub current_user: Option<AuthUser>,
}

impl Session {
    pub fn new() -> Self {
        Session {
            active_view: ViewKey::Dashboard,
            pages: HashMap::new(),
            generations: HashMap::new(),
            current_post_slug: None,
            user_comments_user_id: None,
            current_user: None,
        }
    }

    pub fn active_view(&self) -> ViewKey {
        self.active_view
    }

    /// Switches the active view, invalidating any in-flight load for the
    /// view being left.
    pub fn navigate(&mut self, view: ViewKey) {
        if self.active_view != view {
            *self.generations.entry(self.active_view).or_insert(0) += 1;
            self.active_view = view;
        }
    }

    pub fn begin_load(&self, view: ViewKey) -> LoadToken {
        LoadToken {
            view,
            generation: self.generations.get(&view).copied().unwrap_or(0),
        }
    }

    /// Stores the server-reported page position, unless the token went
    /// stale while the fetch was in flight.
    pub fn apply_page(&mut self, token: LoadToken, page: u32, total_pages: u32) -> bool {
        let current = self.generations.get(&token.view).copied().unwrap_or(0);
        if current != token.generation {
            return false;
        }
        self.pages
            .entry(token.view)
            .or_default()
            .apply_response(page, total_pages);
        true
    }

    pub fn page_state(&self, view: ViewKey) -> PageState {
        self.pages.get(&view).copied().unwrap_or_default()
    }

    /// The page a reload after a mutation should request.
    pub fn stored_page(&self, view: ViewKey) -> u32 {
        self.page_state(view).page
    }

    /// Used by operations that invalidate the stored position, such as
    /// deleting every comment of a user.
    pub fn reset_page(&mut self, view: ViewKey) {
        self.pages.insert(view, PageState::default());
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
