use serde::Serialize;

/// Page position for one list view. Only ever updated from the
/// server-reported page and total, never from the locally requested page, so
/// an out-of-range request cannot desync the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub page: u32,
    pub total_pages: u32,
}

impl Default for PageState {
    fn default() -> Self {
        PageState {
            page: 1,
            total_pages: 0,
        }
    }
}

impl PageState {
    pub fn apply_response(&mut self, page: u32, total_pages: u32) {
        self.page = page.max(1);
        self.total_pages = total_pages;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationControls {
    pub page: u32,
    pub total_pages: u32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PaginationControls {
    /// `None` when there is at most one page: the control renders as empty
    /// markup rather than "Page 1 of 1" noise.
    pub fn from_state(state: PageState) -> Option<Self> {
        if state.total_pages <= 1 {
            return None;
        }
        Some(PaginationControls {
            page: state.page,
            total_pages: state.total_pages,
            prev_enabled: state.page > 1,
            next_enabled: state.page < state.total_pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{PageState, PaginationControls};

    #[test]
    fn single_page_renders_nothing() {
        let state = PageState {
            page: 1,
            total_pages: 1,
        };
        assert!(PaginationControls::from_state(state).is_none());
        let state = PageState {
            page: 1,
            total_pages: 0,
        };
        assert!(PaginationControls::from_state(state).is_none());
    }

    #[test]
    fn boundaries_disable_prev_and_next() {
        let first = PaginationControls::from_state(PageState {
            page: 1,
            total_pages: 3,
        })
        .unwrap();
        assert!(!first.prev_enabled);
        assert!(first.next_enabled);

        let middle = PaginationControls::from_state(PageState {
            page: 2,
            total_pages: 3,
        })
        .unwrap();
        assert!(middle.prev_enabled);
        assert!(middle.next_enabled);

        let last = PaginationControls::from_state(PageState {
            page: 3,
            total_pages: 3,
        })
        .unwrap();
        assert!(last.prev_enabled);
        assert!(!last.next_enabled);
    }

    #[test]
    fn apply_response_trusts_server_values() {
        let mut state = PageState::default();
        state.apply_response(7, 9);
        assert_eq!(state.page, 7);
        assert_eq!(state.total_pages, 9);
        state.apply_response(0, 0);
        assert_eq!(state.page, 1);
    }
}
