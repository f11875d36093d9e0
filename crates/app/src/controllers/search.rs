use std::time::Duration;

use masthead_client::search::SearchResult;
use masthead_client::{ApiClient, ApiError};

pub const DEBOUNCE: Duration = Duration::from_millis(500);
const MIN_QUERY_LEN: usize = 2;

/// What a keystroke in the search box should lead to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchInput {
    /// Empty input clears any shown results.
    Clear,
    /// Too short to be worth a request; previous results stay.
    Ignore,
    /// Schedule a request after the debounce window.
    Debounce { query: String, delay: Duration },
}

pub fn decide(input: &str) -> SearchInput {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return SearchInput::Clear;
    }
    if trimmed.chars().count() < MIN_QUERY_LEN {
        return SearchInput::Ignore;
    }
    SearchInput::Debounce {
        query: trimmed.to_string(),
        delay: DEBOUNCE,
    }
}

#[derive(Debug, Clone)]
pub struct SearchModel {
    pub query: String,
    pub results: Vec<SearchResult>,
}

/// Runs one search. Inputs that would not trigger a request in the page
/// resolve to an empty result set without touching the network.
pub async fn run(client: &ApiClient, query: &str) -> Result<SearchModel, ApiError> {
    let query = match decide(query) {
        SearchInput::Clear | SearchInput::Ignore => {
            return Ok(SearchModel {
                query: query.trim().to_string(),
                results: Vec::new(),
            });
        }
        SearchInput::Debounce { query, .. } => query,
    };
    let response = client.search(&query).await?;
    Ok(SearchModel {
        query,
        results: response.results,
    })
}

#[cfg(test)]
mod tests {
    use super::{DEBOUNCE, SearchInput, decide};

    #[test]
    fn empty_input_clears() {
        assert_eq!(decide(""), SearchInput::Clear);
        assert_eq!(decide("   "), SearchInput::Clear);
    }

    #[test]
    fn single_char_is_ignored() {
        assert_eq!(decide("a"), SearchInput::Ignore);
        assert_eq!(decide(" a "), SearchInput::Ignore);
    }

    #[test]
    fn longer_input_debounces_trimmed_query() {
        assert_eq!(
            decide("  rust async  "),
            SearchInput::Debounce {
                query: "rust async".to_string(),
                delay: DEBOUNCE,
            }
        );
    }
}
