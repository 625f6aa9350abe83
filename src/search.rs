use crate::error::SearchError;
use crate::github::types::Repository;

/// Single source of truth for the search flow. Exactly one variant is active;
/// `Loading` and `Failed` always expose an empty result list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Success(Vec<Repository>),
    Failed(String),
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    pub fn results(&self) -> &[Repository] {
        match self {
            SearchState::Success(items) => items,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SearchState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum SearchEvent {
    /// An accepted (non-blank) query submission.
    Submitted,
    /// The in-flight request finished, one way or the other.
    Completed(Result<Vec<Repository>, SearchError>),
}

/// Pure transition function; the app owns the state and replays events into
/// it. A completion that arrives outside `Loading` is ignored (stale results
/// are already filtered out by generation before they get here, so this is
/// the only remaining way to observe one).
pub fn transition(state: SearchState, event: SearchEvent) -> SearchState {
    match (state, event) {
        (_, SearchEvent::Submitted) => SearchState::Loading,
        (SearchState::Loading, SearchEvent::Completed(Ok(items))) => SearchState::Success(items),
        (SearchState::Loading, SearchEvent::Completed(Err(e))) => {
            SearchState::Failed(e.user_message())
        }
        (state, SearchEvent::Completed(_)) => state,
    }
}
