use crate::config::Config;
use crate::error::SearchError;
use crate::event::AppEvent;
use crate::github::types::Repository;
use crate::search::{self, SearchEvent, SearchState};
use crate::ui::{
    detail_panel::DetailPanel,
    help_panel::HelpPanel,
    input::{self, Action, InputMode},
    results_list::ResultsList,
    search_bar::SearchBar,
    status_bar::StatusBar,
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// A search the event loop should issue. Returned to the caller instead of
/// spawned here so the controller stays runtime-free and testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub generation: u64,
    pub query: String,
}

pub struct App {
    pub config: Config,
    pub query: String,
    pub state: SearchState,
    pub input_mode: InputMode,
    pub selected: usize,
    pub scroll: usize,
    pub show_detail: bool,
    pub show_help: bool,
    pub should_quit: bool,
    generation: u64,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            query: String::new(),
            state: SearchState::Idle,
            input_mode: InputMode::Browse,
            selected: 0,
            scroll: 0,
            show_detail: false,
            show_help: false,
            should_quit: false,
            generation: 0,
        }
    }

    /// Accepts the current query unless it is blank after trimming. A blank
    /// submission is a no-op: no state change, no request. Acceptance clears
    /// prior results and errors before the request goes out, so the next draw
    /// already shows the loading state.
    pub fn submit(&mut self) -> Option<SearchRequest> {
        if self.query.trim().is_empty() {
            return None;
        }

        self.generation += 1;
        self.state = search::transition(std::mem::take(&mut self.state), SearchEvent::Submitted);
        self.selected = 0;
        self.scroll = 0;
        self.show_detail = false;

        Some(SearchRequest {
            generation: self.generation,
            query: self.query.clone(),
        })
    }

    /// Applies a finished request. Completions from superseded submissions
    /// are dropped so the most recently initiated search owns the state.
    pub fn complete(&mut self, generation: u64, result: Result<Vec<Repository>, SearchError>) {
        if generation != self.generation {
            return;
        }
        self.state =
            search::transition(std::mem::take(&mut self.state), SearchEvent::Completed(result));
        self.selected = 0;
        self.scroll = 0;
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Option<SearchRequest> {
        match event {
            AppEvent::Key(key) => {
                let action = input::map_key(key, self.input_mode);
                self.handle_action(action)
            }
            AppEvent::Resize => None,
            AppEvent::SearchCompleted { generation, result } => {
                self.complete(generation, result);
                None
            }
        }
    }

    fn handle_action(&mut self, action: Action) -> Option<SearchRequest> {
        match action {
            Action::Quit => {
                self.should_quit = true;
                None
            }
            Action::ScrollDown => {
                if self.selected + 1 < self.state.results().len() {
                    self.selected += 1;
                }
                None
            }
            Action::ScrollUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            Action::Select => {
                if !self.state.results().is_empty() {
                    self.show_detail = !self.show_detail;
                }
                None
            }
            Action::EditQuery => {
                self.input_mode = InputMode::Edit;
                self.show_detail = false;
                self.show_help = false;
                None
            }
            Action::QueryChar(c) => {
                self.query.push(c);
                None
            }
            Action::QueryBackspace => {
                self.query.pop();
                None
            }
            Action::QuerySubmit => {
                let request = self.submit();
                // a rejected (blank) submission keeps the user editing
                if request.is_some() {
                    self.input_mode = InputMode::Browse;
                }
                request
            }
            Action::QueryCancel => {
                self.input_mode = InputMode::Browse;
                None
            }
            Action::Resubmit => self.submit(),
            Action::Help => {
                self.show_help = !self.show_help;
                None
            }
            Action::ClosePopup => {
                self.show_detail = false;
                self.show_help = false;
                None
            }
            Action::None => None,
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(size);

        frame.render_widget(
            SearchBar {
                query: &self.query,
                editing: self.input_mode == InputMode::Edit,
                loading: self.state.is_loading(),
            },
            chunks[0],
        );

        self.ensure_scroll_bounds(chunks[1].height.saturating_sub(2) as usize);
        frame.render_widget(
            ResultsList {
                state: &self.state,
                selected: self.selected,
                scroll: self.scroll,
            },
            chunks[1],
        );

        frame.render_widget(StatusBar { state: &self.state }, chunks[2]);

        if self.show_detail {
            if let Some(repo) = self.state.results().get(self.selected) {
                frame.render_widget(DetailPanel { repo }, size);
            }
        }
        if self.show_help {
            frame.render_widget(HelpPanel, size);
        }
    }

    fn ensure_scroll_bounds(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.selected >= self.scroll + visible_height {
            self.scroll = self.selected - visible_height + 1;
        }
        if self.selected < self.scroll {
            self.scroll = self.selected;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::make_repo;
    use reqwest::StatusCode;

    fn app_with_query(query: &str) -> App {
        let mut app = App::new(Config::default());
        app.query = query.to_string();
        app
    }

    #[test]
    fn blank_queries_are_ignored() {
        for query in ["", "   ", "\t", " \n "] {
            let mut app = app_with_query(query);
            assert_eq!(app.submit(), None);
            assert_eq!(app.state, SearchState::Idle);
        }
    }

    #[test]
    fn accepted_submission_enters_loading_before_the_request_goes_out() {
        let mut app = app_with_query("react");
        let request = app.submit().unwrap();
        assert_eq!(request.query, "react");
        assert_eq!(request.generation, 1);
        assert!(app.state.is_loading());
        assert!(app.state.results().is_empty());
        assert_eq!(app.state.error(), None);
    }

    #[test]
    fn successful_completion_replaces_results_wholesale() {
        let mut app = app_with_query("react");
        let request = app.submit().unwrap();
        let items = vec![make_repo(1, "facebook/react", 200000, 40000)];
        app.complete(request.generation, Ok(items.clone()));

        assert_eq!(app.state.results(), items.as_slice());
        assert!(!app.state.is_loading());
    }

    #[test]
    fn http_failure_surfaces_reason_phrase() {
        let mut app = app_with_query("react");
        let request = app.submit().unwrap();
        app.complete(
            request.generation,
            Err(SearchError::Http(StatusCode::UNPROCESSABLE_ENTITY)),
        );

        assert_eq!(app.state.error(), Some("Search failed: Unprocessable Entity"));
        assert!(app.state.results().is_empty());
        assert!(!app.state.is_loading());
    }

    #[test]
    fn failure_without_description_uses_fixed_fallback() {
        let mut app = app_with_query("react");
        let request = app.submit().unwrap();
        app.complete(request.generation, Err(SearchError::Network(String::new())));

        assert_eq!(app.state.error(), Some("An unknown error occurred."));
    }

    #[test]
    fn repeating_a_search_yields_the_same_results() {
        let mut app = app_with_query("react");
        let items = vec![
            make_repo(1, "facebook/react", 200000, 40000),
            make_repo(2, "preactjs/preact", 36000, 1900),
        ];

        let first = app.submit().unwrap();
        app.complete(first.generation, Ok(items.clone()));
        assert_eq!(app.state.results(), items.as_slice());
        assert!(!app.state.is_loading());

        let second = app.submit().unwrap();
        assert!(app.state.is_loading());
        app.complete(second.generation, Ok(items.clone()));
        assert_eq!(app.state.results(), items.as_slice());
        assert!(!app.state.is_loading());
    }

    #[test]
    fn stale_completions_are_dropped() {
        let mut app = app_with_query("react");
        let first = app.submit().unwrap();
        let second = app.submit().unwrap();
        assert!(second.generation > first.generation);

        app.complete(first.generation, Ok(vec![make_repo(1, "old/old", 1, 1)]));
        assert!(app.state.is_loading());

        let newest = vec![make_repo(2, "new/new", 2, 2)];
        app.complete(second.generation, Ok(newest.clone()));
        assert_eq!(app.state.results(), newest.as_slice());
    }

    #[test]
    fn late_failure_cannot_clobber_newer_results() {
        let mut app = app_with_query("react");
        let first = app.submit().unwrap();
        let second = app.submit().unwrap();

        let newest = vec![make_repo(2, "new/new", 2, 2)];
        app.complete(second.generation, Ok(newest.clone()));
        app.complete(first.generation, Err(SearchError::Network("late".to_string())));

        assert_eq!(app.state.results(), newest.as_slice());
        assert_eq!(app.state.error(), None);
    }

    #[test]
    fn blank_submit_stays_in_edit_mode() {
        let mut app = app_with_query("  ");
        app.input_mode = InputMode::Edit;
        assert_eq!(app.handle_action(Action::QuerySubmit), None);
        assert_eq!(app.input_mode, InputMode::Edit);

        app.query = "rust".to_string();
        let request = app.handle_action(Action::QuerySubmit);
        assert!(request.is_some());
        assert_eq!(app.input_mode, InputMode::Browse);
    }

    #[test]
    fn selection_stays_within_results() {
        let mut app = app_with_query("rust");
        let request = app.submit().unwrap();
        app.complete(
            request.generation,
            Ok(vec![make_repo(1, "a/a", 1, 1), make_repo(2, "b/b", 2, 2)]),
        );

        app.handle_action(Action::ScrollDown);
        assert_eq!(app.selected, 1);
        app.handle_action(Action::ScrollDown);
        assert_eq!(app.selected, 1);
        app.handle_action(Action::ScrollUp);
        app.handle_action(Action::ScrollUp);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn scroll_follows_selection() {
        let mut app = app_with_query("rust");
        let request = app.submit().unwrap();
        let items: Vec<_> = (0..20).map(|i| make_repo(i, "x/x", i, i)).collect();
        app.complete(request.generation, Ok(items));

        app.selected = 12;
        app.ensure_scroll_bounds(5);
        assert_eq!(app.scroll, 8);

        app.selected = 2;
        app.ensure_scroll_bounds(5);
        assert_eq!(app.scroll, 2);
    }

    #[test]
    fn detail_requires_results() {
        let mut app = app_with_query("rust");
        app.handle_action(Action::Select);
        assert!(!app.show_detail);

        let request = app.submit().unwrap();
        app.complete(request.generation, Ok(vec![make_repo(1, "a/a", 1, 1)]));
        app.handle_action(Action::Select);
        assert!(app.show_detail);
    }
}
