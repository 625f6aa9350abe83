use crate::error::SearchError;
use crate::github::types::Repository;
use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    SearchCompleted {
        generation: u64,
        result: Result<Vec<Repository>, SearchError>,
    },
}
