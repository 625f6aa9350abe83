use crate::search::SearchState;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBar<'a> {
    pub state: &'a SearchState,
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::STATUS_BG);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        let mut spans = Vec::new();

        spans.push(Span::styled(
            " repoglass",
            Style::default()
                .fg(theme::ACCENT)
                .bg(theme::STATUS_BG)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            " \u{2502} ",
            Style::default().fg(theme::BORDER_COLOR).bg(theme::STATUS_BG),
        ));

        let (text, fg) = match self.state {
            SearchState::Idle => ("idle".to_string(), theme::DIM_TEXT),
            SearchState::Loading => ("searching\u{2026}".to_string(), theme::ACTIVE_BORDER),
            SearchState::Success(items) => (format!("{} results", items.len()), theme::DIM_TEXT),
            SearchState::Failed(_) => ("search failed".to_string(), theme::ERROR_FG),
        };
        spans.push(Span::styled(text, Style::default().fg(fg).bg(theme::STATUS_BG)));

        spans.push(Span::styled(
            " \u{2502} ",
            Style::default().fg(theme::BORDER_COLOR).bg(theme::STATUS_BG),
        ));
        spans.push(Span::styled(
            "? help ",
            Style::default().fg(theme::DIM_TEXT).bg(theme::STATUS_BG),
        ));

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
