use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

pub struct SearchBar<'a> {
    pub query: &'a str,
    pub editing: bool,
    pub loading: bool,
}

impl<'a> Widget for SearchBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let border_style = if self.editing {
            Style::default().fg(theme::ACTIVE_BORDER)
        } else {
            Style::default().fg(theme::BORDER_COLOR)
        };

        let title = if self.loading {
            " Search \u{2014} searching\u{2026} "
        } else {
            " Search "
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        if self.query.is_empty() && !self.editing {
            spans.push(Span::styled(
                "press / to search repositories",
                Style::default().fg(theme::DIM_TEXT),
            ));
        } else {
            spans.push(Span::raw(self.query.to_string()));
        }
        if self.editing {
            spans.push(Span::styled(
                "\u{258c}",
                Style::default()
                    .fg(theme::ACTIVE_BORDER)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        buf.set_line(inner.x, inner.y, &Line::from(spans), inner.width);
    }
}
