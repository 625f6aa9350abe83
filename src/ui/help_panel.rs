use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("/ or s", "Edit query"),
    ("Enter", "Submit / Detail"),
    ("j/k  \u{2191}/\u{2193}", "Scroll results"),
    ("r", "Search again"),
    ("?", "This help"),
    ("Esc", "Close / Leave edit"),
    ("q", "Quit"),
];

pub struct HelpPanel;

impl Widget for HelpPanel {
    fn render(self, area: Rect, buf: &mut Buf) {
        let popup = super::centered_rect(40, 50, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" Keybindings ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT));
        let inner = block.inner(popup);
        block.render(popup, buf);

        for (i, (key, desc)) in BINDINGS.iter().enumerate() {
            if i >= inner.height as usize {
                break;
            }
            let y = inner.y + i as u16;
            let line = Line::from(vec![
                Span::styled(
                    format!(" {key:<14}"),
                    Style::default()
                        .fg(theme::ACTIVE_BORDER)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw((*desc).to_string()),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
