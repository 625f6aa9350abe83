use crate::search::SearchState;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

pub struct ResultsList<'a> {
    pub state: &'a SearchState,
    pub selected: usize,
    pub scroll: usize,
}

impl<'a> Widget for ResultsList<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let title = match self.state {
            SearchState::Success(items) => format!(" Results ({}) ", items.len()),
            _ => " Results ".to_string(),
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER_COLOR));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let placeholder = |buf: &mut Buf, text: &str, style: Style| {
            let line = Line::from(Span::styled(format!(" {text}"), style));
            buf.set_line(inner.x, inner.y, &line, inner.width);
        };

        match self.state {
            SearchState::Idle => {
                placeholder(buf, "type a query to search GitHub", Style::default().fg(theme::DIM_TEXT));
            }
            SearchState::Loading => {
                placeholder(buf, "searching\u{2026}", Style::default().fg(theme::DIM_TEXT));
            }
            SearchState::Failed(msg) => {
                placeholder(
                    buf,
                    &format!("Error: {msg}"),
                    Style::default().fg(theme::ERROR_FG),
                );
            }
            SearchState::Success(items) if items.is_empty() => {
                placeholder(buf, "no repositories found", Style::default().fg(theme::DIM_TEXT));
            }
            SearchState::Success(items) => {
                let visible = inner.height as usize;
                for (i, repo) in items.iter().skip(self.scroll).take(visible).enumerate() {
                    let y = inner.y + i as u16;
                    let is_selected = self.scroll + i == self.selected;

                    let mut spans = vec![
                        Span::raw(" "),
                        Span::styled(
                            repo.full_name.clone(),
                            Style::default()
                                .fg(theme::ACCENT)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::raw("  "),
                        Span::styled(
                            format!("\u{2605} {}", repo.stargazers_count),
                            Style::default().fg(theme::STAR_COLOR),
                        ),
                        Span::raw("  "),
                        Span::styled(
                            format!("\u{2442} {}", repo.forks_count),
                            Style::default().fg(theme::FORK_COLOR),
                        ),
                    ];
                    if let Some(ref desc) = repo.description {
                        spans.push(Span::raw("  "));
                        spans.push(Span::styled(
                            super::truncate_with_ellipsis(desc, inner.width as usize),
                            Style::default().fg(theme::DIM_TEXT),
                        ));
                    }

                    buf.set_line(inner.x, y, &Line::from(spans), inner.width);

                    if is_selected {
                        for x in inner.x..(inner.x + inner.width) {
                            buf[(x, y)].set_style(Style::default().bg(theme::SELECTED_BG));
                        }
                    }
                }
            }
        }
    }
}
