use crate::github::types::Repository;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
};

pub struct DetailPanel<'a> {
    pub repo: &'a Repository,
}

impl<'a> Widget for DetailPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let popup = super::centered_rect(60, 50, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(format!(" {} ", self.repo.full_name))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT));
        let inner = block.inner(popup);
        block.render(popup, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let label_style = Style::default().fg(theme::ACCENT);
        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(vec![
            Span::styled("Stars ", label_style),
            Span::styled(
                self.repo.stargazers_count.to_string(),
                Style::default().fg(theme::STAR_COLOR),
            ),
            Span::raw("   "),
            Span::styled("Forks ", label_style),
            Span::styled(
                self.repo.forks_count.to_string(),
                Style::default().fg(theme::FORK_COLOR),
            ),
        ]));

        lines.push(Line::from(vec![
            Span::styled("URL ", label_style),
            Span::styled(
                self.repo.html_url.clone(),
                Style::default().fg(theme::LINK_COLOR),
            ),
        ]));

        lines.push(Line::default());

        match self.repo.description {
            Some(ref desc) => {
                // crude word wrap, one screen at most
                let width = inner.width as usize;
                let mut current = String::new();
                for word in desc.split_whitespace() {
                    if !current.is_empty() && current.len() + word.len() + 1 > width {
                        lines.push(Line::from(Span::raw(std::mem::take(&mut current))));
                    }
                    if !current.is_empty() {
                        current.push(' ');
                    }
                    current.push_str(word);
                }
                if !current.is_empty() {
                    lines.push(Line::from(Span::raw(current)));
                }
            }
            None => lines.push(Line::from(Span::styled(
                "(no description)",
                Style::default().fg(theme::DIM_TEXT),
            ))),
        }

        for (i, line) in lines.iter().enumerate() {
            if i >= inner.height as usize {
                break;
            }
            buf.set_line(inner.x, inner.y + i as u16, line, inner.width);
        }
    }
}
