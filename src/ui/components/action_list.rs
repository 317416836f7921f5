use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::theme::Theme;

pub struct ActionRow {
    pub label: String,
    pub description: String,
    pub marked: bool,
}

/// The selectable buttons of one screen.
pub struct ActionList<'a> {
    pub heading: &'a str,
    pub rows: Vec<ActionRow>,
    pub selected: usize,
    pub theme: &'a Theme,
}

impl Widget for &ActionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);

        let heading = Paragraph::new(Line::from(Span::styled(
            self.heading,
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        heading.render(layout[0], buf);

        let row_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                self.rows
                    .iter()
                    .map(|_| Constraint::Length(2))
                    .collect::<Vec<_>>(),
            )
            .split(layout[1]);

        for (i, row) in self.rows.iter().enumerate() {
            let is_selected = i == self.selected;
            let indicator = if is_selected { ">" } else { " " };
            let mark = if row.marked { "●" } else { " " };

            let label_style = Style::default()
                .fg(if is_selected { colors.accent() } else { colors.fg() })
                .add_modifier(if is_selected {
                    Modifier::BOLD
                } else {
                    Modifier::empty()
                });

            let mut spans = vec![Span::styled(
                format!(" {indicator} {mark} {}", row.label),
                label_style,
            )];
            if !row.description.is_empty() {
                spans.push(Span::styled(
                    format!("  {}", row.description),
                    Style::default().fg(colors.muted()),
                ));
            }

            if let Some(rect) = row_layout.get(i) {
                Paragraph::new(Line::from(spans)).render(*rect, buf);
            }
        }
    }
}
