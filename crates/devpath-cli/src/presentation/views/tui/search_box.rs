//! Search results dropdown, drawn over whatever is below the navbar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::presentation::view_models::SearchBoxViewModel;

pub struct SearchDropdownView<'a> {
    model: &'a SearchBoxViewModel,
}

impl<'a> SearchDropdownView<'a> {
    pub fn new(model: &'a SearchBoxViewModel) -> Self {
        Self { model }
    }

    /// Rows needed for every result plus the border
    pub fn height(&self) -> u16 {
        (self.model.results.len() as u16).saturating_mul(2).saturating_add(2)
    }
}

impl<'a> Widget for SearchDropdownView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.model.visible {
            return;
        }

        let mut lines = Vec::with_capacity(self.model.results.len() * 2);
        for item in &self.model.results {
            let title_style = if item.highlighted {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            lines.push(Line::from(vec![
                Span::raw(format!("{} ", item.icon)),
                Span::styled(item.title.as_str(), title_style),
            ]));
            lines.push(Line::from(Span::styled(
                format!("   {}", item.description),
                Style::default().fg(Color::DarkGray),
            )));
        }

        Clear.render(area, buf);
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }
}
