use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::NavbarViewModel;

/// Width reserved for the search box, borders included
pub const SEARCH_BOX_WIDTH: u16 = 34;

pub struct NavbarView<'a> {
    model: &'a NavbarViewModel,
}

impl<'a> NavbarView<'a> {
    pub fn new(model: &'a NavbarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for NavbarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks =
            Layout::horizontal([Constraint::Min(20), Constraint::Length(SEARCH_BOX_WIDTH)])
                .split(area);

        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.model.brand),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];
        for item in &self.model.items {
            let style = if item.active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default()
            };
            spans.push(Span::styled(
                item.hotkey.to_string(),
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::styled(format!(" {}", item.label), style));
            spans.push(Span::raw("   "));
        }

        Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::BOTTOM))
            .render(chunks[0], buf);

        let search = &self.model.search;
        let border = if search.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let text = if search.query.is_empty() && !search.focused {
            Span::styled("Search roadmaps... [/]", Style::default().fg(Color::DarkGray))
        } else if search.focused {
            Span::raw(format!("{}▏", search.query))
        } else {
            Span::raw(search.query.as_str())
        };
        Paragraph::new(Line::from(vec![Span::raw("🔍 "), text]))
            .block(Block::default().borders(Borders::ALL).border_style(border))
            .render(chunks[1], buf);
    }
}
