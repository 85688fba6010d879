use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::view_models::{MissingKind, NotFoundViewModel};

pub struct NotFoundView<'a> {
    model: &'a NotFoundViewModel,
}

impl<'a> NotFoundView<'a> {
    pub fn new(model: &'a NotFoundViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for NotFoundView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let heading = match self.model.kind {
            MissingKind::Track => "Roadmap not found",
            MissingKind::Page => "Page not found",
        };

        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                heading,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                format!("Nothing lives at {}", self.model.requested),
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("[b]", Style::default().fg(Color::Yellow)),
                Span::raw(" Return to Roadmaps"),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
