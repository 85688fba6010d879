use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::HomeViewModel;

pub struct HomeView<'a> {
    model: &'a HomeViewModel,
}

impl<'a> HomeView<'a> {
    pub fn new(model: &'a HomeViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for HomeView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::default(),
            Line::from(Span::styled(
                self.model.title.as_str(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(self.model.tagline.as_str()),
            Line::default(),
        ];
        for action in &self.model.actions {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("[{}]", action.key),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(format!(" {} ", action.label)),
                Span::styled(action.path.as_str(), Style::default().fg(Color::DarkGray)),
            ]));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
