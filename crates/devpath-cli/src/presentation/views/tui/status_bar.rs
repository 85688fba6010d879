//! Bottom line: key hints on the left, current path on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::view_models::KeyHint;

pub struct StatusBarView<'a> {
    hints: &'a [KeyHint],
    path: &'a str,
}

impl<'a> StatusBarView<'a> {
    pub fn new(hints: &'a [KeyHint], path: &'a str) -> Self {
        Self { hints, path }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(self.path_width())])
                .split(area);

        let mut spans = Vec::new();
        for hint in self.hints {
            spans.push(Span::styled(
                format!("[{}]", hint.keys),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(format!(" {}  ", hint.action)));
        }
        Paragraph::new(Line::from(spans)).render(chunks[0], buf);

        Paragraph::new(Span::styled(self.path, Style::default().fg(Color::DarkGray)))
            .right_aligned()
            .render(chunks[1], buf);
    }
}

impl StatusBarView<'_> {
    fn path_width(&self) -> u16 {
        (self.path.chars().count() as u16).saturating_add(1)
    }
}
