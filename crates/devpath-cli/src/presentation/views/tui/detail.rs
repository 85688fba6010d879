//! Full page for one track.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::difficulty_color;
use crate::presentation::view_models::TrackDetailViewModel;

pub struct TrackDetailView<'a> {
    model: &'a TrackDetailViewModel,
    scroll: u16,
}

impl<'a> TrackDetailView<'a> {
    pub fn new(model: &'a TrackDetailViewModel) -> Self {
        Self { model, scroll: 0 }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }
}

impl<'a> Widget for TrackDetailView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let m = self.model;
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(Color::DarkGray);

        let mut lines = vec![
            Line::from(vec![
                Span::styled("[b]", Style::default().fg(Color::Yellow)),
                Span::styled(" ← Back to Roadmaps", dim),
            ]),
            Line::default(),
            Line::from(vec![
                Span::raw(format!("{} ", m.icon)),
                Span::styled(m.title.as_str(), bold.fg(Color::Cyan)),
            ]),
            Line::from(m.description.as_str()),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    m.difficulty.as_str(),
                    Style::default().fg(difficulty_color(m.difficulty)),
                ),
                Span::styled(" · ", dim),
                Span::raw(format!("⏱ {}", m.estimated_time)),
            ]),
        ];

        if !m.prerequisites.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Prerequisites", bold)));
            for prerequisite in &m.prerequisites {
                lines.push(Line::from(format!("  • {}", prerequisite)));
            }
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Technologies You'll Learn", bold)));
        for (index, tech) in m.technologies.iter().enumerate() {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled(format!("{:>2}. ", index + 1), dim),
                Span::styled(tech.name.as_str(), bold),
                Span::raw("  "),
                Span::styled(
                    tech.level.as_str(),
                    Style::default().fg(difficulty_color(tech.level)),
                ),
            ]));
            lines.push(Line::from(format!("    {}", tech.description)));
            for resource in &tech.resources {
                lines.push(Line::from(Span::styled(format!("    → {}", resource), dim)));
            }
        }

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::NONE))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
