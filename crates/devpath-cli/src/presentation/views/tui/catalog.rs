//! Catalog page: card grid, technology panel for the settled selection, and
//! the call-to-action line.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use super::difficulty_color;
use crate::presentation::view_models::{
    CallToAction, CardDetailViewModel, CardViewModel, CatalogScreenViewModel,
};

/// Cards per grid row; the catalog component moves its cursor on the same grid
pub const CARD_COLUMNS: usize = 3;

const CARD_HEIGHT: u16 = 7;
const SKELETON_CARDS: usize = 6;

pub struct CatalogScreenView<'a> {
    model: &'a CatalogScreenViewModel,
}

impl<'a> CatalogScreenView<'a> {
    pub fn new(model: &'a CatalogScreenViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for CatalogScreenView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Heading
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(1), // Call to action
        ])
        .split(area);

        Paragraph::new(vec![
            Line::from(Span::styled(
                self.model.heading.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.model.subheading.as_str(),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .render(chunks[0], buf);

        if self.model.loading {
            render_skeleton(chunks[1], buf);
            return;
        }

        match &self.model.detail {
            Some(detail) => {
                let body =
                    Layout::horizontal([Constraint::Percentage(62), Constraint::Percentage(38)])
                        .split(chunks[1]);
                render_grid(&self.model.cards, body[0], buf);
                TechnologyPanel { model: detail }.render(body[1], buf);
            }
            None => render_grid(&self.model.cards, chunks[1], buf),
        }

        render_call_to_action(&self.model.call_to_action, chunks[2], buf);
    }
}

fn grid_rows(area: Rect, rows: usize) -> Vec<Rect> {
    Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); rows]).split(area).to_vec()
}

fn grid_columns(area: Rect) -> Vec<Rect> {
    Layout::horizontal(vec![Constraint::Ratio(1, CARD_COLUMNS as u32); CARD_COLUMNS])
        .split(area)
        .to_vec()
}

fn render_grid(cards: &[CardViewModel], area: Rect, buf: &mut Buffer) {
    let visible_rows = usize::from(area.height / CARD_HEIGHT).max(1);
    let focused_row = cards.iter().position(|c| c.focused).unwrap_or(0) / CARD_COLUMNS;
    let first_row = focused_row.saturating_sub(visible_rows - 1);

    let rows = grid_rows(area, visible_rows);
    for (row_index, row_area) in rows.iter().enumerate() {
        let start = (first_row + row_index) * CARD_COLUMNS;
        if start >= cards.len() {
            break;
        }
        let end = (start + CARD_COLUMNS).min(cards.len());
        for (card, cell) in cards[start..end].iter().zip(grid_columns(*row_area)) {
            CardView { model: card }.render(cell, buf);
        }
    }
}

fn render_skeleton(area: Rect, buf: &mut Buffer) {
    let placeholder = Style::default().fg(Color::DarkGray);
    let rows = SKELETON_CARDS.div_ceil(CARD_COLUMNS);
    for row_area in grid_rows(area, rows) {
        for cell in grid_columns(row_area) {
            Paragraph::new(vec![
                Line::from(Span::styled("░░░░░░░░░░░░", placeholder)),
                Line::from(Span::styled("░░░░░░░░░░░░░░░░░░░░", placeholder)),
                Line::from(Span::styled("░░░░░░░░", placeholder)),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(placeholder),
            )
            .render(cell, buf);
        }
    }
}

fn render_call_to_action(cta: &CallToAction, area: Rect, buf: &mut Buffer) {
    let line = match cta {
        CallToAction::Disabled => Line::from(Span::styled(
            "Select a path to begin",
            Style::default().fg(Color::DarkGray),
        )),
        CallToAction::Busy => Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::Yellow),
        )),
        CallToAction::Ready { path } => Line::from(vec![
            Span::styled("[o]", Style::default().fg(Color::Yellow)),
            Span::styled(
                " Start Learning →",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", path), Style::default().fg(Color::DarkGray)),
        ]),
    };
    Paragraph::new(line).centered().render(area, buf);
}

struct CardView<'a> {
    model: &'a CardViewModel,
}

impl<'a> Widget for CardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card = self.model;
        let track = &card.track;

        let (border_type, border_style) = match (card.selected, card.focused) {
            (true, _) => (
                BorderType::Double,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            (false, true) => (BorderType::Plain, Style::default().fg(Color::Yellow)),
            (false, false) => (BorderType::Plain, Style::default().fg(Color::DarkGray)),
        };

        let mut title = vec![
            Span::raw(format!("{} ", track.icon)),
            Span::styled(
                track.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ];
        if card.busy {
            title.push(Span::styled(" ◌", Style::default().fg(Color::Yellow)));
        }

        let lines = vec![
            Line::from(title),
            Line::from(Span::styled(
                track.description.as_str(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(vec![
                Span::styled(
                    track.difficulty.as_str(),
                    Style::default().fg(difficulty_color(track.difficulty)),
                ),
                Span::raw(format!(" · {}", track.estimated_time)),
            ]),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(border_type)
                    .border_style(border_style),
            )
            .render(area, buf);
    }
}

struct TechnologyPanel<'a> {
    model: &'a CardDetailViewModel,
}

impl<'a> Widget for TechnologyPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dim = Style::default().fg(Color::DarkGray);
        let mut lines = vec![Line::from(Span::styled(
            format!("⏱ {}", self.model.estimated_time),
            dim,
        ))];

        if !self.model.prerequisites.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("Requires: {}", self.model.prerequisites.join(", ")),
                dim,
            )));
        }
        lines.push(Line::default());

        for row in &self.model.technologies {
            let tech = &row.technology;
            let marker = if row.expanded { "▾" } else { "▸" };
            let name_style = if row.focused {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            lines.push(Line::from(vec![
                Span::raw(format!("{} ", marker)),
                Span::styled(tech.name.as_str(), name_style),
                Span::raw(" "),
                Span::styled(
                    tech.level.as_str(),
                    Style::default().fg(difficulty_color(tech.level)),
                ),
            ]));
            if row.expanded {
                lines.push(Line::from(format!("  {}", tech.description)));
                for resource in &tech.resources {
                    lines.push(Line::from(Span::styled(format!("  → {}", resource), dim)));
                }
            }
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(" Technologies You'll Learn ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }
}
