//! Catalog page component: grid cursor, technology cursor, and the
//! `CatalogView` that owns selection state and its timers.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use devpath_engine::{Catalog, CatalogView, Route, Timing};
use devpath_types::{Track, TrackId};

use crate::presentation::presenters::present_catalog_screen;
use crate::presentation::view_models::CatalogScreenViewModel;
use crate::presentation::views::tui::CARD_COLUMNS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogAction {
    /// Start Learning: open the detail page of the settled selection
    Open(Route),
}

#[derive(Debug)]
pub struct CatalogComponent {
    view: CatalogView,
    cursor: usize,
    tech_cursor: usize,
}

impl CatalogComponent {
    pub fn new(
        catalog: &Catalog,
        selected: Option<&TrackId>,
        timing: Timing,
        now: Instant,
    ) -> Self {
        let view = CatalogView::with_preselected(catalog, selected, timing, now);
        let cursor = view
            .state()
            .selected()
            .and_then(|id| catalog.position(id.as_str()))
            .unwrap_or(0);
        Self {
            view,
            cursor,
            tech_cursor: 0,
        }
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn tech_cursor(&self) -> usize {
        self.tech_cursor
    }

    pub fn tick(&mut self, now: Instant) {
        self.view.advance(now);
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.view.next_deadline()
    }

    pub fn view_model(&self, catalog: &Catalog) -> CatalogScreenViewModel {
        present_catalog_screen(catalog, &self.view, self.cursor, self.tech_cursor)
    }

    /// The selected track once its transition has finished
    fn settled<'a>(&self, catalog: &'a Catalog) -> Option<&'a Track> {
        let state = self.view.state();
        if state.is_transitioning() {
            return None;
        }
        state
            .selected()
            .and_then(|id| catalog.get(id.as_str()))
    }

    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        catalog: &Catalog,
        now: Instant,
    ) -> Option<CatalogAction> {
        // Skeleton cards are not interactive
        if self.view.state().is_loading() || catalog.is_empty() {
            return None;
        }

        let last = catalog.len() - 1;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.cursor = (self.cursor + 1).min(last);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(CARD_COLUMNS);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + CARD_COLUMNS).min(last);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let id = catalog.tracks()[self.cursor].id.clone();
                if self.view.select_track(&id, now).is_accepted() {
                    self.tech_cursor = 0;
                }
            }
            KeyCode::Tab => {
                let count = self.settled(catalog).map_or(0, |t| t.technologies.len());
                if count > 0 {
                    self.tech_cursor = (self.tech_cursor + 1) % count;
                }
            }
            KeyCode::BackTab => {
                let count = self.settled(catalog).map_or(0, |t| t.technologies.len());
                if count > 0 {
                    self.tech_cursor = (self.tech_cursor + count - 1) % count;
                }
            }
            KeyCode::Char('t') => {
                let name = self
                    .settled(catalog)
                    .and_then(|track| track.technologies.get(self.tech_cursor))
                    .map(|tech| tech.name.clone());
                if let Some(name) = name {
                    self.view.toggle_technology(catalog, &name);
                }
            }
            KeyCode::Char('o') => {
                return self
                    .settled(catalog)
                    .map(|track| CatalogAction::Open(Route::Track(track.id.clone())));
            }
            _ => {}
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use devpath_engine::SelectionPhase;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded(catalog: &Catalog, start: Instant) -> CatalogComponent {
        let mut component = CatalogComponent::new(catalog, None, Timing::default(), start);
        component.tick(start + Timing::DEFAULT_LOADING);
        component
    }

    #[test]
    fn test_input_ignored_while_loading() {
        let catalog = Catalog::builtin();
        let start = Instant::now();
        let mut component = CatalogComponent::new(&catalog, None, Timing::default(), start);

        component.handle_input(key(KeyCode::Right), &catalog, start);
        component.handle_input(key(KeyCode::Enter), &catalog, start);
        assert_eq!(component.cursor(), 0);
        assert_eq!(component.view().phase(), SelectionPhase::Idle);
    }

    #[test]
    fn test_grid_navigation_clamps() {
        let catalog = Catalog::builtin();
        let start = Instant::now();
        let mut component = loaded(&catalog, start);

        component.handle_input(key(KeyCode::Up), &catalog, start);
        assert_eq!(component.cursor(), 0);
        component.handle_input(key(KeyCode::Down), &catalog, start);
        assert_eq!(component.cursor(), CARD_COLUMNS);
        for _ in 0..20 {
            component.handle_input(key(KeyCode::Char('l')), &catalog, start);
        }
        assert_eq!(component.cursor(), catalog.len() - 1);
    }

    #[test]
    fn test_select_then_open() {
        let catalog = Catalog::builtin();
        let start = Instant::now();
        let mut component = loaded(&catalog, start);
        let now = start + Duration::from_secs(2);

        component.handle_input(key(KeyCode::Right), &catalog, now);
        component.handle_input(key(KeyCode::Enter), &catalog, now);
        // Still transitioning: no detail page yet
        assert_eq!(
            component.handle_input(key(KeyCode::Char('o')), &catalog, now),
            None
        );

        component.tick(now + Timing::DEFAULT_TRANSITION);
        assert_eq!(
            component.handle_input(key(KeyCode::Char('o')), &catalog, now),
            Some(CatalogAction::Open(Route::parse("/roadmap/backend")))
        );
    }

    #[test]
    fn test_technology_cursor_wraps_and_toggles() {
        let catalog = Catalog::builtin();
        let start = Instant::now();
        let mut component = CatalogComponent::new(
            &catalog,
            Some(&TrackId::new("frontend")),
            Timing::default(),
            start,
        );
        component.tick(start + Timing::DEFAULT_LOADING);
        let count = catalog.get("frontend").unwrap().technologies.len();

        component.handle_input(key(KeyCode::BackTab), &catalog, start);
        assert_eq!(component.tech_cursor(), count - 1);
        component.handle_input(key(KeyCode::Tab), &catalog, start);
        assert_eq!(component.tech_cursor(), 0);

        component.handle_input(key(KeyCode::Char('t')), &catalog, start);
        let first = catalog.get("frontend").unwrap().technologies[0].name.as_str();
        assert_eq!(component.view().state().expanded(), Some(first));
    }

    #[test]
    fn test_preselection_moves_cursor() {
        let catalog = Catalog::builtin();
        let component = CatalogComponent::new(
            &catalog,
            Some(&TrackId::new("devops")),
            Timing::default(),
            Instant::now(),
        );
        assert_eq!(component.cursor(), catalog.position("devops").unwrap());
    }
}
