//! Browser state: current route, the page mounted for it, and the search box.
//!
//! Navigating replaces the mounted page. The old page is dropped on the spot,
//! which tears down any catalog timers it still had pending.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use devpath_engine::{Catalog, Missing, Page, Route, Timing, nav_items};
use devpath_types::TrackId;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use super::components::{CatalogAction, CatalogComponent, SearchAction, SearchComponent};
use crate::presentation::presenters::{
    HintContext, present_home, present_key_hints, present_navbar, present_not_found,
    present_track_detail,
};
use crate::presentation::view_models::{BrowseScreenViewModel, ScreenViewModel};
use crate::presentation::views::tui::navbar::SEARCH_BOX_WIDTH;
use crate::presentation::views::tui::{
    CatalogScreenView, HomeView, NavbarView, NotFoundView, SearchDropdownView, StatusBarView,
    TrackDetailView,
};

/// The page mounted for the current route
#[derive(Debug)]
pub enum Screen {
    Home,
    Catalog(CatalogComponent),
    Detail { track: TrackId, scroll: u16 },
    NotFound(Missing),
}

impl Screen {
    fn mount(catalog: &Catalog, route: &Route, timing: Timing, now: Instant) -> Self {
        match route.resolve(catalog) {
            Page::Home => Screen::Home,
            Page::Catalog { selected } => Screen::Catalog(CatalogComponent::new(
                catalog,
                selected.map(|track| &track.id),
                timing,
                now,
            )),
            Page::Detail(track) => Screen::Detail {
                track: track.id.clone(),
                scroll: 0,
            },
            Page::NotFound(missing) => Screen::NotFound(missing),
        }
    }

    fn hint_context(&self) -> HintContext {
        match self {
            Screen::Home => HintContext::Home,
            Screen::Catalog(_) => HintContext::Catalog,
            Screen::Detail { .. } => HintContext::Detail,
            Screen::NotFound(_) => HintContext::NotFound,
        }
    }
}

pub struct App {
    catalog: Catalog,
    timing: Timing,
    route: Route,
    screen: Screen,
    search: SearchComponent,
    should_quit: bool,
}

impl App {
    pub fn new(catalog: Catalog, timing: Timing, route: Route, now: Instant) -> Self {
        let screen = Screen::mount(&catalog, &route, timing, now);
        tracing::info!(path = %route, "Browser started");
        Self {
            catalog,
            timing,
            route,
            screen,
            search: SearchComponent::new(),
            should_quit: false,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn search(&self) -> &SearchComponent {
        &self.search
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn navigate(&mut self, route: Route, now: Instant) {
        tracing::info!(from = %self.route, to = %route, "Navigate");
        self.screen = Screen::mount(&self.catalog, &route, self.timing, now);
        self.route = route;
    }

    /// Fire every page timer due at `now`
    pub fn tick(&mut self, now: Instant) {
        if let Screen::Catalog(component) = &mut self.screen {
            component.tick(now);
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        match &self.screen {
            Screen::Catalog(component) => component.next_deadline(),
            _ => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Raw mode swallows SIGINT, so Ctrl-C arrives as a key
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.search.is_focused() {
            if let Some(SearchAction::Navigate(route)) =
                self.search.handle_input(key, &self.catalog)
            {
                self.navigate(route, now);
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                if self.search.panel().is_open() {
                    self.search.close();
                } else {
                    self.should_quit = true;
                }
                return;
            }
            KeyCode::Char('/') => {
                self.search.focus();
                return;
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(item) = nav_items().into_iter().nth(index) {
                    self.navigate(item.route, now);
                }
                return;
            }
            _ => {}
        }

        let next = match &mut self.screen {
            Screen::Home => match key.code {
                KeyCode::Enter => Some(Route::catalog()),
                KeyCode::Char('r') => Some(Route::parse("/resources")),
                _ => None,
            },
            Screen::Catalog(component) => component
                .handle_input(key, &self.catalog, now)
                .map(|CatalogAction::Open(route)| route),
            Screen::Detail { scroll, .. } => match key.code {
                KeyCode::Char('b') | KeyCode::Backspace => Some(Route::catalog()),
                KeyCode::Down | KeyCode::Char('j') => {
                    *scroll = scroll.saturating_add(1);
                    None
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    *scroll = scroll.saturating_sub(1);
                    None
                }
                _ => None,
            },
            Screen::NotFound(_) => match key.code {
                KeyCode::Char('b') | KeyCode::Backspace | KeyCode::Enter => {
                    Some(Route::catalog())
                }
                _ => None,
            },
        };

        if let Some(route) = next {
            self.navigate(route, now);
        }
    }

    pub fn view_model(&self) -> BrowseScreenViewModel {
        let navbar = present_navbar(
            &self.route,
            &self.catalog,
            self.search.panel(),
            self.search.is_focused(),
            self.search.highlighted(),
        );

        let screen = match &self.screen {
            Screen::Home => ScreenViewModel::Home(present_home()),
            Screen::Catalog(component) => {
                ScreenViewModel::Catalog(component.view_model(&self.catalog))
            }
            Screen::Detail { track, .. } => match self.catalog.get(track.as_str()) {
                Some(track) => ScreenViewModel::Detail(present_track_detail(track)),
                None => ScreenViewModel::NotFound(present_not_found(&Missing::Track(
                    track.clone(),
                ))),
            },
            Screen::NotFound(missing) => ScreenViewModel::NotFound(present_not_found(missing)),
        };

        let context = if self.search.is_focused() {
            HintContext::Search
        } else {
            self.screen.hint_context()
        };

        BrowseScreenViewModel {
            path: self.route.to_string(),
            navbar,
            screen,
            key_hints: present_key_hints(context),
        }
    }

    pub fn render(&self, f: &mut Frame) {
        let vm = self.view_model();
        let size = f.area();

        // Layout: [Navbar | Page | Status Bar]
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(size);

        f.render_widget(NavbarView::new(&vm.navbar), chunks[0]);

        let page = chunks[1].inner(ratatui::layout::Margin::new(1, 0));
        match &vm.screen {
            ScreenViewModel::Home(home) => f.render_widget(HomeView::new(home), page),
            ScreenViewModel::Catalog(catalog) => {
                f.render_widget(CatalogScreenView::new(catalog), page)
            }
            ScreenViewModel::Detail(detail) => {
                let scroll = match &self.screen {
                    Screen::Detail { scroll, .. } => *scroll,
                    _ => 0,
                };
                f.render_widget(TrackDetailView::new(detail).scroll(scroll), page)
            }
            ScreenViewModel::NotFound(missing) => {
                f.render_widget(NotFoundView::new(missing), page)
            }
        }

        f.render_widget(StatusBarView::new(&vm.key_hints, &vm.path), chunks[2]);

        let dropdown = SearchDropdownView::new(&vm.navbar.search);
        if vm.navbar.search.visible {
            f.render_widget(dropdown, dropdown_area(size, chunks[0], &vm));
        }
    }
}

/// Below the search box, right-aligned, clipped to the frame
fn dropdown_area(frame: Rect, navbar: Rect, vm: &BrowseScreenViewModel) -> Rect {
    let width = SEARCH_BOX_WIDTH.min(frame.width);
    let x = frame.right().saturating_sub(width);
    let y = navbar.bottom().min(frame.bottom());
    let wanted = SearchDropdownView::new(&vm.navbar.search).height();
    Rect::new(x, y, width, wanted.min(frame.bottom().saturating_sub(y)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use devpath_engine::SelectionPhase;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::Duration;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_at(path: &str, now: Instant) -> App {
        App::new(Catalog::builtin(), Timing::default(), Route::parse(path), now)
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_unknown_track_renders_fallback() {
        let app = app_at("/roadmap/not-a-real-track", Instant::now());
        let text = screen_text(&app);

        assert!(text.contains("Roadmap not found"));
        assert!(text.contains("Return to Roadmaps"));
        assert!(!text.contains("Technologies You'll Learn"));
    }

    #[test]
    fn test_detail_page_renders_track() {
        let app = app_at("/roadmap/frontend", Instant::now());
        let text = screen_text(&app);

        assert!(text.contains("Frontend Development"));
        assert!(text.contains("Technologies You'll Learn"));
        assert!(text.contains("HTML5 & CSS3"));
    }

    #[test]
    fn test_catalog_shows_skeleton_then_cards() {
        let start = Instant::now();
        let mut app = app_at("/roadmap", start);
        assert!(!screen_text(&app).contains("Frontend Development"));
        assert_eq!(app.next_deadline(), Some(start + Timing::DEFAULT_LOADING));

        app.tick(start + Timing::DEFAULT_LOADING);
        let text = screen_text(&app);
        assert!(text.contains("Frontend Development"));
        assert!(text.contains("Select a path to begin"));
        assert_eq!(app.next_deadline(), None);
    }

    #[test]
    fn test_leaving_catalog_cancels_pending_timers() {
        let start = Instant::now();
        let mut app = app_at("/roadmap", start);
        app.tick(start + Timing::DEFAULT_LOADING);
        app.handle_key(press(KeyCode::Enter), start + Duration::from_secs(2));
        assert!(app.next_deadline().is_some());

        app.handle_key(press(KeyCode::Char('1')), start + Duration::from_secs(2));
        assert_eq!(app.route(), &Route::Home);
        assert!(matches!(app.screen(), Screen::Home));
        assert_eq!(app.next_deadline(), None);
    }

    #[test]
    fn test_search_lands_on_catalog_with_preselection() {
        let start = Instant::now();
        let mut app = app_at("/", start);

        app.handle_key(press(KeyCode::Char('/')), start);
        for c in "node".chars() {
            app.handle_key(press(KeyCode::Char(c)), start);
        }
        assert!(screen_text(&app).contains("Backend Development"));

        app.handle_key(press(KeyCode::Enter), start);
        assert_eq!(app.route().to_string(), "/roadmap?selected=backend");
        let Screen::Catalog(component) = app.screen() else {
            panic!("search must land on the catalog");
        };
        assert_eq!(
            component.view().phase(),
            SelectionPhase::Selected(TrackId::new("backend"))
        );
    }

    #[test]
    fn test_start_learning_opens_detail_and_back_returns() {
        let start = Instant::now();
        let mut app = app_at("/roadmap?selected=devops", start);
        app.tick(start + Timing::DEFAULT_LOADING);
        assert!(screen_text(&app).contains("Start Learning"));

        app.handle_key(press(KeyCode::Char('o')), start);
        assert_eq!(app.route().to_string(), "/roadmap/devops");

        app.handle_key(press(KeyCode::Char('b')), start);
        assert_eq!(app.route(), &Route::catalog());
    }

    #[test]
    fn test_sections_render_not_found() {
        let start = Instant::now();
        let mut app = app_at("/", start);
        app.handle_key(press(KeyCode::Char('r')), start);
        assert_eq!(app.route().to_string(), "/resources");
        assert!(screen_text(&app).contains("Page not found"));
    }

    #[test]
    fn test_escape_closes_search_before_quitting() {
        let start = Instant::now();
        let mut app = app_at("/", start);
        app.handle_key(press(KeyCode::Char('/')), start);
        app.handle_key(press(KeyCode::Char('x')), start);
        app.handle_key(press(KeyCode::Esc), start);
        assert!(!app.should_quit());
        assert!(!app.search().is_focused());

        app.handle_key(press(KeyCode::Esc), start);
        assert!(app.should_quit());
    }

    #[test]
    fn test_release_events_are_ignored() {
        let start = Instant::now();
        let mut app = app_at("/", start);
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        app.handle_key(key, start);
        assert!(!app.should_quit());
    }
}
