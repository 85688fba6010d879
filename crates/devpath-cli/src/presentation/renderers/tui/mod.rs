//! TUI Renderer for the interactive browser
//!
//! ## Design:
//! - `App` owns UI state (route, mounted page, search box)
//! - The renderer owns the terminal and the event loop
//! - Page timers are driven from here: the poll timeout never overshoots the
//!   next pending deadline, so transitions end on time without sleeping

mod app;
mod components;

pub use app::{App, Screen};
pub use components::{CatalogAction, CatalogComponent, SearchAction, SearchComponent};

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};

/// Upper bound on how long the loop waits for input
const TICK_RATE: Duration = Duration::from_millis(250);

pub struct TuiRenderer {
    tick_rate: Duration,
}

impl TuiRenderer {
    pub fn new() -> Self {
        Self {
            tick_rate: TICK_RATE,
        }
    }

    /// Take over the terminal until the user quits
    pub fn run(self, mut app: App) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal, &mut app);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<B: Backend>(&self, terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
        while !app.should_quit() {
            app.tick(Instant::now());
            terminal.draw(|f| app.render(f))?;

            if event::poll(self.poll_timeout(app.next_deadline(), Instant::now()))?
                && let Event::Key(key) = event::read()?
            {
                app.handle_key(key, Instant::now());
            }
        }
        tracing::info!(path = %app.route(), "Browser closed");
        Ok(())
    }

    fn poll_timeout(&self, deadline: Option<Instant>, now: Instant) -> Duration {
        match deadline {
            Some(deadline) => deadline.saturating_duration_since(now).min(self.tick_rate),
            None => self.tick_rate,
        }
    }
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_timeout_respects_deadline() {
        let renderer = TuiRenderer::new();
        let now = Instant::now();

        assert_eq!(renderer.poll_timeout(None, now), TICK_RATE);
        assert_eq!(
            renderer.poll_timeout(Some(now + Duration::from_millis(40)), now),
            Duration::from_millis(40)
        );
        assert_eq!(
            renderer.poll_timeout(Some(now + Duration::from_secs(5)), now),
            TICK_RATE
        );
        assert_eq!(
            renderer.poll_timeout(Some(now - Duration::from_millis(1)), now),
            Duration::ZERO
        );
    }
}
