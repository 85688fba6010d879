//! Navbar search box: query editing, result highlight, selection.

use crossterm::event::{KeyCode, KeyEvent};
use devpath_engine::{Catalog, Route, SearchPanel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// A result was chosen; go to the catalog with it preselected
    Navigate(Route),
    /// Focus left the box
    Closed,
}

#[derive(Debug, Default)]
pub struct SearchComponent {
    panel: SearchPanel,
    focused: bool,
    highlighted: usize,
}

impl SearchComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel(&self) -> &SearchPanel {
        &self.panel
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Drop focus and the query
    pub fn close(&mut self) {
        self.focused = false;
        self.highlighted = 0;
        self.panel.clear();
    }

    pub fn handle_input(&mut self, key: KeyEvent, catalog: &Catalog) -> Option<SearchAction> {
        match key.code {
            KeyCode::Esc => {
                self.close();
                Some(SearchAction::Closed)
            }
            KeyCode::Enter => {
                let id = self.panel.results().get(self.highlighted).cloned()?;
                let route = self.panel.select(&id);
                self.focused = false;
                self.highlighted = 0;
                Some(SearchAction::Navigate(route))
            }
            KeyCode::Down => {
                let count = self.panel.results().len();
                if count > 0 {
                    self.highlighted = (self.highlighted + 1).min(count - 1);
                }
                None
            }
            KeyCode::Up => {
                self.highlighted = self.highlighted.saturating_sub(1);
                None
            }
            KeyCode::Backspace => {
                self.panel.pop_char(catalog);
                self.highlighted = 0;
                None
            }
            KeyCode::Char(c) => {
                self.panel.push_char(catalog, c);
                self.highlighted = 0;
                None
            }
            _ => None,
        }
    }
}
