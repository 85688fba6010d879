// Engine module - catalog store, search and view-state logic
// This layer sits between the catalog types and CLI presentation

pub mod catalog;
pub mod error;
pub mod route;
pub mod search;
pub mod selection;
pub mod timer;
pub mod view;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use route::{Missing, NavItem, Page, Route, Section, nav_items};
pub use search::{SearchPanel, filter_tracks};
pub use selection::{SelectOutcome, SelectionPhase, Timing, ViewState};
pub use timer::{TimerId, TimerQueue};
pub use view::{CatalogView, ViewTimer};

use devpath_types::Track;

// Façade API - Stable public interface for CLI layer

/// Look a track up by id; absence is a normal answer, not an error
pub fn find_track<'a>(catalog: &'a Catalog, id: &str) -> Option<&'a Track> {
    catalog.get(id)
}

/// Search the catalog the way the search box does
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Track> {
    filter_tracks(catalog, query)
}
