//! TUI View Components
//!
//! Ratatui widgets for the interactive browser. Each one is a thin wrapper
//! around a ViewModel reference that implements `Widget`.
//!
//! ## Design Principles:
//! - Views take a reference to ViewModel (no ownership)
//! - No selection logic or timers here; only layout and styling
//! - Colour mapping from Difficulty / StatusLevel happens here

pub mod catalog;
pub mod detail;
pub mod home;
pub mod navbar;
pub mod not_found;
pub mod search_box;
pub mod status_bar;

pub use catalog::{CARD_COLUMNS, CatalogScreenView};
pub use detail::TrackDetailView;
pub use home::HomeView;
pub use navbar::NavbarView;
pub use not_found::NotFoundView;
pub use search_box::SearchDropdownView;
pub use status_bar::StatusBarView;

use devpath_types::Difficulty;
use ratatui::style::Color;

pub(crate) fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Beginner => Color::Green,
        Difficulty::Intermediate => Color::Yellow,
        Difficulty::Advanced => Color::Red,
    }
}
