//! Screen snapshots for the interactive browser.
//!
//! Built fresh for every frame by `presenters::browse`, consumed by the
//! widgets in `views::tui`. UI state (cursors, focus) is read from the
//! components when the snapshot is built and never written back.

use serde::Serialize;

use super::track::{
    NotFoundViewModel, TechnologyViewModel, TrackDetailViewModel, TrackSummaryViewModel,
};

#[derive(Debug, Clone, Serialize)]
pub struct BrowseScreenViewModel {
    pub path: String,
    pub navbar: NavbarViewModel,
    pub screen: ScreenViewModel,
    pub key_hints: Vec<KeyHint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavbarViewModel {
    pub brand: String,
    pub items: Vec<NavItemViewModel>,
    pub search: SearchBoxViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItemViewModel {
    pub hotkey: char,
    pub label: String,
    pub path: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchBoxViewModel {
    pub query: String,
    pub focused: bool,
    /// Dropdown is drawn only when true (open and something matched)
    pub visible: bool,
    pub results: Vec<SearchDropdownItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchDropdownItem {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenViewModel {
    Home(HomeViewModel),
    Catalog(CatalogScreenViewModel),
    Detail(TrackDetailViewModel),
    NotFound(NotFoundViewModel),
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeViewModel {
    pub title: String,
    pub tagline: String,
    pub actions: Vec<HomeActionViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeActionViewModel {
    pub key: String,
    pub label: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogScreenViewModel {
    pub heading: String,
    pub subheading: String,
    /// Placeholder cards are drawn instead of the catalog while true
    pub loading: bool,
    pub transitioning: bool,
    pub cards: Vec<CardViewModel>,
    /// Present only for a selected track once its transition has settled
    pub detail: Option<CardDetailViewModel>,
    pub call_to_action: CallToAction,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardViewModel {
    #[serde(flatten)]
    pub track: TrackSummaryViewModel,
    pub selected: bool,
    pub focused: bool,
    /// Selected while a transition is in flight (spinner overlay)
    pub busy: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardDetailViewModel {
    pub track_id: String,
    pub title: String,
    pub estimated_time: String,
    pub prerequisites: Vec<String>,
    pub technologies: Vec<TechnologyRowViewModel>,
    pub open_path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TechnologyRowViewModel {
    #[serde(flatten)]
    pub technology: TechnologyViewModel,
    pub expanded: bool,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CallToAction {
    /// Nothing selected yet
    Disabled,
    /// A transition is in flight
    Busy,
    Ready { path: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyHint {
    pub keys: String,
    pub action: String,
}

impl KeyHint {
    pub fn new(keys: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            keys: keys.into(),
            action: action.into(),
        }
    }
}
