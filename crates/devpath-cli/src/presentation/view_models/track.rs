use devpath_types::Difficulty;
use serde::Serialize;
use std::fmt;

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

/// One card of the catalog
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TrackSummaryViewModel {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub difficulty: Difficulty,
    pub estimated_time: String,
    pub technology_count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TechnologyViewModel {
    pub name: String,
    pub description: String,
    pub level: Difficulty,
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TrackDetailViewModel {
    pub id: String,
    pub path: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub difficulty: Difficulty,
    pub estimated_time: String,
    pub prerequisites: Vec<String>,
    pub technologies: Vec<TechnologyViewModel>,
    pub back_path: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MissingKind {
    Track,
    Page,
}

/// Fallback page for paths that address nothing
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NotFoundViewModel {
    pub kind: MissingKind,
    pub requested: String,
    pub back_path: String,
}

/// Either the detail page or the fallback; never an error
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrackPageViewModel {
    Found(TrackDetailViewModel),
    NotFound(NotFoundViewModel),
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogListViewModel {
    pub tracks: Vec<TrackSummaryViewModel>,
    pub total_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty_filter: Option<Difficulty>,
}

// --------------------------------------------------------
// Display Trait (console rendering lives in views/)
// --------------------------------------------------------

impl fmt::Display for TrackPageViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::presentation::views::track::{NotFoundView, TrackDetailView};
        match self {
            TrackPageViewModel::Found(detail) => write!(f, "{}", TrackDetailView::new(detail)),
            TrackPageViewModel::NotFound(missing) => write!(f, "{}", NotFoundView::new(missing)),
        }
    }
}

impl fmt::Display for CatalogListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::presentation::views::track::CatalogListView;
        write!(f, "{}", CatalogListView::new(self))
    }
}
