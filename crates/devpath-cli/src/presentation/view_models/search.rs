use serde::Serialize;
use std::fmt;

use super::track::TrackSummaryViewModel;

#[derive(Debug, Clone, Serialize)]
pub struct SearchResultsViewModel {
    pub query: String,
    /// False only for the empty query
    pub open: bool,
    pub results: Vec<SearchHitViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchHitViewModel {
    #[serde(flatten)]
    pub track: TrackSummaryViewModel,
    /// Where choosing this result navigates
    pub path: String,
}

impl fmt::Display for SearchResultsViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::presentation::views::search::SearchResultsView;
        write!(f, "{}", SearchResultsView::new(self))
    }
}
