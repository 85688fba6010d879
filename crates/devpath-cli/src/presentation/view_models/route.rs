use serde::Serialize;
use std::fmt;

use super::track::NotFoundViewModel;

#[derive(Debug, Clone, Serialize)]
pub struct RouteViewModel {
    pub requested: String,
    pub canonical: String,
    pub page: PageViewModel,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageViewModel {
    Home,
    Catalog { selected: Option<String> },
    Detail { track_id: String },
    NotFound(NotFoundViewModel),
}

impl fmt::Display for RouteViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::presentation::views::route::RouteView;
        write!(f, "{}", RouteView::new(self))
    }
}
