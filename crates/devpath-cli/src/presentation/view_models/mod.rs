pub mod browse;
pub mod common;
pub mod result;
pub mod route;
pub mod search;
pub mod track;

pub use browse::*;
pub use common::{Guidance, StatusBadge, StatusLevel};
pub use result::CommandResultViewModel;
pub use route::{PageViewModel, RouteViewModel};
pub use search::{SearchHitViewModel, SearchResultsViewModel};
pub use track::{
    CatalogListViewModel, MissingKind, NotFoundViewModel, TechnologyViewModel,
    TrackDetailViewModel, TrackPageViewModel, TrackSummaryViewModel,
};
