pub mod browse;
pub mod route;
pub mod search;
pub mod track;

pub use browse::{
    HintContext, present_catalog_screen, present_home, present_key_hints, present_navbar,
};
pub use route::{present_page, present_route};
pub use search::{present_search_hit, present_search_results};
pub use track::{
    present_catalog_list, present_not_found, present_technology, present_track_detail,
    present_track_page, present_track_summary,
};
