use devpath_engine::Route;
use devpath_types::Track;

use super::track::present_track_summary;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, SearchHitViewModel, SearchResultsViewModel,
};

pub fn present_search_hit(track: &Track) -> SearchHitViewModel {
    SearchHitViewModel {
        track: present_track_summary(track),
        path: Route::Catalog {
            selected: Some(track.id.clone()),
        }
        .to_string(),
    }
}

pub fn present_search_results(
    query: &str,
    hits: &[&Track],
) -> CommandResultViewModel<SearchResultsViewModel> {
    let content = SearchResultsViewModel {
        query: query.to_string(),
        open: !query.is_empty(),
        results: hits.iter().map(|track| present_search_hit(track)).collect(),
    };

    let mut result = CommandResultViewModel::new(content);
    if result.content.open && result.content.results.is_empty() {
        result = result.with_suggestion(
            Guidance::new("Browse every roadmap instead").with_command("devpath list"),
        );
    }
    result
}
