use devpath_engine::{Catalog, Missing, Route};
use devpath_types::{Difficulty, Technology, Track, TrackId};

use crate::presentation::view_models::{
    CatalogListViewModel, CommandResultViewModel, Guidance, MissingKind, NotFoundViewModel,
    StatusBadge, TechnologyViewModel, TrackDetailViewModel, TrackPageViewModel,
    TrackSummaryViewModel,
};

pub fn present_track_summary(track: &Track) -> TrackSummaryViewModel {
    TrackSummaryViewModel {
        id: track.id.to_string(),
        title: track.title.clone(),
        description: track.description.clone(),
        icon: track.icon.clone(),
        difficulty: track.difficulty,
        estimated_time: track.estimated_time.clone(),
        technology_count: track.technologies.len(),
    }
}

pub fn present_technology(tech: &Technology) -> TechnologyViewModel {
    TechnologyViewModel {
        name: tech.name.clone(),
        description: tech.description.clone(),
        level: tech.level,
        resources: tech.resources().to_vec(),
    }
}

pub fn present_track_detail(track: &Track) -> TrackDetailViewModel {
    TrackDetailViewModel {
        id: track.id.to_string(),
        path: Route::Track(track.id.clone()).to_string(),
        title: track.title.clone(),
        description: track.description.clone(),
        icon: track.icon.clone(),
        difficulty: track.difficulty,
        estimated_time: track.estimated_time.clone(),
        prerequisites: track.prerequisites().to_vec(),
        technologies: track.technologies.iter().map(present_technology).collect(),
        back_path: Route::catalog().to_string(),
    }
}

pub fn present_not_found(missing: &Missing) -> NotFoundViewModel {
    let (kind, requested) = match missing {
        Missing::Track(id) => (MissingKind::Track, Route::Track(id.clone()).to_string()),
        Missing::Page(path) => (MissingKind::Page, path.clone()),
    };
    NotFoundViewModel {
        kind,
        requested,
        back_path: Route::catalog().to_string(),
    }
}

/// `show <id>`: the detail page, or the fallback page for an unknown id
pub fn present_track_page(
    catalog: &Catalog,
    id: &str,
) -> CommandResultViewModel<TrackPageViewModel> {
    match catalog.get(id) {
        Some(track) => {
            CommandResultViewModel::new(TrackPageViewModel::Found(present_track_detail(track)))
        }
        None => {
            let missing = Missing::Track(TrackId::new(id));
            CommandResultViewModel::new(TrackPageViewModel::NotFound(present_not_found(&missing)))
                .with_suggestion(
                    Guidance::new("List the available roadmaps").with_command("devpath list"),
                )
        }
    }
}

pub fn present_catalog_list(
    catalog: &Catalog,
    difficulty: Option<Difficulty>,
) -> CommandResultViewModel<CatalogListViewModel> {
    let tracks: Vec<TrackSummaryViewModel> = catalog
        .iter()
        .filter(|track| difficulty.is_none_or(|d| track.difficulty == d))
        .map(present_track_summary)
        .collect();

    let content = CatalogListViewModel {
        total_count: catalog.len(),
        difficulty_filter: difficulty,
        tracks,
    };

    let mut result = CommandResultViewModel::new(content);
    if let Some(first) = result.content.tracks.first() {
        let command = format!("devpath show {}", first.id);
        result = result.with_suggestion(Guidance::new("Open a roadmap").with_command(command));
    } else if difficulty.is_some() {
        result = result.with_badge(StatusBadge::info("No roadmaps at this difficulty"));
    }
    result
}
