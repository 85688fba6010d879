use std::time::{Duration, Instant};

use devpath_engine::{
    Catalog, CatalogView, Missing, Page, Route, SearchPanel, SelectionPhase, Timing, filter_tracks,
};
use devpath_types::{Difficulty, Technology, Track, TrackId};

fn tech(name: &str) -> Technology {
    Technology {
        name: name.to_string(),
        description: format!("{} basics", name),
        level: Difficulty::Intermediate,
        resources: None,
    }
}

fn two_track_catalog() -> Catalog {
    Catalog::from_tracks(vec![
        Track {
            id: TrackId::new("frontend"),
            title: "Frontend Development".to_string(),
            description: "User interfaces in the browser".to_string(),
            icon: "🎨".to_string(),
            difficulty: Difficulty::Beginner,
            estimated_time: "6-8 months".to_string(),
            prerequisites: None,
            technologies: vec![tech("HTML5 & CSS3"), tech("React")],
        },
        Track {
            id: TrackId::new("backend"),
            title: "Backend Development".to_string(),
            description: "Server-side applications and APIs".to_string(),
            icon: "⚙️".to_string(),
            difficulty: Difficulty::Intermediate,
            estimated_time: "8-10 months".to_string(),
            prerequisites: Some(vec!["Basic programming concepts".to_string()]),
            technologies: vec![tech("Node.js"), tech("Databases")],
        },
    ])
    .expect("valid catalog")
}

fn ids(tracks: &[&Track]) -> Vec<String> {
    tracks.iter().map(|t| t.id.to_string()).collect()
}

#[test]
fn test_search_scenario_react_node_zzz() {
    let catalog = two_track_catalog();

    for query in ["react", "REACT", "ReAcT"] {
        assert_eq!(ids(&filter_tracks(&catalog, query)), vec!["frontend"]);
    }
    assert_eq!(ids(&filter_tracks(&catalog, "node")), vec!["backend"]);
    assert!(filter_tracks(&catalog, "zzz").is_empty());
}

#[test]
fn test_filter_matches_exactly_the_expected_subset() {
    let catalog = Catalog::builtin();
    let queries = [
        "", " ", "a", "dev", "DEV", "learn", "python", "data", "unreal", "🎨", "js", "x",
        "Machine", "cloud", "-",
    ];

    for query in queries {
        let needle = query.to_lowercase();
        let expected: Vec<&Track> = if query.is_empty() {
            Vec::new()
        } else {
            catalog
                .iter()
                .filter(|t| {
                    t.title.to_lowercase().contains(&needle)
                        || t.description.to_lowercase().contains(&needle)
                        || t
                            .technologies
                            .iter()
                            .any(|tech| tech.name.to_lowercase().contains(&needle))
                })
                .collect()
        };

        let first = filter_tracks(&catalog, query);
        assert_eq!(first, expected, "query {:?}", query);
        assert_eq!(
            filter_tracks(&catalog, query),
            first, "idempotent {:?}", query
        );
    }
}

#[test]
fn test_lookup_known_and_unknown_ids() {
    let catalog = Catalog::builtin();
    for track in catalog.tracks() {
        assert_eq!(catalog.get(track.id.as_str()), Some(track));
    }
    assert_eq!(catalog.get("not-a-real-track"), None);
}

#[test]
fn test_selection_scenario_with_transition_delays() {
    let catalog = two_track_catalog();
    let start = Instant::now();
    let delay = Timing::DEFAULT_TRANSITION;
    let frontend = TrackId::new("frontend");

    let mut view = CatalogView::new(Timing::default(), start);
    view.advance(start + Timing::DEFAULT_LOADING);
    assert_eq!(view.phase(), SelectionPhase::Idle);

    let t1 = start + Timing::DEFAULT_LOADING;
    view.select_track(&frontend, t1);
    view.advance(t1 + delay);
    assert_eq!(view.phase(), SelectionPhase::Selected(frontend.clone()));

    assert!(view.toggle_technology(&catalog, "React"));

    let t2 = t1 + delay + Duration::from_millis(10);
    view.select_track(&frontend, t2);
    assert_eq!(view.state().expanded(), None);
    view.advance(t2 + delay);
    assert_eq!(view.phase(), SelectionPhase::Idle);
}

#[test]
fn test_switching_tracks_resets_expansion() {
    let catalog = two_track_catalog();
    let start = Instant::now();
    let mut view = CatalogView::new(Timing::default(), start);

    view.select_track(&TrackId::new("frontend"), start);
    view.advance(start + Duration::from_millis(300));
    view.toggle_technology(&catalog, "HTML5 & CSS3");
    assert_eq!(view.state().expanded(), Some("HTML5 & CSS3"));

    let later = start + Duration::from_millis(400);
    view.select_track(&TrackId::new("backend"), later);
    assert_eq!(view.state().expanded(), None);
    assert_eq!(
        view.phase(),
        SelectionPhase::Transitioning {
            target: Some(TrackId::new("backend"))
        }
    );
}

#[test]
fn test_unknown_track_route_is_not_found() {
    let catalog = two_track_catalog();
    let page = Route::parse("/roadmap/not-a-real-track").resolve(&catalog);
    assert_eq!(
        page,
        Page::NotFound(Missing::Track(TrackId::new("not-a-real-track")))
    );
}

#[test]
fn test_search_selection_lands_on_catalog_with_preselection() {
    let catalog = two_track_catalog();
    let mut panel = SearchPanel::new();
    panel.set_query(&catalog, "databases");
    let chosen = panel.results()[0].clone();

    let route = panel.select(&chosen);
    assert_eq!(route.to_string(), "/roadmap?selected=backend");

    let Route::Catalog { selected } = &route else {
        panic!("search must land on the catalog view");
    };
    let view = CatalogView::with_preselected(
        &catalog,
        selected.as_ref(),
        Timing::default(),
        Instant::now(),
    );
    assert_eq!(view.phase(), SelectionPhase::Selected(chosen));
}
