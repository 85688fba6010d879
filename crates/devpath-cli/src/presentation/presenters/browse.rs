//! Snapshots for the interactive browser, rebuilt every frame.

use devpath_engine::{Catalog, CatalogView, Route, SearchPanel, nav_items};

use super::track::{present_technology, present_track_summary};
use crate::presentation::view_models::{
    CallToAction, CardDetailViewModel, CardViewModel, CatalogScreenViewModel, HomeActionViewModel,
    HomeViewModel, KeyHint, NavItemViewModel, NavbarViewModel, SearchBoxViewModel,
    SearchDropdownItem, TechnologyRowViewModel,
};

pub fn present_navbar(
    route: &Route,
    catalog: &Catalog,
    search: &SearchPanel,
    search_focused: bool,
    highlighted: usize,
) -> NavbarViewModel {
    let items = nav_items()
        .into_iter()
        .zip('1'..='9')
        .map(|(item, hotkey)| NavItemViewModel {
            hotkey,
            label: item.label.to_string(),
            path: item.route.to_string(),
            active: is_active(&item.route, route),
        })
        .collect();

    let results = search
        .results()
        .iter()
        .enumerate()
        .filter_map(|(index, id)| {
            catalog.get(id.as_str()).map(|track| SearchDropdownItem {
                icon: track.icon.clone(),
                title: track.title.clone(),
                description: track.description.clone(),
                highlighted: index == highlighted,
            })
        })
        .collect();

    NavbarViewModel {
        brand: "DevPath".to_string(),
        items,
        search: SearchBoxViewModel {
            query: search.query().to_string(),
            focused: search_focused,
            visible: search.is_visible(),
            results,
        },
    }
}

/// Detail pages count as being inside the roadmap section
fn is_active(item: &Route, current: &Route) -> bool {
    match (item, current) {
        (Route::Home, Route::Home) => true,
        (Route::Catalog { .. }, Route::Catalog { .. } | Route::Track(_)) => true,
        (Route::Section(a), Route::Section(b)) => a == b,
        _ => false,
    }
}

pub fn present_home() -> HomeViewModel {
    HomeViewModel {
        title: "Chart Your Path to Becoming a Developer".to_string(),
        tagline: "Step-by-step roadmaps, curated resources and a community to learn with."
            .to_string(),
        actions: vec![
            HomeActionViewModel {
                key: "Enter".to_string(),
                label: "Explore Roadmaps".to_string(),
                path: Route::catalog().to_string(),
            },
            HomeActionViewModel {
                key: "r".to_string(),
                label: "Browse Resources".to_string(),
                path: Route::parse("/resources").to_string(),
            },
        ],
    }
}

/// The catalog page as the user currently sees it
pub fn present_catalog_screen(
    catalog: &Catalog,
    view: &CatalogView,
    cursor: usize,
    tech_cursor: usize,
) -> CatalogScreenViewModel {
    let state = view.state();
    let transitioning = state.is_transitioning();

    let cards = catalog
        .iter()
        .enumerate()
        .map(|(index, track)| {
            let selected = state.is_selected(&track.id);
            CardViewModel {
                track: present_track_summary(track),
                selected,
                focused: index == cursor,
                busy: selected && transitioning,
            }
        })
        .collect();

    let settled = state
        .selected()
        .filter(|_| !transitioning)
        .and_then(|id| catalog.get(id.as_str()));

    let detail = settled.map(|track| CardDetailViewModel {
        track_id: track.id.to_string(),
        title: track.title.clone(),
        estimated_time: track.estimated_time.clone(),
        prerequisites: track.prerequisites().to_vec(),
        technologies: track
            .technologies
            .iter()
            .enumerate()
            .map(|(index, tech)| TechnologyRowViewModel {
                technology: present_technology(tech),
                expanded: state.expanded() == Some(tech.name.as_str()),
                focused: index == tech_cursor,
            })
            .collect(),
        open_path: Route::Track(track.id.clone()).to_string(),
    });

    let call_to_action = if transitioning {
        CallToAction::Busy
    } else {
        match settled {
            Some(track) => CallToAction::Ready {
                path: Route::Track(track.id.clone()).to_string(),
            },
            None => CallToAction::Disabled,
        }
    };

    CatalogScreenViewModel {
        heading: "Choose Your Learning Path".to_string(),
        subheading: "Select a roadmap to see the technologies you'll learn along the way."
            .to_string(),
        loading: state.is_loading(),
        transitioning,
        cards,
        detail,
        call_to_action,
    }
}

/// Which part of the browser has the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintContext {
    Search,
    Home,
    Catalog,
    Detail,
    NotFound,
}

pub fn present_key_hints(context: HintContext) -> Vec<KeyHint> {
    let mut hints = match context {
        HintContext::Search => {
            return vec![
                KeyHint::new("type", "filter"),
                KeyHint::new("↑/↓", "choose"),
                KeyHint::new("Enter", "open"),
                KeyHint::new("Esc", "close"),
            ];
        }
        HintContext::Home => vec![
            KeyHint::new("Enter", "roadmaps"),
            KeyHint::new("r", "resources"),
        ],
        HintContext::Catalog => vec![
            KeyHint::new("←↑↓→", "move"),
            KeyHint::new("Enter", "select"),
            KeyHint::new("Tab", "technology"),
            KeyHint::new("t", "expand"),
            KeyHint::new("o", "open"),
        ],
        HintContext::Detail | HintContext::NotFound => vec![KeyHint::new("b", "back")],
    };
    hints.push(KeyHint::new("/", "search"));
    hints.push(KeyHint::new("1-5", "navigate"));
    hints.push(KeyHint::new("q", "quit"));
    hints
}
