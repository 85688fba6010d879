//! Navigation addressing.
//!
//! Every page is reachable through a path such as `/roadmap/frontend` or
//! `/roadmap?selected=backend`. Parsing is total: anything unrecognized becomes
//! `Route::Unknown`, and resolving a route against the catalog turns missing
//! tracks into `Page::NotFound` instead of failing.

use std::fmt;

use devpath_types::{Track, TrackId};

use crate::catalog::Catalog;

/// Navbar entries that have no page of their own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Resources,
    Blog,
    Community,
}

impl Section {
    pub fn slug(&self) -> &'static str {
        match self {
            Section::Resources => "resources",
            Section::Blog => "blog",
            Section::Community => "community",
        }
    }

    fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "resources" => Some(Section::Resources),
            "blog" => Some(Section::Blog),
            "community" => Some(Section::Community),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    /// Card grid, optionally with a track preselected by search
    Catalog { selected: Option<TrackId> },
    /// Detail page of one track
    Track(TrackId),
    Section(Section),
    Unknown(String),
}

impl Route {
    pub fn catalog() -> Self {
        Route::Catalog { selected: None }
    }

    /// Parse a navigable path. Never fails.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let (path, query) = match input.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (input, None),
        };

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["roadmap"] => Route::Catalog {
                selected: query.and_then(selected_param),
            },
            ["roadmap", id] => Route::Track(TrackId::new(*id)),
            [slug] => match Section::from_slug(slug) {
                Some(section) => Route::Section(section),
                None => Route::Unknown(canonical_unknown(input)),
            },
            _ => Route::Unknown(canonical_unknown(input)),
        }
    }

    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Page<'a> {
        match self {
            Route::Home => Page::Home,
            Route::Catalog { selected } => Page::Catalog {
                selected: selected.as_ref().and_then(|id| catalog.get(id.as_str())),
            },
            Route::Track(id) => match catalog.get(id.as_str()) {
                Some(track) => Page::Detail(track),
                None => {
                    tracing::debug!(track = %id, "Unknown track requested");
                    Page::NotFound(Missing::Track(id.clone()))
                }
            },
            Route::Section(_) | Route::Unknown(_) => {
                Page::NotFound(Missing::Page(self.to_string()))
            }
        }
    }
}

/// Unrecognized paths keep their text but always start with `/`
fn canonical_unknown(input: &str) -> String {
    if input.starts_with('/') {
        input.to_string()
    } else {
        format!("/{}", input)
    }
}

/// Value of the `selected` query parameter, if present and non-empty
fn selected_param(query: &str) -> Option<TrackId> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "selected")
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
        .map(TrackId::new)
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Catalog { selected: None } => write!(f, "/roadmap"),
            Route::Catalog { selected: Some(id) } => write!(f, "/roadmap?selected={}", id),
            Route::Track(id) => write!(f, "/roadmap/{}", id),
            Route::Section(section) => write!(f, "/{}", section.slug()),
            Route::Unknown(path) => write!(f, "{}", path),
        }
    }
}

impl From<&str> for Route {
    fn from(path: &str) -> Self {
        Route::parse(path)
    }
}

/// What a route points at once checked against the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page<'a> {
    Home,
    Catalog { selected: Option<&'a Track> },
    Detail(&'a Track),
    NotFound(Missing),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Missing {
    Track(TrackId),
    Page(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
}

/// Navbar entries in display order
pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem {
            label: "Home",
            route: Route::Home,
        },
        NavItem {
            label: "Roadmap",
            route: Route::catalog(),
        },
        NavItem {
            label: "Resources",
            route: Route::Section(Section::Resources),
        },
        NavItem {
            label: "Blog",
            route: Route::Section(Section::Blog),
        },
        NavItem {
            label: "Community",
            route: Route::Section(Section::Community),
        },
    ]
}
