//! Catalog search.
//!
//! A track matches when the query is a case-insensitive substring of its
//! title, its description, or any of its technology names. The empty query
//! matches nothing and keeps the result panel closed. Every query change
//! rescans the whole catalog; results keep catalog order.

use devpath_types::{Track, TrackId};

use crate::catalog::Catalog;
use crate::route::Route;

/// Tracks matching `query`, in catalog order
pub fn filter_tracks<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Track> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|track| track_matches(track, &needle))
        .collect()
}

/// `needle` must already be lowercased
fn track_matches(track: &Track, needle: &str) -> bool {
    contains_folded(&track.title, needle)
        || contains_folded(&track.description, needle)
        || track
            .technologies
            .iter()
            .any(|tech| contains_folded(&tech.name, needle))
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Search box state: the query being typed and the ids it currently matches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPanel {
    query: String,
    results: Vec<TrackId>,
    open: bool,
}

impl SearchPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[TrackId] {
        &self.results
    }

    /// Open whenever the query is non-empty, even with no matches
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The dropdown is only shown when something matched
    pub fn is_visible(&self) -> bool {
        self.open && !self.results.is_empty()
    }

    pub fn set_query(&mut self, catalog: &Catalog, query: impl Into<String>) {
        self.query = query.into();
        self.recompute(catalog);
    }

    pub fn push_char(&mut self, catalog: &Catalog, c: char) {
        self.query.push(c);
        self.recompute(catalog);
    }

    pub fn pop_char(&mut self, catalog: &Catalog) {
        self.query.pop();
        self.recompute(catalog);
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
        self.open = false;
    }

    /// Forward to the catalog view with `id` preselected, then reset the box
    pub fn select(&mut self, id: &TrackId) -> Route {
        tracing::debug!(track = %id, query = %self.query, "Search result selected");
        self.clear();
        Route::Catalog {
            selected: Some(id.clone()),
        }
    }

    fn recompute(&mut self, catalog: &Catalog) {
        if self.query.is_empty() {
            self.results.clear();
            self.open = false;
            return;
        }

        self.results = filter_tracks(catalog, &self.query)
            .into_iter()
            .map(|track| track.id.clone())
            .collect();
        self.open = true;
        tracing::debug!(
            query = %self.query,
            matches = self.results.len(),
            "Search results recomputed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(tracks: Vec<&Track>) -> Vec<&str> {
        tracks.into_iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let catalog = Catalog::builtin();
        assert!(filter_tracks(&catalog, "").is_empty());
    }

    #[test]
    fn test_matches_title_description_and_technology_names() {
        let catalog = Catalog::builtin();

        // title
        assert_eq!(ids(filter_tracks(&catalog, "CYBER")), vec!["cybersecurity"]);
        // description
        assert_eq!(
            ids(filter_tracks(&catalog, "smart contracts")),
            vec!["blockchain"]
        );
        // technology name
        assert_eq!(ids(filter_tracks(&catalog, "pytorch")), vec!["ai-ml"]);
        // technology descriptions are not searched
        assert!(filter_tracks(&catalog, "scikit").is_empty());
    }

    #[test]
    fn test_results_follow_catalog_order() {
        let catalog = Catalog::builtin();
        assert_eq!(
            ids(filter_tracks(&catalog, "react")),
            vec!["frontend", "mobile"]
        );
        assert_eq!(ids(filter_tracks(&catalog, "node")), vec!["backend"]);
        assert!(filter_tracks(&catalog, "zzz").is_empty());
    }

    #[test]
    fn test_whitespace_query_is_a_real_query() {
        let catalog = Catalog::builtin();
        assert_eq!(filter_tracks(&catalog, " ").len(), catalog.len());
    }

    #[test]
    fn test_panel_opens_and_closes_with_query() {
        let catalog = Catalog::builtin();
        let mut panel = SearchPanel::new();
        assert!(!panel.is_open());

        panel.set_query(&catalog, "swift");
        assert!(panel.is_open());
        assert!(panel.is_visible());
        assert_eq!(panel.results(), [TrackId::new("mobile")]);

        panel.set_query(&catalog, "zzz");
        assert!(panel.is_open());
        assert!(!panel.is_visible());
        assert!(panel.results().is_empty());

        panel.set_query(&catalog, "");
        assert!(!panel.is_open());
        assert!(panel.results().is_empty());
    }

    #[test]
    fn test_typing_recomputes_from_scratch() {
        let catalog = Catalog::builtin();
        let mut panel = SearchPanel::new();
        for c in "dev".chars() {
            panel.push_char(&catalog, c);
        }
        assert_eq!(panel.results().len(), 8);

        panel.push_char(&catalog, 'o');
        assert_eq!(
            panel.results(),
            [TrackId::new("fullstack"), TrackId::new("devops")]
        );

        panel.pop_char(&catalog);
        assert_eq!(panel.results().len(), 8);

        for _ in 0..3 {
            panel.pop_char(&catalog);
        }
        assert!(!panel.is_open());
    }

    #[test]
    fn test_select_forwards_to_catalog_and_resets() {
        let catalog = Catalog::builtin();
        let mut panel = SearchPanel::new();
        panel.set_query(&catalog, "unity");

        let id = panel.results()[0].clone();
        let route = panel.select(&id);

        assert_eq!(route.to_string(), "/roadmap?selected=game-dev");
        assert_eq!(panel.query(), "");
        assert!(!panel.is_open());
    }
}
