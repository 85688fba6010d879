use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::view_models::SearchResultsViewModel;

pub struct SearchResultsView<'a> {
    data: &'a SearchResultsViewModel,
}

impl<'a> SearchResultsView<'a> {
    pub fn new(data: &'a SearchResultsViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for SearchResultsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // An empty query keeps the dropdown closed
        if !self.data.open {
            return Ok(());
        }

        if self.data.results.is_empty() {
            writeln!(f, "No roadmaps match \"{}\".", self.data.query)?;
            return Ok(());
        }

        for hit in &self.data.results {
            writeln!(f, "{} {}", hit.track.icon, hit.track.title.bold())?;
            writeln!(f, "   {}", hit.track.description)?;
            writeln!(f, "   {}", hit.path.cyan())?;
        }
        Ok(())
    }
}
