use owo_colors::OwoColorize;
use std::fmt;

use super::track::NotFoundView;
use crate::presentation::view_models::{PageViewModel, RouteViewModel};

pub struct RouteView<'a> {
    data: &'a RouteViewModel,
}

impl<'a> RouteView<'a> {
    pub fn new(data: &'a RouteViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for RouteView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Path:  {}", self.data.requested)?;
        if self.data.canonical != self.data.requested {
            writeln!(f, "Canonical: {}", self.data.canonical.dimmed())?;
        }

        match &self.data.page {
            PageViewModel::Home => writeln!(f, "Page:  {}", "home".green())?,
            PageViewModel::Catalog { selected: None } => {
                writeln!(f, "Page:  {}", "catalog".green())?
            }
            PageViewModel::Catalog {
                selected: Some(id),
            } => writeln!(f, "Page:  {} (selected: {})", "catalog".green(), id.cyan())?,
            PageViewModel::Detail { track_id } => {
                writeln!(f, "Page:  {} ({})", "detail".green(), track_id.cyan())?
            }
            PageViewModel::NotFound(missing) => {
                writeln!(f, "Page:  {}", "not found".yellow())?;
                writeln!(f)?;
                write!(f, "{}", NotFoundView::new(missing))?;
            }
        }
        Ok(())
    }
}
