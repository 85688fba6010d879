use owo_colors::OwoColorize;
use std::fmt;

use devpath_types::Difficulty;

use crate::presentation::view_models::{
    CatalogListViewModel, MissingKind, NotFoundViewModel, TrackDetailViewModel,
};

/// Colour `text` by difficulty: green, yellow, red
fn paint(difficulty: Difficulty, text: &str) -> String {
    match difficulty {
        Difficulty::Beginner => text.green().to_string(),
        Difficulty::Intermediate => text.yellow().to_string(),
        Difficulty::Advanced => text.red().to_string(),
    }
}

fn difficulty_label(difficulty: Difficulty) -> String {
    paint(difficulty, difficulty.as_str())
}

// --------------------------------------------------------
// Catalog List View
// --------------------------------------------------------

pub struct CatalogListView<'a> {
    data: &'a CatalogListViewModel,
}

impl<'a> CatalogListView<'a> {
    pub fn new(data: &'a CatalogListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for CatalogListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.tracks.is_empty() {
            match self.data.difficulty_filter {
                Some(difficulty) => writeln!(f, "No {} roadmaps.", difficulty)?,
                None => writeln!(f, "No roadmaps in the catalog.")?,
            }
            return Ok(());
        }

        writeln!(
            f,
            "{:<18} {:<32} {:<14} {:<14} TECHS",
            "ID", "TITLE", "DIFFICULTY", "TIME"
        )?;
        writeln!(f, "{}", "-".repeat(88))?;

        for track in &self.data.tracks {
            // Pad before colouring so escape codes do not skew the columns
            let difficulty = paint(
                track.difficulty,
                &format!("{:<14}", track.difficulty.as_str()),
            );
            writeln!(
                f,
                "{:<18} {:<32} {} {:<14} {}",
                track.id,
                format!("{} {}", track.icon, track.title),
                difficulty,
                track.estimated_time,
                track.technology_count
            )?;
        }

        writeln!(f)?;
        writeln!(f, "{} of {} roadmaps", self.data.tracks.len(), self.data.total_count)?;
        Ok(())
    }
}

// --------------------------------------------------------
// Track Detail View
// --------------------------------------------------------

pub struct TrackDetailView<'a> {
    data: &'a TrackDetailViewModel,
}

impl<'a> TrackDetailView<'a> {
    pub fn new(data: &'a TrackDetailViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for TrackDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;

        writeln!(f, "{} {}", d.icon, d.title.bold())?;
        writeln!(f, "{}", d.description)?;
        writeln!(f)?;
        writeln!(f, "  Difficulty:     {}", difficulty_label(d.difficulty))?;
        writeln!(f, "  Estimated time: {}", d.estimated_time)?;

        if !d.prerequisites.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", "Prerequisites".bold())?;
            for prerequisite in &d.prerequisites {
                writeln!(f, "  • {}", prerequisite)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", "Technologies You'll Learn".bold())?;
        for (index, tech) in d.technologies.iter().enumerate() {
            writeln!(
                f,
                "  {:>2}. {} [{}]",
                index + 1,
                tech.name.cyan(),
                difficulty_label(tech.level)
            )?;
            writeln!(f, "      {}", tech.description)?;
            for resource in &tech.resources {
                writeln!(f, "      → {}", resource.dimmed())?;
            }
        }

        writeln!(f)?;
        writeln!(f, "← Back to Roadmaps: {}", d.back_path)?;
        Ok(())
    }
}

// --------------------------------------------------------
// Not Found View
// --------------------------------------------------------

pub struct NotFoundView<'a> {
    data: &'a NotFoundViewModel,
}

impl<'a> NotFoundView<'a> {
    pub fn new(data: &'a NotFoundViewModel) -> Self {
        Self { data }
    }

    pub fn heading(kind: MissingKind) -> &'static str {
        match kind {
            MissingKind::Track => "Roadmap not found",
            MissingKind::Page => "Page not found",
        }
    }
}

impl<'a> fmt::Display for NotFoundView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", Self::heading(self.data.kind).bold())?;
        writeln!(f, "Nothing lives at {}", self.data.requested.dimmed())?;
        writeln!(f)?;
        writeln!(f, "Return to Roadmaps: {}", self.data.back_path.cyan())?;
        Ok(())
    }
}
