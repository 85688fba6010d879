//! Catalog Store
//!
//! The immutable, ordered list of tracks every view reads from. A catalog is
//! built once (builtin data or a catalog file) and never mutated afterwards;
//! lookups for unknown ids return `None` instead of failing.

mod builtin;

use std::collections::HashSet;
use std::path::Path;

use devpath_types::{Track, TrackId};
use serde::Deserialize;

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    tracks: Vec<Track>,
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    tracks: Vec<Track>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    List(Vec<Track>),
    File(CatalogFile),
}

impl Catalog {
    /// The DevPath roadmap catalog shipped with the binary
    pub fn builtin() -> Self {
        Self {
            tracks: builtin::tracks(),
        }
    }

    /// Build a catalog after checking id and technology-name uniqueness
    pub fn from_tracks(tracks: Vec<Track>) -> Result<Self> {
        let mut seen = HashSet::new();
        for track in &tracks {
            if !track.id.is_path_safe() {
                return Err(Error::InvalidTrackId(track.id.clone()));
            }
            if !seen.insert(track.id.as_str()) {
                return Err(Error::DuplicateTrack(track.id.clone()));
            }

            let mut names = HashSet::new();
            for tech in &track.technologies {
                if !names.insert(tech.name.as_str()) {
                    return Err(Error::DuplicateTechnology {
                        track: track.id.clone(),
                        name: tech.name.clone(),
                    });
                }
            }
        }

        Ok(Self { tracks })
    }

    /// Load a catalog file: JSON when the extension is `.json`, TOML otherwise
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let tracks = if is_json {
            match serde_json::from_str::<JsonCatalog>(&content) {
                Ok(JsonCatalog::List(tracks)) => tracks,
                Ok(JsonCatalog::File(file)) => file.tracks,
                Err(err) => return Err(parse_error(path, err)),
            }
        } else {
            toml::from_str::<CatalogFile>(&content)
                .map_err(|err| parse_error(path, err))?
                .tracks
        };

        let catalog = Self::from_tracks(tracks)?;
        tracing::info!(
            path = %path.display(),
            tracks = catalog.len(),
            "Loaded catalog file"
        );
        Ok(catalog)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Look a track up by id; `None` is the explicit "not found" answer
    pub fn get(&self, id: &str) -> Option<&Track> {
        self.tracks.iter().find(|track| track.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Catalog index of a track
    pub fn position(&self, id: &str) -> Option<usize> {
        self.tracks.iter().position(|track| track.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &TrackId> {
        self.tracks.iter().map(|track| &track.id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}

fn parse_error(path: &Path, err: impl std::fmt::Display) -> Error {
    Error::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devpath_types::{Difficulty, Technology};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn track(id: &str, techs: &[&str]) -> Track {
        Track {
            id: TrackId::new(id),
            title: format!("{} title", id),
            description: format!("{} description", id),
            icon: "*".to_string(),
            difficulty: Difficulty::Beginner,
            estimated_time: "1 month".to_string(),
            prerequisites: None,
            technologies: techs
                .iter()
                .map(|name| Technology {
                    name: name.to_string(),
                    description: String::new(),
                    level: Difficulty::Beginner,
                    resources: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_builtin_ids_are_unique_and_ordered() {
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = catalog.ids().map(|id| id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "frontend",
                "backend",
                "fullstack",
                "mobile",
                "devops",
                "cloud",
                "ai-ml",
                "cybersecurity",
                "blockchain",
                "game-dev",
                "data-science",
                "ui-ux",
            ]
        );
        assert!(Catalog::from_tracks(catalog.tracks().to_vec()).is_ok());
    }

    #[test]
    fn test_get_returns_full_record_or_none() {
        let catalog = Catalog::builtin();
        let backend = catalog.get("backend").unwrap();
        assert_eq!(backend.title, "Backend Development");
        assert_eq!(backend.prerequisites(), ["Basic programming concepts"]);
        assert_eq!(backend.technologies.len(), 3);

        assert!(catalog.get("not-a-real-track").is_none());
        assert!(catalog.get("").is_none());
        assert_eq!(catalog.position("mobile"), Some(3));
        assert_eq!(catalog.position("nope"), None);
    }

    #[test]
    fn test_from_tracks_rejects_duplicates() {
        let err = Catalog::from_tracks(vec![track("a", &[]), track("a", &[])]).unwrap_err();
        assert!(matches!(err, Error::DuplicateTrack(id) if id == "a"));

        let err = Catalog::from_tracks(vec![track("b", &["Rust", "Rust"])]).unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateTechnology { ref track, ref name } if track == "b" && name == "Rust"
        ));

        let err = Catalog::from_tracks(vec![track("c/d", &[])]).unwrap_err();
        assert!(matches!(err, Error::InvalidTrackId(_)));
    }

    #[test]
    fn test_same_technology_name_allowed_across_tracks() {
        let catalog =
            Catalog::from_tracks(vec![track("a", &["Python"]), track("b", &["Python"])]).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_load_toml_catalog() -> anyhow::Result<()> {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        writeln!(
            file,
            r#"
[[tracks]]
id = "rust"
title = "Systems Programming"
description = "Ownership and lifetimes"
icon = "🦀"
difficulty = "Intermediate"
estimatedTime = "4-6 months"
prerequisites = ["Any programming language"]

[[tracks.technologies]]
name = "Cargo"
description = "Build tool and package manager"
level = "Beginner"
resources = ["The Cargo Book"]
"#
        )?;

        let catalog = Catalog::load_from(file.path())?;
        assert_eq!(catalog.len(), 1);
        let rust = catalog.get("rust").unwrap();
        assert_eq!(rust.technologies[0].resources(), ["The Cargo Book"]);
        Ok(())
    }

    #[test]
    fn test_load_json_catalog_array_and_object() -> anyhow::Result<()> {
        let tracks = vec![track("one", &["A"]), track("two", &["B"])];

        let mut array = tempfile::Builder::new().suffix(".json").tempfile()?;
        write!(array, "{}", serde_json::to_string(&tracks)?)?;
        assert_eq!(Catalog::load_from(array.path())?.len(), 2);

        let mut object = tempfile::Builder::new().suffix(".json").tempfile()?;
        write!(
            object,
            "{}",
            serde_json::json!({ "tracks": tracks }).to_string()
        )?;
        assert_eq!(Catalog::load_from(object.path())?.len(), 2);
        Ok(())
    }

    #[test]
    fn test_load_reports_parse_and_io_errors() -> anyhow::Result<()> {
        let mut broken = NamedTempFile::new()?;
        write!(broken, "[[tracks]]\nid = 3")?;
        let err = Catalog::load_from(broken.path()).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));

        let err = Catalog::load_from(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        Ok(())
    }
}
