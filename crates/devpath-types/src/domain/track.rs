use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use super::difficulty::Difficulty;

/// Unique key of a track, also used as its path segment (`/roadmap/<id>`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the id can be embedded in a path or query string as-is
    pub fn is_path_safe(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TrackId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TrackId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for TrackId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TrackId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TrackId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TrackId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A skill or tool taught inside a track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    /// Unique within the parent track; doubles as the expansion key in the catalog view
    pub name: String,
    pub description: String,
    pub level: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
}

impl Technology {
    pub fn resources(&self) -> &[String] {
        self.resources.as_deref().unwrap_or_default()
    }
}

/// A learning path record in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub difficulty: Difficulty,
    /// Free text such as "6-8 months"
    pub estimated_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prerequisites: Option<Vec<String>>,
    #[serde(default)]
    pub technologies: Vec<Technology>,
}

impl Track {
    pub fn prerequisites(&self) -> &[String] {
        self.prerequisites.as_deref().unwrap_or_default()
    }

    pub fn technology(&self, name: &str) -> Option<&Technology> {
        self.technologies.iter().find(|tech| tech.name == name)
    }

    pub fn has_technology(&self, name: &str) -> bool {
        self.technology(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_track() -> Track {
        Track {
            id: TrackId::new("frontend"),
            title: "Frontend Development".to_string(),
            description: "User interfaces".to_string(),
            icon: "🎨".to_string(),
            difficulty: Difficulty::Beginner,
            estimated_time: "6-8 months".to_string(),
            prerequisites: None,
            technologies: vec![Technology {
                name: "React".to_string(),
                description: "UI library".to_string(),
                level: Difficulty::Intermediate,
                resources: Some(vec!["React Docs".to_string()]),
            }],
        }
    }

    #[test]
    fn test_track_id_path_safety() {
        assert!(TrackId::new("game-dev").is_path_safe());
        assert!(TrackId::new("ai_ml.v2").is_path_safe());
        assert!(!TrackId::new("").is_path_safe());
        assert!(!TrackId::new("a/b").is_path_safe());
        assert!(!TrackId::new("a?selected=b").is_path_safe());
    }

    #[test]
    fn test_track_serializes_camel_case_and_skips_absent_lists() {
        let value = serde_json::to_value(sample_track()).unwrap();
        assert_eq!(value["estimatedTime"], "6-8 months");
        assert_eq!(value["difficulty"], "Beginner");
        assert!(value.get("prerequisites").is_none());
        assert_eq!(value["technologies"][0]["level"], "Intermediate");
    }

    #[test]
    fn test_track_deserializes_with_missing_optionals() {
        let text = r#"
            id = "cloud"
            title = "Cloud Computing"
            description = "Build and manage applications in the cloud"
            icon = "☁️"
            difficulty = "Advanced"
            estimatedTime = "8-10 months"

            [[technologies]]
            name = "AWS"
            description = "Amazon Web Services fundamentals"
            level = "Advanced"
        "#;

        let track: Track = toml::from_str(text).unwrap();
        assert_eq!(track.id, "cloud");
        assert!(track.prerequisites().is_empty());
        assert!(track.technologies[0].resources().is_empty());
    }

    #[test]
    fn test_technology_lookup_is_exact() {
        let track = sample_track();
        assert!(track.has_technology("React"));
        assert!(!track.has_technology("react"));
        assert!(track.technology("Vue").is_none());
    }
}
