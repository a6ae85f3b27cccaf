//! Static dashboard content
//!
//! Every string the panels show lives in a JSON document. The default
//! document is embedded in the binary; a replacement can be loaded from disk.
//! Content is parsed and validated once at startup and never mutated.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::enums::{Accent, Glyph};

/// Content shipped with the binary
const EMBEDDED_CONTENT: &str = include_str!("../../assets/content.json");

/// Errors raised while loading content
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid content document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("content section `{0}` must not be empty")]
    Empty(&'static str),
}

/// A headline figure with an optional footnote
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Reading {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Streak tile on the home panel
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Streak {
    pub label: String,
    pub value: String,
    pub accent: Accent,
}

/// One scheduled block in today's timeline
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TimelineEntry {
    pub time: String,
    pub title: String,
    pub meta: String,
    pub accent: Accent,
    pub icon: Glyph,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomeContent {
    pub greeting: String,
    pub platform_badge: String,
    pub headline: String,
    pub tagline: String,
    pub daily_move: Reading,
    pub heart_rate: Reading,
    pub streaks: Vec<Streak>,
    pub timeline_title: String,
    /// Inert action label next to the timeline title
    pub timeline_action: String,
    pub timeline: Vec<TimelineEntry>,
}

/// Small value/label pair in the readiness card
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Metric {
    pub title: String,
    pub value: String,
    pub trend: String,
    pub icon: Glyph,
    pub accent: Accent,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressContent {
    pub readiness_label: String,
    pub readiness_value: String,
    pub readiness_icon: Glyph,
    pub readiness_summary: String,
    pub weekly_stats: Vec<Stat>,
    pub focus_title: String,
    pub focus_areas: Vec<Metric>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CoachingCard {
    pub header: String,
    pub subtitle: String,
    pub coach: String,
    pub icon: Glyph,
    pub accent: Accent,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoachingContent {
    pub eyebrow: String,
    pub badge: String,
    pub headline: String,
    pub tagline: String,
    /// Inert call-to-action in the hero card
    pub session_action: String,
    pub channels_title: String,
    /// Inert action shown on every channel card
    pub channel_action: String,
    pub channels: Vec<CoachingCard>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Badge {
    pub label: String,
    pub accent: Accent,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Device {
    pub name: String,
    pub platform: String,
    pub status: String,
    pub accent: Accent,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Preference {
    pub text: String,
    pub accent: Accent,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileContent {
    pub tier: String,
    pub name: String,
    pub summary: String,
    pub avatar: Glyph,
    pub badges: Vec<Badge>,
    pub devices_title: String,
    /// Inert pill shown on every device row
    pub device_action: String,
    pub devices: Vec<Device>,
    pub preferences_title: String,
    pub preferences: Vec<Preference>,
}

/// The full content document
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Content {
    pub brand: String,
    pub home: HomeContent,
    pub progress: ProgressContent,
    pub coaching: CoachingContent,
    pub profile: ProfileContent,
}

impl Content {
    /// Parse the content bundled with the binary
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    /// Load content from a JSON file
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Parse and validate a JSON document
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: Content = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    /// Every panel must have rows to show
    fn validate(&self) -> Result<(), ContentError> {
        let sections = [
            ("home.streaks", self.home.streaks.is_empty()),
            ("home.timeline", self.home.timeline.is_empty()),
            ("progress.weeklyStats", self.progress.weekly_stats.is_empty()),
            ("progress.focusAreas", self.progress.focus_areas.is_empty()),
            ("coaching.channels", self.coaching.channels.is_empty()),
            ("profile.devices", self.profile.devices.is_empty()),
            ("profile.preferences", self.profile.preferences.is_empty()),
        ];

        for (name, empty) in sections {
            if empty {
                return Err(ContentError::Empty(name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn create_temp_content_file(content: &str) -> (tempfile::NamedTempFile, PathBuf) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        let path = file.path().to_path_buf();
        (file, path)
    }

    #[test]
    fn test_embedded_content_parses() {
        let content = Content::embedded().unwrap();
        assert_eq!(content.brand, "Pulse One");
        assert_eq!(content.home.timeline.len(), 3);
        assert_eq!(content.progress.focus_areas.len(), 3);
        assert_eq!(content.coaching.channels.len(), 2);
        assert_eq!(content.profile.devices.len(), 2);
    }

    #[test]
    fn test_embedded_timeline_order() {
        let content = Content::embedded().unwrap();
        let titles: Vec<&str> = content.home.timeline.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Sunrise Run", "Fuel Up", "Wind Down"]);
        assert_eq!(content.home.timeline[1].icon, Glyph::Flame);
    }

    #[test]
    fn test_embedded_reading_note_is_optional() {
        let content = Content::embedded().unwrap();
        assert_eq!(content.home.daily_move.note, None);
        assert_eq!(content.home.heart_rate.note.as_deref(), Some("steady · zone 2"));
    }

    #[test]
    fn test_load_from_file() {
        let (_file, path) = create_temp_content_file(EMBEDDED_CONTENT);
        let content = Content::load(&path).unwrap();
        assert_eq!(content.profile.name, "Jordan Alvarez");
    }

    #[test]
    fn test_load_file_not_found() {
        let path = PathBuf::from("/nonexistent/path/content.json");
        let result = Content::load(&path);
        assert!(matches!(result, Err(ContentError::Read { .. })));
    }

    #[test]
    fn test_load_invalid_json() {
        let (_file, path) = create_temp_content_file("{ invalid json }");
        let result = Content::load(&path);
        assert!(matches!(result, Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_empty_section_is_rejected() {
        let mut doc: serde_json::Value = serde_json::from_str(EMBEDDED_CONTENT).unwrap();
        doc["profile"]["devices"] = serde_json::json!([]);
        let result = Content::from_json(&doc.to_string());
        match result {
            Err(ContentError::Empty(section)) => assert_eq!(section, "profile.devices"),
            other => panic!("expected empty section error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_glyph_is_rejected() {
        let mut doc: serde_json::Value = serde_json::from_str(EMBEDDED_CONTENT).unwrap();
        doc["home"]["timeline"][0]["icon"] = serde_json::json!("rocket");
        let result = Content::from_json(&doc.to_string());
        assert!(matches!(result, Err(ContentError::Parse(_))));
    }
}
