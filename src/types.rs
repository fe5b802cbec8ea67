//! Shared domain types serialized between pipeline stages.
//!
//! These types appear both in the content documents (`events.json`,
//! `costumes.json`, `guides.json`) and in the snapshot manifest the
//! aggregate stage hands to the render stage, so they must stay identical
//! across both modules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A display string with per-language variants.
///
/// English is the site's primary language and always present; other
/// languages are carried through when the content export provides them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ja: Option<String>,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ja: None,
        }
    }
}

/// One hosted rendition of an image: URL plus a blur-placeholder hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageVariant {
    pub url: String,
    /// Base64 blur placeholder shown while the real image loads.
    pub hash: String,
    pub width: u32,
    pub height: u32,
}

/// Named resolution variants of a hosted image.
///
/// The content repository uploads each image in up to three sizes. Any
/// subset may be present; display code picks the best available via
/// [`ImageSet::best`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<ImageVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<ImageVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<ImageVariant>,
}

impl ImageSet {
    /// Best variant for display: medium, then small, then thumbnail.
    ///
    /// The order matters for visible output quality and must not change.
    pub fn best(&self) -> Option<&ImageVariant> {
        self.medium
            .as_ref()
            .or(self.small.as_ref())
            .or(self.thumbnail.as_ref())
    }

    /// Blur placeholder hash, resolved with the same fallback order as
    /// [`ImageSet::best`].
    pub fn placeholder(&self) -> Option<&str> {
        self.best().map(|v| v.hash.as_str())
    }
}

/// An in-game event with a bounded active window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier, also the event's URL path segment.
    pub slug: String,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub image: ImageSet,
}

impl Event {
    /// Whether the event's active window includes `now` (inclusive on
    /// both ends).
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.start_date <= now && now <= self.end_date
    }
}

/// Extended combat stats, only loaded when a costume query asks for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostumeStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub agility: u32,
}

/// A character costume. Many costumes belong to one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Costume {
    /// Unique costume identifier from the content export.
    pub id: u32,
    /// Display name of the owning character.
    pub character: LocalizedText,
    /// Display name of the costume itself.
    pub name: LocalizedText,
    /// Absent for datamined costumes that have not been released yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork: Option<ImageSet>,
    /// Extended stats block; stripped by the default costume query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<CostumeStats>,
}

/// An editorial guide. The aggregator passes guides through untouched;
/// only the render layer looks inside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guide {
    pub slug: String,
    pub title: String,
    /// Whether the guide is pinned to the landing page.
    #[serde(default)]
    pub featured: bool,
    /// Markdown teaser shown on the guide card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<ImageSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(url: &str) -> ImageVariant {
        ImageVariant {
            url: url.to_string(),
            hash: format!("blur:{url}"),
            width: 640,
            height: 360,
        }
    }

    #[test]
    fn best_prefers_medium() {
        let set = ImageSet {
            medium: Some(variant("m.jpg")),
            small: Some(variant("s.jpg")),
            thumbnail: Some(variant("t.jpg")),
        };
        assert_eq!(set.best().unwrap().url, "m.jpg");
    }

    #[test]
    fn best_falls_back_to_small_then_thumbnail() {
        let set = ImageSet {
            medium: None,
            small: Some(variant("s.jpg")),
            thumbnail: Some(variant("t.jpg")),
        };
        assert_eq!(set.best().unwrap().url, "s.jpg");

        let set = ImageSet {
            medium: None,
            small: None,
            thumbnail: Some(variant("t.jpg")),
        };
        assert_eq!(set.best().unwrap().url, "t.jpg");
    }

    #[test]
    fn best_empty_set_is_none() {
        assert!(ImageSet::default().best().is_none());
        assert!(ImageSet::default().placeholder().is_none());
    }

    #[test]
    fn placeholder_follows_same_fallback() {
        let set = ImageSet {
            medium: None,
            small: Some(variant("s.jpg")),
            thumbnail: Some(variant("t.jpg")),
        };
        assert_eq!(set.placeholder(), Some("blur:s.jpg"));
    }

    #[test]
    fn event_window_is_inclusive() {
        let start: DateTime<Utc> = "2026-08-01T00:00:00Z".parse().unwrap();
        let end: DateTime<Utc> = "2026-08-15T00:00:00Z".parse().unwrap();
        let event = Event {
            slug: "summer-festival".to_string(),
            title: "Summer Festival".to_string(),
            start_date: start,
            end_date: end,
            image: ImageSet::default(),
        };

        assert!(event.is_active(start));
        assert!(event.is_active(end));
        assert!(event.is_active("2026-08-07T12:00:00Z".parse().unwrap()));
        assert!(!event.is_active("2026-07-31T23:59:59Z".parse().unwrap()));
        assert!(!event.is_active("2026-08-15T00:00:01Z".parse().unwrap()));
    }

    #[test]
    fn costume_release_date_roundtrips_absent() {
        let json = r#"{
            "id": 7,
            "character": { "en": "2B" },
            "name": { "en": "Divergent Battler" }
        }"#;
        let costume: Costume = serde_json::from_str(json).unwrap();
        assert!(costume.release_date.is_none());
        assert!(costume.stats.is_none());

        let back = serde_json::to_string(&costume).unwrap();
        assert!(!back.contains("release_date"));
    }
}
