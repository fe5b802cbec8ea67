//! Shared test utilities for the hearth test suite.
//!
//! Provides fixture builders for the domain types and a writer that
//! materializes a content directory (`events.json`, `costumes.json`,
//! `guides.json`) into a temp dir, so tests exercise the same load path
//! as a real build.

use std::path::Path;

use crate::types::{Costume, Event, Guide, ImageSet, ImageVariant, LocalizedText};

/// An event with a full image set; timestamps are RFC 3339 strings.
pub fn sample_event(slug: &str, start: &str, end: &str) -> Event {
    Event {
        slug: slug.to_string(),
        title: title_case(slug),
        start_date: start.parse().expect("valid RFC 3339 start date"),
        end_date: end.parse().expect("valid RFC 3339 end date"),
        image: sample_image_set(slug),
    }
}

/// A costume owned by a numbered character; `release` of `None` marks
/// it unreleased.
pub fn sample_costume(id: u32, release: Option<&str>) -> Costume {
    Costume {
        id,
        character: LocalizedText::new(format!("Character {id}")),
        name: LocalizedText::new(format!("Costume {id}")),
        release_date: release.map(|r| r.parse().expect("valid RFC 3339 release date")),
        artwork: Some(sample_image_set(&format!("costume-{id}"))),
        stats: None,
    }
}

/// A guide with a short markdown excerpt.
pub fn sample_guide(slug: &str, featured: bool) -> Guide {
    Guide {
        slug: slug.to_string(),
        title: title_case(slug),
        featured,
        excerpt: Some(format!("All about **{slug}**.")),
        thumbnail: Some(sample_image_set(slug)),
        published_at: Some("2026-06-01T00:00:00Z".parse().unwrap()),
    }
}

/// Image set with all three resolution variants present.
pub fn sample_image_set(stem: &str) -> ImageSet {
    let variant = |suffix: &str, width: u32, height: u32| ImageVariant {
        url: format!("https://cdn.example/{stem}-{suffix}.jpg"),
        hash: format!("blur:{stem}-{suffix}"),
        width,
        height,
    };
    ImageSet {
        medium: Some(variant("medium", 750, 422)),
        small: Some(variant("small", 500, 281)),
        thumbnail: Some(variant("thumb", 245, 138)),
    }
}

/// Write the three content documents into `dir`.
///
/// Always writes all three files, even when a slice is empty — a build
/// against a real export always sees all three documents.
pub fn write_content_dir(dir: &Path, events: &[Event], costumes: &[Costume], guides: &[Guide]) {
    let write = |name: &str, json: String| {
        std::fs::write(dir.join(name), json).expect("write content document");
    };
    write("events.json", serde_json::to_string_pretty(events).unwrap());
    write(
        "costumes.json",
        serde_json::to_string_pretty(costumes).unwrap(),
    );
    write("guides.json", serde_json::to_string_pretty(guides).unwrap());
}

/// `"summer-festival"` → `"Summer Festival"`.
fn title_case(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
