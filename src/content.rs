//! Filesystem-backed content repository access.
//!
//! The content repository exports its database as JSON documents into a
//! content directory, alongside the site `config.toml`:
//!
//! ```text
//! content/
//! ├── config.toml              # Site configuration (optional)
//! ├── events.json              # All events, past and future
//! ├── costumes.json            # All costumes, released or not
//! └── guides.json              # All guides
//! ```
//!
//! This module exposes the four read-only accessors the aggregate stage
//! consumes: featured guides, current events, future events, and all
//! costumes. Each accessor loads and filters its own document on every
//! call — documents are small, and re-reading keeps a build's view of
//! the content consistent with whatever the exporter last wrote, with
//! no cache to invalidate.
//!
//! Accessors never return partial data: a missing or malformed document
//! is an error, and the caller decides whether that aborts the build
//! (it does — see the aggregate stage).

use crate::types::{Costume, Event, Guide};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error in {0}: {1}")]
    Json(PathBuf, #[source] serde_json::Error),
    #[error("Missing content document: {0}")]
    MissingDocument(PathBuf),
}

/// Options for the costume accessor.
///
/// The landing page never needs the extended stats block, so the
/// default query drops it and keeps the snapshot manifest small.
#[derive(Debug, Clone, Copy, Default)]
pub struct CostumeQuery {
    /// Retain the extended stats block on each costume.
    pub with_stats: bool,
}

/// Read-only handle to a content directory.
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Guides pinned to the landing page, in document order.
    pub fn featured_guides(&self) -> Result<Vec<Guide>, ContentError> {
        let guides: Vec<Guide> = self.load_document("guides.json")?;
        Ok(guides.into_iter().filter(|g| g.featured).collect())
    }

    /// Events whose active window includes `now`, ascending by start date.
    pub fn current_events(&self, now: DateTime<Utc>) -> Result<Vec<Event>, ContentError> {
        let mut events: Vec<Event> = self.load_document("events.json")?;
        events.retain(|e| e.is_active(now));
        events.sort_by(|a, b| a.start_date.cmp(&b.start_date));
        Ok(events)
    }

    /// Events starting strictly after `now`, ascending by start date.
    pub fn future_events(&self, now: DateTime<Utc>) -> Result<Vec<Event>, ContentError> {
        let mut events: Vec<Event> = self.load_document("events.json")?;
        events.retain(|e| e.start_date > now);
        events.sort_by(|a, b| a.start_date.cmp(&b.start_date));
        Ok(events)
    }

    /// All costumes in document order. The query controls whether the
    /// extended stats block is retained.
    pub fn all_costumes(&self, query: CostumeQuery) -> Result<Vec<Costume>, ContentError> {
        let mut costumes: Vec<Costume> = self.load_document("costumes.json")?;
        if !query.with_stats {
            for costume in &mut costumes {
                costume.stats = None;
            }
        }
        Ok(costumes)
    }

    fn load_document<T: DeserializeOwned>(&self, name: &str) -> Result<T, ContentError> {
        let path = self.root.join(name);
        if !path.exists() {
            return Err(ContentError::MissingDocument(path));
        }
        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|e| ContentError::Json(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{sample_costume, sample_event, sample_guide, write_content_dir};
    use tempfile::TempDir;

    fn at(rfc3339: &str) -> DateTime<Utc> {
        rfc3339.parse().unwrap()
    }

    #[test]
    fn featured_guides_filters_unfeatured() {
        let tmp = TempDir::new().unwrap();
        write_content_dir(
            tmp.path(),
            &[],
            &[],
            &[
                sample_guide("tier-list", true),
                sample_guide("beginner", false),
                sample_guide("farming", true),
            ],
        );
        let store = ContentStore::new(tmp.path());

        let guides = store.featured_guides().unwrap();
        let slugs: Vec<&str> = guides.iter().map(|g| g.slug.as_str()).collect();
        assert_eq!(slugs, vec!["tier-list", "farming"]);
    }

    #[test]
    fn current_events_are_windowed_and_sorted() {
        let now = at("2026-08-07T12:00:00Z");
        let tmp = TempDir::new().unwrap();
        write_content_dir(
            tmp.path(),
            &[
                sample_event("late", "2026-08-05T00:00:00Z", "2026-08-20T00:00:00Z"),
                sample_event("early", "2026-08-01T00:00:00Z", "2026-08-10T00:00:00Z"),
                sample_event("over", "2026-07-01T00:00:00Z", "2026-07-10T00:00:00Z"),
                sample_event("not-yet", "2026-09-01T00:00:00Z", "2026-09-10T00:00:00Z"),
            ],
            &[],
            &[],
        );
        let store = ContentStore::new(tmp.path());

        let events = store.current_events(now).unwrap();
        let slugs: Vec<&str> = events.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["early", "late"]);
    }

    #[test]
    fn future_events_start_strictly_after_now() {
        let now = at("2026-08-07T12:00:00Z");
        let tmp = TempDir::new().unwrap();
        write_content_dir(
            tmp.path(),
            &[
                sample_event("running", "2026-08-01T00:00:00Z", "2026-08-10T00:00:00Z"),
                sample_event("b", "2026-09-01T00:00:00Z", "2026-09-10T00:00:00Z"),
                sample_event("a", "2026-08-20T00:00:00Z", "2026-08-25T00:00:00Z"),
            ],
            &[],
            &[],
        );
        let store = ContentStore::new(tmp.path());

        let events = store.future_events(now).unwrap();
        let slugs: Vec<&str> = events.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b"]);
    }

    #[test]
    fn default_costume_query_strips_stats() {
        let tmp = TempDir::new().unwrap();
        let mut costume = sample_costume(1, Some("2026-01-01T00:00:00Z"));
        costume.stats = Some(crate::types::CostumeStats {
            hp: 2500,
            attack: 180,
            defense: 140,
            agility: 95,
        });
        write_content_dir(tmp.path(), &[], &[costume], &[]);
        let store = ContentStore::new(tmp.path());

        let costumes = store.all_costumes(CostumeQuery::default()).unwrap();
        assert!(costumes[0].stats.is_none());

        let costumes = store
            .all_costumes(CostumeQuery { with_stats: true })
            .unwrap();
        assert!(costumes[0].stats.is_some());
    }

    #[test]
    fn missing_document_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let store = ContentStore::new(tmp.path());
        let err = store.featured_guides().unwrap_err();
        assert!(matches!(err, ContentError::MissingDocument(_)));
    }

    #[test]
    fn malformed_document_is_an_error() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("events.json"), "[{").unwrap();
        let store = ContentStore::new(tmp.path());
        let err = store.current_events(at("2026-08-07T12:00:00Z")).unwrap_err();
        assert!(matches!(err, ContentError::Json(_, _)));
    }
}
