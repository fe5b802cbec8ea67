//! Landing snapshot aggregation.
//!
//! Stage 1 of the Hearth build pipeline. Gathers the four content
//! sources the landing page needs and shapes them into a single
//! render-ready [`LandingSnapshot`], which is written to `snapshot.json`
//! for the render stage.
//!
//! ## Fetch model
//!
//! The four fetches (featured guides, current events, future events,
//! all costumes) have no data dependencies on each other, so they run
//! as a nested [`rayon::join`]. All four run to completion — there is
//! no cancellation path — and only then are the results combined, first
//! error wins. A failed fetch therefore fails the whole aggregation:
//! no snapshot is ever produced from partial data.
//!
//! ## Derivations
//!
//! - `ending_events`: from the current events only, stable-sorted by
//!   soonest expiry, capped at [`ENDING_SOON_LIMIT`].
//! - `recent_costumes`: released costumes only, stable-sorted by most
//!   recent release, capped at [`RECENT_COSTUME_LIMIT`].
//!
//! Both use a full stable sort plus truncation. At tens of records a
//! bounded priority structure would buy nothing, and the stable sort
//! keeps ties in document order so output is deterministic.
//!
//! ## Idempotence
//!
//! Aggregation is a pure function of (`now`, content documents,
//! `revalidate_secs`): running it twice with the same inputs yields a
//! structurally identical snapshot.

use crate::content::{ContentError, ContentStore, CostumeQuery};
use crate::types::{Costume, Event, Guide};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of events in the "ending soon" listing.
pub const ENDING_SOON_LIMIT: usize = 3;

/// Maximum number of costumes in the "new costumes" grid.
pub const RECENT_COSTUME_LIMIT: usize = 4;

#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
}

/// Render-ready landing page data, serialized as the inter-stage manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandingSnapshot {
    /// The `now` this snapshot was computed against.
    pub generated_at: DateTime<Utc>,
    /// Regeneration hint for the hosting layer: recompute no more often
    /// than once per this many seconds.
    pub revalidate_secs: u64,
    pub featured_guides: Vec<Guide>,
    /// Events whose active window includes `generated_at`.
    pub current_events: Vec<Event>,
    /// Events starting after `generated_at`, unsliced — the render
    /// layer takes its own first-3 subset.
    pub future_events: Vec<Event>,
    /// Subset of `current_events`, soonest expiry first, at most 3.
    pub ending_events: Vec<Event>,
    /// Released costumes, most recent first, at most 4.
    pub recent_costumes: Vec<Costume>,
}

/// Aggregate the landing snapshot for the given instant.
///
/// Issues the four content fetches in parallel, waits for all of them,
/// and fails if any failed. `revalidate_secs` is copied through from
/// site config into the snapshot.
pub fn aggregate(
    store: &ContentStore,
    now: DateTime<Utc>,
    revalidate_secs: u64,
) -> Result<LandingSnapshot, AggregateError> {
    let ((guides, current), (future, costumes)) = rayon::join(
        || {
            rayon::join(
                || store.featured_guides(),
                || store.current_events(now),
            )
        },
        || {
            rayon::join(
                || store.future_events(now),
                || store.all_costumes(CostumeQuery::default()),
            )
        },
    );

    let featured_guides = guides?;
    let current_events = current?;
    let future_events = future?;
    let all_costumes = costumes?;

    let ending_events = ending_soon(&current_events);
    let recent_costumes = recent_costumes(all_costumes);

    Ok(LandingSnapshot {
        generated_at: now,
        revalidate_secs,
        featured_guides,
        current_events,
        future_events,
        ending_events,
        recent_costumes,
    })
}

/// The up-to-3 current events expiring soonest, soonest first.
///
/// Operates on current events only — future events never appear here.
/// Stable sort, so events sharing an end date keep their input order.
pub fn ending_soon(current_events: &[Event]) -> Vec<Event> {
    let mut ending = current_events.to_vec();
    ending.sort_by(|a, b| a.end_date.cmp(&b.end_date));
    ending.truncate(ENDING_SOON_LIMIT);
    ending
}

/// The up-to-4 most recently released costumes, most recent first.
///
/// Unreleased costumes (no release date) are excluded before sorting.
/// Stable sort, so costumes sharing a release date keep their input order.
pub fn recent_costumes(costumes: Vec<Costume>) -> Vec<Costume> {
    let mut released: Vec<Costume> = costumes
        .into_iter()
        .filter(|c| c.release_date.is_some())
        .collect();
    released.sort_by(|a, b| b.release_date.cmp(&a.release_date));
    released.truncate(RECENT_COSTUME_LIMIT);
    released
}
