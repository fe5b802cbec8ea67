//! CLI output formatting for both pipeline stages.
//!
//! Output is information-centric: every entity leads with its positional
//! index and display title, with timestamps shown as indented context
//! lines. Each stage has a `format_*` function (returns `Vec<String>`)
//! for testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ## Aggregate
//!
//! ```text
//! Current events (2)
//!     001 Spring Festival
//!         Window: 2026-08-01 → 2026-08-12
//! Upcoming events (1 shown of 4)
//!     001 Autumn Hunt
//!         Starts: 2026-09-01
//! Ending soon (2)
//!     001 Anniversary
//!         Ends: 2026-08-09
//! New costumes (2)
//!     001 2B - Divergent Battler
//!         Released: 2026-08-01
//! Featured guides (1)
//!     001 Tier List
//! Revalidate: every 60s
//! ```
//!
//! ## Render
//!
//! ```text
//! Home → index.html
//! Rendered 2 event cards, 2 costumes, 1 guides
//! ```

use crate::aggregate::LandingSnapshot;
use crate::render::UPCOMING_PREVIEW_LIMIT;
use chrono::{DateTime, Utc};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Day-precision display form of a timestamp.
fn format_day(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

/// Section header: title plus entity count.
fn section_header(title: &str, count: usize) -> String {
    format!("{title} ({count})")
}

// ============================================================================
// Stage 1: Aggregate output
// ============================================================================

/// Format aggregate stage output summarizing the landing snapshot.
pub fn format_aggregate_output(snapshot: &LandingSnapshot) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(section_header(
        "Current events",
        snapshot.current_events.len(),
    ));
    for (i, event) in snapshot.current_events.iter().enumerate() {
        lines.push(format!("    {} {}", format_index(i + 1), event.title));
        lines.push(format!(
            "        Window: {} \u{2192} {}",
            format_day(event.start_date),
            format_day(event.end_date)
        ));
    }

    let shown = snapshot.future_events.len().min(UPCOMING_PREVIEW_LIMIT);
    if snapshot.future_events.len() > shown {
        lines.push(format!(
            "Upcoming events ({} shown of {})",
            shown,
            snapshot.future_events.len()
        ));
    } else {
        lines.push(section_header("Upcoming events", shown));
    }
    for (i, event) in snapshot.future_events.iter().take(shown).enumerate() {
        lines.push(format!("    {} {}", format_index(i + 1), event.title));
        lines.push(format!(
            "        Starts: {}",
            format_day(event.start_date)
        ));
    }

    lines.push(section_header("Ending soon", snapshot.ending_events.len()));
    for (i, event) in snapshot.ending_events.iter().enumerate() {
        lines.push(format!("    {} {}", format_index(i + 1), event.title));
        lines.push(format!("        Ends: {}", format_day(event.end_date)));
    }

    lines.push(section_header(
        "New costumes",
        snapshot.recent_costumes.len(),
    ));
    for (i, costume) in snapshot.recent_costumes.iter().enumerate() {
        lines.push(format!(
            "    {} {} - {}",
            format_index(i + 1),
            costume.character.en,
            costume.name.en
        ));
        if let Some(released) = costume.release_date {
            lines.push(format!("        Released: {}", format_day(released)));
        }
    }

    lines.push(section_header(
        "Featured guides",
        snapshot.featured_guides.len(),
    ));
    for (i, guide) in snapshot.featured_guides.iter().enumerate() {
        lines.push(format!("    {} {}", format_index(i + 1), guide.title));
    }

    lines.push(format!("Revalidate: every {}s", snapshot.revalidate_secs));

    lines
}

/// Print aggregate output to stdout.
pub fn print_aggregate_output(snapshot: &LandingSnapshot) {
    for line in format_aggregate_output(snapshot) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Render output
// ============================================================================

/// Format render stage output showing what landed on the page.
pub fn format_render_output(snapshot: &LandingSnapshot) -> Vec<String> {
    let event_cards = snapshot.current_events.len()
        + snapshot.future_events.len().min(UPCOMING_PREVIEW_LIMIT)
        + snapshot.ending_events.len();
    vec![
        "Home \u{2192} index.html".to_string(),
        format!(
            "Rendered {} event cards, {} costumes, {} guides",
            event_cards,
            snapshot.recent_costumes.len(),
            snapshot.featured_guides.len()
        ),
    ]
}

/// Print render output to stdout.
pub fn print_render_output(snapshot: &LandingSnapshot) {
    for line in format_render_output(snapshot) {
        println!("{}", line);
    }
}
