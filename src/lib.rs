//! # Hearth
//!
//! A static landing-page builder for game content sites. The content
//! repository exports its database as JSON documents (events, costumes,
//! guides); Hearth shapes them into a single render-ready snapshot and
//! renders the site's landing page from it.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! Hearth processes content through two independent stages, with a JSON
//! manifest between them:
//!
//! ```text
//! 1. Aggregate   content/  →  snapshot.json   (content documents → landing snapshot)
//! 2. Render      snapshot  →  dist/           (snapshot → final HTML page)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Debuggability**: the snapshot is human-readable JSON you can inspect.
//! - **Decoupled regeneration**: the hosting layer can re-run either stage
//!   on its own cadence (the snapshot carries the revalidation hint).
//! - **Testability**: each stage is a pure function from inputs to outputs,
//!   so tests exercise pipeline logic without building a whole site.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Content repository access — loads and filters the JSON documents |
//! | [`aggregate`] | Stage 1 — parallel fetch of the four sources, ending-soon and recent-costume derivations, snapshot manifest |
//! | [`render`] | Stage 2 — renders the landing page from the snapshot using Maud |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`types`] | Shared domain types serialized between stages |
//! | [`slug`] | URL slug generation for character/costume/guide links |
//! | [`timefmt`] | Humanized relative-time labels for event cards |
//! | [`output`] | CLI output formatting — information-first display of stage results |
//!
//! # Design Decisions
//!
//! ## All-or-Nothing Aggregation
//!
//! The four content fetches (featured guides, current events, future
//! events, costumes) are independent, so they run as a parallel join.
//! There is deliberately no per-source fallback: a landing page built
//! from three fresh sources and one stale or missing one is worse than
//! a failed build, because the hosting layer keeps serving the previous
//! good page on failure. First error wins, no partial snapshot.
//!
//! ## Sort-Then-Truncate Derivations
//!
//! "Ending soon" and "new costumes" are top-K selections over tens of
//! records. A full stable sort followed by truncation is trivially
//! correct and keeps ties in document order; anything cleverer would be
//! harder to verify for no measurable gain at this scale.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a
//! compile-time HTML macro system, rather than Handlebars or Tera:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## Hosted Images, Not Local Processing
//!
//! The content repository hosts every image in named resolution variants
//! (medium, small, thumbnail) with blur-placeholder hashes. Hearth never
//! touches image bytes; it picks the best available variant at render
//! time (medium → small → thumbnail, in that order) and emits the
//! placeholder hash for the page to paint during load.
//!
//! ## Pinned Generation Instant
//!
//! Every window predicate and every relative-time label on the page is
//! computed against a single instant, resolved once at startup and
//! overridable with `--now`. The same content and the same `--now`
//! always produce byte-identical output.

pub mod aggregate;
pub mod config;
pub mod content;
pub mod output;
pub mod render;
pub mod slug;
pub mod timefmt;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
