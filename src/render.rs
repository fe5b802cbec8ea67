//! Landing page HTML generation.
//!
//! Stage 2 of the Hearth build pipeline. Takes the snapshot manifest
//! produced by the aggregate stage and renders the final static landing
//! page.
//!
//! ## Page Sections
//!
//! - **Banner**: site hero, hidden on narrow viewports via CSS
//! - **Events slider**: one card per current event
//! - **Listings**: "Upcoming Events" (first 3 future) and "Events Ending
//!   Soon", side by side; either column is omitted when empty
//! - **New costumes**: grid of the recently released costumes with links
//!   into the character pages
//! - **Featured guides**: guide cards with markdown excerpts
//! - **Socials / join**: footer sections from site config
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML
//! templating. Templates are type-safe Rust code with automatic XSS
//! escaping. Static CSS and the slider script are embedded at compile
//! time; page colors are injected as CSS custom properties from config.

use crate::config::{self, SiteConfig};
use crate::slug::slugify;
use crate::timefmt::distance_from_now;
use crate::types::{Costume, Event, Guide, ImageSet};
use chrono::{DateTime, Utc};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::aggregate::LandingSnapshot;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// How many future events the landing page previews. The snapshot keeps
/// the full list; this cap belongs to the render layer alone.
pub const UPCOMING_PREVIEW_LIMIT: usize = 3;

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/slider.js");

/// Render the landing page from a snapshot manifest into `output_dir`.
pub fn render(
    snapshot_path: &Path,
    output_dir: &Path,
    site_config: &SiteConfig,
) -> Result<(), RenderError> {
    let manifest_content = fs::read_to_string(snapshot_path)?;
    let snapshot: LandingSnapshot = serde_json::from_str(&manifest_content)?;

    let color_css = config::generate_color_css(&site_config.colors);
    let css = format!("{}\n\n{}", color_css, CSS_STATIC);

    fs::create_dir_all(output_dir)?;

    let page = render_landing(&snapshot, site_config, &css);
    fs::write(output_dir.join("index.html"), page.into_string())?;

    Ok(())
}

/// Render the full landing page document.
pub fn render_landing(snapshot: &LandingSnapshot, site: &SiteConfig, css: &str) -> Markup {
    let now = snapshot.generated_at;

    let content = html! {
        (banner(site))
        (events_slider(&snapshot.current_events, now))
        div.listing-columns {
            @if !snapshot.future_events.is_empty() {
                (listing_section(
                    "Upcoming Events",
                    &snapshot.future_events[..snapshot.future_events.len().min(UPCOMING_PREVIEW_LIMIT)],
                    EventLabel::Starts,
                    now,
                ))
            }
            @if !snapshot.ending_events.is_empty() {
                (listing_section(
                    "Events Ending Soon",
                    &snapshot.ending_events,
                    EventLabel::Ends,
                    now,
                ))
            }
        }
        (costumes_section(&snapshot.recent_costumes))
        @if !snapshot.featured_guides.is_empty() {
            (guides_section(&snapshot.featured_guides))
        }
        (footer_sections(site))
    };

    base_document(snapshot, site, css, content)
}

/// Renders the base HTML document structure with page metadata.
fn base_document(
    snapshot: &LandingSnapshot,
    site: &SiteConfig,
    css: &str,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (site.site.title) }
                meta name="description" content=(site.site.description);
                meta property="og:title" content=(site.site.title);
                meta property="og:description" content=(site.site.description);
                meta property="og:type" content="website";
                meta property="og:url" content=(site.site.base_url);
                // Regeneration hint for the hosting layer
                meta name="revalidate" content=(snapshot.revalidate_secs);
                style { (PreEscaped(css)) }
            }
            body {
                main.landing {
                    (content)
                }
                script { (PreEscaped(JS)) }
            }
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Site hero banner. Shown on wide viewports only (CSS handles the cut).
fn banner(site: &SiteConfig) -> Markup {
    html! {
        header.banner {
            h1.banner-title { (site.site.title) }
            p.banner-tagline { (site.site.description) }
        }
    }
}

/// Slider of all current events. Rendered as a scroll-snapped strip the
/// embedded script paginates.
fn events_slider(current_events: &[Event], now: DateTime<Utc>) -> Markup {
    html! {
        section.events-slider data-slider {
            div.slider-track {
                @for event in current_events {
                    (event_card(event, EventLabel::Ends, now))
                }
            }
            @if current_events.len() > 1 {
                div.slider-controls {
                    button.slider-prev type="button" aria-label="Previous event" { "‹" }
                    button.slider-next type="button" aria-label="Next event" { "›" }
                }
            }
        }
    }
}

/// Which window boundary an event card's caption talks about.
#[derive(Clone, Copy)]
enum EventLabel {
    Starts,
    Ends,
}

/// Titled column of event cards.
fn listing_section(title: &str, events: &[Event], label: EventLabel, now: DateTime<Utc>) -> Markup {
    html! {
        section.listing-events {
            h2.overlap { (title) }
            div.listing-grid {
                @for event in events {
                    (event_card(event, label, now))
                }
            }
        }
    }
}

/// A linked event card with image and a relative-time caption.
fn event_card(event: &Event, label: EventLabel, now: DateTime<Utc>) -> Markup {
    let caption = match label {
        EventLabel::Starts => format!("Starts {}", distance_from_now(now, event.start_date)),
        EventLabel::Ends => format!("Ends {}", distance_from_now(now, event.end_date)),
    };

    html! {
        a.event-card href={ "/event/" (event.slug) } {
            div.event-frame {
                (image_or_placeholder(&event.image, &format!("Thumbnail {}", event.title)))
                div.event-caption {
                    span { (caption) }
                }
            }
        }
    }
}

/// Grid of recently released costumes with links into the character pages.
fn costumes_section(costumes: &[Costume]) -> Markup {
    html! {
        section.new-costumes {
            h2.overlap { "New costumes" }
            div.costume-grid {
                @for costume in costumes {
                    div.costume-card {
                        h3.costume-title {
                            (costume.character.en) " - " (costume.name.en)
                        }
                        @if let Some(artwork) = &costume.artwork {
                            (image_or_placeholder(artwork, &format!("Artwork {}", costume.name.en)))
                        }
                        a.btn href={
                            "/characters/" (slugify(&costume.character.en))
                            "/" (slugify(&costume.name.en))
                        } {
                            "See costume"
                        }
                    }
                }
            }
            div.see-all {
                a.btn href="/characters" { "See all costumes" }
            }
        }
    }
}

/// Featured guide cards with rendered markdown excerpts.
fn guides_section(guides: &[Guide]) -> Markup {
    html! {
        section.featured-guides {
            h2.overlap { "Guides" }
            div.guide-grid {
                @for guide in guides {
                    a.guide-card href={ "/guide/" (guide.slug) } {
                        @if let Some(thumbnail) = &guide.thumbnail {
                            (image_or_placeholder(thumbnail, &format!("Thumbnail {}", guide.title)))
                        }
                        h3.guide-title { (guide.title) }
                        @if let Some(excerpt) = &guide.excerpt {
                            div.guide-excerpt { (markdown_html(excerpt)) }
                        }
                    }
                }
            }
        }
    }
}

/// Socials and join-us footer sections from site config.
fn footer_sections(site: &SiteConfig) -> Markup {
    html! {
        @if !site.socials.is_empty() {
            section.socials {
                h2.overlap { "Community" }
                ul.socials-list {
                    @for social in &site.socials {
                        li {
                            a href=(social.url) target="_blank" rel="noopener" {
                                (social.label)
                            }
                        }
                    }
                }
            }
        }
        section.join-us {
            p { "Found a mistake or want to help? Every page is community maintained." }
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Render the best available image variant, or an empty placeholder
/// frame when the set has no variants at all.
///
/// The blur hash rides along as a data attribute so the page can paint
/// it while the real image loads.
fn image_or_placeholder(image: &ImageSet, alt: &str) -> Markup {
    match image.best() {
        Some(variant) => html! {
            img.content-image
                src=(variant.url)
                alt=(alt)
                width=(variant.width)
                height=(variant.height)
                loading="lazy"
                data-placeholder=[image.placeholder()];
        },
        None => html! {
            div.image-placeholder aria-hidden="true" {}
        },
    }
}

/// Markdown → HTML for guide excerpts.
fn markdown_html(markdown: &str) -> Markup {
    let parser = Parser::new(markdown);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    PreEscaped(out)
}
