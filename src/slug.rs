//! URL slug generation for character, costume, and guide links.
//!
//! Display names come from the content export and may contain spaces,
//! punctuation, and mixed case (`"Divergent Battler"`, `"A2 (Type B)"`).
//! Links on the landing page use the slugged form, and the downstream
//! site routes on the same convention, so the two must agree exactly:
//! lowercase, alphanumeric runs joined by single dashes, everything else
//! dropped.

/// Slug a display name for use in a URL path segment.
///
/// - `"Divergent Battler"` → `"divergent-battler"`
/// - `"A2 (Type B)"` → `"a2-type-b"`
/// - `"Reaper's Sorrow"` → `"reaper-s-sorrow"`
/// - `"  spaced  out  "` → `"spaced-out"`
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_dash = true;
        }
    }

    slug
}
