//! Site configuration module.
//!
//! Handles loading, validating, and merging the `config.toml` found in
//! the content root. User values are merged over stock defaults, unknown
//! keys are rejected to catch typos early, and the merged result is
//! validated before any stage runs.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Hearth"
//! description = "Events, costumes and guides"
//! base_url = "https://example.com"
//!
//! [generation]
//! revalidate_secs = 60      # Regeneration hint for the hosting layer
//!
//! [[socials]]
//! label = "Discord"
//! url = "https://discord.gg/example"
//!
//! [colors.light]
//! background = "#fdf5e6"
//! text = "#2b2b2b"
//! accent = "#b8a078"
//! border = "#d8cbb2"
//!
//! [colors.dark]
//! background = "#14130f"
//! text = "#e8e0cf"
//! accent = "#cbb584"
//! border = "#3a362c"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity used in page metadata.
    pub site: SiteInfo,
    /// Snapshot generation settings.
    pub generation: GenerationConfig,
    /// Footer social links, in display order.
    pub socials: Vec<SocialLink>,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.title must not be empty".into(),
            ));
        }
        if self.generation.revalidate_secs == 0 {
            return Err(ConfigError::Validation(
                "generation.revalidate_secs must be non-zero".into(),
            ));
        }
        for social in &self.socials {
            if !social.url.starts_with("http://") && !social.url.starts_with("https://") {
                return Err(ConfigError::Validation(format!(
                    "socials url must be absolute: {}",
                    social.url
                )));
            }
        }
        Ok(())
    }
}

/// Site identity used in the page head and Open Graph tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    pub title: String,
    pub description: String,
    /// Absolute site URL, used for Open Graph tags. No trailing slash.
    pub base_url: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "Hearth".to_string(),
            description: "Events, costumes and guides".to_string(),
            base_url: "https://example.com".to_string(),
        }
    }
}

/// Snapshot generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Regeneration hint carried in the snapshot: the hosting layer
    /// should recompute the page no more often than once per this many
    /// seconds. Hearth records the hint; enforcing it is the host's job.
    pub revalidate_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            revalidate_secs: 60,
        }
    }
}

/// A single footer social link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Background color.
    pub background: String,
    /// Primary text color.
    pub text: String,
    /// Accent color for headings, buttons, and hover borders.
    pub accent: String,
    /// Border color.
    pub border: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#fdf5e6".to_string(),
            text: "#2b2b2b".to_string(),
            accent: "#b8a078".to_string(),
            border: "#d8cbb2".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#14130f".to_string(),
            text: "#e8e0cf".to_string(),
            accent: "#cbb584".to_string(),
            border: "#3a362c".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as
/// the base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Hearth Configuration
# ====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
title = "Hearth"
description = "Events, costumes and guides"

# Absolute site URL used for Open Graph tags. No trailing slash.
base_url = "https://example.com"

# ---------------------------------------------------------------------------
# Generation
# ---------------------------------------------------------------------------
[generation]
# Regeneration hint: the hosting layer should rebuild the page no more
# often than once per this many seconds.
revalidate_secs = 60

# ---------------------------------------------------------------------------
# Footer social links (repeat the block for each link)
# ---------------------------------------------------------------------------
# [[socials]]
# label = "Discord"
# url = "https://discord.gg/example"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#fdf5e6"
text = "#2b2b2b"
accent = "#b8a078"    # Headings, buttons, hover borders
border = "#d8cbb2"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#14130f"
text = "#e8e0cf"
accent = "#cbb584"
border = "#3a362c"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-accent: {light_accent};
    --color-border: {light_border};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-accent: {dark_accent};
        --color-border: {dark_border};
    }}
}}"#,
        light_bg = colors.light.background,
        light_text = colors.light.text,
        light_accent = colors.light.accent,
        light_border = colors.light.border,
        dark_bg = colors.dark.background,
        dark_text = colors.dark.text,
        dark_accent = colors.dark.accent,
        dark_border = colors.dark.border,
    )
}
