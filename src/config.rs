//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives in
//! the content root and overrides the stock defaults key by key:
//!
//! ```text
//! content/
//! ├── config.toml              # Site config (optional)
//! ├── profile.toml
//! └── ...
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Portfolio"       # <title> suffix after the profile name
//!
//! [typing]
//! type_ms = 70              # Delay between inserted characters
//! delete_ms = 40            # Delay between deleted characters
//! hold_ms = 1500            # Pause on a completed phrase
//! next_phrase_ms = 500      # Pause before the next phrase starts
//!
//! [scroll_spy]
//! offset = 100              # Pixels above a section that already count as inside it
//! throttle_ms = 100         # Minimum spacing between evaluations (0 = every event)
//!
//! [reveal]
//! duration_ms = 1000        # Entrance animation length
//! heading_threshold = 0.8   # Viewport fraction where headings reveal
//! card_threshold = 0.85     # Viewport fraction where cards reveal
//! stagger_ms = 100          # Extra delay per card index
//!
//! [projects]
//! preview = 3               # Cards shown before "View All Projects"
//! load_delay_ms = 1500      # Simulated latency when expanding
//! fallback_image = "https://placehold.co/400x200/f59e0b/ffffff?text=Image+Unavailable"
//!
//! [toasts]
//! success_ms = 2000
//! error_ms = 4000
//!
//! [contact]
//! endpoint = "https://api.emailjs.com/api/v1.0/email/send"
//! timeout_secs = 10
//!
//! [theme]
//! max_width = "80rem"
//!
//! [theme.section_padding]
//! size = "8vw"
//! min = "4rem"
//! max = "6rem"
//!
//! [colors.light]
//! background = "#f8f7f4"
//! ...
//! [colors.dark]
//! background = "#111827"
//! ...
//! ```
//!
//! Unknown keys are rejected to catch typos early.

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
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Text appended to the profile name in the document title.
    pub title: String,
    /// Hero typed-text timings.
    pub typing: TypingConfig,
    /// Active-section tracking.
    pub scroll_spy: ScrollSpyConfig,
    /// Scroll-triggered entrance animations.
    pub reveal: RevealConfig,
    /// Project list expand/collapse.
    pub projects: ProjectsConfig,
    /// Notification lifetimes.
    pub toasts: ToastConfig,
    /// Mail relay settings (credentials come from the environment).
    pub contact: ContactConfig,
    /// Layout settings.
    pub theme: ThemeConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            typing: TypingConfig::default(),
            scroll_spy: ScrollSpyConfig::default(),
            reveal: RevealConfig::default(),
            projects: ProjectsConfig::default(),
            toasts: ToastConfig::default(),
            contact: ContactConfig::default(),
            theme: ThemeConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let typing = &self.typing;
        // Every delay feeds a self-rescheduling loop; a zero anywhere lets one
        // phrase cycle complete without virtual time moving.
        if typing.type_ms == 0
            || typing.delete_ms == 0
            || typing.hold_ms == 0
            || typing.next_phrase_ms == 0
        {
            return Err(ConfigError::Validation(
                "typing delays must all be greater than zero".into(),
            ));
        }
        if !self.scroll_spy.offset.is_finite() || self.scroll_spy.offset < 0.0 {
            return Err(ConfigError::Validation(
                "scroll_spy.offset must be a finite, non-negative number".into(),
            ));
        }
        for (name, value) in [
            ("reveal.heading_threshold", self.reveal.heading_threshold),
            ("reveal.card_threshold", self.reveal.card_threshold),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::Validation(format!(
                    "{name} must be in (0, 1], got {value}"
                )));
            }
        }
        if self.projects.preview == 0 {
            return Err(ConfigError::Validation(
                "projects.preview must be at least 1".into(),
            ));
        }
        if self.contact.endpoint.trim().is_empty() {
            return Err(ConfigError::Validation(
                "contact.endpoint must not be empty".into(),
            ));
        }
        if self.contact.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "contact.timeout_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// Hero typed-text timings, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypingConfig {
    /// Delay after inserting a character.
    pub type_ms: u64,
    /// Delay after deleting a character. Faster than insertion.
    pub delete_ms: u64,
    /// Pause on a completed phrase before deletion starts.
    pub hold_ms: u64,
    /// Pause after a phrase is fully deleted, before the next one starts.
    pub next_phrase_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            type_ms: 70,
            delete_ms: 40,
            hold_ms: 1500,
            next_phrase_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollSpyConfig {
    /// Pixels above a section's top that already count as inside it. Offsets
    /// below this value always resolve to `home`.
    pub offset: f64,
    /// Minimum spacing between evaluations. `0` evaluates every scroll event.
    pub throttle_ms: u64,
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self {
            offset: 100.0,
            throttle_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Entrance animation duration.
    pub duration_ms: u64,
    /// Fraction of the viewport height a heading's top must reach.
    pub heading_threshold: f64,
    /// Fraction of the viewport height a card's top must reach.
    pub card_threshold: f64,
    /// Extra delay per card index within a list.
    pub stagger_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            heading_threshold: 0.80,
            card_threshold: 0.85,
            stagger_ms: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectsConfig {
    /// Number of project cards visible while collapsed.
    pub preview: usize,
    /// Simulated latency before the full list appears.
    pub load_delay_ms: u64,
    /// Image shown when a project screenshot fails to load.
    pub fallback_image: String,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            preview: 3,
            load_delay_ms: 1500,
            fallback_image: "https://placehold.co/400x200/f59e0b/ffffff?text=Image+Unavailable"
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToastConfig {
    pub success_ms: u64,
    pub error_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            success_ms: 2000,
            error_ms: 4000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    /// Relay send endpoint.
    pub endpoint: String,
    /// Request timeout for the relay call.
    pub timeout_secs: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.emailjs.com/api/v1.0/email/send".to_string(),
            timeout_secs: 10,
        }
    }
}

/// A responsive CSS size expressed as `clamp(min, size, max)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClampSize {
    /// Preferred/fluid value, typically viewport-relative (e.g. `"8vw"`).
    pub size: String,
    /// Minimum bound (e.g. `"4rem"`).
    pub min: String,
    /// Maximum bound (e.g. `"6rem"`).
    pub max: String,
}

impl ClampSize {
    /// Render as a CSS `clamp()` expression.
    pub fn to_css(&self) -> String {
        format!("clamp({}, {}, {})", self.min, self.size, self.max)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Maximum content width (CSS value).
    pub max_width: String,
    /// Vertical padding of each section.
    pub section_padding: ClampSize,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            max_width: "80rem".to_string(),
            section_padding: ClampSize {
                size: "8vw".to_string(),
                min: "4rem".to_string(),
                max: "6rem".to_string(),
            },
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
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
    pub background: String,
    /// Card and form surfaces.
    pub card: String,
    pub text: String,
    /// Secondary text (descriptions, dates, footer).
    pub text_muted: String,
    pub border: String,
    /// Accent used for headings, active nav links and buttons.
    pub primary: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#f8f7f4".to_string(),
            card: "#ffffff".to_string(),
            text: "#1f2937".to_string(),
            text_muted: "#4b5563".to_string(),
            border: "#e5e7eb".to_string(),
            primary: "#f59e0b".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#111827".to_string(),
            card: "#1f2937".to_string(),
            text: "#f3f4f6".to_string(),
            text_muted: "#9ca3af".to_string(),
            border: "#374151".to_string(),
            primary: "#f59e0b".to_string(),
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

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
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

/// Load config from `config.toml` in the given directory, merged over the
/// stock defaults and validated.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Folio Configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.
#
# Relay credentials are NOT read from this file. Set them in the environment:
#   EMAILJS_SERVICE_ID, EMAILJS_TEMPLATE_ID, EMAILJS_PUBLIC_KEY

# Appended to the profile name in the document title.
title = "Portfolio"

# ---------------------------------------------------------------------------
# Hero typed text (milliseconds)
# ---------------------------------------------------------------------------
[typing]
type_ms = 70
delete_ms = 40
# Pause on a completed phrase before it starts deleting.
hold_ms = 1500
# Pause after a phrase is deleted, before the next one starts typing.
next_phrase_ms = 500

# ---------------------------------------------------------------------------
# Active navigation highlight
# ---------------------------------------------------------------------------
[scroll_spy]
# Pixels above a section's top that already count as inside it.
offset = 100.0
# Minimum spacing between evaluations. 0 evaluates every scroll event.
throttle_ms = 100

# ---------------------------------------------------------------------------
# Scroll-triggered entrance animations (fire once per element)
# ---------------------------------------------------------------------------
[reveal]
duration_ms = 1000
# Fraction of the viewport height an element's top must reach.
heading_threshold = 0.8
card_threshold = 0.85
# Extra delay per card index, producing a cascade.
stagger_ms = 100

# ---------------------------------------------------------------------------
# Projects
# ---------------------------------------------------------------------------
[projects]
# Cards shown before "View All Projects" is pressed.
preview = 3
load_delay_ms = 1500
fallback_image = "https://placehold.co/400x200/f59e0b/ffffff?text=Image+Unavailable"

# ---------------------------------------------------------------------------
# Notifications (milliseconds on screen)
# ---------------------------------------------------------------------------
[toasts]
success_ms = 2000
error_ms = 4000

# ---------------------------------------------------------------------------
# Contact relay
# ---------------------------------------------------------------------------
[contact]
endpoint = "https://api.emailjs.com/api/v1.0/email/send"
timeout_secs = 10

# ---------------------------------------------------------------------------
# Layout
# ---------------------------------------------------------------------------
[theme]
max_width = "80rem"

# Vertical section padding, as CSS clamp(min, size, max).
[theme.section_padding]
size = "8vw"
min = "4rem"
max = "6rem"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#f8f7f4"
card = "#ffffff"
text = "#1f2937"
text_muted = "#4b5563"
border = "#e5e7eb"
primary = "#f59e0b"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#111827"
card = "#1f2937"
text = "#f3f4f6"
text_muted = "#9ca3af"
border = "#374151"
primary = "#f59e0b"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-card: {light_card};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-primary: {light_primary};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-card: {dark_card};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-primary: {dark_primary};
    }}
}}"#,
        light_bg = colors.light.background,
        light_card = colors.light.card,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_primary = colors.light.primary,
        dark_bg = colors.dark.background,
        dark_card = colors.dark.card,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_primary = colors.dark.primary,
    )
}

/// Generate CSS custom properties from theme and reveal config.
pub fn generate_theme_css(theme: &ThemeConfig, reveal: &RevealConfig) -> String {
    format!(
        r#":root {{
    --max-width: {max_width};
    --section-padding: {section_padding};
    --reveal-duration: {duration}ms;
}}"#,
        max_width = theme.max_width,
        section_padding = theme.section_padding.to_css(),
        duration = reveal.duration_ms,
    )
}
