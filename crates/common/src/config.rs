//! Converter configuration.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

/// Canonical image-set fallback order, tried after the configured set.
pub const FALLBACK_ORDER: [&str; 4] = ["apple", "google", "twitter", "facebook"];

/// Default sprite sheet grid size (columns and rows).
pub const DEFAULT_SHEET_SIZE: u32 = 61;

/// Converter configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmojiConfig {
    /// Identifier of the primary image set.
    pub img_set: String,
    /// Known image sets, keyed by identifier.
    pub image_sets: BTreeMap<String, ImageSetConfig>,
    /// How image output is shaped.
    pub image_style: ImageStyle,
    /// Always output `:name:` text.
    pub colons_mode: bool,
    /// Always output plain text.
    pub text_mode: bool,
    /// Add a title attribute with the emoji name.
    pub include_title: bool,
    /// Add the emoji name as visible text inside the markup.
    pub include_text: bool,
    /// Allow native glyph passthrough.
    pub allow_native: bool,
    /// Wrap native glyphs in a styling span.
    pub wrap_native: bool,
    /// Never choose native unified output on legacy Windows.
    pub avoid_ms_emoji: bool,
    /// Lowercase colon names before lookup.
    pub allow_caps: bool,
    /// Appended verbatim to individual image URLs.
    pub img_suffix: String,
    /// Explicit output mode. Detected from the environment when unset.
    pub replace_mode: Option<ReplaceMode>,
    /// Explicit CSS capability. Assumed when unset.
    pub supports_css: Option<bool>,
    /// User agent consulted by mode detection.
    pub user_agent: Option<String>,
    /// Emoticon text arrives HTML-escaped (`&lt;3` rather than `<3`).
    pub emoticons_html_escaped: bool,
}

/// A single image set: where its glyphs live and which mask bit marks them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageSetConfig {
    /// Directory prefix for individual glyph images.
    pub path: String,
    /// URL of the sprite sheet.
    pub sheet: String,
    /// Grid size of the sprite sheet.
    #[serde(default = "default_sheet_size")]
    pub sheet_size: u32,
    /// Bit identifying this set in catalog masks.
    pub mask: u32,
}

impl ImageSetConfig {
    /// Build the conventional layout for a set under `root`.
    #[must_use]
    pub fn standard(root: &str, name: &str, mask: u32) -> Self {
        Self {
            path: format!("{root}img-{name}-64/"),
            sheet: format!("{root}sheet_{name}_64.png"),
            sheet_size: DEFAULT_SHEET_SIZE,
            mask,
        }
    }
}

/// Output mode once colon and text modes have been ruled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplaceMode {
    /// Image markup.
    Img,
    /// Legacy SoftBank private-use codepoints.
    Softbank,
    /// Legacy Google private-use codepoints.
    Google,
    /// Native Unicode.
    Unified,
}

/// Shape of image markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageStyle {
    /// A plain `<img>` element.
    Img,
    /// A span with the individual image as its background.
    #[default]
    Background,
    /// A span addressed by a per-glyph CSS class.
    CssClass,
    /// A span positioned over the sprite sheet.
    Sprite,
}

fn default_sheet_size() -> u32 {
    DEFAULT_SHEET_SIZE
}

fn default_image_sets() -> BTreeMap<String, ImageSetConfig> {
    FALLBACK_ORDER
        .iter()
        .enumerate()
        .map(|(bit, name)| {
            (
                (*name).to_string(),
                ImageSetConfig::standard("/emoji-data/", name, 1 << bit),
            )
        })
        .collect()
}

/// `EMOJIFY__<FIELD>` variables; nested fields use `__` too
/// (`EMOJIFY__IMAGE_SETS__APPLE__PATH`).
fn env_source() -> config::Environment {
    config::Environment::with_prefix("EMOJIFY")
        .separator("__")
        .try_parsing(true)
}

impl Default for EmojiConfig {
    fn default() -> Self {
        Self {
            img_set: "apple".to_string(),
            image_sets: default_image_sets(),
            image_style: ImageStyle::default(),
            colons_mode: false,
            text_mode: false,
            include_title: false,
            include_text: false,
            allow_native: true,
            wrap_native: false,
            avoid_ms_emoji: true,
            allow_caps: false,
            img_suffix: String::new(),
            replace_mode: None,
            supports_css: None,
            user_agent: None,
            emoticons_html_escaped: false,
        }
    }
}

impl EmojiConfig {
    /// Load configuration from files and environment variables.
    ///
    /// Configuration is loaded in the following order:
    /// 1. `config/default.toml`
    /// 2. `config/{environment}.toml` (based on `EMOJIFY_ENV`)
    /// 3. Environment variables named `EMOJIFY__<FIELD>` (e.g. `EMOJIFY__IMG_SET`)
    pub fn load() -> Result<Self, config::ConfigError> {
        let env = std::env::var("EMOJIFY_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(env_source())
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from a specific file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        config.try_deserialize()
    }

    /// Image-set identifiers in resolution order: the configured set, then
    /// the canonical fallback order, skipping duplicates.
    #[must_use]
    pub fn try_order(&self) -> Vec<&str> {
        let mut order = vec![self.img_set.as_str()];
        order.extend(
            FALLBACK_ORDER
                .iter()
                .copied()
                .filter(|name| *name != self.img_set),
        );
        order
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_env_overrides_use_double_underscore() {
        let vars = [
            ("EMOJIFY__IMG_SET", "google"),
            ("EMOJIFY__ALLOW_CAPS", "true"),
            ("EMOJIFY_TEXT_MODE", "true"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config: EmojiConfig = config::Config::builder()
            .add_source(env_source().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.img_set, "google");
        assert!(config.allow_caps);
        // single underscore after the prefix is not picked up
        assert!(!config.text_mode);
    }

    #[test]
    fn test_default_registry() {
        let config = EmojiConfig::default();
        assert_eq!(config.img_set, "apple");
        assert_eq!(config.image_sets.len(), 4);
        let twitter = &config.image_sets["twitter"];
        assert_eq!(twitter.mask, 4);
        assert_eq!(twitter.path, "/emoji-data/img-twitter-64/");
        assert_eq!(twitter.sheet, "/emoji-data/sheet_twitter_64.png");
        assert_eq!(twitter.sheet_size, DEFAULT_SHEET_SIZE);
    }

    #[test]
    fn test_try_order_starts_with_configured_set() {
        let config = EmojiConfig {
            img_set: "twitter".to_string(),
            ..EmojiConfig::default()
        };
        assert_eq!(config.try_order(), vec!["twitter", "apple", "google", "facebook"]);
    }

    #[test]
    fn test_try_order_keeps_unknown_set_first() {
        let config = EmojiConfig {
            img_set: "emojione".to_string(),
            ..EmojiConfig::default()
        };
        assert_eq!(config.try_order()[0], "emojione");
        assert_eq!(config.try_order().len(), 5);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: EmojiConfig = serde_json::from_str(
            r#"{"img_set": "google", "replace_mode": "unified", "image_style": "css_class"}"#,
        )
        .unwrap();
        assert_eq!(config.img_set, "google");
        assert_eq!(config.replace_mode, Some(ReplaceMode::Unified));
        assert_eq!(config.image_style, ImageStyle::CssClass);
        assert!(config.allow_native);
        assert_eq!(config.image_sets.len(), 4);
    }
}
