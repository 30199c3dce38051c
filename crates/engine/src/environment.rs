//! Output mode selection from the runtime environment.

use std::sync::LazyLock;

use emojify_common::{EmojiConfig, ReplaceMode};
use regex::Regex;

// Regex patterns - these are valid static patterns that cannot fail
#[allow(clippy::unwrap_used)]
static IOS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(iPhone|iPod|iPad|iPhone\s+Simulator)").unwrap());

#[allow(clippy::unwrap_used)]
static IOS_LEGACY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)OS\s+[1-5]_").unwrap());

#[allow(clippy::unwrap_used)]
static MAC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Mac OS X 10[._ ](?:[789]|1\d)").unwrap());

#[allow(clippy::unwrap_used)]
static WINDOWS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Windows NT (?:6\.[1-9]|10\.[0-9])").unwrap());

#[allow(clippy::unwrap_used)]
static WINDOWS_EXCLUDED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Chrome|MSIE 8").unwrap());

/// What the rendering environment can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentProfile {
    /// Output mode once colon and text modes are ruled out.
    pub replace_mode: ReplaceMode,
    /// Whether styled spans can be used instead of `<img>` elements.
    pub supports_css: bool,
}

impl EnvironmentProfile {
    /// Resolve the profile: explicit settings win, the user agent decides the rest.
    #[must_use]
    pub fn detect(config: &EmojiConfig) -> Self {
        let replace_mode = config.replace_mode.unwrap_or_else(|| {
            config
                .user_agent
                .as_deref()
                .map_or(ReplaceMode::Img, |ua| mode_for_user_agent(ua, config.avoid_ms_emoji))
        });
        let profile = Self {
            replace_mode,
            supports_css: config.supports_css.unwrap_or(true),
        };
        tracing::debug!(?profile, "Selected output environment");
        profile
    }
}

/// Output mode for a user agent.
///
/// Old iOS only has the SoftBank encoding; newer Apple platforms and
/// Windows 7+ render unified codepoints natively.
#[must_use]
pub fn mode_for_user_agent(user_agent: &str, avoid_ms_emoji: bool) -> ReplaceMode {
    if IOS_RE.is_match(user_agent) {
        if IOS_LEGACY_RE.is_match(user_agent) {
            return ReplaceMode::Softbank;
        }
        return ReplaceMode::Unified;
    }

    if MAC_RE.is_match(user_agent) {
        return ReplaceMode::Unified;
    }

    if !avoid_ms_emoji
        && WINDOWS_RE.is_match(user_agent)
        && !WINDOWS_EXCLUDED_RE.is_match(user_agent)
    {
        return ReplaceMode::Unified;
    }

    ReplaceMode::Img
}
