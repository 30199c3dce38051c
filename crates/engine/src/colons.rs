//! `:name:` and `:name::skin-tone-N:` recognition.

use std::borrow::Cow;
use std::sync::LazyLock;

use emojify_catalog::Catalog;
use emojify_common::EmojiResult;
use regex::{Captures, Regex};

use crate::aliases::AliasRegistry;
use crate::render::{Glyph, Modifier, Renderer};
use crate::scan::try_replace_all;
use crate::variation;

// Regex patterns - these are valid static patterns that cannot fail
#[allow(clippy::unwrap_used)]
static COLON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r":([a-zA-Z0-9_+-]+):(?::skin-tone-([2-6]):)?").unwrap()
});

/// Replaces colon names in text with rendered emoji.
pub(crate) struct ColonTokenizer<'a> {
    pub catalog: &'a Catalog,
    pub aliases: &'a AliasRegistry,
    pub renderer: &'a Renderer<'a>,
    pub allow_caps: bool,
}

impl ColonTokenizer<'_> {
    pub(crate) fn replace(&self, text: &str) -> EmojiResult<String> {
        try_replace_all(&COLON_RE, text, |caps| self.replace_match(caps))
    }

    #[allow(clippy::unwrap_used)] // Capture group 0 and 1 always participate
    fn replace_match(&self, caps: &Captures<'_>) -> EmojiResult<String> {
        let whole = caps.get(0).unwrap().as_str();
        let raw = caps.get(1).unwrap().as_str();
        let name: Cow<'_, str> = if self.allow_caps {
            Cow::Owned(raw.to_lowercase())
        } else {
            Cow::Borrowed(raw)
        };
        let base = self.aliases.resolve(self.catalog, &name);

        let Some(digit) = caps.get(2) else {
            return match base {
                Some(entry) => self.renderer.render(&Glyph::named(entry, &name, ":")),
                None => Ok(whole.to_string()),
            };
        };

        let tone_name = format!("skin-tone-{}", digit.as_str());
        let tone_entry = self.aliases.resolve(self.catalog, &tone_name);

        match (base, tone_entry) {
            (Some(entry), Some(tone_entry)) => {
                let glyph = Glyph::named(entry, &name, ":").with_modifier(Modifier {
                    variation: variation::resolve_named(self.catalog, &entry.idx, &tone_name),
                    entry: tone_entry,
                    actual: Some(tone_name.as_str()),
                    wrapper: ":",
                });
                self.renderer.render(&glyph)
            }
            (Some(entry), None) => {
                let rendered = self.renderer.render(&Glyph::named(entry, &name, ":"))?;
                Ok(format!("{rendered}:{tone_name}:"))
            }
            (None, Some(tone_entry)) => {
                let rendered = self
                    .renderer
                    .render(&Glyph::named(tone_entry, &tone_name, ":"))?;
                Ok(format!(":{name}:{rendered}"))
            }
            (None, None) => Ok(whole.to_string()),
        }
    }
}
