//! Output rendering.

use emojify_catalog::{Catalog, EmojiEntry, VariationEntry};
use emojify_common::{EmojiConfig, EmojiResult, ImageStyle, ReplaceMode};

use crate::environment::EnvironmentProfile;
use crate::image::{ImageLocation, ImageSetResolver};

/// A resolved emoji about to be rendered.
#[derive(Debug, Clone)]
pub(crate) struct Glyph<'a> {
    pub entry: &'a EmojiEntry,
    /// Name as written in the input, used for text and titles.
    pub actual: Option<&'a str>,
    /// Delimiter around `actual` in text output (`:` for colon input).
    pub wrapper: &'a str,
    pub modifier: Option<Modifier<'a>>,
}

/// A skin tone requested for a glyph.
#[derive(Debug, Clone)]
pub(crate) struct Modifier<'a> {
    /// The combined glyph, when the catalog has one for this base and tone.
    pub variation: Option<&'a VariationEntry>,
    /// The standalone tone glyph, rendered when the combination is unavailable.
    pub entry: &'a EmojiEntry,
    pub actual: Option<&'a str>,
    pub wrapper: &'a str,
}

impl<'a> Glyph<'a> {
    pub(crate) const fn new(entry: &'a EmojiEntry) -> Self {
        Self {
            entry,
            actual: None,
            wrapper: "",
            modifier: None,
        }
    }

    pub(crate) const fn named(entry: &'a EmojiEntry, actual: &'a str, wrapper: &'a str) -> Self {
        Self {
            entry,
            actual: Some(actual),
            wrapper,
            modifier: None,
        }
    }

    pub(crate) fn with_modifier(mut self, modifier: Modifier<'a>) -> Self {
        self.modifier = Some(modifier);
        self
    }
}

/// Native encodings, by precedence position in the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NativeEncoding {
    Unified,
    Softbank,
    Google,
}

/// The output shape selected for the active configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Colons,
    Text,
    Native(NativeEncoding),
    Image,
}

/// Turns glyphs into text or markup for one configuration.
pub(crate) struct Renderer<'a> {
    catalog: &'a Catalog,
    config: &'a EmojiConfig,
    images: &'a ImageSetResolver,
    profile: EnvironmentProfile,
}

impl<'a> Renderer<'a> {
    pub(crate) const fn new(
        catalog: &'a Catalog,
        config: &'a EmojiConfig,
        images: &'a ImageSetResolver,
        profile: EnvironmentProfile,
    ) -> Self {
        Self {
            catalog,
            config,
            images,
            profile,
        }
    }

    /// Render a glyph and, when it cannot be combined, its tone after it.
    pub(crate) fn render(&self, glyph: &Glyph<'_>) -> EmojiResult<String> {
        self.render_glyph(glyph, false)
    }

    fn output(&self) -> Output {
        if self.config.colons_mode {
            return Output::Colons;
        }
        if self.config.text_mode {
            return Output::Text;
        }
        if !self.config.allow_native {
            return Output::Image;
        }
        match self.profile.replace_mode {
            ReplaceMode::Unified => Output::Native(NativeEncoding::Unified),
            ReplaceMode::Softbank => Output::Native(NativeEncoding::Softbank),
            ReplaceMode::Google => Output::Native(NativeEncoding::Google),
            ReplaceMode::Img => Output::Image,
        }
    }

    fn render_glyph(&self, glyph: &Glyph<'_>, is_extra: bool) -> EmojiResult<String> {
        // An unknown image set fails every render, whatever the output mode.
        self.images.configured()?;

        let entry = glyph.entry;
        let mut extra = match &glyph.modifier {
            Some(modifier) => self.render_glyph(
                &Glyph {
                    entry: modifier.entry,
                    actual: modifier.actual,
                    wrapper: modifier.wrapper,
                    modifier: None,
                },
                true,
            )?,
            None => String::new(),
        };
        let variation = glyph.modifier.as_ref().and_then(|modifier| modifier.variation);

        match self.output() {
            Output::Colons => return Ok(format!(":{}:{extra}", entry.short_name())),
            Output::Text => {
                let text = match (&entry.text, glyph.actual) {
                    (Some(text), _) => text.clone(),
                    (None, Some(actual)) => format!("{0}{actual}{0}", glyph.wrapper),
                    (None, None) => format!("{0}{1}{0}", glyph.wrapper, entry.short_name()),
                };
                return Ok(text + &extra);
            }
            Output::Native(encoding) => {
                if let Some(native) = native_form(entry, variation, encoding, &extra) {
                    return Ok(self.format_native(native, !is_extra));
                }
            }
            Output::Image => {}
        }

        let img = match &entry.image {
            Some(path) => self.images.custom(entry, path)?,
            None => self.images.find_image(self.catalog, entry, variation)?,
        };

        let name = glyph.actual.unwrap_or_else(|| entry.short_name());
        let title = if self.config.include_title {
            format!(" title=\"{}\"", html_escape(name))
        } else {
            String::new()
        };
        let mut text = if self.config.include_text {
            html_escape(&format!("{0}{name}{0}", glyph.wrapper))
        } else {
            String::new()
        };

        // The combined glyph already shows the tone.
        if img.is_variation {
            extra.clear();
            if let Some(Modifier {
                actual: Some(actual),
                wrapper,
                ..
            }) = &glyph.modifier
            {
                if self.config.include_text && !wrapper.is_empty() {
                    text.push_str(&html_escape(&format!("{wrapper}{actual}{wrapper}")));
                }
            }
        }

        Ok(self.image_markup(&img, &title, &text) + &extra)
    }

    fn format_native(&self, native: String, show_wrapper: bool) -> String {
        if self.config.wrap_native && show_wrapper {
            format!("<span class=\"emoji-native\">{native}</span>")
        } else {
            native
        }
    }

    fn image_markup(&self, img: &ImageLocation, title: &str, text: &str) -> String {
        let style = if self.profile.supports_css {
            self.config.image_style
        } else {
            ImageStyle::Img
        };

        match (style, img.sheet_x, img.sheet_y) {
            (ImageStyle::Img, _, _) => format!(
                "<img src=\"{}\" class=\"emoji\" data-codepoints=\"{}\"{title}/>",
                img.path, img.full_idx
            ),
            (ImageStyle::Sprite, Some(x), Some(y)) => format!(
                "<span class=\"emoji-outer emoji-sizer\"><span class=\"emoji-inner\" style=\"background: url({});background-position:{}% {}%;background-size:{}00%\"{title} data-codepoints=\"{}\">{text}</span></span>",
                img.sheet,
                sheet_percent(x, img.sheet_size),
                sheet_percent(y, img.sheet_size),
                img.sheet_size,
                img.full_idx
            ),
            (ImageStyle::CssClass, _, _) => format!(
                "<span class=\"emoji emoji-{0}\"{title} data-codepoints=\"{0}\">{text}</span>",
                img.full_idx
            ),
            (ImageStyle::Background | ImageStyle::Sprite, _, _) => format!(
                "<span class=\"emoji emoji-sizer\" style=\"background-image:url({})\"{title} data-codepoints=\"{}\">{text}</span>",
                img.path, img.full_idx
            ),
        }
    }
}

/// Native text for `encoding`, or `None` when the entry has no such form.
///
/// Only unified output can show a combined skin tone; the legacy encodings
/// predate skin tones and always append the tone glyph.
fn native_form(
    entry: &EmojiEntry,
    variation: Option<&VariationEntry>,
    encoding: NativeEncoding,
    extra: &str,
) -> Option<String> {
    match encoding {
        NativeEncoding::Unified => variation
            .and_then(VariationEntry::primary_unified)
            .map(str::to_string)
            .or_else(|| entry.primary_unified().map(|base| format!("{base}{extra}"))),
        NativeEncoding::Softbank => entry.softbank.as_ref().map(|sb| format!("{sb}{extra}")),
        NativeEncoding::Google => entry.google.as_ref().map(|g| format!("{g}{extra}")),
    }
}

/// Position of a sheet cell as a background-position percentage.
fn sheet_percent(cell: u32, sheet_size: u32) -> f64 {
    100.0 * f64::from(cell) / f64::from(sheet_size.saturating_sub(1).max(1))
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
