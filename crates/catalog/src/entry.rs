//! Catalog records.

use crate::mask::ImageSetMask;
use crate::skin_tone::SkinTone;

/// A base emoji.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiEntry {
    /// Canonical identifier, e.g. `1f44d`.
    pub idx: String,
    /// Unified encodings. The first is primary; the rest are accepted on input only.
    pub unified: Vec<String>,
    /// Legacy SoftBank private-use encoding.
    pub softbank: Option<String>,
    /// Legacy Google private-use encoding.
    pub google: Option<String>,
    /// Short names. The first is canonical.
    pub short_names: Vec<String>,
    /// Sprite sheet column.
    pub sheet_x: u32,
    /// Sprite sheet row.
    pub sheet_y: u32,
    /// Image sets that have this glyph.
    pub mask: ImageSetMask,
    /// Custom image path that bypasses image sets entirely.
    pub image: Option<String>,
    /// Plain-text rendering, e.g. `<3`.
    pub text: Option<String>,
}

impl EmojiEntry {
    /// Canonical short name, falling back to the identifier for unnamed entries.
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.short_names.first().map_or(self.idx.as_str(), String::as_str)
    }

    /// Primary unified encoding.
    #[must_use]
    pub fn primary_unified(&self) -> Option<&str> {
        self.unified.first().map(String::as_str)
    }

    /// Whether `name` is one of this entry's built-in short names.
    #[must_use]
    pub fn has_short_name(&self, name: &str) -> bool {
        self.short_names.iter().any(|n| n == name)
    }
}

/// A skin-tone child of a base emoji.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariationEntry {
    /// Full identifier, e.g. `1f44d-1f3fb`.
    pub idx: String,
    /// Identifier of the base emoji.
    pub base: String,
    /// Tone applied to the base.
    pub tone: SkinTone,
    /// Sprite sheet column.
    pub sheet_x: u32,
    /// Sprite sheet row.
    pub sheet_y: u32,
    /// Image sets that have this glyph.
    pub mask: ImageSetMask,
    /// Unified encodings. The first is primary.
    pub unified: Vec<String>,
}

impl VariationEntry {
    /// Primary unified encoding.
    #[must_use]
    pub fn primary_unified(&self) -> Option<&str> {
        self.unified.first().map(String::as_str)
    }
}

/// Legacy asset for a full identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObsoleteEntry {
    /// Identifier whose asset stands in for the current one.
    pub replacement: String,
    /// Sprite sheet column of the legacy asset.
    pub sheet_x: u32,
    /// Sprite sheet row of the legacy asset.
    pub sheet_y: u32,
    /// Image sets that still carry the legacy asset.
    pub mask: ImageSetMask,
}
