//! Serialized catalog format.
//!
//! Codepoints are stored as dash-separated hex (`1F44D-1F3FB`) and masks as
//! plain integers; both are converted to typed values on load.

use std::collections::{BTreeMap, HashMap};

use emojify_common::{EmojiError, EmojiResult};
use serde::Deserialize;

use crate::entry::{EmojiEntry, ObsoleteEntry, VariationEntry};
use crate::mask::ImageSetMask;
use crate::skin_tone::SkinTone;

#[derive(Debug, Deserialize)]
pub(crate) struct CatalogSource {
    pub emoji: Vec<EntrySource>,
    #[serde(default)]
    pub variations: HashMap<String, HashMap<String, VariationSource>>,
    #[serde(default)]
    pub obsoletes: HashMap<String, ObsoleteSource>,
    #[serde(default)]
    pub emoticons: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EntrySource {
    idx: String,
    #[serde(default)]
    unified: Vec<String>,
    softbank: Option<String>,
    google: Option<String>,
    short_names: Vec<String>,
    sheet_x: u32,
    sheet_y: u32,
    mask: u32,
    image: Option<String>,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VariationSource {
    idx: String,
    #[serde(default)]
    unified: Vec<String>,
    sheet_x: u32,
    sheet_y: u32,
    mask: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ObsoleteSource {
    idx: String,
    sheet_x: u32,
    sheet_y: u32,
    mask: u32,
}

/// Decode dash-separated hex codepoints (`1F468-200D-1F469`) into a string.
pub fn decode_codepoints(hex: &str) -> EmojiResult<String> {
    hex.split('-')
        .map(|part| {
            u32::from_str_radix(part, 16)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| EmojiError::Catalog(format!("Invalid codepoint '{part}' in '{hex}'")))
        })
        .collect()
}

fn decode_all(forms: &[String]) -> EmojiResult<Vec<String>> {
    forms.iter().map(|form| decode_codepoints(form)).collect()
}

fn decode_optional(form: Option<&String>) -> EmojiResult<Option<String>> {
    form.map(|f| decode_codepoints(f)).transpose()
}

impl EntrySource {
    pub(crate) fn into_entry(self) -> EmojiResult<EmojiEntry> {
        Ok(EmojiEntry {
            unified: decode_all(&self.unified)?,
            softbank: decode_optional(self.softbank.as_ref())?,
            google: decode_optional(self.google.as_ref())?,
            idx: self.idx,
            short_names: self.short_names,
            sheet_x: self.sheet_x,
            sheet_y: self.sheet_y,
            mask: ImageSetMask::from_raw(self.mask),
            image: self.image,
            text: self.text,
        })
    }
}

impl VariationSource {
    pub(crate) fn into_entry(self, base: &str, tone_idx: &str) -> EmojiResult<VariationEntry> {
        let tone = SkinTone::from_idx(tone_idx).ok_or_else(|| {
            EmojiError::Catalog(format!("Unknown skin tone '{tone_idx}' for {base}"))
        })?;
        Ok(VariationEntry {
            unified: decode_all(&self.unified)?,
            idx: self.idx,
            base: base.to_string(),
            tone,
            sheet_x: self.sheet_x,
            sheet_y: self.sheet_y,
            mask: ImageSetMask::from_raw(self.mask),
        })
    }
}

impl ObsoleteSource {
    pub(crate) fn into_entry(self) -> ObsoleteEntry {
        ObsoleteEntry {
            replacement: self.idx,
            sheet_x: self.sheet_x,
            sheet_y: self.sheet_y,
            mask: ImageSetMask::from_raw(self.mask),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single() {
        assert_eq!(decode_codepoints("1F44D").unwrap(), "\u{1F44D}");
    }

    #[test]
    fn test_decode_sequence() {
        assert_eq!(
            decode_codepoints("1F468-200D-1F469-200D-1F466").unwrap(),
            "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}"
        );
        assert_eq!(decode_codepoints("0023-fe0f-20e3").unwrap(), "#\u{FE0F}\u{20E3}");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_codepoints("XYZ").is_err());
        assert!(decode_codepoints("D800").is_err());
        assert!(decode_codepoints("").is_err());
    }

    #[test]
    fn test_variation_with_bad_tone() {
        let source = VariationSource {
            idx: "1f44d-1f3fa".to_string(),
            unified: Vec::new(),
            sheet_x: 0,
            sheet_y: 0,
            mask: 1,
        };
        assert!(source.into_entry("1f44d", "1f3fa").is_err());
    }
}
