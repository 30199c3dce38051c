//! The emoji catalog store.

use std::collections::{BTreeMap, HashMap};

use emojify_common::EmojiResult;

use crate::entry::{EmojiEntry, ObsoleteEntry, VariationEntry};
use crate::skin_tone::SkinTone;
use crate::source::CatalogSource;

const BUNDLED: &str = include_str!("../data/catalog.json");

/// Read-only emoji data: entries, skin-tone variations, obsolete mappings
/// and the default emoticon table.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<EmojiEntry>,
    by_idx: HashMap<String, usize>,
    variations: BTreeMap<String, BTreeMap<SkinTone, VariationEntry>>,
    obsoletes: HashMap<String, ObsoleteEntry>,
    emoticons: BTreeMap<String, String>,
}

impl Catalog {
    /// Parse a catalog from its JSON form.
    pub fn from_json(json: &str) -> EmojiResult<Self> {
        let source: CatalogSource = serde_json::from_str(json)?;

        let entries = source
            .emoji
            .into_iter()
            .map(crate::source::EntrySource::into_entry)
            .collect::<EmojiResult<Vec<_>>>()?;
        let by_idx = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.idx.clone(), i))
            .collect();

        let mut variations: BTreeMap<String, BTreeMap<SkinTone, VariationEntry>> = BTreeMap::new();
        for (base, tones) in source.variations {
            let children = variations.entry(base.clone()).or_default();
            for (tone_idx, var) in tones {
                let var = var.into_entry(&base, &tone_idx)?;
                children.insert(var.tone, var);
            }
        }

        let obsoletes = source
            .obsoletes
            .into_iter()
            .map(|(idx, obsolete)| (idx, obsolete.into_entry()))
            .collect();

        let catalog = Self {
            entries,
            by_idx,
            variations,
            obsoletes,
            emoticons: source.emoticons,
        };

        tracing::debug!(
            entries = catalog.entries.len(),
            varying = catalog.variations.len(),
            obsoletes = catalog.obsoletes.len(),
            emoticons = catalog.emoticons.len(),
            "Loaded emoji catalog"
        );

        Ok(catalog)
    }

    /// The catalog bundled with this crate.
    pub fn bundled() -> EmojiResult<Self> {
        Self::from_json(BUNDLED)
    }

    /// All entries in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[EmojiEntry] {
        &self.entries
    }

    /// Entry by identifier.
    #[must_use]
    pub fn entry(&self, idx: &str) -> Option<&EmojiEntry> {
        self.by_idx.get(idx).map(|&i| &self.entries[i])
    }

    /// Skin-tone child of `base`, if the catalog has one.
    #[must_use]
    pub fn variation(&self, base: &str, tone: SkinTone) -> Option<&VariationEntry> {
        self.variations.get(base)?.get(&tone)
    }

    /// All skin-tone children, ordered by base identifier then tone.
    pub fn variations(&self) -> impl Iterator<Item = &VariationEntry> {
        self.variations.values().flat_map(BTreeMap::values)
    }

    /// Obsolete mapping for a full identifier.
    #[must_use]
    pub fn obsolete(&self, full_idx: &str) -> Option<&ObsoleteEntry> {
        self.obsoletes.get(full_idx)
    }

    /// Default emoticon table: emoticon text to short name.
    #[must_use]
    pub const fn emoticons(&self) -> &BTreeMap<String, String> {
        &self.emoticons
    }

    /// First entry, in catalog order, that lists `name` among its short names.
    #[must_use]
    pub fn default_owner(&self, name: &str) -> Option<&EmojiEntry> {
        self.entries.iter().find(|entry| entry.has_short_name(name))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::mask::ImageSetMask;

    #[test]
    fn test_bundled_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.entries().is_empty());
        assert!(catalog.entry("1f44d").is_some());
        assert!(catalog.entry("nope").is_none());
    }

    #[test]
    fn test_every_entry_has_an_image_set() {
        let catalog = Catalog::bundled().unwrap();
        for entry in catalog.entries() {
            assert!(!entry.mask.is_empty(), "{} has no image set", entry.idx);
        }
    }

    #[test]
    fn test_short_names_are_unique() {
        let catalog = Catalog::bundled().unwrap();
        let mut seen = std::collections::HashSet::new();
        for entry in catalog.entries() {
            for name in &entry.short_names {
                assert!(seen.insert(name.clone()), "duplicate short name {name}");
            }
        }
    }

    #[test]
    fn test_variations_have_all_tones() {
        let catalog = Catalog::bundled().unwrap();
        for tone in SkinTone::ALL {
            let var = catalog.variation("1f44d", tone).unwrap();
            assert_eq!(var.tone, tone);
            assert_eq!(var.base, "1f44d");
            assert_eq!(var.idx, format!("1f44d-{}", tone.idx()));
        }
        assert!(catalog.variation("26a1", SkinTone::Tone2).is_none());
    }

    #[test]
    fn test_obsolete_lookup() {
        let catalog = Catalog::bundled().unwrap();
        let obsolete = catalog.obsolete("1f575-fe0f").unwrap();
        assert_eq!(obsolete.replacement, "1f575-fe0f-200d-2642-fe0f");
        assert!(obsolete.mask.has_set(ImageSetMask::GOOGLE));
        assert!(!obsolete.mask.has_set(ImageSetMask::APPLE));
    }

    #[test]
    fn test_default_owner_scans_in_order() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.default_owner("thumbsup").unwrap().idx, "1f44d");
        assert_eq!(catalog.default_owner("satisfied").unwrap().idx, "1f606");
        assert!(catalog.default_owner("not_an_emoji").is_none());
    }

    #[test]
    fn test_unified_forms_decoded() {
        let catalog = Catalog::bundled().unwrap();
        let zap = catalog.entry("26a1").unwrap();
        assert_eq!(zap.primary_unified(), Some("\u{26A1}\u{FE0F}"));
        assert_eq!(zap.unified[1], "\u{26A1}");
        assert_eq!(zap.softbank.as_deref(), Some("\u{E13D}"));
    }

    #[test]
    fn test_from_json_rejects_bad_codepoints() {
        let json = r#"{"emoji": [{"idx": "x", "unified": ["ZZZ"], "short_names": ["x"], "sheet_x": 0, "sheet_y": 0, "mask": 1}]}"#;
        assert!(Catalog::from_json(json).is_err());
    }

    #[test]
    fn test_from_json_minimal() {
        let json = r#"{"emoji": [{"idx": "1f600", "unified": ["1F600"], "short_names": ["grinning"], "sheet_x": 1, "sheet_y": 2, "mask": 3}]}"#;
        let catalog = Catalog::from_json(json).unwrap();
        let entry = catalog.entry("1f600").unwrap();
        assert_eq!(entry.sheet_x, 1);
        assert_eq!(entry.sheet_y, 2);
        assert_eq!(entry.mask, ImageSetMask::APPLE | ImageSetMask::GOOGLE);
        assert!(catalog.emoticons().is_empty());
    }
}
