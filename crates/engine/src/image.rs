//! Image-set resolution.
//!
//! Each glyph is looked up in the configured image set first and then in
//! the canonical fallback order. Sprite sheets for the configured set are
//! assumed to hold every glyph, so a glyph whose individual image comes
//! from a fallback set still points at the configured set's sheet.

use std::collections::HashMap;

use emojify_catalog::{Catalog, EmojiEntry, ImageSetMask, VariationEntry};
use emojify_common::{EmojiConfig, EmojiError, EmojiResult};

/// A registered image set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSet {
    /// Identifier, e.g. `apple`.
    pub name: String,
    /// Directory prefix for individual images.
    pub path: String,
    /// Sprite sheet URL.
    pub sheet: String,
    /// Sprite sheet grid size.
    pub sheet_size: u32,
    /// Catalog mask bit for this set.
    pub mask: ImageSetMask,
}

/// Where a glyph's artwork lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLocation {
    /// Individual image URL.
    pub path: String,
    /// Sprite sheet URL.
    pub sheet: String,
    /// Sprite sheet grid size.
    pub sheet_size: u32,
    /// Sheet column, absent for custom images.
    pub sheet_x: Option<u32>,
    /// Sheet row, absent for custom images.
    pub sheet_y: Option<u32>,
    /// Identifier of the glyph, including any skin tone.
    pub full_idx: String,
    /// Whether the combined skin-tone glyph was found.
    pub is_variation: bool,
    /// Image set the individual image came from.
    pub image_set: String,
}

/// Finds artwork for glyphs across the registered image sets.
#[derive(Debug, Clone)]
pub struct ImageSetResolver {
    configured: String,
    try_order: Vec<String>,
    sets: HashMap<String, ImageSet>,
    suffix: String,
}

impl ImageSetResolver {
    /// Build the registry and try order from configuration.
    #[must_use]
    pub fn from_config(config: &EmojiConfig) -> Self {
        let sets = config
            .image_sets
            .iter()
            .map(|(name, set)| {
                (
                    name.clone(),
                    ImageSet {
                        name: name.clone(),
                        path: set.path.clone(),
                        sheet: set.sheet.clone(),
                        sheet_size: set.sheet_size,
                        mask: ImageSetMask::from_raw(set.mask),
                    },
                )
            })
            .collect();

        Self {
            configured: config.img_set.clone(),
            try_order: config.try_order().into_iter().map(str::to_string).collect(),
            sets,
            suffix: config.img_suffix.clone(),
        }
    }

    /// The configured image set, or the fatal error if it is not registered.
    pub fn configured(&self) -> EmojiResult<&ImageSet> {
        self.sets.get(&self.configured).ok_or_else(|| {
            tracing::warn!(img_set = %self.configured, "Configured image set is not registered");
            EmojiError::UnknownImageSet(self.configured.clone())
        })
    }

    /// Locate artwork for `entry`, or for its `variation` when given.
    pub fn find_image(
        &self,
        catalog: &Catalog,
        entry: &EmojiEntry,
        variation: Option<&VariationEntry>,
    ) -> EmojiResult<ImageLocation> {
        let primary = self.configured()?;

        let (full_idx, sheet_x, sheet_y, mask) = match variation {
            Some(var) => (&var.idx, var.sheet_x, var.sheet_y, var.mask),
            None => (&entry.idx, entry.sheet_x, entry.sheet_y, entry.mask),
        };

        for set in self.try_order.iter().filter_map(|name| self.sets.get(name)) {
            if mask.has_set(set.mask) {
                if set.name != primary.name {
                    tracing::trace!(idx = %full_idx, from = %primary.name, to = %set.name, "Falling back to another image set");
                }
                return Ok(ImageLocation {
                    path: self.image_path(set, full_idx),
                    sheet: primary.sheet.clone(),
                    sheet_size: primary.sheet_size,
                    sheet_x: Some(sheet_x),
                    sheet_y: Some(sheet_y),
                    full_idx: full_idx.clone(),
                    is_variation: variation.is_some(),
                    image_set: set.name.clone(),
                });
            }

            if let Some(obsolete) = catalog
                .obsolete(full_idx)
                .filter(|obsolete| obsolete.mask.has_set(set.mask))
            {
                tracing::trace!(idx = %full_idx, replacement = %obsolete.replacement, set = %set.name, "Using obsolete image");
                return Ok(ImageLocation {
                    path: self.image_path(set, &obsolete.replacement),
                    sheet: set.sheet.clone(),
                    sheet_size: set.sheet_size,
                    sheet_x: Some(obsolete.sheet_x),
                    sheet_y: Some(obsolete.sheet_y),
                    full_idx: full_idx.clone(),
                    is_variation: variation.is_some(),
                    image_set: set.name.clone(),
                });
            }
        }

        Err(EmojiError::NoImageAvailable(full_idx.clone()))
    }

    /// Location for an entry that carries its own image.
    pub fn custom(&self, entry: &EmojiEntry, path: &str) -> EmojiResult<ImageLocation> {
        let primary = self.configured()?;
        Ok(ImageLocation {
            path: path.to_string(),
            sheet: primary.sheet.clone(),
            sheet_size: primary.sheet_size,
            sheet_x: None,
            sheet_y: None,
            full_idx: entry.idx.clone(),
            is_variation: false,
            image_set: primary.name.clone(),
        })
    }

    fn image_path(&self, set: &ImageSet, idx: &str) -> String {
        format!("{}{idx}.png{}", set.path, self.suffix)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use emojify_catalog::SkinTone;

    use super::*;

    fn resolver(img_set: &str) -> ImageSetResolver {
        ImageSetResolver::from_config(&EmojiConfig {
            img_set: img_set.to_string(),
            ..EmojiConfig::default()
        })
    }

    #[test]
    fn test_configured_set_wins() {
        let catalog = Catalog::bundled().unwrap();
        let entry = catalog.entry("1f604").unwrap();
        let img = resolver("google").find_image(&catalog, entry, None).unwrap();
        assert_eq!(img.path, "/emoji-data/img-google-64/1f604.png");
        assert_eq!(img.sheet, "/emoji-data/sheet_google_64.png");
        assert_eq!(img.image_set, "google");
        assert_eq!((img.sheet_x, img.sheet_y), (Some(0), Some(6)));
    }

    #[test]
    fn test_fallback_keeps_configured_sheet() {
        let catalog = Catalog::bundled().unwrap();
        // twitter + facebook only
        let entry = catalog.entry("1f9d0").unwrap();
        let img = resolver("apple").find_image(&catalog, entry, None).unwrap();
        assert_eq!(img.path, "/emoji-data/img-twitter-64/1f9d0.png");
        assert_eq!(img.sheet, "/emoji-data/sheet_apple_64.png");
        assert_eq!(img.image_set, "twitter");
    }

    #[test]
    fn test_obsolete_mapping_uses_candidate_sheet() {
        let catalog = Catalog::bundled().unwrap();
        // apple only, with a legacy asset in google and twitter
        let entry = catalog.entry("1f575-fe0f").unwrap();
        let img = resolver("google").find_image(&catalog, entry, None).unwrap();
        assert_eq!(
            img.path,
            "/emoji-data/img-google-64/1f575-fe0f-200d-2642-fe0f.png"
        );
        assert_eq!(img.sheet, "/emoji-data/sheet_google_64.png");
        assert_eq!((img.sheet_x, img.sheet_y), (Some(50), Some(12)));
        assert_eq!(img.full_idx, "1f575-fe0f");
    }

    #[test]
    fn test_variation_location() {
        let catalog = Catalog::bundled().unwrap();
        let entry = catalog.entry("1f44d").unwrap();
        let var = catalog.variation("1f44d", SkinTone::Tone2);
        let img = resolver("apple").find_image(&catalog, entry, var).unwrap();
        assert!(img.is_variation);
        assert_eq!(img.full_idx, "1f44d-1f3fb");
        assert_eq!(img.path, "/emoji-data/img-apple-64/1f44d-1f3fb.png");
        assert_eq!((img.sheet_x, img.sheet_y), (Some(7), Some(6)));
    }

    #[test]
    fn test_suffix_appended() {
        let catalog = Catalog::bundled().unwrap();
        let resolver = ImageSetResolver::from_config(&EmojiConfig {
            img_suffix: "?v=2".to_string(),
            ..EmojiConfig::default()
        });
        let img = resolver
            .find_image(&catalog, catalog.entry("26a1").unwrap(), None)
            .unwrap();
        assert_eq!(img.path, "/emoji-data/img-apple-64/26a1.png?v=2");
    }

    #[test]
    fn test_unknown_set_is_fatal() {
        let catalog = Catalog::bundled().unwrap();
        let entry = catalog.entry("1f604").unwrap();
        let err = resolver("emojione").find_image(&catalog, entry, None).unwrap_err();
        assert!(matches!(err, EmojiError::UnknownImageSet(ref set) if set == "emojione"));
    }

    #[test]
    fn test_no_set_has_glyph() {
        let catalog = Catalog::from_json(
            r#"{"emoji": [{"idx": "1f600", "unified": ["1F600"], "short_names": ["grinning"], "sheet_x": 0, "sheet_y": 0, "mask": 64}]}"#,
        )
        .unwrap();
        let entry = catalog.entry("1f600").unwrap();
        let err = resolver("apple").find_image(&catalog, entry, None).unwrap_err();
        assert!(matches!(err, EmojiError::NoImageAvailable(_)));
    }

    #[test]
    fn test_custom_image() {
        let catalog = Catalog::bundled().unwrap();
        let entry = catalog.entry("shipit").unwrap();
        let img = resolver("apple")
            .custom(entry, "/emoji/custom/shipit.png")
            .unwrap();
        assert_eq!(img.path, "/emoji/custom/shipit.png");
        assert_eq!(img.sheet_x, None);
    }
}
