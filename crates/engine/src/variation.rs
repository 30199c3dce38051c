//! Skin-tone combination.
//!
//! A failed combination is not an error: callers render the base and the
//! tone glyph side by side instead.

use emojify_catalog::{Catalog, SkinTone, VariationEntry};

/// The variation of `base` for `tone`, if the catalog has one.
#[must_use]
pub fn resolve<'c>(catalog: &'c Catalog, base: &str, tone: SkinTone) -> Option<&'c VariationEntry> {
    catalog.variation(base, tone)
}

/// Like [`resolve`], keyed by tone short name (`skin-tone-2` .. `skin-tone-6`).
#[must_use]
pub fn resolve_named<'c>(catalog: &'c Catalog, base: &str, key: &str) -> Option<&'c VariationEntry> {
    resolve(catalog, base, SkinTone::from_short_name(key)?)
}
