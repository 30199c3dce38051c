//! Emoji catalog.
//!
//! This crate holds the read-only emoji data the conversion engine queries:
//!
//! - **Entries**: base emoji with codepoints, short names and sheet positions via [`EmojiEntry`]
//! - **Variations**: skin-tone children of a base emoji via [`VariationEntry`]
//! - **Obsolete mappings**: legacy assets for image sets that lag behind via [`ObsoleteEntry`]
//! - **Emoticons**: the default ASCII emoticon table
//!
//! Catalogs are deserialized from JSON with [`Catalog::from_json`]. A small
//! representative catalog ships with the crate via [`Catalog::bundled`].
//!
//! # Example
//!
//! ```
//! use emojify_catalog::{Catalog, SkinTone};
//!
//! let catalog = Catalog::bundled().unwrap();
//! let thumbs = catalog.entry("1f44d").unwrap();
//! assert_eq!(thumbs.short_name(), "+1");
//! assert!(catalog.variation("1f44d", SkinTone::Tone2).is_some());
//! ```

mod catalog;
mod entry;
mod mask;
mod skin_tone;
mod source;

pub use catalog::Catalog;
pub use entry::{EmojiEntry, ObsoleteEntry, VariationEntry};
pub use mask::ImageSetMask;
pub use skin_tone::SkinTone;
pub use source::decode_codepoints;
