//! Emoji conversion engine.
//!
//! This crate resolves emoji written as colon names (`:thumbsup:`), ASCII
//! emoticons (`:)`) or native Unicode, optionally with a skin tone, and
//! renders them for the active configuration.
//!
//! # Features
//!
//! - **Colon names**: `:name:` and `:name::skin-tone-N:` via [`EmojiConverter::replace_colons`]
//! - **Unicode**: longest-match sequence recognition via [`EmojiConverter::replace_unified`]
//! - **Emoticons**: guarded emoticon matching via [`EmojiConverter::replace_emoticons`]
//! - **Aliases**: user-defined short names via [`EmojiConverter::add_aliases`]
//! - **Image sets**: multi-set fallback and obsolete assets via [`EmojiConverter::find_image`]
//!
//! # Example
//!
//! ```
//! use emojify_common::{EmojiConfig, ReplaceMode};
//! use emojify_engine::{EmojiConverter, InputSyntax};
//!
//! let config = EmojiConfig {
//!     replace_mode: Some(ReplaceMode::Unified),
//!     ..EmojiConfig::default()
//! };
//! let converter = EmojiConverter::with_bundled_catalog(config).unwrap();
//! let text = converter.replace("nice :thumbsup:", InputSyntax::Colons).unwrap();
//! assert_eq!(text, "nice \u{1F44D}");
//! ```

#![allow(clippy::missing_const_for_fn)]

mod aliases;
mod colons;
mod converter;
mod emoticons;
mod environment;
mod image;
mod render;
mod scan;
mod unified;
pub mod variation;

pub use aliases::AliasRegistry;
pub use converter::{EmojiConverter, InputSyntax};
pub use emoticons::EmoticonIndex;
pub use environment::{EnvironmentProfile, mode_for_user_agent};
pub use image::{ImageLocation, ImageSet, ImageSetResolver};
pub use unified::UnifiedIndex;
