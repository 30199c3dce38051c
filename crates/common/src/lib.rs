//! Common utilities and shared types for emojify.
//!
//! This crate provides foundational components used across all emojify crates:
//!
//! - **Configuration**: Rendering and image-set settings via [`EmojiConfig`]
//! - **Error handling**: Unified error types via [`EmojiError`] and [`EmojiResult`]
//!
//! # Example
//!
//! ```no_run
//! use emojify_common::{EmojiConfig, EmojiResult};
//!
//! fn example() -> EmojiResult<()> {
//!     let config = EmojiConfig::load()?;
//!     println!("Image set: {}", config.img_set);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;

pub use config::{EmojiConfig, FALLBACK_ORDER, ImageSetConfig, ImageStyle, ReplaceMode};
pub use error::{EmojiError, EmojiResult};
