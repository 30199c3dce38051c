//! Error types for emojify.

use thiserror::Error;

/// Emoji conversion result type.
pub type EmojiResult<T> = Result<T, EmojiError>;

/// Emoji conversion error type.
///
/// Unresolvable input is never an error: it passes through unchanged.
/// Only broken configuration or catalog data surfaces here.
#[derive(Debug, Error)]
pub enum EmojiError {
    // === Configuration Errors ===
    #[error("Unknown image set: {0}")]
    UnknownImageSet(String),

    #[error("No image set provides an image for {0}")]
    NoImageAvailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // === Data Errors ===
    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl EmojiError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownImageSet(_) => "UNKNOWN_IMAGE_SET",
            Self::NoImageAvailable(_) => "NO_IMAGE_AVAILABLE",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Catalog(_) => "CATALOG_ERROR",
        }
    }

    /// Returns whether this error was caused by the caller's configuration.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnknownImageSet(_) | Self::NoImageAvailable(_) | Self::Config(_)
        )
    }
}

// === From implementations ===

impl From<config::ConfigError> for EmojiError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<serde_json::Error> for EmojiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Catalog(err.to_string())
    }
}

impl From<regex::Error> for EmojiError {
    fn from(err: regex::Error) -> Self {
        Self::Catalog(err.to_string())
    }
}
