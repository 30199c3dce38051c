//! The conversion facade.

use std::sync::Arc;

use emojify_catalog::{Catalog, EmojiEntry, SkinTone};
use emojify_common::{EmojiConfig, EmojiResult};
use once_cell::unsync::OnceCell;

use crate::aliases::AliasRegistry;
use crate::colons::ColonTokenizer;
use crate::emoticons::EmoticonIndex;
use crate::environment::EnvironmentProfile;
use crate::image::{ImageLocation, ImageSetResolver};
use crate::render::Renderer;
use crate::unified::UnifiedIndex;
use crate::variation;

/// Input syntax recognized by [`EmojiConverter::replace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSyntax {
    /// `:name:` and `:name::skin-tone-N:`.
    Colons,
    /// Native Unicode sequences.
    Unified,
    /// ASCII emoticons such as `:)`.
    Emoticons,
}

/// Converts emoji between colon names, emoticons, Unicode and markup.
///
/// Indices are built on first use and kept for the lifetime of the
/// converter; separate converters never share them.
pub struct EmojiConverter {
    catalog: Arc<Catalog>,
    config: EmojiConfig,
    images: ImageSetResolver,
    aliases: OnceCell<AliasRegistry>,
    emoticons: OnceCell<EmoticonIndex>,
    unified: OnceCell<UnifiedIndex>,
    profile: OnceCell<EnvironmentProfile>,
}

impl EmojiConverter {
    /// Create a converter over a shared catalog.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, config: EmojiConfig) -> Self {
        let images = ImageSetResolver::from_config(&config);
        Self {
            catalog,
            config,
            images,
            aliases: OnceCell::new(),
            emoticons: OnceCell::new(),
            unified: OnceCell::new(),
            profile: OnceCell::new(),
        }
    }

    /// Create a converter over the bundled catalog.
    pub fn with_bundled_catalog(config: EmojiConfig) -> EmojiResult<Self> {
        Ok(Self::new(Arc::new(Catalog::bundled()?), config))
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &EmojiConfig {
        &self.config
    }

    /// The catalog being queried.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The environment profile driving output mode selection.
    pub fn environment(&self) -> EnvironmentProfile {
        *self
            .profile
            .get_or_init(|| EnvironmentProfile::detect(&self.config))
    }

    /// Replace every emoji written in `via` syntax with its rendering.
    ///
    /// Unrecognized text passes through unchanged. The only error is a
    /// broken configuration, such as an unknown image set.
    pub fn replace(&self, text: &str, via: InputSyntax) -> EmojiResult<String> {
        match via {
            InputSyntax::Colons => self.replace_colons(text),
            InputSyntax::Unified => self.replace_unified(text),
            InputSyntax::Emoticons => self.replace_emoticons(text),
        }
    }

    /// Render `:name:` and `:name::skin-tone-N:` sequences.
    pub fn replace_colons(&self, text: &str) -> EmojiResult<String> {
        let renderer = self.renderer();
        ColonTokenizer {
            catalog: &self.catalog,
            aliases: self.aliases(),
            renderer: &renderer,
            allow_caps: self.config.allow_caps,
        }
        .replace(text)
    }

    /// Render native Unicode emoji sequences.
    pub fn replace_unified(&self, text: &str) -> EmojiResult<String> {
        let index = self
            .unified
            .get_or_try_init(|| UnifiedIndex::build(&self.catalog))?;
        index.replace(text, &self.catalog, &self.renderer())
    }

    /// Render ASCII emoticons, along with any colon names in the text.
    pub fn replace_emoticons(&self, text: &str) -> EmojiResult<String> {
        let colonized = self.replace_emoticons_with_colons(text);
        self.replace_colons(&colonized)
    }

    /// Rewrite ASCII emoticons as `:name:` text.
    ///
    /// Never fails: if the emoticon table cannot be compiled the text is
    /// returned as is.
    pub fn replace_emoticons_with_colons(&self, text: &str) -> String {
        let index = match self.emoticons.get_or_try_init(|| {
            EmoticonIndex::build(&self.catalog, self.config.emoticons_html_escaped)
        }) {
            Ok(index) => index,
            Err(err) => {
                tracing::warn!(error = %err, "Emoticon index unavailable");
                return text.to_string();
            }
        };
        let aliases = self.aliases();
        index.replace_with_colons(text, |name| {
            aliases
                .resolve(&self.catalog, name)
                .map(|entry| entry.short_name().to_string())
        })
    }

    /// Point short names at catalog identifiers, overriding built-in names.
    pub fn add_aliases<I, K, V>(&mut self, mapping: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.update_aliases(|registry, catalog| registry.add(catalog, mapping));
    }

    /// Remove short names, restoring any built-in owner.
    pub fn remove_aliases<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.update_aliases(|registry, catalog| registry.remove(catalog, names));
    }

    /// The entry a short name currently resolves to.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&EmojiEntry> {
        self.aliases().resolve(&self.catalog, name)
    }

    /// Artwork for an emoji, optionally toned. `None` for unknown identifiers.
    pub fn find_image(&self, idx: &str, tone: Option<SkinTone>) -> EmojiResult<Option<ImageLocation>> {
        let Some(entry) = self.catalog.entry(idx) else {
            return Ok(None);
        };
        let variation = tone.and_then(|tone| variation::resolve(&self.catalog, idx, tone));
        let location = match &entry.image {
            Some(path) => self.images.custom(entry, path)?,
            None => self.images.find_image(&self.catalog, entry, variation)?,
        };
        Ok(Some(location))
    }

    fn aliases(&self) -> &AliasRegistry {
        self.aliases
            .get_or_init(|| AliasRegistry::from_catalog(&self.catalog))
    }

    fn update_aliases<F>(&mut self, update: F)
    where
        F: FnOnce(&mut AliasRegistry, &Catalog),
    {
        let mut registry = self
            .aliases
            .take()
            .unwrap_or_else(|| AliasRegistry::from_catalog(&self.catalog));
        update(&mut registry, &self.catalog);
        tracing::debug!(names = registry.len(), "Updated short-name index");
        self.aliases = OnceCell::with_value(registry);
    }

    fn renderer(&self) -> Renderer<'_> {
        Renderer::new(&self.catalog, &self.config, &self.images, self.environment())
    }
}
