//! Short-name registry.

use std::collections::HashMap;

use emojify_catalog::{Catalog, EmojiEntry};

/// Live mapping from short name to catalog identifier.
///
/// Seeded from every entry's short names; callers can then point names at
/// other entries or drop them again.
#[derive(Debug, Clone, Default)]
pub struct AliasRegistry {
    names: HashMap<String, String>,
}

impl AliasRegistry {
    /// Build the registry with one pass over the catalog's short names.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut names = HashMap::new();
        for entry in catalog.entries() {
            for name in &entry.short_names {
                names
                    .entry(name.clone())
                    .or_insert_with(|| entry.idx.clone());
            }
        }
        tracing::debug!(names = names.len(), "Built short-name index");
        Self { names }
    }

    /// Identifier currently bound to `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.names.get(name).map(String::as_str)
    }

    /// Entry currently bound to `name`.
    #[must_use]
    pub fn resolve<'c>(&self, catalog: &'c Catalog, name: &str) -> Option<&'c EmojiEntry> {
        catalog.entry(self.lookup(name)?)
    }

    /// Bind each name to an identifier, replacing any existing binding.
    pub fn add<I, K, V>(&mut self, catalog: &Catalog, mapping: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, idx) in mapping {
            let (name, idx) = (name.into(), idx.into());
            if catalog.entry(&idx).is_none() {
                tracing::warn!(name = %name, idx = %idx, "Alias points to unknown emoji");
            }
            self.names.insert(name, idx);
        }
    }

    /// Drop each name, then restore its built-in owner if the catalog has one.
    pub fn remove<I, S>(&mut self, catalog: &Catalog, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            self.names.remove(name);
            if let Some(owner) = catalog.default_owner(name) {
                self.names.insert(name.to_string(), owner.idx.clone());
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }
}
