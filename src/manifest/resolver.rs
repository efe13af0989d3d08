use std::collections::HashMap;

use crate::error::HostError;

/// Source of loadable locators for logical asset names. In the browser this
/// is the bundler's URL table; tests inject a plain map.
pub trait AssetLocator {
    fn locate(&self, name: &str) -> Option<String>;
}

impl AssetLocator for HashMap<String, String> {
    fn locate(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Immutable mapping from logical asset name to resource locator.
///
/// The key set equals exactly the name set it was resolved from; there is no
/// way to grow or shrink it after construction.
#[derive(Debug, Clone)]
pub struct AssetManifest {
    entries: HashMap<String, String>,
}

impl AssetManifest {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Resolves a requested name set against an injected locator, producing the
/// full manifest or nothing at all.
pub struct Resolver<L: AssetLocator> {
    locator: L,
}

impl<L: AssetLocator> Resolver<L> {
    pub fn new(locator: L) -> Self {
        Self { locator }
    }

    /// Fails on the first name the locator cannot supply. A partial manifest
    /// is never produced: the core cannot render with missing models, so a
    /// gap here must stop startup.
    pub fn resolve<'a, I>(&self, names: I) -> Result<AssetManifest, HostError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut entries = HashMap::new();
        for name in names {
            let locator = self
                .locator
                .locate(name)
                .ok_or_else(|| HostError::MissingAsset(name.to_string()))?;
            entries.insert(name.to_string(), locator);
        }
        log::info!("resolved {} asset locators", entries.len());
        Ok(AssetManifest { entries })
    }
}
