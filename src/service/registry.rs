//! Named configuration registry.
//!
//! Profiles are stored fully normalized. All operations take `&self`; the
//! map is guarded by a read-write lock so a registry can be shared between
//! threads, with the last writer winning on a given name.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::domain::{IdConfiguration, PartialIdConfiguration, normalize};
use crate::error::{Result, ShortIdError};

/// In-memory mapping from profile name to configuration.
#[derive(Debug, Default)]
pub struct ConfigRegistry {
    /// Stored profiles indexed by name.
    profiles: RwLock<HashMap<String, IdConfiguration>>,
}

impl ConfigRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded from `name -> partial configuration`.
    ///
    /// Each entry is normalized under its key; a `name` inside the partial
    /// configuration is overridden by the key.
    #[must_use]
    pub fn with_profiles<I, K>(profiles: I) -> Self
    where
        I: IntoIterator<Item = (K, PartialIdConfiguration)>,
        K: Into<String>,
    {
        let profiles: HashMap<String, IdConfiguration> = profiles
            .into_iter()
            .map(|(name, partial)| {
                let name = name.into();
                let mut config = normalize(&partial);
                config.name.clone_from(&name);
                (name, config)
            })
            .collect();

        debug!(count = profiles.len(), "Configuration registry seeded");

        Self {
            profiles: RwLock::new(profiles),
        }
    }

    /// Register or overwrite a profile.
    ///
    /// # Errors
    ///
    /// Returns [`ShortIdError::MissingName`] if the name is absent or empty.
    pub fn add(&self, partial: &PartialIdConfiguration) -> Result<IdConfiguration> {
        if partial.required_name().is_none() {
            return Err(ShortIdError::MissingName);
        }

        let config = normalize(partial);
        debug!(
            name = %config.name,
            length = config.length,
            style = %config.style,
            "Profile added"
        );
        self.profiles
            .write()
            .insert(config.name.clone(), config.clone());
        Ok(config)
    }

    /// Remove a profile. Removing an unknown name is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ShortIdError::MissingName`] if the name is absent or empty.
    pub fn remove(&self, partial: &PartialIdConfiguration) -> Result<bool> {
        let name = partial.required_name().ok_or(ShortIdError::MissingName)?;
        let removed = self.profiles.write().remove(name).is_some();
        debug!(name, removed, "Profile removed");
        Ok(removed)
    }

    /// Snapshot of a stored profile.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<IdConfiguration> {
        self.profiles.read().get(name).cloned()
    }

    /// Look up a profile, failing if it is not registered.
    ///
    /// # Errors
    ///
    /// Returns [`ShortIdError::ConfigurationNotFound`] if `name` is unknown.
    pub fn lookup(&self, name: &str) -> Result<IdConfiguration> {
        self.get(name)
            .ok_or_else(|| ShortIdError::ConfigurationNotFound(name.to_string()))
    }

    /// Sorted list of registered names.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.profiles.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.read().len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.read().is_empty()
    }
}
