//! Public in-process API.
//!
//! [`ShortId`] combines the secure generator with a profile registry. It is
//! `Send + Sync`; share it behind an `Arc` to use one registry from several
//! threads.

use crate::config::GeneratorSettings;
use crate::domain::{IdConfiguration, PartialIdConfiguration, Style, normalize};
use crate::error::Result;
use crate::service::secure::ByteSource;
use crate::service::{ConfigRegistry, OsByteSource, SecureIdGenerator};

/// Short ID generator with named profiles.
///
/// Every public constructor draws from the operating-system CSPRNG; the
/// byte source cannot be replaced from outside the crate.
///
/// ```compile_fail
/// use idbuilder_shortid::ShortId;
/// use idbuilder_shortid::service::ConfigRegistry;
/// use idbuilder_shortid::service::secure::ByteSource;
///
/// struct Zero;
///
/// impl ByteSource for Zero {
///     fn fill(&self, buf: &mut [u8]) -> idbuilder_shortid::Result<()> {
///         buf.fill(0);
///         Ok(())
///     }
/// }
///
/// let _ = ShortId::with_source(Zero, ConfigRegistry::new());
/// ```
#[derive(Debug)]
pub struct ShortId<S = OsByteSource> {
    /// Random generation engine.
    generator: SecureIdGenerator<S>,
    /// Named profiles.
    registry: ConfigRegistry,
}

impl ShortId {
    /// Create a generator with no registered profiles.
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(OsByteSource, ConfigRegistry::new())
    }

    /// Create a generator seeded with `name -> partial configuration`.
    #[must_use]
    pub fn with_profiles<I, K>(profiles: I) -> Self
    where
        I: IntoIterator<Item = (K, PartialIdConfiguration)>,
        K: Into<String>,
    {
        Self::with_source(OsByteSource, ConfigRegistry::with_profiles(profiles))
    }

    /// Create a generator seeded with the profiles from loaded settings.
    #[must_use]
    pub fn from_settings(settings: &GeneratorSettings) -> Self {
        Self::with_profiles(settings.profiles.clone())
    }
}

impl Default for ShortId {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ByteSource> ShortId<S> {
    /// Create a generator over `source` with an existing registry.
    pub(crate) fn with_source(source: S, registry: ConfigRegistry) -> Self {
        Self {
            generator: SecureIdGenerator::with_source(source),
            registry,
        }
    }

    /// Generate an ID from ad-hoc parameters. Absent values take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShortIdError::InvalidLength`] if `length` is given
    /// and is zero or negative.
    pub fn create(
        &self,
        length: Option<i64>,
        style: Option<Style>,
        only_lower_case: Option<bool>,
        url_safe: Option<bool>,
    ) -> Result<String> {
        self.create_with(&PartialIdConfiguration {
            name: None,
            length,
            only_lower_case,
            style,
            url_safe,
        })
    }

    /// Generate an ID from a partial configuration without registering it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShortIdError::InvalidLength`] for a non-positive length.
    pub fn create_with(&self, partial: &PartialIdConfiguration) -> Result<String> {
        self.generator.generate(&normalize(partial))
    }

    /// Generate `count` IDs from a partial configuration.
    ///
    /// # Errors
    ///
    /// Same as [`ShortId::create_with`].
    pub fn create_many(&self, count: usize, partial: &PartialIdConfiguration) -> Result<Vec<String>> {
        self.generator.generate_many(&normalize(partial), count)
    }

    /// Register or overwrite a named profile.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShortIdError::MissingName`] if the name is absent or empty.
    pub fn add(&self, partial: &PartialIdConfiguration) -> Result<IdConfiguration> {
        self.registry.add(partial)
    }

    /// Deregister a named profile. Returns whether a profile was removed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShortIdError::MissingName`] if the name is absent or empty.
    pub fn remove(&self, partial: &PartialIdConfiguration) -> Result<bool> {
        self.registry.remove(partial)
    }

    /// Generate an ID using a registered profile.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShortIdError::ConfigurationNotFound`] for an unknown
    /// name, or [`crate::ShortIdError::InvalidLength`] if the profile's
    /// length is not positive.
    pub fn custom(&self, name: &str) -> Result<String> {
        let config = self.registry.lookup(name)?;
        self.generator.generate(&config)
    }

    /// Generate `count` IDs using a registered profile.
    ///
    /// # Errors
    ///
    /// Same as [`ShortId::custom`].
    pub fn custom_many(&self, name: &str, count: usize) -> Result<Vec<String>> {
        let config = self.registry.lookup(name)?;
        self.generator.generate_many(&config, count)
    }

    /// Snapshot of a registered profile.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<IdConfiguration> {
        self.registry.get(name)
    }

    /// Sorted names of registered profiles.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.registry.names()
    }

    /// Number of registered profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether no profiles are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}
