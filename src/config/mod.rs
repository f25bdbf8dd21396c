//! Settings management module.
//!
//! Named profiles can be declared in a settings file and loaded through the
//! `config` crate:
//!
//! ```toml
//! [profiles.session]
//! length = 32
//! style = "alphanumeric"
//!
//! [profiles.hex_key]
//! style = "hex"
//! only_lower_case = true
//! ```

use std::collections::HashMap;
use std::path::Path;

use config::{Config, File, FileFormat};
use serde::Deserialize;

use crate::domain::PartialIdConfiguration;
use crate::error::{Result, ShortIdError};

/// Generator settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratorSettings {
    /// Named profiles keyed by name.
    #[serde(default)]
    pub profiles: HashMap<String, PartialIdConfiguration>,
}

impl GeneratorSettings {
    /// Load settings from a file. The format is inferred from the extension.
    ///
    /// # Errors
    ///
    /// Returns [`ShortIdError::Settings`] if the file is missing, cannot be
    /// parsed, or fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()).required(true))
            .build()?;

        Self::from_config(config)
    }

    /// Load settings from an inline TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ShortIdError::Settings`] if the document cannot be parsed
    /// or fails validation.
    pub fn from_toml(source: &str) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;

        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<Self> {
        let settings: Self = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate the settings.
    fn validate(&self) -> Result<()> {
        for (key, profile) in &self.profiles {
            if key.is_empty() {
                return Err(ShortIdError::Settings(
                    "profile name cannot be empty".to_string(),
                ));
            }
            if let Some(name) = &profile.name
                && name != key
            {
                return Err(ShortIdError::Settings(format!(
                    "profiles.{key}.name must match its key, got '{name}'"
                )));
            }
        }

        Ok(())
    }
}
