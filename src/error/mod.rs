//! Error handling module.
//!
//! Every failure is returned synchronously to the caller of the public
//! operation; nothing here is retried.

pub mod codes;

pub use codes::{ErrorCategory, ErrorCode};

/// Library-level error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortIdError {
    /// `add`/`remove` called without a non-empty profile name.
    #[error("Profile name is required")]
    MissingName,

    /// Named profile is not registered.
    #[error("Configuration not found: {0}")]
    ConfigurationNotFound(String),

    /// Requested length is zero or negative.
    #[error("Invalid length: {0} (must be greater than 0)")]
    InvalidLength(i64),

    /// Requested length or count cannot be allocated.
    #[error("Requested size too large: {0}")]
    TooLarge(String),

    /// Unrecognized alphabet style.
    #[error("Invalid style: {0}")]
    InvalidStyle(String),

    /// The operating system could not provide secure random bytes.
    #[error("Secure random source failed: {0}")]
    Entropy(String),

    /// Settings source could not be loaded or validated.
    #[error("Invalid settings: {0}")]
    Settings(String),
}

impl ShortIdError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::MissingName => ErrorCode::MISSING_NAME,
            Self::ConfigurationNotFound(_) => ErrorCode::CONFIG_NOT_FOUND,
            Self::InvalidLength(_) => ErrorCode::INVALID_LENGTH,
            Self::TooLarge(_) => ErrorCode::TOO_LARGE,
            Self::InvalidStyle(_) => ErrorCode::INVALID_STYLE,
            Self::Entropy(_) => ErrorCode::ENTROPY_UNAVAILABLE,
            Self::Settings(_) => ErrorCode::INVALID_SETTINGS,
        }
    }
}

impl From<config::ConfigError> for ShortIdError {
    fn from(err: config::ConfigError) -> Self {
        Self::Settings(err.to_string())
    }
}

/// Result type alias using `ShortIdError`.
pub type Result<T> = std::result::Result<T, ShortIdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ShortIdError::MissingName.error_code(), ErrorCode::MISSING_NAME);
        assert_eq!(
            ShortIdError::ConfigurationNotFound("test".to_string()).error_code(),
            ErrorCode::CONFIG_NOT_FOUND
        );
        assert_eq!(
            ShortIdError::InvalidLength(0).error_code(),
            ErrorCode::INVALID_LENGTH
        );
        assert_eq!(
            ShortIdError::TooLarge("length 1".to_string()).error_code(),
            ErrorCode::TOO_LARGE
        );
        assert_eq!(
            ShortIdError::Entropy("test".to_string())
                .error_code()
                .category(),
            ErrorCategory::Internal
        );
    }

    #[test]
    fn test_error_messages_identify_value() {
        assert_eq!(
            ShortIdError::ConfigurationNotFound("session".to_string()).to_string(),
            "Configuration not found: session"
        );
        assert_eq!(
            ShortIdError::InvalidStyle("base32".to_string()).to_string(),
            "Invalid style: base32"
        );
        assert!(ShortIdError::InvalidLength(-3).to_string().contains("-3"));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: ShortIdError = config::ConfigError::Message("bad".to_string()).into();
        assert_eq!(err, ShortIdError::Settings("bad".to_string()));
    }
}
