//! Error code constants.
//!
//! Error codes are organized by category:
//! - 1xxx: Configuration errors
//! - 3xxx: Validation errors
//! - 5xxx: Internal/System errors

/// Error code type with semantic categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(i32);

impl ErrorCode {
    // ===== Configuration Errors (1xxx) =====

    /// Profile name missing or empty.
    pub const MISSING_NAME: Self = Self(1001);

    /// Named profile not registered.
    pub const CONFIG_NOT_FOUND: Self = Self(1002);

    /// Settings source unreadable or invalid.
    pub const INVALID_SETTINGS: Self = Self(1003);

    // ===== Validation Errors (3xxx) =====

    /// Requested length is zero or negative.
    pub const INVALID_LENGTH: Self = Self(3001);

    /// Unknown alphabet style.
    pub const INVALID_STYLE: Self = Self(3002);

    /// Requested length or count cannot be allocated.
    pub const TOO_LARGE: Self = Self(3003);

    // ===== Internal/System Errors (5xxx) =====

    /// Secure random source unavailable.
    pub const ENTROPY_UNAVAILABLE: Self = Self(5001);

    /// Get the error code as an i32.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Get the category of this error code.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self.0 {
            1000..=1999 => ErrorCategory::Configuration,
            3000..=3999 => ErrorCategory::Validation,
            5000..=5999 => ErrorCategory::Internal,
            _ => ErrorCategory::Unknown,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

/// Error category based on error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Profile and settings errors (1xxx).
    Configuration,
    /// Caller input errors (3xxx).
    Validation,
    /// Internal/system errors (5xxx).
    Internal,
    /// Unknown category.
    Unknown,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "configuration"),
            Self::Validation => write!(f, "validation"),
            Self::Internal => write!(f, "internal"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
