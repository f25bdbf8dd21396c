//! Service layer module.
//!
//! Contains the random generation engine and the profile registry.

pub mod registry;
pub mod secure;

pub use registry::ConfigRegistry;
pub use secure::{OsByteSource, SecureIdGenerator};
