//! # IDBuilder ShortID
//!
//! Short, unique string IDs drawn from a cryptographically secure random
//! source, as a compact alternative to UUIDs:
//!
//! - **Styles**: `alphanumeric`, `extended` (URL-safe or not) and `hex`
//! - **Unbiased sampling**: power-of-two masking with rejection
//! - **Named profiles**: register a configuration once, generate by name
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                            ShortId                             │
//! ├────────────────────────────────────────────────────────────────┤
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────────┐  │
//! │  │  Registry    │→ │  Alphabet    │→ │  Secure generator    │  │
//! │  │  (profiles)  │  │  resolver    │  │  (OS CSPRNG)         │  │
//! │  └──────────────┘  └──────────────┘  └──────────────────────┘  │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use idbuilder_shortid::{PartialIdConfiguration, ShortId, Style};
//!
//! let short_id = ShortId::new();
//! let id = short_id.create(Some(12), Some(Style::Alphanumeric), None, None)?;
//! assert_eq!(id.len(), 12);
//!
//! short_id.add(&PartialIdConfiguration::named("api-key").length(32).style(Style::Hex))?;
//! assert_eq!(short_id.custom("api-key")?.len(), 32);
//! # Ok::<(), idbuilder_shortid::ShortIdError>(())
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;

pub use api::ShortId;
pub use config::GeneratorSettings;
pub use domain::{IdConfiguration, PartialIdConfiguration, Style};
pub use error::{ErrorCode, Result, ShortIdError};
