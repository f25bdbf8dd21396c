//! Domain models for short ID generation.
//!
//! This module contains the generation profile types and the alphabet
//! resolver.

pub mod alphabet;
pub mod config;

pub use config::{DEFAULT_LENGTH, IdConfiguration, PartialIdConfiguration, Style, normalize};
