//! Secure ID generation.
//!
//! Characters are picked by masking secure random bytes down to the
//! smallest power-of-two range covering the alphabet and discarding values
//! that fall outside it. Every accepted index is equally likely, so no
//! character is favoured the way `byte % len` would favour the low ones.

use std::collections::TryReserveError;

use rand::TryRngCore;
use rand::rngs::OsRng;
use tracing::trace;

use crate::domain::IdConfiguration;
use crate::error::{Result, ShortIdError};

/// Margin applied to the expected number of bytes per batch.
const BATCH_MARGIN: f64 = 1.6;

/// Source of random bytes for the generator.
pub trait ByteSource: Send + Sync {
    /// Fill `buf` completely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ShortIdError::Entropy`] if the source cannot deliver.
    fn fill(&self, buf: &mut [u8]) -> Result<()>;
}

/// Operating-system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsByteSource;

impl ByteSource for OsByteSource {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| ShortIdError::Entropy(e.to_string()))
    }
}

/// Generator producing IDs from a resolved configuration.
///
/// Public constructors always use [`OsByteSource`]; other sources can only
/// be plugged in from inside the crate.
#[derive(Debug, Clone)]
pub struct SecureIdGenerator<S = OsByteSource> {
    /// Random byte source.
    source: S,
}

impl SecureIdGenerator {
    /// Create a generator backed by the operating-system CSPRNG.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            source: OsByteSource,
        }
    }
}

impl Default for SecureIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ByteSource> SecureIdGenerator<S> {
    /// Create a generator over a custom byte source.
    pub(crate) const fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Generate one ID.
    ///
    /// # Errors
    ///
    /// Returns [`ShortIdError::InvalidLength`] if `config.length <= 0`,
    /// [`ShortIdError::TooLarge`] if the buffers for `config.length` cannot
    /// be allocated, or [`ShortIdError::Entropy`] if the byte source fails.
    pub fn generate(&self, config: &IdConfiguration) -> Result<String> {
        let length = config.validate()?;
        let alphabet = config.alphabet();
        let size = alphabet.len();
        let mask = mask_for(size);
        let step = step_for(mask, length, size);

        let too_large =
            |_: TryReserveError| ShortIdError::TooLarge(format!("length {}", config.length));
        let mut id = String::new();
        id.try_reserve_exact(length).map_err(too_large)?;
        let mut bytes = Vec::new();
        bytes.try_reserve_exact(step).map_err(too_large)?;
        bytes.resize(step, 0_u8);

        loop {
            self.source.fill(&mut bytes)?;
            trace!(step, accepted = id.len(), length, "Random batch drawn");

            for &byte in &bytes {
                let index = usize::from(byte & mask);
                if index < size {
                    id.push(char::from(alphabet[index]));
                    if id.len() == length {
                        return Ok(id);
                    }
                }
            }
        }
    }

    /// Generate `count` independent IDs.
    ///
    /// # Errors
    ///
    /// Same as [`SecureIdGenerator::generate`].
    pub fn generate_many(&self, config: &IdConfiguration, count: usize) -> Result<Vec<String>> {
        let mut ids = Vec::new();
        ids.try_reserve_exact(count)
            .map_err(|_| ShortIdError::TooLarge(format!("count {count}")))?;
        for _ in 0..count {
            ids.push(self.generate(config)?);
        }
        Ok(ids)
    }
}

/// Smallest `2^k - 1` covering the index range `[0, size)`.
#[must_use]
pub fn mask_for(size: usize) -> u8 {
    let bits = usize::BITS - (size.saturating_sub(1) | 1).leading_zeros();
    u8::try_from((1_u32 << bits) - 1).unwrap_or(u8::MAX)
}

/// Bytes to draw per batch so one batch usually fills `length` characters.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn step_for(mask: u8, length: usize, size: usize) -> usize {
    let step = (BATCH_MARGIN * f64::from(mask) * length as f64 / size as f64).ceil() as usize;
    step.max(1)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use parking_lot::Mutex;

    use super::*;
    use crate::domain::{PartialIdConfiguration, Style, normalize};

    /// Byte source replaying a fixed script and recording batch sizes.
    struct ScriptedSource {
        bytes: Mutex<VecDeque<u8>>,
        batches: Mutex<Vec<usize>>,
    }

    impl ScriptedSource {
        fn new(bytes: &[u8]) -> Self {
            Self {
                bytes: Mutex::new(bytes.iter().copied().collect()),
                batches: Mutex::new(Vec::new()),
            }
        }
    }

    impl ByteSource for ScriptedSource {
        fn fill(&self, buf: &mut [u8]) -> Result<()> {
            self.batches.lock().push(buf.len());
            let mut bytes = self.bytes.lock();
            for slot in buf.iter_mut() {
                *slot = bytes
                    .pop_front()
                    .ok_or_else(|| ShortIdError::Entropy("script exhausted".to_string()))?;
            }
            Ok(())
        }
    }

    struct FailingSource;

    impl ByteSource for FailingSource {
        fn fill(&self, _buf: &mut [u8]) -> Result<()> {
            Err(ShortIdError::Entropy("unavailable".to_string()))
        }
    }

    fn config(length: i64, style: Style, only_lower_case: bool) -> IdConfiguration {
        normalize(
            &PartialIdConfiguration::default()
                .length(length)
                .style(style)
                .only_lower_case(only_lower_case),
        )
    }

    #[test]
    fn test_mask_for() {
        assert_eq!(mask_for(2), 1);
        assert_eq!(mask_for(16), 15);
        assert_eq!(mask_for(22), 31);
        assert_eq!(mask_for(36), 63);
        assert_eq!(mask_for(62), 63);
        assert_eq!(mask_for(64), 63);
        assert_eq!(mask_for(65), 127);
        assert_eq!(mask_for(76), 127);
    }

    #[test]
    fn test_step_for() {
        assert_eq!(step_for(31, 1, 22), 3);
        assert_eq!(step_for(63, 21, 62), 35);
        assert_eq!(step_for(127, 16, 66), 50);
    }

    #[test]
    fn test_masked_bytes_map_to_alphabet() {
        // High bits are masked away: 0x10 -> 0, 0xA1 -> 1, 0xFF -> 15.
        let source = ScriptedSource::new(&[0x10, 0xA1, 0xFF, 0x0A, 0, 0, 0]);
        let generator = SecureIdGenerator::with_source(source);
        let id = generator.generate(&config(4, Style::Hex, true)).unwrap();
        assert_eq!(id, "01fa");
    }

    #[test]
    fn test_out_of_range_values_are_rejected_and_batch_redrawn() {
        // 22 characters, mask 31: 22..=31 are rejected.
        let source = ScriptedSource::new(&[31, 22, 25, 21, 0, 0]);
        let generator = SecureIdGenerator::with_source(source);
        let id = generator.generate(&config(1, Style::Hex, false)).unwrap();
        assert_eq!(id, "f");
        assert_eq!(*generator.source.batches.lock(), vec![3, 3]);
    }

    #[test]
    fn test_stops_mid_batch() {
        let source = ScriptedSource::new(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let generator = SecureIdGenerator::with_source(source);
        let id = generator.generate(&config(2, Style::Hex, true)).unwrap();
        assert_eq!(id, "12");
        assert_eq!(generator.source.batches.lock().len(), 1);
    }

    #[test]
    fn test_invalid_length() {
        let generator = SecureIdGenerator::new();
        assert_eq!(
            generator.generate(&config(0, Style::Extended, false)),
            Err(ShortIdError::InvalidLength(0))
        );
        assert_eq!(
            generator.generate(&config(-5, Style::Hex, false)),
            Err(ShortIdError::InvalidLength(-5))
        );
    }

    #[test]
    fn test_unallocatable_length_is_an_error() {
        let generator = SecureIdGenerator::new();
        let err = generator
            .generate(&config(i64::MAX, Style::Extended, false))
            .unwrap_err();
        assert!(matches!(err, ShortIdError::TooLarge(_)));
        assert_eq!(err.error_code(), crate::error::ErrorCode::TOO_LARGE);
    }

    #[test]
    fn test_unallocatable_count_is_an_error() {
        let generator = SecureIdGenerator::new();
        let err = generator
            .generate_many(&IdConfiguration::default(), usize::MAX)
            .unwrap_err();
        assert!(matches!(err, ShortIdError::TooLarge(_)));
    }

    #[test]
    fn test_source_failure_propagates() {
        let generator = SecureIdGenerator::with_source(FailingSource);
        assert_eq!(
            generator.generate(&IdConfiguration::default()),
            Err(ShortIdError::Entropy("unavailable".to_string()))
        );
    }

    #[test]
    fn test_os_source_output_matches_config() {
        let generator = SecureIdGenerator::new();
        for style in [Style::Alphanumeric, Style::Extended, Style::Hex] {
            for lower in [false, true] {
                let config = config(64, style, lower);
                let id = generator.generate(&config).unwrap();
                assert!(config.matches(&id), "{id} does not match {style}");
            }
        }
    }

    #[test]
    fn test_generate_many() {
        let generator = SecureIdGenerator::new();
        let config = IdConfiguration::default();
        assert!(generator.generate_many(&config, 0).unwrap().is_empty());

        let ids = generator.generate_many(&config, 5).unwrap();
        assert_eq!(ids.len(), 5);
        assert!(ids.iter().all(|id| config.matches(id)));
    }
}
