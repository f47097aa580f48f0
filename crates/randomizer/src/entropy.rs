//! The entropy source feeding every generator.
//!
//! There is no process-wide generator. Each [`Synthesizer`](crate::object::Synthesizer)
//! owns one `EntropySource`; threads that need their own stream take a
//! [`fork`](EntropySource::fork) instead of sharing.

use rand::rngs::StdRng;
use rand::{CryptoRng, RngCore, SeedableRng};
use tracing::trace;

/// Cryptographically secure random source, optionally seeded.
///
/// Implements [`RngCore`], so it can be passed anywhere an `impl Rng` is
/// expected.
#[derive(Debug, Clone)]
pub struct EntropySource {
    rng: StdRng,
    seed: Option<u64>,
}

impl EntropySource {
    /// Creates a source seeded from the operating system.
    pub fn new() -> Self {
        trace!("Creating entropy source from OS entropy");
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Creates a reproducible source. Two sources with the same seed yield
    /// the same stream.
    pub fn seeded(seed: u64) -> Self {
        trace!(seed, "Creating seeded entropy source");
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates a source from an optional seed.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }

    /// The seed this source was created with, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Derives an independent stream from this one.
    ///
    /// A fork of a seeded source is itself deterministic.
    pub fn fork(&mut self) -> Self {
        let mut key = <StdRng as SeedableRng>::Seed::default();
        self.rng.fill_bytes(&mut key);
        Self {
            rng: StdRng::from_seed(key),
            seed: None,
        }
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for EntropySource {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

impl CryptoRng for EntropySource {}
