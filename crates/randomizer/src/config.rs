//! Configuration types for value synthesis.

use serde::{Deserialize, Serialize};

use crate::algorithm::GenerationAlgorithm;
use crate::derived::DEFAULT_DECIMAL_ATTEMPTS;
use crate::error::SynthesisError;

/// What the populator does when a composite type reaches itself again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePolicy {
    /// Stop with [`SynthesisError::CyclicType`].
    #[default]
    Fail,
    /// Leave the re-entrant field at its zero value. Typed `Option` fields
    /// become `None`, other typed fields their `Default`.
    Null,
}

/// Configuration for a [`Synthesizer`](crate::object::Synthesizer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Seed for the entropy source. `None` draws a seed from the OS.
    pub seed: Option<u64>,

    /// Algorithm used for bounded numeric draws made by the populator.
    pub algorithm: GenerationAlgorithm,

    /// Length range (half-open) of strings produced for string fields.
    pub string_length: (usize, usize),

    /// Maximum distance in days from today for generated dates.
    pub date_window_days: i32,

    /// Maximum nesting depth of composite records.
    pub max_depth: usize,

    /// Behavior on self-referential composite types.
    pub cycle_policy: CyclePolicy,

    /// Retry budget for decimal string generation.
    pub decimal_attempts: u32,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            seed: None,
            algorithm: GenerationAlgorithm::Cryptographic,
            string_length: (3, 25),
            date_window_days: 10_000,
            max_depth: 64,
            cycle_policy: CyclePolicy::Fail,
            decimal_attempts: DEFAULT_DECIMAL_ATTEMPTS,
        }
    }
}

impl SynthesisConfig {
    /// Creates a reproducible configuration with the given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Parses a configuration from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SynthesisError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the cycle policy.
    pub fn with_cycle_policy(mut self, policy: CyclePolicy) -> Self {
        self.cycle_policy = policy;
        self
    }

    /// Sets the maximum nesting depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
