//! Generation algorithms and the numeric shaping shared by all bounded draws.
//!
//! Every bounded `random_*` function funnels into [`shape`], which turns a raw
//! draw into a value below `range` using one [`GenerationAlgorithm`]. The
//! arithmetic is written once and instantiated for `i32`, `i64`, `f32` and
//! `f64` through the [`Shape`] trait.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::SynthesisError;

/// Strategy that turns raw entropy into a bounded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GenerationAlgorithm {
    /// `|draw| % range` on a full-width draw from the secure source.
    ///
    /// The absolute value wraps, so the minimum draw yields a value in
    /// `(-range, 0]`.
    AbsoluteValueModulo,
    /// `platform_unit() * range` truncated, using the thread-local generator.
    PlatformPseudorandom,
    /// `draw % range` from a generator freshly seeded with the current time,
    /// then made non-negative.
    TimeSeededPseudorandom,
    /// `secure_unit() * range` truncated.
    #[default]
    Cryptographic,
}

impl GenerationAlgorithm {
    pub const ALL: [GenerationAlgorithm; 4] = [
        GenerationAlgorithm::AbsoluteValueModulo,
        GenerationAlgorithm::PlatformPseudorandom,
        GenerationAlgorithm::TimeSeededPseudorandom,
        GenerationAlgorithm::Cryptographic,
    ];
}

impl fmt::Display for GenerationAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AbsoluteValueModulo => "absolute-value-modulo",
            Self::PlatformPseudorandom => "platform-pseudorandom",
            Self::TimeSeededPseudorandom => "time-seeded-pseudorandom",
            Self::Cryptographic => "cryptographic",
        };
        f.write_str(name)
    }
}

/// Picks one of the algorithms uniformly.
pub fn random_algorithm<R: Rng + ?Sized>(rng: &mut R) -> GenerationAlgorithm {
    GenerationAlgorithm::ALL[rng.gen_range(0..GenerationAlgorithm::ALL.len())]
}

/// Numeric types that can be shaped into a bounded value.
pub trait Shape: Copy + PartialOrd + fmt::Display {
    /// Rejects ranges the arithmetic cannot handle.
    fn check_range(range: Self) -> Result<(), SynthesisError>;

    /// Raw draw for the modulo strategies: full width for integers, unit
    /// interval for floats.
    fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// Absolute value, wrapping at the integer minimum.
    fn magnitude(self) -> Self;

    /// Remainder carrying the sign of `self`.
    fn modulo(self, range: Self) -> Self;

    /// `unit * range`, truncated toward zero.
    fn scale(unit: f64, range: Self) -> Self;
}

macro_rules! impl_shape_for_int {
    ($($t:ty),*) => {$(
        impl Shape for $t {
            fn check_range(range: Self) -> Result<(), SynthesisError> {
                if range > 0 {
                    Ok(())
                } else {
                    Err(SynthesisError::invalid(format!("range must be positive, got {range}")))
                }
            }

            fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
                rng.r#gen()
            }

            fn magnitude(self) -> Self {
                self.wrapping_abs()
            }

            fn modulo(self, range: Self) -> Self {
                self % range
            }

            fn scale(unit: f64, range: Self) -> Self {
                (unit * range as f64) as $t
            }
        }
    )*};
}

macro_rules! impl_shape_for_float {
    ($($t:ty),*) => {$(
        impl Shape for $t {
            fn check_range(range: Self) -> Result<(), SynthesisError> {
                if range.is_finite() && range > 0.0 {
                    Ok(())
                } else {
                    Err(SynthesisError::invalid(format!(
                        "range must be finite and positive, got {range}"
                    )))
                }
            }

            fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
                rng.r#gen::<f64>() as $t
            }

            fn magnitude(self) -> Self {
                self.abs()
            }

            fn modulo(self, range: Self) -> Self {
                self % range
            }

            fn scale(unit: f64, range: Self) -> Self {
                (unit * range as f64) as $t
            }
        }
    )*};
}

impl_shape_for_int!(i32, i64);
impl_shape_for_float!(f32, f64);

/// Draws a value below `range` with the given algorithm.
///
/// `rng` is the secure source; the platform and time-seeded strategies
/// bring their own generators.
pub fn shape<T: Shape, R: Rng + ?Sized>(
    rng: &mut R,
    range: T,
    algorithm: GenerationAlgorithm,
) -> Result<T, SynthesisError> {
    T::check_range(range)?;

    let value = match algorithm {
        GenerationAlgorithm::AbsoluteValueModulo => T::draw(rng).magnitude().modulo(range),
        GenerationAlgorithm::PlatformPseudorandom => T::scale(rand::thread_rng().r#gen(), range),
        GenerationAlgorithm::TimeSeededPseudorandom => {
            let mut seeded = StdRng::seed_from_u64(now_millis());
            T::draw(&mut seeded).modulo(range).magnitude()
        }
        GenerationAlgorithm::Cryptographic => T::scale(rng.r#gen(), range),
    };

    Ok(value)
}

fn now_millis() -> u64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::EntropySource;

    #[test]
    fn test_cryptographic_int_stays_below_range() {
        let mut rng = EntropySource::new();
        for _ in 0..10_000 {
            let v = shape(&mut rng, 10i32, GenerationAlgorithm::Cryptographic).unwrap();
            assert!((0..10).contains(&v), "{v} out of range");
        }
    }

    #[test]
    fn test_every_algorithm_bounded_by_range() {
        let mut rng = EntropySource::new();
        for algorithm in GenerationAlgorithm::ALL {
            for _ in 0..1_000 {
                let v = shape(&mut rng, 100i64, algorithm).unwrap();
                // Absolute-value-modulo may dip below zero on the minimum draw.
                assert!(v > -100 && v <= 100, "{algorithm}: {v}");
            }
        }
    }

    #[test]
    fn test_time_seeded_is_non_negative() {
        let mut rng = EntropySource::new();
        for _ in 0..100 {
            let v = shape(&mut rng, 7i32, GenerationAlgorithm::TimeSeededPseudorandom).unwrap();
            assert!((0..7).contains(&v));
        }
    }

    #[test]
    fn test_absolute_value_modulo_wraps_at_minimum() {
        // The preserved looseness: |MIN| wraps back to MIN.
        assert_eq!(i32::MIN.magnitude().modulo(10), -8);
        assert_eq!(i64::MIN.magnitude().modulo(10), -8);
    }

    #[test]
    fn test_float_ranges() {
        let mut rng = EntropySource::new();
        for algorithm in GenerationAlgorithm::ALL {
            for _ in 0..1_000 {
                let v = shape(&mut rng, 2.5f64, algorithm).unwrap();
                assert!((0.0..=2.5).contains(&v), "{algorithm}: {v}");
                let v = shape(&mut rng, 2.5f32, algorithm).unwrap();
                assert!((0.0..=2.5).contains(&v), "{algorithm}: {v}");
            }
        }
    }

    #[test]
    fn test_non_positive_range_rejected() {
        let mut rng = EntropySource::new();
        assert!(shape(&mut rng, 0i32, GenerationAlgorithm::Cryptographic).is_err());
        assert!(shape(&mut rng, -3i64, GenerationAlgorithm::AbsoluteValueModulo).is_err());
        assert!(shape(&mut rng, f64::NAN, GenerationAlgorithm::Cryptographic).is_err());
        assert!(shape(&mut rng, f32::INFINITY, GenerationAlgorithm::Cryptographic).is_err());
    }

    #[test]
    fn test_random_algorithm_covers_all() {
        let mut rng = EntropySource::seeded(3);
        let seen: std::collections::HashSet<_> =
            (0..200).map(|_| random_algorithm(&mut rng)).collect();
        assert_eq!(seen.len(), GenerationAlgorithm::ALL.len());
    }
}
