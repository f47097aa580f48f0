//! Scalar randomizers: booleans, bytes, chars, and bounded numbers.
//!
//! Bounded numeric draws go through [`shape`] with a caller-chosen
//! [`GenerationAlgorithm`]; the `*_below` variants use the default
//! algorithm.

use rand::Rng;
use rand::seq::IteratorRandom;

use crate::algorithm::{GenerationAlgorithm, shape};
use crate::error::SynthesisError;

pub fn random_boolean(rng: &mut impl Rng) -> bool {
    rng.r#gen()
}

/// Any signed byte.
pub fn random_byte(rng: &mut impl Rng) -> i8 {
    rng.r#gen()
}

/// Half the time any `i16`, otherwise a non-negative one.
pub fn random_short(rng: &mut impl Rng) -> i16 {
    if rng.r#gen() {
        rng.r#gen()
    } else {
        rng.gen_range(0..=i16::MAX)
    }
}

/// An uppercase ASCII letter or an ASCII digit, with equal odds for each group.
pub fn random_char(rng: &mut impl Rng) -> char {
    if rng.r#gen() {
        rng.gen_range('A'..='Z')
    } else {
        rng.gen_range('0'..='9')
    }
}

/// One character of `alphabet`, chosen uniformly.
pub fn random_char_from(rng: &mut impl Rng, alphabet: &str) -> Result<char, SynthesisError> {
    alphabet
        .chars()
        .choose(rng)
        .ok_or_else(|| SynthesisError::invalid("alphabet must not be empty"))
}

/// `length` bytes, each either a [`random_byte`] or a raw byte from the source.
pub fn random_bytes(rng: &mut impl Rng, length: usize) -> Vec<u8> {
    (0..length)
        .map(|_| {
            if rng.r#gen() {
                random_byte(rng) as u8
            } else {
                rng.r#gen()
            }
        })
        .collect()
}

/// Any `i32`.
pub fn random_int(rng: &mut impl Rng) -> i32 {
    rng.r#gen()
}

/// A value in `[0, range)` with the default algorithm.
pub fn random_int_below(rng: &mut impl Rng, range: i32) -> Result<i32, SynthesisError> {
    shape(rng, range, GenerationAlgorithm::default())
}

pub fn random_int_with(
    rng: &mut impl Rng,
    range: i32,
    algorithm: GenerationAlgorithm,
) -> Result<i32, SynthesisError> {
    shape(rng, range, algorithm)
}

/// Any `i64`.
pub fn random_long(rng: &mut impl Rng) -> i64 {
    rng.r#gen()
}

pub fn random_long_below(rng: &mut impl Rng, range: i64) -> Result<i64, SynthesisError> {
    shape(rng, range, GenerationAlgorithm::default())
}

pub fn random_long_with(
    rng: &mut impl Rng,
    range: i64,
    algorithm: GenerationAlgorithm,
) -> Result<i64, SynthesisError> {
    shape(rng, range, algorithm)
}

/// A float in the unit interval.
pub fn random_float(rng: &mut impl Rng) -> f32 {
    rng.r#gen()
}

pub fn random_float_below(rng: &mut impl Rng, range: f32) -> Result<f32, SynthesisError> {
    shape(rng, range, GenerationAlgorithm::default())
}

pub fn random_float_with(
    rng: &mut impl Rng,
    range: f32,
    algorithm: GenerationAlgorithm,
) -> Result<f32, SynthesisError> {
    shape(rng, range, algorithm)
}

/// A double in `[0, f64::MAX)`.
pub fn random_double(rng: &mut impl Rng) -> f64 {
    rng.r#gen::<f64>() * f64::MAX
}

pub fn random_double_below(rng: &mut impl Rng, range: f64) -> Result<f64, SynthesisError> {
    shape(rng, range, GenerationAlgorithm::default())
}

pub fn random_double_with(
    rng: &mut impl Rng,
    range: f64,
    algorithm: GenerationAlgorithm,
) -> Result<f64, SynthesisError> {
    shape(rng, range, algorithm)
}

/// Integer interval with independently included bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval<T> {
    pub start: T,
    pub end: T,
    pub include_min: bool,
    pub include_max: bool,
}

impl<T> Interval<T> {
    pub fn new(start: T, end: T, include_min: bool, include_max: bool) -> Self {
        Self {
            start,
            end,
            include_min,
            include_max,
        }
    }

    /// `[start, end]`
    pub fn closed(start: T, end: T) -> Self {
        Self::new(start, end, true, true)
    }

    /// `[start, end)`
    pub fn half_open(start: T, end: T) -> Self {
        Self::new(start, end, true, false)
    }

    /// `(start, end)`
    pub fn open(start: T, end: T) -> Self {
        Self::new(start, end, false, false)
    }
}

/// Lowest member and exclusive upper limit of the effective set, widened so
/// neither bound can overflow.
fn effective_bounds(interval: Interval<i128>) -> Result<(i128, i128), SynthesisError> {
    let lo = interval.start + i128::from(!interval.include_min);
    let hi = interval.end + i128::from(interval.include_max);
    if hi <= lo {
        return Err(SynthesisError::invalid(format!(
            "interval {}{}, {}{} contains no integers",
            if interval.include_min { '[' } else { '(' },
            interval.start,
            interval.end,
            if interval.include_max { ']' } else { ')' },
        )));
    }
    Ok((lo, hi))
}

/// Uniform draw from the integers in `interval`.
pub fn random_int_between(rng: &mut impl Rng, interval: Interval<i32>) -> Result<i32, SynthesisError> {
    let (lo, hi) = effective_bounds(Interval::new(
        i128::from(interval.start),
        i128::from(interval.end),
        interval.include_min,
        interval.include_max,
    ))?;
    // lo and hi - 1 are both members of the i32 interval.
    Ok(rng.gen_range(lo..hi) as i32)
}

pub fn random_long_between(rng: &mut impl Rng, interval: Interval<i64>) -> Result<i64, SynthesisError> {
    let (lo, hi) = effective_bounds(Interval::new(
        i128::from(interval.start),
        i128::from(interval.end),
        interval.include_min,
        interval.include_max,
    ))?;
    Ok(rng.gen_range(lo..hi) as i64)
}

/// `start + random_float_below(end - start)`.
///
/// Finite bounds whose width overflows are blended directly instead.
pub fn random_float_between(rng: &mut impl Rng, start: f32, end: f32) -> Result<f32, SynthesisError> {
    if (end - start).is_infinite() && start.is_finite() && end.is_finite() && start < end {
        let unit: f32 = rng.r#gen();
        let v = start * (1.0 - unit) + end * unit;
        return Ok(if v < end { v } else { start });
    }
    Ok(start + random_float_below(rng, end - start)?)
}

/// `start + random_double_below(end - start)`.
///
/// Finite bounds whose width overflows are blended directly instead.
pub fn random_double_between(rng: &mut impl Rng, start: f64, end: f64) -> Result<f64, SynthesisError> {
    if (end - start).is_infinite() && start.is_finite() && end.is_finite() && start < end {
        let unit: f64 = rng.r#gen();
        let v = start * (1.0 - unit) + end * unit;
        return Ok(if v < end { v } else { start });
    }
    Ok(start + random_double_below(rng, end - start)?)
}
