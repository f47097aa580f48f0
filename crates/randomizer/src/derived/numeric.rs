//! Digit strings, decimals, big integers and tokens.

use std::str::FromStr;

use num_bigint::{BigInt, BigUint};
use rand::Rng;
use rust_decimal::Decimal;
use tracing::debug;

use super::text::random_numeric_string;
use crate::error::SynthesisError;
use crate::primitives::random_long;

/// Most digits a [`Decimal`] can hold.
pub const MAX_DECIMAL_DIGITS: usize = 28;

/// Default retry budget for [`random_big_decimal`].
pub const DEFAULT_DECIMAL_ATTEMPTS: u32 = 32;

/// Bit count (exclusive) of [`random_big_integer`] results.
const BIG_INTEGER_BITS: u32 = 180;

/// Bit count of [`random_token`].
const TOKEN_BITS: usize = 130;

/// Two digit groups joined by a dot: `frac_digits` digits, then `int_digits`
/// digits.
///
/// The group order is fixed and does not follow decimal place semantics, so
/// `random_float_string(rng, 3, 2)` yields strings like `"47.913"`.
pub fn random_float_string(rng: &mut impl Rng, int_digits: usize, frac_digits: usize) -> String {
    let head = random_numeric_string(rng, frac_digits);
    let tail = random_numeric_string(rng, int_digits);
    format!("{head}.{tail}")
}

/// Fills empty digit groups with `0` so `"12."` and `".5"` parse.
fn normalize(digits: &str) -> String {
    match digits.split_once('.') {
        Some((head, tail)) => {
            let head = if head.is_empty() { "0" } else { head };
            let tail = if tail.is_empty() { "0" } else { tail };
            format!("{head}.{tail}")
        }
        None => digits.to_string(),
    }
}

fn check_digit_counts(int_digits: usize, frac_digits: usize) -> Result<(), SynthesisError> {
    if int_digits == 0 && frac_digits == 0 {
        return Err(SynthesisError::invalid(
            "at least one of the digit counts must be positive",
        ));
    }
    check_digit_total(int_digits, frac_digits)
}

fn check_digit_total(int_digits: usize, frac_digits: usize) -> Result<(), SynthesisError> {
    if int_digits + frac_digits > MAX_DECIMAL_DIGITS {
        return Err(SynthesisError::invalid(format!(
            "{} digits requested, at most {MAX_DECIMAL_DIGITS} supported",
            int_digits + frac_digits
        )));
    }
    Ok(())
}

/// Parses [`random_float_string`] into an `f32`.
pub fn random_float_of(
    rng: &mut impl Rng,
    int_digits: usize,
    frac_digits: usize,
) -> Result<f32, SynthesisError> {
    check_digit_counts(int_digits, frac_digits)?;
    let digits = normalize(&random_float_string(rng, int_digits, frac_digits));
    digits
        .parse()
        .map_err(|e| SynthesisError::invalid(format!("cannot parse {digits:?}: {e}")))
}

/// A [`Decimal`] parsed from [`random_float_string`], with the default retry
/// budget.
pub fn random_big_decimal(
    rng: &mut impl Rng,
    int_digits: usize,
    frac_digits: usize,
) -> Result<Decimal, SynthesisError> {
    random_big_decimal_with_attempts(rng, int_digits, frac_digits, DEFAULT_DECIMAL_ATTEMPTS)
}

/// Regenerates the digit string while it is the bare `"."`, up to `attempts`
/// times.
///
/// A `(0, 0)` request always yields `"."`, so it spends the whole budget and
/// ends in [`SynthesisError::RetriesExhausted`].
pub fn random_big_decimal_with_attempts(
    rng: &mut impl Rng,
    int_digits: usize,
    frac_digits: usize,
    attempts: u32,
) -> Result<Decimal, SynthesisError> {
    if attempts == 0 {
        return Err(SynthesisError::invalid("decimal retry budget must be positive"));
    }
    check_digit_total(int_digits, frac_digits)?;

    for attempt in 1..=attempts {
        let digits = random_float_string(rng, int_digits, frac_digits);
        if digits == "." {
            debug!(attempt, "Degenerate decimal string, retrying");
            continue;
        }
        return Ok(Decimal::from_str(&normalize(&digits))?);
    }

    Err(SynthesisError::RetriesExhausted {
        what: format!("decimal with {int_digits}/{frac_digits} digits"),
        attempts,
    })
}

/// A [`Decimal`] in the unit interval.
pub fn random_big_decimal_unit(rng: &mut impl Rng) -> Result<Decimal, SynthesisError> {
    let unit: f64 = rng.r#gen();
    Decimal::from_f64_retain(unit)
        .ok_or_else(|| SynthesisError::invalid(format!("{unit} is not representable as a decimal")))
}

/// Uniform over `[0, 2^bits)` for a `bits` drawn from `[0, 180)`.
pub fn random_big_integer(rng: &mut impl Rng) -> BigInt {
    let bits = rng.gen_range(0..BIG_INTEGER_BITS) as usize;
    BigInt::from(random_bits(rng, bits))
}

fn random_bits(rng: &mut impl Rng, bits: usize) -> BigUint {
    let mut bytes = vec![0u8; bits.div_ceil(8)];
    rng.fill_bytes(&mut bytes);
    BigUint::from_bytes_be(&bytes) >> (bytes.len() * 8 - bits)
}

/// A non-negative long.
pub fn random_serial_number(rng: &mut impl Rng) -> i64 {
    random_long(rng).saturating_abs()
}

/// 130 random bits written in base 32.
pub fn random_token(rng: &mut impl Rng) -> String {
    random_bits(rng, TOKEN_BITS).to_str_radix(32)
}
