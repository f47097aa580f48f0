//! Random strings.

use rand::Rng;

use crate::alphabet::{Alphabet, DIGITS, HEX_DIGITS};
use crate::error::SynthesisError;

/// Longest string any generator in this module returns.
pub const MAX_STRING_LENGTH: usize = 1024;

/// Draws from an ASCII pool. Callers guarantee the pool is non-empty.
fn from_ascii_pool(rng: &mut impl Rng, pool: &'static str, length: usize) -> String {
    let bytes = pool.as_bytes();
    (0..length.min(MAX_STRING_LENGTH))
        .map(|_| char::from(bytes[rng.gen_range(0..bytes.len())]))
        .collect()
}

/// A string over the default alphabet (letters and digits).
///
/// The length is capped at [`MAX_STRING_LENGTH`].
pub fn random_string(rng: &mut impl Rng, length: usize) -> String {
    from_ascii_pool(rng, Alphabet::default().chars(), length)
}

/// A string over `alphabet`, capped at [`MAX_STRING_LENGTH`].
pub fn random_string_from(
    rng: &mut impl Rng,
    alphabet: &str,
    length: usize,
) -> Result<String, SynthesisError> {
    let pool: Vec<char> = alphabet.chars().collect();
    if pool.is_empty() {
        return Err(SynthesisError::invalid("alphabet must not be empty"));
    }
    Ok((0..length.min(MAX_STRING_LENGTH))
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect())
}

/// A default-alphabet string whose length lies in `[min, max)`.
pub fn random_string_between(
    rng: &mut impl Rng,
    min: usize,
    max: usize,
) -> Result<String, SynthesisError> {
    if max <= min {
        return Err(SynthesisError::invalid(format!(
            "string length range [{min}, {max}) is empty"
        )));
    }
    let length = rng.gen_range(min..max);
    Ok(random_string(rng, length))
}

/// A default-alphabet string of 3 to 24 characters.
pub fn random_default_string(rng: &mut impl Rng) -> String {
    let length = rng.gen_range(3..25);
    random_string(rng, length)
}

/// Lowercase hexadecimal digits.
pub fn random_hex_string(rng: &mut impl Rng, length: usize) -> String {
    from_ascii_pool(rng, HEX_DIGITS, length)
}

/// Decimal digits, leading zeros allowed.
pub fn random_numeric_string(rng: &mut impl Rng, length: usize) -> String {
    from_ascii_pool(rng, DIGITS, length)
}
