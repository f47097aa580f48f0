//! Selection from caller-supplied collections, identifiers, and number draws.

use std::collections::BTreeSet;

use rand::distributions::Alphanumeric;
use rand::seq::IteratorRandom;
use rand::Rng;
use uuid::{Builder, Uuid};

use crate::error::SynthesisError;
use crate::primitives::{Interval, random_int_between};

fn empty(what: &str) -> SynthesisError {
    SynthesisError::invalid(format!("cannot pick from an empty {what}"))
}

/// One element of `items`.
pub fn random_entry<'a, T>(rng: &mut impl Rng, items: &'a [T]) -> Result<&'a T, SynthesisError> {
    items.iter().choose(rng).ok_or_else(|| empty("slice"))
}

/// An index into a collection of `len` elements.
pub fn random_index(rng: &mut impl Rng, len: usize) -> Result<usize, SynthesisError> {
    if len == 0 {
        return Err(empty("collection"));
    }
    Ok(rng.gen_range(0..len))
}

/// A key of `map`. Accepts anything iterating as `(key, value)` pairs,
/// such as `&HashMap` or `&BTreeMap`.
pub fn random_key<K, V>(
    rng: &mut impl Rng,
    map: impl IntoIterator<Item = (K, V)>,
) -> Result<K, SynthesisError> {
    map.into_iter()
        .choose(rng)
        .map(|(key, _)| key)
        .ok_or_else(|| empty("map"))
}

/// A value of `map`.
pub fn random_value<K, V>(
    rng: &mut impl Rng,
    map: impl IntoIterator<Item = (K, V)>,
) -> Result<V, SynthesisError> {
    map.into_iter()
        .choose(rng)
        .map(|(_, value)| value)
        .ok_or_else(|| empty("map"))
}

/// One of the given enum constants.
pub fn random_enum<T: Copy>(rng: &mut impl Rng, constants: &[T]) -> Result<T, SynthesisError> {
    random_entry(rng, constants).copied()
}

/// A version 4 UUID built from the source's bytes.
pub fn random_uuid(rng: &mut impl Rng) -> Uuid {
    Builder::from_random_bytes(rng.r#gen()).into_uuid()
}

/// `length` alphanumeric ASCII bytes.
pub fn random_salt(rng: &mut impl Rng, length: usize) -> Vec<u8> {
    rng.sample_iter(Alphanumeric).take(length).collect()
}

/// 16 raw bytes.
pub fn new_salt(rng: &mut impl Rng) -> [u8; 16] {
    rng.r#gen()
}

/// A packed ARGB color.
pub fn random_pixel(rng: &mut impl Rng) -> i32 {
    i32::from_be_bytes(rng.r#gen())
}

/// `count` distinct numbers from `[min, max]`, sorted.
pub fn draw_numbers(
    rng: &mut impl Rng,
    count: usize,
    min: i32,
    max: i32,
) -> Result<BTreeSet<i32>, SynthesisError> {
    let available = i64::from(max) - i64::from(min) + 1;
    if available < 1 || count as u64 > available as u64 {
        return Err(SynthesisError::invalid(format!(
            "cannot draw {count} distinct numbers from [{min}, {max}]"
        )));
    }

    let mut drawn = BTreeSet::new();
    while drawn.len() < count {
        drawn.insert(random_int_between(rng, Interval::closed(min, max))?);
    }
    Ok(drawn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::EntropySource;
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn test_entry_and_index() {
        let mut rng = EntropySource::new();
        let items = ["a", "b", "c"];
        assert!(items.contains(random_entry(&mut rng, &items).unwrap()));
        assert!(random_index(&mut rng, 3).unwrap() < 3);
        let none: [u8; 0] = [];
        assert!(random_entry(&mut rng, &none).is_err());
        assert!(random_index(&mut rng, 0).is_err());
    }

    #[test]
    fn test_map_selection() {
        let mut rng = EntropySource::new();
        let map: HashMap<&str, i32> = [("one", 1), ("two", 2)].into_iter().collect();
        let key = random_key(&mut rng, &map).unwrap();
        assert!(map.contains_key(key));
        let value = random_value(&mut rng, &map).unwrap();
        assert!(map.values().any(|v| v == value));

        let empty: BTreeMap<u8, u8> = BTreeMap::new();
        assert!(random_key(&mut rng, &empty).is_err());
    }

    #[test]
    fn test_uuid_is_v4() {
        let mut rng = EntropySource::new();
        let id = random_uuid(&mut rng);
        assert_eq!(id.get_version_num(), 4);
        assert_ne!(id, random_uuid(&mut rng));
    }

    #[test]
    fn test_salts() {
        let mut rng = EntropySource::new();
        let salt = random_salt(&mut rng, 24);
        assert_eq!(salt.len(), 24);
        assert!(salt.iter().all(u8::is_ascii_alphanumeric));
        assert_ne!(new_salt(&mut rng), new_salt(&mut rng));
    }

    #[test]
    fn test_draw_numbers_unique_sorted() {
        let mut rng = EntropySource::new();
        for _ in 0..100 {
            let drawn = draw_numbers(&mut rng, 6, 1, 49).unwrap();
            assert_eq!(drawn.len(), 6);
            assert!(drawn.iter().all(|n| (1..=49).contains(n)));
        }
        let all = draw_numbers(&mut rng, 5, 1, 5).unwrap();
        assert_eq!(all.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert!(draw_numbers(&mut rng, 6, 1, 5).is_err());
    }
}
