//! Integration tests for value and object graph synthesis.
//!
//! These tests exercise the public API end to end:
//! - bounded and interval draws over many trials
//! - string caps and date intervals
//! - descriptor-based graphs with inheritance, exclusions and cycles
//! - typed records and enums declared through the macros
//!
//! Run with: `cargo nextest run -p randomizer`

use std::collections::HashSet;
use std::thread;

use randomizer::derived::{MAX_STRING_LENGTH, random_big_decimal};
use randomizer::prelude::*;
use time::macros::datetime;

synthesize_enum! {
    #[derive(Debug, PartialEq, Eq, Hash)]
    pub enum GenderEnumType { Male, Female }
}

synthesize_record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Address {
        pub street: String,
        pub number: i16,
    }
}

synthesize_record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Person {
        pub name: String,
        pub nickname: Option<String>,
        pub gender: GenderEnumType,
        pub id: i64,
        pub married: bool,
        pub address: Address,
    }
}

fn people_registry() -> TypeRegistry {
    TypeRegistry::new()
        .with(
            CompositeDescriptor::new("Entity")
                .field("id", TypeDescriptor::Long)
                .constant("VERSION", TypeDescriptor::Int),
        )
        .and_then(|r| {
            r.with(
                CompositeDescriptor::new("Person")
                    .extends("Entity")
                    .field("name", TypeDescriptor::String)
                    .field("gender", TypeDescriptor::Enum(GenderEnumType::descriptor()))
                    .field("friend", TypeDescriptor::composite("Person")),
            )
        })
        .and_then(|r| {
            r.with(
                CompositeDescriptor::new("Employee")
                    .extends("Entity")
                    .field("name", TypeDescriptor::String)
                    .field("salary", TypeDescriptor::BigDecimal)
                    .field("hired", TypeDescriptor::Date)
                    .field("badge", TypeDescriptor::BigInteger)
                    .field("shift_start", TypeDescriptor::LocalTime)
                    .field("last_login", TypeDescriptor::DateTime),
            )
        })
        .unwrap()
}

#[test]
fn test_random_int_never_reaches_range() {
    let mut rng = EntropySource::new();
    for range in [1, 2, 7, 1_000, i32::MAX] {
        for _ in 0..10_000 {
            let v = random_int_below(&mut rng, range).unwrap();
            assert!(v >= 0 && v < range, "{v} not below {range}");
        }
    }
}

#[test]
fn test_int_between_bound_inclusion() {
    let mut rng = EntropySource::new();
    let mut closed_seen = HashSet::new();
    for _ in 0..10_000 {
        let v = random_int_between(&mut rng, Interval::closed(1, 10)).unwrap();
        assert!((1..=10).contains(&v));
        closed_seen.insert(v);

        let v = random_int_between(&mut rng, Interval::open(1, 10)).unwrap();
        assert!((2..=9).contains(&v));

        let v = random_int_between(&mut rng, Interval::new(1, 10, false, true)).unwrap();
        assert!((2..=10).contains(&v));
    }
    assert_eq!(closed_seen.len(), 10);
}

#[test]
fn test_string_length_and_cap() {
    let mut rng = EntropySource::new();
    let pool = Alphabet::default().chars();
    let s = random_string(&mut rng, 10);
    assert_eq!(s.len(), 10);
    assert!(s.chars().all(|c| pool.contains(c)));
    assert_eq!(random_string(&mut rng, 2000).len(), MAX_STRING_LENGTH);
}

#[test]
fn test_date_between_stays_in_bounds() {
    let mut rng = EntropySource::new();
    let start = datetime!(1999-12-31 23:00 UTC);
    let end = datetime!(2000-01-01 1:00 UTC);
    for _ in 0..10_000 {
        let d = random_date_between(&mut rng, start, end).unwrap();
        assert!(start <= d && d <= end);
    }
}

#[test]
fn test_big_decimal_never_degenerate() {
    let mut rng = EntropySource::new();
    for _ in 0..1_000 {
        let d = random_big_decimal(&mut rng, 1, 1).unwrap();
        assert_ne!(d.to_string(), ".");
    }
    assert!(matches!(
        random_big_decimal(&mut rng, 0, 0),
        Err(SynthesisError::RetriesExhausted { .. })
    ));
}

#[test]
fn test_enum_synthesis_membership() {
    let mut synth = Synthesizer::new();
    let seen: HashSet<GenderEnumType> = (0..1_000)
        .map(|_| synth.generate::<GenderEnumType>().unwrap())
        .collect();
    assert_eq!(
        seen,
        [GenderEnumType::Male, GenderEnumType::Female].into_iter().collect()
    );
}

#[test]
fn test_two_instances_differ() {
    let mut synth = Synthesizer::new();
    let a: Person = synth.generate().unwrap();
    let b: Person = synth.generate().unwrap();
    assert_ne!(a, b);

    let mut synth = Synthesizer::new().with_registry(people_registry());
    let a = synth.synthesize("Employee", &[]).unwrap();
    let b = synth.synthesize("Employee", &[]).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_excluded_name_stays_default() {
    let mut synth = Synthesizer::new();
    let person: Person = synth.generate_excluding(&["name"]).unwrap();
    assert_eq!(person.name, "");
    assert!(person.nickname.is_some());
    assert!(!person.address.street.is_empty());

    let mut synth = Synthesizer::new().with_registry(people_registry());
    let employee = synth.synthesize("Employee", &["name"]).unwrap();
    assert_eq!(employee.get("name"), Some(&Value::Null));
    assert!(matches!(employee.get("id"), Some(Value::Long(_))));
    assert!(matches!(employee.get("salary"), Some(Value::BigDecimal(_))));
    assert!(matches!(employee.get("hired"), Some(Value::Date(_))));
    assert!(matches!(employee.get("badge"), Some(Value::BigInteger(_))));
    assert!(matches!(employee.get("shift_start"), Some(Value::LocalTime(_))));
    assert!(matches!(employee.get("last_login"), Some(Value::DateTime(_))));
    assert_eq!(employee.get("VERSION"), Some(&Value::Int(0)));
}

#[test]
fn test_inherited_fields_listed_first() {
    let mut synth = Synthesizer::new().with_registry(people_registry());
    let employee = synth.synthesize("Employee", &[]).unwrap();
    let names: Vec<&str> = employee.fields().map(|(name, _)| name).collect();
    assert_eq!(
        names,
        vec!["id", "VERSION", "name", "salary", "hired", "badge", "shift_start", "last_login"]
    );
}

#[test]
fn test_self_reference_fails_with_path() {
    let mut synth = Synthesizer::new().with_registry(people_registry());
    match synth.synthesize("Person", &[]) {
        Err(SynthesisError::CyclicType { path }) => assert_eq!(path, vec!["Person", "Person"]),
        other => panic!("expected a cycle error, got {other:?}"),
    }
}

#[test]
fn test_self_reference_left_null_under_policy() {
    let config = SynthesisConfig::default().with_cycle_policy(CyclePolicy::Null);
    let mut synth = Synthesizer::with_config(config).with_registry(people_registry());
    let person = synth.synthesize("Person", &[]).unwrap();
    assert_eq!(person.get("friend"), Some(&Value::Null));
    assert!(matches!(person.get("gender"), Some(Value::Enum { .. })));
}

#[test]
fn test_excluding_cyclic_field_avoids_cycle() {
    let mut synth = Synthesizer::new().with_registry(people_registry());
    let person = synth.synthesize("Person", &["friend"]).unwrap();
    assert_eq!(person.get("friend"), Some(&Value::Null));
}

#[test]
fn test_seeded_synthesizers_agree_on_stream_values() {
    let mut a = Synthesizer::with_config(SynthesisConfig::seeded(99));
    let mut b = Synthesizer::with_config(SynthesisConfig::seeded(99));
    let left: (i64, String, GenderEnumType) = (
        a.generate().unwrap(),
        a.generate().unwrap(),
        a.generate().unwrap(),
    );
    let right: (i64, String, GenderEnumType) = (
        b.generate().unwrap(),
        b.generate().unwrap(),
        b.generate().unwrap(),
    );
    assert_eq!(left, right);
}

#[test]
fn test_forked_synthesizers_on_threads() {
    let mut root = Synthesizer::new().with_registry(people_registry());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let mut synth = root.fork();
            thread::spawn(move || synth.synthesize("Employee", &[]).map(|r| r.to_json()))
        })
        .collect();

    let records: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap().to_string())
        .collect();
    let unique: HashSet<&String> = records.iter().collect();
    assert_eq!(unique.len(), records.len());
}

#[test]
fn test_record_json_rendering() {
    let mut synth = Synthesizer::new().with_registry(people_registry());
    let employee = synth.synthesize("Employee", &[]).unwrap();
    let json = employee.to_json();
    assert!(json["id"].is_i64());
    assert!(json["salary"].is_string());
    assert_eq!(json["VERSION"], 0);
}
