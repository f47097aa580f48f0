//! Random values for test fixtures.
//!
//! This crate produces plausible random instances of scalar types, derived
//! values such as strings, decimals and dates, and whole object graphs
//! described either by registered descriptors or by plain Rust structs.
//!
//! # Quick Start
//!
//! ```rust
//! use randomizer::prelude::*;
//!
//! let mut synth = Synthesizer::with_config(SynthesisConfig::seeded(42));
//! synth.register(
//!     CompositeDescriptor::new("Address")
//!         .field("street", TypeDescriptor::String)
//!         .field("number", TypeDescriptor::Int),
//! )?;
//! synth.register(
//!     CompositeDescriptor::new("Person")
//!         .field("name", TypeDescriptor::String)
//!         .field("address", TypeDescriptor::composite("Address")),
//! )?;
//!
//! let person = synth.synthesize("Person", &["name"])?;
//! assert!(person.get("name").is_some_and(Value::is_null));
//!
//! let age = random_int_between(synth.rng(), Interval::closed(18, 65))?;
//! assert!((18..=65).contains(&age));
//! # Ok::<(), SynthesisError>(())
//! ```

pub mod algorithm;
pub mod alphabet;
pub mod collections;
pub mod config;
pub mod derived;
pub mod dictionary;
pub mod entropy;
pub mod error;
pub mod object;
pub mod primitives;

pub use error::SynthesisError;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::algorithm::{GenerationAlgorithm, random_algorithm};
    pub use crate::alphabet::Alphabet;
    pub use crate::collections::{
        draw_numbers, random_entry, random_enum, random_index, random_key, random_uuid,
        random_value,
    };
    pub use crate::config::{CyclePolicy, SynthesisConfig};
    pub use crate::derived::{
        random_big_decimal, random_birthday, random_date, random_date_between, random_email,
        random_local_date, random_local_date_time, random_local_time, random_numeric_string,
        random_string, random_string_from, random_zone_id,
    };
    pub use crate::dictionary::{Category, DictionaryProvider, FakeDictionary, StaticDictionary};
    pub use crate::entropy::EntropySource;
    pub use crate::error::SynthesisError;
    pub use crate::object::{
        CompositeDescriptor, EnumDescriptor, Enumerated, FieldAccess, Record, Synthesize,
        SynthesizeRecord, Synthesizer, TypeDescriptor, TypeRegistry, Value,
    };
    pub use crate::primitives::{
        Interval, random_boolean, random_char, random_double, random_float, random_int,
        random_int_below, random_int_between, random_long, random_long_between,
    };
    pub use crate::{synthesize_enum, synthesize_record};
}
