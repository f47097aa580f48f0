//! Synthesis of plain Rust types.
//!
//! Scalars implement [`Synthesize`] directly. Structs declared through
//! [`synthesize_record!`](crate::synthesize_record) and field-less enums
//! declared through [`synthesize_enum!`](crate::synthesize_enum) get their
//! implementations generated, sharing the populator's cycle stack and depth
//! limit.
//!
//! ```rust
//! use randomizer::prelude::*;
//!
//! synthesize_enum! {
//!     #[derive(Debug, PartialEq)]
//!     pub enum Gender { Male, Female }
//! }
//!
//! synthesize_record! {
//!     #[derive(Debug)]
//!     pub struct Person {
//!         pub name: String,
//!         pub gender: Gender,
//!         pub age: i16,
//!     }
//! }
//!
//! let mut synth = Synthesizer::new();
//! let person: Person = synth.generate().unwrap();
//! let anonymous: Person = synth.generate_excluding(&["name"]).unwrap();
//! assert!(anonymous.name.is_empty());
//! ```

use num_bigint::BigInt;
use rust_decimal::Decimal;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};
use tracing::warn;

use super::descriptor::EnumDescriptor;
use super::populator::Synthesizer;
use crate::collections::random_enum;
use crate::config::CyclePolicy;
use crate::error::SynthesisError;
use crate::primitives::{
    random_boolean, random_byte, random_char, random_double, random_float, random_int,
    random_long, random_short,
};

/// A type the [`Synthesizer`] can produce a random value of.
pub trait Synthesize: Sized {
    fn synthesize(synth: &mut Synthesizer) -> Result<Self, SynthesisError>;

    /// The record type name this value is synthesized under, if any.
    fn record_name() -> Option<&'static str> {
        None
    }
}

/// A struct populated field by field. Generated by
/// [`synthesize_record!`](crate::synthesize_record).
pub trait SynthesizeRecord: Default {
    const TYPE_NAME: &'static str;
    const FIELDS: &'static [&'static str];

    /// Assigns a random value to every field not named in `excluded`.
    fn populate(
        &mut self,
        synth: &mut Synthesizer,
        excluded: &[&str],
    ) -> Result<(), SynthesisError>;
}

/// A field-less enum with a known constant list. Generated by
/// [`synthesize_enum!`](crate::synthesize_enum).
pub trait Enumerated: Copy + 'static {
    const TYPE_NAME: &'static str;
    const CONSTANTS: &'static [Self];

    fn name(&self) -> &'static str;

    /// The equivalent descriptor, for use in registered composites.
    fn descriptor() -> EnumDescriptor {
        EnumDescriptor::new(Self::TYPE_NAME, Self::CONSTANTS.iter().map(Self::name))
    }
}

impl Synthesizer {
    /// A random `T`.
    pub fn generate<T: Synthesize>(&mut self) -> Result<T, SynthesisError> {
        T::synthesize(self)
    }

    /// A random record with the `excluded` fields left at their defaults.
    pub fn generate_excluding<T: SynthesizeRecord>(
        &mut self,
        excluded: &[&str],
    ) -> Result<T, SynthesisError> {
        self.record(excluded)
    }

    /// Populates a `T::default()`, tracking it on the cycle stack.
    pub fn record<T: SynthesizeRecord>(&mut self, excluded: &[&str]) -> Result<T, SynthesisError> {
        if let Some(path) = self.cycle_path(T::TYPE_NAME) {
            return match self.cycle_policy() {
                CyclePolicy::Fail => Err(SynthesisError::CyclicType { path }),
                CyclePolicy::Null => {
                    warn!(type_name = T::TYPE_NAME, path = %path.join(" -> "), "Cyclic reference left at default");
                    Ok(T::default())
                }
            };
        }

        self.enter(T::TYPE_NAME)?;
        let mut value = T::default();
        let result = value.populate(self, excluded);
        self.leave();
        result.map(|()| value)
    }

    /// One of `T`'s constants, chosen uniformly.
    pub fn pick_constant<T: Enumerated>(&mut self) -> Result<T, SynthesisError> {
        random_enum(self.rng(), T::CONSTANTS)
    }
}

impl Synthesize for () {
    fn synthesize(_: &mut Synthesizer) -> Result<Self, SynthesisError> {
        Ok(())
    }
}

impl Synthesize for i8 {
    fn synthesize(synth: &mut Synthesizer) -> Result<Self, SynthesisError> {
        Ok(random_byte(synth.rng()))
    }
}

impl Synthesize for char {
    fn synthesize(synth: &mut Synthesizer) -> Result<Self, SynthesisError> {
        Ok(random_char(synth.rng()))
    }
}

impl Synthesize for i16 {
    fn synthesize(synth: &mut Synthesizer) -> Result<Self, SynthesisError> {
        Ok(random_short(synth.rng()))
    }
}

impl Synthesize for bool {
    fn synthesize(synth: &mut Synthesizer) -> Result<Self, SynthesisError> {
        Ok(random_boolean(synth.rng()))
    }
}

impl Synthesize for i32 {
    fn synthesize(synth: &mut Synthesizer) -> Result<Self, SynthesisError> {
        Ok(random_int(synth.rng()))
    }
}

impl Synthesize for i64 {
    fn synthesize(synth: &mut Synthesizer) -> Result<Self, SynthesisError> {
        Ok(random_long(synth.rng()))
    }
}

impl Synthesize for f64 {
    fn synthesize(synth: &mut Synthesizer) -> Result<Self, SynthesisError> {
        Ok(random_double(synth.rng()))
    }
}

impl Synthesize for f32 {
    fn synthesize(synth: &mut Synthesizer) -> Result<Self, SynthesisError> {
        Ok(random_float(synth.rng()))
    }
}

impl Synthesize for String {
    fn synthesize(synth: &mut Synthesizer) -> Result<Self, SynthesisError> {
        synth.string()
    }
}

impl Synthesize for BigInt {
    fn synthesize(synth: &mut Synthesizer) -> Result<Self, SynthesisError> {
        Ok(synth.big_integer())
    }
}

impl Synthesize for Decimal {
    fn synthesize(synth: &mut Synthesizer) -> Result<Self, SynthesisError> {
        synth.big_decimal()
    }
}

impl Synthesize for OffsetDateTime {
    fn synthesize(synth: &mut Synthesizer) -> Result<Self, SynthesisError> {
        synth.date()
    }
}

impl Synthesize for PrimitiveDateTime {
    fn synthesize(synth: &mut Synthesizer) -> Result<Self, SynthesisError> {
        synth.date_time()
    }
}

impl Synthesize for Date {
    fn synthesize(synth: &mut Synthesizer) -> Result<Self, SynthesisError> {
        synth.local_date()
    }
}

impl Synthesize for Time {
    fn synthesize(synth: &mut Synthesizer) -> Result<Self, SynthesisError> {
        Ok(synth.local_time())
    }
}

impl<T: Synthesize> Synthesize for Box<T> {
    fn synthesize(synth: &mut Synthesizer) -> Result<Self, SynthesisError> {
        T::synthesize(synth).map(Box::new)
    }

    fn record_name() -> Option<&'static str> {
        T::record_name()
    }
}

/// Always `Some`, except that a cyclic record under [`CyclePolicy::Null`] is
/// `None`. Use `Option<Box<Self>>` for self-referential records so their
/// `Default` terminates.
impl<T: Synthesize> Synthesize for Option<T> {
    fn synthesize(synth: &mut Synthesizer) -> Result<Self, SynthesisError> {
        if let Some(name) = T::record_name() {
            if synth.cycle_policy() == CyclePolicy::Null {
                if let Some(path) = synth.cycle_path(name) {
                    warn!(type_name = name, path = %path.join(" -> "), "Cyclic reference left empty");
                    return Ok(None);
                }
            }
        }
        T::synthesize(synth).map(Some)
    }
}

/// Declares a struct whose fields are all [`Synthesize`] and implements
/// [`SynthesizeRecord`] and [`Synthesize`] for it.
///
/// The struct derives `Default`; do not derive it again.
#[macro_export]
macro_rules! synthesize_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$fmeta:meta])* $fvis:vis $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Default)]
        $vis struct $name {
            $( $(#[$fmeta])* $fvis $field: $ty ),*
        }

        impl $crate::object::SynthesizeRecord for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const FIELDS: &'static [&'static str] = &[$(stringify!($field)),*];

            #[allow(unused_variables)]
            fn populate(
                &mut self,
                synth: &mut $crate::object::Synthesizer,
                excluded: &[&str],
            ) -> ::core::result::Result<(), $crate::SynthesisError> {
                $(
                    if !excluded.contains(&stringify!($field)) {
                        self.$field = <$ty as $crate::object::Synthesize>::synthesize(synth)?;
                    }
                )*
                Ok(())
            }
        }

        impl $crate::object::Synthesize for $name {
            fn synthesize(
                synth: &mut $crate::object::Synthesizer,
            ) -> ::core::result::Result<Self, $crate::SynthesisError> {
                synth.record::<Self>(&[])
            }

            fn record_name() -> ::core::option::Option<&'static str> {
                ::core::option::Option::Some(stringify!($name))
            }
        }
    };
}

/// Declares a field-less enum and implements [`Enumerated`], [`Synthesize`]
/// and `Default` (the first variant) for it.
///
/// The enum derives `Clone` and `Copy`; do not derive them again.
#[macro_export]
macro_rules! synthesize_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::object::Enumerated for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const CONSTANTS: &'static [Self] = &[$(Self::$variant),+];

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }

        impl $crate::object::Synthesize for $name {
            fn synthesize(
                synth: &mut $crate::object::Synthesizer,
            ) -> ::core::result::Result<Self, $crate::SynthesisError> {
                synth.pick_constant::<Self>()
            }
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                <Self as $crate::object::Enumerated>::CONSTANTS[0]
            }
        }
    };
}
