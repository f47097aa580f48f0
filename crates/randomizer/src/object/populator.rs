//! The object graph populator.
//!
//! A [`Synthesizer`] owns an entropy source, a configuration and a
//! [`TypeRegistry`]. [`Synthesizer::synthesize`] allocates a zeroed record for
//! a registered composite and fills every writable, non-excluded field by
//! dispatching on its declared type, recursing into nested composites.
//!
//! Composite types currently being synthesized are kept on a stack. Reaching
//! one of them again is a cycle, handled per [`CyclePolicy`].

use std::collections::HashSet;

use num_bigint::BigInt;
use rust_decimal::Decimal;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};
use tracing::{debug, trace, warn};

use super::descriptor::{
    CompositeDescriptor, EnumDescriptor, FieldAccess, FieldDescriptor, TypeDescriptor,
    TypeRegistry,
};
use super::value::{Record, Value};
use crate::config::{CyclePolicy, SynthesisConfig};
use crate::derived::{
    random_big_decimal_unit, random_big_decimal_with_attempts, random_big_integer,
    random_date_with, random_local_date, random_local_date_time, random_local_time,
    random_string_between,
};
use crate::entropy::EntropySource;
use crate::error::SynthesisError;
use crate::primitives::{
    random_boolean, random_byte, random_char, random_double, random_float, random_int,
    random_long, random_short,
};

/// Populates records with random values.
#[derive(Debug)]
pub struct Synthesizer {
    rng: EntropySource,
    config: SynthesisConfig,
    registry: TypeRegistry,
    in_progress: Vec<String>,
}

impl Synthesizer {
    /// Creates a synthesizer with default configuration and an empty registry.
    pub fn new() -> Self {
        Self::with_config(SynthesisConfig::default())
    }

    /// Creates a synthesizer with custom configuration.
    pub fn with_config(config: SynthesisConfig) -> Self {
        Self {
            rng: EntropySource::from_seed(config.seed),
            config,
            registry: TypeRegistry::new(),
            in_progress: Vec::new(),
        }
    }

    /// Replaces the type registry.
    pub fn with_registry(mut self, registry: TypeRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Registers a composite type.
    pub fn register(&mut self, descriptor: CompositeDescriptor) -> Result<(), SynthesisError> {
        self.registry.register(descriptor)
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// The entropy source, for drawing values alongside synthesized records.
    pub fn rng(&mut self) -> &mut EntropySource {
        &mut self.rng
    }

    /// A synthesizer with the same configuration and registry drawing from
    /// a forked stream, for use on another thread.
    pub fn fork(&mut self) -> Self {
        Self {
            rng: self.rng.fork(),
            config: self.config.clone(),
            registry: self.registry.clone(),
            in_progress: Vec::new(),
        }
    }

    /// Synthesizes the composite `type_name`, leaving the `excluded` fields
    /// at their zero values.
    ///
    /// Exclusions apply to this record only; nested composites are
    /// populated in full. On error no partial record is returned.
    pub fn synthesize(
        &mut self,
        type_name: &str,
        excluded: &[&str],
    ) -> Result<Record, SynthesisError> {
        let excluded: HashSet<&str> = excluded.iter().copied().collect();
        self.composite(type_name, &excluded)
    }

    /// Synthesizes a value of any descriptor.
    pub fn synthesize_value(&mut self, ty: &TypeDescriptor) -> Result<Value, SynthesisError> {
        let value = match ty {
            TypeDescriptor::Enum(descriptor) => self.enum_constant(descriptor)?,
            TypeDescriptor::Unit => Value::Unit,
            TypeDescriptor::Byte => Value::Byte(random_byte(&mut self.rng)),
            TypeDescriptor::Char => Value::Char(random_char(&mut self.rng)),
            TypeDescriptor::Short => Value::Short(random_short(&mut self.rng)),
            TypeDescriptor::Boolean => Value::Boolean(random_boolean(&mut self.rng)),
            TypeDescriptor::Int => Value::Int(random_int(&mut self.rng)),
            TypeDescriptor::Long => Value::Long(random_long(&mut self.rng)),
            TypeDescriptor::Double => Value::Double(random_double(&mut self.rng)),
            TypeDescriptor::Float => Value::Float(random_float(&mut self.rng)),
            TypeDescriptor::String => Value::String(self.string()?),
            TypeDescriptor::BigInteger => Value::BigInteger(self.big_integer()),
            TypeDescriptor::BigDecimal => Value::BigDecimal(self.big_decimal()?),
            TypeDescriptor::Date => Value::Date(self.date()?),
            TypeDescriptor::DateTime => Value::DateTime(self.date_time()?),
            TypeDescriptor::LocalDate => Value::LocalDate(self.local_date()?),
            TypeDescriptor::LocalTime => Value::LocalTime(self.local_time()),
            TypeDescriptor::Composite(name) => self.nested(name)?,
        };
        Ok(value)
    }

    /// One constant of `descriptor`, chosen uniformly.
    pub fn enum_constant(&mut self, descriptor: &EnumDescriptor) -> Result<Value, SynthesisError> {
        let constant =
            crate::collections::random_entry(&mut self.rng, &descriptor.constants).map_err(|_| {
                SynthesisError::invalid(format!("enum {} has no constants", descriptor.name))
            })?;
        Ok(Value::Enum {
            type_name: descriptor.name.clone(),
            constant: constant.clone(),
        })
    }

    /// A string whose length lies in the configured range.
    pub fn string(&mut self) -> Result<String, SynthesisError> {
        let (min, max) = self.config.string_length;
        random_string_between(&mut self.rng, min, max)
    }

    pub fn big_integer(&mut self) -> BigInt {
        random_big_integer(&mut self.rng)
    }

    pub fn big_decimal(&mut self) -> Result<Decimal, SynthesisError> {
        random_big_decimal_unit(&mut self.rng)
    }

    /// A decimal with the given digit groups, retried up to the configured
    /// number of attempts.
    pub fn decimal(
        &mut self,
        int_digits: usize,
        frac_digits: usize,
    ) -> Result<Decimal, SynthesisError> {
        random_big_decimal_with_attempts(
            &mut self.rng,
            int_digits,
            frac_digits,
            self.config.decimal_attempts,
        )
    }

    /// Now, moved within the configured date window using the configured
    /// algorithm.
    pub fn date(&mut self) -> Result<OffsetDateTime, SynthesisError> {
        random_date_with(
            &mut self.rng,
            self.config.date_window_days,
            self.config.algorithm,
        )
    }

    pub fn date_time(&mut self) -> Result<PrimitiveDateTime, SynthesisError> {
        random_local_date_time(&mut self.rng)
    }

    pub fn local_date(&mut self) -> Result<Date, SynthesisError> {
        random_local_date(&mut self.rng)
    }

    pub fn local_time(&mut self) -> Time {
        random_local_time(&mut self.rng)
    }

    fn nested(&mut self, name: &str) -> Result<Value, SynthesisError> {
        if let Some(path) = self.cycle_path(name) {
            return match self.config.cycle_policy {
                CyclePolicy::Fail => Err(SynthesisError::CyclicType { path }),
                CyclePolicy::Null => {
                    warn!(type_name = name, path = %path.join(" -> "), "Cyclic reference left null");
                    Ok(Value::Null)
                }
            };
        }
        Ok(Value::Record(self.composite(name, &HashSet::new())?))
    }

    fn composite(
        &mut self,
        type_name: &str,
        excluded: &HashSet<&str>,
    ) -> Result<Record, SynthesisError> {
        let descriptor = self
            .registry
            .get(type_name)
            .ok_or_else(|| SynthesisError::UnsupportedType(type_name.to_string()))?;
        if !descriptor.constructible {
            return Err(SynthesisError::Instantiation {
                type_name: type_name.to_string(),
                reason: "no default constructor".to_string(),
            });
        }
        let fields = self.registry.all_fields(type_name)?;

        self.enter(type_name)?;
        let result = self.populate(type_name, &fields, excluded);
        self.leave();
        result
    }

    fn populate(
        &mut self,
        type_name: &str,
        fields: &[FieldDescriptor],
        excluded: &HashSet<&str>,
    ) -> Result<Record, SynthesisError> {
        let mut record = Record::zeroed(type_name, fields);

        for field in fields {
            if field.access == FieldAccess::Constant {
                trace!(type_name, field = %field.name, "Skipping constant field");
                continue;
            }
            if excluded.contains(field.name.as_str()) {
                trace!(type_name, field = %field.name, "Skipping excluded field");
                continue;
            }
            if field.access == FieldAccess::ReadOnly {
                return Err(SynthesisError::FieldAccess {
                    type_name: type_name.to_string(),
                    field: field.name.clone(),
                });
            }

            let value = self.synthesize_value(&field.ty)?;
            record.set(&field.name, value);
        }

        Ok(record)
    }

    /// The cycle `name -> ... -> name` if `name` is already being
    /// synthesized.
    pub(crate) fn cycle_path(&self, name: &str) -> Option<Vec<String>> {
        let start = self.in_progress.iter().position(|t| t == name)?;
        let mut path = self.in_progress[start..].to_vec();
        path.push(name.to_string());
        Some(path)
    }

    pub(crate) fn cycle_policy(&self) -> CyclePolicy {
        self.config.cycle_policy
    }

    /// Pushes `type_name` on the in-progress stack, enforcing the depth limit.
    pub(crate) fn enter(&mut self, type_name: &str) -> Result<(), SynthesisError> {
        let depth = self.in_progress.len();
        if depth >= self.config.max_depth {
            return Err(SynthesisError::RecursionExhausted {
                type_name: type_name.to_string(),
                depth,
            });
        }
        debug!(type_name, depth, "Synthesizing composite");
        self.in_progress.push(type_name.to_string());
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        if let Some(type_name) = self.in_progress.pop() {
            trace!(type_name, "Finished composite");
        }
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}
