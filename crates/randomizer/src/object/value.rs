//! Synthesized values and records.

use num_bigint::BigInt;
use rust_decimal::Decimal;
use serde_json::{Map, json};
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

use super::descriptor::{FieldDescriptor, TypeDescriptor};

/// One synthesized value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An unset reference.
    Null,
    Unit,
    Byte(i8),
    Char(char),
    Short(i16),
    Boolean(bool),
    Int(i32),
    Long(i64),
    Double(f64),
    Float(f32),
    String(String),
    BigInteger(BigInt),
    BigDecimal(Decimal),
    Date(OffsetDateTime),
    DateTime(PrimitiveDateTime),
    LocalDate(Date),
    LocalTime(Time),
    Enum { type_name: String, constant: String },
    Record(Record),
}

impl Value {
    /// The value a freshly allocated field of type `ty` holds.
    pub fn zero(ty: &TypeDescriptor) -> Self {
        match ty {
            TypeDescriptor::Unit => Value::Unit,
            TypeDescriptor::Byte => Value::Byte(0),
            TypeDescriptor::Char => Value::Char('\0'),
            TypeDescriptor::Short => Value::Short(0),
            TypeDescriptor::Boolean => Value::Boolean(false),
            TypeDescriptor::Int => Value::Int(0),
            TypeDescriptor::Long => Value::Long(0),
            TypeDescriptor::Double => Value::Double(0.0),
            TypeDescriptor::Float => Value::Float(0.0),
            _ => Value::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Renders the value as JSON. Big numbers and temporal values become
    /// strings.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null | Value::Unit => serde_json::Value::Null,
            Value::Byte(v) => json!(v),
            Value::Char(v) => json!(v.to_string()),
            Value::Short(v) => json!(v),
            Value::Boolean(v) => json!(v),
            Value::Int(v) => json!(v),
            Value::Long(v) => json!(v),
            Value::Double(v) => json!(v),
            Value::Float(v) => json!(v),
            Value::String(v) => json!(v),
            Value::BigInteger(v) => json!(v.to_string()),
            Value::BigDecimal(v) => json!(v.to_string()),
            Value::Date(v) => json!(v.to_string()),
            Value::DateTime(v) => json!(v.to_string()),
            Value::LocalDate(v) => json!(v.to_string()),
            Value::LocalTime(v) => json!(v.to_string()),
            Value::Enum { constant, .. } => json!(constant),
            Value::Record(r) => r.to_json(),
        }
    }
}

/// A populated composite, fields in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    type_name: String,
    fields: Vec<(String, Value)>,
}

impl Record {
    /// A record with every field at its zero value.
    pub fn zeroed(type_name: impl Into<String>, fields: &[FieldDescriptor]) -> Self {
        Self {
            type_name: type_name.into(),
            fields: fields
                .iter()
                .map(|f| (f.name.clone(), Value::zero(&f.ty)))
                .collect(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    /// Replaces the value of an existing field. Returns `false` if the
    /// record has no such field.
    pub fn set(&mut self, field: &str, value: Value) -> bool {
        match self.fields.iter_mut().find(|(name, _)| name == field) {
            Some((_, slot)) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Value {
        let map: Map<String, serde_json::Value> = self
            .fields
            .iter()
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect();
        serde_json::Value::Object(map)
    }
}
