//! Declarative type descriptions the populator walks.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::SynthesisError;

/// The declared type of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    Enum(EnumDescriptor),
    /// Produces nothing; the field keeps its zero value.
    Unit,
    Byte,
    Char,
    Short,
    Boolean,
    Int,
    Long,
    Double,
    Float,
    String,
    BigInteger,
    BigDecimal,
    /// An instant with an offset.
    Date,
    /// A local date and time of day.
    DateTime,
    LocalDate,
    LocalTime,
    /// A composite registered under this name.
    Composite(String),
}

impl TypeDescriptor {
    pub fn composite(name: impl Into<String>) -> Self {
        Self::Composite(name.into())
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Composite(_))
    }
}

/// A named set of enum constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    pub name: String,
    pub constants: Vec<String>,
}

impl EnumDescriptor {
    pub fn new<I, S>(name: impl Into<String>, constants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            constants: constants.into_iter().map(Into::into).collect(),
        }
    }
}

/// How the populator may treat a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldAccess {
    #[default]
    Writable,
    /// Declared constant; always skipped.
    Constant,
    /// Cannot be assigned; populating it fails.
    ReadOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: TypeDescriptor,
    pub access: FieldAccess,
}

/// A composite type: its own fields plus those inherited from `parent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeDescriptor {
    pub name: String,
    pub parent: Option<String>,
    pub fields: Vec<FieldDescriptor>,
    /// Whether a zero-initialized instance can be created.
    pub constructible: bool,
}

impl CompositeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            fields: Vec::new(),
            constructible: true,
        }
    }

    /// Inherits the fields of `parent`.
    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Adds a writable field.
    pub fn field(self, name: impl Into<String>, ty: TypeDescriptor) -> Self {
        self.field_with_access(name, ty, FieldAccess::Writable)
    }

    /// Adds a constant field, which the populator skips.
    pub fn constant(self, name: impl Into<String>, ty: TypeDescriptor) -> Self {
        self.field_with_access(name, ty, FieldAccess::Constant)
    }

    pub fn field_with_access(
        mut self,
        name: impl Into<String>,
        ty: TypeDescriptor,
        access: FieldAccess,
    ) -> Self {
        self.fields.push(FieldDescriptor {
            name: name.into(),
            ty,
            access,
        });
        self
    }

    /// Marks the type as having no usable default constructor.
    pub fn not_constructible(mut self) -> Self {
        self.constructible = false;
        self
    }
}

/// Composite descriptors by name.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    composites: HashMap<String, CompositeDescriptor>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a composite. Field names must be unique within it and the type
    /// name must not already be registered.
    pub fn register(&mut self, descriptor: CompositeDescriptor) -> Result<(), SynthesisError> {
        let duplicate = {
            let mut seen = HashSet::new();
            descriptor
                .fields
                .iter()
                .find(|f| !seen.insert(f.name.as_str()))
                .map(|f| f.name.clone())
        };
        if let Some(dup) = duplicate {
            return Err(SynthesisError::invalid(format!(
                "duplicate field `{dup}` in {}",
                descriptor.name
            )));
        }
        if self.composites.contains_key(&descriptor.name) {
            return Err(SynthesisError::invalid(format!(
                "{} is already registered",
                descriptor.name
            )));
        }

        debug!(
            type_name = %descriptor.name,
            fields = descriptor.fields.len(),
            "Registered composite"
        );
        self.composites.insert(descriptor.name.clone(), descriptor);
        Ok(())
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, descriptor: CompositeDescriptor) -> Result<Self, SynthesisError> {
        self.register(descriptor)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&CompositeDescriptor> {
        self.composites.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.composites.contains_key(name)
    }

    /// Every field of `name`, ancestors first. A field redeclared by a
    /// subtype replaces the inherited one in place.
    pub fn all_fields(&self, name: &str) -> Result<Vec<FieldDescriptor>, SynthesisError> {
        let mut chain: Vec<&CompositeDescriptor> = Vec::new();
        let mut next = Some(name);

        while let Some(current) = next {
            if let Some(pos) = chain.iter().position(|d| d.name == current) {
                let mut path: Vec<String> = chain[pos..].iter().map(|d| d.name.clone()).collect();
                path.push(current.to_string());
                return Err(SynthesisError::CyclicType { path });
            }
            let descriptor = self
                .get(current)
                .ok_or_else(|| SynthesisError::UnsupportedType(current.to_string()))?;
            chain.push(descriptor);
            next = descriptor.parent.as_deref();
        }

        let mut fields: Vec<FieldDescriptor> = Vec::new();
        for descriptor in chain.iter().rev() {
            for field in &descriptor.fields {
                match fields.iter_mut().find(|f| f.name == field.name) {
                    Some(inherited) => *inherited = field.clone(),
                    None => fields.push(field.clone()),
                }
            }
        }
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(fields: &[FieldDescriptor]) -> Vec<&str> {
        fields.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_inherited_fields_come_first() {
        let registry = TypeRegistry::new()
            .with(
                CompositeDescriptor::new("Entity")
                    .field("id", TypeDescriptor::Long)
                    .field("label", TypeDescriptor::String),
            )
            .unwrap()
            .with(
                CompositeDescriptor::new("Person")
                    .extends("Entity")
                    .field("name", TypeDescriptor::String)
                    .field("label", TypeDescriptor::Int),
            )
            .unwrap();

        let fields = registry.all_fields("Person").unwrap();
        assert_eq!(names(&fields), vec!["id", "label", "name"]);
        assert_eq!(fields[1].ty, TypeDescriptor::Int);
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let mut registry = TypeRegistry::new();
        let err = registry
            .register(
                CompositeDescriptor::new("Twice")
                    .field("a", TypeDescriptor::Int)
                    .field("a", TypeDescriptor::Long),
            )
            .unwrap_err();
        assert!(matches!(err, SynthesisError::InvalidArgument(_)));
    }

    #[test]
    fn test_duplicate_type_rejected() {
        let mut registry = TypeRegistry::new();
        registry.register(CompositeDescriptor::new("A")).unwrap();
        assert!(registry.register(CompositeDescriptor::new("A")).is_err());
    }

    #[test]
    fn test_unknown_parent_and_parent_loop() {
        let registry = TypeRegistry::new()
            .with(CompositeDescriptor::new("Orphan").extends("Missing"))
            .unwrap()
            .with(CompositeDescriptor::new("A").extends("B"))
            .unwrap()
            .with(CompositeDescriptor::new("B").extends("A"))
            .unwrap();

        assert!(matches!(
            registry.all_fields("Orphan"),
            Err(SynthesisError::UnsupportedType(name)) if name == "Missing"
        ));
        match registry.all_fields("A") {
            Err(SynthesisError::CyclicType { path }) => assert_eq!(path, vec!["A", "B", "A"]),
            other => panic!("expected a cycle, got {other:?}"),
        }
    }
}
