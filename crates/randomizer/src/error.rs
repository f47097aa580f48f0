//! Error type shared by every generator and the object populator.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Cannot instantiate {type_name}: {reason}")]
    Instantiation { type_name: String, reason: String },

    #[error("Cannot assign field `{field}` of {type_name}")]
    FieldAccess { type_name: String, field: String },

    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    #[error("Cyclic type reference: {}", path.join(" -> "))]
    CyclicType { path: Vec<String> },

    #[error("Recursion depth {depth} exceeded while synthesizing {type_name}")]
    RecursionExhausted { type_name: String, depth: usize },

    #[error("Gave up after {attempts} attempts: {what}")]
    RetriesExhausted { what: String, attempts: u32 },

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Decimal error: {0}")]
    Decimal(#[from] rust_decimal::Error),
}

impl SynthesisError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
