//! Object graph synthesis.
//!
//! Two routes share one [`Synthesizer`]:
//! - descriptor route: register [`CompositeDescriptor`]s in a
//!   [`TypeRegistry`] and call [`Synthesizer::synthesize`] to get a
//!   [`Record`]
//! - typed route: declare structs with
//!   [`synthesize_record!`](crate::synthesize_record) and call
//!   [`Synthesizer::generate`]

pub mod descriptor;
pub mod populator;
pub mod typed;
pub mod value;

pub use descriptor::{
    CompositeDescriptor, EnumDescriptor, FieldAccess, FieldDescriptor, TypeDescriptor,
    TypeRegistry,
};
pub use populator::Synthesizer;
pub use typed::{Enumerated, Synthesize, SynthesizeRecord};
pub use value::{Record, Value};
