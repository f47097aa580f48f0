//! Prints a synthesized sample fixture as JSON.
//!
//! Run with:
//! ```
//! FIXTURE_SEED=12345 cargo run -p randomizer --bin fixture
//! ```

use randomizer::prelude::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn register_demo_types(synth: &mut Synthesizer) -> Result<(), SynthesisError> {
    synth.register(
        CompositeDescriptor::new("Address")
            .field("street", TypeDescriptor::String)
            .field("number", TypeDescriptor::Short)
            .field("zip", TypeDescriptor::Int),
    )?;
    synth.register(
        CompositeDescriptor::new("Entity")
            .field("id", TypeDescriptor::Long)
            .constant("SCHEMA_VERSION", TypeDescriptor::Int),
    )?;
    synth.register(
        CompositeDescriptor::new("Person")
            .extends("Entity")
            .field("name", TypeDescriptor::String)
            .field(
                "gender",
                TypeDescriptor::Enum(EnumDescriptor::new("Gender", ["MALE", "FEMALE"])),
            )
            .field("married", TypeDescriptor::Boolean)
            .field("salary", TypeDescriptor::BigDecimal)
            .field("born", TypeDescriptor::LocalDate)
            .field("about", TypeDescriptor::String)
            .field("address", TypeDescriptor::composite("Address")),
    )?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let seed = std::env::var("FIXTURE_SEED")
        .ok()
        .map(|s| s.parse::<u64>())
        .transpose()?;

    let mut synth = Synthesizer::with_config(SynthesisConfig {
        seed,
        ..Default::default()
    });
    register_demo_types(&mut synth)?;

    tracing::info!(?seed, "Synthesizing fixture");

    let person = synth.synthesize("Person", &["about"])?;
    let display_name = FakeDictionary.lookup(Category::FullName, synth.rng());
    let zone = random_zone_id(synth.rng());

    let fixture = json!({
        "person": person.to_json(),
        "display_name": display_name,
        "zone": zone.name(),
    });
    println!("{}", serde_json::to_string_pretty(&fixture)?);

    tracing::info!(fields = person.len(), "Fixture complete");

    Ok(())
}
