//! Shared fixtures for the behavioural scenarios.

use std::sync::Arc;

use rps::{Extra, ResponseBuilder, RpsError};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Builder type exercised by the scenarios.
pub type ScenarioBuilder = ResponseBuilder<i64, Option<String>, u32>;

/// Scenario state shared between envelope steps.
#[derive(Debug, Default, ScenarioState)]
pub struct EnvelopeContext {
    /// Builder under construction.
    pub builder: Slot<ScenarioBuilder>,
    /// Serialized envelope after a successful build.
    pub encoded: Slot<Extra>,
    /// Failure reported by the build or the serializer.
    pub failure: Slot<Arc<RpsError>>,
}

/// Creates a clean envelope context for each scenario.
#[fixture]
pub fn envelope_context() -> EnvelopeContext {
    EnvelopeContext::default()
}
