//! Binds the envelope feature file to the step registry.

use crate::fixtures::{EnvelopeContext, envelope_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/response_envelope.feature",
    fixtures = [envelope_context: EnvelopeContext]
);
