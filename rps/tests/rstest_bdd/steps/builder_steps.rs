//! Steps that configure the response builder.

use crate::fixtures::{EnvelopeContext, ScenarioBuilder};
use anyhow::{Result, anyhow};
use rps::RpsError;
use rstest_bdd_macros::{given, when};
use serde_json::json;

fn update<F>(envelope_context: &EnvelopeContext, f: F) -> Result<()>
where
    F: FnOnce(ScenarioBuilder) -> ScenarioBuilder,
{
    let builder = envelope_context
        .builder
        .take()
        .ok_or_else(|| anyhow!("no response builder in scenario"))?;
    envelope_context.builder.set(f(builder));
    Ok(())
}

#[given("a fresh response builder")]
fn fresh_builder(envelope_context: &EnvelopeContext) {
    envelope_context.builder.set(ScenarioBuilder::new());
}

#[when("the message is set to {message}")]
fn set_message(envelope_context: &EnvelopeContext, message: String) -> Result<()> {
    update(envelope_context, |builder| builder.message(message))
}

#[when("the code is set to {code}")]
fn set_code(envelope_context: &EnvelopeContext, code: i64) -> Result<()> {
    update(envelope_context, |builder| builder.code(code))
}

#[when("the total is set to {total}")]
fn set_total(envelope_context: &EnvelopeContext, total: u32) -> Result<()> {
    update(envelope_context, |builder| builder.total(total))
}

#[when("the success flag is set to {success}")]
fn set_success(envelope_context: &EnvelopeContext, success: bool) -> Result<()> {
    update(envelope_context, |builder| builder.success(success))
}

#[when("the extra number field {key} is set to {value}")]
fn set_extra_number(envelope_context: &EnvelopeContext, key: String, value: i64) -> Result<()> {
    update(envelope_context, |builder| builder.extra_entry(key, json!(value)))
}

#[when("the extra text field {key} is set to {value}")]
fn set_extra_text(envelope_context: &EnvelopeContext, key: String, value: String) -> Result<()> {
    update(envelope_context, |builder| builder.extra_entry(key, value))
}

#[when("a mutator rejecting the field {key} is appended")]
fn append_rejecting(envelope_context: &EnvelopeContext, key: String) -> Result<()> {
    update(envelope_context, |builder| {
        builder.try_with(move |_| Err(RpsError::validation_arc(key.clone(), "rejected")))
    })
}

#[when("the envelope is built and serialized")]
fn build_and_serialize(envelope_context: &EnvelopeContext) -> Result<()> {
    let builder = envelope_context
        .builder
        .get()
        .ok_or_else(|| anyhow!("no response builder in scenario"))?;
    match builder.build().and_then(|envelope| envelope.to_map()) {
        Ok(map) => envelope_context.encoded.set(map),
        Err(err) => envelope_context.failure.set(err),
    }
    Ok(())
}
