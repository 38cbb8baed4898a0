//! Steps that inspect the serialized envelope or the build failure.

use crate::fixtures::EnvelopeContext;
use anyhow::{Result, anyhow, ensure};
use rps::{Extra, RpsError};
use rstest_bdd_macros::then;
use serde_json::{Value, json};

fn encoded(envelope_context: &EnvelopeContext) -> Result<Extra> {
    envelope_context.encoded.get().ok_or_else(|| {
        anyhow!(
            "expected a serialized envelope, build failed with {:?}",
            envelope_context.failure.get()
        )
    })
}

fn expect_field(envelope_context: &EnvelopeContext, key: &str, expected: &Value) -> Result<()> {
    let map = encoded(envelope_context)?;
    let actual = map.get(key);
    ensure!(
        actual == Some(expected),
        "field {key} is {actual:?}; expected {expected}"
    );
    Ok(())
}

#[then("the field {key} is the boolean {expected}")]
fn field_is_boolean(
    envelope_context: &EnvelopeContext,
    key: String,
    expected: bool,
) -> Result<()> {
    expect_field(envelope_context, &key, &json!(expected))
}

#[then("the field {key} is the number {expected}")]
fn field_is_number(
    envelope_context: &EnvelopeContext,
    key: String,
    expected: i64,
) -> Result<()> {
    expect_field(envelope_context, &key, &json!(expected))
}

#[then("the field {key} is the text {expected}")]
fn field_is_text(
    envelope_context: &EnvelopeContext,
    key: String,
    expected: String,
) -> Result<()> {
    expect_field(envelope_context, &key, &json!(expected))
}

#[then("the field {key} is absent")]
fn field_is_absent(envelope_context: &EnvelopeContext, key: String) -> Result<()> {
    let map = encoded(envelope_context)?;
    ensure!(!map.contains_key(&key), "field {key} unexpectedly present in {map:?}");
    Ok(())
}

#[then("building fails with a validation error for {key}")]
fn build_failed(envelope_context: &EnvelopeContext, key: String) -> Result<()> {
    ensure!(
        envelope_context.encoded.is_empty(),
        "expected no serialized envelope"
    );
    let err = envelope_context
        .failure
        .get()
        .ok_or_else(|| anyhow!("expected the build to fail"))?;
    ensure!(
        matches!(err.as_ref(), RpsError::Validation { key: found, .. } if *found == key),
        "unexpected failure {err:?}"
    );
    Ok(())
}
