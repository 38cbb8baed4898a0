//! The response envelope value and its decoding.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::{Extra, ResponseCode, TotalCount};

/// A structured response carrying a status, message, code, payload, count and
/// open-ended metadata.
///
/// Envelopes are normally produced by applying a
/// [`ResponseBuilder`](super::ResponseBuilder). Serializing one yields a flat
/// object in which the entries of [`extra`](Self::extra) sit beside the fixed
/// fields and override them on collision.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseEnvelope<C, D, T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable description of the outcome.
    pub message: String,
    /// Application or protocol status code; omitted from the output when zero
    /// or empty.
    pub code: C,
    /// Main payload; omitted from the output when it encodes to an empty value.
    pub data: D,
    /// Count of items, typically for pagination; omitted from the output when
    /// zero.
    pub total: T,
    /// Additional top-level fields.
    pub extra: Option<Extra>,
}

impl<C, D, T> ResponseEnvelope<C, D, T> {
    /// Look up an extra metadata entry by key.
    #[must_use]
    pub fn extra_field(&self, key: &str) -> Option<&Value> {
        self.extra.as_ref().and_then(|extra| extra.get(key))
    }
}

#[derive(Deserialize)]
struct WireEnvelope<C, D, T> {
    success: bool,
    message: String,
    #[serde(default)]
    code: C,
    #[serde(default)]
    data: D,
    #[serde(default)]
    total: T,
    #[serde(flatten)]
    extra: Extra,
}

/// Decoding treats every key other than the reserved ones as extra metadata.
/// An envelope without such keys decodes with `extra` set to `None`.
impl<'de, C, D, T> Deserialize<'de> for ResponseEnvelope<C, D, T>
where
    C: ResponseCode + Deserialize<'de>,
    D: Default + Deserialize<'de>,
    T: TotalCount + Deserialize<'de>,
{
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let wire = WireEnvelope::<C, D, T>::deserialize(deserializer)?;
        Ok(Self {
            success: wire.success,
            message: wire.message,
            code: wire.code,
            data: wire.data,
            total: wire.total,
            extra: (!wire.extra.is_empty()).then_some(wire.extra),
        })
    }
}
