//! Flattening serializer for [`ResponseEnvelope`].
//!
//! Encoding runs in two passes:
//!
//! 1. encode the fixed fields, dropping `code`, `data` and `total` when they
//!    hold a zero value;
//! 2. decode that encoding into a string-keyed map;
//! 3. overlay every entry of [`ResponseEnvelope::extra`], replacing clashes;
//! 4. encode the merged map.

use std::sync::Arc;

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::zero::is_zero;
use super::{Extra, ResponseCode, ResponseEnvelope, TotalCount};
use crate::{RpsError, RpsResult, RpsResultExt};

#[derive(Serialize)]
struct FixedFields<'a, C: ResponseCode, D: Serialize, T: TotalCount> {
    success: bool,
    message: &'a str,
    #[serde(skip_serializing_if = "code_is_unset")]
    code: &'a C,
    #[serde(skip_serializing_if = "data_is_empty")]
    data: &'a D,
    #[serde(skip_serializing_if = "total_is_unset")]
    total: &'a T,
}

fn code_is_unset<C: ResponseCode>(code: &&C) -> bool {
    ResponseCode::is_unset(*code)
}

fn total_is_unset<T: TotalCount>(total: &&T) -> bool {
    TotalCount::is_unset(*total)
}

fn data_is_empty<D: Serialize>(data: &&D) -> bool {
    is_zero(*data)
}

/// Insert each `extra` entry into `target`, replacing existing keys.
///
/// Only the top level is merged; nested objects in `extra` replace their
/// counterparts wholesale.
pub(crate) fn overlay_extra(target: &mut Extra, extra: &Extra) {
    for (key, value) in extra {
        if target.insert(key.clone(), value.clone()).is_some() {
            tracing::debug!(key = %key, "extra metadata overrides an encoded envelope field");
        }
    }
}

impl<C, D, T> ResponseEnvelope<C, D, T>
where
    C: ResponseCode,
    D: Serialize,
    T: TotalCount,
{
    /// Encode the envelope into a single flat JSON object map.
    ///
    /// # Errors
    ///
    /// Returns [`RpsError::Json`] when `data` cannot be encoded and
    /// [`RpsError::NotAnObject`] if the fixed fields fail to form an object.
    pub fn to_map(&self) -> RpsResult<Extra> {
        let fixed = FixedFields {
            success: self.success,
            message: &self.message,
            code: &self.code,
            data: &self.data,
            total: &self.total,
        };
        // A derived struct always encodes to an object; the check keeps the
        // map conversion total.
        let mut merged = match serde_json::to_value(fixed).into_rps()? {
            Value::Object(map) => map,
            other => return Err(Arc::new(RpsError::not_an_object(&other))),
        };
        if let Some(extra) = &self.extra {
            overlay_extra(&mut merged, extra);
        }
        Ok(merged)
    }

    /// Encode the envelope as compact JSON bytes.
    ///
    /// # Errors
    ///
    /// Propagates any failure from [`Self::to_map`] or the final encode.
    pub fn to_json_vec(&self) -> RpsResult<Vec<u8>> {
        serde_json::to_vec(&self.to_map()?).into_rps()
    }

    /// Encode the envelope as a compact JSON string.
    ///
    /// # Errors
    ///
    /// Propagates any failure from [`Self::to_map`] or the final encode.
    pub fn to_json_string(&self) -> RpsResult<String> {
        serde_json::to_string(&self.to_map()?).into_rps()
    }
}

impl<C, D, T> Serialize for ResponseEnvelope<C, D, T>
where
    C: ResponseCode,
    D: Serialize,
    T: TotalCount,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::Error as _;

        self.to_map()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}
