//! Zero-value detection for envelope payloads.
//!
//! A payload is empty when it serializes as `None`, the unit value, `false`,
//! a numeric zero, `'\0'`, or a string, byte buffer, sequence or map without
//! entries. `Some(_)`, structs and enum variants always count as present,
//! whatever they hold. Newtype structs defer to the value they wrap.
//!
//! The check walks the payload through a [`Serializer`] that never produces
//! output, so the type information that JSON encoding erases (an `Option`
//! wrapper, a field-less struct) is still visible.

use std::num::FpCategory;

use serde::ser::{
    Serialize, SerializeMap, SerializeSeq, SerializeStruct, SerializeStructVariant,
    SerializeTuple, SerializeTupleStruct, SerializeTupleVariant, Serializer,
};

/// Returns `true` when `value` is a zero value.
///
/// A value that refuses to serialize counts as present, leaving the failure
/// to the real encode.
pub(super) fn is_zero<V>(value: &V) -> bool
where
    V: Serialize + ?Sized,
{
    value.serialize(ZeroCheck).unwrap_or(false)
}

struct ZeroCheck;

/// Records whether a compound value holds anything.
struct Entries {
    occupied: bool,
}

type Outcome = Result<bool, serde_json::Error>;
type Step = Result<(), serde_json::Error>;

impl Serializer for ZeroCheck {
    type Ok = bool;
    type Error = serde_json::Error;
    type SerializeSeq = Entries;
    type SerializeTuple = Entries;
    type SerializeTupleStruct = Entries;
    type SerializeTupleVariant = Entries;
    type SerializeMap = Entries;
    type SerializeStruct = Entries;
    type SerializeStructVariant = Entries;

    fn serialize_bool(self, v: bool) -> Outcome {
        Ok(!v)
    }

    fn serialize_i8(self, v: i8) -> Outcome {
        Ok(v == 0)
    }

    fn serialize_i16(self, v: i16) -> Outcome {
        Ok(v == 0)
    }

    fn serialize_i32(self, v: i32) -> Outcome {
        Ok(v == 0)
    }

    fn serialize_i64(self, v: i64) -> Outcome {
        Ok(v == 0)
    }

    fn serialize_i128(self, v: i128) -> Outcome {
        Ok(v == 0)
    }

    fn serialize_u8(self, v: u8) -> Outcome {
        Ok(v == 0)
    }

    fn serialize_u16(self, v: u16) -> Outcome {
        Ok(v == 0)
    }

    fn serialize_u32(self, v: u32) -> Outcome {
        Ok(v == 0)
    }

    fn serialize_u64(self, v: u64) -> Outcome {
        Ok(v == 0)
    }

    fn serialize_u128(self, v: u128) -> Outcome {
        Ok(v == 0)
    }

    fn serialize_f32(self, v: f32) -> Outcome {
        Ok(v.classify() == FpCategory::Zero)
    }

    fn serialize_f64(self, v: f64) -> Outcome {
        Ok(v.classify() == FpCategory::Zero)
    }

    fn serialize_char(self, v: char) -> Outcome {
        Ok(v == '\0')
    }

    fn serialize_str(self, v: &str) -> Outcome {
        Ok(v.is_empty())
    }

    fn serialize_bytes(self, v: &[u8]) -> Outcome {
        Ok(v.is_empty())
    }

    fn serialize_none(self) -> Outcome {
        Ok(true)
    }

    fn serialize_some<V>(self, _value: &V) -> Outcome
    where
        V: Serialize + ?Sized,
    {
        Ok(false)
    }

    fn serialize_unit(self) -> Outcome {
        Ok(true)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Outcome {
        Ok(false)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Outcome {
        Ok(false)
    }

    fn serialize_newtype_struct<V>(self, _name: &'static str, value: &V) -> Outcome
    where
        V: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<V>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &V,
    ) -> Outcome
    where
        V: Serialize + ?Sized,
    {
        Ok(false)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Entries, serde_json::Error> {
        Ok(Entries { occupied: false })
    }

    fn serialize_tuple(self, len: usize) -> Result<Entries, serde_json::Error> {
        Ok(Entries { occupied: len > 0 })
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Entries, serde_json::Error> {
        Ok(Entries { occupied: true })
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Entries, serde_json::Error> {
        Ok(Entries { occupied: true })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Entries, serde_json::Error> {
        Ok(Entries { occupied: false })
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Entries, serde_json::Error> {
        Ok(Entries { occupied: true })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Entries, serde_json::Error> {
        Ok(Entries { occupied: true })
    }
}

impl SerializeSeq for Entries {
    type Ok = bool;
    type Error = serde_json::Error;

    fn serialize_element<V>(&mut self, _value: &V) -> Step
    where
        V: Serialize + ?Sized,
    {
        self.occupied = true;
        Ok(())
    }

    fn end(self) -> Outcome {
        Ok(!self.occupied)
    }
}

impl SerializeTuple for Entries {
    type Ok = bool;
    type Error = serde_json::Error;

    fn serialize_element<V>(&mut self, _value: &V) -> Step
    where
        V: Serialize + ?Sized,
    {
        self.occupied = true;
        Ok(())
    }

    fn end(self) -> Outcome {
        Ok(!self.occupied)
    }
}

impl SerializeTupleStruct for Entries {
    type Ok = bool;
    type Error = serde_json::Error;

    fn serialize_field<V>(&mut self, _value: &V) -> Step
    where
        V: Serialize + ?Sized,
    {
        Ok(())
    }

    fn end(self) -> Outcome {
        Ok(!self.occupied)
    }
}

impl SerializeTupleVariant for Entries {
    type Ok = bool;
    type Error = serde_json::Error;

    fn serialize_field<V>(&mut self, _value: &V) -> Step
    where
        V: Serialize + ?Sized,
    {
        Ok(())
    }

    fn end(self) -> Outcome {
        Ok(!self.occupied)
    }
}

impl SerializeMap for Entries {
    type Ok = bool;
    type Error = serde_json::Error;

    fn serialize_key<K>(&mut self, _key: &K) -> Step
    where
        K: Serialize + ?Sized,
    {
        self.occupied = true;
        Ok(())
    }

    fn serialize_value<V>(&mut self, _value: &V) -> Step
    where
        V: Serialize + ?Sized,
    {
        Ok(())
    }

    fn end(self) -> Outcome {
        Ok(!self.occupied)
    }
}

impl SerializeStruct for Entries {
    type Ok = bool;
    type Error = serde_json::Error;

    fn serialize_field<V>(&mut self, _key: &'static str, _value: &V) -> Step
    where
        V: Serialize + ?Sized,
    {
        Ok(())
    }

    fn end(self) -> Outcome {
        Ok(!self.occupied)
    }
}

impl SerializeStructVariant for Entries {
    type Ok = bool;
    type Error = serde_json::Error;

    fn serialize_field<V>(&mut self, _key: &'static str, _value: &V) -> Step
    where
        V: Serialize + ?Sized,
    {
        Ok(())
    }

    fn end(self) -> Outcome {
        Ok(!self.occupied)
    }
}
