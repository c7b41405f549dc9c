//! [`serde::Serialize`] for the value trees, so either tree can be handed to
//! any serde format (for instance to print an NBT document as JSON text).

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{JsonNumber, JsonValue, LazyNumber, NbtValue, OrderedMap};

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for NbtValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NbtValue::Byte(v) => serializer.serialize_i8(*v),
            NbtValue::Short(v) => serializer.serialize_i16(*v),
            NbtValue::Int(v) => serializer.serialize_i32(*v),
            NbtValue::Long(v) => serializer.serialize_i64(*v),
            NbtValue::Float(v) => serializer.serialize_f32(*v),
            NbtValue::Double(v) => serializer.serialize_f64(*v),
            NbtValue::String(v) => serializer.serialize_str(v),
            NbtValue::List(items) => serializer.collect_seq(items),
            NbtValue::Compound(compound) => compound.serialize(serializer),
        }
    }
}

/// Integer text serializes as `i64`, other numeric text as `f64`; text that is
/// neither is passed through as a string.
impl Serialize for LazyNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let text = self.as_str();
        if let Ok(v) = text.parse::<i64>() {
            serializer.serialize_i64(v)
        } else if let Ok(v) = text.parse::<f64>() {
            serializer.serialize_f64(v)
        } else {
            serializer.serialize_str(text)
        }
    }
}

impl Serialize for JsonNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            JsonNumber::Double(v) => serializer.serialize_f64(*v),
            JsonNumber::Float(v) => serializer.serialize_f32(*v),
            JsonNumber::Long(v) => serializer.serialize_i64(*v),
            JsonNumber::Int(v) => serializer.serialize_i32(*v),
            JsonNumber::Short(v) => serializer.serialize_i16(*v),
            JsonNumber::Byte(v) => serializer.serialize_i8(*v),
            JsonNumber::Lazy(v) => v.serialize(serializer),
        }
    }
}

impl Serialize for JsonValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            JsonValue::Null => serializer.serialize_unit(),
            JsonValue::Bool(v) => serializer.serialize_bool(*v),
            JsonValue::Number(v) => v.serialize(serializer),
            JsonValue::String(v) => serializer.serialize_str(v),
            JsonValue::Array(items) => serializer.collect_seq(items),
            JsonValue::Object(object) => object.serialize(serializer),
        }
    }
}
