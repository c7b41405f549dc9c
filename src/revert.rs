//! NBT to JSON conversion.
//!
//! Numeric tags come back as typed [`JsonNumber`]s of the same width, so a
//! value that went through [`serialize`](crate::serialize) and back keeps the
//! width the classifier picked for it. Booleans are not recovered (they stay
//! bytes), and an empty compound that stood in for `null` reads back as `{}`.

use crate::{JsonNumber, JsonObject, JsonValue, NbtValue};

/// Converts an NBT tree to a JSON tree. Total: every tag has a JSON form.
///
/// # Example
///
/// ```
/// use json_nbt::{JsonNumber, JsonValue, NbtValue, deserialize};
///
/// let json = deserialize(&NbtValue::List(vec![NbtValue::Short(7), "x".into()]));
/// assert_eq!(
///     json,
///     JsonValue::Array(vec![JsonValue::Number(JsonNumber::Short(7)), "x".into()])
/// );
/// ```
pub fn deserialize(value: &NbtValue) -> JsonValue {
    match value {
        NbtValue::Byte(v) => JsonValue::Number(JsonNumber::Byte(*v)),
        NbtValue::Short(v) => JsonValue::Number(JsonNumber::Short(*v)),
        NbtValue::Int(v) => JsonValue::Number(JsonNumber::Int(*v)),
        NbtValue::Long(v) => JsonValue::Number(JsonNumber::Long(*v)),
        NbtValue::Float(v) => JsonValue::Number(JsonNumber::Float(*v)),
        NbtValue::Double(v) => JsonValue::Number(JsonNumber::Double(*v)),
        NbtValue::String(v) => JsonValue::String(v.clone()),
        NbtValue::List(items) => JsonValue::Array(items.iter().map(deserialize).collect()),
        NbtValue::Compound(compound) => {
            let mut object = JsonObject::with_capacity(compound.len());
            for (key, entry) in compound {
                object.push_unique(key.to_owned(), deserialize(entry));
            }
            JsonValue::Object(object)
        }
    }
}
