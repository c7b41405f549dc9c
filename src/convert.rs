//! JSON to NBT conversion.
//!
//! Conversion is a structural map: arrays become lists, objects become
//! compounds with the same keys in the same order, booleans become bytes and
//! numbers become the numeric tag matching their kind. Numbers that only carry
//! decimal text are narrowed to 32 bits: `Float` when the text has a `.`,
//! `Int` otherwise. Text that does not fit is an error, never clamped.
//!
//! # Example
//!
//! ```
//! use json_nbt::{JsonValue, NbtValue, serialize};
//!
//! let json = JsonValue::parse(r#"{"on": true, "hp": 20, "speed": 0.5}"#).unwrap();
//! let nbt = serialize(&json).unwrap();
//!
//! assert_eq!(nbt.get("on"), Some(&NbtValue::Byte(1)));
//! assert_eq!(nbt.get("hp"), Some(&NbtValue::Int(20)));
//! assert_eq!(nbt.get("speed"), Some(&NbtValue::Float(0.5)));
//! ```

use tracing::trace;

use crate::{
    ConvertConfig, Error, JsonNumber, JsonValue, NbtCompound, NbtValue, NullPolicy, Result,
    cold_path,
};

/// Picks the numeric tag for a single number.
///
/// Typed numbers keep their kind and value. Lazy numbers are parsed as `f32`
/// if their text contains a `.`, as `i32` otherwise.
///
/// # Errors
///
/// [`Error::MalformedNumber`] when lazy text does not parse at the chosen
/// width, including float text whose magnitude overflows `f32`.
pub fn classify(number: &JsonNumber) -> Result<NbtValue> {
    Ok(match number {
        JsonNumber::Double(v) => NbtValue::Double(*v),
        JsonNumber::Float(v) => NbtValue::Float(*v),
        JsonNumber::Long(v) => NbtValue::Long(*v),
        JsonNumber::Int(v) => NbtValue::Int(*v),
        JsonNumber::Short(v) => NbtValue::Short(*v),
        JsonNumber::Byte(v) => NbtValue::Byte(*v),
        JsonNumber::Lazy(lazy) => {
            let text = lazy.as_str();
            if text.contains('.') {
                match text.parse::<f32>() {
                    Ok(v) if v.is_finite() => NbtValue::Float(v),
                    _ => return Err(malformed(text, "float")),
                }
            } else {
                match text.parse::<i32>() {
                    Ok(v) => NbtValue::Int(v),
                    Err(_) => return Err(malformed(text, "int")),
                }
            }
        }
    })
}

#[cold]
fn malformed(text: &str, target: &'static str) -> Error {
    Error::MalformedNumber {
        text: text.to_owned(),
        target,
    }
}

/// Recursive JSON to NBT converter.
///
/// Holds no state besides its [`ConvertConfig`], so one converter can be
/// shared across threads and reused for any number of documents.
#[derive(Clone, Copy, Debug, Default)]
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    #[inline]
    pub const fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub const fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Converts one node. `Ok(None)` means the node has no NBT form under the
    /// current configuration; containers drop such children.
    pub fn convert(&self, value: &JsonValue) -> Result<Option<NbtValue>> {
        self.convert_at(value, 0)
    }

    /// Converts a root node, failing if it produces no tag.
    ///
    /// # Errors
    ///
    /// [`Error::Unconvertible`] names the root's kind when it declines,
    /// besides any error from [`convert`](Self::convert).
    pub fn serialize(&self, value: &JsonValue) -> Result<NbtValue> {
        match self.convert(value)? {
            Some(tag) => Ok(tag),
            None => {
                cold_path();
                Err(Error::Unconvertible {
                    kind: value.kind_name(),
                })
            }
        }
    }

    fn convert_at(&self, value: &JsonValue, depth: usize) -> Result<Option<NbtValue>> {
        Ok(match value {
            JsonValue::Bool(b) => Some(NbtValue::Byte(i8::from(*b))),
            JsonValue::Number(n) => Some(classify(n)?),
            JsonValue::String(s) => Some(NbtValue::String(s.clone())),
            JsonValue::Array(items) => {
                let depth = self.descend(depth)?;
                let mut list = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    match self.convert_at(item, depth)? {
                        Some(tag) => list.push(tag),
                        None => trace!(index, kind = item.kind_name(), "dropped array item"),
                    }
                }
                Some(NbtValue::List(list))
            }
            JsonValue::Object(entries) => {
                let depth = self.descend(depth)?;
                let mut compound = NbtCompound::with_capacity(entries.len());
                for (key, entry) in entries {
                    match self.convert_at(entry, depth)? {
                        Some(tag) => compound.push_unique(key.to_owned(), tag),
                        None => trace!(key, kind = entry.kind_name(), "dropped object entry"),
                    }
                }
                Some(NbtValue::Compound(compound))
            }
            JsonValue::Null => match self.config.null_policy {
                NullPolicy::EmptyCompound => Some(NbtValue::Compound(NbtCompound::new())),
                NullPolicy::Skip => None,
            },
        })
    }

    #[inline]
    fn descend(&self, depth: usize) -> Result<usize> {
        if depth >= self.config.max_depth {
            cold_path();
            return Err(Error::DepthLimitExceeded(self.config.max_depth));
        }
        Ok(depth + 1)
    }
}

/// [`Converter::convert`] with the default configuration.
#[inline]
pub fn convert(value: &JsonValue) -> Result<Option<NbtValue>> {
    Converter::default().convert(value)
}

/// [`Converter::serialize`] with the default configuration.
#[inline]
pub fn serialize(value: &JsonValue) -> Result<NbtValue> {
    Converter::default().serialize(value)
}
