//! Generic JSON tree consumed by the converter.
//!
//! [`JsonValue`] mirrors what a JSON parser produces. Numbers keep whatever
//! kind the producer committed to: a typed Rust number, or a [`LazyNumber`]
//! that only remembers its decimal text. Values built from
//! [`serde_json::Value`] always carry lazy numbers, because `serde_json` is
//! built with `arbitrary_precision` and hands out the literal as written.

use std::fmt;

use crate::{Error, Index, OrderedMap, Result};

/// Ordered, string-keyed JSON object.
pub type JsonObject = OrderedMap<JsonValue>;

#[derive(Clone, Debug, PartialEq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(JsonNumber),
    String(String),
    Array(Vec<JsonValue>),
    Object(JsonObject),
}

/// A number whose only known form is the decimal text it was parsed from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LazyNumber(String);

impl LazyNumber {
    #[inline]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LazyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum JsonNumber {
    Double(f64),
    Float(f32),
    Long(i64),
    Int(i32),
    Short(i16),
    Byte(i8),
    Lazy(LazyNumber),
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum NumberKind {
    Double,
    Float,
    Long,
    Int,
    Short,
    Byte,
    Lazy,
}

impl NumberKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            NumberKind::Double => "double",
            NumberKind::Float => "float",
            NumberKind::Long => "long",
            NumberKind::Int => "int",
            NumberKind::Short => "short",
            NumberKind::Byte => "byte",
            NumberKind::Lazy => "lazy",
        }
    }
}

impl JsonNumber {
    /// Shorthand for `JsonNumber::Lazy(LazyNumber::new(text))`.
    #[inline]
    pub fn lazy(text: impl Into<String>) -> Self {
        JsonNumber::Lazy(LazyNumber::new(text))
    }

    pub const fn kind(&self) -> NumberKind {
        match self {
            JsonNumber::Double(_) => NumberKind::Double,
            JsonNumber::Float(_) => NumberKind::Float,
            JsonNumber::Long(_) => NumberKind::Long,
            JsonNumber::Int(_) => NumberKind::Int,
            JsonNumber::Short(_) => NumberKind::Short,
            JsonNumber::Byte(_) => NumberKind::Byte,
            JsonNumber::Lazy(_) => NumberKind::Lazy,
        }
    }
}

impl fmt::Display for JsonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonNumber::Double(v) => write!(f, "{v:?}"),
            JsonNumber::Float(v) => write!(f, "{v:?}"),
            JsonNumber::Long(v) => write!(f, "{v}"),
            JsonNumber::Int(v) => write!(f, "{v}"),
            JsonNumber::Short(v) => write!(f, "{v}"),
            JsonNumber::Byte(v) => write!(f, "{v}"),
            JsonNumber::Lazy(v) => write!(f, "{v}"),
        }
    }
}

impl JsonValue {
    /// Parses JSON text. Numbers come back as [`JsonNumber::Lazy`].
    ///
    /// # Example
    ///
    /// ```
    /// use json_nbt::{JsonNumber, JsonValue};
    ///
    /// let value = JsonValue::parse(r#"{"level": 3}"#).unwrap();
    /// assert_eq!(
    ///     value.get("level"),
    ///     Some(&JsonValue::Number(JsonNumber::lazy("3")))
    /// );
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str::<serde_json::Value>(text)
            .map(Self::from)
            .map_err(|e| Error::Message(e.to_string()))
    }

    /// Name of the variant, used in diagnostics.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "boolean",
            JsonValue::Number(_) => "number",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }

    /// `true` for booleans, numbers and strings.
    pub const fn is_primitive(&self) -> bool {
        matches!(
            self,
            JsonValue::Bool(_) | JsonValue::Number(_) | JsonValue::String(_)
        )
    }

    #[inline]
    pub fn get(&self, index: impl Index) -> Option<&JsonValue> {
        index.lookup(self)
    }

    #[inline]
    pub fn get_mut(&mut self, index: impl Index) -> Option<&mut JsonValue> {
        index.lookup_mut(self)
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_owned())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<JsonNumber> for JsonValue {
    fn from(value: JsonNumber) -> Self {
        JsonValue::Number(value)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(value: Vec<JsonValue>) -> Self {
        JsonValue::Array(value)
    }
}

impl From<JsonObject> for JsonValue {
    fn from(value: JsonObject) -> Self {
        JsonValue::Object(value)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for JsonNumber {
                fn from(value: $ty) -> Self {
                    JsonNumber::$variant(value)
                }
            }

            impl From<$ty> for JsonValue {
                fn from(value: $ty) -> Self {
                    JsonValue::Number(JsonNumber::$variant(value))
                }
            }
        )*
    };
}

impl_from_number! {
    f64 => Double,
    f32 => Float,
    i64 => Long,
    i32 => Int,
    i16 => Short,
    i8 => Byte,
}

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(b),
            serde_json::Value::Number(n) => JsonValue::Number(JsonNumber::lazy(n.to_string())),
            serde_json::Value::String(s) => JsonValue::String(s),
            serde_json::Value::Array(items) => {
                JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(entries) => {
                let mut object = JsonObject::with_capacity(entries.len());
                for (key, value) in entries {
                    object.push_unique(key, JsonValue::from(value));
                }
                JsonValue::Object(object)
            }
        }
    }
}

impl TryFrom<JsonNumber> for serde_json::Number {
    type Error = Error;

    fn try_from(value: JsonNumber) -> Result<Self> {
        match value {
            JsonNumber::Long(v) => Ok(v.into()),
            JsonNumber::Int(v) => Ok(v.into()),
            JsonNumber::Short(v) => Ok(v.into()),
            JsonNumber::Byte(v) => Ok(v.into()),
            JsonNumber::Double(v) if !v.is_finite() => Err(Error::NonFiniteNumber),
            JsonNumber::Float(v) if !v.is_finite() => Err(Error::NonFiniteNumber),
            // Debug formatting keeps the shortest text that round trips at the
            // value's own width, so 0.1f32 stays "0.1".
            JsonNumber::Double(v) => parse_number(&format!("{v:?}")),
            JsonNumber::Float(v) => parse_number(&format!("{v:?}")),
            JsonNumber::Lazy(v) => parse_number(v.as_str()),
        }
    }
}

fn parse_number(text: &str) -> Result<serde_json::Number> {
    serde_json::from_str::<serde_json::Number>(text).map_err(|_| Error::MalformedNumber {
        text: text.to_owned(),
        target: "json number",
    })
}

impl TryFrom<JsonValue> for serde_json::Value {
    type Error = Error;

    fn try_from(value: JsonValue) -> Result<Self> {
        Ok(match value {
            JsonValue::Null => serde_json::Value::Null,
            JsonValue::Bool(b) => serde_json::Value::Bool(b),
            JsonValue::Number(n) => serde_json::Value::Number(n.try_into()?),
            JsonValue::String(s) => serde_json::Value::String(s),
            JsonValue::Array(items) => serde_json::Value::Array(
                items
                    .into_iter()
                    .map(serde_json::Value::try_from)
                    .collect::<Result<_>>()?,
            ),
            JsonValue::Object(entries) => {
                let mut map = serde_json::Map::with_capacity(entries.len());
                for (key, value) in entries {
                    map.insert(key, serde_json::Value::try_from(value)?);
                }
                serde_json::Value::Object(map)
            }
        })
    }
}
