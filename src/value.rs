use crate::{Index, OrderedMap, TagID};

/// Ordered, string-keyed NBT compound.
pub type NbtCompound = OrderedMap<NbtValue>;

/// An owned NBT tree node.
///
/// Lists are not required to be homogeneous; the binary writer takes care of
/// wrapping mixed lists (see [`to_vec`](crate::to_vec)).
#[derive(Clone, Debug, PartialEq)]
pub enum NbtValue {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    List(Vec<NbtValue>),
    Compound(NbtCompound),
}

impl Default for NbtValue {
    /// An empty compound, the usual root of an NBT document.
    #[inline]
    fn default() -> Self {
        NbtValue::Compound(NbtCompound::new())
    }
}

impl NbtValue {
    /// Wire tag of this value.
    pub const fn tag_id(&self) -> TagID {
        match self {
            NbtValue::Byte(_) => TagID::Byte,
            NbtValue::Short(_) => TagID::Short,
            NbtValue::Int(_) => TagID::Int,
            NbtValue::Long(_) => TagID::Long,
            NbtValue::Float(_) => TagID::Float,
            NbtValue::Double(_) => TagID::Double,
            NbtValue::String(_) => TagID::String,
            NbtValue::List(_) => TagID::List,
            NbtValue::Compound(_) => TagID::Compound,
        }
    }

    /// Looks up a list element by position or a compound entry by key.
    ///
    /// # Example
    ///
    /// ```
    /// use json_nbt::{NbtCompound, NbtValue};
    ///
    /// let mut compound = NbtCompound::new();
    /// compound.insert("scores", NbtValue::List(vec![1i32.into(), 2i32.into()]));
    /// let root = NbtValue::Compound(compound);
    ///
    /// assert_eq!(root.get("scores").and_then(|v| v.get(1)), Some(&NbtValue::Int(2)));
    /// assert_eq!(root.get(0), None);
    /// ```
    #[inline]
    pub fn get(&self, index: impl Index) -> Option<&NbtValue> {
        index.lookup(self)
    }

    #[inline]
    pub fn get_mut(&mut self, index: impl Index) -> Option<&mut NbtValue> {
        index.lookup_mut(self)
    }

    #[inline]
    pub fn as_byte(&self) -> Option<i8> {
        match self {
            NbtValue::Byte(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_short(&self) -> Option<i16> {
        match self {
            NbtValue::Short(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i32> {
        match self {
            NbtValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_long(&self) -> Option<i64> {
        match self {
            NbtValue::Long(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_float(&self) -> Option<f32> {
        match self {
            NbtValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_double(&self) -> Option<f64> {
        match self {
            NbtValue::Double(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            NbtValue::String(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[NbtValue]> {
        match self {
            NbtValue::List(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_compound(&self) -> Option<&NbtCompound> {
        match self {
            NbtValue::Compound(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i8> for NbtValue {
    fn from(value: i8) -> Self {
        NbtValue::Byte(value)
    }
}

impl From<i16> for NbtValue {
    fn from(value: i16) -> Self {
        NbtValue::Short(value)
    }
}

impl From<i32> for NbtValue {
    fn from(value: i32) -> Self {
        NbtValue::Int(value)
    }
}

impl From<i64> for NbtValue {
    fn from(value: i64) -> Self {
        NbtValue::Long(value)
    }
}

impl From<f32> for NbtValue {
    fn from(value: f32) -> Self {
        NbtValue::Float(value)
    }
}

impl From<f64> for NbtValue {
    fn from(value: f64) -> Self {
        NbtValue::Double(value)
    }
}

impl From<&str> for NbtValue {
    fn from(value: &str) -> Self {
        NbtValue::String(value.to_owned())
    }
}

impl From<String> for NbtValue {
    fn from(value: String) -> Self {
        NbtValue::String(value)
    }
}

impl From<Vec<NbtValue>> for NbtValue {
    fn from(value: Vec<NbtValue>) -> Self {
        NbtValue::List(value)
    }
}

impl From<NbtCompound> for NbtValue {
    fn from(value: NbtCompound) -> Self {
        NbtValue::Compound(value)
    }
}
