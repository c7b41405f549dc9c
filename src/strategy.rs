//! Compression strategies for JSON payloads.
//!
//! A strategy turns a JSON document into a smaller tree that is cheaper to put
//! on the wire, and back. [`JsonCompressionStrategy`] describes the two tree
//! conversions and provides stream-level `compress`/`decompress` on top of the
//! binary NBT codec. [`JsonToNbtStrategy`] is the implementation backed by
//! [`Converter`] and [`deserialize`](crate::deserialize).
//!
//! # Example
//!
//! ```
//! use json_nbt::{JsonCompressionStrategy, JsonToNbtStrategy, JsonValue};
//!
//! let strategy = JsonToNbtStrategy::new();
//! let json = JsonValue::parse(r#"{"text": "hello", "bold": true}"#).unwrap();
//!
//! let bytes = strategy.compress_to_bytes(&json).unwrap();
//! let back = strategy.decompress(&bytes[..]).unwrap();
//! assert_eq!(back.get("text"), json.get("text"));
//! ```

use std::{
    fmt,
    io::{Read, Write},
    marker::PhantomData,
};

use bytes::Bytes;
use tracing::debug;

use crate::{
    BigEndian, ByteOrder, ConvertConfig, Converter, Error, JsonValue, NbtValue, Result,
    from_reader, to_vec,
};

pub trait JsonCompressionStrategy {
    /// Byte order of the encoded stream.
    type ByteOrder: ByteOrder;

    fn serialize(&self, json: &JsonValue) -> Result<NbtValue>;

    fn deserialize(&self, nbt: &NbtValue) -> Result<JsonValue>;

    /// Converts `json` and encodes it.
    fn compress_to_bytes(&self, json: &JsonValue) -> Result<Bytes> {
        let nbt = self.serialize(json)?;
        let encoded = to_vec::<Self::ByteOrder>(&nbt)?;
        debug!(
            root = ?nbt.tag_id(),
            encoded_len = encoded.len(),
            "compressed json document"
        );
        Ok(Bytes::from(encoded))
    }

    /// Converts `json`, encodes it and writes it to `writer`.
    fn compress<W: Write>(&self, json: &JsonValue, mut writer: W) -> Result<()> {
        let encoded = self.compress_to_bytes(json)?;
        writer.write_all(&encoded).map_err(Error::IO)
    }

    /// Reads one encoded document from `reader` and converts it back to JSON.
    fn decompress<R: Read>(&self, reader: R) -> Result<JsonValue> {
        let nbt = from_reader::<Self::ByteOrder, R>(reader)?;
        debug!(root = ?nbt.tag_id(), "decompressed json document");
        self.deserialize(&nbt)
    }
}

/// JSON to NBT strategy, writing big-endian (Java Edition) NBT by default.
pub struct JsonToNbtStrategy<O = BigEndian> {
    converter: Converter,
    _marker: PhantomData<O>,
}

impl JsonToNbtStrategy<BigEndian> {
    #[inline]
    pub const fn new() -> Self {
        Self::from_config(ConvertConfig::new())
    }

    #[inline]
    pub const fn with_config(config: ConvertConfig) -> Self {
        Self::from_config(config)
    }
}

impl<O> JsonToNbtStrategy<O> {
    /// Builds a strategy for any byte order, e.g.
    /// `JsonToNbtStrategy::<LittleEndian>::from_config(config)`.
    #[inline]
    pub const fn from_config(config: ConvertConfig) -> Self {
        Self {
            converter: Converter::new(config),
            _marker: PhantomData,
        }
    }

    #[inline]
    pub const fn config(&self) -> &ConvertConfig {
        self.converter.config()
    }
}

impl<O> Default for JsonToNbtStrategy<O> {
    fn default() -> Self {
        Self::from_config(ConvertConfig::default())
    }
}

impl<O> Clone for JsonToNbtStrategy<O> {
    fn clone(&self) -> Self {
        Self::from_config(*self.config())
    }
}

impl<O> fmt::Debug for JsonToNbtStrategy<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonToNbtStrategy")
            .field("config", self.config())
            .finish()
    }
}

impl<O: ByteOrder> JsonCompressionStrategy for JsonToNbtStrategy<O> {
    type ByteOrder = O;

    #[inline]
    fn serialize(&self, json: &JsonValue) -> Result<NbtValue> {
        self.converter.serialize(json)
    }

    #[inline]
    fn deserialize(&self, nbt: &NbtValue) -> Result<JsonValue> {
        Ok(crate::deserialize(nbt))
    }
}
