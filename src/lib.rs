//! Compact re-encoding of JSON documents as NBT.
//!
//! The crate converts a generic JSON tree ([`JsonValue`]) into an NBT tree
//! ([`NbtValue`]) whose fixed width numeric tags and binary layout are smaller
//! than JSON text, encodes that tree, and converts it back.
//!
//! ```
//! use json_nbt::{BigEndian, JsonValue, NbtValue, from_slice, serialize, to_vec};
//!
//! let json = JsonValue::parse(r#"{"a": true, "b": 42, "c": 3.5, "d": [1, "x", null]}"#)?;
//! let nbt = serialize(&json)?;
//! assert_eq!(nbt.get("c"), Some(&NbtValue::Float(3.5)));
//!
//! let bytes = to_vec::<BigEndian>(&nbt)?;
//! assert_eq!(from_slice::<BigEndian>(&bytes)?, nbt);
//! # Ok::<(), json_nbt::Error>(())
//! ```

pub use zerocopy::BigEndian;
pub use zerocopy::LittleEndian;

mod config;
mod convert;
mod error;
mod index;
mod json;
mod map;
mod read;
mod revert;
#[cfg(feature = "serde")]
mod ser;
mod strategy;
mod tag;
mod util;
mod value;
mod write;

pub use config::*;
pub use convert::*;
pub use error::*;
pub use index::*;
pub use json::*;
pub use map::*;
pub use read::*;
pub use revert::*;
pub use strategy::*;
pub use tag::*;
pub use util::*;
pub use value::*;
pub use write::*;
