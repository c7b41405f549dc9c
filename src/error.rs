//! Error types for conversion, encoding and decoding.
//!
//! This module contains the [`Error`] type which represents every failure the
//! crate can report, from a malformed number in a JSON document to a
//! truncated NBT payload.
//!
//! # Example
//!
//! ```
//! use json_nbt::{Error, JsonNumber, classify};
//!
//! match classify(&JsonNumber::lazy("99999999999")) {
//!     Err(Error::MalformedNumber { text, target }) => {
//!         assert_eq!(text, "99999999999");
//!         assert_eq!(target, "int");
//!     }
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```

use std::fmt::{self, Display};

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors that can occur when converting,
/// reading or writing data.
///
/// # Variants
///
/// - [`IO`](Error::IO) - An I/O error occurred during reading or writing
/// - [`EndOfFile`](Error::EndOfFile) - The input ended unexpectedly
/// - [`MalformedNumber`](Error::MalformedNumber) - A lazily parsed number does
///   not fit the width picked for it
/// - [`Unconvertible`](Error::Unconvertible) - The root value produced no tag
#[derive(Debug)]
pub enum Error {
    Message(String),

    /// An I/O error occurred.
    ///
    /// This typically happens when writing to a [`std::io::Write`] implementation
    /// or reading from a [`std::io::Read`] implementation that encounters an error.
    IO(std::io::Error),

    /// The input ended unexpectedly.
    EndOfFile,

    /// Extra bytes remain after the root tag.
    TrailingData(usize),

    /// An invalid NBT tag type was encountered.
    ///
    /// NBT defines tag types 0-12. `End` (0) is also rejected where a value is
    /// required, such as the root.
    InvalidTagType(u8),

    ListTooLong(usize),

    /// Encoded string or compound key exceeds the `u16` length prefix.
    StringTooLong(usize),

    /// The decimal text of a lazily parsed number cannot be represented in the
    /// width chosen for it.
    MalformedNumber { text: String, target: &'static str },

    /// The root value declined to produce a tag.
    Unconvertible { kind: &'static str },

    /// Nesting exceeded the configured or wire limit.
    DepthLimitExceeded(usize),

    /// NaN or infinity cannot be written as a JSON number.
    NonFiniteNumber,
}

#[cfg(feature = "serde")]
impl serde::ser::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Message(message) => formatter.write_str(message),
            Error::IO(error) => formatter.write_str(&error.to_string()),
            Error::EndOfFile => formatter.write_str("unexpected end of input"),
            Error::TrailingData(remaining_bytes) => formatter.write_str(&format!(
                "trailing data after end of input: {remaining_bytes} bytes remaining"
            )),
            Error::InvalidTagType(tag) => {
                formatter.write_str(&format!("invalid NBT tag type: {tag:#04x}"))
            }
            Error::ListTooLong(len) => formatter.write_str(&format!("list length too long: {len}")),
            Error::StringTooLong(len) => {
                formatter.write_str(&format!("string length too long: {len} bytes"))
            }
            Error::MalformedNumber { text, target } => {
                formatter.write_str(&format!("cannot parse {text:?} as {target}"))
            }
            Error::Unconvertible { kind } => {
                formatter.write_str(&format!("{kind} value produced no NBT tag"))
            }
            Error::DepthLimitExceeded(limit) => {
                formatter.write_str(&format!("nesting depth exceeds limit of {limit}"))
            }
            Error::NonFiniteNumber => formatter.write_str("non-finite number in JSON output"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IO(error) => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::UnexpectedEof {
            Error::EndOfFile
        } else {
            Error::IO(error)
        }
    }
}
