//! Binary NBT encoding.
//!
//! Documents are written as an unnamed root tag: tag id, a zero length name,
//! then the payload. Strings and keys use Modified UTF-8 with a `u16` length
//! prefix. Multi-byte numbers use the byte order `O`.
//!
//! NBT lists carry a single element tag. A list whose elements differ is
//! written as a list of compounds, with every element that is not already a
//! plain compound wrapped as `{"": element}`. The reader undoes the wrapping.
//!
//! Each wrapper is a container of its own on the wire, so the writer counts it
//! against [`MAX_DEPTH`] just as the reader will.

use std::io::Write;

use zerocopy::byteorder;

use crate::{ByteOrder, Error, MAX_DEPTH, NbtCompound, NbtValue, Result, TagID, cold_path};

/// Encodes `value` as a complete NBT document.
///
/// # Example
///
/// ```
/// use json_nbt::{BigEndian, NbtValue, to_vec};
///
/// let bytes = to_vec::<BigEndian>(&NbtValue::Short(0x0102)).unwrap();
/// assert_eq!(bytes, [0x02, 0x00, 0x00, 0x01, 0x02]);
/// ```
///
/// # Errors
///
/// - [`Error::StringTooLong`] if a string or key encodes to more than
///   `u16::MAX` bytes
/// - [`Error::ListTooLong`] if a list has more than `u32::MAX` elements
/// - [`Error::DepthLimitExceeded`] if the encoded nesting, mixed-list
///   wrappers included, goes past 512 levels
pub fn to_vec<O: ByteOrder>(value: &NbtValue) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(128);
    out.push(value.tag_id() as u8);
    out.extend_from_slice(&[0, 0]);
    write_payload::<O>(value, 0, &mut out)?;
    Ok(out)
}

/// Encodes `value` and writes the document to `writer`.
pub fn to_writer<O: ByteOrder, W: Write>(mut writer: W, value: &NbtValue) -> Result<()> {
    let bytes = to_vec::<O>(value)?;
    writer.write_all(&bytes).map_err(Error::IO)
}

/// `depth` counts the containers enclosing `value`.
fn write_payload<O: ByteOrder>(value: &NbtValue, depth: usize, out: &mut Vec<u8>) -> Result<()> {
    match value {
        NbtValue::Byte(v) => out.push(*v as u8),
        NbtValue::Short(v) => out.extend_from_slice(&byteorder::I16::<O>::new(*v).to_bytes()),
        NbtValue::Int(v) => out.extend_from_slice(&byteorder::I32::<O>::new(*v).to_bytes()),
        NbtValue::Long(v) => out.extend_from_slice(&byteorder::I64::<O>::new(*v).to_bytes()),
        NbtValue::Float(v) => out.extend_from_slice(&byteorder::F32::<O>::new(*v).to_bytes()),
        NbtValue::Double(v) => out.extend_from_slice(&byteorder::F64::<O>::new(*v).to_bytes()),
        NbtValue::String(v) => write_string::<O>(v, out)?,
        NbtValue::List(items) => write_list::<O>(items, enter(depth)?, out)?,
        NbtValue::Compound(compound) => write_compound::<O>(compound, enter(depth)?, out)?,
    }
    Ok(())
}

#[inline]
fn enter(depth: usize) -> Result<usize> {
    if depth >= MAX_DEPTH {
        cold_path();
        return Err(Error::DepthLimitExceeded(MAX_DEPTH));
    }
    Ok(depth + 1)
}

#[inline]
fn write_string<O: ByteOrder>(value: &str, out: &mut Vec<u8>) -> Result<()> {
    let encoded = simd_cesu8::mutf8::encode(value);
    if encoded.len() > u16::MAX as usize {
        cold_path();
        return Err(Error::StringTooLong(encoded.len()));
    }
    out.extend_from_slice(&byteorder::U16::<O>::new(encoded.len() as u16).to_bytes());
    out.extend_from_slice(&encoded);
    Ok(())
}

fn write_compound<O: ByteOrder>(
    compound: &NbtCompound,
    depth: usize,
    out: &mut Vec<u8>,
) -> Result<()> {
    for (key, value) in compound {
        out.push(value.tag_id() as u8);
        write_string::<O>(key, out)?;
        write_payload::<O>(value, depth, out)?;
    }
    out.push(TagID::End as u8);
    Ok(())
}

/// A compound that the reader would mistake for a wrapper.
#[inline]
pub(crate) fn is_wrapper(compound: &NbtCompound) -> bool {
    compound.len() == 1 && compound.contains_key("")
}

/// Element tag shared by every item, `None` when the list needs wrapping.
fn uniform_tag(items: &[NbtValue]) -> Option<TagID> {
    let first = items.first().map_or(TagID::End, NbtValue::tag_id);
    let uniform = items.iter().all(|item| match item {
        NbtValue::Compound(compound) => first == TagID::Compound && !is_wrapper(compound),
        _ => item.tag_id() == first,
    });
    uniform.then_some(first)
}

fn write_list<O: ByteOrder>(items: &[NbtValue], depth: usize, out: &mut Vec<u8>) -> Result<()> {
    if items.len() > u32::MAX as usize {
        cold_path();
        return Err(Error::ListTooLong(items.len()));
    }
    let len = byteorder::U32::<O>::new(items.len() as u32).to_bytes();
    match uniform_tag(items) {
        Some(tag_id) => {
            out.push(tag_id as u8);
            out.extend_from_slice(&len);
            for item in items {
                write_payload::<O>(item, depth, out)?;
            }
        }
        None => {
            out.push(TagID::Compound as u8);
            out.extend_from_slice(&len);
            for item in items {
                match item {
                    NbtValue::Compound(compound) if !is_wrapper(compound) => {
                        write_compound::<O>(compound, enter(depth)?, out)?;
                    }
                    _ => {
                        // { "": item }
                        let depth = enter(depth)?;
                        out.push(item.tag_id() as u8);
                        out.extend_from_slice(&[0, 0]);
                        write_payload::<O>(item, depth, out)?;
                        out.push(TagID::End as u8);
                    }
                }
            }
        }
    }
    Ok(())
}
