//! Binary NBT decoding.
//!
//! The reader accepts every tag defined by the format. Array tags have no
//! counterpart in [`NbtValue`] and decode as lists of the matching numeric
//! tag. Compounds found inside a list that have a single entry named `""` are
//! treated as mixed-list wrappers and replaced by their entry.

use std::{io::Read, marker::PhantomData};

use zerocopy::byteorder;

use crate::{ByteOrder, Error, MAX_DEPTH, NbtCompound, NbtValue, Result, TagID, cold_path};

/// Decodes a complete NBT document from `data`.
///
/// # Example
///
/// ```
/// use json_nbt::{BigEndian, NbtValue, from_slice};
///
/// let value = from_slice::<BigEndian>(&[0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x2A]).unwrap();
/// assert_eq!(value, NbtValue::Int(42));
/// ```
///
/// # Errors
///
/// - [`Error::EndOfFile`] if `data` is truncated
/// - [`Error::InvalidTagType`] for unknown tags, or `End` where a value is
///   required
/// - [`Error::TrailingData`] if bytes remain after the root tag
/// - [`Error::DepthLimitExceeded`] past 512 levels of nesting
pub fn from_slice<O: ByteOrder>(data: &[u8]) -> Result<NbtValue> {
    let mut cursor = data;
    let value = Reader::<O, _>::new(&mut cursor).read_root()?;
    if !cursor.is_empty() {
        cold_path();
        return Err(Error::TrailingData(cursor.len()));
    }
    Ok(value)
}

/// Decodes one NBT document from `reader`, leaving anything after it unread.
pub fn from_reader<O: ByteOrder, R: Read>(mut reader: R) -> Result<NbtValue> {
    Reader::<O, _>::new(&mut reader).read_root()
}

struct Reader<'r, O: ByteOrder, R: Read> {
    input: &'r mut R,
    depth: usize,
    _marker: PhantomData<O>,
}

impl<'r, O: ByteOrder, R: Read> Reader<'r, O, R> {
    fn new(input: &'r mut R) -> Self {
        Self {
            input,
            depth: 0,
            _marker: PhantomData,
        }
    }

    fn read_root(&mut self) -> Result<NbtValue> {
        let tag_id = self.read_tag_id()?;
        if tag_id == TagID::End {
            cold_path();
            return Err(Error::InvalidTagType(TagID::End as u8));
        }
        self.skip_string()?;
        self.read_payload(tag_id)
    }

    #[inline]
    fn read_bytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.input.read_exact(&mut buf)?;
        Ok(buf)
    }

    #[inline]
    fn read_tag_id(&mut self) -> Result<TagID> {
        TagID::try_from(self.read_bytes::<1>()?[0])
    }

    #[inline]
    fn read_len(&mut self) -> Result<usize> {
        Ok(byteorder::U32::<O>::from_bytes(self.read_bytes()?).get() as usize)
    }

    fn read_raw_string(&mut self) -> Result<Vec<u8>> {
        let len = byteorder::U16::<O>::from_bytes(self.read_bytes()?).get() as usize;
        let mut buf = vec![0u8; len];
        self.input.read_exact(&mut buf)?;
        Ok(buf)
    }

    fn read_string(&mut self) -> Result<String> {
        let raw = self.read_raw_string()?;
        Ok(simd_cesu8::mutf8::decode_lossy(&raw).into_owned())
    }

    fn skip_string(&mut self) -> Result<()> {
        self.read_raw_string().map(drop)
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= MAX_DEPTH {
            cold_path();
            return Err(Error::DepthLimitExceeded(MAX_DEPTH));
        }
        self.depth += 1;
        Ok(())
    }

    fn read_payload(&mut self, tag_id: TagID) -> Result<NbtValue> {
        Ok(match tag_id {
            TagID::End => {
                cold_path();
                return Err(Error::InvalidTagType(TagID::End as u8));
            }
            TagID::Byte => NbtValue::Byte(self.read_bytes::<1>()?[0] as i8),
            TagID::Short => NbtValue::Short(byteorder::I16::<O>::from_bytes(self.read_bytes()?).get()),
            TagID::Int => NbtValue::Int(byteorder::I32::<O>::from_bytes(self.read_bytes()?).get()),
            TagID::Long => NbtValue::Long(byteorder::I64::<O>::from_bytes(self.read_bytes()?).get()),
            TagID::Float => NbtValue::Float(byteorder::F32::<O>::from_bytes(self.read_bytes()?).get()),
            TagID::Double => {
                NbtValue::Double(byteorder::F64::<O>::from_bytes(self.read_bytes()?).get())
            }
            TagID::String => NbtValue::String(self.read_string()?),
            TagID::ByteArray => self.read_array(TagID::Byte)?,
            TagID::IntArray => self.read_array(TagID::Int)?,
            TagID::LongArray => self.read_array(TagID::Long)?,
            TagID::List => {
                self.enter()?;
                let list = self.read_list()?;
                self.depth -= 1;
                list
            }
            TagID::Compound => {
                self.enter()?;
                let compound = self.read_compound()?;
                self.depth -= 1;
                NbtValue::Compound(compound)
            }
        })
    }

    fn read_array(&mut self, element: TagID) -> Result<NbtValue> {
        let len = self.read_len()?;
        // lengths come from untrusted input, grow as elements actually arrive
        let mut items = Vec::with_capacity(len.min(4096));
        for _ in 0..len {
            items.push(self.read_payload(element)?);
        }
        Ok(NbtValue::List(items))
    }

    fn read_list(&mut self) -> Result<NbtValue> {
        let tag_id = self.read_tag_id()?;
        let len = self.read_len()?;
        if tag_id == TagID::End {
            if len != 0 {
                cold_path();
                return Err(Error::InvalidTagType(TagID::End as u8));
            }
            return Ok(NbtValue::List(Vec::new()));
        }
        let mut items = Vec::with_capacity(len.min(4096));
        for _ in 0..len {
            let item = self.read_payload(tag_id)?;
            items.push(match item {
                NbtValue::Compound(compound) => unwrap_element(compound),
                other => other,
            });
        }
        Ok(NbtValue::List(items))
    }

    fn read_compound(&mut self) -> Result<NbtCompound> {
        let mut compound = NbtCompound::new();
        loop {
            let tag_id = self.read_tag_id()?;
            if tag_id == TagID::End {
                return Ok(compound);
            }
            let key = self.read_string()?;
            let value = self.read_payload(tag_id)?;
            compound.insert(key, value);
        }
    }
}

fn unwrap_element(mut compound: NbtCompound) -> NbtValue {
    if crate::write::is_wrapper(&compound) {
        if let Some(inner) = compound.remove("") {
            return inner;
        }
    }
    NbtValue::Compound(compound)
}
