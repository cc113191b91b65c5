use bytes::{BufMut, Bytes, BytesMut};

use crate::net::request::encoding_error::EncodingError;

/// An ordered list of raw fields.
///
/// Encoded as a little-endian `u32` cardinality followed by every field as a
/// BER-128 length and the field bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tuple {
    fields: Vec<Bytes>,
}

impl Tuple {
    pub fn new() -> Self {
        return Tuple { fields: Vec::new() };
    }

    pub fn with_field<F: Into<Bytes>>(mut self, field: F) -> Self {
        self.fields.push(field.into());
        return self;
    }

    pub fn with_u32(self, value: u32) -> Self {
        return self.with_field(Bytes::copy_from_slice(&value.to_le_bytes()));
    }

    pub fn with_u64(self, value: u64) -> Self {
        return self.with_field(Bytes::copy_from_slice(&value.to_le_bytes()));
    }

    pub fn with_str(self, value: &str) -> Self {
        return self.with_field(Bytes::copy_from_slice(value.as_bytes()));
    }

    pub fn fields(&self) -> &[Bytes] {
        return &self.fields;
    }

    pub fn len(&self) -> usize {
        return self.fields.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.fields.is_empty();
    }

    pub(crate) fn encode(&self, buffer: &mut BytesMut) -> Result<(), EncodingError> {
        put_count(buffer, self.fields.len())?;
        for field in &self.fields {
            put_field(buffer, field)?;
        }
        return Ok(());
    }

    pub(crate) fn encode_non_empty(&self, buffer: &mut BytesMut) -> Result<(), EncodingError> {
        if self.is_empty() {
            return Err(EncodingError::EmptyTuple);
        }
        return self.encode(buffer);
    }
}

pub(crate) fn put_count(buffer: &mut BytesMut, count: usize) -> Result<(), EncodingError> {
    let count = u32::try_from(count).map_err(|_| EncodingError::TooManyFields { count })?;
    buffer.put_u32_le(count);
    return Ok(());
}

pub(crate) fn put_field(buffer: &mut BytesMut, field: &[u8]) -> Result<(), EncodingError> {
    let length = u32::try_from(field.len()).map_err(|_| EncodingError::FieldTooLarge { length: field.len() })?;
    put_varint32(buffer, length);
    buffer.put_slice(field);
    return Ok(());
}

/// Most significant group first, every byte but the last has the high bit set.
pub(crate) fn put_varint32(buffer: &mut BytesMut, value: u32) {
    if value >= (1 << 7) {
        if value >= (1 << 14) {
            if value >= (1 << 21) {
                if value >= (1 << 28) {
                    buffer.put_u8((value >> 28) as u8 | 0x80);
                }
                buffer.put_u8((value >> 21) as u8 | 0x80);
            }
            buffer.put_u8((value >> 14) as u8 | 0x80);
        }
        buffer.put_u8((value >> 7) as u8 | 0x80);
    }
    buffer.put_u8((value & 0x7f) as u8);
}
