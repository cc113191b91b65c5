use std::error::Error;
use std::fmt::{Display, Formatter};

use bytes::{Buf, BufMut, BytesMut};

use crate::net::connect::request_id::RequestId;
use crate::net::request::request_type::RequestType;

pub const HEADER_SIZE: usize = 12;

/// Fixed header in front of every request and response packet, three
/// little-endian `u32` values: request type, body length and request id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketHeader {
    request_type: u32,
    body_length: u32,
    request_id: RequestId,
}

#[derive(Debug, Eq, PartialEq)]
pub enum DecodeError {
    Incomplete { available: usize },
    BodyLengthMismatch { expected: u32, actual: usize },
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::Incomplete { available } =>
                write!(f, "can not decode packet header, needed {} bytes but {} are available", HEADER_SIZE, available),
            DecodeError::BodyLengthMismatch { expected, actual } =>
                write!(f, "packet header announces a body of {} bytes but the body has {} bytes", expected, actual),
        }
    }
}

impl Error for DecodeError {}

impl PacketHeader {
    pub fn new(request_type: RequestType, body_length: u32, request_id: RequestId) -> Self {
        return PacketHeader {
            request_type: request_type.code(),
            body_length,
            request_id,
        };
    }

    pub fn decode(buffer: &[u8]) -> Result<PacketHeader, DecodeError> {
        if buffer.len() < HEADER_SIZE {
            return Err(DecodeError::Incomplete { available: buffer.len() });
        }
        let mut header = &buffer[..HEADER_SIZE];
        return Ok(PacketHeader {
            request_type: header.get_u32_le(),
            body_length: header.get_u32_le(),
            request_id: header.get_u32_le(),
        });
    }

    pub fn encode(&self, buffer: &mut BytesMut) {
        buffer.put_u32_le(self.request_type);
        buffer.put_u32_le(self.body_length);
        buffer.put_u32_le(self.request_id);
    }

    pub fn get_request_type_code(&self) -> u32 {
        return self.request_type;
    }

    pub fn get_request_type(&self) -> Option<RequestType> {
        return RequestType::from_code(self.request_type);
    }

    pub fn get_body_length(&self) -> u32 {
        return self.body_length;
    }

    pub fn get_request_id(&self) -> RequestId {
        return self.request_id;
    }
}
