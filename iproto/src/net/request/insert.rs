use bytes::{BufMut, BytesMut};

use iproto_macro::add_request_id;

use crate::net::connect::request_id::UNASSIGNED_REQUEST_ID;
use crate::net::request::encoding_error::EncodingError;
use crate::net::request::flags::Flags;
use crate::net::request::request::Request;
use crate::net::request::request_type::RequestType;
use crate::net::request::tuple::Tuple;

/// Body: `space u32`, `flags u32`, tuple.
#[add_request_id]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insert {
    space: u32,
    flags: Flags,
    tuple: Tuple,
}

impl Insert {
    pub fn new(space: u32, flags: Flags, tuple: Tuple) -> Self {
        return Insert {
            space,
            flags,
            tuple,
            request_id: UNASSIGNED_REQUEST_ID,
        };
    }

    pub fn get_tuple(&self) -> &Tuple {
        return &self.tuple;
    }
}

impl Request for Insert {
    fn request_type(&self) -> RequestType {
        return RequestType::Insert;
    }

    fn encode_body(&self, buffer: &mut BytesMut) -> Result<(), EncodingError> {
        buffer.put_u32_le(self.space);
        buffer.put_u32_le(self.flags);
        return self.tuple.encode_non_empty(buffer);
    }
}
