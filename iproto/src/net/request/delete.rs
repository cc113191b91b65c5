use bytes::{BufMut, BytesMut};

use iproto_macro::add_request_id;

use crate::net::connect::request_id::UNASSIGNED_REQUEST_ID;
use crate::net::request::encoding_error::EncodingError;
use crate::net::request::flags::Flags;
use crate::net::request::request::Request;
use crate::net::request::request_type::RequestType;
use crate::net::request::tuple::Tuple;

#[add_request_id]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delete {
    space: u32,
    flags: Flags,
    key: Tuple,
}

impl Delete {
    pub fn new(space: u32, flags: Flags, key: Tuple) -> Self {
        return Delete {
            space,
            flags,
            key,
            request_id: UNASSIGNED_REQUEST_ID,
        };
    }
}

impl Request for Delete {
    fn request_type(&self) -> RequestType {
        return RequestType::Delete;
    }

    fn encode_body(&self, buffer: &mut BytesMut) -> Result<(), EncodingError> {
        buffer.put_u32_le(self.space);
        buffer.put_u32_le(self.flags);
        return self.key.encode_non_empty(buffer);
    }
}
