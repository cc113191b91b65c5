use bytes::{BufMut, BytesMut};

use iproto_macro::add_request_id;

use crate::net::connect::request_id::UNASSIGNED_REQUEST_ID;
use crate::net::request::encoding_error::EncodingError;
use crate::net::request::request::Request;
use crate::net::request::request_type::RequestType;
use crate::net::request::tuple::{put_count, Tuple};

/// Body: `space`, `index`, `offset`, `limit`, key count (all `u32`), then
/// every key as a tuple.
#[add_request_id]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    space: u32,
    index: u32,
    offset: u32,
    limit: u32,
    keys: Vec<Tuple>,
}

impl Select {
    pub fn new(space: u32, index: u32) -> Self {
        return Select {
            space,
            index,
            offset: 0,
            limit: u32::MAX,
            keys: Vec::new(),
            request_id: UNASSIGNED_REQUEST_ID,
        };
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        return self;
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        return self;
    }

    pub fn with_key(mut self, key: Tuple) -> Self {
        self.keys.push(key);
        return self;
    }

    pub fn get_keys(&self) -> &[Tuple] {
        return &self.keys;
    }
}

impl Request for Select {
    fn request_type(&self) -> RequestType {
        return RequestType::Select;
    }

    fn encode_body(&self, buffer: &mut BytesMut) -> Result<(), EncodingError> {
        buffer.put_u32_le(self.space);
        buffer.put_u32_le(self.index);
        buffer.put_u32_le(self.offset);
        buffer.put_u32_le(self.limit);
        put_count(buffer, self.keys.len())?;
        for key in &self.keys {
            key.encode(buffer)?;
        }
        return Ok(());
    }
}
