use bytes::BytesMut;

use iproto_macro::add_request_id;

use crate::net::connect::request_id::UNASSIGNED_REQUEST_ID;
use crate::net::request::encoding_error::EncodingError;
use crate::net::request::request::Request;
use crate::net::request::request_type::RequestType;

#[add_request_id]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ping {}

impl Ping {
    pub fn new() -> Self {
        return Ping { request_id: UNASSIGNED_REQUEST_ID };
    }
}

impl Request for Ping {
    fn request_type(&self) -> RequestType {
        return RequestType::Ping;
    }

    fn encode_body(&self, _: &mut BytesMut) -> Result<(), EncodingError> {
        return Ok(());
    }
}
