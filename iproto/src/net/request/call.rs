use bytes::{BufMut, BytesMut};

use iproto_macro::add_request_id;

use crate::net::connect::request_id::UNASSIGNED_REQUEST_ID;
use crate::net::request::encoding_error::EncodingError;
use crate::net::request::flags::Flags;
use crate::net::request::request::Request;
use crate::net::request::request_type::RequestType;
use crate::net::request::tuple::{put_field, Tuple};

/// Calls a stored procedure. Body: `flags u32`, procedure name as a field,
/// arguments tuple.
#[add_request_id]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    flags: Flags,
    procedure: String,
    arguments: Tuple,
}

impl Call {
    pub fn new(flags: Flags, procedure: &str, arguments: Tuple) -> Self {
        return Call {
            flags,
            procedure: procedure.to_string(),
            arguments,
            request_id: UNASSIGNED_REQUEST_ID,
        };
    }

    pub fn get_procedure(&self) -> &str {
        return &self.procedure;
    }
}

impl Request for Call {
    fn request_type(&self) -> RequestType {
        return RequestType::Call;
    }

    fn encode_body(&self, buffer: &mut BytesMut) -> Result<(), EncodingError> {
        if self.procedure.is_empty() {
            return Err(EncodingError::EmptyProcedureName);
        }
        buffer.put_u32_le(self.flags);
        put_field(buffer, self.procedure.as_bytes())?;
        return self.arguments.encode(buffer);
    }
}
