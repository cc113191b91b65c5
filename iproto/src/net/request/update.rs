use bytes::{BufMut, Bytes, BytesMut};

use iproto_macro::add_request_id;

use crate::net::connect::request_id::UNASSIGNED_REQUEST_ID;
use crate::net::request::encoding_error::EncodingError;
use crate::net::request::flags::Flags;
use crate::net::request::request::Request;
use crate::net::request::request_type::RequestType;
use crate::net::request::tuple::{put_count, put_field, Tuple};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOperator {
    Assign,
    Add,
    And,
    Xor,
    Or,
    Splice,
    Delete,
    Insert,
}

impl UpdateOperator {
    pub fn code(&self) -> u8 {
        return match self {
            UpdateOperator::Assign => 0,
            UpdateOperator::Add => 1,
            UpdateOperator::And => 2,
            UpdateOperator::Xor => 3,
            UpdateOperator::Or => 4,
            UpdateOperator::Splice => 5,
            UpdateOperator::Delete => 6,
            UpdateOperator::Insert => 7,
        };
    }
}

/// Encoded as `field_number u32`, `operator u8`, argument field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOperation {
    field_number: u32,
    operator: UpdateOperator,
    argument: Bytes,
}

impl UpdateOperation {
    pub fn new<A: Into<Bytes>>(field_number: u32, operator: UpdateOperator, argument: A) -> Self {
        return UpdateOperation {
            field_number,
            operator,
            argument: argument.into(),
        };
    }

    fn encode(&self, buffer: &mut BytesMut) -> Result<(), EncodingError> {
        buffer.put_u32_le(self.field_number);
        buffer.put_u8(self.operator.code());
        return put_field(buffer, &self.argument);
    }
}

/// Body: `space u32`, `flags u32`, key tuple, operation count `u32`,
/// operations.
#[add_request_id]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    space: u32,
    flags: Flags,
    key: Tuple,
    operations: Vec<UpdateOperation>,
}

impl Update {
    pub fn new(space: u32, flags: Flags, key: Tuple) -> Self {
        return Update {
            space,
            flags,
            key,
            operations: Vec::new(),
            request_id: UNASSIGNED_REQUEST_ID,
        };
    }

    pub fn with_operation(mut self, operation: UpdateOperation) -> Self {
        self.operations.push(operation);
        return self;
    }
}

impl Request for Update {
    fn request_type(&self) -> RequestType {
        return RequestType::Update;
    }

    fn encode_body(&self, buffer: &mut BytesMut) -> Result<(), EncodingError> {
        buffer.put_u32_le(self.space);
        buffer.put_u32_le(self.flags);
        self.key.encode_non_empty(buffer)?;
        put_count(buffer, self.operations.len())?;
        for operation in &self.operations {
            operation.encode(buffer)?;
        }
        return Ok(());
    }
}
