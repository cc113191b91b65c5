use std::error::Error;
use std::fmt::{Display, Formatter};

/// A request payload that can not be represented on the wire.
#[derive(Debug, Eq, PartialEq)]
pub enum EncodingError {
    FieldTooLarge { length: usize },
    TooManyFields { count: usize },
    BodyTooLarge { length: usize },
    EmptyTuple,
    EmptyProcedureName,
}

impl Display for EncodingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EncodingError::FieldTooLarge { length } =>
                write!(f, "can not encode field of {} bytes, the limit is {} bytes", length, u32::MAX),
            EncodingError::TooManyFields { count } =>
                write!(f, "can not encode {} fields, the limit is {}", count, u32::MAX),
            EncodingError::BodyTooLarge { length } =>
                write!(f, "can not encode body of {} bytes, the limit is {} bytes", length, u32::MAX),
            EncodingError::EmptyTuple =>
                write!(f, "can not encode an empty tuple"),
            EncodingError::EmptyProcedureName =>
                write!(f, "can not encode a call without a procedure name"),
        }
    }
}

impl Error for EncodingError {}

#[cfg(test)]
mod tests {
    use crate::net::request::encoding_error::EncodingError;

    #[test]
    fn display_field_too_large() {
        let error = EncodingError::FieldTooLarge { length: 10 };
        assert_eq!("can not encode field of 10 bytes, the limit is 4294967295 bytes", error.to_string());
    }

    #[test]
    fn display_empty_procedure_name() {
        assert_eq!("can not encode a call without a procedure name", EncodingError::EmptyProcedureName.to_string());
    }
}
