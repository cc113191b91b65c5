use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::net::connect::request_id::RequestId;
use crate::net::request::encoding_error::EncodingError;
use crate::net::request_waiting_list::duplicate_request_id_error::DuplicateRequestIdError;

pub type TransportError = Box<dyn Error + Send + Sync + 'static>;

#[derive(Debug)]
pub enum DispatchError {
    Encoding(EncodingError),
    DuplicateRequestId(DuplicateRequestIdError),
    Transport(RequestId, TransportError),
}

impl Display for DispatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchError::Encoding(err) =>
                write!(f, "can not dispatch request, {}", err),
            DispatchError::DuplicateRequestId(err) =>
                write!(f, "can not dispatch request, {}", err),
            DispatchError::Transport(request_id, err) =>
                write!(f, "can not send request {}, {}", request_id, err),
        }
    }
}

impl Error for DispatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            DispatchError::Encoding(ref err) => Some(err),
            DispatchError::DuplicateRequestId(ref err) => Some(err),
            DispatchError::Transport(_, ref err) => Some(err.as_ref()),
        }
    }
}

impl From<EncodingError> for DispatchError {
    fn from(err: EncodingError) -> Self {
        return DispatchError::Encoding(err);
    }
}

impl From<DuplicateRequestIdError> for DispatchError {
    fn from(err: DuplicateRequestIdError) -> Self {
        return DispatchError::DuplicateRequestId(err);
    }
}

/// Handed to the callback of a request whose packet could not be written.
#[derive(Debug)]
pub struct SendFailedError {
    pub request_id: RequestId,
    pub message: String,
}

impl Display for SendFailedError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "Request {} could not be sent: {}", self.request_id, self.message)
    }
}

impl Error for SendFailedError {}
