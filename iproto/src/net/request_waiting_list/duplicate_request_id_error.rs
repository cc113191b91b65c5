use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::net::connect::request_id::RequestId;

/// Another request with the same id is still waiting for its response.
#[derive(Debug, Eq, PartialEq)]
pub struct DuplicateRequestIdError {
    pub request_id: RequestId,
}

impl Display for DuplicateRequestIdError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "Request id {} is already in flight", self.request_id)
    }
}

impl Error for DuplicateRequestIdError {}
