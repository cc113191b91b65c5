use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::net::connect::request_id::RequestId;

#[derive(Debug)]
pub struct RequestTimeoutError {
    pub request_id: RequestId,
}

impl Display for RequestTimeoutError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "Request timeout {}", self.request_id)
    }
}

impl Error for RequestTimeoutError {}

#[cfg(test)]
mod tests {
    use crate::net::request_waiting_list::request_timeout_error::RequestTimeoutError;

    #[test]
    fn debug_shows_request_id_field() {
        let error = RequestTimeoutError { request_id: 7 };

        assert_eq!("RequestTimeoutError { request_id: 7 }", format!("{:?}", error));
        assert_eq!("Request timeout 7", error.to_string());
    }
}
