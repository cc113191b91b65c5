use std::error::Error;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use crate::clock::clock::Clock;
use crate::net::connect::request_id::RequestId;
use crate::net::connect::response::Response;
use crate::net::request_waiting_list::request_timeout_error::RequestTimeoutError;

pub type ResponseErrorType = Box<dyn Error + Send + Sync>;

pub type ResponseCallbackType = Arc<dyn ResponseCallback + 'static>;

pub trait ResponseCallback: Send + Sync {
    fn on_response(&self, response: Result<Response, ResponseErrorType>);
}

pub(crate) struct TimestampedCallback {
    callback: ResponseCallbackType,
    creation_time: SystemTime,
}

impl TimestampedCallback {
    pub(crate) fn new(callback: ResponseCallbackType, creation_time: SystemTime) -> Self {
        return TimestampedCallback {
            callback,
            creation_time,
        };
    }

    pub(crate) fn on_response(&self, response: Result<Response, ResponseErrorType>) {
        self.callback.on_response(response);
    }

    pub(crate) fn on_timeout_response(&self, request_id: &RequestId) {
        self.callback.on_response(Err(Box::new(RequestTimeoutError {
            request_id: *request_id
        })));
    }

    pub(crate) fn has_expired(&self, clock: &Arc<dyn Clock>, expiry_after: &Duration) -> bool {
        return clock.duration_since(self.creation_time).ge(expiry_after);
    }
}
