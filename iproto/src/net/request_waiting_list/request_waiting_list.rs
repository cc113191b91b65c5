use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::{debug, warn};

use crate::clock::clock::Clock;
use crate::net::connect::request_id::RequestId;
use crate::net::connect::response::Response;
use crate::net::request_waiting_list::duplicate_request_id_error::DuplicateRequestIdError;
use crate::net::request_waiting_list::expired_callback_remover::ExpiredCallbackRemover;
use crate::net::request_waiting_list::request_waiting_list_config::RequestWaitingListConfig;
use crate::net::request_waiting_list::response_callback::{ResponseCallbackType, ResponseErrorType, TimestampedCallback};

/// Callbacks of in-flight requests, keyed by request id.
///
/// At most one request per id can be pending. The id of a request is free
/// again once its response was handled, it timed out, or it was removed.
pub struct RequestWaitingList {
    pending_requests: Arc<DashMap<RequestId, TimestampedCallback>>,
    clock: Arc<dyn Clock>,
}

impl RequestWaitingList {
    pub fn new(clock: Arc<dyn Clock>, config: RequestWaitingListConfig) -> Self {
        return Self::new_with_capacity(0, clock, config);
    }

    pub fn new_with_capacity(
        capacity: usize,
        clock: Arc<dyn Clock>,
        config: RequestWaitingListConfig) -> Self {
        let pending_requests = Arc::new(DashMap::with_capacity(capacity));
        let request_waiting_list = RequestWaitingList { pending_requests, clock };

        request_waiting_list.spin_expired_callbacks_remover(config);
        return request_waiting_list;
    }

    pub fn add(&self, request_id: RequestId, callback: ResponseCallbackType) -> Result<(), DuplicateRequestIdError> {
        return match self.pending_requests.entry(request_id) {
            Entry::Occupied(_) => {
                warn!(request_id = request_id, "request id is already in flight");
                Err(DuplicateRequestIdError { request_id })
            }
            Entry::Vacant(entry) => {
                entry.insert(TimestampedCallback::new(callback, self.clock.now()));
                Ok(())
            }
        };
    }

    /// Hands the response to the callback registered for `request_id`.
    /// Returns false if nothing was waiting for it.
    pub fn handle_response(&self, request_id: RequestId, response: Result<Response, ResponseErrorType>) -> bool {
        let key_value_existence = self.pending_requests.remove(&request_id);
        if let Some((_, timestamped_callback)) = key_value_existence {
            debug!(request_id = request_id, "routing response");
            timestamped_callback.on_response(response);
            return true;
        }
        warn!(request_id = request_id, "no request is waiting for the response");
        return false;
    }

    /// Abandons a pending request without notifying its callback.
    pub fn remove(&self, request_id: RequestId) -> bool {
        return self.pending_requests.remove(&request_id).is_some();
    }

    pub fn is_pending(&self, request_id: RequestId) -> bool {
        return self.pending_requests.contains_key(&request_id);
    }

    pub fn pending_count(&self) -> usize {
        return self.pending_requests.len();
    }

    fn spin_expired_callbacks_remover(&self, config: RequestWaitingListConfig) {
        ExpiredCallbackRemover::start(
            &self.pending_requests,
            self.clock.clone(),
            config,
        );
    }
}
