use std::sync::{Arc, Weak};
use std::thread;
use std::time::Duration;

use dashmap::DashMap;
use tracing::warn;

use crate::clock::clock::Clock;
use crate::net::connect::request_id::RequestId;
use crate::net::request_waiting_list::request_waiting_list_config::RequestWaitingListConfig;
use crate::net::request_waiting_list::response_callback::TimestampedCallback;

/// Fails pending requests that outlived `request_expiry_after`. The thread
/// exits once the waiting list that owns the pending requests is dropped.
pub(crate) struct ExpiredCallbackRemover {
    pending_requests: Weak<DashMap<RequestId, TimestampedCallback>>,
    expiry_after: Duration,
    clock: Arc<dyn Clock>,
}

impl ExpiredCallbackRemover {
    pub(crate) fn start(pending_requests: &Arc<DashMap<RequestId, TimestampedCallback>>,
                        clock: Arc<dyn Clock>,
                        config: RequestWaitingListConfig) {

        let remover = ExpiredCallbackRemover {
            pending_requests: Arc::downgrade(pending_requests),
            expiry_after: config.get_request_expiry_after(),
            clock,
        };
        let pause_request_expiry_checker = config.get_pause_request_expiry_checker();

        thread::spawn(move || {
            while remover.remove() {
                thread::sleep(pause_request_expiry_checker);
            }
        });
    }

    fn remove(&self) -> bool {
        let pending_requests = match self.pending_requests.upgrade() {
            Some(pending_requests) => pending_requests,
            None => return false,
        };

        let expired: Vec<RequestId> = pending_requests.iter()
            .filter(|entry| entry.value().has_expired(&self.clock, &self.expiry_after))
            .map(|entry| *entry.key())
            .collect();

        for request_id in expired {
            let removed = pending_requests.remove_if(&request_id, |_, timestamped_callback| {
                return timestamped_callback.has_expired(&self.clock, &self.expiry_after);
            });
            if let Some((request_id, timestamped_callback)) = removed {
                warn!(request_id = request_id, "request timed out");
                timestamped_callback.on_timeout_response(&request_id);
            }
        }
        return true;
    }
}
