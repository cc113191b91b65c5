use std::sync::atomic::{AtomicU32, Ordering};

use crate::net::connect::request_id::RequestId;

/// Hands out request ids that are unique across all concurrent callers.
///
/// One allocator is shared by everything that creates requests for the same
/// connection. Ids increase by one per call and wrap to 0 after `u32::MAX`;
/// the allocator does not detect reuse after a wrap.
#[derive(Debug)]
pub struct RequestIdAllocator {
    next_request_id: AtomicU32,
}

impl RequestIdAllocator {
    pub fn new() -> Self {
        return Self::starting_at(0);
    }

    pub fn starting_at(request_id: RequestId) -> Self {
        return RequestIdAllocator {
            next_request_id: AtomicU32::new(request_id)
        };
    }

    /// Returns the current value and advances the allocator by one in a single
    /// atomic step.
    pub fn next(&self) -> RequestId {
        return self.next_request_id.fetch_add(1, Ordering::Relaxed);
    }

    /// Value the next call to `next` would return, without advancing.
    pub fn peek(&self) -> RequestId {
        return self.next_request_id.load(Ordering::Relaxed);
    }
}

impl Default for RequestIdAllocator {
    fn default() -> Self {
        return Self::new();
    }
}
