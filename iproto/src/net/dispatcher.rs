use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, warn};

use crate::net::connect::error::{DispatchError, SendFailedError};
use crate::net::connect::packet_header::DecodeError;
use crate::net::connect::request_id::RequestId;
use crate::net::connect::request_id_allocator::RequestIdAllocator;
use crate::net::connect::response::Response;
use crate::net::connect::transport::Transport;
use crate::net::request::request::Request;
use crate::net::request_waiting_list::duplicate_request_id_error::DuplicateRequestIdError;
use crate::net::request_waiting_list::request_waiting_list::RequestWaitingList;
use crate::net::request_waiting_list::response_callback::ResponseCallbackType;

/// Ids drawn by `dispatch` before giving up when every drawn id is still
/// pending.
pub const MAX_REQUEST_ID_DRAWS: usize = 16;

/// Sends requests over one connection and routes responses back to the
/// callbacks of the requests they answer.
pub struct Dispatcher {
    allocator: Arc<RequestIdAllocator>,
    request_waiting_list: RequestWaitingList,
    transport: Arc<dyn Transport>,
}

impl Dispatcher {
    pub fn new(allocator: Arc<RequestIdAllocator>,
               request_waiting_list: RequestWaitingList,
               transport: Arc<dyn Transport>) -> Self {
        return Dispatcher {
            allocator,
            request_waiting_list,
            transport,
        };
    }

    /// Gives `request` a fresh id and sends it. Ids that are still pending,
    /// from a replayed request or after the allocator wrapped, are skipped.
    pub async fn dispatch<R: Request>(&self, request: &mut R, callback: ResponseCallbackType) -> Result<RequestId, DispatchError> {
        let request_id = self.register_with_next_request_id(request, callback)?;
        let packet = match request.serialize() {
            Ok(packet) => packet,
            Err(err) => {
                self.request_waiting_list.remove(request_id);
                return Err(err.into());
            }
        };
        return self.write(request, request_id, packet).await;
    }

    /// Sends `request` with the id it already carries, for replaying a request
    /// whose id is dictated elsewhere.
    pub async fn redispatch<R: Request>(&self, request: &R, callback: ResponseCallbackType) -> Result<RequestId, DispatchError> {
        let request_id = request.get_request_id();
        let packet = request.serialize()?;
        self.request_waiting_list.add(request_id, callback)?;
        return self.write(request, request_id, packet).await;
    }

    /// Routes a complete response packet. Returns false if no request was
    /// waiting for it.
    pub fn register_response(&self, packet: Bytes) -> Result<bool, DecodeError> {
        let response = Response::decode(packet)?;
        let request_id = response.get_request_id();
        return Ok(self.request_waiting_list.handle_response(request_id, Ok(response)));
    }

    /// Abandons a request; a late response for it is ignored.
    pub fn abandon(&self, request_id: RequestId) -> bool {
        return self.request_waiting_list.remove(request_id);
    }

    pub fn pending_count(&self) -> usize {
        return self.request_waiting_list.pending_count();
    }

    fn register_with_next_request_id<R: Request>(&self, request: &mut R, callback: ResponseCallbackType) -> Result<RequestId, DuplicateRequestIdError> {
        let mut draws = 0;
        loop {
            let request_id = request.assign_next_request_id(&self.allocator);
            draws += 1;
            match self.request_waiting_list.add(request_id, callback.clone()) {
                Ok(()) => return Ok(request_id),
                Err(err) if draws >= MAX_REQUEST_ID_DRAWS => return Err(err),
                Err(_) => debug!(request_id = request_id, "skipping request id that is still pending"),
            }
        }
    }

    async fn write<R: Request>(&self, request: &R, request_id: RequestId, packet: Bytes) -> Result<RequestId, DispatchError> {
        debug!(request_id = request_id, request_type = ?request.request_type(), bytes = packet.len(), "dispatching request");
        if let Err(err) = self.transport.write(packet).await {
            warn!(request_id = request_id, error = %err, "failed to send request");
            let _ = self.request_waiting_list.handle_response(request_id, Err(Box::new(SendFailedError {
                request_id,
                message: err.to_string(),
            })));
            return Err(DispatchError::Transport(request_id, err));
        }
        return Ok(request_id);
    }
}
