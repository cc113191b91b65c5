use async_trait::async_trait;
use bytes::Bytes;

use crate::net::connect::error::TransportError;

/// Writes complete packets to the connection. Implemented by the socket
/// layer; the dispatcher only needs ordered, whole-packet writes.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn write(&self, packet: Bytes) -> Result<(), TransportError>;
}
