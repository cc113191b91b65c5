pub mod request_id;
pub mod request_id_allocator;
pub mod packet_header;
pub mod response;
pub mod transport;
pub mod error;
