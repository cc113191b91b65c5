use bytes::{Bytes, BytesMut};

use crate::net::connect::packet_header::{HEADER_SIZE, PacketHeader};
use crate::net::connect::request_id::RequestId;
use crate::net::connect::request_id_allocator::RequestIdAllocator;
use crate::net::request::encoding_error::EncodingError;
use crate::net::request::request_type::RequestType;

/// The id half of every request.
///
/// Usually implemented through `#[add_request_id]`. A new request carries
/// `UNASSIGNED_REQUEST_ID` until one of the setters runs. Once the request is
/// handed to a transport its id must not change; neither setter checks this,
/// nor does either check that the id is unique.
pub trait RequestIdentity {
    fn get_request_id(&self) -> RequestId;

    fn set_request_id(&mut self, request_id: RequestId);

    /// Draws exactly one id from `allocator` and stores it, replacing any
    /// previous id.
    fn assign_next_request_id(&mut self, allocator: &RequestIdAllocator) -> RequestId {
        let request_id = allocator.next();
        self.set_request_id(request_id);
        return request_id;
    }
}

pub trait Request: RequestIdentity + Send + Sync {
    fn request_type(&self) -> RequestType;

    fn encode_body(&self, buffer: &mut BytesMut) -> Result<(), EncodingError>;

    /// Packet header carrying this request's id, followed by the body.
    fn serialize(&self) -> Result<Bytes, EncodingError> {
        let mut body = BytesMut::new();
        self.encode_body(&mut body)?;

        let body_length = u32::try_from(body.len())
            .map_err(|_| EncodingError::BodyTooLarge { length: body.len() })?;
        let header = PacketHeader::new(self.request_type(), body_length, self.get_request_id());

        let mut packet = BytesMut::with_capacity(HEADER_SIZE + body.len());
        header.encode(&mut packet);
        packet.extend_from_slice(&body);
        return Ok(packet.freeze());
    }
}

#[cfg(test)]
mod tests {
    use bytes::{BufMut, BytesMut};

    use crate::net::connect::packet_header::PacketHeader;
    use crate::net::connect::request_id::UNASSIGNED_REQUEST_ID;
    use crate::net::connect::request_id_allocator::RequestIdAllocator;
    use crate::net::request::encoding_error::EncodingError;
    use crate::net::request::request::{Request, RequestIdentity};
    use crate::net::request::request::tests::setup::{EchoRequest, UnrepresentableRequest};
    use crate::net::request::request_type::RequestType;

    mod setup {
        use super::*;

        pub struct EchoRequest {
            pub request_id: u32,
            pub payload: Vec<u8>,
        }

        pub struct UnrepresentableRequest {
            pub request_id: u32,
        }

        impl RequestIdentity for EchoRequest {
            fn get_request_id(&self) -> u32 {
                return self.request_id;
            }

            fn set_request_id(&mut self, request_id: u32) {
                self.request_id = request_id;
            }
        }

        impl Request for EchoRequest {
            fn request_type(&self) -> RequestType {
                return RequestType::Call;
            }

            fn encode_body(&self, buffer: &mut BytesMut) -> Result<(), EncodingError> {
                buffer.put_slice(&self.payload);
                return Ok(());
            }
        }

        impl RequestIdentity for UnrepresentableRequest {
            fn get_request_id(&self) -> u32 {
                return self.request_id;
            }

            fn set_request_id(&mut self, request_id: u32) {
                self.request_id = request_id;
            }
        }

        impl Request for UnrepresentableRequest {
            fn request_type(&self) -> RequestType {
                return RequestType::Insert;
            }

            fn encode_body(&self, _: &mut BytesMut) -> Result<(), EncodingError> {
                return Err(EncodingError::EmptyTuple);
            }
        }
    }

    fn echo_request() -> EchoRequest {
        return EchoRequest { request_id: UNASSIGNED_REQUEST_ID, payload: vec![1, 2, 3] };
    }

    #[test]
    fn new_request_is_unassigned() {
        let request = echo_request();
        assert_eq!(0, request.get_request_id());
    }

    #[test]
    fn assign_next_request_id_from_allocator() {
        let allocator = RequestIdAllocator::starting_at(41);
        let mut request = echo_request();

        let request_id = request.assign_next_request_id(&allocator);

        assert_eq!(41, request_id);
        assert_eq!(41, request.get_request_id());
        assert_eq!(42, allocator.peek());
    }

    #[test]
    fn assign_next_request_id_overwrites_previous_id() {
        let allocator = RequestIdAllocator::starting_at(5);
        let mut request = echo_request();
        request.set_request_id(100);

        request.assign_next_request_id(&allocator);

        assert_eq!(5, request.get_request_id());
    }

    #[test]
    fn set_request_id_without_allocator() {
        let allocator = RequestIdAllocator::new();
        let mut request = echo_request();

        request.set_request_id(999);

        assert_eq!(999, request.get_request_id());
        assert_eq!(0, allocator.peek());
    }

    #[test]
    fn set_request_id_after_assignment() {
        let allocator = RequestIdAllocator::new();
        let mut request = echo_request();
        request.assign_next_request_id(&allocator);

        request.set_request_id(7);

        assert_eq!(7, request.get_request_id());
    }

    #[test]
    fn serialize_header_and_body() {
        let mut request = echo_request();
        request.set_request_id(9);

        let packet = request.serialize().unwrap();

        let header = PacketHeader::decode(&packet).unwrap();
        assert_eq!(Some(RequestType::Call), header.get_request_type());
        assert_eq!(3, header.get_body_length());
        assert_eq!(9, header.get_request_id());
        assert_eq!(&[1, 2, 3], &packet[12..]);
    }

    #[test]
    fn serialize_is_deterministic() {
        let mut request = echo_request();
        request.set_request_id(9);

        assert_eq!(request.serialize().unwrap(), request.serialize().unwrap());
        assert_eq!(9, request.get_request_id());
    }

    #[test]
    fn serialize_propagates_encoding_error() {
        let request = UnrepresentableRequest { request_id: 1 };

        assert_eq!(Err(EncodingError::EmptyTuple), request.serialize());
    }
}
