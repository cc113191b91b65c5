use bytes::Bytes;

use crate::net::connect::packet_header::{DecodeError, HEADER_SIZE, PacketHeader};
use crate::net::connect::request_id::RequestId;

/// A complete response packet. The body is kept as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    header: PacketHeader,
    body: Bytes,
}

impl Response {
    pub fn decode(packet: Bytes) -> Result<Response, DecodeError> {
        let header = PacketHeader::decode(&packet)?;
        let body = packet.slice(HEADER_SIZE..);
        if body.len() != header.get_body_length() as usize {
            return Err(DecodeError::BodyLengthMismatch {
                expected: header.get_body_length(),
                actual: body.len(),
            });
        }
        return Ok(Response { header, body });
    }

    pub fn get_header(&self) -> &PacketHeader {
        return &self.header;
    }

    pub fn get_request_id(&self) -> RequestId {
        return self.header.get_request_id();
    }

    pub fn get_body(&self) -> &Bytes {
        return &self.body;
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use crate::net::connect::packet_header::DecodeError;
    use crate::net::connect::response::Response;
    use crate::net::request::request_type::RequestType;

    #[test]
    fn decode_response() {
        let packet = Bytes::from(vec![17, 0, 0, 0, 2, 0, 0, 0, 5, 0, 0, 0, 8, 9]);

        let response = Response::decode(packet).unwrap();

        assert_eq!(5, response.get_request_id());
        assert_eq!(Some(RequestType::Select), response.get_header().get_request_type());
        assert_eq!(&[8, 9], &response.get_body()[..]);
    }

    #[test]
    fn decode_response_with_truncated_body() {
        let packet = Bytes::from(vec![17, 0, 0, 0, 4, 0, 0, 0, 5, 0, 0, 0, 8, 9]);

        let result = Response::decode(packet);

        assert_eq!(Err(DecodeError::BodyLengthMismatch { expected: 4, actual: 2 }), result);
    }

    #[test]
    fn decode_response_with_incomplete_header() {
        let result = Response::decode(Bytes::from(vec![0xff, 0]));

        assert_eq!(Err(DecodeError::Incomplete { available: 2 }), result);
    }
}
