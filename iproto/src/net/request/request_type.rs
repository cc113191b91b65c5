/// Operation codes carried in the `request_type` field of the packet header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestType {
    Insert,
    Select,
    Update,
    Delete,
    Call,
    Ping,
}

impl RequestType {
    pub fn code(&self) -> u32 {
        return match self {
            RequestType::Insert => 13,
            RequestType::Select => 17,
            RequestType::Update => 19,
            RequestType::Delete => 21,
            RequestType::Call => 22,
            RequestType::Ping => 0xff00,
        };
    }

    pub fn from_code(code: u32) -> Option<RequestType> {
        return match code {
            13 => Some(RequestType::Insert),
            17 => Some(RequestType::Select),
            19 => Some(RequestType::Update),
            21 => Some(RequestType::Delete),
            22 => Some(RequestType::Call),
            0xff00 => Some(RequestType::Ping),
            _ => None,
        };
    }
}
