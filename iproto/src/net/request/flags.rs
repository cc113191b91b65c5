pub type Flags = u32;

pub const NO_FLAGS: Flags = 0;
/// Ask the server to send the affected tuple back.
pub const RETURN_TUPLE: Flags = 0x01;
/// Fail an insert if a tuple with the same primary key exists.
pub const ADD: Flags = 0x02;
/// Fail an insert if no tuple with the same primary key exists.
pub const REPLACE: Flags = 0x04;
