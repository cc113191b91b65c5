extern crate self as iproto;

pub mod clock;
pub mod net;
