pub mod request;
pub mod request_type;
pub mod flags;
pub mod tuple;
pub mod encoding_error;
pub mod ping;
pub mod select;
pub mod insert;
pub mod update;
pub mod delete;
pub mod call;
