pub mod connect;
pub mod request;
pub mod request_waiting_list;
pub mod dispatcher;
