pub mod request_waiting_list;
pub mod request_waiting_list_config;
pub mod response_callback;
pub mod single_response_callback;
pub mod request_timeout_error;
pub mod duplicate_request_id_error;
mod expired_callback_remover;
