pub mod request_id_allocator;
pub mod request_waiting_list;
