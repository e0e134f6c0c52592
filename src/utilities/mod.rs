pub mod config;
pub mod direction;
pub mod lift;
pub mod pending_queue;
pub mod request;
pub mod status;
