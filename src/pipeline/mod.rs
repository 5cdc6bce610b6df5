// src/pipeline/mod.rs

//! Polling pipeline stages.

mod poll;
mod status;
mod validate;

pub use poll::Poller;
pub use status::parse_status;
pub use validate::check_response;
