pub mod config;
pub mod logging;

pub mod backoff;
pub mod ratelimit;
pub mod response;
pub mod retry;
