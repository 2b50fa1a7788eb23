//! CLI command handlers, one per file.

mod compute;
mod config;
mod replay;

pub use compute::run_compute;
pub use config::run_config;
pub use replay::run_replay;

#[cfg(test)]
pub(crate) use compute::{build_response, parse_header_arg};
#[cfg(test)]
pub(crate) use replay::{replay_responses, ReplayFile};
