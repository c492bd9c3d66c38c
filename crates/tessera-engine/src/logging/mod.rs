//! Logging utilities.
//!
//! Logger setup for binaries built on the engine. Library code only talks to
//! the `log` facade; `env_logger` is wired up here.

mod init;

pub use init::{init_logging, LoggingConfig};
