//! Logger initialization.
//!
//! The engine logs through the `log` facade; this module wires up the
//! `env_logger` backend for binaries that want it.

mod init;

pub use init::{init_logging, LoggingConfig};
