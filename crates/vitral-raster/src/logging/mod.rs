//! Logging setup helpers.

mod init;

pub use init::{init_logging, LoggingConfig};
