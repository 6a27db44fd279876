//! Logging utilities.
//!
//! Centralizes logger initialization behind the `log` facade so binaries only
//! call [`init_logging`] once at startup.

mod init;

pub use init::{init_logging, LoggingConfig};
