//! Logger initialisation for the command-line front end.
//!
//! The library itself only talks to the `log` facade.

mod init;

pub use init::{init_logging, LoggingConfig};
