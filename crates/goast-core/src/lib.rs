//! GoAST core: errors, configuration, and tracing shared by the engine and
//! its embedders.

pub mod config;
pub mod errors;
pub mod tracing;

pub use config::GoastConfig;
pub use errors::{GoastError, GoastErrorCode};
