//! Top-level error for directory and package entry points.

use super::error_code::GoastErrorCode;
use super::{ConfigError, PackageError, ParseError, ScanError};

/// Errors returned by the directory/package entry points.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum GoastError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Package error: {0}")]
    Package(#[from] PackageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl GoastErrorCode for GoastError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(e) => e.error_code(),
            Self::Scan(e) => e.error_code(),
            Self::Package(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
