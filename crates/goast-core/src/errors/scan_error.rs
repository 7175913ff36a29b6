//! Scanner errors.

use std::path::PathBuf;

use super::error_code::{self, GoastErrorCode};

/// Errors that can occur while enumerating a package directory.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("IO error scanning {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("File too large: {} ({size} bytes, max {max})", path.display())]
    MaxFileSizeExceeded { path: PathBuf, size: u64, max: u64 },
}

impl GoastErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::IO_ERROR,
            Self::MaxFileSizeExceeded { .. } => error_code::FILE_TOO_LARGE,
        }
    }
}
