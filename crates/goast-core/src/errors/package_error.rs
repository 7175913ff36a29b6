//! Package lookup errors.

use std::path::PathBuf;

use super::error_code::{self, GoastErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum PackageError {
    #[error("No packages found in {}", dir.display())]
    NoPackagesFound { dir: PathBuf },

    #[error("Package {name} was not found in {}", dir.display())]
    PackageNotFound { name: String, dir: PathBuf },
}

impl GoastErrorCode for PackageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoPackagesFound { .. } => error_code::NO_PACKAGES,
            Self::PackageNotFound { .. } => error_code::PACKAGE_NOT_FOUND,
        }
    }
}
