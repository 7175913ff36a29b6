//! Error handling for GoAST.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod goast_error;
pub mod package_error;
pub mod parse_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use error_code::GoastErrorCode;
pub use goast_error::GoastError;
pub use package_error::PackageError;
pub use parse_error::ParseError;
pub use scan_error::ScanError;
