//! GoastErrorCode trait: stable error codes for embedders.

/// Every error enum implements this to expose a structured error code string
/// that callers can match on without parsing messages.
pub trait GoastErrorCode {
    /// Returns the error code string (e.g., "SYNTAX_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SYNTAX_ERROR: &str = "SYNTAX_ERROR";
pub const NESTING_TOO_DEEP: &str = "NESTING_TOO_DEEP";
pub const IO_ERROR: &str = "IO_ERROR";
pub const GRAMMAR_ERROR: &str = "GRAMMAR_ERROR";
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const FILE_TOO_LARGE: &str = "FILE_TOO_LARGE";
pub const NO_PACKAGES: &str = "NO_PACKAGES";
pub const PACKAGE_NOT_FOUND: &str = "PACKAGE_NOT_FOUND";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
