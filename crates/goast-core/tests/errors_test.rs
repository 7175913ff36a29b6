//! Error code and message tests.

use std::path::PathBuf;

use goast_core::errors::{GoastError, GoastErrorCode, PackageError, ParseError, ScanError};

#[test]
fn test_syntax_error_carries_position() {
    let err = ParseError::Syntax {
        path: PathBuf::from("main.go"),
        line: 3,
        column: 7,
        offset: 42,
        message: "unexpected '}'".to_string(),
    };
    assert_eq!(err.position(), Some((3, 7)));
    assert_eq!(err.to_string(), "main.go:3:7: unexpected '}'");
    assert_eq!(err.coded_string(), "[SYNTAX_ERROR] main.go:3:7: unexpected '}'");
}

#[test]
fn test_nesting_error_carries_position() {
    let err = ParseError::NestingTooDeep {
        path: PathBuf::from("deep.go"),
        line: 1,
        column: 4012,
        limit: 1000,
    };
    assert_eq!(err.position(), Some((1, 4012)));
    assert_eq!(err.to_string(), "deep.go:1:4012: nesting deeper than 1000 levels");
    assert_eq!(err.error_code(), "NESTING_TOO_DEEP");
}

#[test]
fn test_io_error_has_no_position() {
    let err = ParseError::Io {
        path: PathBuf::from("missing.go"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert_eq!(err.position(), None);
    assert_eq!(err.error_code(), "IO_ERROR");
}

#[test]
fn test_aggregate_error_delegates_codes() {
    let not_found: GoastError = PackageError::PackageNotFound {
        name: "util".to_string(),
        dir: PathBuf::from("pkg"),
    }
    .into();
    assert_eq!(not_found.error_code(), "PACKAGE_NOT_FOUND");

    let none: GoastError = PackageError::NoPackagesFound { dir: PathBuf::from("pkg") }.into();
    assert_eq!(none.error_code(), "NO_PACKAGES");

    let too_large: GoastError = ScanError::MaxFileSizeExceeded {
        path: PathBuf::from("big.go"),
        size: 10,
        max: 1,
    }
    .into();
    assert_eq!(too_large.error_code(), "FILE_TOO_LARGE");
}
