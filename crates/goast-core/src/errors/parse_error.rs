//! Parser errors.

use std::path::PathBuf;

use super::error_code::{self, GoastErrorCode};

/// Errors surfaced while turning a source file into a syntax tree.
///
/// Unreadable files belong here too: to a caller, a file that cannot be read
/// and a file that cannot be parsed are the same class of failure.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("{}:{line}:{column}: {message}", path.display())]
    Syntax {
        path: PathBuf,
        line: u32,
        column: u32,
        offset: u32,
        message: String,
    },

    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}:{line}:{column}: nesting deeper than {limit} levels", path.display())]
    NestingTooDeep {
        path: PathBuf,
        line: u32,
        column: u32,
        limit: u32,
    },

    #[error("Go grammar could not be loaded: {message}")]
    Grammar { message: String },

    #[error("Parser produced no tree for {}", path.display())]
    NoTree { path: PathBuf },
}

impl ParseError {
    /// Returns `(line, column)` for errors tied to a source location.
    pub fn position(&self) -> Option<(u32, u32)> {
        match self {
            Self::Syntax { line, column, .. } | Self::NestingTooDeep { line, column, .. } => {
                Some((*line, *column))
            }
            _ => None,
        }
    }
}

impl GoastErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Syntax { .. } => error_code::SYNTAX_ERROR,
            Self::NestingTooDeep { .. } => error_code::NESTING_TOO_DEEP,
            Self::Io { .. } => error_code::IO_ERROR,
            Self::Grammar { .. } => error_code::GRAMMAR_ERROR,
            Self::NoTree { .. } => error_code::PARSE_ERROR,
        }
    }
}
