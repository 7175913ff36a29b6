//! Tree-sitter parser subsystem: Go grammar, thread-local parser instances,
//! and lowering of the concrete tree into the typed [`crate::ast`] model.

pub mod comments;
pub mod file_set;
pub mod go;
pub mod lower;
pub mod syntax_check;

pub use file_set::FileSet;
pub use go::GoParser;
