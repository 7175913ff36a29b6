//! GoAST engine: normalizes Go syntax trees into one uniform generic tree.
//!
//! Pipeline: tree-sitter parse → lowering into the typed [`ast`] → [`walk`]
//! driving a [`gast::TreeBuilder`] → [`gast::UniformNode`].

pub mod api;
pub mod ast;
pub mod gast;
pub mod parsers;
pub mod scanner;
mod stack;
pub mod walk;

pub use api::{parse_directory, parse_file, parse_package, Normalizer};
pub use ast::{ListRole, Node, NodeKind, Span};
pub use gast::{normalize, BuildOptions, TreeBuilder, UniformNode};
pub use walk::{walk, Descend, Visitor};
