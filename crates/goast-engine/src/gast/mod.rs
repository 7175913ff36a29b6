//! GAST: the uniform generic tree and the builder that produces it.
//!
//! Every source kind maps to one [`UniformNode`] with the same [`NodeKind`]
//! tag; sequences that share a parent slot arrive as synthetic `List` nodes.
//!
//! [`NodeKind`]: crate::ast::NodeKind

pub mod builder;
pub mod types;

pub use builder::{normalize, BuildOptions, TreeBuilder};
pub use types::UniformNode;
