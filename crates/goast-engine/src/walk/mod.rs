//! Walker: depth-first traversal of the source tree driving a [`Visitor`].

pub mod visitor;
pub mod walker;

pub use visitor::{Descend, Visitor};
pub use walker::walk;
