//! Source syntax tree: the closed Go grammar the walker is built against.
//!
//! Produced by [`crate::parsers`], read-only afterwards. Structs mirror the
//! grammar's fields in declaration order; [`Node`] is a borrowed view over any
//! of them (plus the synthetic [`ListNode`]) that the walker dispatches on.

pub mod kind;
pub mod node;
pub mod span;
pub mod types;

pub use kind::{ListRole, NodeKind};
pub use node::{ListNode, Node};
pub use span::Span;
pub use types::*;
