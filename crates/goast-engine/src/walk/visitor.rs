//! Visitor protocol: the contract between the walker and whatever consumes it.

use crate::ast::Node;

/// Answer to [`Visitor::begin_node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descend {
    /// Visit the node's children, then call [`Visitor::end_node`].
    Children,
    /// Skip the subtree. Neither the children nor `end_node` are visited.
    Skip,
}

/// Receives one `begin_node` per visited node and, unless the node was
/// skipped, exactly one matching `end_node` after all of its children.
///
/// Calls nest strictly: the `end_node` always closes the most recent
/// unclosed `begin_node`, which is what lets a visitor keep a plain stack.
pub trait Visitor {
    /// What a completed node is turned into.
    type Output;

    fn begin_node(&mut self, node: Node<'_>) -> Descend;

    /// Close the most recently begun node. A visitor that attaches finished
    /// nodes to their parent returns `None` until the outermost node closes.
    fn end_node(&mut self) -> Option<Self::Output>;
}
