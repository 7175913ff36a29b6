//! TreeBuilder: the visitor that assembles the uniform tree.

use goast_core::config::TreeConfig;

use crate::ast::{ListRole, Node};
use crate::walk::{walk, Descend, Visitor};

use super::types::UniformNode;

/// Knobs for [`TreeBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Keep `CommentGroup`/`Comment` subtrees.
    pub include_comments: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            include_comments: true,
        }
    }
}

impl From<&TreeConfig> for BuildOptions {
    fn from(config: &TreeConfig) -> Self {
        Self {
            include_comments: config.effective_include_comments(),
        }
    }
}

/// Builds a [`UniformNode`] tree from walker callbacks.
///
/// `begin_node` pushes a childless shell onto the open stack; `end_node` pops
/// it and appends it to the new top of the stack, or returns it as the
/// completed root once the stack is empty.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    options: BuildOptions,
    stack: Vec<UniformNode>,
}

impl TreeBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self {
            options,
            stack: Vec::new(),
        }
    }

    /// Number of nodes currently open.
    pub fn open_nodes(&self) -> usize {
        self.stack.len()
    }
}

impl Visitor for TreeBuilder {
    type Output = UniformNode;

    fn begin_node(&mut self, node: Node<'_>) -> Descend {
        // The root is never pruned so a finished walk always yields a tree.
        if !self.options.include_comments && !self.stack.is_empty() && is_comment_subtree(node) {
            return Descend::Skip;
        }
        self.stack.push(UniformNode::shell(node));
        Descend::Children
    }

    fn end_node(&mut self) -> Option<UniformNode> {
        let Some(done) = self.stack.pop() else {
            tracing::error!("end_node without a matching begin_node");
            return None;
        };
        match self.stack.last_mut() {
            Some(parent) => {
                parent.children.push(done);
                None
            }
            None => Some(done),
        }
    }
}

/// Comment nodes, and the file-level list that only ever holds comment groups.
fn is_comment_subtree(node: Node<'_>) -> bool {
    match node {
        Node::List(list) => list.role == ListRole::Comments,
        _ => node.kind().is_comment(),
    }
}

/// Run the walker over `node` with a fresh [`TreeBuilder`].
pub fn normalize(node: Node<'_>, options: BuildOptions) -> UniformNode {
    let mut builder = TreeBuilder::new(options);
    match walk(&mut builder, node) {
        Some(tree) => tree,
        None => unreachable!("walker returned without closing the root {}", node.kind()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Ident, NodeKind, Span};

    #[test]
    fn test_leaf_becomes_root() {
        let ident = Ident {
            span: Span::new(1, 4),
            name: "foo".to_string(),
        };
        let tree = normalize(Node::Ident(&ident), BuildOptions::default());
        assert_eq!(tree.kind, NodeKind::Ident);
        assert_eq!(tree.span, Span::new(1, 4));
        assert_eq!(tree.label(), Some("foo"));
        assert!(tree.children.is_empty());
    }

    #[test]
    fn test_stack_discipline() {
        let a = Ident { span: Span::new(1, 2), name: "a".into() };
        let b = Ident { span: Span::new(3, 4), name: "b".into() };

        let mut builder = TreeBuilder::default();
        assert_eq!(builder.begin_node(Node::Ident(&a)), Descend::Children);
        assert_eq!(builder.begin_node(Node::Ident(&b)), Descend::Children);
        assert_eq!(builder.open_nodes(), 2);
        assert!(builder.end_node().is_none());
        assert_eq!(builder.open_nodes(), 1);
        let root = builder.end_node().expect("root completes on the last end");
        assert_eq!(builder.open_nodes(), 0);

        assert_eq!(root.label(), Some("a"));
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].label(), Some("b"));
    }

    #[test]
    fn test_unbalanced_end_is_ignored() {
        let mut builder = TreeBuilder::default();
        assert!(builder.end_node().is_none());
        assert_eq!(builder.open_nodes(), 0);
    }
}
