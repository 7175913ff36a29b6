//! Uniform node: the single-kind-enumeration tree consumed downstream.

use serde::{Deserialize, Serialize};

use crate::ast::{Node, NodeKind, Span};

/// A normalized tree node. Children are in source order and owned exclusively
/// by their parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniformNode {
    pub kind: NodeKind,
    pub span: Span,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<UniformNode>,
}

impl UniformNode {
    pub fn new(kind: NodeKind, span: Span, label: Option<String>) -> Self {
        Self {
            kind,
            span,
            label,
            children: Vec::new(),
        }
    }

    /// A childless node carrying the kind, span and label of `node`.
    pub fn shell(node: Node<'_>) -> Self {
        Self::new(node.kind(), node.span(), node.label())
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Number of nodes in this subtree, `self` included.
    pub fn size(&self) -> usize {
        self.preorder().count()
    }

    /// Height of this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, level)) = stack.pop() {
            max = max.max(level);
            stack.extend(node.children.iter().map(|c| (c, level + 1)));
        }
        max
    }

    /// Pre-order (parent before children, children in order) iterator.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder { stack: vec![self] }
    }

    /// All nodes of `kind` in pre-order.
    pub fn find_all(&self, kind: NodeKind) -> Vec<&UniformNode> {
        self.preorder().filter(|n| n.kind == kind).collect()
    }

    /// First node of `kind` in pre-order.
    pub fn find(&self, kind: NodeKind) -> Option<&UniformNode> {
        self.preorder().find(|n| n.kind == kind)
    }

    pub fn child_kinds(&self) -> Vec<NodeKind> {
        self.children.iter().map(|c| c.kind).collect()
    }

    /// Compact structural rendering: `(Kind[label] child ...)`, leaves
    /// without parentheses. Spans are omitted.
    pub fn to_sexpr(&self) -> String {
        let mut out = String::new();
        self.write_sexpr(&mut out);
        out
    }

    fn write_sexpr(&self, out: &mut String) {
        let head = match &self.label {
            Some(label) => format!("{}[{}]", self.kind, label),
            None => self.kind.to_string(),
        };
        if self.children.is_empty() {
            out.push_str(&head);
            return;
        }
        out.push('(');
        out.push_str(&head);
        for child in &self.children {
            out.push(' ');
            child.write_sexpr(out);
        }
        out.push(')');
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Iterator returned by [`UniformNode::preorder`].
pub struct Preorder<'a> {
    stack: Vec<&'a UniformNode>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a UniformNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(kind: NodeKind, label: &str) -> UniformNode {
        UniformNode::new(kind, Span::default(), Some(label.to_string()))
    }

    fn sample() -> UniformNode {
        let mut list = UniformNode::new(NodeKind::List, Span::new(8, 12), Some("Results".into()));
        list.children = vec![leaf(NodeKind::Ident, "a"), leaf(NodeKind::Ident, "b")];
        let mut ret = UniformNode::new(NodeKind::ReturnStmt, Span::new(1, 12), None);
        ret.children = vec![list];
        ret
    }

    #[test]
    fn test_size_and_depth() {
        let tree = sample();
        assert_eq!(tree.size(), 4);
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn test_preorder_visits_parent_then_children_in_order() {
        let tree = sample();
        let labels: Vec<_> = tree.preorder().map(|n| n.label().unwrap_or("-")).collect();
        assert_eq!(labels, vec!["-", "Results", "a", "b"]);
    }

    #[test]
    fn test_sexpr_rendering() {
        assert_eq!(
            sample().to_sexpr(),
            "(ReturnStmt (List[Results] Ident[a] Ident[b]))"
        );
    }

    #[test]
    fn test_json_omits_empty_fields() {
        let json = leaf(NodeKind::Ident, "x").to_json().unwrap();
        assert!(!json.contains("children"));
        let back = UniformNode::from_json(&sample().to_json().unwrap()).unwrap();
        assert_eq!(back, sample());
    }
}
