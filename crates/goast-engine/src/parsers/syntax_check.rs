//! Syntax validation: locate ERROR and MISSING nodes in a tree-sitter tree,
//! and bound its nesting depth.
//!
//! tree-sitter always produces a tree; the Go grammar's error recovery is
//! reported here instead of being lowered into a partial AST.

use tree_sitter::Node;

/// First syntax problem in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxIssue {
    /// 1-based line.
    pub line: u32,
    /// 1-based column, in bytes.
    pub column: u32,
    /// Byte offset into the file.
    pub offset: u32,
    pub message: String,
}

/// The first node, in pre-order, lying more than `limit` levels below `root`.
///
/// Iterative, so it is safe on trees that the recursive passes must not see.
pub fn too_deep(root: Node, limit: u32) -> Option<Node> {
    let mut cursor = root.walk();
    let mut depth = 0u32;
    loop {
        if depth > limit {
            return Some(cursor.node());
        }
        if cursor.goto_first_child() {
            depth += 1;
            continue;
        }
        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                return None;
            }
            depth -= 1;
        }
    }
}

/// The earliest ERROR or MISSING node, if any.
pub fn first_error(root: Node, source: &[u8]) -> Option<SyntaxIssue> {
    if !root.has_error() {
        return None;
    }
    let mut first: Option<Node> = None;
    collect_errors(root, &mut |node| {
        if first.map_or(true, |f| node.start_byte() < f.start_byte()) {
            first = Some(node);
        }
    });
    first.map(|node| describe(node, source))
}

fn collect_errors<'t>(node: Node<'t>, on_error: &mut impl FnMut(Node<'t>)) {
    if node.is_error() || node.is_missing() {
        on_error(node);
    }
    if !node.has_error() {
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_errors(child, on_error);
    }
}

fn describe(node: Node, source: &[u8]) -> SyntaxIssue {
    let start = node.start_position();
    let message = if node.is_missing() {
        format!("expected '{}'", node.kind())
    } else {
        let text = String::from_utf8_lossy(&source[node.byte_range()]);
        let snippet: String = text.trim().chars().take(24).collect();
        if snippet.is_empty() {
            "unexpected end of file".to_string()
        } else {
            format!("unexpected '{snippet}'")
        }
    };
    SyntaxIssue {
        line: start.row as u32 + 1,
        column: start.column as u32 + 1,
        offset: node.start_byte() as u32,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> tree_sitter::Tree {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .unwrap();
        parser.parse(source, None).unwrap()
    }

    #[test]
    fn test_clean_source_has_no_errors() {
        let src = "package main\n\nfunc main() {}\n";
        let tree = parse(src);
        assert!(first_error(tree.root_node(), src.as_bytes()).is_none());
    }

    #[test]
    fn test_error_position_is_one_based() {
        let src = "package main\n\nfunc main() {\n\tx := )\n}\n";
        let tree = parse(src);
        assert!(tree.root_node().has_error());
        let issue = first_error(tree.root_node(), src.as_bytes()).unwrap();
        assert!(issue.line >= 3, "error reported at line {}", issue.line);
        assert!(issue.column >= 1);
    }

    #[test]
    fn test_too_deep_reports_first_node_past_limit() {
        // source_file > var_declaration > var_spec > expression_list > binary...
        let src = format!("package p\n\nvar x = 1{}\n", " + 1".repeat(50));
        let tree = parse(&src);
        let root = tree.root_node();

        assert!(too_deep(root, 200).is_none());
        let node = too_deep(root, 10).expect("chain is deeper than 10");
        assert_eq!(node.start_position().row, 2);
        let mut depth = 0;
        let mut up = node;
        while let Some(parent) = up.parent() {
            depth += 1;
            up = parent;
        }
        assert_eq!(depth, 11);
    }

    #[test]
    fn test_too_deep_walks_past_shallow_siblings() {
        let src = "package p\n\nvar a = 1\n\nfunc f() { g(h(i(j(k())))) }\n";
        let tree = parse(src);
        let node = too_deep(tree.root_node(), 8).expect("nested calls exceed 8 levels");
        assert_eq!(node.start_position().row, 4);
        assert!(too_deep(tree.root_node(), 64).is_none());
    }
}
