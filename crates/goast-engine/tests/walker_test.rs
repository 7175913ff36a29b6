//! Walker and builder protocol tests over real parsed files.

use std::path::{Path, PathBuf};

use goast_engine::ast::{File, Node, NodeKind};
use goast_engine::gast::{normalize, BuildOptions, TreeBuilder};
use goast_engine::parsers::GoParser;
use goast_engine::walk::{walk, Descend, Visitor};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/go")
        .join(name)
}

fn parse(src: &str) -> File {
    GoParser::new()
        .parse(src.as_bytes(), Path::new("t.go"), 1)
        .unwrap_or_else(|e| panic!("parse failed: {e}"))
}

fn parse_fixture(name: &str) -> File {
    let path = fixture(name);
    let bytes = std::fs::read(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    GoParser::new()
        .parse(&bytes, &path, 1)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", name, e))
}

/// Records every callback; optionally skips one kind.
#[derive(Default)]
struct Recorder {
    skip: Option<NodeKind>,
    begins: Vec<NodeKind>,
    ends: usize,
    depth: usize,
    max_depth: usize,
}

impl Visitor for Recorder {
    type Output = ();

    fn begin_node(&mut self, node: Node<'_>) -> Descend {
        self.begins.push(node.kind());
        if Some(node.kind()) == self.skip {
            return Descend::Skip;
        }
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        Descend::Children
    }

    fn end_node(&mut self) -> Option<()> {
        self.ends += 1;
        self.depth -= 1;
        (self.depth == 0).then_some(())
    }
}

// ---- Example from the method declaration shape ----

#[test]
fn test_method_decl_children_and_results_list() {
    let file = parse("package p\n\nfunc (r *T) M() {\n\treturn a, b\n}\n");
    let tree = normalize(Node::File(&file), BuildOptions::default());

    let func = tree.find(NodeKind::FuncDecl).expect("FuncDecl");
    assert_eq!(
        func.child_kinds(),
        vec![
            NodeKind::FieldList,
            NodeKind::Ident,
            NodeKind::FuncType,
            NodeKind::BlockStmt,
        ]
    );
    assert_eq!(func.children[1].label(), Some("M"));

    let ret = func.find(NodeKind::ReturnStmt).expect("ReturnStmt");
    assert_eq!(ret.children.len(), 1);
    assert_eq!(ret.to_sexpr(), "(ReturnStmt (List[Results] Ident[a] Ident[b]))");

    let list = &ret.children[0];
    assert_eq!(list.span.start, list.children[0].span.start);
    assert_eq!(list.span.end, list.children[1].span.end);
}

#[test]
fn test_empty_sequences_produce_no_list() {
    let file = parse("package p\n\nfunc f() {\n\treturn\n}\n\nfunc g() {\n\th()\n}\n");
    let tree = normalize(Node::File(&file), BuildOptions::default());

    let ret = tree.find(NodeKind::ReturnStmt).unwrap();
    assert!(ret.children.is_empty());

    let call = tree.find(NodeKind::CallExpr).unwrap();
    assert_eq!(call.child_kinds(), vec![NodeKind::Ident]);

    // No free comments, so the file has no Comments list.
    assert!(tree
        .children
        .iter()
        .all(|c| c.label() != Some("Comments")));
}

#[test]
fn test_lists_are_never_empty() {
    let file = parse_fixture("reference.go");
    let tree = normalize(Node::File(&file), BuildOptions::default());
    for list in tree.find_all(NodeKind::List) {
        assert!(!list.children.is_empty(), "empty list {}", list.to_sexpr());
    }
}

// ---- Node accounting ----

#[test]
fn test_uniform_size_matches_visited_nodes() {
    let file = parse_fixture("reference.go");
    let mut recorder = Recorder::default();
    walk(&mut recorder, Node::File(&file));

    let tree = normalize(Node::File(&file), BuildOptions::default());
    assert_eq!(tree.size(), recorder.begins.len());
    assert_eq!(recorder.ends, recorder.begins.len());
    assert_eq!(tree.depth(), recorder.max_depth);
}

#[test]
fn test_preorder_matches_visit_order() {
    let file = parse_fixture("reference.go");
    let mut recorder = Recorder::default();
    walk(&mut recorder, Node::File(&file));

    let tree = normalize(Node::File(&file), BuildOptions::default());
    let kinds: Vec<NodeKind> = tree.preorder().map(|n| n.kind).collect();
    assert_eq!(kinds, recorder.begins);
}

#[test]
fn test_sequence_elements_are_in_source_order() {
    let file = parse_fixture("reference.go");
    let tree = normalize(Node::File(&file), BuildOptions::default());
    let sequences = [
        NodeKind::List,
        NodeKind::BlockStmt,
        NodeKind::FieldList,
        NodeKind::CommentGroup,
    ];
    for node in tree.preorder().filter(|n| sequences.contains(&n.kind)) {
        for pair in node.children.windows(2) {
            assert!(
                pair[0].span.end <= pair[1].span.start,
                "out of order under {:?}: {:?} then {:?}",
                node.kind,
                pair[0].kind,
                pair[1].kind
            );
        }
    }
}

#[test]
fn test_walk_is_deterministic() {
    let file = parse_fixture("reference.go");
    let first = normalize(Node::File(&file), BuildOptions::default());
    let second = normalize(Node::File(&file), BuildOptions::default());
    assert_eq!(first, second);
}

// ---- Skip protocol ----

#[test]
fn test_skip_suppresses_children_and_end() {
    let file = parse("package p\n\nfunc f(a int) (b int) {\n\treturn a\n}\n");
    let mut recorder = Recorder {
        skip: Some(NodeKind::FuncType),
        ..Default::default()
    };
    assert_eq!(walk(&mut recorder, Node::File(&file)), Some(()));

    assert!(recorder.begins.contains(&NodeKind::FuncType));
    assert!(!recorder.begins.contains(&NodeKind::FieldList));
    assert!(!recorder.begins.contains(&NodeKind::Field));
    // The skipped node got a begin but no end.
    assert_eq!(recorder.ends, recorder.begins.len() - 1);
    assert_eq!(recorder.depth, 0);
}

#[test]
fn test_builder_without_comments_skips_groups() {
    let src = "// Package p.\npackage p\n\n// F does things.\nfunc F() {} // trailing\n";
    let file = parse(src);

    let with = normalize(Node::File(&file), BuildOptions::default());
    assert_eq!(with.find_all(NodeKind::Comment).len(), 3);

    let mut builder = TreeBuilder::new(BuildOptions {
        include_comments: false,
    });
    let without = walk(&mut builder, Node::File(&file)).expect("root is never skipped");
    assert_eq!(builder.open_nodes(), 0);
    assert!(without.find(NodeKind::Comment).is_none());
    assert!(without.find(NodeKind::CommentGroup).is_none());
    assert!(without.children.iter().all(|c| c.label() != Some("Comments")));
    assert_eq!(without.children[0].kind, NodeKind::Ident);
}
