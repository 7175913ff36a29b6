//! Property tests for sequence wrapping and determinism.

use std::path::Path;

use goast_engine::{Normalizer, NodeKind, UniformNode};
use proptest::prelude::*;

fn normalize_src(src: &str) -> UniformNode {
    Normalizer::new()
        .parse_source(src.as_bytes(), Path::new("prop.go"))
        .unwrap_or_else(|e| panic!("parse failed for {src:?}: {e}"))
}

fn call_with_args(n: usize) -> String {
    let args: Vec<String> = (0..n).map(|i| format!("a{i}")).collect();
    format!("package p\n\nfunc f() {{\n\tg({})\n}}\n", args.join(", "))
}

fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,6}".prop_filter("not a keyword", |s| {
        !matches!(
            s.as_str(),
            "break" | "case" | "chan" | "const" | "continue" | "default" | "defer" | "else"
                | "for" | "func" | "go" | "goto" | "if" | "import" | "interface" | "map"
                | "package" | "range" | "return" | "select" | "struct" | "switch" | "type"
                | "var"
        )
    })
}

proptest! {
    #[test]
    fn args_list_present_iff_non_empty(n in 0usize..12) {
        let tree = normalize_src(&call_with_args(n));
        let call = tree.find(NodeKind::CallExpr).unwrap();
        if n == 0 {
            prop_assert_eq!(call.child_kinds(), vec![NodeKind::Ident]);
        } else {
            prop_assert_eq!(call.child_kinds(), vec![NodeKind::Ident, NodeKind::List]);
            let args = &call.children[1];
            prop_assert_eq!(args.label(), Some("Args"));
            prop_assert_eq!(args.children.len(), n);
            let labels: Vec<String> = args
                .children
                .iter()
                .map(|c| c.label().unwrap_or_default().to_string())
                .collect();
            let expected: Vec<String> = (0..n).map(|i| format!("a{i}")).collect();
            prop_assert_eq!(labels, expected);
        }
    }

    #[test]
    fn return_values_keep_source_order(names in prop::collection::vec(ident(), 1..6)) {
        let src = format!("package p\n\nfunc f() {{\n\treturn {}\n}}\n", names.join(", "));
        let tree = normalize_src(&src);
        let ret = tree.find(NodeKind::ReturnStmt).unwrap();
        prop_assert_eq!(ret.children.len(), 1);
        let got: Vec<&str> = ret.children[0]
            .children
            .iter()
            .filter_map(|c| c.label())
            .collect();
        prop_assert_eq!(got, names.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn normalization_is_deterministic(n in 0usize..8) {
        let src = call_with_args(n);
        prop_assert_eq!(normalize_src(&src), normalize_src(&src));
    }
}
