//! Lowering tests: Go source in, uniform tree shape out.
//!
//! Shapes are compared through `to_sexpr`, which renders kinds, labels and
//! child order but not spans.

use std::path::Path;

use goast_engine::{Normalizer, NodeKind, UniformNode};

fn tree(src: &str) -> UniformNode {
    Normalizer::new()
        .parse_source(src.as_bytes(), Path::new("t.go"))
        .unwrap_or_else(|e| panic!("parse failed: {e}"))
}

fn first(src: &str, kind: NodeKind) -> String {
    tree(src)
        .find(kind)
        .unwrap_or_else(|| panic!("no {kind} in tree"))
        .to_sexpr()
}

fn in_func(body: &str) -> String {
    format!("package p\n\nfunc f() {{\n{body}\n}}\n")
}

// ---- Statements ----

#[test]
fn test_if_with_init_and_else() {
    let src = in_func("\tif x := g(); x > 0 {\n\t\treturn\n\t} else {\n\t\th()\n\t}");
    assert_eq!(
        first(&src, NodeKind::IfStmt),
        "(IfStmt (AssignStmt[:=] (List[Lhs] Ident[x]) (List[Rhs] (CallExpr Ident[g]))) \
         (BinaryExpr[>] Ident[x] BasicLit[0]) (BlockStmt ReturnStmt) \
         (BlockStmt (ExprStmt (CallExpr Ident[h]))))"
    );
}

#[test]
fn test_expression_switch() {
    let src = in_func("\tswitch y := 1; y {\n\tcase 1, 2:\n\t\ty++\n\tdefault:\n\t\tbreak\n\t}");
    assert_eq!(
        first(&src, NodeKind::SwitchStmt),
        "(SwitchStmt (AssignStmt[:=] (List[Lhs] Ident[y]) (List[Rhs] BasicLit[1])) Ident[y] \
         (BlockStmt (CaseClause (List[Cases] BasicLit[1] BasicLit[2]) (List[Body] (IncDecStmt[++] Ident[y]))) \
         (CaseClause (List[Body] BranchStmt[break]))))"
    );
}

#[test]
fn test_type_switch_guard() {
    let src = "package p\n\nfunc f(v any) {\n\tswitch t := v.(type) {\n\tcase int, string:\n\t\tuse(t)\n\tdefault:\n\t}\n}\n";
    let tree = tree(src);
    assert_eq!(
        tree.find(NodeKind::TypeSwitchStmt).unwrap().to_sexpr(),
        "(TypeSwitchStmt (AssignStmt[:=] (List[Lhs] Ident[t]) (List[Rhs] (TypeAssertExpr Ident[v]))) \
         (BlockStmt (CaseClause (List[Cases] Ident[int] Ident[string]) \
         (List[Body] (ExprStmt (CallExpr Ident[use] (List[Args] Ident[t]))))) CaseClause))"
    );

    // The guard spans `v.(type)`; positions are byte offsets plus base 1.
    let guard = tree.find(NodeKind::TypeAssertExpr).unwrap();
    let start = src.find("v.(type)").unwrap();
    assert_eq!(guard.span.start as usize, start + 1);
    assert_eq!(guard.span.end as usize, start + "v.(type)".len() + 1);
}

#[test]
fn test_type_switch_case_with_composite_types() {
    let src = "package p\n\ntype T struct{}\n\nfunc f(v any) {\n\
               \tswitch x := v.(type) {\n\tcase []int, map[string]int, *T:\n\t\t_ = x\n\t}\n}\n";
    let tree = tree(src);
    assert_eq!(
        tree.find(NodeKind::CaseClause).unwrap().to_sexpr(),
        "(CaseClause (List[Cases] (ArrayType Ident[int]) (MapType Ident[string] Ident[int]) (StarExpr Ident[T])) \
         (List[Body] (AssignStmt[=] (List[Lhs] Ident[_]) (List[Rhs] Ident[x]))))"
    );
    for kind in [NodeKind::BadExpr, NodeKind::BadStmt, NodeKind::BadDecl] {
        assert!(tree.find(kind).is_none(), "unexpected {kind}");
    }
}

#[test]
fn test_for_and_range_forms() {
    let src = "package p\n\nfunc f(m map[string]int, n int) {\n\
               \tfor i := 0; i < n; i++ {\n\t}\n\
               \tfor k, v := range m {\n\t\t_ = v\n\t}\n\
               \tfor range m {\n\t}\n}\n";
    let tree = tree(src);

    assert_eq!(
        tree.find(NodeKind::ForStmt).unwrap().to_sexpr(),
        "(ForStmt (AssignStmt[:=] (List[Lhs] Ident[i]) (List[Rhs] BasicLit[0])) \
         (BinaryExpr[<] Ident[i] Ident[n]) (IncDecStmt[++] Ident[i]) BlockStmt)"
    );

    let ranges: Vec<String> = tree
        .find_all(NodeKind::RangeStmt)
        .iter()
        .map(|r| r.to_sexpr())
        .collect();
    assert_eq!(
        ranges,
        vec![
            "(RangeStmt[:=] Ident[k] Ident[v] Ident[m] (BlockStmt (AssignStmt[=] (List[Lhs] Ident[_]) (List[Rhs] Ident[v]))))",
            "(RangeStmt Ident[m] BlockStmt)",
        ]
    );
}

#[test]
fn test_select_clauses() {
    let src = "package p\n\nfunc f(in <-chan int, out chan<- int) {\n\
               \tselect {\n\tcase v := <-in:\n\t\t_ = v\n\tcase out <- 1:\n\tdefault:\n\t}\n}\n";
    assert_eq!(
        first(src, NodeKind::SelectStmt),
        "(SelectStmt (BlockStmt \
         (CommClause (AssignStmt[:=] (List[Lhs] Ident[v]) (List[Rhs] (UnaryExpr[<-] Ident[in]))) \
         (List[Body] (AssignStmt[=] (List[Lhs] Ident[_]) (List[Rhs] Ident[v])))) \
         (CommClause (SendStmt Ident[out] BasicLit[1])) CommClause))"
    );
}

#[test]
fn test_labeled_loop_and_branch() {
    let src = "package p\n\nfunc f() {\nouter:\n\tfor {\n\t\tbreak outer\n\t}\n}\n";
    assert_eq!(
        first(src, NodeKind::LabeledStmt),
        "(LabeledStmt Ident[outer] (ForStmt (BlockStmt (BranchStmt[break] Ident[outer]))))"
    );
}

// ---- Expressions and types ----

#[test]
fn test_composite_literals_and_slices() {
    let src = "package p\n\nvar m = map[string]int{\"a\": 1}\n\nvar a = [...]int{1}\n\nvar s = a[1:2:3]\n";
    let tree = tree(src);
    let lits: Vec<String> = tree
        .find_all(NodeKind::CompositeLit)
        .iter()
        .map(|c| c.to_sexpr())
        .collect();
    assert_eq!(
        lits,
        vec![
            "(CompositeLit (MapType Ident[string] Ident[int]) (List[Elts] (KeyValueExpr BasicLit[\"a\"] BasicLit[1])))",
            "(CompositeLit (ArrayType Ellipsis Ident[int]) (List[Elts] BasicLit[1]))",
        ]
    );
    assert_eq!(
        tree.find(NodeKind::SliceExpr).unwrap().to_sexpr(),
        "(SliceExpr Ident[a] BasicLit[1] BasicLit[2] BasicLit[3])"
    );
}

#[test]
fn test_channel_directions() {
    let src = "package p\n\nfunc f(a chan int, b chan<- int, c <-chan int) {}\n";
    let tree = tree(src);
    let dirs: Vec<_> = tree
        .find_all(NodeKind::ChanType)
        .iter()
        .map(|c| c.label().unwrap_or_default().to_string())
        .collect();
    assert_eq!(dirs, vec!["chan", "chan<-", "<-chan"]);
}

#[test]
fn test_generic_signature() {
    let src = "package p\n\nfunc Map[T any, U any](xs []T) []U {\n\treturn nil\n}\n";
    assert_eq!(
        first(src, NodeKind::FuncType),
        "(FuncType (FieldList (Field (List[Names] Ident[T]) Ident[any]) (Field (List[Names] Ident[U]) Ident[any])) \
         (FieldList (Field (List[Names] Ident[xs]) (ArrayType Ident[T]))) \
         (FieldList (Field (ArrayType Ident[U]))))"
    );
}

#[test]
fn test_generic_instantiation() {
    let src = "package p\n\nvar f = Map[int, string]\n\nvar g = List[int]{}\n";
    let tree = tree(src);
    assert_eq!(
        tree.find(NodeKind::IndexListExpr).unwrap().to_sexpr(),
        "(IndexListExpr Ident[Map] (List[Indices] Ident[int] Ident[string]))"
    );
    assert_eq!(
        tree.find(NodeKind::CompositeLit).unwrap().to_sexpr(),
        "(CompositeLit (IndexExpr Ident[List] Ident[int]))"
    );
}

// ---- Declarations and comments ----

#[test]
fn test_struct_fields_with_doc_tag_and_comment() {
    let src = "package p\n\ntype T struct {\n\
               \t// X doc.\n\
               \tX int `json:\"x\"`\n\
               \tY, Z string // trailing\n\
               \t*Embedded\n}\n";
    assert_eq!(
        first(src, NodeKind::StructType),
        "(StructType (FieldList \
         (Field (CommentGroup Comment[// X doc.]) (List[Names] Ident[X]) Ident[int] BasicLit[`json:\"x\"`]) \
         (Field (List[Names] Ident[Y] Ident[Z]) Ident[string] (CommentGroup Comment[// trailing])) \
         (Field (StarExpr Ident[Embedded]))))"
    );
}

#[test]
fn test_interface_elements() {
    let src = "package p\n\ntype S interface {\n\
               \t// Area doc.\n\
               \tArea() float64\n\
               \tfmt.Stringer\n\
               \t~int | ~string\n}\n";
    assert_eq!(
        first(src, NodeKind::InterfaceType),
        "(InterfaceType (FieldList \
         (Field (CommentGroup Comment[// Area doc.]) (List[Names] Ident[Area]) (FuncType FieldList (FieldList (Field Ident[float64])))) \
         (Field (SelectorExpr Ident[fmt] Ident[Stringer])) \
         (Field (BinaryExpr[|] (UnaryExpr[~] Ident[int]) (UnaryExpr[~] Ident[string])))))"
    );
}

#[test]
fn test_import_and_value_specs() {
    let src = "package p\n\nimport (\n\t\"fmt\" // print\n\tm \"math\"\n)\n\n\
               const (\n\tA = iota\n\tB\n)\n\ntype Alias = T\n";
    let tree = tree(src);
    let decls: Vec<String> = tree
        .find_all(NodeKind::GenDecl)
        .iter()
        .map(|d| d.to_sexpr())
        .collect();
    assert_eq!(
        decls,
        vec![
            "(GenDecl[import] (List[Specs] (ImportSpec BasicLit[\"fmt\"] (CommentGroup Comment[// print])) \
             (ImportSpec Ident[m] BasicLit[\"math\"])))",
            "(GenDecl[const] (List[Specs] (ValueSpec (List[Names] Ident[A]) (List[Values] Ident[iota])) \
             (ValueSpec (List[Names] Ident[B]))))",
            "(GenDecl[type] (List[Specs] (TypeSpec[=] Ident[Alias] Ident[T])))",
        ]
    );
}

#[test]
fn test_each_comment_group_appears_once() {
    let src = "// Package p doc.\npackage p\n\n// F doc.\nfunc F() {} // after\n\n// free floating\n\nvar v = 1\n";
    let tree = tree(src);
    assert_eq!(
        tree.to_sexpr(),
        "(File (CommentGroup Comment[// Package p doc.]) Ident[p] \
         (List[Decls] (FuncDecl (CommentGroup Comment[// F doc.]) Ident[F] (FuncType FieldList) BlockStmt) \
         (GenDecl[var] (List[Specs] (ValueSpec (List[Names] Ident[v]) (List[Values] BasicLit[1]))))) \
         (List[Comments] (CommentGroup Comment[// after]) (CommentGroup Comment[// free floating])))"
    );
}

#[test]
fn test_adjacent_comment_lines_form_one_group() {
    let src = "package p\n\n// one\n// two\n\n// three\nfunc F() {}\n";
    let tree = tree(src);
    let groups: Vec<usize> = tree
        .find_all(NodeKind::CommentGroup)
        .iter()
        .map(|g| g.children.len())
        .collect();
    // "one two" is free-floating (blank line before F); "three" is F's doc.
    assert_eq!(groups.len(), 2);
    assert!(groups.contains(&2));
    let func = tree.find(NodeKind::FuncDecl).unwrap();
    assert_eq!(func.children[0].to_sexpr(), "(CommentGroup Comment[// three])");
}

#[test]
fn test_reference_fixture_has_no_bad_nodes() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/go/reference.go");
    let tree = Normalizer::new().parse_file(&path).unwrap();
    for kind in [NodeKind::BadExpr, NodeKind::BadStmt, NodeKind::BadDecl] {
        assert!(tree.find(kind).is_none(), "unexpected {kind}");
    }
    assert!(tree
        .find_all(NodeKind::TypeSpec)
        .iter()
        .any(|t| t.label() == Some("=")));
    assert_eq!(tree.children[1].label(), Some("reference"));
}
