//! Lowering of a tree-sitter-go concrete tree into the typed [`crate::ast`].
//!
//! The input tree must be free of ERROR/MISSING nodes and within the parser's
//! nesting limit (see [`super::syntax_check`]). Concrete kinds without a counterpart in the
//! closed grammar become `BadExpr`/`BadStmt`/`BadDecl`.

use std::path::Path;

use goast_core::errors::ParseError;
use tree_sitter::Node as TsNode;

use crate::ast::*;
use crate::stack;

use super::comments::CommentIndex;

/// Single-use lowering context for one file.
pub struct Lowerer<'s> {
    source: &'s [u8],
    base: u32,
    comments: CommentIndex,
}

impl<'s> Lowerer<'s> {
    pub fn new(root: TsNode, source: &'s [u8], base: u32) -> Self {
        Self {
            source,
            base,
            comments: CommentIndex::build(root, source, base),
        }
    }

    /// Lower a `source_file` node.
    pub fn lower_file(mut self, root: TsNode, path: &Path) -> Result<File, ParseError> {
        let top = named(root);
        let Some(clause) = top.iter().copied().find(|n| n.kind() == "package_clause") else {
            return Err(missing_package(root, path));
        };
        let Some(name_node) = named(clause).into_iter().next() else {
            return Err(missing_package(clause, path));
        };

        let doc = self.comments.take_doc(clause);
        let name = self.ident(name_node);
        let decls = top
            .into_iter()
            .filter(|n| n.kind() != "package_clause")
            .map(|n| self.lower_decl(n))
            .collect();
        let span = self.span(root);

        Ok(File {
            span,
            doc,
            name,
            decls,
            comments: self.comments.into_remaining(),
        })
    }

    // ---- Declarations ----

    fn lower_decl(&mut self, node: TsNode) -> Decl {
        match node.kind() {
            "function_declaration" | "method_declaration" => {
                Decl::Func(Box::new(self.lower_func_decl(node)))
            }
            "import_declaration" => Decl::Gen(Box::new(self.lower_gen_decl(node, DeclToken::Import))),
            "const_declaration" => Decl::Gen(Box::new(self.lower_gen_decl(node, DeclToken::Const))),
            "var_declaration" => Decl::Gen(Box::new(self.lower_gen_decl(node, DeclToken::Var))),
            "type_declaration" => Decl::Gen(Box::new(self.lower_gen_decl(node, DeclToken::Type))),
            kind => {
                tracing::warn!(kind, "no declaration form for top-level node");
                Decl::Bad(BadDecl { span: self.span(node) })
            }
        }
    }

    fn lower_func_decl(&mut self, node: TsNode) -> FuncDecl {
        let doc = self.comments.take_doc(node);
        let recv = field(node, "receiver").map(|r| self.lower_params(r));
        let name = self.ident_field(node, "name");
        let ty = self.lower_signature(node, self.pos(node.start_byte()));
        let body = field(node, "body").map(|b| self.lower_block(b));
        FuncDecl {
            span: self.span(node),
            doc,
            recv,
            name,
            ty,
            body,
        }
    }

    fn lower_gen_decl(&mut self, node: TsNode, tok: DeclToken) -> GenDecl {
        let doc = self.comments.take_doc(node);
        let specs = spec_nodes(node)
            .into_iter()
            .map(|s| self.lower_spec(s, tok))
            .collect();
        GenDecl {
            span: self.span(node),
            doc,
            tok,
            specs,
        }
    }

    fn lower_spec(&mut self, node: TsNode, tok: DeclToken) -> Spec {
        let doc = self.comments.take_doc(node);
        let span = self.span(node);
        match tok {
            DeclToken::Import => {
                let name = field(node, "name").map(|n| self.ident(n));
                let path = match field(node, "path") {
                    Some(p) => self.basic_lit(p),
                    None => BasicLit {
                        span,
                        kind: LitKind::String,
                        value: String::new(),
                    },
                };
                let comment = self.comments.take_line_comment(node);
                Spec::Import(Box::new(ImportSpec {
                    span,
                    doc,
                    name,
                    path,
                    comment,
                }))
            }
            DeclToken::Const | DeclToken::Var => {
                let names = fields(node, "name").into_iter().map(|n| self.ident(n)).collect();
                let ty = field(node, "type").map(|t| self.lower_expr(t));
                let values = field(node, "value")
                    .map(|v| self.exprs(v))
                    .unwrap_or_default();
                let comment = self.comments.take_line_comment(node);
                Spec::Value(Box::new(ValueSpec {
                    span,
                    doc,
                    names,
                    ty,
                    values,
                    comment,
                }))
            }
            DeclToken::Type => {
                let name = self.ident_field(node, "name");
                let type_params = field(node, "type_parameters").map(|p| self.lower_params(p));
                let ty = self.expr_field(node, "type");
                let comment = self.comments.take_line_comment(node);
                Spec::Type(Box::new(TypeSpec {
                    span,
                    doc,
                    name,
                    type_params,
                    assign: node.kind() == "type_alias",
                    ty,
                    comment,
                }))
            }
        }
    }

    // ---- Signatures and field lists ----

    /// Function type from the `type_parameters`/`parameters`/`result` fields of
    /// a declaration, literal, function type or interface method.
    fn lower_signature(&mut self, node: TsNode, start: u32) -> FuncType {
        let type_params = field(node, "type_parameters").map(|p| self.lower_params(p));
        let params = match field(node, "parameters") {
            Some(p) => self.lower_params(p),
            None => FieldList {
                span: self.span(node),
                list: Vec::new(),
            },
        };
        let results = field(node, "result").map(|r| self.lower_result(r));
        let end = results.as_ref().map_or(params.span.end, |r| r.span.end);
        FuncType {
            span: Span::new(start, end),
            type_params,
            params,
            results,
        }
    }

    /// `parameter_list` or `type_parameter_list`.
    fn lower_params(&mut self, node: TsNode) -> FieldList {
        let list = named(node)
            .into_iter()
            .map(|p| {
                let names = fields(p, "name").into_iter().map(|n| self.ident(n)).collect();
                let ty = self.expr_field(p, "type");
                let ty = match token(p, &["..."]) {
                    Some(dots) if p.kind() == "variadic_parameter_declaration" => {
                        Expr::Ellipsis(Box::new(Ellipsis {
                            span: Span::new(self.pos(dots.start_byte()), ty.span().end),
                            elt: Some(ty),
                        }))
                    }
                    _ => ty,
                };
                Field {
                    span: self.span(p),
                    doc: None,
                    names,
                    ty,
                    tag: None,
                    comment: None,
                }
            })
            .collect();
        FieldList {
            span: self.span(node),
            list,
        }
    }

    /// A result is either a parenthesized list or a single bare type.
    fn lower_result(&mut self, node: TsNode) -> FieldList {
        if node.kind() == "parameter_list" {
            return self.lower_params(node);
        }
        let span = self.span(node);
        FieldList {
            span,
            list: vec![Field {
                span,
                doc: None,
                names: Vec::new(),
                ty: self.lower_expr(node),
                tag: None,
                comment: None,
            }],
        }
    }

    fn lower_struct_fields(&mut self, node: TsNode) -> FieldList {
        let list = named(node)
            .into_iter()
            .map(|f| {
                let doc = self.comments.take_doc(f);
                let names: Vec<Ident> =
                    fields(f, "name").into_iter().map(|n| self.ident(n)).collect();
                let mut ty = self.expr_field(f, "type");
                if names.is_empty() {
                    if let Some(star) = token(f, &["*"]) {
                        ty = Expr::Star(Box::new(StarExpr {
                            span: Span::new(self.pos(star.start_byte()), ty.span().end),
                            x: ty,
                        }));
                    }
                }
                let tag = field(f, "tag").map(|t| self.basic_lit(t));
                let comment = self.comments.take_line_comment(f);
                Field {
                    span: self.span(f),
                    doc,
                    names,
                    ty,
                    tag,
                    comment,
                }
            })
            .collect();
        FieldList {
            span: self.span(node),
            list,
        }
    }

    fn lower_interface(&mut self, node: TsNode) -> InterfaceType {
        let list = named(node)
            .into_iter()
            .map(|elem| {
                let doc = self.comments.take_doc(elem);
                let (names, ty) = match elem.kind() {
                    "method_elem" | "method_spec" => {
                        let name = self.ident_field(elem, "name");
                        let start = field(elem, "parameters")
                            .map_or(self.pos(elem.start_byte()), |p| self.pos(p.start_byte()));
                        let sig = self.lower_signature(elem, start);
                        (vec![name], Expr::FuncType(Box::new(sig)))
                    }
                    _ => (Vec::new(), self.lower_expr(elem)),
                };
                let comment = self.comments.take_line_comment(elem);
                Field {
                    span: self.span(elem),
                    doc,
                    names,
                    ty,
                    tag: None,
                    comment,
                }
            })
            .collect();
        InterfaceType {
            span: self.span(node),
            methods: FieldList {
                span: self.brace_span(node),
                list,
            },
        }
    }

    // ---- Statements ----

    fn lower_block(&mut self, node: TsNode) -> BlockStmt {
        let list = statement_nodes(node, &[])
            .into_iter()
            .map(|s| self.lower_stmt(s))
            .collect();
        BlockStmt {
            span: self.span(node),
            list,
        }
    }

    fn lower_stmt(&mut self, node: TsNode) -> Stmt {
        stack::with_headroom(|| self.lower_stmt_node(node))
    }

    fn lower_stmt_node(&mut self, node: TsNode) -> Stmt {
        let span = self.span(node);
        match node.kind() {
            "expression_statement" => Stmt::Expr(Box::new(ExprStmt {
                span,
                x: self.first_expr(node),
            })),
            "send_statement" => Stmt::Send(Box::new(SendStmt {
                span,
                chan: self.expr_field(node, "channel"),
                value: self.expr_field(node, "value"),
            })),
            "inc_statement" | "dec_statement" => Stmt::IncDec(Box::new(IncDecStmt {
                span,
                x: self.first_expr(node),
                tok: if node.kind() == "inc_statement" { "++" } else { "--" }.to_string(),
            })),
            "assignment_statement" | "short_var_declaration" => {
                let lhs = field(node, "left").map(|l| self.exprs(l)).unwrap_or_default();
                let tok = match field(node, "operator") {
                    Some(op) => op.kind().to_string(),
                    None if node.kind() == "short_var_declaration" => ":=".to_string(),
                    None => "=".to_string(),
                };
                let rhs = field(node, "right").map(|r| self.exprs(r)).unwrap_or_default();
                Stmt::Assign(Box::new(AssignStmt { span, lhs, tok, rhs }))
            }
            "receive_statement" => {
                let right = self.expr_field(node, "right");
                match field(node, "left") {
                    Some(left) => Stmt::Assign(Box::new(AssignStmt {
                        span,
                        lhs: self.exprs(left),
                        tok: token(node, &["=", ":="]).map_or("=", |t| t.kind()).to_string(),
                        rhs: vec![right],
                    })),
                    None => Stmt::Expr(Box::new(ExprStmt { span, x: right })),
                }
            }
            "labeled_statement" => {
                let label_node = field(node, "label");
                let label = self.ident_field(node, "label");
                let exclude: Vec<TsNode> = label_node.into_iter().collect();
                let stmt = match statement_nodes(node, &exclude).into_iter().next() {
                    Some(s) => self.lower_stmt(s),
                    None => Stmt::Empty(EmptyStmt {
                        span: Span::new(span.end, span.end),
                        implicit: true,
                    }),
                };
                Stmt::Labeled(Box::new(LabeledStmt { span, label, stmt }))
            }
            "empty_statement" => Stmt::Empty(EmptyStmt {
                span,
                implicit: false,
            }),
            "fallthrough_statement" | "break_statement" | "continue_statement"
            | "goto_statement" => Stmt::Branch(Box::new(BranchStmt {
                span,
                tok: node.kind().trim_end_matches("_statement").to_string(),
                label: named(node).into_iter().next().map(|l| self.ident(l)),
            })),
            "return_statement" => {
                let mut results = Vec::new();
                for child in named(node) {
                    results.extend(self.exprs(child));
                }
                Stmt::Return(Box::new(ReturnStmt { span, results }))
            }
            "go_statement" => Stmt::Go(Box::new(GoStmt {
                span,
                call: self.first_expr(node),
            })),
            "defer_statement" => Stmt::Defer(Box::new(DeferStmt {
                span,
                call: self.first_expr(node),
            })),
            "block" => Stmt::Block(Box::new(self.lower_block(node))),
            "if_statement" => Stmt::If(Box::new(self.lower_if(node))),
            "for_statement" => self.lower_for(node),
            "expression_switch_statement" => Stmt::Switch(Box::new(SwitchStmt {
                span,
                init: field(node, "initializer").map(|i| self.lower_stmt(i)),
                tag: field(node, "value").map(|v| self.lower_expr(v)),
                body: self.lower_clauses(node),
            })),
            "type_switch_statement" => Stmt::TypeSwitch(Box::new(self.lower_type_switch(node))),
            "select_statement" => Stmt::Select(Box::new(SelectStmt {
                span,
                body: self.lower_clauses(node),
            })),
            "const_declaration" | "var_declaration" | "type_declaration" => {
                Stmt::Decl(Box::new(DeclStmt {
                    span,
                    decl: self.lower_decl(node),
                }))
            }
            kind => {
                tracing::warn!(kind, "no statement form for node");
                Stmt::Bad(BadStmt { span })
            }
        }
    }

    fn lower_if(&mut self, node: TsNode) -> IfStmt {
        let init = field(node, "initializer").map(|i| self.lower_stmt(i));
        let cond = self.expr_field(node, "condition");
        let body = match field(node, "consequence") {
            Some(b) => self.lower_block(b),
            None => self.empty_block(node),
        };
        let else_branch = field(node, "alternative").map(|a| self.lower_stmt(a));
        IfStmt {
            span: self.span(node),
            init,
            cond,
            body,
            else_branch,
        }
    }

    fn lower_for(&mut self, node: TsNode) -> Stmt {
        let span = self.span(node);
        let body_node = field(node, "body");
        let header = named(node)
            .into_iter()
            .find(|c| Some(c.id()) != body_node.map(|b| b.id()));
        let body = match body_node {
            Some(b) => self.lower_block(b),
            None => self.empty_block(node),
        };

        match header {
            Some(h) if h.kind() == "range_clause" => {
                let mut targets = field(h, "left")
                    .map(|l| self.exprs(l))
                    .unwrap_or_default()
                    .into_iter();
                let key = targets.next();
                let value = targets.next();
                let tok = token(h, &["=", ":="]).map(|t| t.kind().to_string());
                let x = self.expr_field(h, "right");
                Stmt::Range(Box::new(RangeStmt {
                    span,
                    key,
                    value,
                    tok,
                    x,
                    body,
                }))
            }
            Some(h) if h.kind() == "for_clause" => Stmt::For(Box::new(ForStmt {
                span,
                init: field(h, "initializer").map(|i| self.lower_stmt(i)),
                cond: field(h, "condition").map(|c| self.lower_expr(c)),
                post: field(h, "update").map(|u| self.lower_stmt(u)),
                body,
            })),
            Some(cond) => Stmt::For(Box::new(ForStmt {
                span,
                init: None,
                cond: Some(self.lower_expr(cond)),
                post: None,
                body,
            })),
            None => Stmt::For(Box::new(ForStmt {
                span,
                init: None,
                cond: None,
                post: None,
                body,
            })),
        }
    }

    fn lower_type_switch(&mut self, node: TsNode) -> TypeSwitchStmt {
        let init = field(node, "initializer").map(|i| self.lower_stmt(i));
        let value = self.expr_field(node, "value");
        let value_span = value.span();
        let guard_end = type_guard_close(node).map_or(value_span.end, |c| self.pos(c.end_byte()));
        let guard = Expr::TypeAssert(Box::new(TypeAssertExpr {
            span: Span::new(value_span.start, guard_end),
            x: value,
            ty: None,
        }));
        let assign = match field(node, "alias") {
            Some(alias) => Stmt::Assign(Box::new(AssignStmt {
                span: Span::new(self.pos(alias.start_byte()), guard_end),
                lhs: self.exprs(alias),
                tok: ":=".to_string(),
                rhs: vec![guard],
            })),
            None => Stmt::Expr(Box::new(ExprStmt {
                span: guard.span(),
                x: guard,
            })),
        };
        TypeSwitchStmt {
            span: self.span(node),
            init,
            assign,
            body: self.lower_clauses(node),
        }
    }

    /// The `{ case ... }` body of a switch or select, as a block of clauses.
    fn lower_clauses(&mut self, node: TsNode) -> BlockStmt {
        let list = named(node)
            .into_iter()
            .filter(|c| {
                matches!(
                    c.kind(),
                    "expression_case" | "type_case" | "default_case" | "communication_case"
                )
            })
            .map(|c| self.lower_clause(node, c))
            .collect();
        BlockStmt {
            span: self.brace_span(node),
            list,
        }
    }

    fn lower_clause(&mut self, owner: TsNode, clause: TsNode) -> Stmt {
        let span = self.span(clause);
        let in_select = owner.kind() == "select_statement";

        if in_select {
            let comm_node = field(clause, "communication");
            let comm = comm_node.map(|c| self.lower_stmt(c));
            let exclude: Vec<TsNode> = comm_node.into_iter().collect();
            let body = self.lower_stmts(statement_nodes(clause, &exclude));
            return Stmt::CommClause(Box::new(CommClause { span, comm, body }));
        }

        let mut exclude = fields(clause, "value");
        exclude.extend(fields(clause, "type"));
        let mut list = Vec::new();
        for case in &exclude {
            list.extend(self.exprs(*case));
        }
        let body = self.lower_stmts(statement_nodes(clause, &exclude));
        Stmt::CaseClause(Box::new(CaseClause { span, list, body }))
    }

    fn lower_stmts(&mut self, nodes: Vec<TsNode>) -> Vec<Stmt> {
        nodes.into_iter().map(|s| self.lower_stmt(s)).collect()
    }

    // ---- Expressions and types ----

    fn lower_expr(&mut self, node: TsNode) -> Expr {
        stack::with_headroom(|| self.lower_expr_node(node))
    }

    fn lower_expr_node(&mut self, node: TsNode) -> Expr {
        let span = self.span(node);
        match node.kind() {
            "identifier" | "field_identifier" | "package_identifier" | "type_identifier"
            | "label_name" | "blank_identifier" | "dot" | "nil" | "true" | "false" | "iota" => {
                Expr::Ident(self.ident(node))
            }
            "int_literal" | "float_literal" | "imaginary_literal" | "rune_literal"
            | "interpreted_string_literal" | "raw_string_literal" => {
                Expr::BasicLit(self.basic_lit(node))
            }
            "parenthesized_expression" | "parenthesized_type" => Expr::Paren(Box::new(ParenExpr {
                span,
                x: self.first_expr(node),
            })),
            "func_literal" => {
                let ty = self.lower_signature(node, span.start);
                let body = match field(node, "body") {
                    Some(b) => self.lower_block(b),
                    None => self.empty_block(node),
                };
                Expr::FuncLit(Box::new(FuncLit { span, ty, body }))
            }
            "composite_literal" => {
                let ty = Some(self.expr_field(node, "type"));
                let elts = field(node, "body")
                    .map(|b| self.literal_elements(b))
                    .unwrap_or_default();
                Expr::CompositeLit(Box::new(CompositeLit { span, ty, elts }))
            }
            "literal_value" => Expr::CompositeLit(Box::new(CompositeLit {
                span,
                ty: None,
                elts: self.literal_elements(node),
            })),
            "literal_element" | "variadic_argument" => self.first_expr(node),
            "keyed_element" => {
                let parts = named(node);
                let key = field(node, "key").or_else(|| parts.first().copied());
                let value = field(node, "value").or_else(|| parts.get(1).copied());
                let key = self.lower_opt(key, node);
                let value = self.lower_opt(value, node);
                Expr::KeyValue(Box::new(KeyValueExpr { span, key, value }))
            }
            "selector_expression" => Expr::Selector(Box::new(SelectorExpr {
                span,
                x: self.expr_field(node, "operand"),
                sel: self.ident_field(node, "field"),
            })),
            "index_expression" => {
                let x = self.expr_field(node, "operand");
                let indices = fields(node, "index")
                    .into_iter()
                    .map(|i| self.lower_expr(i))
                    .collect();
                instantiate(span, x, indices)
            }
            "type_instantiation_expression" => {
                let ty_node = field(node, "type");
                let x = self.lower_opt(ty_node, node);
                let indices = named(node)
                    .into_iter()
                    .filter(|c| Some(c.id()) != ty_node.map(|t| t.id()))
                    .map(|c| self.lower_expr(c))
                    .collect();
                instantiate(span, x, indices)
            }
            "generic_type" => {
                let x = self.expr_field(node, "type");
                let indices = field(node, "type_arguments")
                    .map(|a| named(a).into_iter().map(|t| self.lower_expr(t)).collect())
                    .unwrap_or_default();
                instantiate(span, x, indices)
            }
            "slice_expression" => Expr::Slice(Box::new(SliceExpr {
                span,
                x: self.expr_field(node, "operand"),
                low: field(node, "start").map(|n| self.lower_expr(n)),
                high: field(node, "end").map(|n| self.lower_expr(n)),
                max: field(node, "capacity").map(|n| self.lower_expr(n)),
            })),
            "type_assertion_expression" => Expr::TypeAssert(Box::new(TypeAssertExpr {
                span,
                x: self.expr_field(node, "operand"),
                ty: field(node, "type").map(|t| self.lower_expr(t)),
            })),
            "call_expression" => Expr::Call(Box::new(self.lower_call(node))),
            "type_conversion_expression" => Expr::Call(Box::new(CallExpr {
                span,
                fun: self.expr_field(node, "type"),
                args: vec![self.expr_field(node, "operand")],
                has_ellipsis: false,
            })),
            "unary_expression" => {
                let op = field(node, "operator").map_or("", |o| o.kind()).to_string();
                let x = self.expr_field(node, "operand");
                if op == "*" {
                    Expr::Star(Box::new(StarExpr { span, x }))
                } else {
                    Expr::Unary(Box::new(UnaryExpr { span, op, x }))
                }
            }
            "binary_expression" => Expr::Binary(Box::new(BinaryExpr {
                span,
                x: self.expr_field(node, "left"),
                op: field(node, "operator").map_or("", |o| o.kind()).to_string(),
                y: self.expr_field(node, "right"),
            })),
            "negated_type" => Expr::Unary(Box::new(UnaryExpr {
                span,
                op: "~".to_string(),
                x: self.first_expr(node),
            })),
            "type_elem" | "type_constraint" | "constraint_elem" => self.lower_union(node),

            // Types
            "pointer_type" => Expr::Star(Box::new(StarExpr {
                span,
                x: self.first_expr(node),
            })),
            "array_type" => Expr::ArrayType(Box::new(ArrayType {
                span,
                len: Some(self.expr_field(node, "length")),
                elt: self.expr_field(node, "element"),
            })),
            "implicit_length_array_type" => {
                let dots = token(node, &["..."]).map_or(span, |d| self.span(d));
                Expr::ArrayType(Box::new(ArrayType {
                    span,
                    len: Some(Expr::Ellipsis(Box::new(Ellipsis {
                        span: dots,
                        elt: None,
                    }))),
                    elt: self.expr_field(node, "element"),
                }))
            }
            "slice_type" => Expr::ArrayType(Box::new(ArrayType {
                span,
                len: None,
                elt: self.expr_field(node, "element"),
            })),
            "map_type" => Expr::MapType(Box::new(MapType {
                span,
                key: self.expr_field(node, "key"),
                value: self.expr_field(node, "value"),
            })),
            "channel_type" => Expr::ChanType(Box::new(ChanType {
                span,
                dir: chan_dir(node),
                value: self.expr_field(node, "value"),
            })),
            "struct_type" => {
                let fields = match named(node).into_iter().next() {
                    Some(list) => self.lower_struct_fields(list),
                    None => FieldList {
                        span,
                        list: Vec::new(),
                    },
                };
                Expr::StructType(Box::new(StructType { span, fields }))
            }
            "interface_type" => Expr::InterfaceType(Box::new(self.lower_interface(node))),
            "function_type" => Expr::FuncType(Box::new(self.lower_signature(node, span.start))),
            "qualified_type" => Expr::Selector(Box::new(SelectorExpr {
                span,
                x: Expr::Ident(self.ident_field(node, "package")),
                sel: self.ident_field(node, "name"),
            })),
            kind => {
                tracing::warn!(kind, "no expression form for node");
                Expr::Bad(BadExpr { span })
            }
        }
    }

    fn lower_call(&mut self, node: TsNode) -> CallExpr {
        let mut fun = self.expr_field(node, "function");
        if let Some(targs) = field(node, "type_arguments") {
            let indices = named(targs).into_iter().map(|t| self.lower_expr(t)).collect();
            let span = Span::new(fun.span().start, self.pos(targs.end_byte()));
            fun = instantiate(span, fun, indices);
        }

        let mut args = Vec::new();
        let mut has_ellipsis = false;
        if let Some(list) = field(node, "arguments") {
            has_ellipsis = token(list, &["..."]).is_some();
            for arg in named(list) {
                has_ellipsis |= arg.kind() == "variadic_argument";
                args.push(self.lower_expr(arg));
            }
        }
        CallExpr {
            span: self.span(node),
            fun,
            args,
            has_ellipsis,
        }
    }

    /// `A | ~B | C` folds left into `BinaryExpr("|")`, as Go represents unions.
    fn lower_union(&mut self, node: TsNode) -> Expr {
        let terms: Vec<Expr> = named(node).into_iter().map(|t| self.lower_expr(t)).collect();
        let mut terms = terms.into_iter();
        let Some(first) = terms.next() else {
            return self.bad_expr(node);
        };
        terms.fold(first, |x, y| {
            Expr::Binary(Box::new(BinaryExpr {
                span: Span::cover(x.span(), y.span()),
                x,
                op: "|".to_string(),
                y,
            }))
        })
    }

    fn literal_elements(&mut self, node: TsNode) -> Vec<Expr> {
        named(node).into_iter().map(|e| self.lower_expr(e)).collect()
    }

    // ---- Helpers ----

    fn pos(&self, byte: usize) -> u32 {
        self.base + byte as u32
    }

    fn span(&self, node: TsNode) -> Span {
        Span::new(self.pos(node.start_byte()), self.pos(node.end_byte()))
    }

    /// Span from a node's `{` to its `}`, or the whole node without braces.
    fn brace_span(&self, node: TsNode) -> Span {
        let open = token(node, &["{"]);
        let close = last_token(node, "}");
        match (open, close) {
            (Some(o), Some(c)) => Span::new(self.pos(o.start_byte()), self.pos(c.end_byte())),
            _ => self.span(node),
        }
    }

    fn text(&self, node: TsNode) -> String {
        String::from_utf8_lossy(&self.source[node.byte_range()]).into_owned()
    }

    fn ident(&self, node: TsNode) -> Ident {
        Ident {
            span: self.span(node),
            name: self.text(node),
        }
    }

    fn basic_lit(&self, node: TsNode) -> BasicLit {
        let kind = match node.kind() {
            "int_literal" => LitKind::Int,
            "float_literal" => LitKind::Float,
            "imaginary_literal" => LitKind::Imag,
            "rune_literal" => LitKind::Char,
            _ => LitKind::String,
        };
        BasicLit {
            span: self.span(node),
            kind,
            value: self.text(node),
        }
    }

    fn bad_expr(&self, node: TsNode) -> Expr {
        Expr::Bad(BadExpr {
            span: self.span(node),
        })
    }

    fn empty_block(&self, node: TsNode) -> BlockStmt {
        let end = self.pos(node.end_byte());
        BlockStmt {
            span: Span::new(end, end),
            list: Vec::new(),
        }
    }

    fn ident_field(&self, node: TsNode, name: &str) -> Ident {
        match field(node, name) {
            Some(n) => self.ident(n),
            None => {
                tracing::warn!(kind = node.kind(), field = name, "missing identifier field");
                let start = self.pos(node.start_byte());
                Ident {
                    span: Span::new(start, start),
                    name: String::new(),
                }
            }
        }
    }

    fn expr_field(&mut self, node: TsNode, name: &str) -> Expr {
        let child = field(node, name);
        self.lower_opt(child, node)
    }

    fn lower_opt(&mut self, child: Option<TsNode>, owner: TsNode) -> Expr {
        match child {
            Some(c) => self.lower_expr(c),
            None => {
                tracing::warn!(kind = owner.kind(), "missing expression child");
                self.bad_expr(owner)
            }
        }
    }

    fn first_expr(&mut self, node: TsNode) -> Expr {
        let child = named(node).into_iter().next();
        self.lower_opt(child, node)
    }

    /// Elements of an `expression_list`, or the node itself as a single
    /// expression.
    fn exprs(&mut self, node: TsNode) -> Vec<Expr> {
        if node.kind() == "expression_list" {
            named(node).into_iter().map(|e| self.lower_expr(e)).collect()
        } else {
            vec![self.lower_expr(node)]
        }
    }
}

fn missing_package(node: TsNode, path: &Path) -> ParseError {
    let start = node.start_position();
    ParseError::Syntax {
        path: path.to_path_buf(),
        line: start.row as u32 + 1,
        column: start.column as u32 + 1,
        offset: node.start_byte() as u32,
        message: "expected 'package'".to_string(),
    }
}

/// One index is an `IndexExpr`; two or more an `IndexListExpr`.
fn instantiate(span: Span, x: Expr, mut indices: Vec<Expr>) -> Expr {
    if indices.len() == 1 {
        if let Some(index) = indices.pop() {
            return Expr::Index(Box::new(IndexExpr { span, x, index }));
        }
    }
    Expr::IndexList(Box::new(IndexListExpr { span, x, indices }))
}

fn chan_dir(node: TsNode) -> ChanDir {
    let mut cursor = node.walk();
    let arrows: Vec<usize> = node
        .children(&mut cursor)
        .enumerate()
        .filter(|(_, c)| c.kind() == "<-")
        .map(|(i, _)| i)
        .collect();
    match arrows.first() {
        Some(0) => ChanDir::Recv,
        Some(_) => ChanDir::Send,
        None => ChanDir::Both,
    }
}

/// The `)` closing `.(type)` in a type switch header.
fn type_guard_close(node: TsNode) -> Option<TsNode> {
    let mut cursor = node.walk();
    let mut seen_type = false;
    for child in node.children(&mut cursor) {
        if child.kind() == "type" && !child.is_named() {
            seen_type = true;
        } else if seen_type && child.kind() == ")" {
            return Some(child);
        }
    }
    None
}

/// Spec nodes of a declaration, looking through the parenthesized
/// `*_spec_list` wrappers some grammar versions emit.
fn spec_nodes(node: TsNode) -> Vec<TsNode> {
    let mut out = Vec::new();
    for child in named(node) {
        match child.kind() {
            "import_spec_list" | "var_spec_list" | "const_spec_list" | "type_spec_list" => {
                out.extend(spec_nodes(child));
            }
            "import_spec" | "const_spec" | "var_spec" | "type_spec" | "type_alias" => {
                out.push(child)
            }
            _ => {}
        }
    }
    out
}

/// Statement children of a block or clause, skipping `exclude` and looking
/// through `statement_list` wrappers.
fn statement_nodes<'t>(node: TsNode<'t>, exclude: &[TsNode<'t>]) -> Vec<TsNode<'t>> {
    let mut out = Vec::new();
    for child in named(node) {
        if exclude.iter().any(|e| e.id() == child.id()) {
            continue;
        }
        if child.kind() == "statement_list" {
            out.extend(named(child));
        } else {
            out.push(child);
        }
    }
    out
}

/// Named children without comments.
fn named(node: TsNode) -> Vec<TsNode> {
    let mut cursor = node.walk();
    let out = node
        .named_children(&mut cursor)
        .filter(|c| c.kind() != "comment")
        .collect();
    out
}

fn field<'t>(node: TsNode<'t>, name: &str) -> Option<TsNode<'t>> {
    node.child_by_field_name(name)
}

/// Named children under field `name`. Separators inside a `commaSep1` field
/// carry the field too, so anonymous tokens are dropped.
fn fields<'t>(node: TsNode<'t>, name: &str) -> Vec<TsNode<'t>> {
    let mut cursor = node.walk();
    let out = node
        .children_by_field_name(name, &mut cursor)
        .filter(|c| c.is_named() && c.kind() != "comment")
        .collect();
    out
}

/// First anonymous child whose kind is one of `kinds`.
fn token<'t>(node: TsNode<'t>, kinds: &[&str]) -> Option<TsNode<'t>> {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .find(|c| !c.is_named() && kinds.contains(&c.kind()));
    found
}

fn last_token<'t>(node: TsNode<'t>, kind: &str) -> Option<TsNode<'t>> {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .filter(|c| !c.is_named() && c.kind() == kind)
        .last();
    found
}
