//! Depth-first walk over every kind of the closed grammar.
//!
//! Children are visited in grammar field order. Optional children are visited
//! only when present. A sequence that shares its owner with other child slots
//! is wrapped in one synthetic `List` (omitted entirely when empty); the
//! sole-slot containers (`CommentGroup`, `FieldList`, `BlockStmt`, `Package`,
//! `List`) visit their elements directly.

use crate::ast::*;
use crate::stack;

use super::visitor::{Descend, Visitor};

/// Walk `node` and its subtree, driving `visitor`. Returns what the visitor
/// produced when closing `node`, or `None` if it skipped `node`.
///
/// The match below is exhaustive over [`Node`]; a grammar kind added without a
/// traversal rule fails to compile instead of failing at run time.
pub fn walk<V: Visitor + ?Sized>(visitor: &mut V, node: Node<'_>) -> Option<V::Output> {
    stack::with_headroom(|| walk_node(visitor, node))
}

fn walk_node<V: Visitor + ?Sized>(visitor: &mut V, node: Node<'_>) -> Option<V::Output> {
    if visitor.begin_node(node) == Descend::Skip {
        return None;
    }

    match node {
        // ---- Comments and fields ----
        Node::Comment(_) => {}

        Node::CommentGroup(n) => {
            for c in &n.list {
                walk(visitor, Node::Comment(c));
            }
        }

        Node::Field(n) => {
            walk_opt(visitor, n.doc.as_ref().map(Node::CommentGroup));
            walk_list(visitor, ListRole::Names, n.names.iter().map(Node::Ident));
            walk(visitor, Node::from(&n.ty));
            walk_opt(visitor, n.tag.as_ref().map(Node::BasicLit));
            walk_opt(visitor, n.comment.as_ref().map(Node::CommentGroup));
        }

        Node::FieldList(n) => {
            for f in &n.list {
                walk(visitor, Node::Field(f));
            }
        }

        // ---- Expressions ----
        Node::BadExpr(_) | Node::Ident(_) | Node::BasicLit(_) => {}

        Node::Ellipsis(n) => {
            walk_opt(visitor, n.elt.as_ref().map(Node::from));
        }

        Node::FuncLit(n) => {
            walk(visitor, Node::FuncType(&n.ty));
            walk(visitor, Node::BlockStmt(&n.body));
        }

        Node::CompositeLit(n) => {
            walk_opt(visitor, n.ty.as_ref().map(Node::from));
            walk_list(visitor, ListRole::Elts, n.elts.iter().map(Node::from));
        }

        Node::ParenExpr(n) => {
            walk(visitor, Node::from(&n.x));
        }

        Node::SelectorExpr(n) => {
            walk(visitor, Node::from(&n.x));
            walk(visitor, Node::Ident(&n.sel));
        }

        Node::IndexExpr(n) => {
            walk(visitor, Node::from(&n.x));
            walk(visitor, Node::from(&n.index));
        }

        Node::IndexListExpr(n) => {
            walk(visitor, Node::from(&n.x));
            walk_list(visitor, ListRole::Indices, n.indices.iter().map(Node::from));
        }

        Node::SliceExpr(n) => {
            walk(visitor, Node::from(&n.x));
            walk_opt(visitor, n.low.as_ref().map(Node::from));
            walk_opt(visitor, n.high.as_ref().map(Node::from));
            walk_opt(visitor, n.max.as_ref().map(Node::from));
        }

        Node::TypeAssertExpr(n) => {
            walk(visitor, Node::from(&n.x));
            walk_opt(visitor, n.ty.as_ref().map(Node::from));
        }

        Node::CallExpr(n) => {
            walk(visitor, Node::from(&n.fun));
            walk_list(visitor, ListRole::Args, n.args.iter().map(Node::from));
        }

        Node::StarExpr(n) => {
            walk(visitor, Node::from(&n.x));
        }

        Node::UnaryExpr(n) => {
            walk(visitor, Node::from(&n.x));
        }

        Node::BinaryExpr(n) => {
            walk(visitor, Node::from(&n.x));
            walk(visitor, Node::from(&n.y));
        }

        Node::KeyValueExpr(n) => {
            walk(visitor, Node::from(&n.key));
            walk(visitor, Node::from(&n.value));
        }

        // ---- Types ----
        Node::ArrayType(n) => {
            walk_opt(visitor, n.len.as_ref().map(Node::from));
            walk(visitor, Node::from(&n.elt));
        }

        Node::StructType(n) => {
            walk(visitor, Node::FieldList(&n.fields));
        }

        Node::FuncType(n) => {
            walk_opt(visitor, n.type_params.as_ref().map(Node::FieldList));
            walk(visitor, Node::FieldList(&n.params));
            walk_opt(visitor, n.results.as_ref().map(Node::FieldList));
        }

        Node::InterfaceType(n) => {
            walk(visitor, Node::FieldList(&n.methods));
        }

        Node::MapType(n) => {
            walk(visitor, Node::from(&n.key));
            walk(visitor, Node::from(&n.value));
        }

        Node::ChanType(n) => {
            walk(visitor, Node::from(&n.value));
        }

        // ---- Statements ----
        Node::BadStmt(_) | Node::EmptyStmt(_) => {}

        Node::DeclStmt(n) => {
            walk(visitor, Node::from(&n.decl));
        }

        Node::LabeledStmt(n) => {
            walk(visitor, Node::Ident(&n.label));
            walk(visitor, Node::from(&n.stmt));
        }

        Node::ExprStmt(n) => {
            walk(visitor, Node::from(&n.x));
        }

        Node::SendStmt(n) => {
            walk(visitor, Node::from(&n.chan));
            walk(visitor, Node::from(&n.value));
        }

        Node::IncDecStmt(n) => {
            walk(visitor, Node::from(&n.x));
        }

        Node::AssignStmt(n) => {
            walk_list(visitor, ListRole::Lhs, n.lhs.iter().map(Node::from));
            walk_list(visitor, ListRole::Rhs, n.rhs.iter().map(Node::from));
        }

        Node::GoStmt(n) => {
            walk(visitor, Node::from(&n.call));
        }

        Node::DeferStmt(n) => {
            walk(visitor, Node::from(&n.call));
        }

        Node::ReturnStmt(n) => {
            walk_list(visitor, ListRole::Results, n.results.iter().map(Node::from));
        }

        Node::BranchStmt(n) => {
            walk_opt(visitor, n.label.as_ref().map(Node::Ident));
        }

        Node::BlockStmt(n) => {
            for s in &n.list {
                walk(visitor, Node::from(s));
            }
        }

        Node::IfStmt(n) => {
            walk_opt(visitor, n.init.as_ref().map(Node::from));
            walk(visitor, Node::from(&n.cond));
            walk(visitor, Node::BlockStmt(&n.body));
            walk_opt(visitor, n.else_branch.as_ref().map(Node::from));
        }

        Node::CaseClause(n) => {
            walk_list(visitor, ListRole::Cases, n.list.iter().map(Node::from));
            walk_list(visitor, ListRole::Body, n.body.iter().map(Node::from));
        }

        Node::SwitchStmt(n) => {
            walk_opt(visitor, n.init.as_ref().map(Node::from));
            walk_opt(visitor, n.tag.as_ref().map(Node::from));
            walk(visitor, Node::BlockStmt(&n.body));
        }

        Node::TypeSwitchStmt(n) => {
            walk_opt(visitor, n.init.as_ref().map(Node::from));
            walk(visitor, Node::from(&n.assign));
            walk(visitor, Node::BlockStmt(&n.body));
        }

        Node::CommClause(n) => {
            walk_opt(visitor, n.comm.as_ref().map(Node::from));
            walk_list(visitor, ListRole::Body, n.body.iter().map(Node::from));
        }

        Node::SelectStmt(n) => {
            walk(visitor, Node::BlockStmt(&n.body));
        }

        Node::ForStmt(n) => {
            walk_opt(visitor, n.init.as_ref().map(Node::from));
            walk_opt(visitor, n.cond.as_ref().map(Node::from));
            walk_opt(visitor, n.post.as_ref().map(Node::from));
            walk(visitor, Node::BlockStmt(&n.body));
        }

        Node::RangeStmt(n) => {
            walk_opt(visitor, n.key.as_ref().map(Node::from));
            walk_opt(visitor, n.value.as_ref().map(Node::from));
            walk(visitor, Node::from(&n.x));
            walk(visitor, Node::BlockStmt(&n.body));
        }

        // ---- Declarations ----
        Node::ImportSpec(n) => {
            walk_opt(visitor, n.doc.as_ref().map(Node::CommentGroup));
            walk_opt(visitor, n.name.as_ref().map(Node::Ident));
            walk(visitor, Node::BasicLit(&n.path));
            walk_opt(visitor, n.comment.as_ref().map(Node::CommentGroup));
        }

        Node::ValueSpec(n) => {
            walk_opt(visitor, n.doc.as_ref().map(Node::CommentGroup));
            walk_list(visitor, ListRole::Names, n.names.iter().map(Node::Ident));
            walk_opt(visitor, n.ty.as_ref().map(Node::from));
            walk_list(visitor, ListRole::Values, n.values.iter().map(Node::from));
            walk_opt(visitor, n.comment.as_ref().map(Node::CommentGroup));
        }

        Node::TypeSpec(n) => {
            walk_opt(visitor, n.doc.as_ref().map(Node::CommentGroup));
            walk(visitor, Node::Ident(&n.name));
            walk_opt(visitor, n.type_params.as_ref().map(Node::FieldList));
            walk(visitor, Node::from(&n.ty));
            walk_opt(visitor, n.comment.as_ref().map(Node::CommentGroup));
        }

        Node::BadDecl(_) => {}

        Node::GenDecl(n) => {
            walk_opt(visitor, n.doc.as_ref().map(Node::CommentGroup));
            walk_list(visitor, ListRole::Specs, n.specs.iter().map(Node::from));
        }

        Node::FuncDecl(n) => {
            walk_opt(visitor, n.doc.as_ref().map(Node::CommentGroup));
            walk_opt(visitor, n.recv.as_ref().map(Node::FieldList));
            walk(visitor, Node::Ident(&n.name));
            walk(visitor, Node::FuncType(&n.ty));
            walk_opt(visitor, n.body.as_ref().map(Node::BlockStmt));
        }

        // ---- Files and packages ----
        Node::File(n) => {
            walk_opt(visitor, n.doc.as_ref().map(Node::CommentGroup));
            walk(visitor, Node::Ident(&n.name));
            walk_list(visitor, ListRole::Decls, n.decls.iter().map(Node::from));
            walk_list(visitor, ListRole::Comments, n.comments.iter().map(Node::CommentGroup));
        }

        Node::Package(n) => {
            for f in &n.files {
                walk(visitor, Node::File(f));
            }
        }

        // ---- Synthetic ----
        Node::List(n) => {
            for item in &n.items {
                walk(visitor, *item);
            }
        }
    }

    visitor.end_node()
}

fn walk_opt<V: Visitor + ?Sized>(visitor: &mut V, node: Option<Node<'_>>) {
    if let Some(node) = node {
        walk(visitor, node);
    }
}

/// Wrap a sequence slot in a synthetic `List` spanning its first to last
/// element. An empty sequence produces nothing.
fn walk_list<'a, V, I>(visitor: &mut V, role: ListRole, items: I)
where
    V: Visitor + ?Sized,
    I: IntoIterator<Item = Node<'a>>,
{
    let items: Vec<Node<'a>> = items.into_iter().collect();
    let span = match (items.first(), items.last()) {
        (Some(first), Some(last)) => Span::cover(first.span(), last.span()),
        _ => return,
    };
    let list = ListNode { role, span, items };
    walk(visitor, Node::List(&list));
}
