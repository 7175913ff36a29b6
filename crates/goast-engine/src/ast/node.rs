//! Borrowed, kind-tagged view over any source node.

use super::kind::{ListRole, NodeKind};
use super::span::Span;
use super::types::*;

/// A synthetic grouping of sibling nodes that share one parent slot.
///
/// Built by the walker on the fly; never stored in the source tree.
#[derive(Debug, Clone)]
pub struct ListNode<'a> {
    pub role: ListRole,
    pub span: Span,
    pub items: Vec<Node<'a>>,
}

/// One variant per grammar kind, plus the synthetic `List`.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Comment(&'a Comment),
    CommentGroup(&'a CommentGroup),
    Field(&'a Field),
    FieldList(&'a FieldList),

    BadExpr(&'a BadExpr),
    Ident(&'a Ident),
    BasicLit(&'a BasicLit),
    Ellipsis(&'a Ellipsis),
    FuncLit(&'a FuncLit),
    CompositeLit(&'a CompositeLit),
    ParenExpr(&'a ParenExpr),
    SelectorExpr(&'a SelectorExpr),
    IndexExpr(&'a IndexExpr),
    IndexListExpr(&'a IndexListExpr),
    SliceExpr(&'a SliceExpr),
    TypeAssertExpr(&'a TypeAssertExpr),
    CallExpr(&'a CallExpr),
    StarExpr(&'a StarExpr),
    UnaryExpr(&'a UnaryExpr),
    BinaryExpr(&'a BinaryExpr),
    KeyValueExpr(&'a KeyValueExpr),

    ArrayType(&'a ArrayType),
    StructType(&'a StructType),
    FuncType(&'a FuncType),
    InterfaceType(&'a InterfaceType),
    MapType(&'a MapType),
    ChanType(&'a ChanType),

    BadStmt(&'a BadStmt),
    DeclStmt(&'a DeclStmt),
    EmptyStmt(&'a EmptyStmt),
    LabeledStmt(&'a LabeledStmt),
    ExprStmt(&'a ExprStmt),
    SendStmt(&'a SendStmt),
    IncDecStmt(&'a IncDecStmt),
    AssignStmt(&'a AssignStmt),
    GoStmt(&'a GoStmt),
    DeferStmt(&'a DeferStmt),
    ReturnStmt(&'a ReturnStmt),
    BranchStmt(&'a BranchStmt),
    BlockStmt(&'a BlockStmt),
    IfStmt(&'a IfStmt),
    CaseClause(&'a CaseClause),
    SwitchStmt(&'a SwitchStmt),
    TypeSwitchStmt(&'a TypeSwitchStmt),
    CommClause(&'a CommClause),
    SelectStmt(&'a SelectStmt),
    ForStmt(&'a ForStmt),
    RangeStmt(&'a RangeStmt),

    ImportSpec(&'a ImportSpec),
    ValueSpec(&'a ValueSpec),
    TypeSpec(&'a TypeSpec),
    BadDecl(&'a BadDecl),
    GenDecl(&'a GenDecl),
    FuncDecl(&'a FuncDecl),

    File(&'a File),
    Package(&'a Package),

    List(&'a ListNode<'a>),
}

impl<'a> Node<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Comment(_) => NodeKind::Comment,
            Node::CommentGroup(_) => NodeKind::CommentGroup,
            Node::Field(_) => NodeKind::Field,
            Node::FieldList(_) => NodeKind::FieldList,
            Node::BadExpr(_) => NodeKind::BadExpr,
            Node::Ident(_) => NodeKind::Ident,
            Node::BasicLit(_) => NodeKind::BasicLit,
            Node::Ellipsis(_) => NodeKind::Ellipsis,
            Node::FuncLit(_) => NodeKind::FuncLit,
            Node::CompositeLit(_) => NodeKind::CompositeLit,
            Node::ParenExpr(_) => NodeKind::ParenExpr,
            Node::SelectorExpr(_) => NodeKind::SelectorExpr,
            Node::IndexExpr(_) => NodeKind::IndexExpr,
            Node::IndexListExpr(_) => NodeKind::IndexListExpr,
            Node::SliceExpr(_) => NodeKind::SliceExpr,
            Node::TypeAssertExpr(_) => NodeKind::TypeAssertExpr,
            Node::CallExpr(_) => NodeKind::CallExpr,
            Node::StarExpr(_) => NodeKind::StarExpr,
            Node::UnaryExpr(_) => NodeKind::UnaryExpr,
            Node::BinaryExpr(_) => NodeKind::BinaryExpr,
            Node::KeyValueExpr(_) => NodeKind::KeyValueExpr,
            Node::ArrayType(_) => NodeKind::ArrayType,
            Node::StructType(_) => NodeKind::StructType,
            Node::FuncType(_) => NodeKind::FuncType,
            Node::InterfaceType(_) => NodeKind::InterfaceType,
            Node::MapType(_) => NodeKind::MapType,
            Node::ChanType(_) => NodeKind::ChanType,
            Node::BadStmt(_) => NodeKind::BadStmt,
            Node::DeclStmt(_) => NodeKind::DeclStmt,
            Node::EmptyStmt(_) => NodeKind::EmptyStmt,
            Node::LabeledStmt(_) => NodeKind::LabeledStmt,
            Node::ExprStmt(_) => NodeKind::ExprStmt,
            Node::SendStmt(_) => NodeKind::SendStmt,
            Node::IncDecStmt(_) => NodeKind::IncDecStmt,
            Node::AssignStmt(_) => NodeKind::AssignStmt,
            Node::GoStmt(_) => NodeKind::GoStmt,
            Node::DeferStmt(_) => NodeKind::DeferStmt,
            Node::ReturnStmt(_) => NodeKind::ReturnStmt,
            Node::BranchStmt(_) => NodeKind::BranchStmt,
            Node::BlockStmt(_) => NodeKind::BlockStmt,
            Node::IfStmt(_) => NodeKind::IfStmt,
            Node::CaseClause(_) => NodeKind::CaseClause,
            Node::SwitchStmt(_) => NodeKind::SwitchStmt,
            Node::TypeSwitchStmt(_) => NodeKind::TypeSwitchStmt,
            Node::CommClause(_) => NodeKind::CommClause,
            Node::SelectStmt(_) => NodeKind::SelectStmt,
            Node::ForStmt(_) => NodeKind::ForStmt,
            Node::RangeStmt(_) => NodeKind::RangeStmt,
            Node::ImportSpec(_) => NodeKind::ImportSpec,
            Node::ValueSpec(_) => NodeKind::ValueSpec,
            Node::TypeSpec(_) => NodeKind::TypeSpec,
            Node::BadDecl(_) => NodeKind::BadDecl,
            Node::GenDecl(_) => NodeKind::GenDecl,
            Node::FuncDecl(_) => NodeKind::FuncDecl,
            Node::File(_) => NodeKind::File,
            Node::Package(_) => NodeKind::Package,
            Node::List(_) => NodeKind::List,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Node::Comment(n) => n.span,
            Node::CommentGroup(n) => n.span,
            Node::Field(n) => n.span,
            Node::FieldList(n) => n.span,
            Node::BadExpr(n) => n.span,
            Node::Ident(n) => n.span,
            Node::BasicLit(n) => n.span,
            Node::Ellipsis(n) => n.span,
            Node::FuncLit(n) => n.span,
            Node::CompositeLit(n) => n.span,
            Node::ParenExpr(n) => n.span,
            Node::SelectorExpr(n) => n.span,
            Node::IndexExpr(n) => n.span,
            Node::IndexListExpr(n) => n.span,
            Node::SliceExpr(n) => n.span,
            Node::TypeAssertExpr(n) => n.span,
            Node::CallExpr(n) => n.span,
            Node::StarExpr(n) => n.span,
            Node::UnaryExpr(n) => n.span,
            Node::BinaryExpr(n) => n.span,
            Node::KeyValueExpr(n) => n.span,
            Node::ArrayType(n) => n.span,
            Node::StructType(n) => n.span,
            Node::FuncType(n) => n.span,
            Node::InterfaceType(n) => n.span,
            Node::MapType(n) => n.span,
            Node::ChanType(n) => n.span,
            Node::BadStmt(n) => n.span,
            Node::DeclStmt(n) => n.span,
            Node::EmptyStmt(n) => n.span,
            Node::LabeledStmt(n) => n.span,
            Node::ExprStmt(n) => n.span,
            Node::SendStmt(n) => n.span,
            Node::IncDecStmt(n) => n.span,
            Node::AssignStmt(n) => n.span,
            Node::GoStmt(n) => n.span,
            Node::DeferStmt(n) => n.span,
            Node::ReturnStmt(n) => n.span,
            Node::BranchStmt(n) => n.span,
            Node::BlockStmt(n) => n.span,
            Node::IfStmt(n) => n.span,
            Node::CaseClause(n) => n.span,
            Node::SwitchStmt(n) => n.span,
            Node::TypeSwitchStmt(n) => n.span,
            Node::CommClause(n) => n.span,
            Node::SelectStmt(n) => n.span,
            Node::ForStmt(n) => n.span,
            Node::RangeStmt(n) => n.span,
            Node::ImportSpec(n) => n.span,
            Node::ValueSpec(n) => n.span,
            Node::TypeSpec(n) => n.span,
            Node::BadDecl(n) => n.span,
            Node::GenDecl(n) => n.span,
            Node::FuncDecl(n) => n.span,
            Node::File(n) => n.span,
            Node::Package(n) => n.span,
            Node::List(n) => n.span,
        }
    }

    /// Short classifying text carried over to the uniform node: identifier
    /// names, literal text, operator tokens, and list roles.
    pub fn label(&self) -> Option<String> {
        match self {
            Node::Comment(n) => Some(n.text.clone()),
            Node::Ident(n) => Some(n.name.clone()),
            Node::BasicLit(n) => Some(n.value.clone()),
            Node::UnaryExpr(n) => Some(n.op.clone()),
            Node::BinaryExpr(n) => Some(n.op.clone()),
            Node::ChanType(n) => Some(n.dir.as_str().to_string()),
            Node::IncDecStmt(n) => Some(n.tok.clone()),
            Node::AssignStmt(n) => Some(n.tok.clone()),
            Node::BranchStmt(n) => Some(n.tok.clone()),
            Node::RangeStmt(n) => n.tok.clone(),
            Node::TypeSpec(n) if n.assign => Some("=".to_string()),
            Node::GenDecl(n) => Some(n.tok.as_str().to_string()),
            Node::Package(n) => Some(n.name.clone()),
            Node::List(n) => Some(n.role.as_str().to_string()),
            _ => None,
        }
    }
}

impl<'a> From<&'a Expr> for Node<'a> {
    fn from(expr: &'a Expr) -> Self {
        match expr {
            Expr::Bad(n) => Node::BadExpr(n),
            Expr::Ident(n) => Node::Ident(n),
            Expr::BasicLit(n) => Node::BasicLit(n),
            Expr::Ellipsis(n) => Node::Ellipsis(n),
            Expr::FuncLit(n) => Node::FuncLit(n),
            Expr::CompositeLit(n) => Node::CompositeLit(n),
            Expr::Paren(n) => Node::ParenExpr(n),
            Expr::Selector(n) => Node::SelectorExpr(n),
            Expr::Index(n) => Node::IndexExpr(n),
            Expr::IndexList(n) => Node::IndexListExpr(n),
            Expr::Slice(n) => Node::SliceExpr(n),
            Expr::TypeAssert(n) => Node::TypeAssertExpr(n),
            Expr::Call(n) => Node::CallExpr(n),
            Expr::Star(n) => Node::StarExpr(n),
            Expr::Unary(n) => Node::UnaryExpr(n),
            Expr::Binary(n) => Node::BinaryExpr(n),
            Expr::KeyValue(n) => Node::KeyValueExpr(n),
            Expr::ArrayType(n) => Node::ArrayType(n),
            Expr::StructType(n) => Node::StructType(n),
            Expr::FuncType(n) => Node::FuncType(n),
            Expr::InterfaceType(n) => Node::InterfaceType(n),
            Expr::MapType(n) => Node::MapType(n),
            Expr::ChanType(n) => Node::ChanType(n),
        }
    }
}

impl<'a> From<&'a Stmt> for Node<'a> {
    fn from(stmt: &'a Stmt) -> Self {
        match stmt {
            Stmt::Bad(n) => Node::BadStmt(n),
            Stmt::Decl(n) => Node::DeclStmt(n),
            Stmt::Empty(n) => Node::EmptyStmt(n),
            Stmt::Labeled(n) => Node::LabeledStmt(n),
            Stmt::Expr(n) => Node::ExprStmt(n),
            Stmt::Send(n) => Node::SendStmt(n),
            Stmt::IncDec(n) => Node::IncDecStmt(n),
            Stmt::Assign(n) => Node::AssignStmt(n),
            Stmt::Go(n) => Node::GoStmt(n),
            Stmt::Defer(n) => Node::DeferStmt(n),
            Stmt::Return(n) => Node::ReturnStmt(n),
            Stmt::Branch(n) => Node::BranchStmt(n),
            Stmt::Block(n) => Node::BlockStmt(n),
            Stmt::If(n) => Node::IfStmt(n),
            Stmt::CaseClause(n) => Node::CaseClause(n),
            Stmt::Switch(n) => Node::SwitchStmt(n),
            Stmt::TypeSwitch(n) => Node::TypeSwitchStmt(n),
            Stmt::CommClause(n) => Node::CommClause(n),
            Stmt::Select(n) => Node::SelectStmt(n),
            Stmt::For(n) => Node::ForStmt(n),
            Stmt::Range(n) => Node::RangeStmt(n),
        }
    }
}

impl<'a> From<&'a Spec> for Node<'a> {
    fn from(spec: &'a Spec) -> Self {
        match spec {
            Spec::Import(n) => Node::ImportSpec(n),
            Spec::Value(n) => Node::ValueSpec(n),
            Spec::Type(n) => Node::TypeSpec(n),
        }
    }
}

impl<'a> From<&'a Decl> for Node<'a> {
    fn from(decl: &'a Decl) -> Self {
        match decl {
            Decl::Bad(n) => Node::BadDecl(n),
            Decl::Gen(n) => Node::GenDecl(n),
            Decl::Func(n) => Node::FuncDecl(n),
        }
    }
}

impl<'a> From<&'a File> for Node<'a> {
    fn from(file: &'a File) -> Self {
        Node::File(file)
    }
}

impl<'a> From<&'a Package> for Node<'a> {
    fn from(package: &'a Package) -> Self {
        Node::Package(package)
    }
}
