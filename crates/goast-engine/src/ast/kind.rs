//! Node kind tags shared by source and uniform nodes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag of a source node kind, or the synthetic `List`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeKind {
    // ---- Comments and fields ----
    Comment,
    CommentGroup,
    Field,
    FieldList,

    // ---- Expressions ----
    BadExpr,
    Ident,
    BasicLit,
    Ellipsis,
    FuncLit,
    CompositeLit,
    ParenExpr,
    SelectorExpr,
    IndexExpr,
    IndexListExpr,
    SliceExpr,
    TypeAssertExpr,
    CallExpr,
    StarExpr,
    UnaryExpr,
    BinaryExpr,
    KeyValueExpr,

    // ---- Types ----
    ArrayType,
    StructType,
    FuncType,
    InterfaceType,
    MapType,
    ChanType,

    // ---- Statements ----
    BadStmt,
    DeclStmt,
    EmptyStmt,
    LabeledStmt,
    ExprStmt,
    SendStmt,
    IncDecStmt,
    AssignStmt,
    GoStmt,
    DeferStmt,
    ReturnStmt,
    BranchStmt,
    BlockStmt,
    IfStmt,
    CaseClause,
    SwitchStmt,
    TypeSwitchStmt,
    CommClause,
    SelectStmt,
    ForStmt,
    RangeStmt,

    // ---- Declarations ----
    ImportSpec,
    ValueSpec,
    TypeSpec,
    BadDecl,
    GenDecl,
    FuncDecl,

    // ---- Files and packages ----
    File,
    Package,

    // ---- Synthetic ----
    List,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Comment => "Comment",
            NodeKind::CommentGroup => "CommentGroup",
            NodeKind::Field => "Field",
            NodeKind::FieldList => "FieldList",
            NodeKind::BadExpr => "BadExpr",
            NodeKind::Ident => "Ident",
            NodeKind::BasicLit => "BasicLit",
            NodeKind::Ellipsis => "Ellipsis",
            NodeKind::FuncLit => "FuncLit",
            NodeKind::CompositeLit => "CompositeLit",
            NodeKind::ParenExpr => "ParenExpr",
            NodeKind::SelectorExpr => "SelectorExpr",
            NodeKind::IndexExpr => "IndexExpr",
            NodeKind::IndexListExpr => "IndexListExpr",
            NodeKind::SliceExpr => "SliceExpr",
            NodeKind::TypeAssertExpr => "TypeAssertExpr",
            NodeKind::CallExpr => "CallExpr",
            NodeKind::StarExpr => "StarExpr",
            NodeKind::UnaryExpr => "UnaryExpr",
            NodeKind::BinaryExpr => "BinaryExpr",
            NodeKind::KeyValueExpr => "KeyValueExpr",
            NodeKind::ArrayType => "ArrayType",
            NodeKind::StructType => "StructType",
            NodeKind::FuncType => "FuncType",
            NodeKind::InterfaceType => "InterfaceType",
            NodeKind::MapType => "MapType",
            NodeKind::ChanType => "ChanType",
            NodeKind::BadStmt => "BadStmt",
            NodeKind::DeclStmt => "DeclStmt",
            NodeKind::EmptyStmt => "EmptyStmt",
            NodeKind::LabeledStmt => "LabeledStmt",
            NodeKind::ExprStmt => "ExprStmt",
            NodeKind::SendStmt => "SendStmt",
            NodeKind::IncDecStmt => "IncDecStmt",
            NodeKind::AssignStmt => "AssignStmt",
            NodeKind::GoStmt => "GoStmt",
            NodeKind::DeferStmt => "DeferStmt",
            NodeKind::ReturnStmt => "ReturnStmt",
            NodeKind::BranchStmt => "BranchStmt",
            NodeKind::BlockStmt => "BlockStmt",
            NodeKind::IfStmt => "IfStmt",
            NodeKind::CaseClause => "CaseClause",
            NodeKind::SwitchStmt => "SwitchStmt",
            NodeKind::TypeSwitchStmt => "TypeSwitchStmt",
            NodeKind::CommClause => "CommClause",
            NodeKind::SelectStmt => "SelectStmt",
            NodeKind::ForStmt => "ForStmt",
            NodeKind::RangeStmt => "RangeStmt",
            NodeKind::ImportSpec => "ImportSpec",
            NodeKind::ValueSpec => "ValueSpec",
            NodeKind::TypeSpec => "TypeSpec",
            NodeKind::BadDecl => "BadDecl",
            NodeKind::GenDecl => "GenDecl",
            NodeKind::FuncDecl => "FuncDecl",
            NodeKind::File => "File",
            NodeKind::Package => "Package",
            NodeKind::List => "List",
        }
    }

    /// True for the kinds a builder may drop when comments are excluded.
    pub fn is_comment(&self) -> bool {
        matches!(self, NodeKind::Comment | NodeKind::CommentGroup)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic role of a synthetic `List`, carried as the list's label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListRole {
    /// Identifiers declared by a field or value spec.
    Names,
    /// Elements of a composite literal.
    Elts,
    /// Type arguments of a multi-index instantiation.
    Indices,
    /// Call arguments.
    Args,
    /// Assignment targets.
    Lhs,
    /// Assigned values.
    Rhs,
    /// Returned values.
    Results,
    /// Expressions (or types) matched by a case clause.
    Cases,
    /// Statements of a case or comm clause.
    Body,
    /// Initial values of a value spec.
    Values,
    /// Specs of a general declaration.
    Specs,
    /// Top-level declarations of a file.
    Decls,
    /// Free-floating comment groups of a file.
    Comments,
}

impl ListRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListRole::Names => "Names",
            ListRole::Elts => "Elts",
            ListRole::Indices => "Indices",
            ListRole::Args => "Args",
            ListRole::Lhs => "Lhs",
            ListRole::Rhs => "Rhs",
            ListRole::Results => "Results",
            ListRole::Cases => "Cases",
            ListRole::Body => "Body",
            ListRole::Values => "Values",
            ListRole::Specs => "Specs",
            ListRole::Decls => "Decls",
            ListRole::Comments => "Comments",
        }
    }
}

impl fmt::Display for ListRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
