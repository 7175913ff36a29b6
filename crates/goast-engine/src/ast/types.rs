//! Source node types: one struct per grammar kind.
//!
//! Field order in every struct is the grammar's field order; the walker visits
//! children in exactly this order.

use super::span::Span;

// ---- Comments and fields ----

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub span: Span,
    /// Raw text including the `//` or `/* */` markers.
    pub text: String,
}

/// Comments separated by at most one line break with no code between them.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentGroup {
    pub span: Span,
    pub list: Vec<Comment>,
}

/// A struct field, interface element, parameter, or result.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub span: Span,
    pub doc: Option<CommentGroup>,
    /// Empty for embedded fields, anonymous parameters and interface embeds.
    pub names: Vec<Ident>,
    pub ty: Expr,
    pub tag: Option<BasicLit>,
    pub comment: Option<CommentGroup>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldList {
    pub span: Span,
    pub list: Vec<Field>,
}

// ---- Expressions and types ----

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Bad(BadExpr),
    Ident(Ident),
    BasicLit(BasicLit),
    Ellipsis(Box<Ellipsis>),
    FuncLit(Box<FuncLit>),
    CompositeLit(Box<CompositeLit>),
    Paren(Box<ParenExpr>),
    Selector(Box<SelectorExpr>),
    Index(Box<IndexExpr>),
    IndexList(Box<IndexListExpr>),
    Slice(Box<SliceExpr>),
    TypeAssert(Box<TypeAssertExpr>),
    Call(Box<CallExpr>),
    Star(Box<StarExpr>),
    Unary(Box<UnaryExpr>),
    Binary(Box<BinaryExpr>),
    KeyValue(Box<KeyValueExpr>),
    ArrayType(Box<ArrayType>),
    StructType(Box<StructType>),
    FuncType(Box<FuncType>),
    InterfaceType(Box<InterfaceType>),
    MapType(Box<MapType>),
    ChanType(Box<ChanType>),
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Bad(n) => n.span,
            Expr::Ident(n) => n.span,
            Expr::BasicLit(n) => n.span,
            Expr::Ellipsis(n) => n.span,
            Expr::FuncLit(n) => n.span,
            Expr::CompositeLit(n) => n.span,
            Expr::Paren(n) => n.span,
            Expr::Selector(n) => n.span,
            Expr::Index(n) => n.span,
            Expr::IndexList(n) => n.span,
            Expr::Slice(n) => n.span,
            Expr::TypeAssert(n) => n.span,
            Expr::Call(n) => n.span,
            Expr::Star(n) => n.span,
            Expr::Unary(n) => n.span,
            Expr::Binary(n) => n.span,
            Expr::KeyValue(n) => n.span,
            Expr::ArrayType(n) => n.span,
            Expr::StructType(n) => n.span,
            Expr::FuncType(n) => n.span,
            Expr::InterfaceType(n) => n.span,
            Expr::MapType(n) => n.span,
            Expr::ChanType(n) => n.span,
        }
    }
}

/// Placeholder for an expression the parser could not represent.
#[derive(Debug, Clone, PartialEq)]
pub struct BadExpr {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub span: Span,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LitKind {
    Int,
    Float,
    Imag,
    Char,
    String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BasicLit {
    pub span: Span,
    pub kind: LitKind,
    /// Literal source text, quotes included for strings and runes.
    pub value: String,
}

/// `...T` in a variadic parameter, or the `...` length of `[...]T`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipsis {
    pub span: Span,
    pub elt: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncLit {
    pub span: Span,
    pub ty: FuncType,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompositeLit {
    pub span: Span,
    /// Absent for nested literals whose type is implied by the outer one.
    pub ty: Option<Expr>,
    pub elts: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParenExpr {
    pub span: Span,
    pub x: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectorExpr {
    pub span: Span,
    pub x: Expr,
    pub sel: Ident,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpr {
    pub span: Span,
    pub x: Expr,
    pub index: Expr,
}

/// Generic instantiation with two or more type arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexListExpr {
    pub span: Span,
    pub x: Expr,
    pub indices: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliceExpr {
    pub span: Span,
    pub x: Expr,
    pub low: Option<Expr>,
    pub high: Option<Expr>,
    pub max: Option<Expr>,
}

/// `x.(T)`; `ty` is `None` for the `x.(type)` guard of a type switch.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAssertExpr {
    pub span: Span,
    pub x: Expr,
    pub ty: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub span: Span,
    pub fun: Expr,
    pub args: Vec<Expr>,
    /// The last argument is spread with `...`.
    pub has_ellipsis: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StarExpr {
    pub span: Span,
    pub x: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub span: Span,
    pub op: String,
    pub x: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub span: Span,
    pub x: Expr,
    pub op: String,
    pub y: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyValueExpr {
    pub span: Span,
    pub key: Expr,
    pub value: Expr,
}

/// `[N]T`, `[...]T`, or (with `len` absent) the slice type `[]T`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub span: Span,
    pub len: Option<Expr>,
    pub elt: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructType {
    pub span: Span,
    pub fields: FieldList,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncType {
    pub span: Span,
    pub type_params: Option<FieldList>,
    pub params: FieldList,
    pub results: Option<FieldList>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceType {
    pub span: Span,
    pub methods: FieldList,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapType {
    pub span: Span,
    pub key: Expr,
    pub value: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    Both,
    Send,
    Recv,
}

impl ChanDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChanDir::Both => "chan",
            ChanDir::Send => "chan<-",
            ChanDir::Recv => "<-chan",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChanType {
    pub span: Span,
    pub dir: ChanDir,
    pub value: Expr,
}

// ---- Statements ----

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Bad(BadStmt),
    Decl(Box<DeclStmt>),
    Empty(EmptyStmt),
    Labeled(Box<LabeledStmt>),
    Expr(Box<ExprStmt>),
    Send(Box<SendStmt>),
    IncDec(Box<IncDecStmt>),
    Assign(Box<AssignStmt>),
    Go(Box<GoStmt>),
    Defer(Box<DeferStmt>),
    Return(Box<ReturnStmt>),
    Branch(Box<BranchStmt>),
    Block(Box<BlockStmt>),
    If(Box<IfStmt>),
    CaseClause(Box<CaseClause>),
    Switch(Box<SwitchStmt>),
    TypeSwitch(Box<TypeSwitchStmt>),
    CommClause(Box<CommClause>),
    Select(Box<SelectStmt>),
    For(Box<ForStmt>),
    Range(Box<RangeStmt>),
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Bad(n) => n.span,
            Stmt::Decl(n) => n.span,
            Stmt::Empty(n) => n.span,
            Stmt::Labeled(n) => n.span,
            Stmt::Expr(n) => n.span,
            Stmt::Send(n) => n.span,
            Stmt::IncDec(n) => n.span,
            Stmt::Assign(n) => n.span,
            Stmt::Go(n) => n.span,
            Stmt::Defer(n) => n.span,
            Stmt::Return(n) => n.span,
            Stmt::Branch(n) => n.span,
            Stmt::Block(n) => n.span,
            Stmt::If(n) => n.span,
            Stmt::CaseClause(n) => n.span,
            Stmt::Switch(n) => n.span,
            Stmt::TypeSwitch(n) => n.span,
            Stmt::CommClause(n) => n.span,
            Stmt::Select(n) => n.span,
            Stmt::For(n) => n.span,
            Stmt::Range(n) => n.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BadStmt {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeclStmt {
    pub span: Span,
    pub decl: Decl,
}

/// Explicit `;`, or the implicit statement after a trailing label.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyStmt {
    pub span: Span,
    pub implicit: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledStmt {
    pub span: Span,
    pub label: Ident,
    pub stmt: Stmt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    pub span: Span,
    pub x: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SendStmt {
    pub span: Span,
    pub chan: Expr,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IncDecStmt {
    pub span: Span,
    pub x: Expr,
    /// `++` or `--`.
    pub tok: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub span: Span,
    pub lhs: Vec<Expr>,
    /// `=`, `:=`, or an op-assign such as `+=`.
    pub tok: String,
    pub rhs: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoStmt {
    pub span: Span,
    pub call: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeferStmt {
    pub span: Span,
    pub call: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub span: Span,
    pub results: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BranchStmt {
    pub span: Span,
    /// `break`, `continue`, `goto`, or `fallthrough`.
    pub tok: String,
    pub label: Option<Ident>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub span: Span,
    pub list: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub span: Span,
    pub init: Option<Stmt>,
    pub cond: Expr,
    pub body: BlockStmt,
    /// Either a `Stmt::Block` or a nested `Stmt::If`.
    pub else_branch: Option<Stmt>,
}

/// A `case`/`default` of an expression or type switch; `list` is empty for
/// `default`.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseClause {
    pub span: Span,
    pub list: Vec<Expr>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStmt {
    pub span: Span,
    pub init: Option<Stmt>,
    pub tag: Option<Expr>,
    /// Holds only `Stmt::CaseClause` entries.
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeSwitchStmt {
    pub span: Span,
    pub init: Option<Stmt>,
    /// `x := y.(type)` as an `AssignStmt`, or `y.(type)` as an `ExprStmt`.
    pub assign: Stmt,
    pub body: BlockStmt,
}

/// A `case`/`default` of a select; `comm` is absent for `default`.
#[derive(Debug, Clone, PartialEq)]
pub struct CommClause {
    pub span: Span,
    pub comm: Option<Stmt>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectStmt {
    pub span: Span,
    /// Holds only `Stmt::CommClause` entries.
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub span: Span,
    pub init: Option<Stmt>,
    pub cond: Option<Expr>,
    pub post: Option<Stmt>,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeStmt {
    pub span: Span,
    pub key: Option<Expr>,
    pub value: Option<Expr>,
    /// `=` or `:=`; absent for `for range x`.
    pub tok: Option<String>,
    pub x: Expr,
    pub body: BlockStmt,
}

// ---- Declarations ----

#[derive(Debug, Clone, PartialEq)]
pub enum Spec {
    Import(Box<ImportSpec>),
    Value(Box<ValueSpec>),
    Type(Box<TypeSpec>),
}

impl Spec {
    pub fn span(&self) -> Span {
        match self {
            Spec::Import(n) => n.span,
            Spec::Value(n) => n.span,
            Spec::Type(n) => n.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportSpec {
    pub span: Span,
    pub doc: Option<CommentGroup>,
    /// Local name, `.` or `_`.
    pub name: Option<Ident>,
    pub path: BasicLit,
    pub comment: Option<CommentGroup>,
}

/// A `const` or `var` spec.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSpec {
    pub span: Span,
    pub doc: Option<CommentGroup>,
    pub names: Vec<Ident>,
    pub ty: Option<Expr>,
    pub values: Vec<Expr>,
    pub comment: Option<CommentGroup>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    pub span: Span,
    pub doc: Option<CommentGroup>,
    pub name: Ident,
    pub type_params: Option<FieldList>,
    /// `type A = B` alias form.
    pub assign: bool,
    pub ty: Expr,
    pub comment: Option<CommentGroup>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Bad(BadDecl),
    Gen(Box<GenDecl>),
    Func(Box<FuncDecl>),
}

impl Decl {
    pub fn span(&self) -> Span {
        match self {
            Decl::Bad(n) => n.span,
            Decl::Gen(n) => n.span,
            Decl::Func(n) => n.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BadDecl {
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclToken {
    Import,
    Const,
    Var,
    Type,
}

impl DeclToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclToken::Import => "import",
            DeclToken::Const => "const",
            DeclToken::Var => "var",
            DeclToken::Type => "type",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenDecl {
    pub span: Span,
    pub doc: Option<CommentGroup>,
    pub tok: DeclToken,
    pub specs: Vec<Spec>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub span: Span,
    pub doc: Option<CommentGroup>,
    /// Receiver list of a method; absent for plain functions.
    pub recv: Option<FieldList>,
    pub name: Ident,
    pub ty: FuncType,
    /// Absent for external (assembly-backed) declarations.
    pub body: Option<BlockStmt>,
}

// ---- Files and packages ----

#[derive(Debug, Clone, PartialEq)]
pub struct File {
    pub span: Span,
    pub doc: Option<CommentGroup>,
    /// The package clause name.
    pub name: Ident,
    pub decls: Vec<Decl>,
    /// Comment groups not attached as a doc or line comment elsewhere.
    pub comments: Vec<CommentGroup>,
}

/// Files sharing one package clause, in file-name order.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub span: Span,
    pub name: String,
    pub files: Vec<File>,
}
