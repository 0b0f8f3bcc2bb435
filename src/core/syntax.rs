//! Closed syntax model consulted by the extraction engine.
//!
//! The Go parser adapter (see `crate::core::parsers::go`) lowers the concrete
//! tree-sitter tree into these types. Only the node kinds the engine actually
//! inspects get their own variant; everything else is kept as
//! [`Expr::Other`] so that traversal can still reach nested calls.
//!
//! ## Lowering examples
//!
//! ```text
//! import f "fmt"                  → Decl::Import([ImportSpec { name: Some("f"), path: "\"fmt\"" }])
//! const greeting = "hi"           → Decl::Value { keyword: Const, specs: [ValueSpec { names: ["greeting"], values: [Literal] }] }
//! f.Sprintf(greeting, 1)          → Expr::Call(CallExpr { callee: Selector { f, Sprintf }, args: [Ident, Literal] })
//! func main() { ... }             → Decl::Other(Expr::Other([...]))
//! ```

use std::path::{Path, PathBuf};

/// A parsed Go source file.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    /// Path the file was read from (canonical when it exists on disk).
    pub path: PathBuf,
    /// Package name from the `package` clause, if present.
    pub package: Option<String>,
    /// Top-level declarations in source order.
    pub decls: Vec<Decl>,
}

impl SourceFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All import specs of the file, across every `import` declaration.
    pub fn imports(&self) -> impl Iterator<Item = &ImportSpec> {
        self.decls
            .iter()
            .filter_map(|decl| match decl {
                Decl::Import(specs) => Some(specs.iter()),
                _ => None,
            })
            .flatten()
    }
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    /// `import "path"` or `import ( ... )`.
    Import(Vec<ImportSpec>),
    /// `const ...` or `var ...`, single or grouped.
    Value {
        keyword: ValueKeyword,
        specs: Vec<ValueSpec>,
    },
    /// Functions, methods, types: only walked for calls.
    Other(Expr),
}

/// One import line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    /// Explicit alias (`f`, `.`, `_`), if the import declares one.
    pub name: Option<String>,
    /// The import path as written, quotes included.
    pub path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKeyword {
    Const,
    Var,
}

impl ValueKeyword {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKeyword::Const => "const",
            ValueKeyword::Var => "var",
        }
    }
}

/// `a, b = x, y` inside a const/var declaration.
///
/// `values` is empty for declarations without an initializer
/// (`var x string`) and may be shorter than `names` (`var a, b = f()`).
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSpec {
    pub names: Vec<String>,
    pub values: Vec<Expr>,
}

impl ValueSpec {
    /// Name/initializer pairs; names without an initializer are dropped.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &Expr)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }
}

/// Expression node kinds the engine distinguishes.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Call(CallExpr),
    Literal(Literal),
    /// A bare identifier: `greeting`.
    Ident(String),
    /// A qualified reference: `pkg.Name` (or any `operand.field`).
    Selector { operand: Box<Expr>, field: String },
    /// Any other node; its lowered children are kept for traversal.
    Other(Vec<Expr>),
}

/// A call expression.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub args: Vec<Expr>,
    /// 1-indexed line of the call.
    pub line: usize,
}

impl CallExpr {
    /// The `alias.Name` shape of the callee, if it has one.
    pub fn qualified_callee(&self) -> Option<(&str, &str)> {
        match &*self.callee {
            Expr::Selector { operand, field } => match &**operand {
                Expr::Ident(alias) => Some((alias.as_str(), field.as_str())),
                _ => None,
            },
            _ => None,
        }
    }
}

/// A literal token, kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub kind: LiteralKind,
    /// Source text including quotes and escapes.
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    /// `"..."`
    String,
    /// `` `...` ``
    RawString,
    Int,
    Float,
    Imaginary,
    Rune,
}

impl LiteralKind {
    pub fn is_string(self) -> bool {
        matches!(self, LiteralKind::String | LiteralKind::RawString)
    }
}

/// Depth-first traversal over the syntax model.
///
/// Override a `visit_*` method to intercept a node kind; call the matching
/// `walk_*` function from the override to keep descending, or return
/// without it to prune the subtree.
pub trait Visit {
    fn visit_source_file(&mut self, file: &SourceFile) {
        walk_source_file(self, file);
    }

    fn visit_decl(&mut self, decl: &Decl) {
        walk_decl(self, decl);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }

    fn visit_call_expr(&mut self, call: &CallExpr) {
        walk_call_expr(self, call);
    }
}

pub fn walk_source_file<V: Visit + ?Sized>(visitor: &mut V, file: &SourceFile) {
    for decl in &file.decls {
        visitor.visit_decl(decl);
    }
}

pub fn walk_decl<V: Visit + ?Sized>(visitor: &mut V, decl: &Decl) {
    match decl {
        Decl::Import(_) => {}
        Decl::Value { specs, .. } => {
            for value in specs.iter().flat_map(|spec| &spec.values) {
                visitor.visit_expr(value);
            }
        }
        Decl::Other(expr) => visitor.visit_expr(expr),
    }
}

pub fn walk_expr<V: Visit + ?Sized>(visitor: &mut V, expr: &Expr) {
    match expr {
        Expr::Call(call) => visitor.visit_call_expr(call),
        Expr::Selector { operand, .. } => visitor.visit_expr(operand),
        Expr::Other(children) => {
            for child in children {
                visitor.visit_expr(child);
            }
        }
        Expr::Literal(_) | Expr::Ident(_) => {}
    }
}

pub fn walk_call_expr<V: Visit + ?Sized>(visitor: &mut V, call: &CallExpr) {
    visitor.visit_expr(&call.callee);
    for arg in &call.args {
        visitor.visit_expr(arg);
    }
}
