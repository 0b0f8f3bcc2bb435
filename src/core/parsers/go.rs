use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tree_sitter::{Node, Parser};

use crate::core::syntax::{
    CallExpr, Decl, Expr, ImportSpec, Literal, LiteralKind, SourceFile, ValueKeyword, ValueSpec,
};

/// Why a Go source file could not be turned into a [`SourceFile`].
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to load the Go grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    #[error("parser produced no tree for {0}")]
    NoTree(PathBuf),
    #[error("syntax error in {path} at line {line}")]
    Syntax { path: PathBuf, line: usize },
}

/// Read and parse a Go file.
pub fn parse_go_file(path: &Path) -> Result<SourceFile, ParseError> {
    let source = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_go_source(&source, path)
}

/// Parse Go source text into the engine's syntax model.
///
/// tree-sitter recovers from syntax errors, so any ERROR or MISSING node in
/// the resulting tree is reported as [`ParseError::Syntax`].
pub fn parse_go_source(source: &str, path: &Path) -> Result<SourceFile, ParseError> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_go::LANGUAGE.into())?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ParseError::NoTree(path.to_path_buf()))?;
    let root = tree.root_node();

    if root.has_error() {
        let line = first_error_line(root).unwrap_or(1);
        return Err(ParseError::Syntax {
            path: path.to_path_buf(),
            line,
        });
    }

    let lowering = Lowering {
        source: source.as_bytes(),
    };
    Ok(lowering.source_file(root, path))
}

fn first_error_line(node: Node) -> Option<usize> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position().row + 1);
    }
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .filter(|child| child.has_error())
        .find_map(first_error_line)
}

/// Converts tree-sitter nodes into [`crate::core::syntax`] types.
struct Lowering<'s> {
    source: &'s [u8],
}

impl Lowering<'_> {
    fn text(&self, node: Node) -> String {
        node.utf8_text(self.source).unwrap_or_default().to_string()
    }

    /// Named children without comments.
    fn children<'t>(&self, node: Node<'t>) -> Vec<Node<'t>> {
        let mut cursor = node.walk();
        node.named_children(&mut cursor)
            .filter(|child| child.kind() != "comment")
            .collect()
    }

    fn source_file(&self, root: Node, path: &Path) -> SourceFile {
        let mut package = None;
        let mut decls = Vec::new();

        for child in self.children(root) {
            match child.kind() {
                "package_clause" => {
                    package = self
                        .children(child)
                        .into_iter()
                        .find(|n| n.kind() == "package_identifier")
                        .map(|n| self.text(n));
                }
                "import_declaration" => {
                    let mut specs = Vec::new();
                    self.import_specs(child, &mut specs);
                    decls.push(Decl::Import(specs));
                }
                "const_declaration" => decls.push(Decl::Value {
                    keyword: ValueKeyword::Const,
                    specs: self.value_specs(child),
                }),
                "var_declaration" => decls.push(Decl::Value {
                    keyword: ValueKeyword::Var,
                    specs: self.value_specs(child),
                }),
                _ => decls.push(Decl::Other(self.expr(child))),
            }
        }

        SourceFile {
            path: path.to_path_buf(),
            package,
            decls,
        }
    }

    fn import_specs(&self, node: Node, out: &mut Vec<ImportSpec>) {
        for child in self.children(node) {
            match child.kind() {
                "import_spec" => {
                    let Some(path) = child.child_by_field_name("path") else {
                        continue;
                    };
                    out.push(ImportSpec {
                        name: child.child_by_field_name("name").map(|n| self.text(n)),
                        path: self.text(path),
                    });
                }
                "import_spec_list" => self.import_specs(child, out),
                _ => {}
            }
        }
    }

    fn value_specs(&self, node: Node) -> Vec<ValueSpec> {
        let mut specs = Vec::new();
        self.collect_value_specs(node, &mut specs);
        specs
    }

    fn collect_value_specs(&self, node: Node, out: &mut Vec<ValueSpec>) {
        for child in self.children(node) {
            match child.kind() {
                "const_spec" | "var_spec" => {
                    // In `const_spec` the `name` field also covers the `,` tokens.
                    let mut cursor = child.walk();
                    let names = child
                        .children_by_field_name("name", &mut cursor)
                        .filter(|n| n.kind() == "identifier")
                        .map(|n| self.text(n))
                        .collect();
                    let values = child
                        .child_by_field_name("value")
                        .map(|list| {
                            self.children(list)
                                .into_iter()
                                .map(|n| self.expr(n))
                                .collect()
                        })
                        .unwrap_or_default();
                    out.push(ValueSpec { names, values });
                }
                "const_spec_list" | "var_spec_list" => self.collect_value_specs(child, out),
                _ => {}
            }
        }
    }

    fn expr(&self, node: Node) -> Expr {
        match node.kind() {
            "call_expression" => {
                let callee = node
                    .child_by_field_name("function")
                    .map(|n| self.expr(n))
                    .unwrap_or(Expr::Other(Vec::new()));
                let args = node
                    .child_by_field_name("arguments")
                    .map(|list| {
                        self.children(list)
                            .into_iter()
                            .map(|n| self.expr(n))
                            .collect()
                    })
                    .unwrap_or_default();
                Expr::Call(CallExpr {
                    callee: Box::new(callee),
                    args,
                    line: node.start_position().row + 1,
                })
            }
            "selector_expression" => {
                match (
                    node.child_by_field_name("operand"),
                    node.child_by_field_name("field"),
                ) {
                    (Some(operand), Some(field)) => Expr::Selector {
                        operand: Box::new(self.expr(operand)),
                        field: self.text(field),
                    },
                    _ => self.other(node),
                }
            }
            "identifier" => Expr::Ident(self.text(node)),
            kind => match literal_kind(kind) {
                Some(kind) => Expr::Literal(Literal {
                    kind,
                    text: self.text(node),
                }),
                None => self.other(node),
            },
        }
    }

    fn other(&self, node: Node) -> Expr {
        Expr::Other(
            self.children(node)
                .into_iter()
                .map(|n| self.expr(n))
                .collect(),
        )
    }
}

fn literal_kind(kind: &str) -> Option<LiteralKind> {
    match kind {
        "interpreted_string_literal" => Some(LiteralKind::String),
        "raw_string_literal" => Some(LiteralKind::RawString),
        "int_literal" => Some(LiteralKind::Int),
        "float_literal" => Some(LiteralKind::Float),
        "imaginary_literal" => Some(LiteralKind::Imaginary),
        "rune_literal" => Some(LiteralKind::Rune),
        _ => None,
    }
}
