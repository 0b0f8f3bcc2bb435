//! Per-file scope: the import table and the literal symbol table.
//!
//! A [`Scope`] is built from exactly one [`SourceFile`] and never merged with
//! another file's scope. The cross-file resolver loads a fresh `Scope` for
//! every candidate file, so lookups there cannot disturb the scope of the
//! file whose calls are being matched.

use std::collections::HashMap;

use crate::core::syntax::{Decl, Expr, ImportSpec, SourceFile};
use crate::diagnostics::DiagnosticSink;

/// Local alias → import path (`f` → `github.com/acme/format`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportTable {
    entries: HashMap<String, String>,
}

impl ImportTable {
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.entries.get(alias).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, alias: String, path: String) {
        self.entries.insert(alias, path);
    }
}

/// Declared name → literal text exactly as written (quotes included).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiteralSymbolTable {
    entries: HashMap<String, String>,
}

impl LiteralSymbolTable {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, name: String, literal: String) {
        self.entries.insert(name, literal);
    }
}

/// The tables valid for one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    pub imports: ImportTable,
    pub symbols: LiteralSymbolTable,
}

impl Scope {
    /// Build both tables for `file`.
    ///
    /// - every import is recorded under its explicit alias, or the last path
    ///   segment when it has none
    /// - every top-level `const`/`var` name whose initializer is a non-empty
    ///   literal is recorded; other initializers are skipped
    pub fn load(file: &SourceFile, sink: &dyn DiagnosticSink) -> Self {
        let mut scope = Scope::default();
        let file_name = file.path().display();

        sink.trace(format!("loading imports for {}", file_name));
        for spec in file.imports() {
            let (alias, path) = import_alias(spec);
            sink.trace(format!("  import {} -> {}", alias, path));
            scope.imports.insert(alias, path);
        }

        sink.trace(format!("loading top-level declarations for {}", file_name));
        for decl in &file.decls {
            let Decl::Value { keyword, specs } = decl else {
                continue;
            };
            for spec in specs {
                for (name, value) in spec.pairs() {
                    let Expr::Literal(literal) = value else {
                        continue;
                    };
                    if literal.text.is_empty() {
                        continue;
                    }
                    sink.trace(format!(
                        "  {} {} = {}",
                        keyword.as_str(),
                        name,
                        literal.text
                    ));
                    scope.symbols.insert(name.to_string(), literal.text.clone());
                }
            }
        }

        scope
    }
}

/// `(alias, path)` for an import spec, with the path's quotes removed.
fn import_alias(spec: &ImportSpec) -> (String, String) {
    let path = spec.path.trim_matches(|c| c == '"' || c == '`').to_string();
    let alias = match &spec.name {
        Some(name) => name.clone(),
        None => path.rsplit('/').next().unwrap_or(path.as_str()).to_string(),
    };
    (alias, path)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::parsers::go::parse_go_source;
    use crate::diagnostics::Silent;

    fn load(code: &str) -> Scope {
        let file = parse_go_source(code, Path::new("scope.go")).unwrap();
        Scope::load(&file, &Silent)
    }

    #[test]
    fn test_import_aliases() {
        let scope = load(
            r#"
package main

import (
    "fmt"
    str "strings"
    "github.com/acme/app/messages"
)
"#,
        );

        assert_eq!(scope.imports.len(), 3);
        assert_eq!(scope.imports.get("fmt"), Some("fmt"));
        assert_eq!(scope.imports.get("str"), Some("strings"));
        assert_eq!(scope.imports.get("strings"), None);
        assert_eq!(
            scope.imports.get("messages"),
            Some("github.com/acme/app/messages")
        );
    }

    #[test]
    fn test_literal_symbols() {
        let scope = load(
            r#"
package main

const greeting = "hello"

const (
    first, second = "one", `two`
    answer        = 42
)

var (
    computed     = strings.ToUpper("x")
    uninitialized string
    fromConst    = greeting
)
"#,
        );

        assert_eq!(scope.symbols.get("greeting"), Some("\"hello\""));
        assert_eq!(scope.symbols.get("first"), Some("\"one\""));
        assert_eq!(scope.symbols.get("second"), Some("`two`"));
        assert_eq!(scope.symbols.get("answer"), Some("42"));
        assert!(!scope.symbols.contains("computed"));
        assert!(!scope.symbols.contains("uninitialized"));
        assert!(!scope.symbols.contains("fromConst"));
        assert_eq!(scope.symbols.len(), 4);
    }

    #[test]
    fn test_function_locals_are_not_top_level() {
        let scope = load(
            r#"
package main

func f() {
    const local = "inside"
}
"#,
        );

        assert!(scope.symbols.is_empty());
    }

    #[test]
    fn test_every_load_starts_empty() {
        let first = load("package a\n\nimport \"fmt\"\n\nconst x = \"1\"\n");
        let second = load("package b\n\nconst y = \"2\"\n");

        assert_eq!(first.symbols.get("x"), Some("\"1\""));
        assert!(second.imports.is_empty());
        assert!(!second.symbols.contains("x"));
    }
}
