//! Cross-file symbol resolution.
//!
//! When a name is not declared in the file being processed, its literal value
//! is looked up by scanning the other source files of the module that should
//! declare it:
//!
//! 1. map the module path to a directory under the module root
//! 2. list the `.go` files there (no `_test.go`), sorted by file name,
//!    excluding the file currently under extraction
//! 3. parse each candidate and load a fresh [`Scope`] for it
//! 4. return the first literal declared under the requested name
//!
//! Only literal declarations are consulted, so a lookup never chases a
//! symbol that is itself assigned from another symbol.

use std::{
    fs,
    path::{Path, PathBuf},
};

use super::ResolveFailure;
use crate::core::collect::Scope;
use crate::core::data::{ModuleRoot, module_root::canonicalize_or_keep};
use crate::core::parsers::go::parse_go_file;
use crate::diagnostics::DiagnosticSink;

pub struct CrossFileResolver<'a> {
    module_root: &'a ModuleRoot,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> CrossFileResolver<'a> {
    pub fn new(module_root: &'a ModuleRoot, sink: &'a dyn DiagnosticSink) -> Self {
        Self { module_root, sink }
    }

    /// Find the literal text of `symbol` in `module_path`, never reading
    /// `current_file`.
    pub fn resolve(
        &self,
        module_path: &str,
        symbol: &str,
        current_file: &Path,
    ) -> Result<String, ResolveFailure> {
        let dir = self.module_root.dir_for(module_path);
        self.sink.trace(format!(
            "resolving symbol {} in {}",
            symbol,
            dir.display()
        ));

        let candidates =
            candidate_files(&dir, current_file).map_err(|source| ResolveFailure::UnreadableModule {
                dir: dir.clone(),
                source,
            })?;

        for candidate in candidates {
            self.sink.trace(format!(
                "scanning {} for symbol {}",
                candidate.display(),
                symbol
            ));

            let file = match parse_go_file(&candidate) {
                Ok(file) => file,
                Err(err) => {
                    self.sink.warning(format!("skipping candidate file: {}", err));
                    continue;
                }
            };

            let scope = Scope::load(&file, self.sink);
            if let Some(value) = scope.symbols.get(symbol) {
                return Ok(value.to_string());
            }
        }

        Err(ResolveFailure::NotFound {
            symbol: symbol.to_string(),
            module: module_path.to_string(),
        })
    }
}

/// Source files of `dir` that may declare a package-level symbol, in
/// file-name order.
pub fn candidate_files(dir: &Path, current_file: &Path) -> std::io::Result<Vec<PathBuf>> {
    let current_file = canonicalize_or_keep(current_file);
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = canonicalize_or_keep(&entry.path());
        if !is_package_source(&path) || path == current_file {
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn is_package_source(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.ends_with(".go") && !name.ends_with("_test.go")
}
