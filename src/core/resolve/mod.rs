//! Value resolution: turning a classified call argument into a string.
//!
//! Three strategies, chosen by the argument's shape:
//!
//! - **Direct literal** `Sprintf("x")`: the literal text as written
//! - **Local reference** `Sprintf(name)`: the current file's literal symbol
//!   table, then the other files of the same module
//! - **Imported reference** `Sprintf(pkg.Name)`: the module `pkg` is imported
//!   from, via the import table
//!
//! Resolved text is then unquoted; empty or unquotable values are discarded
//! without being treated as failures.

pub mod cross_file;
pub mod unquote;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use cross_file::CrossFileResolver;
pub use unquote::unquote;

use crate::core::collect::Scope;
use crate::core::data::ModuleRoot;
use crate::core::extract::Argument;
use crate::diagnostics::DiagnosticSink;

/// Why an argument could not be resolved. Never fatal: the call is skipped.
#[derive(Debug, Error)]
pub enum ResolveFailure {
    #[error("import alias '{alias}' is not declared in this file")]
    UnknownAlias { alias: String },
    #[error("symbol {symbol} not found in module {module}")]
    NotFound { symbol: String, module: String },
    #[error("cannot read module directory {dir}: {source}")]
    UnreadableModule {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub struct ValueResolver<'a> {
    module_root: &'a ModuleRoot,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> ValueResolver<'a> {
    pub fn new(module_root: &'a ModuleRoot, sink: &'a dyn DiagnosticSink) -> Self {
        Self { module_root, sink }
    }

    /// Resolve `argument` to its literal text (still quoted). A direct
    /// literal that is not a string resolves to `None`.
    pub fn resolve_literal(
        &self,
        argument: Argument<'_>,
        scope: &Scope,
        current_file: &Path,
    ) -> Result<Option<String>, ResolveFailure> {
        match argument {
            Argument::DirectLiteral(literal) => {
                if !literal.kind.is_string() {
                    self.sink
                        .trace(format!("literal {} is not a string", literal.text));
                    return Ok(None);
                }
                Ok(Some(literal.text.clone()))
            }
            Argument::LocalReference(name) => {
                if let Some(value) = scope.symbols.get(name) {
                    return Ok(Some(value.to_string()));
                }

                // Not declared in this file: scan the rest of its module.
                let dir = current_file.parent().unwrap_or(Path::new("."));
                let module_path = self.module_root.module_path_for(dir);
                let value = self.cross_file().resolve(&module_path, name, current_file)?;
                self.sink.trace(format!(
                    "resolved local symbol {}.{} = {}",
                    module_path, name, value
                ));
                Ok(Some(value))
            }
            Argument::ImportedReference { alias, symbol } => {
                let module_path =
                    scope
                        .imports
                        .get(alias)
                        .ok_or_else(|| ResolveFailure::UnknownAlias {
                            alias: alias.to_string(),
                        })?;
                let value = self.cross_file().resolve(module_path, symbol, current_file)?;
                self.sink
                    .trace(format!("resolved {}.{} = {}", alias, symbol, value));
                Ok(Some(value))
            }
        }
    }

    /// Resolve and unquote. `Ok(None)` means the value was found but is
    /// empty or not a valid quoted string.
    pub fn resolve_value(
        &self,
        argument: Argument<'_>,
        scope: &Scope,
        current_file: &Path,
    ) -> Result<Option<String>, ResolveFailure> {
        let literal = self.resolve_literal(argument, scope, current_file)?;
        Ok(literal
            .and_then(|literal| unquote(&literal))
            .filter(|value| !value.is_empty()))
    }

    fn cross_file(&self) -> CrossFileResolver<'a> {
        CrossFileResolver::new(self.module_root, self.sink)
    }
}
