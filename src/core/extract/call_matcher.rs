//! Call matching: the visitor that finds target-function calls in one file.
//!
//! A call matches when its callee has the `alias.Name` shape, `alias` is
//! imported from the target's module in this file, and `Name` is the target's
//! name. For a match:
//!
//! - no arguments: warning, call skipped
//! - first argument classified (see [`Argument`]) and handed to the
//!   [`ValueResolver`]; the resulting string goes to the [`ExtractedSet`]
//!
//! Either way the matched call's subtree is not visited, so a target call
//! nested in another target call's arguments is never extracted separately.
//! Non-matching calls are walked normally.

use std::path::Path;

use crate::core::collect::{ExtractedSet, Scope};
use crate::core::data::TargetFunction;
use crate::core::extract::Argument;
use crate::core::resolve::ValueResolver;
use crate::core::syntax::{CallExpr, Expr, SourceFile, Visit, walk_call_expr};
use crate::diagnostics::DiagnosticSink;

/// Counters for the calls seen in one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallStats {
    /// Calls to the target function.
    pub matched: usize,
    /// Matched calls whose value was inserted (new or duplicate).
    pub resolved: usize,
    /// Matched calls dropped: niladic, unsupported argument, failed lookup.
    pub skipped: usize,
    /// Matched calls that resolved to an empty or non-string value.
    pub discarded: usize,
}

pub struct CallMatcher<'a> {
    target: &'a TargetFunction,
    scope: &'a Scope,
    file_path: &'a Path,
    resolver: &'a ValueResolver<'a>,
    sink: &'a dyn DiagnosticSink,
    extracted: &'a mut ExtractedSet,
    stats: CallStats,
}

impl<'a> CallMatcher<'a> {
    pub fn new(
        target: &'a TargetFunction,
        scope: &'a Scope,
        file_path: &'a Path,
        resolver: &'a ValueResolver<'a>,
        sink: &'a dyn DiagnosticSink,
        extracted: &'a mut ExtractedSet,
    ) -> Self {
        Self {
            target,
            scope,
            file_path,
            resolver,
            sink,
            extracted,
            stats: CallStats::default(),
        }
    }

    /// Walk `file` and record every value passed to the target function.
    pub fn run(mut self, file: &SourceFile) -> CallStats {
        self.visit_source_file(file);
        self.stats
    }

    fn is_target_call(&self, call: &CallExpr) -> bool {
        let Some((alias, name)) = call.qualified_callee() else {
            return false;
        };
        self.target.matches(self.scope.imports.get(alias), name)
    }

    fn location(&self, call: &CallExpr) -> String {
        format!("{}:{}", self.file_path.display(), call.line)
    }

    fn extract_first_argument(&mut self, call: &CallExpr, first: &Expr) {
        let Some(argument) = Argument::classify(first) else {
            self.sink.trace(format!(
                "{}: unsupported first argument to {}, skipping",
                self.location(call),
                self.target
            ));
            self.stats.skipped += 1;
            return;
        };

        match self
            .resolver
            .resolve_value(argument, self.scope, self.file_path)
        {
            Ok(Some(value)) => {
                self.stats.resolved += 1;
                if self.extracted.contains(&value) {
                    return;
                }
                self.sink
                    .trace(format!("recorded new string: '{}'", value));
                self.extracted.record(value);
            }
            Ok(None) => {
                self.sink.trace(format!(
                    "{}: empty or non-string value, not recorded",
                    self.location(call)
                ));
                self.stats.discarded += 1;
            }
            Err(failure) => {
                self.sink.warning(format!(
                    "{}: unable to resolve argument to {}: {}",
                    self.location(call),
                    self.target,
                    failure
                ));
                self.stats.skipped += 1;
            }
        }
    }
}

impl Visit for CallMatcher<'_> {
    fn visit_call_expr(&mut self, call: &CallExpr) {
        if !self.is_target_call(call) {
            walk_call_expr(self, call);
            return;
        }
        self.stats.matched += 1;

        match call.args.first() {
            Some(first) => self.extract_first_argument(call, first),
            None => {
                self.sink.warning(format!(
                    "{}: skipping niladic call to {}",
                    self.location(call),
                    self.target
                ));
                self.stats.skipped += 1;
            }
        }
        // Matched calls are not descended into.
    }
}
