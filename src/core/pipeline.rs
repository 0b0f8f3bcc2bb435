//! Extraction pipeline: runs every input file through the engine.
//!
//! Per file:
//! 1. **Parse** the file into the syntax model (fatal on failure)
//! 2. **Load** its [`Scope`] (import table + literal symbol table)
//! 3. **Match** target calls with a [`CallMatcher`], resolving each first
//!    argument and recording the value in the run's [`ExtractedSet`]
//!
//! The scope of step 2 lives only for that file. Cross-file lookups build
//! their own scopes and never touch it.

use std::path::Path;

use anyhow::{Context, Result};

use crate::core::collect::{ExtractedSet, Scope};
use crate::core::data::{ModuleRoot, TargetFunction, module_root::canonicalize_or_keep};
use crate::core::extract::{CallMatcher, CallStats};
use crate::core::parsers::go::parse_go_file;
use crate::core::resolve::ValueResolver;
use crate::core::syntax::SourceFile;
use crate::diagnostics::DiagnosticSink;

/// Counters accumulated over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    pub files_processed: usize,
    pub calls_matched: usize,
    pub calls_resolved: usize,
    pub calls_skipped: usize,
    pub values_discarded: usize,
}

impl ExtractionStats {
    fn add(&mut self, calls: CallStats) {
        self.calls_matched += calls.matched;
        self.calls_resolved += calls.resolved;
        self.calls_skipped += calls.skipped;
        self.values_discarded += calls.discarded;
    }
}

/// One extraction run for a single target function.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use xtract::core::{Extractor, ModuleRoot, TargetFunction};
/// use xtract::diagnostics::Silent;
///
/// let mut extractor = Extractor::new(TargetFunction::default(), ModuleRoot::from_env(), &Silent);
/// extractor.process_file(Path::new("cmd/app/main.go"))?;
/// for value in extractor.strings() {
///     println!("{value}");
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct Extractor<'a> {
    target: TargetFunction,
    module_root: ModuleRoot,
    sink: &'a dyn DiagnosticSink,
    extracted: ExtractedSet,
    stats: ExtractionStats,
}

impl<'a> Extractor<'a> {
    pub fn new(
        target: TargetFunction,
        module_root: ModuleRoot,
        sink: &'a dyn DiagnosticSink,
    ) -> Self {
        Self {
            target,
            module_root,
            sink,
            extracted: ExtractedSet::new(),
            stats: ExtractionStats::default(),
        }
    }

    /// Process every file in order, stopping at the first one that fails
    /// to parse.
    pub fn process_files<I, P>(&mut self, files: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for file in files {
            self.process_file(file.as_ref())?;
        }
        Ok(())
    }

    /// Parse and process one input file.
    ///
    /// A parse failure here is fatal: the caller supplied this file and its
    /// tree is required.
    pub fn process_file(&mut self, path: &Path) -> Result<()> {
        let path = canonicalize_or_keep(path);
        self.sink.info(format!("processing file {}", path.display()));

        let file = parse_go_file(&path)
            .with_context(|| format!("Failed to parse {} as Go source", path.display()))?;
        self.process_source(&file);
        Ok(())
    }

    /// Process an already parsed file.
    pub fn process_source(&mut self, file: &SourceFile) {
        let scope = Scope::load(file, self.sink);
        let resolver = ValueResolver::new(&self.module_root, self.sink);

        let calls = CallMatcher::new(
            &self.target,
            &scope,
            file.path(),
            &resolver,
            self.sink,
            &mut self.extracted,
        )
        .run(file);

        self.stats.files_processed += 1;
        self.stats.add(calls);
    }

    pub fn extracted(&self) -> &ExtractedSet {
        &self.extracted
    }

    /// Extracted strings, sorted.
    pub fn strings(&self) -> Vec<String> {
        self.extracted.to_vec()
    }

    pub fn stats(&self) -> ExtractionStats {
        self.stats
    }
}
