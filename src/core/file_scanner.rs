use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::diagnostics::DiagnosticSink;

/// Directory name skipped when `ignore_vendor` is set.
pub const VENDOR_DIR: &str = "vendor";

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub ignores: Vec<String>,
    pub ignore_test_files: bool,
    pub ignore_vendor: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            ignore_test_files: true,
            ignore_vendor: true,
        }
    }
}

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Go source files, sorted and deduplicated.
    pub files: Vec<PathBuf>,
    /// Walk entries that could not be read.
    pub skipped_count: usize,
    /// Literal patterns naming paths that do not exist, as given.
    pub missing: Vec<String>,
}

/// Expand `patterns` (relative to `base_dir`) into the Go files to extract
/// from. Directories are walked recursively.
pub fn scan_files(
    base_dir: &Path,
    patterns: &[String],
    options: &ScanOptions,
    sink: &dyn DiagnosticSink,
) -> ScanResult {
    let mut files = BTreeSet::new();
    let mut skipped_count = 0;
    let mut missing = Vec::new();

    // Separate ignore patterns into literal paths and glob patterns
    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();
    for p in &options.ignores {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => sink.warning(format!("invalid ignore pattern '{}': {}", p, e)),
            }
        } else {
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    let mut roots: Vec<PathBuf> = Vec::new();
    for pattern in patterns {
        let full = base_dir.join(pattern);
        if is_glob_pattern(pattern) {
            match glob(&full.to_string_lossy()) {
                Ok(entries) => {
                    let before = roots.len();
                    roots.extend(entries.flatten());
                    if roots.len() == before {
                        sink.info(format!("pattern '{}' matched nothing", pattern));
                    }
                }
                Err(e) => sink.warning(format!("invalid glob pattern '{}': {}", pattern, e)),
            }
        } else if full.exists() {
            roots.push(full);
        } else {
            missing.push(pattern.clone());
        }
    }

    for root in roots {
        let walker = WalkDir::new(&root).into_iter().filter_entry(|entry| {
            !(options.ignore_vendor
                && entry.depth() > 0
                && entry.file_type().is_dir()
                && entry.file_name() == VENDOR_DIR)
        });

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    sink.warning(format!("cannot access path: {}", e));
                    continue;
                }
            };
            let path = entry.path();

            if literal_ignore_paths
                .iter()
                .any(|ignore_path| path.starts_with(ignore_path))
            {
                continue;
            }
            let path_str = path.to_string_lossy();
            if glob_patterns.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            if entry.file_type().is_file() && is_scannable_file(path, options.ignore_test_files) {
                files.insert(path.to_path_buf());
            }
        }
    }

    ScanResult {
        files: files.into_iter().collect(),
        skipped_count,
        missing,
    }
}

fn is_scannable_file(path: &Path, ignore_test_files: bool) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.ends_with(".go") && !(ignore_test_files && name.ends_with("_test.go"))
}
