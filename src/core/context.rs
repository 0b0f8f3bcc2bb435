use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result, bail};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    cli::args::ExtractArgs,
    config::load_config,
    core::{
        data::{ModuleRoot, TargetFunction},
        file_scanner::{ScanOptions, scan_files},
    },
    diagnostics::DiagnosticSink,
};

/// How extracted strings are written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One string per line.
    #[default]
    Text,
    /// `{"strings": [...]}`
    Json,
}

/// Settings for one `extract` run.
///
/// # Configuration Priority
///
/// 1. CLI arguments (`--func`, `--module-root`, `--format`)
/// 2. `.xtractrc.json` config file
/// 3. Built-in defaults (`fmt.Sprintf`, `$GOPATH/src`, text output)
#[derive(Debug)]
pub struct ExtractionContext {
    pub target: TargetFunction,
    pub module_root: ModuleRoot,
    /// Input files, sorted.
    pub files: Vec<PathBuf>,
    pub format: OutputFormat,
    /// Output file; stdout when `None`.
    pub output: Option<PathBuf>,
    pub verbose: bool,
}

impl ExtractionContext {
    /// Build the context from command line arguments.
    ///
    /// Loads the config file found from the current directory, applies CLI
    /// overrides, and expands the input patterns into Go files.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Config file is invalid
    /// - The target function spec is malformed
    /// - A literal input path does not exist
    pub fn new(args: &ExtractArgs, sink: &dyn DiagnosticSink) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine the current directory")?;

        let config_result = load_config(&cwd)?;
        match &config_result.path {
            Some(path) => sink.info(format!("using config {}", path.display())),
            None => sink.info("no .xtractrc.json found, using default configuration"),
        }
        let config_dir = config_result
            .path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.clone());
        let mut config = config_result.config;

        if let Some(function) = &args.function {
            config.function = function.clone();
        }
        if let Some(format) = args.format {
            config.format = format;
        }

        let target = TargetFunction::parse(&config.function)?;

        let module_root = match (&args.module_root, &config.module_root) {
            (Some(flag), _) => ModuleRoot::new(cwd.join(flag)),
            (None, Some(configured)) => ModuleRoot::new(config_dir.join(configured)),
            (None, None) => ModuleRoot::from_env(),
        };
        sink.info(format!("module root: {}", module_root.path().display()));

        let options = ScanOptions {
            ignores: config.ignores.clone(),
            ignore_test_files: config.ignore_test_files,
            ignore_vendor: config.ignore_vendor,
        };
        let scan_result = scan_files(&cwd, &args.patterns, &options, sink);

        if let Some(pattern) = scan_result.missing.first() {
            bail!("Input path does not exist: {}", pattern);
        }
        if scan_result.skipped_count > 0 {
            sink.warning(format!(
                "{} path(s) skipped due to access errors",
                scan_result.skipped_count
            ));
        }
        if scan_result.files.is_empty() {
            sink.warning("no Go source files matched the given patterns");
        }

        Ok(Self {
            format: config.format,
            target,
            module_root,
            files: scan_result.files,
            output: args.output.clone(),
            verbose: args.verbose,
        })
    }
}
