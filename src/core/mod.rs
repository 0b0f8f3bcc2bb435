//! Core extraction engine.
//!
//! ## Module Structure
//!
//! - `parsers`: Go source → [`syntax`] model (tree-sitter)
//! - `syntax`: closed syntax model and its visitor
//! - `collect`: per-file scope tables and the extracted-string set
//! - `extract`: target-call matching and argument classification
//! - `resolve`: literal, same-module and imported value resolution
//! - `pipeline`: the [`Extractor`] driving all of the above per file
//! - `context`: run settings merged from CLI flags and config
//! - `file_scanner`: input file discovery

pub mod collect;
pub mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod parsers;
pub mod pipeline;
pub mod resolve;
pub mod syntax;

pub use collect::{ExtractedSet, Scope};
pub use context::{ExtractionContext, OutputFormat};
pub use data::{ModuleRoot, TargetFunction};
pub use pipeline::{ExtractionStats, Extractor};
pub use resolve::ResolveFailure;
