//! xtract - string harvester for Go sources
//!
//! xtract finds every call to one target function (by default
//! `fmt.Sprintf`) in a set of Go files and collects the string passed as its
//! first argument. The argument may be a literal, a package-level constant
//! or variable of the same module, or an exported symbol of an imported
//! module; the latter two are resolved by reading the declaring module's
//! other source files.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (parse, scope, match, resolve)
//! - `diagnostics`: Diagnostic sinks shared by every component

pub mod cli;
pub mod config;
pub mod core;
pub mod diagnostics;
