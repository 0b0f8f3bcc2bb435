//! Collection: per-file scopes and the run-wide result set.
//!
//! - `scope`: Scope Loader building the import and literal symbol tables of one file
//! - `extracted`: Collector deduplicating the strings found across the run

pub mod extracted;
pub mod scope;

pub use extracted::ExtractedSet;
pub use scope::{ImportTable, LiteralSymbolTable, Scope};
