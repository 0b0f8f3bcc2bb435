//! Source parsers.
//!
//! - `go`: Go source parser (tree-sitter-go), lowered into `crate::core::syntax`

pub mod go;
