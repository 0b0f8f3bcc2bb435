//! Extraction: matching target-function calls in a file's syntax tree.
//!
//! - `argument`: classification of a call's first argument
//! - `call_matcher`: the visitor recognizing target calls and feeding the collector

pub mod argument;
pub mod call_matcher;

pub use argument::Argument;
pub use call_matcher::{CallMatcher, CallStats};
