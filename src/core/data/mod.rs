//! Plain data types shared by the extraction phases.
//!
//! ## Module Structure
//!
//! - `module_root`: ModuleRoot (module path ↔ directory mapping)
//! - `target`: TargetFunction (the `module.Name` being searched for)

pub mod module_root;
pub mod target;

pub use module_root::ModuleRoot;
pub use target::{DEFAULT_TARGET_FUNCTION, TargetFunction};
