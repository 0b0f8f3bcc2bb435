use std::{fmt, str::FromStr, sync::LazyLock};

use anyhow::{Result, bail};
use regex::Regex;

/// Default target: `fmt.Sprintf`.
pub const DEFAULT_TARGET_FUNCTION: &str = "fmt.Sprintf";

static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}_][\p{L}\p{Nd}_]*$").unwrap());

/// The function whose first-argument strings are harvested.
///
/// `module` is the import path the callee must resolve to (`fmt`,
/// `github.com/acme/i18n`), `name` the selected function (`Sprintf`, `T`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetFunction {
    pub module: String,
    pub name: String,
}

impl TargetFunction {
    pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            name: name.into(),
        }
    }

    /// Parse a qualified `module.Name` spec.
    ///
    /// The split happens at the last `.`, so module paths may contain dots:
    /// `github.com/acme/i18n.T` targets `T` from `github.com/acme/i18n`.
    pub fn parse(spec: &str) -> Result<Self> {
        let Some((module, name)) = spec.rsplit_once('.') else {
            bail!(
                "target function must be a qualified name like 'fmt.Sprintf' but found '{}'",
                spec
            );
        };
        if module.is_empty() || module.ends_with('/') {
            bail!("target function '{}' has an empty module path", spec);
        }
        if !IDENTIFIER_REGEX.is_match(name) {
            bail!(
                "target function '{}' does not end in a valid identifier ('{}')",
                spec,
                name
            );
        }
        Ok(Self::new(module, name))
    }

    /// Whether `alias.name` names this function, given the import path the
    /// alias resolves to in the current file.
    pub fn matches(&self, import_path: Option<&str>, name: &str) -> bool {
        name == self.name && import_path == Some(self.module.as_str())
    }
}

impl Default for TargetFunction {
    fn default() -> Self {
        Self::new("fmt", "Sprintf")
    }
}

impl FromStr for TargetFunction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TargetFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.module, self.name)
    }
}
