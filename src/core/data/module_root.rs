use std::{
    env,
    path::{Path, PathBuf},
};

/// Directory under which module path `p` lives at `<root>/p`.
///
/// This is the GOPATH convention: with `GOPATH=/go`, the import
/// `github.com/acme/app/pkg` is looked up in `/go/src/github.com/acme/app/pkg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRoot {
    root: PathBuf,
}

impl ModuleRoot {
    /// Wrap `root`, canonicalizing it when it exists.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            root: canonicalize_or_keep(root),
        }
    }

    /// `$GOPATH/src`, or the current directory when `GOPATH` is unset.
    pub fn from_env() -> Self {
        match env::var_os("GOPATH").filter(|v| !v.is_empty()) {
            Some(gopath) => Self::new(PathBuf::from(gopath).join("src")),
            None => Self::new("."),
        }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Module path of a directory: the part below the root, or the
    /// directory itself when it is outside the root.
    pub fn module_path_for(&self, dir: &Path) -> String {
        let dir = canonicalize_or_keep(dir);
        match dir.strip_prefix(&self.root) {
            Ok(rel) => to_slash(rel),
            Err(_) => to_slash(&dir),
        }
    }

    /// Directory holding the files of `module_path`.
    ///
    /// Absolute paths and paths already under the root are taken as-is.
    pub fn dir_for(&self, module_path: &str) -> PathBuf {
        let path = Path::new(module_path);
        if path.is_absolute() || path.starts_with(&self.root) {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl Default for ModuleRoot {
    fn default() -> Self {
        Self::from_env()
    }
}

/// `fs::canonicalize`, falling back to the input for paths that don't exist.
pub fn canonicalize_or_keep(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
        .replace("//", "/")
}
