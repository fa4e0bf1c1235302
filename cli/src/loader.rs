use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Required file extension for scripts.
pub const EXTENSION: &str = "t14";

#[derive(Debug)]
pub enum LoadError {
    NotFound(PathBuf),
    WrongExtension(PathBuf),
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound(path) => {
                write!(f, "file named {} could not be found", path.display())
            }
            LoadError::WrongExtension(path) => write!(
                f,
                "file named {} does not end with extension \".{}\"",
                path.display(),
                EXTENSION
            ),
            LoadError::Io { path, source } => {
                write!(f, "cannot read '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Strip one pair of surrounding double quotes from a path argument.
pub fn unquote(arg: &str) -> &str {
    arg.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(arg)
}

/// Read a script, rejecting missing files before files with the wrong extension.
pub fn load(path: &Path) -> Result<String, LoadError> {
    if !path.is_file() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
        return Err(LoadError::WrongExtension(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
