//! Error taxonomy for a generation run.
//!
//! Every variant is fatal: the library returns it up to the binary, which logs
//! it once and exits non-zero. Skipping a user-owned artifact that already
//! exists is not an error and never produces one of these.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Convenience alias used throughout the crate.
pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;

/// Failure raised while loading, enriching or materialising a project.
#[derive(Debug)]
pub enum ScaffoldError {
    /// The declaration is invalid.
    ///
    /// Raised before any file is touched: unsupported field type, missing
    /// required value, malformed test value, undecodable declaration file.
    Config {
        /// Human readable description including the offending location
        message: String,
    },
    /// A file system operation failed.
    Io {
        /// Path the operation was applied to
        path: PathBuf,
        /// What was being attempted ("create directory", "write file", ...)
        action: &'static str,
        /// Underlying cause
        source: io::Error,
    },
    /// A template could not be compiled, found or executed.
    Template {
        /// Catalog name of the template
        name: String,
        /// Target file, when the failure happened during materialisation
        path: Option<PathBuf>,
        /// Underlying engine error
        source: minijinja::Error,
    },
}

impl ScaffoldError {
    pub fn config(message: impl Into<String>) -> Self {
        ScaffoldError::Config {
            message: message.into(),
        }
    }

    pub fn io(action: &'static str, path: impl AsRef<Path>, source: io::Error) -> Self {
        ScaffoldError::Io {
            path: path.as_ref().to_path_buf(),
            action,
            source,
        }
    }

    pub fn template(name: impl Into<String>, source: minijinja::Error) -> Self {
        ScaffoldError::Template {
            name: name.into(),
            path: None,
            source,
        }
    }

    /// Attach the target path to a template error raised while rendering it.
    pub fn with_path(self, target: impl AsRef<Path>) -> Self {
        match self {
            ScaffoldError::Template { name, source, .. } => ScaffoldError::Template {
                name,
                path: Some(target.as_ref().to_path_buf()),
                source,
            },
            other => other,
        }
    }

    /// True for configuration errors.
    pub fn is_config(&self) -> bool {
        matches!(self, ScaffoldError::Config { .. })
    }
}

impl fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaffoldError::Config { message } => {
                write!(f, "configuration error: {message}")
            }
            ScaffoldError::Io {
                path,
                action,
                source,
            } => {
                write!(f, "cannot {action} {} - {source}", path.display())
            }
            ScaffoldError::Template {
                name,
                path: Some(path),
                source,
            } => {
                write!(
                    f,
                    "error creating file {} from template {name} - {source}",
                    path.display()
                )
            }
            ScaffoldError::Template {
                name,
                path: None,
                source,
            } => {
                write!(f, "template {name} - {source}")
            }
        }
    }
}

impl std::error::Error for ScaffoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScaffoldError::Config { .. } => None,
            ScaffoldError::Io { source, .. } => Some(source),
            ScaffoldError::Template { source, .. } => Some(source),
        }
    }
}
