//! Error types for the modmap tooling.

use std::fmt;
use std::path::PathBuf;

/// Result type for modmap tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

/// Errors that can occur while decoding inputs, resolving dependencies
/// or emitting modmaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// Failed to read or write a file.
    Io(PathBuf, String),

    /// Invalid JSON in a ddi or registry file.
    Json(PathBuf, String),

    /// A ddi file violated a structural validity check.
    MalformedDdi {
        file: PathBuf,
        message: String,
    },

    /// A transitively required module has no registry entry.
    ModuleNotFound(String),

    /// Unrecognized compiler kind.
    UnknownCompiler(String),
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolError::Io(path, msg) => {
                write!(f, "{}: {}", path.display(), msg)
            }
            ToolError::Json(path, msg) => {
                write!(f, "{}: invalid JSON: {}", path.display(), msg)
            }
            ToolError::MalformedDdi { file, message } => {
                write!(f, "{}: bad ddi: {}", file.display(), message)
            }
            ToolError::ModuleNotFound(name) => {
                write!(f, "module not found in registry: {}", name)
            }
            ToolError::UnknownCompiler(compiler) => {
                write!(
                    f,
                    "unknown compiler: {} (expected clang, gcc or msvc-cl)",
                    compiler
                )
            }
        }
    }
}

impl std::error::Error for ToolError {}
