//! Decoder for ddi (dependency descriptor) files.
//!
//! A ddi file is the JSON output of the compiler's dependency-scanning
//! phase, in the P1689 shape:
//! ```text
//! {
//!   "rules": [
//!     {
//!       "provides": [{"logical-name": "foo"}],
//!       "requires": [{"logical-name": "bar"}, {"logical-name": "baz"}]
//!     }
//!   ]
//! }
//! ```
//!
//! A well-formed ddi has at most one rule and at most one provides entry.
//! An empty rules array is a valid descriptor for a unit that neither
//! provides nor requires any module.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ToolError, ToolResult};

/// A unit's direct module dependencies, decoded from its ddi file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleDep {
    /// The module this unit provides, if it provides one.
    pub provides: Option<String>,

    /// Names of modules this unit directly requires.
    pub requires: Vec<String>,
}

#[derive(Deserialize)]
struct DdiFile {
    #[serde(default)]
    rules: Vec<DdiRule>,
}

#[derive(Deserialize)]
struct DdiRule {
    #[serde(default)]
    provides: Vec<LogicalName>,
    #[serde(default)]
    requires: Vec<LogicalName>,
}

#[derive(Deserialize)]
struct LogicalName {
    #[serde(rename = "logical-name")]
    logical_name: String,
}

impl ModuleDep {
    /// Decodes a ddi file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ToolResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ToolError::Io(path.to_path_buf(), e.to_string()))?;
        Self::parse(&content, path)
    }

    /// Decodes ddi content from a string.
    ///
    /// `file_path` is only used in error messages.
    pub fn parse(content: &str, file_path: &Path) -> ToolResult<Self> {
        let ddi: DdiFile = serde_json::from_str(content)
            .map_err(|e| ToolError::Json(file_path.to_path_buf(), e.to_string()))?;

        if ddi.rules.len() > 1 {
            return Err(ToolError::MalformedDdi {
                file: file_path.to_path_buf(),
                message: format!("expected at most one rule, found {}", ddi.rules.len()),
            });
        }

        let rule = match ddi.rules.into_iter().next() {
            Some(rule) => rule,
            None => return Ok(ModuleDep::default()),
        };

        if rule.provides.len() > 1 {
            return Err(ToolError::MalformedDdi {
                file: file_path.to_path_buf(),
                message: format!(
                    "expected at most one provides entry, found {}",
                    rule.provides.len()
                ),
            });
        }

        Ok(ModuleDep {
            provides: rule.provides.into_iter().next().map(|p| p.logical_name),
            requires: rule.requires.into_iter().map(|r| r.logical_name).collect(),
        })
    }
}
