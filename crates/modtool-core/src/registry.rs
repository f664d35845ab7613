//! The module registry: artifact paths and usage edges for every known module.
//!
//! JSON shape:
//! ```text
//! {
//!   "modules": {"foo": "/out/foo.pcm"},
//!   "usages": {"foo": ["bar"]}
//! }
//! ```
//!
//! Registries are built by aggregation (see the `agg-ddi` command): each
//! compiled unit contributes the module it provides, and the registries of
//! direct dependencies are merged in, so a unit's registry covers its whole
//! transitive dependency graph.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ToolError, ToolResult};

/// Registry mapping module names to built artifact paths and direct usages.
///
/// A name absent from `usages` is a leaf: no known further dependencies,
/// not an error. Sorted maps keep the serialized registry byte-stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulesInfo {
    /// Module name -> built artifact path.
    #[serde(default)]
    pub modules: BTreeMap<String, String>,

    /// Module name -> names it directly requires.
    #[serde(default)]
    pub usages: BTreeMap<String, Vec<String>>,
}

impl ModulesInfo {
    /// Decodes a registry file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ToolResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ToolError::Io(path.to_path_buf(), e.to_string()))?;
        Self::parse(&content, path)
    }

    /// Decodes registry content from a string.
    ///
    /// `file_path` is only used in error messages.
    pub fn parse(content: &str, file_path: &Path) -> ToolResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| ToolError::Json(file_path.to_path_buf(), e.to_string()))
    }

    /// Records the module a unit provides: its artifact path and the
    /// modules it directly requires.
    pub fn insert(&mut self, name: String, artifact_path: String, requires: Vec<String>) {
        self.modules.insert(name.clone(), artifact_path);
        self.usages.insert(name, requires);
    }

    /// Merges another registry into this one. Later entries win on key
    /// collision; registries are assumed internally consistent, so a
    /// collision carries the same value either way.
    pub fn merge(&mut self, other: ModulesInfo) {
        self.modules.extend(other.modules);
        self.usages.extend(other.usages);
    }

    /// Writes the registry as pretty-printed JSON to the given path.
    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> ToolResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ToolError::Json(path.to_path_buf(), e.to_string()))?;
        fs::write(path, json).map_err(|e| ToolError::Io(path.to_path_buf(), e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(content: &str) -> ToolResult<ModulesInfo> {
        ModulesInfo::parse(content, &PathBuf::from("test.json"))
    }

    #[test]
    fn test_parse_registry() {
        let info = parse(
            r#"{"modules": {"foo": "/out/foo.pcm", "bar": "/out/bar.pcm"},
                "usages": {"foo": ["bar"]}}"#,
        )
        .unwrap();

        assert_eq!(info.modules["foo"], "/out/foo.pcm");
        assert_eq!(info.usages["foo"], vec!["bar".to_string()]);
        // "bar" has no usages entry: a leaf, not an error.
        assert!(!info.usages.contains_key("bar"));
    }

    #[test]
    fn test_parse_empty_object() {
        let info = parse("{}").unwrap();

        assert!(info.modules.is_empty());
        assert!(info.usages.is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse("[1, 2");

        assert!(matches!(result, Err(ToolError::Json(_, _))));
    }

    #[test]
    fn test_insert_records_module_and_usages() {
        let mut info = ModulesInfo::default();
        info.insert("app".to_string(), "/out/app.pcm".to_string(), vec!["util".to_string()]);

        assert_eq!(info.modules["app"], "/out/app.pcm");
        assert_eq!(info.usages["app"], vec!["util".to_string()]);
    }

    #[test]
    fn test_merge_later_wins() {
        let mut base = ModulesInfo::default();
        base.insert("foo".to_string(), "/old/foo.pcm".to_string(), vec![]);

        let mut other = ModulesInfo::default();
        other.insert("foo".to_string(), "/new/foo.pcm".to_string(), vec!["bar".to_string()]);
        other.insert("bar".to_string(), "/out/bar.pcm".to_string(), vec![]);

        base.merge(other);

        assert_eq!(base.modules["foo"], "/new/foo.pcm");
        assert_eq!(base.usages["foo"], vec!["bar".to_string()]);
        assert_eq!(base.modules["bar"], "/out/bar.pcm");
    }

    #[test]
    fn test_write_file_round_trips() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("info.json");

        let mut info = ModulesInfo::default();
        info.insert("foo".to_string(), "/out/foo.pcm".to_string(), vec!["bar".to_string()]);
        info.insert("bar".to_string(), "/out/bar.pcm".to_string(), vec![]);
        info.write_file(&path).unwrap();

        let reloaded = ModulesInfo::from_file(&path).unwrap();
        assert_eq!(reloaded, info);
    }
}
