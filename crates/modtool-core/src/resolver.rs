//! Transitive closure of a unit's module requirements.

use std::collections::{HashSet, VecDeque};

use crate::ddi::ModuleDep;
use crate::error::{ToolError, ToolResult};
use crate::registry::ModulesInfo;

/// One resolved reference: a module name and the artifact that provides it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ModmapEntry {
    /// Module name.
    pub name: String,
    /// Path to the module's built artifact.
    pub path: String,
}

/// Computes the full set of modules the unit needs references to.
///
/// Walks usage edges breadth-first from the unit's direct requirements.
/// Every reachable name must have an artifact path in the registry; a
/// missing entry fails the whole resolution with
/// [`ToolError::ModuleNotFound`], since an incomplete modmap would only
/// surface later as an opaque compiler diagnostic.
///
/// The unit's own provided module is never part of the result, even if
/// some dependency chain leads back to it. Entries are returned sorted
/// by name so emitted output is reproducible.
pub fn resolve(dep: &ModuleDep, info: &ModulesInfo) -> ToolResult<Vec<ModmapEntry>> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<&str> = dep.requires.iter().map(String::as_str).collect();

    // A unit never references its own module.
    if let Some(name) = &dep.provides {
        visited.insert(name.clone());
    }

    let mut closure: Vec<String> = Vec::new();
    while let Some(name) = queue.pop_front() {
        if !visited.insert(name.to_string()) {
            continue;
        }
        closure.push(name.to_string());

        if let Some(targets) = info.usages.get(name) {
            for target in targets {
                if !visited.contains(target.as_str()) {
                    queue.push_back(target.as_str());
                }
            }
        }
    }

    closure.sort();

    let mut entries = Vec::with_capacity(closure.len());
    for name in closure {
        match info.modules.get(&name) {
            Some(path) => entries.push(ModmapEntry {
                name,
                path: path.clone(),
            }),
            None => return Err(ToolError::ModuleNotFound(name)),
        }
    }
    Ok(entries)
}
