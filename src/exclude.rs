//! The fixed set of directory names skipped during traversal

use std::collections::HashSet;

/// Directory names excluded by default: dependency caches, bytecode caches,
/// version-control metadata, and editor configuration.
const DEFAULT_NAMES: &[&str] = &[
    "node_modules",
    "__pycache__",
    ".git",
    ".vscode",
    ".idea",
    ".DS_Store",
];

/// A set of directory names to skip entirely while walking.
///
/// Matching is exact base-name equality; there is no pattern support.
#[derive(Debug, Clone)]
pub struct ExcludeSet {
    names: HashSet<&'static str>,
}

impl ExcludeSet {
    /// The standard set: dependency caches, bytecode caches, VCS metadata,
    /// and editor settings directories.
    pub fn standard() -> Self {
        Self {
            names: DEFAULT_NAMES.iter().copied().collect(),
        }
    }

    /// A minimal variant that skips only `node_modules`.
    pub fn node_modules_only() -> Self {
        Self {
            names: std::iter::once("node_modules").collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl Default for ExcludeSet {
    fn default() -> Self {
        Self::standard()
    }
}
