//! Directory tree walking logic

use std::fs;
use std::io;
use std::path::Path;

use crate::exclude::ExcludeSet;

/// Sink for tree lines - receives one call per printed entry.
pub trait TreeOutput {
    fn entry(&mut self, prefix: &str, name: &str, is_dir: bool) -> io::Result<()>;
}

/// Depth-first walker that emits one entry per filesystem object,
/// skipping directories whose name is in the exclude set.
///
/// Children are emitted in `read_dir` order; no sorting is applied, so
/// ordering is whatever the underlying filesystem returns.
pub struct TreeWalker {
    excludes: ExcludeSet,
}

impl TreeWalker {
    pub fn new(excludes: ExcludeSet) -> Self {
        Self { excludes }
    }

    /// Walk `root` and emit its entries through `output`.
    ///
    /// Errors from listing or reading entries propagate to the caller;
    /// there is no local recovery.
    pub fn walk<O: TreeOutput>(&self, root: &Path, output: &mut O) -> io::Result<()> {
        self.walk_dir(root, "", output)
    }

    fn walk_dir<O: TreeOutput>(
        &self,
        dir: &Path,
        prefix: &str,
        output: &mut O,
    ) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();

            // The is-directory query follows symlinks; exclusion applies
            // only to directories, so a file named like an excluded
            // directory is still printed.
            if path.is_dir() {
                if self.excludes.contains(&name) {
                    continue;
                }
                output.entry(prefix, &name, true)?;
                let child_prefix = format!("{prefix}│   ");
                self.walk_dir(&path, &child_prefix, output)?;
            } else {
                output.entry(prefix, &name, false)?;
            }
        }
        Ok(())
    }
}
