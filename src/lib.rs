//! Sprig - prints a directory tree, skipping well-known noise directories

pub mod exclude;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use exclude::ExcludeSet;
pub use output::TreeFormatter;
pub use tree::{TreeOutput, TreeWalker};
