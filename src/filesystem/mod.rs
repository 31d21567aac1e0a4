//! In-memory snapshot of a directory hierarchy.
//!
//! The tree is built once from the live filesystem and every directory in it
//! is classified as empty (it holds nothing but, transitively, empty
//! directories) or not. Later passes only read the snapshot.

mod reader;
mod tree;

pub use reader::{DirectoryReader, StdDirectoryReader};
pub use tree::TreeNode;

#[cfg(test)]
pub(crate) use reader::DirectoryEntry;
