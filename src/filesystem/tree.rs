use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::filesystem::DirectoryReader;

/// Classification of a node in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Anything that is not a directory. Never empty.
    File,
    /// A directory that was listed successfully.
    Directory {
        children: Vec<TreeNode>,
        empty: bool,
    },
    /// A directory whose listing failed. Never empty, since its content is unknown.
    Unreadable,
}

/// One filesystem entry of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    path: PathBuf,
    kind: NodeKind,
}

impl TreeNode {
    /// Walks the directory at `path` and returns it with every descendant
    /// classified.
    ///
    /// A directory is empty when its listing has no entries, or when all of
    /// its children are empty directories. A listing failure is logged and
    /// the directory is kept as [`NodeKind::Unreadable`]; the walk continues
    /// with its siblings.
    pub fn build(path: PathBuf, reader: &impl DirectoryReader) -> Self {
        let entries = match reader.read_dir(&path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Couldn't read {}, skipping: {e}", path.display());
                return Self {
                    path,
                    kind: NodeKind::Unreadable,
                };
            }
        };

        let children: Vec<TreeNode> = entries
            .into_iter()
            .map(|entry| {
                if entry.is_dir {
                    Self::build(entry.path, reader)
                } else {
                    Self::file(entry.path)
                }
            })
            .collect();

        // An empty listing yields an empty directory too
        let empty = children.iter().all(TreeNode::is_empty);
        debug!("Scanned {} (empty: {empty})", path.display());

        Self {
            path,
            kind: NodeKind::Directory { children, empty },
        }
    }

    fn file(path: PathBuf) -> Self {
        Self {
            path,
            kind: NodeKind::File,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn children(&self) -> &[TreeNode] {
        match &self.kind {
            NodeKind::Directory { children, .. } => children,
            NodeKind::File | NodeKind::Unreadable => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        match self.kind {
            NodeKind::Directory { empty, .. } => empty,
            NodeKind::File | NodeKind::Unreadable => false,
        }
    }

    /// Finds the node for `path` in this subtree.
    #[cfg(test)]
    pub fn find(&self, path: &Path) -> Option<&TreeNode> {
        if self.path == path {
            return Some(self);
        }
        if !path.starts_with(&self.path) {
            return None;
        }
        self.children().iter().find_map(|child| child.find(path))
    }
}
