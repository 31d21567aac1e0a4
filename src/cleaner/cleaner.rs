use std::path::PathBuf;

use tracing::warn;

use crate::cleaner::Deleter;
use crate::filesystem::TreeNode;

/// Outcome of a cleaning pass, in walk order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanReport {
    pub removed: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

pub struct TreeCleaner;

impl TreeCleaner {
    /// Hands every empty subtree below `root` to `deleter`.
    ///
    /// Only the topmost empty directory of a subtree is passed on, the
    /// deleter is expected to take everything under it along. Non-empty
    /// directories are descended into. `root` itself is never deleted.
    pub fn clean(root: &TreeNode, deleter: &mut impl Deleter) -> CleanReport {
        let mut report = CleanReport::default();
        Self::clean_children(root, deleter, &mut report);
        report
    }

    fn clean_children(node: &TreeNode, deleter: &mut impl Deleter, report: &mut CleanReport) {
        for child in node.children() {
            if !child.is_empty() {
                Self::clean_children(child, deleter, report);
                continue;
            }

            match deleter.delete(child.path()) {
                Ok(()) => report.removed.push(child.path().to_path_buf()),
                Err(e) => {
                    warn!("{e}");
                    report.failed.push(e.path().to_path_buf());
                }
            }
        }
    }
}
