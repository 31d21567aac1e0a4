use std::env;
use std::io::Write;
use std::path::PathBuf;

use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::cleaner::{CleanReport, Deletion, TreeCleaner};
use crate::filesystem::{StdDirectoryReader, TreeNode};

pub struct Application;

impl Application {
    /// Sweeps the empty directories below the current working directory.
    ///
    /// Dry-run announcements are written to `out`.
    pub fn run(
        app_config: impl Into<RuntimeConfig>,
        out: impl Write,
    ) -> Result<CleanReport, ApplicationError> {
        let root = env::current_dir().context(CurrentDirSnafu)?;
        Ok(Self::sweep(root, &app_config.into(), out))
    }

    /// Scans `root` and then removes every empty subtree below it, as seen
    /// in that scan.
    pub fn sweep(root: PathBuf, app_config: &RuntimeConfig, out: impl Write) -> CleanReport {
        debug!("Scanning {} with {app_config:?}", root.display());
        let tree = TreeNode::build(root, &StdDirectoryReader);

        let mut deletion = Deletion::new(app_config.dry_run, out);
        let report = TreeCleaner::clean(&tree, &mut deletion);

        let verb = if app_config.dry_run {
            "Would remove"
        } else {
            "Removed"
        };
        info!(
            "{verb} {} empty directories, {} failed",
            report.removed.len(),
            report.failed.len()
        );
        report
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Couldn't get current working directory"))]
    CurrentDirError { source: std::io::Error },
}
