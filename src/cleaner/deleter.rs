use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::{debug, warn};

/// Disposes of a path the cleaner picked for deletion.
pub trait Deleter {
    fn delete(&mut self, path: &Path) -> Result<(), DeleteError>;
}

/// Announces each path on a writer instead of removing it.
#[derive(Debug)]
pub struct DryRunDeleter<W: Write> {
    out: W,
}

impl<W: Write> DryRunDeleter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Deleter for DryRunDeleter<W> {
    // Never fails: a broken output stream only costs the announcement.
    fn delete(&mut self, path: &Path) -> Result<(), DeleteError> {
        if let Err(e) = writeln!(self.out, "{}", path.display()) {
            warn!("Couldn't report {}: {e}", path.display());
        }
        Ok(())
    }
}

/// Recursively removes the path from the filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LiveDeleter;

impl Deleter for LiveDeleter {
    fn delete(&mut self, path: &Path) -> Result<(), DeleteError> {
        debug!("Removing {}", path.display());
        fs::remove_dir_all(path).context(DeleteSnafu {
            path: path.to_path_buf(),
        })
    }
}

/// The deletion strategy selected for a run.
#[derive(Debug)]
pub enum Deletion<W: Write> {
    DryRun(DryRunDeleter<W>),
    Live(LiveDeleter),
}

impl<W: Write> Deletion<W> {
    pub fn new(dry_run: bool, out: W) -> Self {
        if dry_run {
            Deletion::DryRun(DryRunDeleter::new(out))
        } else {
            Deletion::Live(LiveDeleter)
        }
    }
}

impl<W: Write> Deleter for Deletion<W> {
    fn delete(&mut self, path: &Path) -> Result<(), DeleteError> {
        match self {
            Deletion::DryRun(deleter) => deleter.delete(path),
            Deletion::Live(deleter) => deleter.delete(path),
        }
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)), display("Failed to delete {}: {source}", path.display()))]
pub struct DeleteError {
    path: PathBuf,
    source: std::io::Error,
}

impl DeleteError {
    pub fn path(&self) -> &Path {
        &self.path
    }
}
