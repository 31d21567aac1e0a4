//! Removal of the empty subtrees found in a scanned tree.

mod cleaner;
mod deleter;

pub use cleaner::{CleanReport, TreeCleaner};
pub use deleter::{Deleter, Deletion};

#[cfg(test)]
pub(crate) use deleter::{DeleteError, DeleteSnafu, LiveDeleter};
