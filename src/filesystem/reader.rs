use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A single entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Lists the entries of a directory.
pub trait DirectoryReader {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>>;
}

/// Reads directories with `std::fs`.
///
/// Entries are typed by the entry itself, so a symbolic link is never
/// followed and always shows up as a non-directory. The listing is sorted by
/// file name.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDirectoryReader;

impl DirectoryReader for StdDirectoryReader {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>> {
        let mut entries = fs::read_dir(path)?
            .map(|entry| {
                let entry = entry?;
                let is_dir = entry.file_type()?.is_dir();
                Ok(DirectoryEntry {
                    path: path.join(entry.file_name()),
                    is_dir,
                })
            })
            .collect::<io::Result<Vec<_>>>()?;

        entries.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_dir_sorted_and_typed() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir(temp_dir.path().join("b")).expect("Failed to create dir");
        fs::write(temp_dir.path().join("a.txt"), "a").expect("Failed to write file");
        fs::create_dir(temp_dir.path().join("c")).expect("Failed to create dir");

        let entries = StdDirectoryReader
            .read_dir(temp_dir.path())
            .expect("Failed to read temp directory");

        assert_eq!(
            entries,
            vec![
                DirectoryEntry {
                    path: temp_dir.path().join("a.txt"),
                    is_dir: false,
                },
                DirectoryEntry {
                    path: temp_dir.path().join("b"),
                    is_dir: true,
                },
                DirectoryEntry {
                    path: temp_dir.path().join("c"),
                    is_dir: true,
                },
            ]
        );
    }

    #[test]
    fn test_read_dir_missing_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        let result = StdDirectoryReader.read_dir(&temp_dir.path().join("missing"));

        assert_eq!(
            result.map_err(|e| e.kind()).unwrap_err(),
            io::ErrorKind::NotFound
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_read_dir_does_not_follow_symlinks() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir(temp_dir.path().join("target")).expect("Failed to create dir");
        std::os::unix::fs::symlink(temp_dir.path().join("target"), temp_dir.path().join("link"))
            .expect("Failed to create symlink");

        let entries = StdDirectoryReader
            .read_dir(temp_dir.path())
            .expect("Failed to read temp directory");

        let link = entries
            .iter()
            .find(|e| e.path.ends_with("link"))
            .expect("Symlink missing from listing");
        assert!(!link.is_dir);
    }
}
