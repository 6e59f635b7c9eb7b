//! In-memory mock filesystem for testing collectors without real `/proc`.
//!
//! `MockFs` simulates a filesystem in memory so tests can run on macOS and in
//! CI environments without Linux.

use crate::collector::traits::FileSystem;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MockFs {
    /// Map from path to file contents.
    files: HashMap<PathBuf, String>,
    /// Parent directories of every added file.
    directories: HashSet<PathBuf>,
}

impl MockFs {
    /// Creates a new empty mock filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with the given content, replacing any previous content.
    ///
    /// Parent directories are automatically created.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref().to_path_buf();

        let mut parent = path.parent();
        while let Some(p) = parent {
            if !p.as_os_str().is_empty() {
                self.directories.insert(p.to_path_buf());
            }
            parent = p.parent();
        }

        self.files.insert(path, content.into());
    }

    /// Removes a file, simulating it vanishing between reads.
    pub fn remove_file(&mut self, path: impl AsRef<Path>) {
        self.files.remove(path.as_ref());
    }

    /// Loads a mock filesystem holding a copy of a real file under `virtual_path`.
    ///
    /// Useful for regression tests against captured `/proc/net/dev` tables.
    pub fn from_file(real_path: &Path, virtual_path: impl AsRef<Path>) -> io::Result<Self> {
        let mut fs = Self::new();
        fs.add_file(virtual_path, std::fs::read_to_string(real_path)?);
        Ok(fs)
    }
}

impl FileSystem for MockFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {:?}", path),
            )
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.directories.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_fs_add_file() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/net/dev", "Inter-|\n face |\n");

        assert!(fs.exists(Path::new("/proc/net/dev")));
        assert!(fs.exists(Path::new("/proc/net")));
        assert!(fs.exists(Path::new("/proc")));

        let content = fs.read_to_string(Path::new("/proc/net/dev")).unwrap();
        assert_eq!(content, "Inter-|\n face |\n");
    }

    #[test]
    fn test_mock_fs_remove_file() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/net/dev", "content");
        fs.remove_file("/proc/net/dev");

        assert!(!fs.exists(Path::new("/proc/net/dev")));
        assert!(fs.read_to_string(Path::new("/proc/net/dev")).is_err());
    }

    #[test]
    fn test_mock_fs_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("proc.net.dev");
        std::fs::write(&real, "captured").unwrap();

        let fs = MockFs::from_file(&real, "/proc/net/dev").unwrap();
        let content = fs.read_to_string(Path::new("/proc/net/dev")).unwrap();
        assert_eq!(content, "captured");
    }

    #[test]
    fn test_mock_fs_not_found() {
        let fs = MockFs::new();
        let result = fs.read_to_string(Path::new("/nonexistent"));
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
