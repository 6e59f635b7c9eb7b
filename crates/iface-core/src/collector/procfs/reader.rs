//! Stats reader for gathering per-interface counters from `/proc/net/dev`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::collector::procfs::parser::{ParseError, parse_net_dev};
use crate::collector::traits::FileSystem;
use crate::model::StatsSnapshot;

/// Well-known location of the kernel's interface statistics table.
pub const DEFAULT_NET_DEV_PATH: &str = "/proc/net/dev";

/// Error type for collection failures.
#[derive(Debug)]
pub enum CollectError {
    /// I/O error reading the source file.
    Io(std::io::Error),
    /// The source file content is malformed.
    Parse(ParseError),
    /// A requested metric is not present in the snapshot.
    Lookup(String),
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectError::Io(e) => write!(f, "I/O error: {}", e),
            CollectError::Parse(e) => write!(f, "{}", e),
            CollectError::Lookup(msg) => write!(f, "lookup error: {}", msg),
        }
    }
}

impl std::error::Error for CollectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CollectError::Io(e) => Some(e),
            CollectError::Parse(e) => Some(e),
            CollectError::Lookup(_) => None,
        }
    }
}

impl From<std::io::Error> for CollectError {
    fn from(e: std::io::Error) -> Self {
        CollectError::Io(e)
    }
}

impl From<ParseError> for CollectError {
    fn from(e: ParseError) -> Self {
        CollectError::Parse(e)
    }
}

/// Reads `/proc/net/dev` (or a stand-in file) into a [`StatsSnapshot`].
pub struct StatsReader<F: FileSystem> {
    fs: F,
    path: PathBuf,
}

impl<F: FileSystem> StatsReader<F> {
    /// Creates a new stats reader.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `path` - Path to the statistics table (usually `/proc/net/dev`)
    pub fn new(fs: F, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns whether the source file is present.
    pub fn source_exists(&self) -> bool {
        self.fs.exists(&self.path)
    }

    /// Reads and parses the whole table.
    ///
    /// Either every row parses or the call fails; no partial snapshot is
    /// returned.
    pub fn read(&self) -> Result<StatsSnapshot, CollectError> {
        let content = self.fs.read_to_string(&self.path)?;
        let snapshot = parse_net_dev(&content)?;

        debug!(
            path = %self.path.display(),
            interfaces = snapshot.len(),
            "read interface statistics"
        );
        Ok(snapshot)
    }
}
