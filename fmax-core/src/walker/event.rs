use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Notification passed to the handler once per discovered file.
///
/// Lives only for the duration of one handler call. Setting the cancel
/// flag stops the walk before any further entry is visited.
#[derive(Debug)]
pub struct FileFound {
    path: PathBuf,
    cancel: bool,
}

impl FileFound {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self {
            path,
            cancel: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Request that the walk stop after this notification.
    pub fn cancel(&mut self) {
        self.cancel = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel
    }
}

/// A discovered file with its size captured at discovery time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Absolute path to the file
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
}

impl FileRecord {
    /// Build a record by reading the file's metadata now.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let metadata = fs::metadata(&path)?;
        Ok(Self {
            size: metadata.len(),
            path,
        })
    }
}
