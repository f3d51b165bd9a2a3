use std::path::PathBuf;

use glob::Pattern as GlobPattern;
use jwalk::{Parallelism, WalkDir};

use super::event::FileFound;
use crate::error::{FmaxError, Result};

/// Parameters for one walk
#[derive(Debug, Clone)]
pub struct WalkRequest {
    /// Directory to walk (must exist)
    pub root: PathBuf,
    /// Glob pattern matched against file names
    pub pattern: String,
    /// Descend into subdirectories
    pub recursive: bool,
}

impl WalkRequest {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            pattern: "*".to_string(),
            recursive: true,
        }
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    fn validate(&self) -> Result<GlobPattern> {
        if self.root.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(FmaxError::EmptyRootPath);
        }
        if !self.root.exists() {
            return Err(FmaxError::PathNotFound(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(FmaxError::NotADirectory(self.root.clone()));
        }
        GlobPattern::new(&self.pattern).map_err(|e| FmaxError::InvalidPattern {
            pattern: self.pattern.clone(),
            reason: e.to_string(),
        })
    }
}

/// Walk the directory tree described by `request`, invoking `on_found` once
/// per matching file, in enumeration order.
///
/// The handler runs in-line on the calling thread; the walk is blocked until
/// it returns. After each call the event's cancel flag is inspected, and a
/// set flag stops enumeration before any further entry is visited. Paths are
/// emitted absolute. Entry errors abort the walk; it is not resumable.
pub fn walk<F>(request: &WalkRequest, mut on_found: F) -> Result<()>
where
    F: FnMut(&mut FileFound),
{
    let pattern = request.validate()?;
    let root = request
        .root
        .canonicalize()
        .unwrap_or_else(|_| request.root.clone());

    let walker = WalkDir::new(&root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(false)
        .parallelism(Parallelism::Serial);

    let walker = if request.recursive {
        walker
    } else {
        walker.max_depth(1)
    };

    for entry_result in walker {
        let entry = entry_result?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let matches = path
            .file_name()
            .is_some_and(|name| pattern.matches(&name.to_string_lossy()));
        if !matches {
            continue;
        }

        let mut event = FileFound::new(path);
        on_found(&mut event);
        if event.is_cancelled() {
            break;
        }
    }

    Ok(())
}
