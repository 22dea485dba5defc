use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFailure {
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearReport {
    pub removed: Vec<PathBuf>,
    pub failures: Vec<EntryFailure>,
}

impl ClearReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

pub fn ensure_directory(path: &Path) -> io::Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(path)
}

pub fn is_empty_directory(path: &Path) -> io::Result<bool> {
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Removes every top-level entry of `path`. Files and empty directories are
/// removed; a non-empty directory is left in place and recorded as a
/// failure. One failing entry never stops the others.
pub fn clear_directory(path: &Path) -> io::Result<ClearReport> {
    let mut entries: Vec<PathBuf> = fs::read_dir(path)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .collect();
    entries.sort();

    let mut report = ClearReport::default();
    for entry in entries {
        let result = if entry.is_dir() && !entry.is_symlink() {
            fs::remove_dir(&entry)
        } else {
            fs::remove_file(&entry)
        };

        match result {
            Ok(()) => {
                debug!(path = %entry.display(), "removed entry");
                report.removed.push(entry);
            }
            Err(error) => {
                warn!(path = %entry.display(), %error, "failed to remove entry");
                report.failures.push(EntryFailure {
                    path: entry,
                    message: error.to_string(),
                });
            }
        }
    }

    Ok(report)
}
