//! # Express Starter Directory Clearing
//!
//! File: cli/src/common/fs/clean.rs
//!
//! ## Overview
//!
//! Implements the `Remove` overwrite decision: delete everything inside the
//! target directory except the version-control metadata directory, leaving
//! the directory itself (and its git history) in place. The session driver
//! calls this exactly once, strictly after the whole questionnaire has
//! completed, so a later cancellation can never follow a partial wipe.
//!
use crate::common::fs::inspect::VCS_METADATA_DIR;
use crate::core::error::Result;
use anyhow::Context;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Removes every entry under `dir` except the version-control metadata
/// directory. A missing `dir` is a no-op, and entries that vanish between
/// listing and removal are tolerated.
pub fn empty_dir_keeping_vcs(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }
    info!("Clearing existing directory: {}", dir.display());
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory '{}'", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| {
            format!("Failed to read an entry of directory '{}'", dir.display())
        })?;
        if entry.file_name() == VCS_METADATA_DIR {
            debug!("Keeping version-control metadata: {}", VCS_METADATA_DIR);
            continue;
        }
        remove_entry(&entry.path())?;
    }
    Ok(())
}

/// Removes a single path, directory or file, treating "already gone" as done.
fn remove_entry(path: &Path) -> Result<()> {
    let result = if path.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    match result {
        Ok(()) => {
            debug!("Removed: {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => {
            Err(e).with_context(|| format!("Failed to remove '{}'", path.display()))
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_clears_files_and_directories() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.js"), "x").unwrap();
        fs::create_dir_all(dir.path().join("routes/nested")).unwrap();
        fs::write(dir.path().join("routes/nested/a.js"), "y").unwrap();

        empty_dir_keeping_vcs(dir.path()).unwrap();

        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
        assert!(dir.path().exists());
    }

    #[test]
    fn test_spares_vcs_metadata() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(VCS_METADATA_DIR)).unwrap();
        fs::write(dir.path().join(VCS_METADATA_DIR).join("HEAD"), "ref").unwrap();
        fs::write(dir.path().join("stale.js"), "x").unwrap();

        empty_dir_keeping_vcs(dir.path()).unwrap();

        assert!(dir.path().join(VCS_METADATA_DIR).join("HEAD").exists());
        assert!(!dir.path().join("stale.js").exists());
    }

    #[test]
    fn test_missing_directory_is_a_noop() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("never-created");
        assert!(empty_dir_keeping_vcs(&missing).is_ok());
        assert!(!missing.exists());
    }

    #[test]
    fn test_already_empty_directory_is_fine() {
        let dir = tempdir().unwrap();
        assert!(empty_dir_keeping_vcs(dir.path()).is_ok());
    }
}
