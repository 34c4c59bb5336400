//! # Express Starter Directory Inspection
//!
//! File: cli/src/common/fs/inspect.rs
//!
//! ## Overview
//!
//! The emptiness check behind the overwrite decision: a target directory only
//! forces the Remove/Cancel/Ignore prompt when it actually contains user
//! files. A directory whose sole entry is the version-control metadata
//! directory is treated as empty, so scaffolding into a freshly
//! `git init`-ed directory asks no questions.
//!
use crate::core::error::Result;
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Directory name reserved for version-control metadata. Excluded from the
/// emptiness check and spared by `clean::empty_dir_keeping_vcs`.
pub const VCS_METADATA_DIR: &str = ".git";

/// True iff `dir` has zero entries, or exactly one entry which is the
/// version-control metadata directory.
pub fn is_empty(dir: &Path) -> Result<bool> {
    let mut entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory '{}'", dir.display()))?;

    let Some(first) = entries.next() else {
        return Ok(true);
    };
    let first = first.with_context(|| {
        format!("Failed to read an entry of directory '{}'", dir.display())
    })?;
    Ok(first.file_name() == VCS_METADATA_DIR && entries.next().is_none())
}
