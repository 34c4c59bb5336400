//! # Express Starter Filesystem Copy Operations
//!
//! File: cli/src/common/fs/copy.rs
//!
//! ## Overview
//!
//! Recursive directory copying for the template materialization step. The
//! copy is byte-for-byte and overwriting: same-named files already present in
//! the target (after an `Ignore` overwrite decision) are replaced, and
//! dotfiles such as `.gitignore` are copied like any other entry. No entry is
//! rendered, filtered, or rewritten here; manifest handling lives entirely in
//! the materializer.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::common::fs::copy;
//!
//! copy::copy_dir_recursive(&template_dir.join("routes"), &root.join("routes"))?;
//! ```
//!
use crate::core::error::Result;
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Copies `source` into `target` recursively, creating `target` (and any
/// intermediate directories) as needed and overwriting existing files.
///
/// # Errors
///
/// Any I/O failure (unreadable entry, permission error, disk full) aborts the
/// copy and is returned with path context; partial output is left in place.
pub fn copy_dir_recursive(source: &Path, target: &Path) -> Result<()> {
    debug!(
        "Copying directory '{}' to '{}'",
        source.display(),
        target.display()
    );
    fs::create_dir_all(target)
        .with_context(|| format!("Failed to create target directory '{}'", target.display()))?;

    for entry_result in walkdir::WalkDir::new(source) {
        let entry = entry_result
            .with_context(|| format!("Failed to walk directory '{}'", source.display()))?;
        let src_path = entry.path();
        let relative_path = src_path
            .strip_prefix(source)
            .with_context(|| format!("Failed to relativize '{}'", src_path.display()))?;
        if relative_path.as_os_str().is_empty() {
            continue; // the walk root itself
        }
        let target_path = target.join(relative_path);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target_path).with_context(|| {
                format!(
                    "Failed to create target subdirectory '{}'",
                    target_path.display()
                )
            })?;
        } else if entry.file_type().is_file() {
            fs::copy(src_path, &target_path).with_context(|| {
                format!(
                    "Failed to copy file '{}' to '{}'",
                    src_path.display(),
                    target_path.display()
                )
            })?;
        } else {
            warn!(
                "Skipping unsupported file system entry type at '{}'",
                src_path.display()
            );
        }
    }
    Ok(())
}
