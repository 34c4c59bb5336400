//! # Express Starter Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Small wrappers around `std::fs` used by the materializer and the session
//! driver: ensuring the project root exists, reading the template manifest,
//! and writing the patched manifest back. Each wrapper attaches the offending
//! path to any I/O error so session-fatal failures name what actually broke.
//!
use crate::core::error::{Result, StarterError};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Ensures that a directory exists at `path`, creating it (and any missing
/// parents) if needed. A pre-existing non-directory at `path` is an error.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            return Err(StarterError::FileSystem(format!(
                "Path '{}' exists but is not a directory",
                path.display()
            ))
            .into());
        }
        return Ok(());
    }
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
    debug!("Created directory: {}", path.display());
    Ok(())
}

/// Reads an entire file into a string, with the path attached to any error.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read file '{}'", path.display()))
}

/// Writes `content` to `path`, creating the parent directory if necessary
/// and overwriting any existing file.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write file '{}'", path.display()))?;
    debug!("Wrote file: {}", path.display());
    Ok(())
}
