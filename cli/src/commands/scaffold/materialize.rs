//! # Express Starter Tree Materialization
//!
//! File: cli/src/commands/scaffold/materialize.rs
//!
//! ## Overview
//!
//! Turns a chosen template into a project on disk: applies the overwrite
//! decision, copies the template tree byte-for-byte, and rewrites the copied
//! manifest. The manifest (`package.json`) is excluded from the generic copy
//! and written exactly once by the patch step, so it can never end up as the
//! template's raw copy.
//!
//! ## Architecture
//!
//! Three operations, invoked by the session driver in order:
//! 1. `apply_overwrite_decision` — the single point where a `Remove` answer
//!    becomes destructive action, strictly after the questionnaire is done
//! 2. `copy_template` — top-level template entries, minus the manifest
//! 3. `write_manifest` — parse / patch / pretty-print the manifest
//!
//! The manifest is handled as a schema-agnostic, order-preserving JSON map:
//! only `name` and (for the no-hot-reload case) `scripts.dev` are touched,
//! every other field round-trips untouched.
//!
use crate::commands::scaffold::questionnaire::{HotReload, OverwriteDecision};
use crate::common::fs::{clean, copy, io};
use crate::core::error::{Result, StarterError};
use anyhow::Context;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// The one file of the template tree the engine rewrites instead of copying.
pub const MANIFEST_FILE: &str = "package.json";

/// `dev` script used when the user opted out of hot reloading: run the entry
/// point directly, bypassing any watch tool the template ships with.
const PLAIN_DEV_SCRIPT: &str = "node index.js";

/// Applies the user's overwrite decision to the resolved project root.
///
/// `Remove` clears the directory (sparing version-control metadata);
/// `Cancel` raises the cancellation signal without touching the filesystem;
/// `Ignore` — explicit or implied by the prompt never having been offered —
/// does nothing and lets the copy overwrite individual files.
pub fn apply_overwrite_decision(root: &Path, decision: Option<OverwriteDecision>) -> Result<()> {
    match decision {
        Some(OverwriteDecision::Remove) => clean::empty_dir_keeping_vcs(root),
        Some(OverwriteDecision::Cancel) => Err(StarterError::Cancelled.into()),
        Some(OverwriteDecision::Ignore) | None => Ok(()),
    }
}

/// Copies every top-level entry of `template_dir` into `root`, except the
/// manifest. Directories are copied recursively, files byte-copied; existing
/// same-named files in `root` are overwritten.
pub fn copy_template(template_dir: &Path, root: &Path) -> Result<()> {
    info!(
        "Copying template '{}' to '{}'",
        template_dir.display(),
        root.display()
    );
    let entries = fs::read_dir(template_dir).with_context(|| {
        format!(
            "Failed to read template directory '{}'",
            template_dir.display()
        )
    })?;
    for entry in entries {
        let entry = entry.with_context(|| {
            format!(
                "Failed to read an entry of template directory '{}'",
                template_dir.display()
            )
        })?;
        if entry.file_name() == MANIFEST_FILE {
            debug!("Skipping manifest during copy; it is written by the patch step");
            continue;
        }
        let source = entry.path();
        let target = root.join(entry.file_name());
        let file_type = entry.file_type().with_context(|| {
            format!("Failed to determine entry type of '{}'", source.display())
        })?;
        if file_type.is_dir() {
            copy::copy_dir_recursive(&source, &target)?;
        } else {
            fs::copy(&source, &target).with_context(|| {
                format!(
                    "Failed to copy file '{}' to '{}'",
                    source.display(),
                    target.display()
                )
            })?;
        }
    }
    Ok(())
}

/// Reads the template's manifest, patches the fields the engine owns, and
/// writes the result into `root` as 2-space-indented JSON.
///
/// Owned fields: `name` always; `scripts.dev` only when the user chose no
/// hot reloading. Everything else round-trips in its original order.
pub fn write_manifest(
    template_dir: &Path,
    root: &Path,
    package_name: &str,
    hot_reload: HotReload,
) -> Result<()> {
    let manifest_path = template_dir.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        return Err(StarterError::ManifestIntegrity(format!(
            "template ships no '{}' at '{}'",
            MANIFEST_FILE,
            manifest_path.display()
        ))
        .into());
    }
    let content = io::read_file_to_string(&manifest_path)?;
    let mut manifest: Value = serde_json::from_str(&content).map_err(|e| {
        StarterError::ManifestIntegrity(format!(
            "'{}' is not valid JSON: {e}",
            manifest_path.display()
        ))
    })?;

    let Some(fields) = manifest.as_object_mut() else {
        return Err(StarterError::ManifestIntegrity(format!(
            "'{}' is not a JSON object",
            manifest_path.display()
        ))
        .into());
    };
    fields.insert("name".to_string(), Value::String(package_name.to_string()));

    if hot_reload == HotReload::None {
        let scripts = fields
            .get_mut("scripts")
            .and_then(Value::as_object_mut)
            .ok_or_else(|| {
                StarterError::ManifestIntegrity(format!(
                    "'{}' has no `scripts` object to rewrite",
                    manifest_path.display()
                ))
            })?;
        scripts.insert(
            "dev".to_string(),
            Value::String(PLAIN_DEV_SCRIPT.to_string()),
        );
        debug!("Rewrote scripts.dev to direct invocation: {PLAIN_DEV_SCRIPT}");
    }

    let rendered = serde_json::to_string_pretty(&manifest)
        .context("Failed to serialize patched manifest")?;
    io::write_string_to_file(&root.join(MANIFEST_FILE), &rendered)?;
    info!("Wrote patched manifest for package '{package_name}'");
    Ok(())
}
