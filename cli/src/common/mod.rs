//! # Express Starter Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! This module is the organizational entry point for the shared utilities the
//! scaffolding engine is assembled from. It separates cross-cutting concerns
//! (paths, filesystem, terminal interaction) from the command-specific logic
//! in `commands::` and the infrastructure in `core::`.
//!
//! ## Architecture
//!
//! - **`paths`**: pure target-directory and package-name helpers
//! - **`fs`**: directory inspection, clearing, recursive copy, and I/O wrappers
//! - **`ui`**: dialoguer-backed prompts with uniform cancellation mapping
//!
/// Pure helpers for target paths and package names.
pub mod paths;

/// Utilities for filesystem operations (inspection, clearing, copying, I/O).
pub mod fs;

/// Utilities for terminal user interface elements (prompts, choice styling).
pub mod ui;
