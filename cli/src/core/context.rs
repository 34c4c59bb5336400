//! # Express Starter Session Context
//!
//! File: cli/src/core/context.rs
//!
//! ## Overview
//!
//! This module defines `SessionContext`, the single value carrying the
//! ambient process state a scaffolding session depends on: the working
//! directory and the resolved template root. Both are captured once at
//! session start and threaded explicitly into every component, so no module
//! re-queries `env::current_dir()` mid-session and directory identity cannot
//! drift between the questionnaire and the copy step.
//!
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use std::path::PathBuf;
use tracing::debug;

/// Ambient state for one scaffolding session, captured exactly once.
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// The process working directory at session start. Target paths resolve
    /// against this, and the final `cd` hint is computed relative to it.
    pub cwd: PathBuf,
    /// Directory holding the four template trees.
    pub template_root: PathBuf,
}

impl SessionContext {
    /// Captures the working directory and resolves the template root from
    /// configuration (see `core::config` for the precedence rules).
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let cfg = config::load_config().context("Failed to load configuration")?;
        let template_root =
            config::resolve_template_root(&cfg).context("Failed to locate template directory")?;
        debug!(
            "Session context: cwd={}, template_root={}",
            cwd.display(),
            template_root.display()
        );
        Ok(Self { cwd, template_root })
    }
}
