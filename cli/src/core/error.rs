//! # Express Starter Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used
//! throughout the scaffolder. It provides a consistent approach to error
//! management with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `StarterError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover the session's failure taxonomy:
//! - User cancellation (explicit `Cancel` choice or an aborted prompt)
//! - Configuration errors (unusable template-root setting)
//! - Filesystem errors during copy/patch
//! - Template packaging defects (missing tree, malformed manifest)
//!
//! Invalid manifest names are *not* represented here: they are recovered at
//! the prompt boundary by re-prompting and never surface as session failures.
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```ignore
//! // Raise a specific error type
//! if !template_dir.is_dir() {
//!     return Err(StarterError::TemplateNotFound {
//!         name: template.dir_name().into(),
//!         dir: template_root.display().to_string(),
//!     })?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//!
//! // Detect cancellation at the session boundary
//! if matches!(err.downcast_ref::<StarterError>(), Some(StarterError::Cancelled)) {
//!     println!("session cancelled, nothing written");
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the scaffolder.
#[derive(Error, Debug)]
pub enum StarterError {
    /// The user aborted the session, either through the explicit `Cancel`
    /// overwrite choice or by breaking out of a prompt. Matched in `main`
    /// to report the cancellation without treating it as a process failure.
    #[error("Operation cancelled")]
    Cancelled,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    /// The selected template directory is missing from the template root.
    /// This is a packaging defect, not a user error.
    #[error("Template '{name}' not found in '{dir}'")]
    TemplateNotFound { name: String, dir: String },

    /// The template ships a manifest the patch step cannot work with.
    #[error("Template manifest is invalid: {0}")]
    ManifestIntegrity(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(StarterError::Cancelled.to_string(), "Operation cancelled");

        let config_err = StarterError::Config("template directory is not a directory".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: template directory is not a directory"
        );

        let not_found = StarterError::TemplateNotFound {
            name: "express-nodemon".into(),
            dir: "/opt/starter/templates".into(),
        };
        assert_eq!(
            not_found.to_string(),
            "Template 'express-nodemon' not found in '/opt/starter/templates'"
        );

        let manifest = StarterError::ManifestIntegrity("`scripts` is not an object".into());
        assert_eq!(
            manifest.to_string(),
            "Template manifest is invalid: `scripts` is not an object"
        );
    }

    #[test]
    fn test_cancellation_survives_anyhow_conversion() {
        let err: anyhow::Error = StarterError::Cancelled.into();
        assert!(matches!(
            err.downcast_ref::<StarterError>(),
            Some(StarterError::Cancelled)
        ));
    }
}
