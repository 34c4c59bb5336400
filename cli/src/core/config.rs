//! # Express Starter Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the (deliberately small) configuration surface of
//! the scaffolder: where the four template trees live on disk. Everything
//! else about a session comes from the interactive questionnaire, so the
//! config file carries a single optional override.
//!
//! ## Architecture
//!
//! The template root is resolved from sources in order of precedence:
//! 1. The `EXPRESS_STARTER_TEMPLATES_DIR` environment variable (integration
//!    tests rely on this override)
//! 2. `templates.directory` from the user config file
//!    (`~/.config/create-express-starter/config.toml` on Linux)
//! 3. A `templates/` directory next to the installed executable
//! 4. The development-tree fallback two levels above the executable, which
//!    matches cargo's `target/debug` layout when running from a checkout
//!
//! Configured paths may use `~`, which is expanded before validation. A
//! configured or overridden path that is not a directory is a configuration
//! error; the resolver never silently falls through past an explicit setting.
//!
//! ## Examples
//!
//! ```ignore
//! let cfg = config::load_config()?;
//! let template_root = config::resolve_template_root(&cfg)?;
//! let nodemon_tree = template_root.join("express-nodemon");
//! ```
//!
use crate::core::error::{Result, StarterError};
use anyhow::Context;
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Environment variable overriding the template root. Takes precedence over
/// the config file and the executable-relative defaults.
pub const TEMPLATES_DIR_ENV: &str = "EXPRESS_STARTER_TEMPLATES_DIR";

/// Name of the directory, relative to the executable, where the template
/// trees are shipped.
const TEMPLATES_DIR_NAME: &str = "templates";

/// Represents the user configuration, loaded from a TOML file.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub templates: TemplatesConfig,
}

/// Configuration for locating the template trees.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct TemplatesConfig {
    /// Directory holding the four template trees (can use `~`). When unset,
    /// the executable-relative defaults apply.
    pub directory: Option<String>,
}

/// Loads the user configuration file if one exists, returning defaults
/// otherwise. A missing file is not an error; a malformed one is.
pub fn load_config() -> Result<Config> {
    let Some(proj_dirs) = ProjectDirs::from("com", "ExpressStarter", "create-express-starter")
    else {
        warn!("Could not determine user config directory; using defaults.");
        return Ok(Config::default());
    };
    let config_path = proj_dirs.config_dir().join("config.toml");
    if !config_path.exists() {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        return Ok(Config::default());
    }
    info!("Loading user configuration from: {}", config_path.display());
    load_config_from_path(&config_path)
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Resolves the directory holding the template trees, following the
/// precedence documented in the module overview.
pub fn resolve_template_root(cfg: &Config) -> Result<PathBuf> {
    let env_override = env::var(TEMPLATES_DIR_ENV).ok().filter(|v| !v.is_empty());
    resolve_template_root_from(cfg, env_override, exe_dir().as_deref())
}

/// Resolution core, separated from the ambient environment so tests can feed
/// in explicit override and executable-directory values.
fn resolve_template_root_from(
    cfg: &Config,
    env_override: Option<String>,
    exe_dir: Option<&Path>,
) -> Result<PathBuf> {
    if let Some(dir) = env_override {
        debug!("Template root overridden via {}: {}", TEMPLATES_DIR_ENV, dir);
        return validate_template_root(expand(&dir));
    }
    if let Some(dir) = &cfg.templates.directory {
        debug!("Template root taken from config file: {}", dir);
        return validate_template_root(expand(dir));
    }
    if let Some(exe_dir) = exe_dir {
        // Installed layout: templates/ shipped next to the binary.
        let installed = exe_dir.join(TEMPLATES_DIR_NAME);
        if installed.is_dir() {
            return Ok(installed);
        }
        // Development layout: binary at <workspace>/target/debug/<bin>,
        // templates at <workspace>/templates.
        if let Some(workspace) = exe_dir.parent().and_then(|p| p.parent()) {
            let dev = workspace.join(TEMPLATES_DIR_NAME);
            if dev.is_dir() {
                return Ok(dev);
            }
        }
    }
    Err(StarterError::Config(format!(
        "could not locate a '{TEMPLATES_DIR_NAME}' directory; set {TEMPLATES_DIR_ENV} or \
         `templates.directory` in the config file"
    ))
    .into())
}

/// A path that was configured explicitly must point at a real directory.
fn validate_template_root(path: PathBuf) -> Result<PathBuf> {
    if path.is_dir() {
        Ok(path)
    } else {
        Err(StarterError::Config(format!(
            "template directory '{}' does not exist or is not a directory",
            path.display()
        ))
        .into())
    }
}

fn expand(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

fn exe_dir() -> Option<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_config_with_directory() {
        let cfg: Config = toml::from_str("[templates]\ndirectory = \"~/starter/templates\"\n")
            .expect("valid config should parse");
        assert_eq!(
            cfg.templates.directory.as_deref(),
            Some("~/starter/templates")
        );
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let cfg: Config = toml::from_str("").expect("empty config should parse");
        assert!(cfg.templates.directory.is_none());
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        let result: std::result::Result<Config, _> = toml::from_str("[tempates]\ndirectory = \"x\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_env_override_wins_over_config() {
        let temp = tempdir().unwrap();
        let cfg = Config {
            templates: TemplatesConfig {
                directory: Some("/nonexistent/from-config".into()),
            },
        };
        let resolved = resolve_template_root_from(
            &cfg,
            Some(temp.path().to_string_lossy().into_owned()),
            None,
        )
        .unwrap();
        assert_eq!(resolved, temp.path());
    }

    #[test]
    fn test_explicit_override_must_exist() {
        let cfg = Config::default();
        let result =
            resolve_template_root_from(&cfg, Some("/nonexistent/templates".into()), None);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("does not exist or is not a directory"));
    }

    #[test]
    fn test_config_directory_is_used() {
        let temp = tempdir().unwrap();
        let cfg = Config {
            templates: TemplatesConfig {
                directory: Some(temp.path().to_string_lossy().into_owned()),
            },
        };
        let resolved = resolve_template_root_from(&cfg, None, None).unwrap();
        assert_eq!(resolved, temp.path());
    }

    #[test]
    fn test_exe_relative_fallbacks() {
        // Installed layout: <exe_dir>/templates.
        let installed = tempdir().unwrap();
        fs::create_dir(installed.path().join(TEMPLATES_DIR_NAME)).unwrap();
        let resolved =
            resolve_template_root_from(&Config::default(), None, Some(installed.path())).unwrap();
        assert_eq!(resolved, installed.path().join(TEMPLATES_DIR_NAME));

        // Development layout: <workspace>/target/debug + <workspace>/templates.
        let workspace = tempdir().unwrap();
        let exe_dir = workspace.path().join("target/debug");
        fs::create_dir_all(&exe_dir).unwrap();
        fs::create_dir(workspace.path().join(TEMPLATES_DIR_NAME)).unwrap();
        let resolved =
            resolve_template_root_from(&Config::default(), None, Some(&exe_dir)).unwrap();
        assert_eq!(resolved, workspace.path().join(TEMPLATES_DIR_NAME));
    }

    #[test]
    fn test_no_source_is_a_config_error() {
        let result = resolve_template_root_from(&Config::default(), None, None);
        assert!(result.is_err());
    }
}
