//! # Express Starter Scaffold Command
//!
//! File: cli/src/commands/scaffold/mod.rs
//!
//! ## Overview
//!
//! This module implements the scaffolding session — the tool's single
//! command. It wires the questionnaire, the template decision table, and the
//! materializer together and reports the follow-up commands once the project
//! exists on disk.
//!
//! ## Architecture
//!
//! The session runs in two phases:
//! 1. **Interactive**: capture the session context, show the welcome banner,
//!    and run the questionnaire. Nothing on disk changes during this phase.
//! 2. **Execution**: resolve the project root exactly once, apply the
//!    overwrite decision, copy the selected template, patch the manifest,
//!    and print the next steps.
//!
//! Submodules:
//! - `questionnaire`: the ordered, conditionally-skippable prompt pipeline
//! - `template`: the pure `(hot_reload, enable_cors)` decision table
//! - `materialize`: overwrite handling, tree copy, and the manifest patch
//!
//! ## Examples
//!
//! ```bash
//! # Scaffold interactively, prompting for the project name
//! create-express-starter
//!
//! # Scaffold into ./my-api, skipping the project-name prompt
//! create-express-starter my-api
//!
//! # Scaffold into the current directory
//! create-express-starter .
//! ```
//!
use crate::common::fs::io;
use crate::common::paths;
use crate::core::context::SessionContext;
use crate::core::error::{Result, StarterError};
use clap::Parser;
use std::path::Path;
use tracing::{debug, info};

pub mod materialize;
pub mod questionnaire;
pub mod template;

use self::questionnaire::Answers;

/// # Scaffold Arguments (`ScaffoldArgs`)
///
/// The tool's entire argument surface: one optional positional target
/// directory. Everything else is collected interactively.
#[derive(Parser, Debug)]
pub struct ScaffoldArgs {
    /// Target directory for the new project. Prompted for when omitted;
    /// use `.` to scaffold into the current directory.
    pub target_dir: Option<String>,
}

/// Runs one complete scaffolding session.
pub fn handle_scaffold(args: ScaffoldArgs) -> Result<()> {
    info!("Starting scaffolding session...");
    let ctx = SessionContext::new()?;

    // An argument that normalizes to nothing counts as no argument at all:
    // the project-name step still runs.
    let arg_target = args
        .target_dir
        .as_deref()
        .map(paths::normalize_target)
        .filter(|target| !target.is_empty());
    debug!("Target directory from arguments: {:?}", arg_target);

    println!("Welcome to express.js project starter 🚅");
    let answers = questionnaire::collect(&ctx, arg_target.as_deref())?;
    run(&ctx, &answers)
}

/// Execution phase: everything that happens after the last prompt.
fn run(ctx: &SessionContext, answers: &Answers) -> Result<()> {
    // Resolved exactly once for the rest of the session; directory identity
    // must not drift after the overwrite decision was made against it.
    let root = ctx.cwd.join(&answers.target_dir);

    materialize::apply_overwrite_decision(&root, answers.overwrite)?;
    io::ensure_dir_exists(&root)?;

    let template = template::select(answers.hot_reload, answers.enable_cors);
    info!("Selected template: {}", template.dir_name());
    let template_dir = ctx.template_root.join(template.dir_name());
    if !template_dir.is_dir() {
        return Err(StarterError::TemplateNotFound {
            name: template.dir_name().to_string(),
            dir: ctx.template_root.display().to_string(),
        }
        .into());
    }

    materialize::copy_template(&template_dir, &root)?;

    let package_name = answers
        .package_name
        .clone()
        .unwrap_or_else(|| paths::derive_project_name(&answers.target_dir, &ctx.cwd));
    materialize::write_manifest(&template_dir, &root, &package_name, answers.hot_reload)?;

    print_completion_message(ctx, &root);
    Ok(())
}

/// Prints the final instruction block: where to `cd` (quoted when the path
/// contains whitespace, omitted when the project root is the cwd itself)
/// and the two commands to run next.
fn print_completion_message(ctx: &SessionContext, root: &Path) {
    let relative = pathdiff::diff_paths(root, &ctx.cwd)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| root.display().to_string());

    println!("\nFinished setting up your express project 🚀. Now run:");
    if root != ctx.cwd {
        println!("  cd {}", format_cd_target(&relative));
    }
    println!("  npm install");
    println!("  npm run dev");
}

/// Shell-quotes the `cd` operand when it contains whitespace.
fn format_cd_target(relative: &str) -> String {
    if relative.contains(char::is_whitespace) {
        format!("\"{relative}\"")
    } else {
        relative.to_string()
    }
}
