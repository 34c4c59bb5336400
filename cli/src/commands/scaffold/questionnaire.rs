//! # Express Starter Questionnaire
//!
//! File: cli/src/commands/scaffold/questionnaire.rs
//!
//! ## Overview
//!
//! The interactive questionnaire that collects everything a scaffolding
//! session needs: the target directory, how to handle a non-empty target, an
//! explicit package name when the derived one is unusable, the hot-reload
//! strategy, and the CORS toggle.
//!
//! ## Architecture
//!
//! The flow is an explicit ordered list of step descriptors. Each step pairs
//! an applicability predicate with a run function; the predicate is evaluated
//! against the working answers at the moment the step would run, and an
//! inapplicable step is skipped entirely — it neither prompts nor stores a
//! default. The steps, in fixed order:
//!
//! 1. Project name (skipped when a target argument was given)
//! 2. Overwrite decision (skipped unless the target exists and is non-empty)
//! 3. Cancellation gate (synthetic; fails the session on `Cancel`)
//! 4. Package name (skipped when the derived name is already valid)
//! 5. Hot-reload strategy (always asked)
//! 6. CORS toggle (always asked)
//!
//! The submitted project name is re-normalized into the working target before
//! any later predicate looks at it, so the overwrite check always sees the
//! directory the session will actually use. No step touches the filesystem
//! beyond read-only inspection; destructive work happens only after the whole
//! questionnaire has succeeded.
//!
use crate::common::fs::inspect;
use crate::common::paths;
use crate::common::ui::{choice_label, prompts};
use crate::core::context::SessionContext;
use crate::core::error::{Result, StarterError};
use console::Style;
use tracing::debug;

/// Target directory used when the user supplies nothing.
pub const DEFAULT_TARGET_DIR: &str = "express-project";

/// Server auto-restart strategy for the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotReload {
    Nodemon,
    NodeWatch,
    None,
}

/// How to proceed when the target directory already holds files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteDecision {
    /// Clear the directory (sparing version-control metadata) and continue.
    Remove,
    /// Abort the whole session; never silently ignored.
    Cancel,
    /// Leave existing files in place; the copy overwrites name collisions.
    Ignore,
}

/// The completed questionnaire. Immutable once returned by [`collect`].
#[derive(Debug, Clone)]
pub struct Answers {
    /// Normalized target directory, relative to the session cwd (or `"."`).
    pub target_dir: String,
    /// Overwrite decision; `None` means the prompt was never applicable and
    /// the session proceeds as if `Ignore` were chosen on a fresh directory.
    pub overwrite: Option<OverwriteDecision>,
    /// Explicit manifest name; `None` when the derived name was already valid.
    pub package_name: Option<String>,
    pub hot_reload: HotReload,
    pub enable_cors: bool,
}

/// Mutable working state threaded through the steps while they run.
#[derive(Debug, Clone)]
struct Working {
    /// Whether the target came from the command line (skips step 1).
    from_arg: bool,
    target_dir: String,
    overwrite: Option<OverwriteDecision>,
    package_name: Option<String>,
    hot_reload: Option<HotReload>,
    enable_cors: Option<bool>,
}

impl Working {
    fn new(arg_target: Option<&str>) -> Self {
        Self {
            from_arg: arg_target.is_some(),
            target_dir: arg_target.unwrap_or(DEFAULT_TARGET_DIR).to_string(),
            overwrite: None,
            package_name: None,
            hot_reload: None,
            enable_cors: None,
        }
    }
}

/// One questionnaire step: a name for logging, an applicability predicate
/// over the answers so far, and the action that prompts and stores.
struct Step {
    name: &'static str,
    applies: fn(&SessionContext, &Working) -> bool,
    run: fn(&SessionContext, &mut Working) -> Result<()>,
}

const STEPS: &[Step] = &[
    Step {
        name: "project-name",
        applies: project_name_applies,
        run: project_name_run,
    },
    Step {
        name: "overwrite",
        applies: overwrite_applies,
        run: overwrite_run,
    },
    Step {
        name: "cancellation-gate",
        applies: cancellation_gate_applies,
        run: cancellation_gate_run,
    },
    Step {
        name: "package-name",
        applies: package_name_applies,
        run: package_name_run,
    },
    Step {
        name: "hot-reload",
        applies: always_applies,
        run: hot_reload_run,
    },
    Step {
        name: "enable-cors",
        applies: always_applies,
        run: enable_cors_run,
    },
];

/// Runs the questionnaire. `arg_target`, when present, must already be
/// normalized and non-empty (the driver treats a blank argument as absent).
pub fn collect(ctx: &SessionContext, arg_target: Option<&str>) -> Result<Answers> {
    let mut working = Working::new(arg_target);
    for step in STEPS {
        if (step.applies)(ctx, &working) {
            debug!("Running questionnaire step '{}'", step.name);
            (step.run)(ctx, &mut working)?;
        } else {
            debug!("Skipping inapplicable questionnaire step '{}'", step.name);
        }
    }
    Ok(Answers {
        target_dir: working.target_dir,
        overwrite: working.overwrite,
        package_name: working.package_name,
        hot_reload: working
            .hot_reload
            .ok_or_else(|| anyhow::anyhow!("hot-reload step did not record an answer"))?,
        enable_cors: working
            .enable_cors
            .ok_or_else(|| anyhow::anyhow!("cors step did not record an answer"))?,
    })
}

fn always_applies(_ctx: &SessionContext, _working: &Working) -> bool {
    true
}

// --- Step 1: project name ---

fn project_name_applies(_ctx: &SessionContext, working: &Working) -> bool {
    !working.from_arg
}

/// Asks for the project name and folds the normalized value into the working
/// target before any later step evaluates its applicability. An entry that
/// normalizes to nothing falls back to the default; applying that default is
/// this step's job, not the normalizer's.
fn project_name_run(_ctx: &SessionContext, working: &mut Working) -> Result<()> {
    let value = prompts::input("Project Name:", Some(DEFAULT_TARGET_DIR))?;
    let normalized = paths::normalize_target(&value);
    working.target_dir = if normalized.is_empty() {
        DEFAULT_TARGET_DIR.to_string()
    } else {
        normalized
    };
    Ok(())
}

// --- Step 2: overwrite decision ---

/// Offered only when the (live) target exists and is non-empty. If the
/// directory cannot be inspected it is treated as non-empty: the user still
/// gets to decide, and a genuinely unreadable target fails later with the
/// underlying I/O error.
fn overwrite_applies(ctx: &SessionContext, working: &Working) -> bool {
    let target = ctx.cwd.join(&working.target_dir);
    target.exists() && !inspect::is_empty(&target).unwrap_or(false)
}

fn overwrite_run(_ctx: &SessionContext, working: &mut Working) -> Result<()> {
    const CHOICES: [(&str, OverwriteDecision); 3] = [
        ("Remove existing files and continue", OverwriteDecision::Remove),
        ("Cancel operation", OverwriteDecision::Cancel),
        ("Ignore files and continue", OverwriteDecision::Ignore),
    ];
    let subject = if working.target_dir == "." {
        "Current directory".to_string()
    } else {
        format!("Target directory \"{}\"", working.target_dir)
    };
    let message = format!("{subject} is not empty. Please choose how to proceed");
    let labels: Vec<String> = CHOICES.iter().map(|(label, _)| label.to_string()).collect();
    let index = prompts::select(&message, &labels)?;
    working.overwrite = Some(CHOICES[index].1);
    Ok(())
}

// --- Step 3: cancellation gate ---

/// Synthetic step: never prompts, never stores an answer. Its whole job is
/// to stop the session immediately after an explicit `Cancel` choice.
fn cancellation_gate_applies(_ctx: &SessionContext, working: &Working) -> bool {
    matches!(working.overwrite, Some(OverwriteDecision::Cancel))
}

fn cancellation_gate_run(_ctx: &SessionContext, _working: &mut Working) -> Result<()> {
    Err(StarterError::Cancelled.into())
}

// --- Step 4: package name ---

/// Asked only when the derived project name cannot be used as a manifest
/// name. The prompt is pre-filled with a slugged suggestion, but nothing is
/// substituted without the user submitting it.
fn package_name_applies(ctx: &SessionContext, working: &Working) -> bool {
    let derived = paths::derive_project_name(&working.target_dir, &ctx.cwd);
    !paths::is_valid_package_name(&derived)
}

fn package_name_run(ctx: &SessionContext, working: &mut Working) -> Result<()> {
    let derived = paths::derive_project_name(&working.target_dir, &ctx.cwd);
    let suggestion = paths::to_valid_package_name(&derived);
    let initial = if suggestion.is_empty() {
        None
    } else {
        Some(suggestion.as_str())
    };
    let name = prompts::validated_input(
        "Package Name:",
        initial,
        paths::is_valid_package_name,
        "Invalid package.json name",
    )?;
    working.package_name = Some(name);
    Ok(())
}

// --- Step 5: hot-reload strategy ---

fn hot_reload_run(_ctx: &SessionContext, working: &mut Working) -> Result<()> {
    const CHOICES: [HotReload; 3] = [HotReload::Nodemon, HotReload::NodeWatch, HotReload::None];
    let labels = vec![
        choice_label("Nodemon", Style::new().green()),
        choice_label("Node --watch flag (experimental)", Style::new().yellow()),
        choice_label("none", Style::new().red()),
    ];
    let index = prompts::select("Pick what to use server auto-restart on change", &labels)?;
    working.hot_reload = Some(CHOICES[index]);
    Ok(())
}

// --- Step 6: CORS toggle ---

fn enable_cors_run(_ctx: &SessionContext, working: &mut Working) -> Result<()> {
    working.enable_cors = Some(prompts::confirm("Enable cors?", true)?);
    Ok(())
}
