//! # Express Starter Interactive Prompts
//!
//! File: cli/src/common/ui/prompts.rs
//!
//! ## Overview
//!
//! Thin wrappers around `dialoguer` providing the three prompt shapes the
//! questionnaire needs: free-text input (optionally validated), a select
//! list, and a yes/no toggle. Every wrapper maps any interaction failure —
//! no usable terminal, EOF, an interrupt — to `StarterError::Cancelled`, so
//! the questionnaire has a single cancellation signal regardless of how the
//! user (or the environment) broke out of a prompt.
//!
//! Each prompt blocks the session until the user answers; there are no
//! timeouts and no concurrent prompts.
//!
use crate::core::error::{Result, StarterError};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use tracing::debug;

/// Free-text input with an optional pre-filled default. The raw submitted
/// string is returned; normalization is the caller's concern.
pub fn input(message: &str, initial: Option<&str>) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut prompt = Input::<String>::with_theme(&theme)
        .with_prompt(message)
        .allow_empty(true);
    if let Some(initial) = initial {
        prompt = prompt.default(initial.to_string());
    }
    prompt.interact_text().map_err(cancelled)
}

/// Free-text input re-validated on every submission; the prompt keeps asking
/// until `validate` accepts the value. Used for the manifest-name step.
pub fn validated_input(
    message: &str,
    initial: Option<&str>,
    validate: fn(&str) -> bool,
    error_message: &'static str,
) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut prompt = Input::<String>::with_theme(&theme)
        .with_prompt(message)
        .validate_with(move |value: &String| -> std::result::Result<(), &str> {
            if validate(value) {
                Ok(())
            } else {
                Err(error_message)
            }
        });
    if let Some(initial) = initial {
        prompt = prompt.default(initial.to_string());
    }
    prompt.interact_text().map_err(cancelled)
}

/// Single-choice select list; returns the index of the chosen item.
pub fn select(message: &str, items: &[String]) -> Result<usize> {
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(message)
        .items(items)
        .default(0)
        .interact()
        .map_err(cancelled)
}

/// Yes/no toggle with a default answer.
pub fn confirm(message: &str, default: bool) -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(message)
        .default(default)
        .interact()
        .map_err(cancelled)
}

/// Any prompt-interaction failure counts as the user abandoning the session.
fn cancelled(err: dialoguer::Error) -> anyhow::Error {
    debug!("Prompt interaction failed, treating as cancellation: {err}");
    StarterError::Cancelled.into()
}
