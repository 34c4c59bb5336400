//! # Express Starter UI Utilities (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal interaction utilities shared by the command layer. The `prompts`
//! submodule wraps `dialoguer` so every questionnaire step reports
//! cancellation the same way, and `choice_label` centralizes the `console`
//! styling applied to select-list entries.
//!
use console::Style;

pub mod prompts;

/// Styles a select-list label. Kept here so the choice palette (green for the
/// recommended option, yellow for experimental, red for none/cancel) stays
/// consistent across prompts.
pub fn choice_label(text: &str, style: Style) -> String {
    style.apply_to(text).to_string()
}
