//! # Express Starter Path Utilities
//!
//! File: cli/src/common/paths.rs
//!
//! ## Overview
//!
//! Pure helpers for turning raw user input into a usable target directory and
//! a manifest-safe package name. Nothing in this module touches the
//! filesystem or applies defaults; substituting the default target directory
//! when a value normalizes to empty is the caller's responsibility.
//!
//! ## Architecture
//!
//! Four focused functions:
//! - `normalize_target`: whitespace trim + trailing-slash strip (idempotent)
//! - `derive_project_name`: maps `"."` to the working directory's basename
//! - `is_valid_package_name`: the npm package-name grammar
//! - `to_valid_package_name`: best-effort slug used only as a prompt pre-fill,
//!   never substituted without the user confirming it
//!
use std::path::Path;

/// Trims surrounding whitespace and strips any run of trailing `/`.
/// Idempotent; an empty result means "nothing usable was entered".
pub fn normalize_target(input: &str) -> String {
    input.trim().trim_end_matches('/').to_string()
}

/// Derives the display name of the project from the target directory.
/// `"."` scaffolds into the working directory, so the name comes from the
/// directory itself; anything else is already the name.
pub fn derive_project_name(target_dir: &str, cwd: &Path) -> String {
    if target_dir == "." {
        cwd.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        target_dir.to_string()
    }
}

/// True iff `name` satisfies the package-name grammar
/// `^(@[a-z0-9-*~][a-z0-9-._~*]*/)?[a-z0-9-~][a-z0-9-._~]*$`.
pub fn is_valid_package_name(name: &str) -> bool {
    let bare = match name.strip_prefix('@') {
        Some(scoped) => {
            let Some((scope, rest)) = scoped.split_once('/') else {
                return false;
            };
            let mut chars = scope.chars();
            match chars.next() {
                Some(c) if is_scope_lead(c) => {}
                _ => return false,
            }
            if !chars.all(is_scope_char) {
                return false;
            }
            rest
        }
        None => name,
    };
    let mut chars = bare.chars();
    match chars.next() {
        Some(c) if is_name_lead(c) => {}
        _ => return false,
    }
    chars.all(is_name_char)
}

fn is_name_lead(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '~')
}

fn is_name_char(c: char) -> bool {
    is_name_lead(c) || matches!(c, '.' | '_')
}

fn is_scope_lead(c: char) -> bool {
    is_name_lead(c) || c == '*'
}

fn is_scope_char(c: char) -> bool {
    is_name_char(c) || c == '*'
}

/// Produces a suggested package name from an arbitrary display name:
/// lowercased, whitespace runs collapsed to single hyphens, one leading
/// `.`/`_` stripped, and any remaining disallowed run replaced by a single
/// hyphen. Only ever offered as the manifest-name prompt's initial value.
pub fn to_valid_package_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();

    // Collapse whitespace runs into single hyphens first, so "my cool app"
    // becomes "my-cool-app" rather than "my---app".
    let mut collapsed = String::with_capacity(lowered.len());
    let mut in_whitespace = false;
    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                collapsed.push('-');
            }
            in_whitespace = true;
        } else {
            collapsed.push(c);
            in_whitespace = false;
        }
    }

    let stripped = collapsed
        .strip_prefix(['.', '_'])
        .unwrap_or(collapsed.as_str());

    let mut slug = String::with_capacity(stripped.len());
    let mut in_disallowed = false;
    for c in stripped.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '~') {
            slug.push(c);
            in_disallowed = false;
        } else {
            if !in_disallowed {
                slug.push('-');
            }
            in_disallowed = true;
        }
    }
    slug
}
