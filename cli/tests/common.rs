//! # Express Starter Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each `.rs` file
//! in that directory is compiled as its own test crate linked against the
//! `create-express-starter` binary; this module avoids duplicating the
//! command and template-fixture setup across them.
//!

// Allow potentially unused code in this common module, as different test
// files use different helpers.
#![allow(dead_code)]

use std::fs;
use std::path::Path;

pub use assert_cmd::Command;
pub use tempfile::{tempdir, TempDir};

/// Environment variable the binary honors for locating templates; pointed at
/// a fixture directory so tests never depend on an installed layout.
pub const TEMPLATES_DIR_ENV: &str = "EXPRESS_STARTER_TEMPLATES_DIR";

/// Creates an `assert_cmd::Command` for the compiled binary under test.
pub fn starter_cmd() -> Command {
    Command::cargo_bin("create-express-starter")
        .expect("Failed to find create-express-starter binary for testing")
}

/// Builds a template root containing all four template trees, each with a
/// manifest, entry point, and a nested route file.
pub fn fixture_template_root() -> TempDir {
    let root = tempdir().expect("Failed to create temp dir for templates");
    for (dir, dev_script) in [
        ("express-nodewatch", "node --watch index.js"),
        ("express-nodewatch-cors", "node --watch index.js"),
        ("express-nodemon", "nodemon index.js"),
        ("express-nodemon-cors", "nodemon index.js"),
    ] {
        let tree = root.path().join(dir);
        fs::create_dir_all(tree.join("routes")).unwrap();
        fs::write(tree.join("index.js"), format!("// {dir}\n")).unwrap();
        fs::write(tree.join("routes/healthcheck.js"), "// router\n").unwrap();
        write_manifest_fixture(&tree, dir, dev_script);
    }
    root
}

fn write_manifest_fixture(tree: &Path, name: &str, dev_script: &str) {
    fs::write(
        tree.join("package.json"),
        format!(
            "{{\n  \"name\": \"{name}\",\n  \"version\": \"1.0.0\",\n  \"scripts\": {{\n    \"dev\": \"{dev_script}\"\n  }}\n}}"
        ),
    )
    .unwrap();
}
