//! # Express Starter Template Selection
//!
//! File: cli/src/commands/scaffold/template.rs
//!
//! ## Overview
//!
//! The decision table mapping the questionnaire's feature answers to one of
//! the four shipped template trees. This is the only place a template is
//! chosen; nothing downstream re-derives it.
//!
use crate::commands::scaffold::questionnaire::HotReload;

/// One of the four fixed template trees shipped under the template root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    ExpressNodewatch,
    ExpressNodewatchCors,
    ExpressNodemon,
    ExpressNodemonCors,
}

impl Template {
    /// Directory name of this template under the template root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Template::ExpressNodewatch => "express-nodewatch",
            Template::ExpressNodewatchCors => "express-nodewatch-cors",
            Template::ExpressNodemon => "express-nodemon",
            Template::ExpressNodemonCors => "express-nodemon-cors",
        }
    }
}

/// Pure decision table over `(hot_reload, enable_cors)`.
///
/// `HotReload::None` rides the nodewatch trees: the file payload is identical
/// and the only difference — the `dev` script — is rewritten by the manifest
/// patch step afterwards. That collapse is a permanent contract, not an
/// accident; there is no dedicated plain-`node` template.
pub fn select(hot_reload: HotReload, enable_cors: bool) -> Template {
    match (hot_reload, enable_cors) {
        (HotReload::Nodemon, false) => Template::ExpressNodemon,
        (HotReload::Nodemon, true) => Template::ExpressNodemonCors,
        (HotReload::NodeWatch | HotReload::None, false) => Template::ExpressNodewatch,
        (HotReload::NodeWatch | HotReload::None, true) => Template::ExpressNodewatchCors,
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    /// The full decision table: all six reachable input pairs.
    #[test]
    fn test_select_matches_decision_table() {
        assert_eq!(
            select(HotReload::NodeWatch, false),
            Template::ExpressNodewatch
        );
        assert_eq!(
            select(HotReload::NodeWatch, true),
            Template::ExpressNodewatchCors
        );
        assert_eq!(select(HotReload::None, false), Template::ExpressNodewatch);
        assert_eq!(select(HotReload::None, true), Template::ExpressNodewatchCors);
        assert_eq!(select(HotReload::Nodemon, false), Template::ExpressNodemon);
        assert_eq!(
            select(HotReload::Nodemon, true),
            Template::ExpressNodemonCors
        );
    }

    #[test]
    fn test_none_collapses_onto_nodewatch() {
        for cors in [false, true] {
            assert_eq!(
                select(HotReload::None, cors),
                select(HotReload::NodeWatch, cors)
            );
        }
    }

    #[test]
    fn test_dir_names() {
        assert_eq!(Template::ExpressNodewatch.dir_name(), "express-nodewatch");
        assert_eq!(
            Template::ExpressNodewatchCors.dir_name(),
            "express-nodewatch-cors"
        );
        assert_eq!(Template::ExpressNodemon.dir_name(), "express-nodemon");
        assert_eq!(
            Template::ExpressNodemonCors.dir_name(),
            "express-nodemon-cors"
        );
    }
}
