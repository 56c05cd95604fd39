//! Settings file schema.

use serde::Deserialize;

use crate::check::walk::excluded_dirs_with;

/// Tunables read from `.doclinks.yml`.
///
/// Every key is optional; unknown keys are rejected so typos surface as
/// parse errors instead of being silently ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory names skipped in addition to the built-in denylist.
    pub exclude_dirs: Vec<String>,

    /// Maximum number of "Did you mean" candidates for a broken link.
    pub max_suggestions: usize,

    /// Maximum number of headings listed for a missing anchor.
    pub anchor_samples: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            exclude_dirs: Vec::new(),
            max_suggestions: default_max_suggestions(),
            anchor_samples: default_anchor_samples(),
        }
    }
}

fn default_max_suggestions() -> usize {
    3
}

fn default_anchor_samples() -> usize {
    5
}

impl Settings {
    /// The full denylist: built-in names followed by `exclude_dirs`.
    pub fn excluded_dirs(&self) -> Vec<String> {
        excluded_dirs_with(&self.exclude_dirs)
    }
}
