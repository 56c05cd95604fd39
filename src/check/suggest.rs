//! Suggestions for broken link targets.
//!
//! When a link points at a file that does not exist, the [`Suggester`]
//! looks through the markdown files under the audit root for names that
//! plausibly match. Suggestions are advisory: any filesystem error simply
//! yields no suggestions.

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::walk::discover_markdown_files;

/// Points for one name containing the other.
const NAME_MATCH_SCORE: u32 = 2;
/// Points for identical extensions.
const EXTENSION_MATCH_SCORE: u32 = 1;

/// Score how likely `candidate` is the file `target` meant to reference.
///
/// Base names are compared lowercased: containment in either direction
/// scores 2, an exactly matching extension adds 1.
pub fn score(target: &str, candidate: &Path) -> u32 {
    let target_path = Path::new(target);
    let target_name = base_name(target_path);
    let candidate_name = base_name(candidate);

    let mut score = 0;
    if target_name.contains(&candidate_name) || candidate_name.contains(&target_name) {
        score += NAME_MATCH_SCORE;
    }
    if target_path.extension() == candidate.extension() {
        score += EXTENSION_MATCH_SCORE;
    }
    score
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Finds similarly named documents under a root directory.
///
/// The document list is collected on first use and reused for every later
/// suggestion in the same run.
pub struct Suggester {
    root: PathBuf,
    excluded: Vec<String>,
    max_results: usize,
    candidates: OnceCell<Option<Vec<PathBuf>>>,
}

impl Suggester {
    /// Create a suggester searching `root`, skipping `excluded` directories.
    pub fn new(root: impl Into<PathBuf>, excluded: Vec<String>, max_results: usize) -> Self {
        Self {
            root: root.into(),
            excluded,
            max_results,
            candidates: OnceCell::new(),
        }
    }

    fn candidates(&self) -> Option<&[PathBuf]> {
        self.candidates
            .get_or_init(|| match discover_markdown_files(&self.root, &self.excluded) {
                Ok(files) => Some(files),
                Err(e) => {
                    debug!("Suggestion search under {} failed: {}", self.root.display(), e);
                    None
                }
            })
            .as_deref()
    }

    /// Up to `max_results` root-relative paths, best match first.
    ///
    /// Equal scores keep discovery order.
    pub fn suggest(&self, target: &str) -> Vec<String> {
        let Some(candidates) = self.candidates() else {
            return Vec::new();
        };

        let mut ranked: Vec<(u32, &PathBuf)> = candidates
            .iter()
            .map(|c| (score(target, c), c))
            .filter(|(s, _)| *s > 0)
            .collect();
        ranked.sort_by(|a, b| b.0.cmp(&a.0));

        ranked
            .into_iter()
            .take(self.max_results)
            .map(|(_, path)| {
                path.strip_prefix(&self.root)
                    .unwrap_or(path.as_path())
                    .to_string_lossy()
                    .into_owned()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::walk::excluded_dirs_with;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn score_rewards_containment_and_extension() {
        assert_eq!(score("install.md", Path::new("/d/install.md")), 3);
        assert_eq!(score("install.md", Path::new("/d/INSTALL.md")), 3);
        assert_eq!(score("guide.md", Path::new("/d/guide.mdx")), 2);
        assert_eq!(score("setup.md", Path::new("/d/other.md")), 1);
        assert_eq!(score("setup.txt", Path::new("/d/other.md")), 0);
    }

    #[test]
    fn score_uses_base_names_only() {
        assert_eq!(score("../docs/api.md", Path::new("/x/docs/api.md")), 3);
    }

    #[test]
    fn suggests_best_matches_first() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("docs")).unwrap();
        fs::write(temp.path().join("a-other.md"), "").unwrap();
        fs::write(temp.path().join("docs/install.md"), "").unwrap();
        fs::write(temp.path().join("install.mdx"), "").unwrap();

        let suggester = Suggester::new(temp.path(), excluded_dirs_with(&[]), 3);
        let found = suggester.suggest("install.md");

        assert_eq!(found.len(), 3);
        assert_eq!(found[0].replace('\\', "/"), "docs/install.md");
        assert_eq!(found[1], "install.mdx");
        assert_eq!(found[2], "a-other.md");
    }

    #[test]
    fn caps_result_count() {
        let temp = TempDir::new().unwrap();
        for name in ["a.md", "b.md", "c.md", "d.md"] {
            fs::write(temp.path().join(name), "").unwrap();
        }

        let suggester = Suggester::new(temp.path(), vec![], 2);
        assert_eq!(suggester.suggest("zzz.md").len(), 2);
    }

    #[test]
    fn zero_scores_are_discarded() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("readme.md"), "").unwrap();

        let suggester = Suggester::new(temp.path(), vec![], 3);
        assert!(suggester.suggest("diagram.png").is_empty());
    }

    #[test]
    fn unreadable_root_yields_nothing() {
        let temp = TempDir::new().unwrap();
        let suggester = Suggester::new(temp.path().join("gone"), vec![], 3);

        assert!(suggester.suggest("x.md").is_empty());
    }
}
