//! Per-file checking and whole-run auditing.
//!
//! [`FileChecker`] turns one document into its ordered list of issues.
//! [`Audit`] resolves the target path, discovers documents, and runs the
//! checker over each of them in discovery order.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::issue::{Category, Issue, Severity};
use super::resolver::{classify_image, classify_link, normalize, resolve_against, Target};
use super::suggest::Suggester;
use super::walk::discover_markdown_files;
use crate::config::Settings;
use crate::error::{DoclinksError, Result};
use crate::markdown::{extract_headings, extract_images, extract_links, HeadingSet, ImageRef, LinkRef};

/// Checks individual documents against the filesystem.
pub struct FileChecker<'a> {
    root: &'a Path,
    suggester: &'a Suggester,
    anchor_samples: usize,
}

impl<'a> FileChecker<'a> {
    /// Create a checker reporting paths relative to `root`.
    pub fn new(root: &'a Path, suggester: &'a Suggester, anchor_samples: usize) -> Self {
        Self {
            root,
            suggester,
            anchor_samples,
        }
    }

    fn relative(&self, file: &Path) -> String {
        file.strip_prefix(self.root)
            .unwrap_or(file)
            .to_string_lossy()
            .into_owned()
    }

    /// All issues in `file`: links first, then images, each in document order.
    ///
    /// An unreadable file produces a single `read-error` issue on line 0.
    pub fn check_file(&self, file: &Path) -> Vec<Issue> {
        let rel = self.relative(file);
        debug!("Checking {}", rel);

        let content = match fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                return vec![Issue::new(
                    rel,
                    0,
                    Severity::Critical,
                    Category::ReadError,
                    format!("Cannot read file: {}", e),
                )];
            }
        };

        let dir = file.parent().unwrap_or(self.root);
        let headings = extract_headings(&content);

        let mut issues = Vec::new();
        for link in extract_links(&content) {
            issues.extend(self.check_link(&rel, dir, &headings, &link));
        }
        for image in extract_images(&content) {
            issues.extend(self.check_image(&rel, dir, &image));
        }
        issues
    }

    fn check_link(
        &self,
        rel: &str,
        dir: &Path,
        own_headings: &HeadingSet,
        link: &LinkRef,
    ) -> Option<Issue> {
        let Target::Local { path, anchor } = classify_link(&link.target) else {
            return None;
        };

        if path.is_empty() {
            let anchor = anchor?;
            return self.check_anchor(rel, link.line, &anchor, own_headings, "this file");
        }

        let resolved = resolve_against(dir, &path);
        if !resolved.exists() {
            let similar = self.suggester.suggest(&path);
            let suggestion =
                (!similar.is_empty()).then(|| format!("Did you mean: {}", similar.join(", ")));
            return Some(
                Issue::new(
                    rel,
                    link.line,
                    Severity::Critical,
                    Category::BrokenLink,
                    format!("Link target not found: {}", path),
                )
                .with_suggestion(suggestion),
            );
        }

        let anchor = anchor?;
        let target_headings = match fs::read_to_string(&resolved) {
            Ok(content) => extract_headings(&content),
            Err(e) => {
                debug!(
                    "Skipping anchor check of {}: cannot read {}: {}",
                    rel,
                    resolved.display(),
                    e
                );
                return None;
            }
        };
        self.check_anchor(rel, link.line, &anchor, &target_headings, &path)
    }

    fn check_anchor(
        &self,
        rel: &str,
        line: usize,
        anchor: &str,
        headings: &HeadingSet,
        location: &str,
    ) -> Option<Issue> {
        if headings.contains(anchor) {
            return None;
        }
        let suggestion = (!headings.is_empty()).then(|| {
            let sample: Vec<&str> = headings
                .iter()
                .take(self.anchor_samples)
                .map(String::as_str)
                .collect();
            format!("Available anchors: {}", sample.join(", "))
        });
        Some(
            Issue::new(
                rel,
                line,
                Severity::Warning,
                Category::MissingAnchor,
                format!("Anchor #{} not found in {}", anchor, location),
            )
            .with_suggestion(suggestion),
        )
    }

    fn check_image(&self, rel: &str, dir: &Path, image: &ImageRef) -> Option<Issue> {
        let Target::Local { path, .. } = classify_image(&image.path) else {
            return None;
        };
        if resolve_against(dir, &path).exists() {
            return None;
        }
        Some(Issue::new(
            rel,
            image.line,
            Severity::Critical,
            Category::MissingImage,
            format!("Image not found: {}", image.path),
        ))
    }
}

/// The resolved scope of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditTarget {
    /// Directory issue paths are relative to and suggestions are drawn from.
    pub root: PathBuf,
    /// Set when the user named a single file instead of a directory.
    pub single_file: Option<PathBuf>,
}

impl AuditTarget {
    /// Resolve a user-supplied path to an absolute audit scope.
    ///
    /// # Errors
    ///
    /// Returns `PathNotFound` if the path does not exist.
    pub fn resolve(path: &Path) -> Result<Self> {
        let absolute = normalize(&std::path::absolute(path)?);
        if !absolute.exists() {
            return Err(DoclinksError::PathNotFound { path: absolute });
        }

        if absolute.is_file() {
            let root = absolute
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| absolute.clone());
            Ok(Self {
                root,
                single_file: Some(absolute),
            })
        } else {
            Ok(Self {
                root: absolute,
                single_file: None,
            })
        }
    }

    /// The documents to check, in discovery order.
    pub fn files(&self, excluded: &[String]) -> Result<Vec<PathBuf>> {
        match &self.single_file {
            Some(file) => Ok(vec![file.clone()]),
            None => Ok(discover_markdown_files(&self.root, excluded)?),
        }
    }
}

/// Outcome of a full run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    /// Number of documents checked.
    pub files_scanned: usize,
    /// Every issue, in file order then in-file order.
    pub issues: Vec<Issue>,
}

impl AuditReport {
    /// Whether the run found nothing to report.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issues of one severity, in discovery order.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.severity == severity)
    }
}

/// Runs the checker over every document in an [`AuditTarget`].
pub struct Audit {
    settings: Settings,
}

impl Audit {
    /// Create an audit with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Check every document of `target`.
    ///
    /// Files are processed one at a time; issue order follows file
    /// discovery order.
    pub fn run(&self, target: &AuditTarget) -> Result<AuditReport> {
        let excluded = self.settings.excluded_dirs();
        let files = target.files(&excluded)?;
        debug!("Discovered {} markdown files under {}", files.len(), target.root.display());

        let suggester = Suggester::new(&target.root, excluded, self.settings.max_suggestions);
        let checker = FileChecker::new(&target.root, &suggester, self.settings.anchor_samples);

        let issues = files.iter().flat_map(|f| checker.check_file(f)).collect();
        Ok(AuditReport {
            files_scanned: files.len(),
            issues,
        })
    }
}
