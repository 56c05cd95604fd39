//! Issue reports.
//!
//! An [`Issue`] is one problem found in one document. Issues are built once
//! and accumulated in discovery order: file order, then in-file order.

use serde::Serialize;

/// Severity level for issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational, nothing is broken.
    Info,
    /// Something a reader will notice, such as a dangling anchor.
    Warning,
    /// A link or image that does not resolve at all.
    Critical,
}

impl Severity {
    /// Report groups, most severe first.
    pub const REPORT_ORDER: [Severity; 3] = [Severity::Critical, Severity::Warning, Severity::Info];

    /// Upper-case label used for report section headers.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// What kind of problem an issue describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Link path does not exist.
    BrokenLink,
    /// Link anchor is not a heading of the target document.
    MissingAnchor,
    /// Image file does not exist.
    MissingImage,
    /// The document itself could not be read.
    ReadError,
}

impl Category {
    /// The tag printed in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::BrokenLink => "broken-link",
            Category::MissingAnchor => "missing-anchor",
            Category::MissingImage => "missing-image",
            Category::ReadError => "read-error",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single problem found in a document.
///
/// Field order is the serialized JSON order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Document path relative to the audit root.
    pub file: String,
    /// 1-based line, or 0 for file-level problems.
    pub line: usize,
    pub severity: Severity,
    pub category: Category,
    /// Human-readable description.
    pub message: String,
    /// Optional hint for fixing the problem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Issue {
    /// Create a new issue without a suggestion.
    pub fn new(
        file: impl Into<String>,
        line: usize,
        severity: Severity,
        category: Category,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            severity,
            category,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Attach an optional suggestion.
    pub fn with_suggestion(mut self, suggestion: Option<String>) -> Self {
        self.suggestion = suggestion;
        self
    }
}
