//! Link checking.
//!
//! The pipeline, leaf first:
//!
//! - [`walk`] discovers markdown documents under the audit root
//! - [`resolver`] classifies and resolves link and image targets
//! - [`suggest`] proposes similarly named documents for broken links
//! - [`checker`] runs every rule over one document and accumulates issues
//! - [`output`] renders the final issue list as text or JSON

pub mod checker;
pub mod issue;
pub mod output;
pub mod resolver;
pub mod suggest;
pub mod walk;

pub use checker::{Audit, AuditReport, AuditTarget, FileChecker};
pub use issue::{Category, Issue, Severity};
pub use output::{HumanFormatter, JsonFormatter, ReportFormatter};
pub use resolver::{classify_image, classify_link, resolve_against, Target};
pub use suggest::Suggester;
pub use walk::discover_markdown_files;
