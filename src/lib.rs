//! doclinks - Audit markdown trees for broken internal links.
//!
//! doclinks walks a directory of markdown documents and reports links to
//! files that do not exist, `#anchor` links to headings that do not exist,
//! and local images that are missing. External URLs are never fetched.
//!
//! # Modules
//!
//! - [`markdown`] - Heading and link extraction from document text
//! - [`check`] - Target resolution, suggestions, per-file checks, reports
//! - [`config`] - Optional `.doclinks.yml` settings
//! - [`cli`] - Command-line interface and argument parsing
//! - [`ui`] - Terminal styling
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use doclinks::check::{Audit, AuditTarget};
//! use doclinks::config::Settings;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("README.md"), "# Readme\n[guide](guide.md)\n").unwrap();
//!
//! let target = AuditTarget::resolve(temp.path()).unwrap();
//! let report = Audit::new(Settings::default()).run(&target).unwrap();
//!
//! assert_eq!(report.files_scanned, 1);
//! assert_eq!(report.issues[0].message, "Link target not found: guide.md");
//! ```

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod markdown;
pub mod ui;

pub use error::{DoclinksError, Result};
