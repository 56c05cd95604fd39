//! Optional per-tree settings.
//!
//! A `.doclinks.yml` in the audit root can extend the directory denylist
//! and tune how many suggestions are shown:
//!
//! ```
//! use doclinks::config::load_settings;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".doclinks.yml"), "exclude_dirs: [vendor]").unwrap();
//!
//! let settings = load_settings(temp.path(), None).unwrap();
//! assert!(settings.excluded_dirs().contains(&"vendor".to_string()));
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_settings, load_settings_file, parse_settings, SETTINGS_FILE};
pub use schema::Settings;
