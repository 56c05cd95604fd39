//! Settings file discovery and loading.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::schema::Settings;
use crate::error::{DoclinksError, Result};

/// Settings file name looked up in the audit root.
pub const SETTINGS_FILE: &str = ".doclinks.yml";

/// Load settings for an audit rooted at `root`.
///
/// An explicit `override_path` must exist. Without one, `.doclinks.yml` in
/// `root` is used when present and built-in defaults otherwise.
pub fn load_settings(root: &Path, override_path: Option<&Path>) -> Result<Settings> {
    if let Some(path) = override_path {
        debug!("Using settings file {}", path.display());
        return load_settings_file(path);
    }

    let path = root.join(SETTINGS_FILE);
    if path.is_file() {
        debug!("Using settings file {}", path.display());
        load_settings_file(&path)
    } else {
        debug!("No {} in {}, using defaults", SETTINGS_FILE, root.display());
        Ok(Settings::default())
    }
}

/// Load a single settings file.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DoclinksError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DoclinksError::Io(e)
        }
    })?;

    parse_settings(&content, path)
}

/// Parse YAML content into [`Settings`].
///
/// An empty document yields the defaults.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(content).map_err(|e| DoclinksError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
