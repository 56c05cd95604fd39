//! Link and image target resolution.
//!
//! Classifies raw targets (external, reference-style, or local), splits
//! local link targets into a percent-decoded path part and an anchor, and
//! resolves path parts against the referencing document's directory.

use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::markdown::references::REFERENCE_PREFIX;

/// Link schemes that are never checked.
static EXTERNAL_LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:https?://|mailto:|ftp:)").expect("EXTERNAL_LINK_REGEX must compile")
});

/// Image sources that are never checked.
static EXTERNAL_IMAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:https?://|data:)").expect("EXTERNAL_IMAGE_REGEX must compile")
});

/// A classified link or image target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// URL with an external scheme.
    External,
    /// Reference-style indirection (`ref:name`), left unresolved.
    Reference,
    /// A filesystem target.
    Local {
        /// Percent-decoded path; empty for same-document anchors.
        path: String,
        /// Fragment after the first `#`, if non-empty.
        anchor: Option<String>,
    },
}

/// Percent-decode a path, keeping the raw text if it does not decode to UTF-8.
pub fn decode(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}

/// Classify a raw link target.
///
/// ```
/// use doclinks::check::{classify_link, Target};
///
/// assert_eq!(classify_link("https://example.com"), Target::External);
/// assert_eq!(
///     classify_link("my%20doc.md#setup"),
///     Target::Local { path: "my doc.md".into(), anchor: Some("setup".into()) },
/// );
/// ```
pub fn classify_link(raw: &str) -> Target {
    if EXTERNAL_LINK_REGEX.is_match(raw) {
        return Target::External;
    }
    if raw.starts_with(REFERENCE_PREFIX) {
        return Target::Reference;
    }

    let (path, anchor) = match raw.split_once('#') {
        Some((path, anchor)) => (path, Some(anchor)),
        None => (raw, None),
    };
    Target::Local {
        path: decode(path).into_owned(),
        anchor: anchor.filter(|a| !a.is_empty()).map(str::to_string),
    }
}

/// Classify a raw image source. Images never carry anchors.
pub fn classify_image(raw: &str) -> Target {
    if EXTERNAL_IMAGE_REGEX.is_match(raw) {
        return Target::External;
    }
    Target::Local {
        path: decode(raw).into_owned(),
        anchor: None,
    }
}

/// Resolve `path_part` relative to `base_dir`.
///
/// Absolute path parts stand on their own. The result is lexically
/// normalized; symbolic links are not consulted.
pub fn resolve_against(base_dir: &Path, path_part: &str) -> PathBuf {
    normalize(&base_dir.join(path_part))
}

/// Collapse `.` and `..` components without touching the filesystem.
///
/// `..` never climbs above the root of an absolute path.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
