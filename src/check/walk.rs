//! Markdown file discovery.
//!
//! Walks a directory tree depth-first with an explicit worklist, skipping
//! dependency, build, and version-control directories. Entries are visited
//! in file-name order so repeated runs see files in the same order.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;

/// Directory names that are never descended into.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", ".git", "dist", "build", ".next", "coverage"];

/// File extensions treated as markdown (compared case-insensitively).
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "mdx"];

struct Entry {
    path: PathBuf,
    is_dir: bool,
    is_file: bool,
}

/// Whether `path` has a markdown extension.
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MARKDOWN_EXTENSIONS.iter().any(|m| ext.eq_ignore_ascii_case(m)))
}

fn is_excluded(name: &str, excluded: &[String]) -> bool {
    excluded.iter().any(|e| e == name)
}

/// Read a directory's entries sorted by file name.
fn sorted_entries(dir: &Path) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        entries.push(Entry {
            path: entry.path(),
            is_dir: file_type.is_dir(),
            is_file: file_type.is_file(),
        });
    }
    entries.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    Ok(entries)
}

/// Find every markdown file under `root`.
///
/// `excluded` holds directory names (exact, case-sensitive) to skip at any
/// depth. Symbolic links are not followed.
pub fn discover_markdown_files(root: &Path, excluded: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut worklist = sorted_entries(root)?;
    worklist.reverse();

    while let Some(entry) = worklist.pop() {
        if entry.is_dir {
            let name = entry
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if is_excluded(&name, excluded) {
                trace!("Skipping excluded directory {}", entry.path.display());
                continue;
            }
            let mut children = sorted_entries(&entry.path)?;
            children.reverse();
            worklist.extend(children);
        } else if entry.is_file && is_markdown(&entry.path) {
            files.push(entry.path);
        }
    }

    Ok(files)
}

/// The built-in denylist plus any extra names.
pub fn excluded_dirs_with(extra: &[String]) -> Vec<String> {
    EXCLUDED_DIRS
        .iter()
        .map(|s| s.to_string())
        .chain(extra.iter().cloned())
        .collect()
}
