//! Link and image references.
//!
//! Scans prose lines (fenced code excluded, inline code spans masked) for
//! `[text](target)` links, `[text][ref]` reference-style links, and
//! `![alt](path)` images. Targets are returned raw; resolution happens in
//! [`crate::check::resolver`].

use std::sync::LazyLock;

use regex::Regex;

use super::prose_lines;

/// Prefix marking a reference-style target, which is never resolved.
pub const REFERENCE_PREFIX: &str = "ref:";

static INLINE_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`]+`").expect("INLINE_CODE_REGEX must compile"));

static INLINE_LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]*)\]\(([^)]+)\)").expect("INLINE_LINK_REGEX must compile")
});

static REFERENCE_LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\[([^\]]*)\]").expect("REFERENCE_LINK_REGEX must compile")
});

static IMAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("IMAGE_REGEX must compile"));

/// A link found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRef {
    /// 1-based line number.
    pub line: usize,
    /// Display text between the brackets.
    pub text: String,
    /// Raw target: a path, `path#anchor`, `#anchor`, or `ref:name`.
    pub target: String,
}

/// An image found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// 1-based line number.
    pub line: usize,
    /// Raw image path as written.
    pub path: String,
}

/// Remove inline code spans so link syntax inside them is ignored.
fn mask_inline_code(line: &str) -> std::borrow::Cow<'_, str> {
    INLINE_CODE_REGEX.replace_all(line, "")
}

/// Replace each image with its alt text, leaving the enclosing link of a
/// linked image (`[![alt](img)](target)`) intact.
fn mask_images(line: &str) -> std::borrow::Cow<'_, str> {
    IMAGE_REGEX.replace_all(line, "$1")
}

/// Extract links in document order.
///
/// Per line, inline links come first (left to right), then reference-style
/// links. Images are not links; a linked image reports its outer target.
pub fn extract_links(content: &str) -> Vec<LinkRef> {
    let mut links = Vec::new();

    for (line_num, line) in prose_lines(content) {
        let code_masked = mask_inline_code(line);
        let line = mask_images(&code_masked);

        for caps in INLINE_LINK_REGEX.captures_iter(&line) {
            links.push(LinkRef {
                line: line_num,
                text: caps[1].to_string(),
                target: caps[2].to_string(),
            });
        }

        for caps in REFERENCE_LINK_REGEX.captures_iter(&line) {
            let name = match &caps[2] {
                "" => &caps[1],
                explicit => explicit,
            };
            links.push(LinkRef {
                line: line_num,
                text: caps[1].to_string(),
                target: format!("{}{}", REFERENCE_PREFIX, name),
            });
        }
    }

    links
}

/// Extract images in document order.
pub fn extract_images(content: &str) -> Vec<ImageRef> {
    let mut images = Vec::new();

    for (line_num, line) in prose_lines(content) {
        let line = mask_inline_code(line);
        for caps in IMAGE_REGEX.captures_iter(&line) {
            images.push(ImageRef {
                line: line_num,
                path: caps[2].to_string(),
            });
        }
    }

    images
}
