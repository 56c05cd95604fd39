//! Heading anchors.
//!
//! Derives the set of anchor identifiers a document exposes. ATX headings
//! (`#` through `######`) contribute either their explicit `{#id}` override
//! or a slug of their text, following the common renderer convention.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::prose_lines;

/// Anchor identifiers of one document. Ordered so samples are stable.
pub type HeadingSet = BTreeSet<String>;

/// An ATX heading line with an optional trailing `{#explicit-id}`.
static HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#{1,6}\s+(.+?)(?:\s*\{#([^}]+)\})?$").expect("HEADING_REGEX must compile")
});

/// Characters dropped from heading text before hyphenation.
static NON_SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("NON_SLUG_REGEX must compile"));

/// Runs of whitespace and hyphens collapse to one hyphen.
static SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("SEPARATOR_REGEX must compile"));

/// Convert heading text to its anchor slug.
///
/// Lowercases, trims, strips everything except word characters, whitespace
/// and hyphens, then collapses separator runs into a single `-`.
///
/// ```
/// use doclinks::markdown::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("  multiple   spaces  "), "multiple-spaces");
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_SLUG_REGEX.replace_all(lowered.trim(), "");
    SEPARATOR_REGEX.replace_all(&stripped, "-").into_owned()
}

/// Extract every anchor identifier reachable in `content`.
///
/// Headings inside fenced code blocks are not headings and are skipped.
pub fn extract_headings(content: &str) -> HeadingSet {
    let mut anchors = HeadingSet::new();
    for (_, line) in prose_lines(content) {
        let Some(caps) = HEADING_REGEX.captures(line) else {
            continue;
        };
        match caps.get(2) {
            Some(explicit) => anchors.insert(explicit.as_str().to_string()),
            None => anchors.insert(slugify(&caps[1])),
        };
    }
    anchors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_strips_punctuation() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
    }

    #[test]
    fn slugify_collapses_whitespace() {
        assert_eq!(slugify("  multiple   spaces  "), "multiple-spaces");
    }

    #[test]
    fn slugify_collapses_mixed_separators() {
        assert_eq!(slugify("a - b -- c"), "a-b-c");
    }

    #[test]
    fn slugify_keeps_underscores_and_digits() {
        assert_eq!(slugify("Step_2: Configure"), "step_2-configure");
    }

    #[test]
    fn slugify_keeps_unicode_letters() {
        assert_eq!(slugify("Über Größe"), "über-größe");
    }

    #[test]
    fn extracts_atx_headings_of_all_levels() {
        let doc = "# One\n## Section One\n###### Six Deep";
        let anchors = extract_headings(doc);

        assert!(anchors.contains("one"));
        assert!(anchors.contains("section-one"));
        assert!(anchors.contains("six-deep"));
    }

    #[test]
    fn explicit_id_replaces_slug() {
        let anchors = extract_headings("### Custom {#my-id}");

        assert!(anchors.contains("my-id"));
        assert!(!anchors.contains("custom"));
        assert_eq!(anchors.len(), 1);
    }

    #[test]
    fn requires_whitespace_after_hashes() {
        let anchors = extract_headings("#hashtag\n####### too deep");
        assert!(anchors.is_empty());
    }

    #[test]
    fn duplicate_headings_collapse() {
        let anchors = extract_headings("## Usage\ntext\n## Usage");
        assert_eq!(anchors.len(), 1);
    }

    #[test]
    fn ignores_comment_lines_in_code_blocks() {
        let doc = "# Real\n```sh\n# install deps\n```";
        let anchors = extract_headings(doc);

        assert!(anchors.contains("real"));
        assert!(!anchors.contains("install-deps"));
    }

    #[test]
    fn handles_crlf_line_endings() {
        let anchors = extract_headings("# Title\r\n## Custom {#cid}\r\n");

        assert!(anchors.contains("title"));
        assert!(anchors.contains("cid"));
    }

    #[test]
    fn empty_document_has_no_anchors() {
        assert!(extract_headings("").is_empty());
    }
}
