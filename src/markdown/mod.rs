//! Markdown scanning.
//!
//! Line-oriented extraction of the pieces of a markdown document that the
//! link checker cares about:
//!
//! - [`headings`] - anchor identifiers addressable via `#fragment` links
//! - [`references`] - inline links, reference-style links, and images
//!
//! Both scanners ignore fenced code blocks (see [`prose_lines`]).
//!
//! # Example
//!
//! ```
//! use doclinks::markdown::{extract_headings, extract_links};
//!
//! let doc = "# Intro\n\nSee [setup](guide.md#install).\n";
//! assert!(extract_headings(doc).contains("intro"));
//!
//! let links = extract_links(doc);
//! assert_eq!(links[0].line, 3);
//! assert_eq!(links[0].target, "guide.md#install");
//! ```

pub mod headings;
pub mod references;

pub use headings::{extract_headings, slugify, HeadingSet};
pub use references::{extract_images, extract_links, ImageRef, LinkRef};

/// Fence marker that toggles a code block on and off.
const FENCE: &str = "```";

/// Iterate over the lines of `content` that sit outside fenced code blocks.
///
/// Yields `(line_number, line)` with 1-based line numbers. Fence lines
/// themselves toggle state and are never yielded.
pub fn prose_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut in_code_block = false;
    content
        .lines()
        .enumerate()
        .filter_map(move |(idx, line)| {
            if line.trim().starts_with(FENCE) {
                in_code_block = !in_code_block;
                return None;
            }
            if in_code_block {
                None
            } else {
                Some((idx + 1, line))
            }
        })
}
