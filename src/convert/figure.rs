//! Image link → MyST figure rewriting.
//!
//! A line that starts with `![caption](res/name.ext)` becomes a `{figure}`
//! directive whose caption is the alt text. Nothing else about the figure
//! is customized.

use regex::Regex;
use std::sync::LazyLock;

/// Image reference rooted under `res/`. Groups: caption, path, name.
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!\[(.*)\]\((res/(.*?)\.(.*?))\)").expect("valid regex"));

/// Number of lines in an emitted figure block.
pub const FIGURE_BLOCK_LEN: usize = 6;

/// Rewrites the image link at `cursor`, if there is one.
///
/// On a match the single line is replaced by a six-line figure block and the
/// cursor just past the block is returned. Any text after the closing
/// parenthesis is dropped with the line. Returns `None` when the line is not
/// an image link or `cursor` is out of bounds.
pub fn image_to_figure(lines: &mut Vec<String>, cursor: usize) -> Option<usize> {
    let block = figure_block(lines.get(cursor)?)?;
    tracing::debug!(line = cursor, "rewriting image link as figure");

    lines.splice(cursor..=cursor, block);
    Some(cursor + FIGURE_BLOCK_LEN)
}

/// Builds the figure block for a single line, or `None` if it does not match.
#[must_use]
pub fn figure_block(line: &str) -> Option<Vec<String>> {
    let caps = IMAGE_RE.captures(line)?;
    let caption = &caps[1];
    let path = &caps[2];
    let name = &caps[3];

    Some(vec![
        format!("```{{figure}} ../{path}\n"),
        "---\n".to_string(),
        format!("name: {name}\n"),
        "---\n".to_string(),
        format!("{caption}\n"),
        "```\n".to_string(),
    ])
}
