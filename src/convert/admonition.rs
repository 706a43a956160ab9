//! Comment-delimited sections → MyST admonitions.
//!
//! A section opens with `<!-- begin NAME -->` or
//! `<!-- begin NAME style=STYLE -->` and closes with `<!-- end -->`. The body
//! may be written entirely as a ` > ` blockquote so the callout stands out
//! when the notebook is read directly; that prefix is unwrapped on the way
//! out.
//!
//! The style names are the ones the Sphinx book theme understands
//! (`tip`, `hint`, `warning`, ...).

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConvertError;

/// Begin delimiter. Groups: name, optional `style=...` clause, style.
static BEGIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<!-- begin (.+?) (style=(\w+) )?-->").expect("valid regex")
});

/// A blockquoted body line, with or without content after the marker.
static BLOCKQUOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ >( |\n)(.*)\n?\z").expect("valid regex"));

/// Default display styles for the admonition names used throughout the book.
static ADMONITION_STYLES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("example", "tip"),
        ("rule", "tip"),
        ("exercise", "hint"),
        ("remark", "tip"),
    ])
});

/// Closing delimiter as stored in a cell, newline included.
pub const END_DELIMITER: &str = "<!-- end -->\n";

/// Lines between the begin delimiter and the first body line that are part
/// of the section preamble and never copied into the admonition.
pub const PREAMBLE_OFFSET: usize = 3;

/// A parsed begin delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmonitionHeader {
    /// Text shown in the admonition title.
    pub label: String,
    /// CSS class applied to the admonition.
    pub style: String,
}

impl AdmonitionHeader {
    /// Parses a begin delimiter line, resolving its label and style.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let caps = BEGIN_RE.captures(line)?;
        let name = &caps[1];

        let style = caps.get(3).map_or_else(
            || style_for(name).to_string(),
            |explicit| explicit.as_str().to_string(),
        );

        Some(Self {
            label: label_for(name),
            style,
        })
    }
}

/// Returns the display style for an admonition name.
///
/// Unlisted names are used as their own style.
#[must_use]
pub fn style_for(name: &str) -> &str {
    ADMONITION_STYLES.get(name).copied().unwrap_or(name)
}

/// Returns the admonition title for `name`.
///
/// Multi-word names are kept verbatim; single words are capitalized
/// (first character upper-cased, the rest lower-cased).
#[must_use]
pub fn label_for(name: &str) -> String {
    if name.contains(' ') {
        return name.to_string();
    }

    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

/// Rewrites the admonition section starting at `cursor`, if there is one.
///
/// On a match the whole section, begin and end lines included, is replaced
/// by a `{admonition}` fence, and the index of the end line *in the original
/// sequence* is returned. The caller resumes scanning from there; this index
/// is not adjusted for the lines that were added or removed.
///
/// Returns `Ok(None)` when the line at `cursor` is not a begin delimiter or
/// `cursor` is out of bounds.
///
/// # Errors
///
/// Returns [`ConvertError::UnterminatedAdmonition`] when there is no
/// `<!-- end -->` line and the last line is not a bare `<!-- end -->`.
pub fn create_admonition(
    lines: &mut Vec<String>,
    cursor: usize,
) -> Result<Option<usize>, ConvertError> {
    let Some(header) = lines
        .get(cursor)
        .map(String::as_str)
        .and_then(AdmonitionHeader::parse)
    else {
        return Ok(None);
    };

    let end = find_end(lines, cursor).ok_or_else(|| ConvertError::UnterminatedAdmonition {
        label: header.label.clone(),
        line: cursor,
    })?;

    let body_start = (cursor + PREAMBLE_OFFSET).min(end);
    let body = unwrap_blockquote(&lines[body_start..end]);

    tracing::debug!(
        line = cursor,
        end,
        label = %header.label,
        style = %header.style,
        "rewriting section as admonition"
    );

    let mut block = Vec::with_capacity(body.len() + 3);
    block.push(format!("```{{admonition}} {} \n", header.label));
    block.push(format!(":class: {}\n", header.style));
    block.extend(body);
    block.push("```\n".to_string());

    lines.splice(cursor..=end, block);
    Ok(Some(end))
}

/// Locates the end delimiter for a section opened at `begin`.
///
/// A final line holding `<!-- end -->` without its newline also closes the
/// section.
fn find_end(lines: &[String], begin: usize) -> Option<usize> {
    lines[begin..]
        .iter()
        .position(|line| line == END_DELIMITER)
        .map(|offset| begin + offset)
        .or_else(|| {
            let last = lines.len().checked_sub(1)?;
            (lines[last] == END_DELIMITER.trim_end_matches('\n')).then_some(last)
        })
}

/// Strips the ` > ` blockquote marker from every line, but only if every
/// line carries it. Otherwise the lines are returned unchanged.
#[must_use]
pub fn unwrap_blockquote(body: &[String]) -> Vec<String> {
    let unwrapped: Option<Vec<String>> = body
        .iter()
        .map(|line| {
            BLOCKQUOTE_RE
                .captures(line)
                .map(|caps| format!("{}\n", &caps[2]))
        })
        .collect();

    unwrapped.unwrap_or_else(|| body.to_vec())
}
