//! Cell source rewriting.
//!
//! Both converters work on a cell's source as a `Vec<String>` of lines
//! (newlines kept) plus a cursor, and rewrite a window of lines in place.
//! [`convert_cell`] walks the cursor over the whole cell.

pub mod admonition;
pub mod figure;

pub use admonition::{AdmonitionHeader, create_admonition};
pub use figure::image_to_figure;

use serde::Serialize;

use crate::error::ConvertError;

/// Counts of rewrites performed on one cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CellStats {
    /// Image links turned into figures.
    pub figures: usize,
    /// Sections turned into admonitions.
    pub admonitions: usize,
}

impl CellStats {
    /// Returns `true` if nothing in the cell was rewritten.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.figures == 0 && self.admonitions == 0
    }
}

impl std::ops::AddAssign for CellStats {
    fn add_assign(&mut self, rhs: Self) {
        self.figures += rhs.figures;
        self.admonitions += rhs.admonitions;
    }
}

/// Rewrites every figure and admonition in a cell's source.
///
/// At each position the figure converter runs first, then the admonition
/// converter at wherever the cursor ended up, then the cursor moves one line
/// forward. The line right after a figure block is only checked for an
/// admonition, and scanning after an admonition resumes at the end line's
/// index from before the rewrite.
///
/// # Errors
///
/// Returns [`ConvertError::UnterminatedAdmonition`] for the first section
/// that is never closed. `lines` may already hold earlier rewrites.
pub fn convert_cell(lines: &mut Vec<String>) -> Result<CellStats, ConvertError> {
    let mut stats = CellStats::default();
    let mut cursor = 0;

    while cursor < lines.len() {
        if let Some(next) = image_to_figure(lines, cursor) {
            cursor = next;
            stats.figures += 1;
        }
        if let Some(next) = create_admonition(lines, cursor)? {
            cursor = next;
            stats.admonitions += 1;
        }
        cursor += 1;
    }

    Ok(stats)
}
