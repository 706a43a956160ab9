//! Book conversion pipeline.
//!
//! Reads the table of contents, then loads, converts and writes every
//! notebook it names, strictly one after another. The first error stops the
//! run; a notebook whose conversion fails is never written.

use serde::Serialize;

use crate::config::BookPaths;
use crate::convert::{CellStats, convert_cell};
use crate::error::{ConvertError, NbMystError, NotebookError, Result};
use crate::notebook::Notebook;
use crate::toc::TableOfContents;

/// Whether converted notebooks are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Write each converted notebook to the output directory.
    #[default]
    Write,
    /// Convert in memory only.
    DryRun,
}

/// Totals for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Notebooks converted.
    pub documents: usize,
    /// Table of contents entries without a `file`.
    pub skipped: usize,
    /// Cells visited across all notebooks.
    pub cells: usize,
    /// Rewrites across all notebooks.
    pub stats: CellStats,
}

/// Converts every notebook listed in a book's table of contents.
#[derive(Debug, Clone)]
pub struct BookPipeline {
    paths: BookPaths,
    mode: OutputMode,
}

impl BookPipeline {
    /// Creates a pipeline over the given paths.
    #[must_use]
    pub const fn new(paths: BookPaths, mode: OutputMode) -> Self {
        Self { paths, mode }
    }

    /// Runs the conversion over the whole book.
    ///
    /// # Errors
    ///
    /// Returns the first error met: an unreadable table of contents before
    /// any notebook is touched, then any missing or malformed notebook,
    /// unterminated admonition, or failed write.
    pub fn run(&self) -> Result<RunSummary> {
        let toc = TableOfContents::load(&self.paths.toc)?;
        tracing::info!(
            toc = %self.paths.toc.display(),
            entries = toc.entries.len(),
            "loaded table of contents"
        );

        let mut summary = RunSummary::default();
        for entry in &toc.entries {
            let Some(stem) = entry.stem() else {
                tracing::debug!(?entry, "skipping entry without a file");
                summary.skipped += 1;
                continue;
            };
            self.process_document(stem, &mut summary)?;
        }

        tracing::info!(
            documents = summary.documents,
            skipped = summary.skipped,
            cells = summary.cells,
            figures = summary.stats.figures,
            admonitions = summary.stats.admonitions,
            "conversion complete"
        );
        Ok(summary)
    }

    fn process_document(&self, stem: &str, summary: &mut RunSummary) -> Result<()> {
        let input = self.paths.input_notebook(stem);
        let mut notebook = Notebook::load(&input)?;

        let stats = convert_notebook(&mut notebook, stem)?;
        summary.documents += 1;
        summary.cells += notebook.cell_count();
        summary.stats += stats;

        match self.mode {
            OutputMode::Write => {
                let output = self.paths.output_notebook(stem);
                notebook.save(&output)?;
                tracing::info!(
                    file = %output.display(),
                    figures = stats.figures,
                    admonitions = stats.admonitions,
                    "wrote notebook"
                );
            }
            OutputMode::DryRun => {
                tracing::info!(
                    file = %input.display(),
                    figures = stats.figures,
                    admonitions = stats.admonitions,
                    "checked notebook"
                );
            }
        }
        Ok(())
    }
}

/// Rewrites every cell of `notebook` in place.
///
/// `stem` only labels errors.
///
/// # Errors
///
/// Returns `NbMystError::Notebook` for a cell without text `source` and
/// `NbMystError::UnterminatedAdmonition` for a section that is never closed.
pub fn convert_notebook(notebook: &mut Notebook, stem: &str) -> Result<CellStats> {
    let notebook_error = |source: NotebookError| NbMystError::Notebook {
        path: stem.into(),
        source,
    };

    let mut total = CellStats::default();
    for cell in 0..notebook.cell_count() {
        let mut lines = notebook.source(cell).map_err(notebook_error)?;
        let stats = convert_cell(&mut lines).map_err(|err| match err {
            ConvertError::UnterminatedAdmonition { label, .. } => {
                NbMystError::UnterminatedAdmonition {
                    label,
                    cell,
                    file: stem.to_string(),
                }
            }
        })?;

        if !stats.is_empty() {
            tracing::trace!(
                file = stem,
                cell,
                figures = stats.figures,
                admonitions = stats.admonitions,
                "converted cell"
            );
        }
        total += stats;
        notebook.set_source(cell, lines).map_err(notebook_error)?;
    }
    Ok(total)
}
