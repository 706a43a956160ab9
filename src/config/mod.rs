//! Run configuration.
//!
//! Resolves where the table of contents, the source notebooks and the
//! converted notebooks live. The defaults match the standard book layout:
//! notebooks in the working directory, the book (and its `_toc.yml`) in
//! `book/`.

use std::path::{Path, PathBuf};

/// Default path of the table of contents.
pub const DEFAULT_TOC: &str = "book/_toc.yml";

/// Default directory holding the source notebooks.
pub const DEFAULT_INPUT_DIR: &str = ".";

/// Default directory the converted notebooks are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "book";

/// Notebook file extension.
pub const NOTEBOOK_EXTENSION: &str = "ipynb";

/// Resolved file locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookPaths {
    /// Table of contents file.
    pub toc: PathBuf,
    /// Directory the source notebooks are read from.
    pub input_dir: PathBuf,
    /// Directory the converted notebooks are written to.
    pub output_dir: PathBuf,
}

impl Default for BookPaths {
    fn default() -> Self {
        Self {
            toc: PathBuf::from(DEFAULT_TOC),
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl BookPaths {
    /// Path of the source notebook for `stem`.
    #[must_use]
    pub fn input_notebook(&self, stem: &str) -> PathBuf {
        notebook_path(&self.input_dir, stem)
    }

    /// Path the converted notebook for `stem` is written to.
    #[must_use]
    pub fn output_notebook(&self, stem: &str) -> PathBuf {
        notebook_path(&self.output_dir, stem)
    }
}

/// Appends the notebook extension to `stem` without touching dots already
/// in it.
fn notebook_path(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{stem}.{NOTEBOOK_EXTENSION}"))
}
