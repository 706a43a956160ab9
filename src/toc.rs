//! Jupyter Book table of contents parsing.
//!
//! The table of contents (`_toc.yml`) is a YAML sequence of entries. Each
//! entry that has a `file` key names one notebook; its basename is the
//! notebook stem. Entries without a `file` (part headers, external links)
//! are skipped.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::TocError;

/// One entry in the table of contents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TocEntry {
    /// Path of the document, relative to the book root, without extension.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl TocEntry {
    /// Returns the notebook stem: the basename of `file`.
    #[must_use]
    pub fn stem(&self) -> Option<&str> {
        self.file.as_deref()?.file_name()?.to_str()
    }
}

/// Parsed table of contents.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TableOfContents {
    /// Entries in book order.
    pub entries: Vec<TocEntry>,
}

impl TableOfContents {
    /// Loads a table of contents from disk.
    ///
    /// # Errors
    ///
    /// Returns `TocError::Open` if the file cannot be read and
    /// `TocError::Parse` if it is not a YAML sequence of mappings.
    pub fn load(path: &Path) -> Result<Self, TocError> {
        let content = fs::read_to_string(path).map_err(|source| TocError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content).map_err(|source| TocError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses a table of contents from YAML text.
    ///
    /// # Errors
    ///
    /// Returns the YAML error if `content` is not a sequence of mappings.
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Iterates over the stems of every entry that names a document.
    pub fn stems(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(TocEntry::stem)
    }
}
