//! Error types for `nbmyst`
//!
//! Every failure is fatal to the run. Each top-level error maps to a fixed
//! process exit code so scripts and CI can tell the failure kinds apart.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `nbmyst` CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Table of contents could not be opened or parsed
    pub const TOC_ERROR: i32 = 2;

    /// I/O error (notebook not found, output not writable)
    pub const IO_ERROR: i32 = 3;

    /// Notebook is not valid JSON or lacks `cells` / `source`
    pub const NOTEBOOK_ERROR: i32 = 4;

    /// An admonition block was never closed
    pub const CONVERT_ERROR: i32 = 5;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `nbmyst` operations.
#[derive(Debug, Error)]
pub enum NbMystError {
    /// Table of contents could not be loaded
    #[error(transparent)]
    Toc(#[from] TocError),

    /// A notebook named in the table of contents is malformed
    #[error("{}: {source}", path.display())]
    Notebook {
        /// Path of the offending notebook
        path: PathBuf,
        /// Underlying notebook error
        #[source]
        source: NotebookError,
    },

    /// An admonition begin delimiter has no matching end
    #[error("{label} has no closing 'end' in cell {cell} in file {file}")]
    UnterminatedAdmonition {
        /// Resolved admonition label
        label: String,
        /// Index of the cell within the notebook
        cell: usize,
        /// Notebook stem as named in the table of contents
        file: String,
    },

    /// I/O error on a specific path
    #[error("{}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NbMystError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Toc(_) => ExitCode::TOC_ERROR,
            Self::Notebook { .. } => ExitCode::NOTEBOOK_ERROR,
            Self::UnterminatedAdmonition { .. } => ExitCode::CONVERT_ERROR,
            Self::Io { .. } => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

// ============================================================================
// Table of Contents Errors
// ============================================================================

/// Errors loading the Jupyter Book table of contents.
#[derive(Debug, Error)]
pub enum TocError {
    /// The file could not be opened
    #[error("Could not open ToC. ({}: {source})", path.display())]
    Open {
        /// Path of the table of contents
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not a YAML sequence of entries
    #[error("parse error in {}: {source}", path.display())]
    Parse {
        /// Path of the table of contents
        path: PathBuf,
        /// Error from the YAML parser
        #[source]
        source: serde_yaml::Error,
    },
}

// ============================================================================
// Notebook Errors
// ============================================================================

/// Structural problems in a notebook document.
#[derive(Debug, Error)]
pub enum NotebookError {
    /// Not valid JSON
    #[error("invalid notebook JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Top level has no `cells` array
    #[error("notebook has no 'cells' array")]
    MissingCells,

    /// A cell has no `source` key
    #[error("cell {cell} has no 'source'")]
    MissingSource {
        /// Index of the cell
        cell: usize,
    },

    /// A cell's `source` is neither a string nor an array of strings
    #[error("cell {cell} has a 'source' that is not text")]
    InvalidSource {
        /// Index of the cell
        cell: usize,
    },
}

// ============================================================================
// Conversion Errors
// ============================================================================

/// Errors raised by the cell converters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// A `<!-- begin ... -->` line has no `<!-- end -->`
    #[error("{label} has no closing 'end' (begin delimiter at line {line})")]
    UnterminatedAdmonition {
        /// Resolved admonition label
        label: String,
        /// Index of the begin line within the cell source
        line: usize,
    },
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `nbmyst` operations.
pub type Result<T> = std::result::Result<T, NbMystError>;

// ============================================================================
// Tests
// ============================================================================
