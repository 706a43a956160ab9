//! Shared integration-test harness for running the `nbmyst` binary against
//! a scratch copy of the fixture book.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// A scratch book directory: source notebooks at the root, `_toc.yml` and
/// converted notebooks under `book/`.
pub struct BookDir {
    dir: TempDir,
}

impl BookDir {
    /// Creates an empty book with a `book/` directory.
    #[allow(clippy::missing_panics_doc)]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        fs::create_dir_all(dir.path().join("book")).expect("failed to create book dir");
        Self { dir }
    }

    /// Creates a book holding the given fixture notebooks and ToC.
    #[allow(clippy::missing_panics_doc)]
    pub fn with_fixtures(toc: &str, notebooks: &[&str]) -> Self {
        let book = Self::new();
        fs::copy(fixture_path(toc), book.toc()).expect("failed to copy ToC fixture");
        for name in notebooks {
            fs::copy(fixture_path(name), book.root().join(name))
                .expect("failed to copy notebook fixture");
        }
        book
    }

    /// Root of the book; source notebooks live here.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Path of `book/_toc.yml`.
    pub fn toc(&self) -> PathBuf {
        self.root().join("book/_toc.yml")
    }

    /// Path of a converted notebook.
    pub fn output(&self, stem: &str) -> PathBuf {
        self.root().join("book").join(format!("{stem}.ipynb"))
    }

    /// Runs `nbmyst` with the book root as working directory.
    #[allow(clippy::missing_panics_doc)]
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_nbmyst"))
            .args(args)
            .current_dir(self.root())
            .env_remove("NBMYST_TOC")
            .env_remove("NBMYST_INPUT_DIR")
            .env_remove("NBMYST_OUTPUT_DIR")
            .env_remove("NBMYST_LOG_LEVEL")
            .output()
            .expect("failed to run nbmyst")
    }
}

/// Runs `nbmyst` from the crate root with no book.
#[allow(clippy::missing_panics_doc)]
pub fn spawn_command(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nbmyst"))
        .args(args)
        .output()
        .expect("failed to run nbmyst")
}

/// Returns the path to a test fixture.
#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Reads a notebook and returns each cell's source lines.
#[allow(clippy::missing_panics_doc)]
pub fn cell_sources(path: &Path) -> Vec<Vec<String>> {
    let text = fs::read_to_string(path).expect("failed to read notebook");
    let nb: Value = serde_json::from_str(&text).expect("notebook should be valid JSON");
    nb["cells"]
        .as_array()
        .expect("notebook should have cells")
        .iter()
        .map(|cell| {
            cell["source"]
                .as_array()
                .expect("source should be a line array")
                .iter()
                .map(|line| line.as_str().expect("line should be text").to_string())
                .collect()
        })
        .collect()
}
