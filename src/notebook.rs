//! Notebook documents.
//!
//! A notebook is kept as a raw JSON value so every key the converter does not
//! touch (kernel metadata, outputs, execution counts) round-trips unchanged
//! and in its original order. Only each cell's `source` is read and replaced.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{NbMystError, NotebookError};

/// A loaded `.ipynb` document.
#[derive(Debug, Clone, PartialEq)]
pub struct Notebook {
    raw: Value,
}

impl Notebook {
    /// Parses a notebook from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `NotebookError::Parse` on invalid JSON and
    /// `NotebookError::MissingCells` if there is no top-level `cells` array.
    pub fn parse(content: &str) -> Result<Self, NotebookError> {
        let raw: Value = serde_json::from_str(content)?;
        if !raw.get("cells").is_some_and(Value::is_array) {
            return Err(NotebookError::MissingCells);
        }
        Ok(Self { raw })
    }

    /// Reads and parses a notebook from disk.
    ///
    /// # Errors
    ///
    /// Returns `NbMystError::Io` if the file cannot be read and
    /// `NbMystError::Notebook` if it is not a valid notebook.
    pub fn load(path: &Path) -> Result<Self, NbMystError> {
        let content = fs::read_to_string(path).map_err(|e| NbMystError::io(path, e))?;
        Self::parse(&content).map_err(|source| NbMystError::Notebook {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Serializes the notebook as JSON indented by two spaces.
    ///
    /// # Errors
    ///
    /// Returns the serializer error, which does not occur for values
    /// produced by [`Notebook::parse`].
    pub fn to_pretty_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.raw)
    }

    /// Writes the notebook to disk, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns `NbMystError::Io` if the file or its directory cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), NbMystError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| NbMystError::io(parent, e))?;
        }
        let content = self.to_pretty_string()?;
        fs::write(path, content).map_err(|e| NbMystError::io(path, e))
    }

    /// Number of cells in the notebook.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells().map_or(0, Vec::len)
    }

    /// Returns the source lines of the cell at `index`.
    ///
    /// A source stored as a single string is split after each newline.
    ///
    /// # Errors
    ///
    /// Returns `NotebookError::MissingSource` if the cell has no `source`
    /// and `NotebookError::InvalidSource` if it is not text.
    pub fn source(&self, index: usize) -> Result<Vec<String>, NotebookError> {
        let source = self
            .cells()
            .and_then(|cells| cells.get(index))
            .and_then(|cell| cell.get("source"))
            .ok_or(NotebookError::MissingSource { cell: index })?;

        match source {
            Value::String(text) => Ok(text.split_inclusive('\n').map(str::to_string).collect()),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .ok_or(NotebookError::InvalidSource { cell: index }),
            _ => Err(NotebookError::InvalidSource { cell: index }),
        }
    }

    /// Replaces the source of the cell at `index` with a list of lines.
    ///
    /// # Errors
    ///
    /// Returns `NotebookError::MissingSource` if there is no such cell.
    pub fn set_source(&mut self, index: usize, lines: Vec<String>) -> Result<(), NotebookError> {
        let cell = self
            .raw
            .get_mut("cells")
            .and_then(Value::as_array_mut)
            .and_then(|cells| cells.get_mut(index))
            .and_then(Value::as_object_mut)
            .ok_or(NotebookError::MissingSource { cell: index })?;

        cell.insert(
            "source".to_string(),
            Value::Array(lines.into_iter().map(Value::String).collect()),
        );
        Ok(())
    }

    fn cells(&self) -> Option<&Vec<Value>> {
        self.raw.get("cells").and_then(Value::as_array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn notebook() -> Notebook {
        Notebook::parse(
            &json!({
                "cells": [
                    {
                        "cell_type": "markdown",
                        "metadata": {},
                        "source": ["# Title\n", "text"]
                    },
                    {
                        "cell_type": "code",
                        "execution_count": 1,
                        "metadata": {},
                        "outputs": [],
                        "source": "x = 1\ny = 2"
                    }
                ],
                "metadata": {"kernelspec": {"name": "python3"}},
                "nbformat": 4,
                "nbformat_minor": 5
            })
            .to_string(),
        )
        .unwrap()
    }

    #[test]
    fn reads_array_source() {
        let nb = notebook();
        assert_eq!(nb.cell_count(), 2);
        assert_eq!(nb.source(0).unwrap(), vec!["# Title\n", "text"]);
    }

    #[test]
    fn splits_string_source_keeping_newlines() {
        let nb = notebook();
        assert_eq!(nb.source(1).unwrap(), vec!["x = 1\n", "y = 2"]);
    }

    #[test]
    fn set_source_writes_line_array() {
        let mut nb = notebook();
        nb.set_source(1, vec!["z = 3\n".to_string()]).unwrap();

        let out: Value = serde_json::from_str(&nb.to_pretty_string().unwrap()).unwrap();
        assert_eq!(out["cells"][1]["source"], json!(["z = 3\n"]));
        assert_eq!(out["cells"][1]["execution_count"], json!(1));
        assert_eq!(out["metadata"]["kernelspec"]["name"], json!("python3"));
    }

    #[test]
    fn key_order_is_preserved() {
        let text = r#"{"nbformat": 4, "cells": [{"source": [], "cell_type": "markdown"}], "metadata": {}}"#;
        let nb = Notebook::parse(text).unwrap();
        let out = nb.to_pretty_string().unwrap();

        let nbformat = out.find("\"nbformat\"").unwrap();
        let cells = out.find("\"cells\"").unwrap();
        let source = out.find("\"source\"").unwrap();
        let cell_type = out.find("\"cell_type\"").unwrap();
        assert!(nbformat < cells);
        assert!(source < cell_type);
    }

    #[test]
    fn output_is_indented_by_two_spaces() {
        let nb = Notebook::parse(r#"{"cells": []}"#).unwrap();
        assert_eq!(nb.to_pretty_string().unwrap(), "{\n  \"cells\": []\n}");
    }

    #[test]
    fn missing_cells_is_rejected() {
        assert!(matches!(
            Notebook::parse(r#"{"metadata": {}}"#),
            Err(NotebookError::MissingCells)
        ));
    }

    #[test]
    fn invalid_json_is_rejected() {
        assert!(matches!(
            Notebook::parse("{not json"),
            Err(NotebookError::Parse(_))
        ));
    }

    #[test]
    fn missing_source_is_reported_with_cell_index() {
        let nb = Notebook::parse(r#"{"cells": [{"source": []}, {"cell_type": "raw"}]}"#).unwrap();
        assert!(matches!(
            nb.source(1),
            Err(NotebookError::MissingSource { cell: 1 })
        ));
    }

    #[test]
    fn non_text_source_is_rejected() {
        let nb = Notebook::parse(r#"{"cells": [{"source": [1, 2]}]}"#).unwrap();
        assert!(matches!(
            nb.source(0),
            Err(NotebookError::InvalidSource { cell: 0 })
        ));
    }

    #[test]
    fn save_creates_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book").join("intro.ipynb");

        notebook().save(&path).unwrap();

        let reloaded = Notebook::load(&path).unwrap();
        assert_eq!(reloaded, notebook());
    }
}
