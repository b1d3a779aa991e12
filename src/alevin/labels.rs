//! Index file loading.
//!
//! Alevin declares the matrix dimensions out-of-band in two text files, one
//! identifier per line. Line order defines the axis index used by the binary
//! decoder, so the content is passed through untouched: no trimming beyond
//! line splitting, no deduplication, no case normalization.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Errors that can occur while loading an index file
#[derive(Debug, thiserror::Error)]
pub enum LabelError {
    /// The index file is absent.
    #[error("missing index file: {path}")]
    MissingIndexFile {
        /// Path that was expected to exist.
        path: PathBuf,
    },

    /// The index file exists but could not be read.
    #[error("failed to read index file {path}: {source}")]
    Io {
        /// Path of the file being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// An ordered list of axis identifiers (cell barcodes or gene names).
///
/// The position of an identifier is its axis index; duplicates are kept
/// as-is since they come from an upstream pipeline that owns the naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    /// Wrap an already-ordered list of identifiers.
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Load a newline-delimited identifier file.
    pub fn from_file(path: &Path) -> Result<LabelSet, LabelError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                return Err(LabelError::MissingIndexFile {
                    path: path.to_path_buf(),
                })
            }
            Err(source) => {
                return Err(LabelError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let mut labels = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|source| LabelError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            labels.push(line);
        }

        Ok(Self { labels })
    }

    /// Number of identifiers.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Identifier at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Iterate over the identifiers in axis order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// The identifiers as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }
}
