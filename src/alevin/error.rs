use std::io;
use std::path::PathBuf;

use super::decode::DecodeError;
use super::labels::LabelError;

/// Errors that can occur while importing an alevin quantification directory
///
/// Every variant is fatal; the on-disk layout is authoritative output of a
/// trusted upstream pipeline, so a failure means the pipeline was run or
/// configured wrongly, not a transient condition worth retrying.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// A mandatory output file is absent.
    #[error(
        "missing required file {path}: expected `quants_mat_rows.txt`, \
         `quants_mat_cols.txt` and `quants_mat.gz` under an `alevin` directory; \
         re-run the quantification pipeline preserving its output layout"
    )]
    MissingRequiredFile {
        /// Path that was expected to exist.
        path: PathBuf,
    },

    /// An index file could not be loaded.
    #[error(transparent)]
    Labels(#[from] LabelError),

    /// A matrix stream could not be decoded.
    #[error("failed to decode {path}: {source}")]
    Decode {
        /// Path of the stream being decoded.
        path: PathBuf,
        /// Underlying decode failure.
        source: DecodeError,
    },

    /// A matrix stream could not be opened.
    #[error("failed to open {path}: {source}")]
    Io {
        /// Path of the file being opened.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
