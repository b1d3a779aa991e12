//! # Container Export
//!
//! Persists a [`SingleCellExperiment`] as a gzip-compressed JSON document so
//! downstream analysis environments can pick it up without this crate. The
//! document holds the format version, both label sets, and every assay as a
//! column-major value array.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use log::info;
use serde::Serialize;

use crate::alevin::LabelSet;
use crate::matrix::Matrix;
use crate::sce::SingleCellExperiment;

/// Version tag written into every exported document.
pub const FORMAT_VERSION: &str = "1.0";

/// Errors that can occur while exporting a container
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The output file could not be created or written.
    #[error("failed to write {path}: {source}")]
    Io {
        /// Path of the file being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The container could not be serialized.
    #[error("failed to serialize container: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct SceDocument<'a> {
    format_version: &'static str,
    genes: &'a LabelSet,
    cells: &'a LabelSet,
    assays: BTreeMap<&'a str, &'a Matrix>,
}

/// Write `sce` to `path` as gzipped JSON.
pub fn write_sce(path: impl AsRef<Path>, sce: &SingleCellExperiment) -> Result<(), ExportError> {
    let path = path.as_ref();
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let document = SceDocument {
        format_version: FORMAT_VERSION,
        genes: sce.genes(),
        cells: sce.cells(),
        assays: sce.assays().collect(),
    };

    let file = File::create(path).map_err(io_err)?;
    let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
    serde_json::to_writer(&mut encoder, &document)?;
    let mut inner = encoder.finish().map_err(io_err)?;
    inner.flush().map_err(io_err)?;

    info!(
        "wrote {} assays ({} genes x {} cells) to {}",
        sce.assay_names().count(),
        sce.n_genes(),
        sce.n_cells(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alevin::{AlevinQuants, QuantMatrices};
    use flate2::read::GzDecoder;
    use serde_json::Value;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn sample_sce() -> SingleCellExperiment {
        let quants = AlevinQuants {
            genes: Arc::new(LabelSet::new(vec!["GeneA".into(), "GeneB".into()])),
            cells: Arc::new(LabelSet::new(vec!["C1".into(), "C2".into()])),
            matrices: QuantMatrices::Counts(Matrix::from_column_major(
                2,
                2,
                vec![0.0, 1.0, 3.0, 7.0],
            )),
        };
        SingleCellExperiment::from_quants(quants)
    }

    #[test]
    fn exported_document_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sce.json.gz");

        write_sce(&path, &sample_sce()).unwrap();

        let file = File::open(&path).unwrap();
        let document: Value = serde_json::from_reader(GzDecoder::new(file)).unwrap();

        assert_eq!(document["format_version"], FORMAT_VERSION);
        assert_eq!(document["genes"][0], "GeneA");
        assert_eq!(document["cells"][1], "C2");

        let counts = &document["assays"]["counts"];
        assert_eq!(counts["rows"], 2);
        assert_eq!(counts["cols"], 2);
        assert_eq!(counts["values"][2], 3.0);

        // log2(3 + 1) = 2
        assert_eq!(document["assays"]["logcounts"]["values"][2], 2.0);
        assert!(document["assays"].get("variance").is_none());
    }

    #[test]
    fn unwritable_path_reports_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("sce.json.gz");

        let err = write_sce(&path, &sample_sce()).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
