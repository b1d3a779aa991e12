//! Matrix assembly.
//!
//! Orchestrates the index loader and the stream decoder against a
//! quantification directory: both index files are read first, the counts
//! stream is decoded with extents derived from them, and the variance stream
//! (when present) is decoded with the exact same extents. All-or-nothing; no
//! partial result ever leaves this module.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info};

use super::decode::decode_matrix;
use super::error::ImportError;
use super::labels::LabelSet;
use super::layout::QuantLayout;
use crate::matrix::Matrix;

/// Decoded matrices of one quantification run.
///
/// The variant is chosen once, by a file-existence check at import time;
/// downstream consumers match on it instead of re-probing the directory.
#[derive(Debug, Clone)]
pub enum QuantMatrices {
    /// Counts only; the run produced no inferential-variance stream.
    Counts(Matrix),
    /// Counts paired with an inferential-variance matrix of identical shape.
    WithVariance {
        /// Estimated counts.
        counts: Matrix,
        /// Inferential-replicate variance per gene and cell.
        variance: Matrix,
    },
}

impl QuantMatrices {
    /// The counts matrix.
    pub fn counts(&self) -> &Matrix {
        match self {
            QuantMatrices::Counts(counts) => counts,
            QuantMatrices::WithVariance { counts, .. } => counts,
        }
    }

    /// The variance matrix, when the run produced one.
    pub fn variance(&self) -> Option<&Matrix> {
        match self {
            QuantMatrices::Counts(_) => None,
            QuantMatrices::WithVariance { variance, .. } => Some(variance),
        }
    }
}

/// A fully imported quantification run: labels plus decoded matrices.
///
/// The label sets are behind `Arc` so the container built from this value
/// shares them read-only with every assay instead of re-labeling per matrix.
#[derive(Debug, Clone)]
pub struct AlevinQuants {
    /// Gene identifiers, in matrix row order.
    pub genes: Arc<LabelSet>,
    /// Cell barcodes, in matrix column order.
    pub cells: Arc<LabelSet>,
    /// The decoded matrix or matrix pair.
    pub matrices: QuantMatrices,
}

impl AlevinQuants {
    /// Number of genes (matrix rows).
    pub fn n_genes(&self) -> usize {
        self.genes.len()
    }

    /// Number of cells (matrix columns).
    pub fn n_cells(&self) -> usize {
        self.cells.len()
    }
}

/// Import the quantification output rooted at `base`.
///
/// Expects the alevin layout under `<base>/alevin/`; see [`QuantLayout`] for
/// the file roles. The three mandatory files are checked up front so a
/// misconfigured run fails before any decoding work. Both decode calls
/// receive extents derived once from the same label sets, which is what
/// guarantees counts and variance always agree dimensionally.
pub fn import_quants(base: impl AsRef<Path>) -> Result<AlevinQuants, ImportError> {
    let layout = QuantLayout::new(base);
    layout.validate()?;

    let cells = Arc::new(LabelSet::from_file(&layout.barcodes_path())?);
    let genes = Arc::new(LabelSet::from_file(&layout.genes_path())?);
    info!(
        "importing {} genes x {} cells from {}",
        genes.len(),
        cells.len(),
        layout.counts_path().display()
    );

    let counts = decode_stream(&layout.counts_path(), genes.len(), cells.len())?;

    let matrices = if layout.has_variance() {
        debug!(
            "decoding inferential variance from {}",
            layout.variance_path().display()
        );
        let variance = decode_stream(&layout.variance_path(), genes.len(), cells.len())?;
        QuantMatrices::WithVariance { counts, variance }
    } else {
        QuantMatrices::Counts(counts)
    };

    Ok(AlevinQuants {
        genes,
        cells,
        matrices,
    })
}

fn decode_stream(path: &Path, genes: usize, cells: usize) -> Result<Matrix, ImportError> {
    let file = File::open(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_matrix(BufReader::new(file), genes, cells).map_err(|source| ImportError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
