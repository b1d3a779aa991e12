//! # Assay Container
//!
//! Packages the imported matrices into a `SingleCellExperiment`-style value:
//! named assays over one shared pair of label sets. Construction derives a
//! `logcounts` assay from the counts; after that the container is immutable.

use std::sync::Arc;

use crate::alevin::{AlevinQuants, LabelSet, QuantMatrices};
use crate::matrix::Matrix;

/// Well-known assay names
pub mod assay {
    /// Estimated counts, exactly as decoded.
    pub const COUNTS: &str = "counts";
    /// `log2(counts + 1)`, derived at container construction.
    pub const LOGCOUNTS: &str = "logcounts";
    /// Inferential-replicate variance, stored untransformed.
    pub const VARIANCE: &str = "variance";
}

/// Element-wise `log2(x + 1)` over a matrix.
///
/// `log2(0 + 1) = 0`, so zero counts stay zero. Values are neither clamped
/// nor rounded; NaN or negative inputs propagate into the result unchanged
/// in meaning (`log2` of a negative argument is NaN).
pub fn log2_transform(matrix: &Matrix) -> Matrix {
    matrix.map(|v| (v + 1.0).log2())
}

/// Named assays sharing one gene/cell label pair.
///
/// Holds `counts` and `logcounts`, plus `variance` when the quantification
/// run produced an inferential-variance stream. The variance assay is kept
/// untransformed; only the counts receive a derived assay. All assays have
/// identical dimensions and index into the same label sets.
#[derive(Debug, Clone)]
pub struct SingleCellExperiment {
    genes: Arc<LabelSet>,
    cells: Arc<LabelSet>,
    assays: Vec<(&'static str, Matrix)>,
}

impl SingleCellExperiment {
    /// Build the container from an imported quantification run.
    ///
    /// Consumes the import result: the counts move into the `counts` assay,
    /// the `logcounts` assay is computed from them, and a variance matrix
    /// (when present) becomes the `variance` assay as-is.
    pub fn from_quants(quants: AlevinQuants) -> Self {
        let AlevinQuants {
            genes,
            cells,
            matrices,
        } = quants;

        let logcounts = log2_transform(matrices.counts());
        let assays = match matrices {
            QuantMatrices::Counts(counts) => {
                vec![(assay::COUNTS, counts), (assay::LOGCOUNTS, logcounts)]
            }
            QuantMatrices::WithVariance { counts, variance } => vec![
                (assay::COUNTS, counts),
                (assay::LOGCOUNTS, logcounts),
                (assay::VARIANCE, variance),
            ],
        };

        Self {
            genes,
            cells,
            assays,
        }
    }

    /// Look up an assay by name.
    pub fn assay(&self, name: &str) -> Option<&Matrix> {
        self.assays
            .iter()
            .find(|(assay_name, _)| *assay_name == name)
            .map(|(_, matrix)| matrix)
    }

    /// Assay names, in container order.
    pub fn assay_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.assays.iter().map(|(name, _)| *name)
    }

    /// Iterate over `(name, matrix)` pairs in container order.
    pub fn assays(&self) -> impl Iterator<Item = (&'static str, &Matrix)> {
        self.assays.iter().map(|(name, matrix)| (*name, matrix))
    }

    /// Gene identifiers shared by every assay's rows.
    pub fn genes(&self) -> &LabelSet {
        &self.genes
    }

    /// Cell barcodes shared by every assay's columns.
    pub fn cells(&self) -> &LabelSet {
        &self.cells
    }

    /// Number of genes.
    pub fn n_genes(&self) -> usize {
        self.genes.len()
    }

    /// Number of cells.
    pub fn n_cells(&self) -> usize {
        self.cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label_set(names: &[&str]) -> Arc<LabelSet> {
        Arc::new(LabelSet::new(names.iter().map(|s| s.to_string()).collect()))
    }

    fn quants_without_variance() -> AlevinQuants {
        AlevinQuants {
            genes: label_set(&["GeneA", "GeneB"]),
            cells: label_set(&["C1", "C2", "C3"]),
            matrices: QuantMatrices::Counts(Matrix::from_column_major(
                2,
                3,
                vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            )),
        }
    }

    #[test]
    fn transform_anchor_points() {
        let m = Matrix::from_column_major(1, 3, vec![0.0, 1.0, 3.0]);
        let t = log2_transform(&m);
        assert_eq!(t.get(0, 0), 0.0);
        assert_eq!(t.get(0, 1), 1.0);
        assert_eq!(t.get(0, 2), 2.0);
    }

    #[test]
    fn transform_is_monotonic() {
        let m = Matrix::from_column_major(1, 5, vec![0.0, 0.5, 1.0, 10.0, 1000.0]);
        let t = log2_transform(&m);
        for i in 1..5 {
            assert!(t.get(0, i) >= t.get(0, i - 1));
        }
    }

    #[test]
    fn nan_propagates_through_transform() {
        let m = Matrix::from_column_major(1, 2, vec![f64::NAN, -2.0]);
        let t = log2_transform(&m);
        assert!(t.get(0, 0).is_nan());
        // log2(-2 + 1) = log2(-1) = NaN
        assert!(t.get(0, 1).is_nan());
    }

    #[test]
    fn counts_only_container() {
        let sce = SingleCellExperiment::from_quants(quants_without_variance());

        assert_eq!(
            sce.assay_names().collect::<Vec<_>>(),
            vec![assay::COUNTS, assay::LOGCOUNTS]
        );
        assert!(sce.assay(assay::VARIANCE).is_none());
        assert_eq!(sce.n_genes(), 2);
        assert_eq!(sce.n_cells(), 3);

        let logcounts = sce.assay(assay::LOGCOUNTS).unwrap();
        assert_eq!(logcounts.get(0, 0), 2.0f64.log2());
        assert_eq!(logcounts.get(1, 0), 3.0f64.log2());
    }

    #[test]
    fn variance_is_stored_untransformed() {
        let counts = Matrix::from_column_major(1, 2, vec![3.0, 7.0]);
        let variance = Matrix::from_column_major(1, 2, vec![0.25, 0.5]);
        let quants = AlevinQuants {
            genes: label_set(&["GeneA"]),
            cells: label_set(&["C1", "C2"]),
            matrices: QuantMatrices::WithVariance { counts, variance },
        };

        let sce = SingleCellExperiment::from_quants(quants);
        assert_eq!(
            sce.assay_names().collect::<Vec<_>>(),
            vec![assay::COUNTS, assay::LOGCOUNTS, assay::VARIANCE]
        );
        assert_eq!(sce.assay(assay::VARIANCE).unwrap().values(), &[0.25, 0.5]);
    }

    #[test]
    fn all_assays_share_shape() {
        let sce = SingleCellExperiment::from_quants(quants_without_variance());
        let shape = (sce.n_genes(), sce.n_cells());
        for (_, matrix) in sce.assays() {
            assert_eq!(matrix.shape(), shape);
        }
    }
}
