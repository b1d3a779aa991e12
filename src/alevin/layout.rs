//! On-disk layout of an alevin quantification directory.

use std::path::{Path, PathBuf};

use super::error::ImportError;

/// Subdirectory alevin writes its output into.
pub const ALEVIN_DIR: &str = "alevin";
/// Cell barcode index file (one barcode per line, column order).
pub const BARCODE_FILE: &str = "quants_mat_rows.txt";
/// Gene identifier index file (one gene per line, row order).
pub const GENE_FILE: &str = "quants_mat_cols.txt";
/// Compressed counts matrix stream.
pub const COUNTS_FILE: &str = "quants_mat.gz";
/// Optional compressed inferential-variance matrix stream.
pub const VARIANCE_FILE: &str = "quants_var_mat.gz";

/// Resolves the file roles of a quantification run under `<base>/alevin/`.
///
/// The layout is a fixed convention of the upstream producer; this type only
/// turns a base path into the four role paths and checks that the mandatory
/// three exist. It performs no reads.
#[derive(Debug, Clone)]
pub struct QuantLayout {
    dir: PathBuf,
}

impl QuantLayout {
    /// Resolve the layout rooted at `base` (the directory holding `alevin/`).
    pub fn new(base: impl AsRef<Path>) -> Self {
        Self {
            dir: base.as_ref().join(ALEVIN_DIR),
        }
    }

    /// Path of the cell barcode index file.
    pub fn barcodes_path(&self) -> PathBuf {
        self.dir.join(BARCODE_FILE)
    }

    /// Path of the gene identifier index file.
    pub fn genes_path(&self) -> PathBuf {
        self.dir.join(GENE_FILE)
    }

    /// Path of the counts matrix stream.
    pub fn counts_path(&self) -> PathBuf {
        self.dir.join(COUNTS_FILE)
    }

    /// Path of the inferential-variance matrix stream.
    pub fn variance_path(&self) -> PathBuf {
        self.dir.join(VARIANCE_FILE)
    }

    /// Whether the optional variance stream is present.
    pub fn has_variance(&self) -> bool {
        self.variance_path().is_file()
    }

    /// Check that the three mandatory files exist.
    ///
    /// Fails on the first missing file, naming its path; the variance stream
    /// is optional and not checked here.
    pub fn validate(&self) -> Result<(), ImportError> {
        for path in [self.barcodes_path(), self.genes_path(), self.counts_path()] {
            if !path.is_file() {
                return Err(ImportError::MissingRequiredFile { path });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_role_paths() {
        let layout = QuantLayout::new("run1");
        assert_eq!(
            layout.counts_path(),
            Path::new("run1").join("alevin").join("quants_mat.gz")
        );
        assert_eq!(
            layout.barcodes_path(),
            Path::new("run1").join("alevin").join("quants_mat_rows.txt")
        );
    }
}
