//! # sceload - Alevin Quantification Import
//!
//! `sceload` turns the on-disk output of a salmon alevin quantification run
//! into an in-memory gene-by-cell expression matrix and packages it, together
//! with a derived log-transformed assay, into a `SingleCellExperiment`-style
//! container.
//!
//! ## Key Features
//!
//! - **Positional binary decoding**: Reconstructs alevin's gzip-compressed
//!   stream of little-endian 64-bit floats into a dense gene-by-cell matrix,
//!   with the dimensions declared out-of-band in the barcode and gene index
//!   files.
//!
//! - **Structural validation**: The index files and the binary stream are
//!   cross-checked before any value is interpreted; a truncated or corrupt
//!   stream is reported as such, never as a silently wrong matrix.
//!
//! - **Inferential variance support**: When the quantification run produced
//!   an inferential-replicate variance matrix, it is decoded with the same
//!   extents as the counts and carried alongside them.
//!
//! - **Derived assays**: A `logcounts` assay (`log2(x + 1)` of the counts)
//!   is computed at container construction time.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sceload::alevin::import_quants;
//! use sceload::sce::SingleCellExperiment;
//!
//! // Import from a salmon output directory containing an `alevin/` subfolder
//! let quants = import_quants("salmon.dir/sample1")?;
//! let sce = SingleCellExperiment::from_quants(quants);
//!
//! println!("{} genes x {} cells", sce.n_genes(), sce.n_cells());
//! for name in sce.assay_names() {
//!     println!("assay: {}", name);
//! }
//! # Ok::<(), sceload::alevin::ImportError>(())
//! ```
//!
//! ## Expected Input Layout
//!
//! ```text
//! <input>/
//! └── alevin/
//!     ├── quants_mat_rows.txt   # cell barcodes, one per line (column order)
//!     ├── quants_mat_cols.txt   # gene identifiers, one per line (row order)
//!     ├── quants_mat.gz         # counts: gzip, column-major f64 LE
//!     └── quants_var_mat.gz     # optional inferential variance, same layout
//! ```
//!
//! ## Architecture
//!
//! - [`alevin`]: index loading, binary stream decoding, and matrix assembly
//! - [`matrix`]: the dense column-major matrix type shared by all assays
//! - [`sce`]: the assay container and the log transform
//! - [`export`]: persistence of the container as a gzipped JSON document

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod alevin;
pub mod export;
pub mod matrix;
pub mod sce;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::alevin::{
        decode_matrix, import_quants, AlevinQuants, DecodeError, ImportError, LabelError,
        LabelSet, QuantLayout, QuantMatrices,
    };
    pub use crate::export::{write_sce, ExportError};
    pub use crate::matrix::Matrix;
    pub use crate::sce::{assay, log2_transform, SingleCellExperiment};
}
