//! # Alevin Output Import
//!
//! This module reads the quantification output that salmon alevin leaves on
//! disk and reconstructs it as labeled in-memory matrices.
//!
//! The on-disk format is positional: the binary stream in `quants_mat.gz`
//! carries no dimensions or labels of its own. Both are declared out-of-band
//! by the two text index files, so the import is strictly sequential; the
//! barcode and gene counts must be known before a single byte of the stream
//! can be interpreted.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sceload::alevin::import_quants;
//!
//! let quants = import_quants("salmon.dir/sample1")?;
//! println!(
//!     "{} genes x {} cells, variance: {}",
//!     quants.genes.len(),
//!     quants.cells.len(),
//!     quants.matrices.variance().is_some()
//! );
//! # Ok::<(), sceload::alevin::ImportError>(())
//! ```

mod decode;
mod error;
mod import;
mod labels;
mod layout;

pub use decode::{decode_matrix, DecodeError};
pub use error::ImportError;
pub use import::{import_quants, AlevinQuants, QuantMatrices};
pub use labels::{LabelError, LabelSet};
pub use layout::QuantLayout;
