//! Binary matrix stream decoding.
//!
//! Alevin stores the quantification matrix as a gzip-compressed stream of
//! little-endian 64-bit floats with no framing of its own. The decoding
//! pipeline is:
//!
//! 1. Decompress the gzip stream
//! 2. Consume one contiguous run of `genes` values per cell (column-major)
//! 3. Assemble the runs into a dense gene-by-cell matrix
//!
//! The value count is dictated entirely by the caller-supplied extents; the
//! stream is read exactly to `genes * cells` values and no further, except
//! for a one-byte probe that detects (and tolerates) trailing content.

use std::io::{self, BufReader, Read};

use byteorder::{LittleEndian, ReadBytesExt};
use flate2::read::GzDecoder;
use log::warn;

use crate::matrix::Matrix;

/// Errors that can occur during binary matrix decoding
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The stream ended before `rows * cols` values were read.
    #[error("truncated matrix stream: expected {expected} values, got {actual}")]
    TruncatedStream {
        /// Values required by the declared extents.
        expected: usize,
        /// Values actually present.
        actual: usize,
    },

    /// The byte source could not be interpreted as a gzip stream.
    #[error("invalid compressed stream: {0}")]
    Format(#[source] io::Error),
}

/// Decode a gzip-compressed column-major f64 stream into a matrix.
///
/// `genes` is the row extent and `cells` the column extent; the stream must
/// hold at least `genes * cells` little-endian 64-bit floats, with each
/// cell's gene values arriving as one contiguous run. Trailing bytes past
/// the final value are ignored (logged at warn level), matching the upstream
/// producer which does not pad or frame the stream.
///
/// Zero extents yield an empty matrix without touching the source at all.
/// The source is consumed to the final value or to the first failure and
/// released on every path.
pub fn decode_matrix<R: Read>(
    source: R,
    genes: usize,
    cells: usize,
) -> Result<Matrix, DecodeError> {
    let expected = genes * cells;
    if expected == 0 {
        return Ok(Matrix::from_column_major(genes, cells, Vec::new()));
    }

    let mut reader = BufReader::new(GzDecoder::new(source));
    let mut data = Vec::with_capacity(expected);

    while data.len() < expected {
        match reader.read_f64::<LittleEndian>() {
            Ok(value) => data.push(value),
            Err(source) if source.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(DecodeError::TruncatedStream {
                    expected,
                    actual: data.len(),
                });
            }
            Err(source) => return Err(DecodeError::Format(source)),
        }
    }

    let mut probe = [0u8; 1];
    if matches!(reader.read(&mut probe), Ok(n) if n > 0) {
        warn!(
            "matrix stream holds data past the declared {} values; ignoring trailing bytes",
            expected
        );
    }

    Ok(Matrix::from_column_major(genes, cells, data))
}
