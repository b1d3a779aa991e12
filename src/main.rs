//! # sceload
//!
//! Command-line entry point for importing salmon alevin quantification
//! output into a `SingleCellExperiment`-style assay bundle.
//!
//! ## Usage
//!
//! ```bash
//! # Import an alevin directory, writing <dir>/sce.json.gz
//! sceload import salmon.dir/sample1
//!
//! # Inspect dimensions without decoding the matrix stream
//! sceload info salmon.dir/sample1
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
