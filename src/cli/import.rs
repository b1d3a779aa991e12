use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use sceload::alevin::import_quants;
use sceload::export::write_sce;
use sceload::sce::SingleCellExperiment;

/// Import an alevin quantification directory and write the assay bundle
pub fn run(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    if !input.is_dir() {
        anyhow::bail!("input directory does not exist: {}", input.display());
    }

    let output = output.unwrap_or_else(|| input.join("sce.json.gz"));

    info!("sceload - alevin import");
    info!("Input:  {}", input.display());
    info!("Output: {}", output.display());

    let quants = import_quants(&input).context("alevin import failed")?;
    info!(
        "decoded counts matrix: {} genes x {} cells, variance: {}",
        quants.n_genes(),
        quants.n_cells(),
        if quants.matrices.variance().is_some() {
            "present"
        } else {
            "absent"
        }
    );

    let sce = SingleCellExperiment::from_quants(quants);
    write_sce(&output, &sce).context("failed to write assay bundle")?;

    info!("done: {}", output.display());
    Ok(())
}
