use anyhow::{Context, Result};
use std::path::PathBuf;

use sceload::alevin::{LabelSet, QuantLayout};

/// Display dimensions and available matrices without decoding the streams
pub fn run(input: PathBuf) -> Result<()> {
    let layout = QuantLayout::new(&input);
    layout.validate().context("not a usable alevin directory")?;

    let cells = LabelSet::from_file(&layout.barcodes_path())
        .context("failed to load cell barcodes")?;
    let genes = LabelSet::from_file(&layout.genes_path())
        .context("failed to load gene identifiers")?;

    println!("Alevin Quantification Directory");
    println!("===============================");
    println!("Path:  {}", input.display());
    println!();
    println!("Genes: {}", genes.len());
    println!("Cells: {}", cells.len());
    println!(
        "Inferential variance: {}",
        if layout.has_variance() { "present" } else { "absent" }
    );

    Ok(())
}
