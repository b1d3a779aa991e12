use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod import;
mod info;

/// sceload - Alevin Quantification Importer
#[derive(Parser)]
#[command(name = "sceload")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import an alevin quantification directory and write the assay bundle
    Import {
        /// Salmon output directory containing an `alevin/` subfolder
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output path for the bundle (defaults to <INPUT>/sce.json.gz)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Display dimensions and available matrices of a quantification directory
    Info {
        /// Salmon output directory containing an `alevin/` subfolder
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Import { input, output } => import::run(input, output),
        Commands::Info { input } => info::run(input),
    }
}
