use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use ramanplate::writer::Delimiter;

mod check;
mod demux;
mod describe;
mod order;
mod tabulate;

mod config;

pub use config::Config;

/// ramanplate - Raman multiwell plate demultiplexing and tabulation
#[derive(Parser)]
#[command(name = "ramanplate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Column separator for written well files.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DelimiterArg {
    /// Tab-separated, no header
    Tab,
    /// Comma-separated with a header row
    Comma,
}

impl From<DelimiterArg> for Delimiter {
    fn from(arg: DelimiterArg) -> Self {
        match arg {
            DelimiterArg::Tab => Delimiter::Tab,
            DelimiterArg::Comma => Delimiter::Comma,
        }
    }
}

/// Naming flags shared by several commands.
#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct NamingArgs {
    /// Zero-pad well labels (A01 instead of A1)
    #[arg(long)]
    zero_pad: bool,

    /// Append the capture position to sample labels
    #[arg(long)]
    positions: bool,
}

/// Catalog flags shared by several commands.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct CatalogArgs {
    /// Extra plate tables (TOML) merged over the built-in catalog
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Fall back to polymer "N/A" and loading 0 for wells missing from the catalog
    #[arg(long)]
    lenient: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Split multiwell exports into one spectrum file per well
    Demux {
        /// Multiwell export files (plate<N>_<C>mgml_multiwell.txt)
        #[arg(value_name = "EXPORT", required = true)]
        exports: Vec<PathBuf>,

        /// Output folder (defaults to the export's folder)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Column separator of the written files
        #[arg(short, long, value_enum)]
        delimiter: Option<DelimiterArg>,

        /// Zero-pad well labels in file names
        #[arg(long)]
        zero_pad: bool,

        /// Skip the Latin-1 to UTF-8 rewrite of the exports
        #[arg(long)]
        keep_encoding: bool,
    },

    /// Print the canonical order and labels of a folder's files
    Order {
        /// Folder to list (defaults to the configured analysis folder)
        #[arg(value_name = "DIR")]
        folder: Option<PathBuf>,

        #[command(flatten)]
        naming: NamingArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the experimental identity of spectrum files
    Describe {
        /// Well file names
        #[arg(value_name = "FILE", required = true)]
        files: Vec<String>,

        #[command(flatten)]
        catalog: CatalogArgs,

        /// Zero-pad well labels
        #[arg(long)]
        zero_pad: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Build the spectral matrix and sample table for PCA
    Tabulate {
        /// Folder of well files (defaults to the configured analysis folder)
        #[arg(value_name = "DIR")]
        folder: Option<PathBuf>,

        /// Output folder (defaults to the configured output folder)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[command(flatten)]
        catalog: CatalogArgs,

        /// Demultiplex multiwell exports in the folder first
        #[arg(long)]
        demux: bool,
    },

    /// Check a folder for naming, catalog and axis problems
    Check {
        /// Folder to check (defaults to the configured analysis folder)
        #[arg(value_name = "DIR")]
        folder: Option<PathBuf>,

        #[command(flatten)]
        catalog: CatalogArgs,
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
    let mut config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Demux {
            exports,
            output,
            delimiter,
            zero_pad,
            keep_encoding,
        } => {
            if let Some(delimiter) = delimiter {
                config.naming.delimiter = delimiter.into();
            }
            config.naming.zero_pad |= zero_pad;
            demux::run(exports, output, &config, !keep_encoding)
        }
        Commands::Order {
            folder,
            naming,
            json,
        } => {
            config.apply_naming(naming);
            order::run(folder, &config, json)
        }
        Commands::Describe {
            files,
            catalog,
            zero_pad,
            json,
        } => {
            config.apply_catalog(catalog);
            config.naming.zero_pad |= zero_pad;
            describe::run(files, &config, json)
        }
        Commands::Tabulate {
            folder,
            output,
            catalog,
            demux,
        } => {
            config.apply_catalog(catalog);
            tabulate::run(folder, output, &config, demux)
        }
        Commands::Check { folder, catalog } => {
            config.apply_catalog(catalog);
            check::run(folder, &config)
        }
    }
}
