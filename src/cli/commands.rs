//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "temple")]
#[command(about = "Lost Temple of Data adventure and expedition tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: ./temple.toml if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play the adventure menu (default)
    Play,

    /// Extract dates and secret codes from a journal file or directory
    Journal {
        /// Journal file or directory of .txt files (default: from config)
        path: Option<PathBuf>,
    },

    /// Preview tab-separated location notes
    Locations {
        /// Locations file (default: from config)
        path: Option<PathBuf>,

        /// Leading lines to skip before the header
        #[arg(long, value_name = "N")]
        skip_rows: Option<usize>,

        /// Number of rows to show
        #[arg(short, long, value_name = "N")]
        rows: Option<usize>,
    },

    /// Preview the artifact register sheet of a workbook
    Artifacts {
        /// Workbook file (default: from config)
        path: Option<PathBuf>,

        /// Sheet to read
        #[arg(long, value_name = "NAME")]
        sheet: Option<String>,

        /// Sheet rows to skip before the header
        #[arg(long, value_name = "N")]
        skip_rows: Option<usize>,

        /// Number of rows to show
        #[arg(short, long, value_name = "N")]
        rows: Option<usize>,
    },

    /// Load artifacts and location notes, then process the journal, in one run
    Survey,
}
