use clap::{Parser, Subcommand};
use std::path::PathBuf;

use bug_portal::application::dto::{OutputFormat, DEFAULT_ROWS_PER_PAGE};

/// Query bug lists, bug stats and build links of distribution packages
#[derive(Parser, Debug)]
#[command(name = "bug-portal")]
#[command(version)]
#[command(about = "Query bug lists, bug stats and build links of distribution packages", long_about = None)]
pub struct Args {
    /// Path to a config file (defaults to ./bug-portal.config.yml if present)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Output format: json or text (overrides the config file)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show one page of the open bugs of a package
    Bugs {
        /// Package (component) name
        #[arg(short, long)]
        package: String,

        /// Collection (product) name, e.g. "Fedora" or "Fedora EPEL"
        #[arg(short = 'C', long)]
        collection: String,

        /// Collection version, e.g. "20" or "rawhide"
        #[arg(short = 'V', long)]
        version: String,

        /// Index of the first row to show
        #[arg(long, default_value_t = 0)]
        start_row: usize,

        /// Number of rows to show
        #[arg(long, default_value_t = DEFAULT_ROWS_PER_PAGE)]
        rows: usize,
    },

    /// Show aggregate bug counts of a package
    Stats {
        /// Package (component) name
        #[arg(short, long)]
        package: String,
    },

    /// Show build-system links of a package
    Builds {
        /// Package name
        #[arg(short, long)]
        package: String,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
