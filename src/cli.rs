use clap::Parser;
use std::path::PathBuf;

/// Sizewise - rank files and folders by size, mark and delete them
#[derive(Parser, Debug)]
#[command(name = "sizewise")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Show sizes in binary units (KiB, MiB)
    #[arg(long)]
    pub binary: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH", env = "SIZEWISE_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}
