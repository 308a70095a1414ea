// src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::options::OutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "bklml_ff",
    version = crate::VERSION,
    about = "BenjaminKalb Localizations Markup Language File Finder (BKLML File Finder)",
    after_help = include_str!("../usage.txt")
)]
pub struct Args {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".", value_hint = ValueHint::DirPath)]
    pub directory: PathBuf,

    /// Show detailed info: version and description for each file
    #[arg(long, short = 'd')]
    pub details: bool,

    /// Do not scan subdirectories (default: recursive)
    #[arg(long)]
    pub no_recursive: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}
